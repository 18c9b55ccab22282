//! Word list loading utilities
//!
//! Reads dictionary lines and normalizes them into candidate words.

use crate::core::Word;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Error type for dictionary loading
#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Dictionary file {} does not exist", path.display())
            }
            Self::Io(err) => write!(f, "Failed to read dictionary: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Normalize one dictionary line into a candidate word
///
/// The line is trimmed and lowercased; anything not exactly 5 characters long is skipped.
#[must_use]
pub fn normalize_line(line: &str) -> Option<Word> {
    Word::new(line.trim()).ok()
}

/// Read candidate words from any line source, keeping file order
///
/// Lines that are not valid UTF-8 are decoded lossily rather than failing the read.
///
/// # Errors
///
/// Returns an I/O error if the underlying reader fails.
pub fn read_words<R: BufRead>(mut reader: R) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if let Some(word) = normalize_line(&String::from_utf8_lossy(&buf)) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load words from a file
///
/// The file is read start to finish and closed before returning.
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the path does not name a regular file, or
/// `LoadError::Io` if it cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("solutionsNYT.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;

    Ok(read_words(BufReader::new(file))?)
}

/// Convert a string slice to a Word vector, applying the same normalization as files
///
/// # Examples
/// ```
/// use wordle_filter::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Crest", " ogres ", "abc"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|s| normalize_line(s)).collect()
}
