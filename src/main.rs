//! Wordle Filter - CLI
//!
//! Lists every dictionary word consistent with the feedback observed so far.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordle_filter::{
    commands::{ConstraintConfig, FilterConfig, explain_word, parse_misplaced, run_filter},
    output::{print_explanation, print_filter_report},
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Find all dictionary words consistent with Wordle feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "solutionsNYT.txt")]
    dictionary: PathBuf,

    #[command(flatten)]
    constraints: ConstraintArgs,
}

#[derive(Args)]
struct ConstraintArgs {
    /// Letters known NOT to be in the word (gray)
    #[arg(short, long, global = true, default_value = "")]
    absent: String,

    /// Comma-separated letters per position that are in the word but not there (yellow),
    /// e.g. ",ec,,,e"
    #[arg(
        short,
        long,
        global = true,
        default_value = ",,,,",
        allow_hyphen_values = true
    )]
    misplaced: String,

    /// Letters known at exact positions (green); any non-letter is a wildcard, e.g. "---s-"
    #[arg(
        short,
        long,
        global = true,
        default_value = "-----",
        allow_hyphen_values = true
    )]
    exact: String,
}

impl ConstraintArgs {
    fn into_config(self) -> ConstraintConfig {
        ConstraintConfig::new(self.absent, parse_misplaced(&self.misplaced), self.exact)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all matching words (default)
    Filter,

    /// Explain why a specific word does or does not match
    Explain {
        /// Word to check
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let constraints = cli.constraints.into_config();

    // Default to Filter mode if no command given
    let command = cli.command.unwrap_or(Commands::Filter);

    match command {
        Commands::Filter => run_filter_command(cli.dictionary, constraints),
        Commands::Explain { word } => run_explain_command(&word, &constraints),
    }
}

fn run_filter_command(dictionary: PathBuf, constraints: ConstraintConfig) -> Result<()> {
    let config = FilterConfig::new(dictionary, constraints);
    let report = run_filter(&config)
        .with_context(|| format!("Failed to load {}", config.dictionary.display()))?;

    print_filter_report(&report);
    Ok(())
}

fn run_explain_command(word: &str, constraints: &ConstraintConfig) -> Result<()> {
    let result = explain_word(word, constraints).map_err(|e| anyhow::anyhow!(e))?;
    print_explanation(&result);
    Ok(())
}
