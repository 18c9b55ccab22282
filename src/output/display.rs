//! Display functions for command results

use super::formatters::{position_marks, rule};
use crate::commands::{Diagnostic, ExplainResult, FilterReport};
use colored::Colorize;

/// Print a recoverable problem to stderr
pub fn print_diagnostic(diagnostic: &Diagnostic) {
    eprintln!("{} {diagnostic}", "ERROR:".red().bold());
}

/// Print the result of a filter run
///
/// Diagnostics go to stderr; the match count and one match per line go to stdout.
pub fn print_filter_report(report: &FilterReport) {
    for diagnostic in &report.diagnostics {
        print_diagnostic(diagnostic);
    }

    println!("{}", rule(60).cyan());
    println!(" {} ", "Wordle Tool".bright_cyan().bold());
    if let Some(constraints) = &report.constraints {
        println!(" {}", constraints.to_string().bright_black());
    }
    println!("{}", rule(60).cyan());

    println!(
        "Number of matches: {} (of {} candidates)",
        report.matches.len().to_string().bright_yellow().bold(),
        report.total_candidates
    );
    for word in &report.matches {
        println!("{word}");
    }
}

/// Print the result of explaining a word
pub fn print_explanation(result: &ExplainResult) {
    println!("\n{}", rule(60).cyan());
    println!(
        "Checking: {}",
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!(" {}", result.constraints.to_string().bright_black());
    println!("{}", rule(60).cyan());

    println!(
        "\n  {}\n  {}",
        result.word,
        position_marks(&result.word, &result.constraints)
    );

    println!();
    match &result.verdict {
        Ok(()) => println!("{}", "✅ Matches all constraints".green().bold()),
        Err(rejection) => println!("{}", format!("❌ Rejected: {rejection}").red().bold()),
    }
}
