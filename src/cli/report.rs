//! Report formatting and printing utilities.
//!
//! Prints the outcome of a push or init run in the same colored,
//! cargo-style voice as the rest of the glot tooling. Separate from the
//! command logic so output can be captured in tests.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, PushSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Push(summary) => print_push(summary, verbose, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_push<W: Write>(summary: &PushSummary, verbose: bool, writer: &mut W) {
    if summary.files.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            "No message files matched the glob pattern.".yellow()
        );
        return;
    }

    let local_keys: usize = summary.files.iter().map(|f| f.key_count).sum();
    let _ = writeln!(
        writer,
        "Found {} language file(s) with {} key(s); {} key(s) already in Lokalise",
        summary.files.len(),
        local_keys,
        summary.remote_key_count
    );

    if verbose {
        for file in &summary.files {
            let _ = writeln!(
                writer,
                "    {} ({}): {} key(s), {} new",
                file.path.display(),
                file.language,
                file.key_count,
                file.new_count
            );
        }
        if summary.remote_skipped_count > 0 {
            let _ = writeln!(
                writer,
                "    {} remote key(s) without the configured key name property were ignored",
                summary.remote_skipped_count
            );
        }
    }

    if summary.new_keys.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All local keys already exist in Lokalise - nothing to upload".green()
        );
        return;
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {} key(s) in Lokalise", summary.new_keys.len()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} key(s):",
            "Would create".yellow().bold(),
            summary.new_keys.len()
        );
        for key in &summary.new_keys {
            let languages: Vec<&str> = key
                .translations
                .iter()
                .map(|t| t.language_iso.as_str())
                .collect();
            let _ = writeln!(writer, "  - {} ({})", key.key_name, languages.join(", "));
        }
        let _ = writeln!(
            writer,
            "Run with {} to create these keys.",
            "--apply".cyan()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
