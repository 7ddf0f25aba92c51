//! Report formatting and printing.
//!
//! The completion report goes to stdout; per-file issues go to stderr.
//! Separate from core logic so the pipeline can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, FilesSummary, InitSummary,
};
use crate::issues::Issue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command result: summary to stdout, issues to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_issues_to(&result.issues, verbose, &mut io::stderr().lock());
    print_summary_to(&result.summary, &mut io::stdout().lock());
}

/// Print the command summary to a custom writer.
pub fn print_summary_to<W: Write>(summary: &CommandSummary, writer: &mut W) {
    match summary {
        CommandSummary::Extract(summary) => print_extract_summary(summary, writer),
        CommandSummary::Files(summary) => print_files_summary(summary, writer),
        CommandSummary::Init(summary) => print_init_summary(summary, writer),
    }
}

fn print_extract_summary<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} from {} ({} with a styling import)",
            plural(summary.record_count, "record"),
            plural(stats.files_scanned, "file"),
            stats.files_with_factory,
        )
        .green()
    );
    if stats.empty_values > 0 {
        let _ = writeln!(
            writer,
            "  {} with blank style text dropped",
            plural(stats.empty_values, "declaration")
        );
    }
    let _ = writeln!(writer, "  {} {}", "scanned".dimmed(), summary.corpus);
    let _ = writeln!(
        writer,
        "  {} {}",
        "wrote".dimmed(),
        summary.output.display()
    );
}

fn print_files_summary<W: Write>(summary: &FilesSummary, writer: &mut W) {
    for file in &summary.files {
        let _ = writeln!(writer, "{}", file);
    }
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} of {} import a styling library",
            summary.files.len(),
            plural(summary.files_scanned, "file"),
        )
        .green()
    );
}

fn print_init_summary<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} Created {}",
        SUCCESS_MARK.green(),
        summary.path.display()
    );
}

/// Print per-file issues to a custom writer.
///
/// Verbose mode prints one line per issue; otherwise a single summary line.
pub fn print_issues_to<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    if verbose {
        for issue in issues {
            let _ = writeln!(
                writer,
                "{} [{}] {}",
                "warning:".bold().yellow(),
                issue.kind(),
                issue
            );
        }
        return;
    }

    let parse_failures = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseFailure(_)))
        .count();
    let unreadable = issues.len() - parse_failures;

    let mut parts = Vec::new();
    if parse_failures > 0 {
        parts.push(format!("{} could not be parsed", plural(parse_failures, "file")));
    }
    if unreadable > 0 {
        parts.push(format!("{} could not be read", plural(unreadable, "row")));
    }

    let _ = writeln!(
        writer,
        "{} {} (use {} for details)",
        "warning:".bold().yellow(),
        parts.join(", "),
        "-v".cyan()
    );
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
