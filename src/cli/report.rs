//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow glossa to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStats, CleanSummary, CommandResult, CommandSummary, ExportSummary, InitSummary,
    QuerySummary, StatsSummary,
};
use crate::catalog::model::SourceReference;
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of source references to display per issue.
const MAX_REFERENCES_DISPLAY: usize = 3;

/// Print issues in cargo-style format to stdout.
///
/// This is the main entry point for reporting. Issues are sorted and
/// displayed with severity, location, source context, and details.
///
/// # Example
///
/// ```ignore
/// use glossa::report::report;
/// use glossa::issues::Issue;
///
/// let issues: Vec<Issue> = collect_issues(&ctx, &checks);
/// report(&issues);
/// ```
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalog_files: usize, messages: usize) {
    print_success_to(catalog_files, messages, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalog_files: usize, messages: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {}, {} {} - no issues found",
            catalog_files,
            if catalog_files == 1 { "file" } else { "files" },
            messages,
            if messages == 1 { "message" } else { "messages" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);

    // Print the catalog line if available
    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    // Print source references if present
    let references = issue.references();
    if !references.is_empty() {
        print_references(references, writer, max_line_width);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_references<W: Write>(
    references: &[SourceReference],
    writer: &mut W,
    max_line_width: usize,
) {
    let total = references.len();
    let display_count = total.min(MAX_REFERENCES_DISPLAY);

    for (i, reference) in references.iter().take(display_count).enumerate() {
        let is_last = i == display_count - 1;
        let remaining = total.saturating_sub(display_count);
        let suffix = if is_last && remaining > 0 {
            format!(" (and {} more)", remaining)
        } else {
            String::new()
        };

        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}{}",
            "",
            "=".blue(),
            "used:".bold(),
            reference,
            suffix,
            width = max_line_width
        );
    }
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Span(span) => (
            span.location.file_path.as_str(),
            span.location.line,
            span.location.col,
            Some(&span.source_line),
        ),
        ReportLocation::File { path } => (path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Span(span) => Some(span.location.line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col, _) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col, _) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
}

pub fn print(result: &CommandResult, verbose: bool) {
    // Non-check commands only surface parse errors in full when asked
    if verbose && !matches!(result.summary, CommandSummary::Check) && !result.issues.is_empty() {
        report(&result.issues);
    }

    print_command_output(result);

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.catalog_files_checked, result.messages_checked);
            }
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary);
        }
        CommandSummary::Query(summary) => {
            print_query(summary);
        }
        CommandSummary::Export(summary) => {
            print_export(summary);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_stats(summary: &StatsSummary) {
    if summary.catalogs.is_empty() {
        println!("No catalog files found.");
        return;
    }

    for (i, stats) in summary.catalogs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_catalog_stats(stats);
    }
}

fn print_catalog_stats(stats: &CatalogStats) {
    println!(
        "{} {}",
        stats.file_path.bold(),
        format!("({})", stats.language).cyan()
    );
    println!("  contexts:   {}", stats.contexts);
    println!("  messages:   {}", stats.messages);
    println!(
        "  finished:   {} ({:.1}%)",
        stats.finished,
        stats.completion_percent()
    );
    println!("  unfinished: {}", stats.unfinished);
    println!("  retired:    {}", stats.retired);
    println!("  numerus:    {}", stats.numerus);
}

fn print_query(summary: &QuerySummary) {
    println!("{}", summary.text);

    let origin = format!("{} [{}]", summary.origin, summary.language);
    if summary.origin.is_fallback() {
        println!("{} {}", FAILURE_MARK.yellow(), origin.dimmed());
    } else {
        println!("{} {}", SUCCESS_MARK.green(), origin.dimmed());
    }
}

fn print_export(summary: &ExportSummary) {
    match &summary.output {
        Some(path) => {
            println!(
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Exported {} message(s) from {} context(s) to {}",
                    summary.message_count, summary.context_count, path
                )
                .green()
            );
        }
        None => {
            println!("{}", summary.json);
        }
    }
}

fn print_clean(summary: &CleanSummary) {
    if summary.removed.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No retired messages found.".green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} retired message(s) in {} file(s).",
            "Removed".green().bold(),
            summary.removed.len(),
            summary.file_count
        );
        if summary.dropped_contexts > 0 {
            println!("  - dropped {} emptied context(s)", summary.dropped_contexts);
        }
    } else {
        println!(
            "{} {} retired message(s) in {} file(s):",
            "Would remove".yellow().bold(),
            summary.removed.len(),
            summary.file_count
        );
        for message in &summary.removed {
            println!(
                "  - {}: \"{}\" ({}, line {})",
                message.context_name, message.source, message.state, message.line
            );
        }
        if summary.dropped_contexts > 0 {
            println!(
                "  - would drop {} emptied context(s)",
                summary.dropped_contexts
            );
        }
        println!("Run with {} to remove these messages.", "--apply".cyan());
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
