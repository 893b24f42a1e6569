//! Report formatting and printing utilities.
//!
//! Displays scan results in cargo-style format: per-group token counts,
//! then each hard-coded value finding with its source line and a caret.
//! Separate from core logic to allow tokex to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{BundleSummary, CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{Catalog, HardCodedValue};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, _verbose: bool) {
    let mut stdout = io::stdout().lock();
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan_to(summary, &mut stdout),
        CommandSummary::Bundle(summary) => {
            print_bundle_to(summary, result.hard_coded_count, &mut stdout)
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut stdout),
    }
}

fn print_scan_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    print_group_counts(&summary.catalog, writer);

    let findings = &summary.catalog.hard_coded_values;
    if findings.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - {} {}, no hard-coded values",
                summary.files_scanned,
                plural(summary.files_scanned, "file", "files"),
                summary.catalog.token_count(),
                plural(summary.catalog.token_count(), "token", "tokens"),
            )
            .green()
        );
        return;
    }

    let _ = writeln!(writer);
    report_findings_to(findings, writer);
}

/// Print hard-coded value findings in cargo-style format, sorted by
/// file, line and column.
pub fn report_findings_to<W: Write>(findings: &[HardCodedValue], writer: &mut W) {
    let mut sorted: Vec<&HardCodedValue> = findings.iter().collect();
    sorted.sort_by(|a, b| {
        a.location
            .file_path
            .cmp(&b.location.file_path)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.location.col.cmp(&b.location.col))
    });

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .map(|f| f.location.line.to_string().len())
        .max()
        .unwrap_or(1);

    for finding in &sorted {
        print_finding(finding, writer, max_line_width);
    }

    let _ = writeln!(
        writer,
        "{} {} hard-coded {}",
        FAILURE_MARK.red(),
        sorted.len(),
        plural(sorted.len(), "value", "values")
    );
}

fn print_finding<W: Write>(finding: &HardCodedValue, writer: &mut W, max_line_width: usize) {
    let loc = &finding.location;

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "warning".bold().yellow(),
        finding.value,
        format!("hard-coded {}", finding.kind).dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        loc.file_path,
        loc.line,
        loc.col
    );

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
        loc.line.to_string().blue(),
        "|".blue(),
        finding.source_line,
        width = max_line_width
    );

    // Caret pointing to the column (col is 1-based)
    let prefix = if loc.col > 1 {
        finding
            .source_line
            .chars()
            .take(loc.col - 1)
            .collect::<String>()
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
        "^".yellow(),
        width = max_line_width,
        padding = caret_padding
    );

    let _ = writeln!(writer); // Empty line between findings
}

fn print_group_counts<W: Write>(catalog: &Catalog, writer: &mut W) {
    for group in &catalog.token_groups {
        let _ = writeln!(
            writer,
            "{}: {} {}",
            group.source_type.to_string().cyan(),
            group.tokens.len(),
            plural(group.tokens.len(), "token", "tokens")
        );
    }
    let keyframes_blocks = keyframes_block_count(&catalog.keyframes);
    if keyframes_blocks > 0 {
        let _ = writeln!(
            writer,
            "{}: {} {}",
            "keyframes".cyan(),
            keyframes_blocks,
            plural(keyframes_blocks, "block", "blocks")
        );
    }
}

fn keyframes_block_count(keyframes: &str) -> usize {
    if keyframes.is_empty() {
        0
    } else {
        keyframes.split("\n\n").count()
    }
}

fn print_bundle_to<W: Write>(summary: &BundleSummary, hard_coded_count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} ({} {} from {} {})",
            summary.output_path.display(),
            summary.token_count,
            plural(summary.token_count, "token", "tokens"),
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
        )
        .green()
    );
    if hard_coded_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} hard-coded {} found",
            "warning:".bold().yellow(),
            hard_coded_count,
            plural(hard_coded_count, "value", "values")
        );
    }
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use crate::core::{SourceLocation, Token, TokenGroup, TokenSourceType, ValueKind};

    use super::*;

    fn strip_ansi(s: &str) -> String {
        // Simple ANSI escape code stripper for testing
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn finding(file: &str, line: usize, col: usize, value: &str) -> HardCodedValue {
        HardCodedValue {
            value: value.to_string(),
            kind: ValueKind::Color,
            location: SourceLocation::new(file, line, col),
            source_line: format!("  color: {};", value),
        }
    }

    #[test]
    fn test_report_finding_layout() {
        let mut output = Vec::new();
        report_findings_to(&[finding("./src/app.css", 10, 3, "#FF0000")], &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("warning: \"#FF0000\""));
        assert!(stripped.contains("hard-coded color"));
        assert!(stripped.contains("--> ./src/app.css:10:3"));
        assert!(stripped.contains("10 |   color: #FF0000;"));
        assert!(stripped.contains("1 hard-coded value"));
    }

    #[test]
    fn test_report_findings_sorted_by_location() {
        let mut output = Vec::new();
        report_findings_to(
            &[
                finding("./b.css", 20, 1, "#222222"),
                finding("./a.css", 10, 1, "#111111"),
                finding("./a.css", 5, 1, "#000000"),
            ],
            &mut output,
        );
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        let first = stripped.find("#000000").unwrap();
        let second = stripped.find("#111111").unwrap();
        let third = stripped.find("#222222").unwrap();
        assert!(first < second && second < third);
        assert!(stripped.contains("3 hard-coded values"));
    }

    #[test]
    fn test_caret_alignment_with_wide_characters() {
        let mut output = Vec::new();
        let finding = HardCodedValue {
            value: "#FF0000".to_string(),
            kind: ValueKind::Color,
            location: SourceLocation::new("./app.css", 3, 8),
            source_line: "/* 色 */ color: #FF0000;".to_string(),
        };
        report_findings_to(&[finding], &mut output);
        let output_str = String::from_utf8(output).unwrap();

        // Just verify it doesn't panic and contains expected content
        assert!(output_str.contains("色"));
        assert!(output_str.contains("^"));
    }

    #[test]
    fn test_scan_success_message() {
        let mut group = TokenGroup::new(TokenSourceType::Css);
        group.tokens.push(Token::new("brand", "#111", "#111"));
        let summary = ScanSummary {
            catalog: Catalog {
                token_groups: vec![group],
                ..Catalog::default()
            },
            files_scanned: 2,
        };

        let mut output = Vec::new();
        print_scan_to(&summary, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("css: 1 token"));
        assert!(stripped.contains("Checked 2 files - 1 token, no hard-coded values"));
    }

    #[test]
    fn test_scan_report_includes_keyframes_count() {
        let summary = ScanSummary {
            catalog: Catalog {
                keyframes: "@keyframes a {}\n\n@keyframes b {}".to_string(),
                ..Catalog::default()
            },
            files_scanned: 1,
        };

        let mut output = Vec::new();
        print_scan_to(&summary, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("keyframes: 2 blocks"));
    }

    #[test]
    fn test_bundle_message() {
        let summary = BundleSummary {
            output_path: "design-tokens.source.json".into(),
            files_scanned: 4,
            token_count: 9,
        };

        let mut output = Vec::new();
        print_bundle_to(&summary, 2, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());

        assert!(stripped.contains("Wrote design-tokens.source.json (9 tokens from 4 files)"));
        assert!(stripped.contains("2 hard-coded values found"));
    }

    #[test]
    fn test_init_message() {
        let mut output = Vec::new();
        print_init_to(&InitSummary { created: true }, &mut output);
        let stripped = strip_ansi(&String::from_utf8(output).unwrap());
        assert!(stripped.contains("Created .tokexrc.json"));
    }
}
