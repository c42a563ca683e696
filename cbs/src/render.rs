//! Text report for a finished scan

use std::fmt::Write;

use cbslib::{ScanConfig, ScanResult, SkipRecord};
use console::Style;

const READ_ERROR_TAG: &str = "[READING ERROR]";
const EXCLUDED_TAG: &str = "[EXCLUDED BY USER]";

/// Styles used by the report
pub struct Palette {
    heading: Style,
    root: Style,
    extension: Style,
    null: Style,
    lines: Style,
    percent: Style,
    section: Style,
    error: Style,
    excluded: Style,
    warning: Style,
}

impl Palette {
    /// Colors enabled when stdout is a terminal
    pub fn auto() -> Self {
        Self::with_styling(None)
    }

    /// No escape codes at all
    pub fn plain() -> Self {
        Self::with_styling(Some(false))
    }

    fn with_styling(force: Option<bool>) -> Self {
        let style = |s: Style| match force {
            Some(value) => s.force_styling(value),
            None => s,
        };

        Self {
            heading: style(Style::new().white().bold()),
            root: style(Style::new().cyan().bright().on_black().bold().italic()),
            extension: style(Style::new().blue().bold()),
            null: style(Style::new().red().on_black().bold().underlined()),
            lines: style(Style::new().green().bold()),
            percent: style(Style::new().magenta().bright().bold()),
            section: style(Style::new().yellow().bold()),
            error: style(Style::new().red().bold().italic()),
            excluded: style(Style::new().green().bold().italic()),
            warning: style(Style::new().red().bold()),
        }
    }
}

/// Share of `total` taken by `lines`, as `PP.PP` with at least two integer digits.
pub fn format_percentage(lines: u64, total: u64) -> String {
    if total == 0 {
        return "00.00".to_string();
    }
    let percentage = lines as f64 / total as f64 * 100.0;
    format!("{:05.2}", percentage)
}

/// Skip rows in display order: read errors first, then user exclusions.
fn skip_rows(result: &ScanResult) -> Vec<&SkipRecord> {
    result.read_errors().chain(result.exclusions()).collect()
}

/// Render the full text report.
pub fn render_report(
    root: &str,
    result: &ScanResult,
    config: &ScanConfig,
    palette: &Palette,
) -> String {
    let mut out = String::new();
    let total = result.total_lines();

    let _ = writeln!(
        out,
        "{}{}{}",
        palette.heading.apply_to("CBS REPORT ON '"),
        palette.root.apply_to(root),
        palette.heading.apply_to("':")
    );

    let ext_width = result
        .tallies
        .iter()
        .map(|t| t.extension.len())
        .max()
        .unwrap_or(0);

    for tally in &result.tallies {
        let padded = format!("{:<width$}", tally.extension, width = ext_width);
        let extension = if tally.is_null() {
            palette.null.apply_to(padded)
        } else {
            palette.extension.apply_to(padded)
        };
        let _ = writeln!(
            out,
            "{}{} {} lines of code {}{}{}",
            palette.heading.apply_to(" ."),
            extension,
            palette.lines.apply_to(format!("{:>10}", tally.lines)),
            palette.heading.apply_to("[~"),
            palette.percent.apply_to(format_percentage(tally.lines, total)),
            palette.heading.apply_to("%]")
        );
    }

    let rows = skip_rows(result);
    if !rows.is_empty() {
        let labels: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
        let longest = labels.iter().map(String::len).max().unwrap_or(0);

        let _ = writeln!(out, "\n{}", palette.section.apply_to("Skipped files/directories:"));
        for (record, label) in rows.iter().zip(&labels) {
            let padding = " ".repeat(longest - label.len() + 1);
            if record.is_read_error() {
                let _ = writeln!(
                    out,
                    "{}{}{}",
                    palette.error.apply_to(format!(" {}", label)),
                    padding,
                    palette.error.apply_to(READ_ERROR_TAG)
                );
            } else {
                let _ = writeln!(
                    out,
                    "{}{}{}",
                    palette.heading.apply_to(format!(" {}", label)),
                    padding,
                    palette.excluded.apply_to(EXCLUDED_TAG)
                );
            }
        }
    }

    if !config.ignore_read_errors && result.read_errors().next().is_some() {
        let _ = writeln!(
            out,
            "\n{}{}{}{}",
            palette.warning.apply_to("Warning! "),
            palette.heading.apply_to("CBS could not read some elements at '"),
            palette.root.apply_to(root),
            palette.heading.apply_to("'. Please,")
        );
        let _ = writeln!(
            out,
            "{}",
            palette
                .heading
                .apply_to("check accessibility and correctness of the elements marked with")
        );
        let _ = writeln!(
            out,
            "{}{}{}{}{}",
            palette.heading.apply_to("'"),
            palette.error.apply_to(READ_ERROR_TAG),
            palette.heading.apply_to("' in the "),
            palette.section.apply_to("Skipped files/directories"),
            palette.heading.apply_to(" section.")
        );
    }

    if result.has_null_tally() {
        let _ = writeln!(
            out,
            "\n{}{}",
            palette.warning.apply_to("Warning! "),
            palette
                .heading
                .apply_to("Some files scanned by CBS don't have an extension.")
        );
        let _ = writeln!(
            out,
            "{}",
            palette.heading.apply_to(
                "This usually leads to incorrect line count in case the file is an executable."
            )
        );
        let _ = writeln!(
            out,
            "{}{}{}",
            palette
                .heading
                .apply_to("To ignore files without an extension use '"),
            palette.extension.apply_to("-n"),
            palette.heading.apply_to("' when scanning.")
        );
    }

    let _ = writeln!(
        out,
        "\n{}{}{}{}{}",
        palette.heading.apply_to("Total "),
        palette.lines.apply_to(total),
        palette.heading.apply_to(" lines of code spread across "),
        palette.extension.apply_to(result.files_processed),
        palette.heading.apply_to(" files.")
    );

    out
}
