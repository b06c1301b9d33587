//! Report formatting and printing utilities.
//!
//! Scan results and scan errors are printed in a cargo-like style. Kept apart
//! from the scanning core so gosift can be used as a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{ScanError, ScanResult, SyntaxError};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Shown as the file of a syntax error in inline or piped source.
const INLINE_SOURCE: &str = "<source>";

/// Print a scan result as a human-readable listing to stdout.
pub fn print_scan_result(result: &ScanResult) {
    print_scan_result_to(result, &mut io::stdout().lock());
}

/// Print a scan result listing to a custom writer.
///
/// Commands come first, each followed by the directory it runs in, then the
/// asset directories, then a one-line summary.
pub fn print_scan_result_to<W: Write>(result: &ScanResult, writer: &mut W) {
    for command in &result.commands {
        let _ = writeln!(
            writer,
            "{}: {}",
            "command".bold().cyan(),
            command.command_line()
        );
        let _ = writeln!(writer, "  {} {}", "-->".blue(), command.dir);
    }

    for asset_dir in &result.asset_dirs {
        let marker = if asset_dir.should_generated {
            format!("  {}", "generated bundle".dimmed())
        } else {
            String::new()
        };
        let _ = writeln!(
            writer,
            "{}: \"{}\"{}",
            "asset dir".bold().cyan(),
            asset_dir.dir,
            marker
        );
    }

    if !result.is_empty() {
        let _ = writeln!(writer);
    }
    print_summary(result, writer);
}

/// Print a scan result as pretty JSON to stdout.
pub fn print_json(result: &ScanResult) -> Result<()> {
    print_json_to(result, &mut io::stdout().lock())
}

pub fn print_json_to<W: Write>(result: &ScanResult, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("Failed to serialize scan result")?;
    writeln!(writer, "{}", json).context("Failed to write scan result")?;
    Ok(())
}

/// Print a failed scan to stderr.
pub fn print_scan_error(err: &ScanError) {
    print_scan_error_to(err, &mut io::stderr().lock());
}

/// Print a failed scan to a custom writer. Syntax errors get the offending
/// source line with a caret under the reported column.
pub fn print_scan_error_to<W: Write>(err: &ScanError, writer: &mut W) {
    match err {
        ScanError::Syntax(syntax) => print_syntax_error(syntax, writer),
        other => {
            let _ = writeln!(writer, "{}: {}", "error".bold().red(), other);
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_syntax_error<W: Write>(err: &SyntaxError, writer: &mut W) {
    let file = if err.file.is_empty() {
        INLINE_SOURCE
    } else {
        err.file.as_str()
    };
    let line_number = err.line.to_string();
    let width = line_number.len();

    let _ = writeln!(writer, "{}: {}", "error".bold().red(), err.message);
    let _ = writeln!(
        writer,
        "{:>width$}{} {}:{}:{}",
        "",
        "-->".blue(),
        file,
        err.line,
        err.column,
        width = width
    );
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{} {} {}",
        line_number.blue(),
        "|".blue(),
        err.source_line
    );

    // Column counts bytes; pad by the display width of what precedes it.
    let prefix = err
        .source_line
        .get(..err.column.saturating_sub(1))
        .unwrap_or(err.source_line.as_str());
    let caret_padding = UnicodeWidthStr::width(prefix);
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".red(),
        width = width,
        padding = caret_padding
    );
}

fn print_summary<W: Write>(result: &ScanResult, writer: &mut W) {
    let msg = if result.is_empty() {
        "No commands or asset directories found".to_string()
    } else {
        format!(
            "Found {} {}, {} asset {}",
            result.commands.len(),
            plural(result.commands.len(), "command", "commands"),
            result.asset_dirs.len(),
            plural(result.asset_dirs.len(), "directory", "directories"),
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
