//! Console output - colored status lines for humans, not machines.
//!
//! Formatting is separated from printing: `format_*` functions are pure and
//! testable, `display_*` functions print them with `console` styling.

use console::style;

use crate::resolver::Resolution;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Formats the status lines describing a resolution: one match line, then one
/// "Using bump type" line, returned in that order.
pub fn format_resolution(resolution: &Resolution) -> (String, String) {
    let match_line = match resolution {
        Resolution::Keyword { keyword, kind } => {
            format!("Found keyword match: {}; for bump type: {}", keyword, kind)
        }
        Resolution::Label { label, kind } => {
            format!("Found label match: {}; for bump type: {}", label, kind)
        }
        Resolution::Default { kind } => {
            format!("No matches found; using default bump type: {}", kind)
        }
    };

    let using_line = format!("Using bump type: {}", resolution.kind());
    (match_line, using_line)
}

/// Prints the resolution status lines.
pub fn display_resolution(resolution: &Resolution) {
    let (match_line, using_line) = format_resolution(resolution);

    match resolution {
        Resolution::Default { .. } => display_status(&match_line),
        _ => display_success(&match_line),
    }
    display_success(&using_line);
}
