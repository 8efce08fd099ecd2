//! Plain-text rendering of evaluation diagnostics.
//!
//! A report echoes the expression, marks every diagnostic span with carets
//! on the line below and lists the messages in order:
//!
//! ```text
//! 1 / 0 + 07
//!   ^     ^
//! 1. divide by zero
//! 2. leading zero
//! ```

use crate::Diagnostic;

/// Render `diagnostics` against the `text` they were raised for.
///
/// Whitespace in the echoed line is replaced by plain spaces so tabs and
/// newlines cannot shift the caret line. Zero-width diagnostics get a single
/// caret. Without diagnostics only the echoed line is returned.
///
/// # Examples
///
/// ```rust
/// use decicalc::{format_report, parse};
///
/// let errors = parse("1/0").unwrap_err();
/// assert_eq!(format_report("1/0", &errors), "1/0\n ^\n1. divide by zero");
/// ```
#[must_use]
pub fn format_report(text: &str, diagnostics: &[Diagnostic]) -> String {
    let mut out: String = text
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    if diagnostics.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str(&caret_line(diagnostics));
    for (index, diagnostic) in diagnostics.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", index + 1, diagnostic.message()));
    }
    out
}

fn caret_line(diagnostics: &[Diagnostic]) -> String {
    let width = diagnostics
        .iter()
        .map(|d| d.column + d.length.max(1))
        .max()
        .unwrap_or_default();
    let mut line = vec![' '; width];
    for diagnostic in diagnostics {
        let end = diagnostic.column + diagnostic.length.max(1);
        if let Some(cells) = line.get_mut(diagnostic.column..end) {
            cells.fill('^');
        }
    }
    line.into_iter().collect()
}
