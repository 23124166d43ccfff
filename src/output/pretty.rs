//! Pretty output formatting

use colored::Colorize;

use super::PrettyLine;

/// Format rows as a bold heading followed by one line per row.
pub fn format_pretty<T: PrettyLine>(rows: &[T], heading: &str) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    let mut out = format!("{}", heading.bold());
    for row in rows {
        out.push('\n');
        out.push_str(&row.pretty_line());
    }
    out
}
