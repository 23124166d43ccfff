//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod pretty;
pub mod table;

/// Types that can render themselves as a human-readable line
pub trait PrettyLine {
    fn pretty_line(&self) -> String;
}

/// Render rows in the requested format.
pub fn render<T>(rows: &[T], format: OutputFormat, heading: &str) -> Result<String>
where
    T: Tabled + Serialize + PrettyLine,
{
    Ok(match format {
        OutputFormat::Pretty => pretty::format_pretty(rows, heading),
        OutputFormat::Table => table::format_table(rows),
        OutputFormat::Json => json::format_json(rows)?,
    })
}

/// Format and print rows to stdout
pub fn print<T>(rows: &[T], format: OutputFormat, heading: &str) -> Result<()>
where
    T: Tabled + Serialize + PrettyLine,
{
    println!("{}", render(rows, format, heading)?);
    Ok(())
}
