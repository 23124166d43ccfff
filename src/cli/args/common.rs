//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - one summary line per flight (default)
    #[default]
    Pretty,
    /// Table format - one row per flight with every column
    Table,
    /// JSON format - structured for scripts and the website renderer
    Json,
}
