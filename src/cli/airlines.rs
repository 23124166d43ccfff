//! Airline directory command

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::output;

/// List the effective airline directory (built-ins plus config overrides)
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config = Config::load_or_default(opts.config_ref())?;
    let entries = config.airline_directory().entries();

    output::print(&entries, opts.format, "Known airlines:")
}
