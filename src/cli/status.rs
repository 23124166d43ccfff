//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::client::DEFAULT_BASE_URL;
use crate::config::{Config, CredentialSource};
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "farescout Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!(
                "{} Config file not found: {}",
                "○".dimmed(),
                config_path.display()
            );
            Config::default()
        }
        Err(e) => {
            println!("{} Config file unreadable: {}", "✗".red(), e);
            Config::default()
        }
    };

    println!();

    match config.credentials() {
        Ok((_, CredentialSource::Environment)) => {
            println!("{} API credentials configured (environment)", "✓".green());
        }
        Ok((_, CredentialSource::ConfigFile)) => {
            println!("{} API credentials configured (config file)", "✓".green());
        }
        Err(_) => {
            println!("{} API credentials not configured", "✗".red());
            println!("  → Run 'farescout init' to configure");
        }
    }

    let host = opts
        .api_host_ref()
        .map(String::from)
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    println!("{} API host: {}", "○".dimmed(), host.cyan());

    println!(
        "{} Airlines known: {}",
        "○".dimmed(),
        config.airline_directory().len()
    );

    let defaults = &config.defaults;
    println!(
        "{} Default search: {} → {}, {} to {}, {} adult(s), {}",
        "○".dimmed(),
        defaults.origin,
        defaults.destination,
        defaults.departure_date,
        defaults.return_date,
        defaults.adults,
        defaults.travel_class.as_str()
    );

    println!();
    Ok(())
}
