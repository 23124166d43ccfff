//! Command execution context
//!
//! Loads configuration, resolves credentials, and builds the API client and
//! normalizer shared by commands that talk to the flight-search API.

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::AmadeusClient;
use crate::config::Config;
use crate::error::Result;
use crate::models::ResponseNormalizer;

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// API client; its token cache lives for the whole command
    pub client: AmadeusClient,
    /// Normalizer wired with the configured airline directory
    pub normalizer: ResponseNormalizer,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is not an error as long as credentials come from
    /// the environment.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or no credentials are
    /// available.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;
        let (credentials, source) = config.credentials()?;
        debug!("Using credentials from {:?}", source);

        let base_url = opts
            .api_host_ref()
            .map(String::from)
            .or_else(|| config.base_url.clone());

        let client = AmadeusClient::with_base_url(credentials, base_url)?
            .with_defaults(config.defaults.clone());
        debug!("API host: {}", client.base_url());

        let normalizer = config.normalizer();

        Ok(Self {
            client,
            normalizer,
            format: opts.format,
        })
    }
}
