//! Configuration management for farescout

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::client::Credentials;
use crate::client::models::SearchDefaults;
use crate::error::{ConfigError, Result};
use crate::models::{AirlineDirectory, DEFAULT_BOOKING_URL, ResponseNormalizer};

/// Environment variable holding the OAuth2 client ID
pub const CLIENT_ID_ENV: &str = "FARESCOUT_CLIENT_ID";

/// Environment variable holding the OAuth2 client secret
pub const CLIENT_SECRET_ENV: &str = "FARESCOUT_CLIENT_SECRET";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// OAuth2 client ID (API key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth2 client secret (API secret)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// API host override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Base URL for booking links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,

    /// Extra or replacement carrier names, keyed by IATA code
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub airlines: BTreeMap<String, String>,

    /// Values used for search options left unset
    #[serde(default)]
    pub defaults: SearchDefaults,
}

/// Where credentials were resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Environment,
    ConfigFile,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".farescout").join("config.yaml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Like [`Config::load_at`], but a missing file yields the defaults
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(&Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(path, contents)?;

        // Credentials live in this file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Resolve credentials from the process environment, then the file
    pub fn credentials(&self) -> Result<(Credentials, CredentialSource)> {
        self.credentials_with(|key| std::env::var(key).ok())
    }

    /// Resolve credentials using `lookup` for environment variables.
    ///
    /// Both environment variables must be set for the environment to win;
    /// a lone variable is ignored.
    pub fn credentials_with<F>(&self, lookup: F) -> Result<(Credentials, CredentialSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        if let (Some(id), Some(secret)) = (
            non_empty(lookup(CLIENT_ID_ENV)),
            non_empty(lookup(CLIENT_SECRET_ENV)),
        ) {
            return Ok((Credentials::new(id, secret), CredentialSource::Environment));
        }

        match (
            non_empty(self.client_id.clone()),
            non_empty(self.client_secret.clone()),
        ) {
            (Some(id), Some(secret)) => {
                Ok((Credentials::new(id, secret), CredentialSource::ConfigFile))
            }
            _ => Err(ConfigError::MissingCredentials.into()),
        }
    }

    /// Airline directory: built-in carriers plus configured overrides
    pub fn airline_directory(&self) -> AirlineDirectory {
        AirlineDirectory::builtin()
            .with_overrides(self.airlines.iter().map(|(code, name)| (code, name.clone())))
    }

    /// Normalizer wired with this configuration's airlines and booking URL
    pub fn normalizer(&self) -> ResponseNormalizer {
        ResponseNormalizer::new(
            self.airline_directory(),
            self.booking_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BOOKING_URL.to_string()),
        )
    }
}
