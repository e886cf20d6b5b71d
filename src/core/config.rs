//! Configuration file management.
//!
//! Handles reading and validating the optional `.smei.toml`:
//!
//! ```toml
//! region = "eu-west-1"
//!
//! [[secrets]]
//! name = "prod/app"
//! prefix = "APP"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::core::constants;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Contents of `.smei.toml`
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Secrets Manager region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Secrets to load, in order
    #[serde(default)]
    pub secrets: Vec<SecretRef>,
}

/// A secret to load, with an optional key prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretRef {
    /// Secret name or ARN
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl SecretRef {
    pub fn new(name: impl Into<String>, prefix: Option<&str>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.map(str::to_string),
        }
    }

    /// Validate the name and prefix.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSecretRef` for an empty name, or
    /// `ValidationError::InvalidPrefix` for a bad prefix.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidSecretRef {
                spec: self.to_string(),
                reason: "secret name cannot be empty".to_string(),
            }
            .into());
        }

        if let Some(prefix) = &self.prefix {
            validation::validate_prefix(prefix)?;
        }

        Ok(())
    }
}

/// Parses `NAME` or `NAME,PREFIX`.
///
/// Commas never appear in Secrets Manager names or ARNs.
impl FromStr for SecretRef {
    type Err = crate::error::Error;

    fn from_str(spec: &str) -> Result<Self> {
        let secret = match spec.split_once(',') {
            Some((name, prefix)) => Self::new(name, Some(prefix)),
            None => Self::new(spec, None),
        };

        secret.validate()?;

        Ok(secret)
    }
}

impl std::fmt::Display for SecretRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{},{}", self.name, prefix),
            None => write!(f, "{}", self.name),
        }
    }
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one, `.smei.toml`
    /// in the current directory is read if present and an empty config is
    /// returned otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit file,
    /// `ConfigError::Parse` if the TOML is malformed, or a validation error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.display().to_string()).into());
                }
                path.to_path_buf()
            }
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        Self::load_from(&path)
    }

    /// Load and validate configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            secrets = config.secrets.len(),
            region = ?config.region,
            "config loaded"
        );

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration contents
    ///
    /// # Errors
    ///
    /// Returns an error for an empty region or an invalid secret entry.
    pub fn validate(&self) -> Result<()> {
        if let Some(region) = &self.region {
            if region.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "region",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
        }

        for secret in &self.secrets {
            secret.validate()?;
        }

        Ok(())
    }

    /// Region to use: `cli` if given, then the config, then the default.
    pub fn region<'a>(&'a self, cli: Option<&'a str>) -> &'a str {
        cli.or(self.region.as_deref())
            .unwrap_or(constants::DEFAULT_REGION)
    }

    /// Secrets to load: config entries first, then `extra` in order.
    pub fn secrets_with(&self, extra: &[SecretRef]) -> Vec<SecretRef> {
        self.secrets.iter().chain(extra).cloned().collect()
    }
}
