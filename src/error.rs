//! Error types.
//!
//! Every fallible operation returns [`Result`], whose error is the top-level
//! [`Error`]. Each concern owns a nested error enum so callers can match on the
//! kind of failure without parsing messages.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures while turning a fetched secret into mapping entries.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("secret \"{0}\" is not defined")]
    NotDefined(String),

    #[error("secret \"{name}\" is not valid JSON: {source}")]
    InvalidJson {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("secret \"{0}\" is not a JSON object")]
    NotAnObject(String),

    #[error("secret \"{name}\": value of \"{key}\" is not a string")]
    NotAString { name: String, key: String },

    #[error("secret \"{0}\" is duplicated")]
    Duplicated(String),
}

/// Failures talking to the remote secret store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to fetch secret \"{name}\": {reason}")]
    Fetch { name: String, reason: String },

    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("no secret store available: {0}")]
    Unavailable(String),
}

/// Configuration file and command-line configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid secret reference \"{spec}\": {reason}")]
    InvalidSecretRef { spec: String, reason: String },

    #[error("no secrets configured")]
    NoSecrets,
}

/// Key or value that cannot be written to an environment.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("key cannot be empty")]
    EmptyKey,

    #[error("invalid key \"{key}\": {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("invalid prefix \"{prefix}\": {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("value of \"{0}\" contains a NUL byte")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
