//! Constants used throughout smei.
//!
//! Centralizes magic strings and configuration values.

/// Region used when neither the caller nor the config names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Separator placed between a prefix and a secret key (`<prefix>_<key>`).
pub const PREFIX_SEPARATOR: &str = "_";

/// Configuration file name (.smei.toml).
pub const CONFIG_FILE: &str = ".smei.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SMEI_LOG";

/// Environment variable naming the mock store file (`test-store` builds).
pub const MOCK_STORE_ENV: &str = "SMEI_MOCK_STORE";
