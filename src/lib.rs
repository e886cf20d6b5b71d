//! smei - load JSON secrets from AWS Secrets Manager into environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run a command with secrets injected
//! │   ├── export        # Print merged secrets as .env or JSON
//! │   ├── check         # Load secrets and list variable names
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── injector      # Load, merge and inject secrets
//!     ├── store/        # Secret stores
//!     │   ├── mod       # SecretStore trait, in-memory store
//!     │   └── aws       # AWS Secrets Manager
//!     ├── env           # Environment sinks
//!     ├── config        # .smei.toml management
//!     └── validation    # Key, value and prefix checks
//! ```
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> smei::error::Result<()> {
//! let mut injector = smei::Injector::new(None);
//! injector
//!     .load_object_secret("prod/app", None)?
//!     .load_object_secret("prod/payments", Some("PAY"))?;
//! injector.inject_envs();
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::env::{EnvSink, ProcessEnv};
pub use crate::core::injector::Injector;
pub use crate::core::store::{MemoryStore, SecretStore};

#[cfg(feature = "aws")]
pub use crate::core::store::SecretsManager;
