//! smei - inject AWS Secrets Manager secrets as environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use smei::cli::output;
use smei::cli::{execute, Cli};
use smei::core::constants::LOG_ENV;
use smei::error::{ConfigError, Error, SecretError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("smei=debug")
        } else {
            EnvFilter::new("smei=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Config(ConfigError::NoSecrets) => {
                Some("pass --secret NAME or add [[secrets]] to .smei.toml")
            }
            Error::Secret(SecretError::Duplicated(_)) => {
                Some("load one of the secrets with a prefix: --secret NAME,PREFIX")
            }
            Error::Store(StoreError::Fetch { .. }) => {
                Some("check AWS credentials and --region")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
