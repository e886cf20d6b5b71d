//! Shared secret loading for CLI commands.

use tracing::debug;

use super::Context;
use crate::core::config::{Config, SecretRef};
use crate::core::injector::Injector;
use crate::core::store::{self, SecretStore};
use crate::error::{ConfigError, Result};

/// Load every configured secret into a fresh injector.
///
/// Secrets from the config file come first, then those given with
/// `--secret`, in order.
///
/// # Errors
///
/// Returns `ConfigError::NoSecrets` when nothing is configured, or the first
/// load failure.
pub fn load_secrets(ctx: &Context, extra: &[SecretRef]) -> Result<Injector<Box<dyn SecretStore>>> {
    let config = Config::load(ctx.config.as_deref())?;
    let secrets = config.secrets_with(extra);
    if secrets.is_empty() {
        return Err(ConfigError::NoSecrets.into());
    }

    let region = config.region(ctx.region.as_deref());
    debug!(region = %region, count = secrets.len(), "loading secrets");

    let mut injector = Injector::with_store(store::default_store(region)?);
    for secret in &secrets {
        injector.load_object_secret(&secret.name, secret.prefix.as_deref())?;
    }

    Ok(injector)
}
