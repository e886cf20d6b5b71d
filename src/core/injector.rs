//! Secret loading, merging and injection.
//!
//! An [`Injector`] accumulates the key/value pairs of one or more JSON object
//! secrets and then writes them into an environment with upper-cased keys:
//!
//! ```no_run
//! # fn main() -> smei::error::Result<()> {
//! use smei::Injector;
//!
//! Injector::new(Some("eu-west-1"))
//!     .load_object_secret("prod/database", None)?
//!     .load_object_secret("prod/stripe", Some("STRIPE"))?
//!     .inject_envs();
//! # Ok(())
//! # }
//! ```
//!
//! A load is all-or-nothing: if any key of the secret is rejected, nothing
//! from that secret is merged.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::core::constants::PREFIX_SEPARATOR;
use crate::core::env::{env_key, EnvSink, ProcessEnv};
use crate::core::store::SecretStore;
use crate::core::validation;
use crate::error::{Result, SecretError};

#[cfg(feature = "aws")]
use crate::core::store::SecretsManager;

/// Accumulates secrets from a store and injects them as environment variables.
#[derive(Debug)]
pub struct Injector<S> {
    store: S,
    // Load order is kept so the last loaded key wins on injection.
    secrets: IndexMap<String, String>,
}

#[cfg(feature = "aws")]
impl Injector<SecretsManager> {
    /// Create an injector backed by AWS Secrets Manager.
    ///
    /// Uses `us-east-1` when `region` is `None`. No network I/O happens until
    /// the first load.
    pub fn new(region: Option<&str>) -> Self {
        Self::with_store(SecretsManager::new(region))
    }

    /// Region of the underlying Secrets Manager client.
    pub fn region(&self) -> &str {
        self.store.region()
    }
}

impl<S: SecretStore> Injector<S> {
    /// Create an injector over any secret store.
    pub fn with_store(store: S) -> Self {
        Self {
            store,
            secrets: IndexMap::new(),
        }
    }

    /// Fetch the secret `name`, parse it as a JSON object of strings and merge
    /// its entries.
    ///
    /// With a prefix every key `k` becomes `<prefix>_<k>` before merging.
    ///
    /// # Errors
    ///
    /// - `SecretError::NotDefined` if the store has no string payload
    /// - `SecretError::InvalidJson` if the payload is not JSON
    /// - `SecretError::NotAnObject` / `SecretError::NotAString` if the JSON
    ///   is not an object of strings
    /// - `ValidationError` if a key or value cannot live in an environment
    /// - `SecretError::Duplicated` for the first key already merged
    /// - `StoreError` if the store fails
    ///
    /// On error the accumulated mapping is unchanged.
    pub fn load_object_secret(&mut self, name: &str, prefix: Option<&str>) -> Result<&mut Self> {
        debug!(secret = %name, store = self.store.name(), "loading secret");

        let payload = self
            .store
            .fetch_secret(name)?
            .ok_or_else(|| SecretError::NotDefined(name.to_string()))?;

        let object = parse_object(name, &payload)?;
        let entries = prefixed_entries(name, object, prefix)?;

        if let Some((key, _)) = entries.iter().find(|(k, _)| self.secrets.contains_key(k)) {
            return Err(SecretError::Duplicated(key.clone()).into());
        }

        let count = entries.len();
        self.secrets.extend(entries);

        debug!(
            secret = %name,
            merged = count,
            total = self.secrets.len(),
            "secret merged"
        );

        Ok(self)
    }

    /// Write every accumulated entry into the process environment.
    ///
    /// Keys are upper-cased; existing variables are overwritten.
    pub fn inject_envs(&self) {
        self.inject_into(&mut ProcessEnv);
    }

    /// Write every accumulated entry into `sink`, keys upper-cased, in load
    /// order.
    ///
    /// Keys that only differ in case map to one variable; the one loaded
    /// last wins.
    pub fn inject_into<E: EnvSink + ?Sized>(&self, sink: &mut E) {
        let mut seen = HashSet::with_capacity(self.secrets.len());

        for (key, value) in &self.secrets {
            let name = env_key(key);
            if !seen.insert(name.clone()) {
                warn!(
                    key = %key,
                    variable = %name,
                    "keys collide after upper-casing, later value wins"
                );
            }
            sink.set_var(&name, value);
        }
        debug!(count = self.secrets.len(), "secrets injected");
    }

    /// Accumulated mapping in load order, keys as merged (not upper-cased).
    pub fn secrets(&self) -> &IndexMap<String, String> {
        &self.secrets
    }

    /// Number of accumulated entries.
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether nothing has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> Drop for Injector<S> {
    fn drop(&mut self) {
        for value in self.secrets.values_mut() {
            value.zeroize();
        }
    }
}

fn parse_object(name: &str, payload: &str) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(payload).map_err(|source| SecretError::InvalidJson {
            name: name.to_string(),
            source,
        })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SecretError::NotAnObject(name.to_string()).into()),
    }
}

/// Apply the prefix and check every entry, keeping payload order.
fn prefixed_entries(
    name: &str,
    object: Map<String, Value>,
    prefix: Option<&str>,
) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::with_capacity(object.len());

    for (key, value) in object {
        let Value::String(value) = value else {
            return Err(SecretError::NotAString {
                name: name.to_string(),
                key,
            }
            .into());
        };

        let key = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, PREFIX_SEPARATOR, key),
            None => key,
        };

        validation::validate_key(&key)?;
        validation::validate_value(&key, &value)?;
        entries.push((key, value));
    }

    Ok(entries)
}
