//! Remote secret stores.
//!
//! A store answers one question: "what is the string payload of the secret
//! with this name?". The injector only ever talks to the [`SecretStore`]
//! trait, so the merge logic runs the same against AWS Secrets Manager and
//! against the in-memory store used by tests.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Feature-gate if it pulls in an SDK
//! 4. Re-export from this module

use std::collections::HashMap;

use crate::error::Result;

mod backend;

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(feature = "test-store")]
pub mod mock;

pub use backend::default_store;

#[cfg(feature = "aws")]
pub use aws::SecretsManager;

/// Secret store trait.
pub trait SecretStore {
    /// Fetch the string payload of a secret.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the store holds no string payload for `name`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be reached or rejects the
    /// request.
    fn fetch_secret(&self, name: &str) -> Result<Option<String>>;

    /// Store name for logs.
    fn name(&self) -> &'static str;
}

impl<T: SecretStore + ?Sized> SecretStore for Box<T> {
    fn fetch_secret(&self, name: &str) -> Result<Option<String>> {
        (**self).fetch_secret(name)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// In-memory store keyed by secret name.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    secrets: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a secret payload.
    pub fn insert(&mut self, name: impl Into<String>, payload: impl Into<String>) -> &mut Self {
        self.secrets.insert(name.into(), payload.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, payload: impl Into<String>) -> Self {
        self.insert(name, payload);
        self
    }
}

impl<N, P> FromIterator<(N, P)> for MemoryStore
where
    N: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        Self {
            secrets: iter
                .into_iter()
                .map(|(n, p)| (n.into(), p.into()))
                .collect(),
        }
    }
}

impl SecretStore for MemoryStore {
    fn fetch_secret(&self, name: &str) -> Result<Option<String>> {
        Ok(self.secrets.get(name).cloned())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
