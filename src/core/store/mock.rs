//! File-backed mock store for CLI integration tests.
//!
//! Reads a JSON object mapping secret names to secret strings from the file
//! named by `SMEI_MOCK_STORE`. A secret whose value is `null` exists but has
//! no string payload. Only compiled with `--features test-store`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::SecretStore;
use crate::error::{Result, StoreError};

/// Mock store backed by a JSON file.
#[derive(Debug)]
pub struct MockStore {
    path: PathBuf,
}

impl MockStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn entries(&self, name: &str) -> Result<Map<String, Value>> {
        let fetch_err = |reason: String| StoreError::Fetch {
            name: name.to_string(),
            reason,
        };

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| fetch_err(format!("{}: {}", self.path.display(), e)))?;
        match serde_json::from_str(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(fetch_err("mock store is not a JSON object".to_string()).into()),
            Err(e) => Err(fetch_err(format!("mock store is not valid JSON: {}", e)).into()),
        }
    }
}

impl SecretStore for MockStore {
    fn fetch_secret(&self, name: &str) -> Result<Option<String>> {
        debug!(path = %self.path.display(), secret = %name, "reading mock store");
        let entries = self.entries(name)?;

        Ok(match entries.get(name) {
            Some(Value::String(payload)) => Some(payload.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
