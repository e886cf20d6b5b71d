//! Store selection for the CLI.
//!
//! `test-store` builds read the mock store named by `SMEI_MOCK_STORE`.
//! Otherwise AWS Secrets Manager is used when compiled in.

use tracing::debug;

use super::SecretStore;
use crate::error::Result;
#[cfg(any(feature = "test-store", not(feature = "aws")))]
use crate::error::StoreError;

/// Default store for the given region.
///
/// # Errors
///
/// Returns `StoreError::Unavailable` when no store backend was compiled in,
/// or when a `test-store` build has no `SMEI_MOCK_STORE` set.
pub fn default_store(region: &str) -> Result<Box<dyn SecretStore>> {
    #[cfg(feature = "test-store")]
    {
        use crate::core::constants::MOCK_STORE_ENV;

        let _ = region;
        let path = std::env::var(MOCK_STORE_ENV).map_err(|_| {
            StoreError::Unavailable(format!("{} is not set", MOCK_STORE_ENV))
        })?;
        debug!(path = %path, "using mock secret store");
        return Ok(Box::new(super::mock::MockStore::new(path)));
    }

    #[cfg(all(not(feature = "test-store"), feature = "aws"))]
    {
        debug!(region = %region, "using AWS Secrets Manager store");
        return Ok(Box::new(super::SecretsManager::new(Some(region))));
    }

    #[cfg(all(not(feature = "test-store"), not(feature = "aws")))]
    {
        let _ = region;
        debug!("no secret store compiled in");
        Err(StoreError::Unavailable(
            "AWS support not compiled. Rebuild with: cargo install smei --features aws"
                .to_string(),
        )
        .into())
    }
}
