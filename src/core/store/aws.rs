//! AWS Secrets Manager store.
//!
//! Fetches secrets with `GetSecretValue` and returns their `SecretString`.
//! Enable with `--features aws` (on by default).
//!
//! Credentials come from the default provider chain (AWS_ACCESS_KEY_ID,
//! profiles, instance metadata, ...). The region is fixed when the store is
//! built and falls back to [`DEFAULT_REGION`].

use std::sync::OnceLock;

use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::constants::DEFAULT_REGION;
use crate::error::{Result, StoreError};

/// AWS Secrets Manager store.
///
/// Building the store does no I/O. The Tokio runtime, the AWS config and the
/// SDK client are created on the first fetch and reused afterwards.
#[derive(Debug)]
pub struct SecretsManager {
    region: String,
    runtime: OnceLock<Runtime>,
    client: OnceLock<Client>,
}

impl SecretsManager {
    /// Create a store bound to `region`, or to [`DEFAULT_REGION`] when `None`.
    pub fn new(region: Option<&str>) -> Self {
        Self {
            region: region.unwrap_or(DEFAULT_REGION).to_string(),
            runtime: OnceLock::new(),
            client: OnceLock::new(),
        }
    }

    /// Region the client is bound to.
    pub fn region(&self) -> &str {
        &self.region
    }

    fn runtime(&self) -> Result<&Runtime> {
        if let Some(rt) = self.runtime.get() {
            return Ok(rt);
        }

        // The SDK is async; a private current-thread runtime drives it.
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;

        Ok(self.runtime.get_or_init(|| rt))
    }

    fn client(&self, rt: &Runtime) -> &Client {
        self.client.get_or_init(|| {
            debug!(region = %self.region, "loading AWS config");
            let config = rt.block_on(
                aws_config::defaults(aws_config::BehaviorVersion::latest())
                    .region(Region::new(self.region.clone()))
                    .load(),
            );
            Client::new(&config)
        })
    }
}

impl SecretStore for SecretsManager {
    fn fetch_secret(&self, name: &str) -> Result<Option<String>> {
        let rt = self.runtime()?;
        let client = self.client(rt);

        trace!(secret = %name, region = %self.region, "calling GetSecretValue");

        let output = rt
            .block_on(client.get_secret_value().secret_id(name).send())
            .map_err(|e| StoreError::Fetch {
                name: name.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        let payload = output.secret_string().map(str::to_owned);
        trace!(
            secret = %name,
            has_string = payload.is_some(),
            "GetSecretValue returned"
        );

        Ok(payload)
    }

    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }
}
