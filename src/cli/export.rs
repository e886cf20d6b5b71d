//! Export command - print merged secrets as .env or JSON to stdout.

use std::collections::BTreeMap;

use super::{load, output, Context};
use crate::core::config::SecretRef;
use crate::core::env::to_env_string;
use crate::error::{Error, Result};

/// Print merged secrets with upper-cased keys.
pub fn execute(ctx: &Context, secrets: &[SecretRef], json: bool) -> Result<()> {
    let injector = load::load_secrets(ctx, secrets)?;

    let mut env = BTreeMap::new();
    injector.inject_into(&mut env);

    if json {
        let rendered = serde_json::to_string_pretty(&env)
            .map_err(|e| Error::Other(format!("failed to render JSON: {}", e)))?;
        output::raw(&format!("{}\n", rendered))?;
    } else {
        output::raw(&to_env_string(
            env.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ))?;
    }

    Ok(())
}
