//! Check command - load secrets and list resulting variable names.
//!
//! Values are never printed.

use super::{load, output, Context};
use crate::core::config::SecretRef;
use crate::core::env::env_key;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Load all secrets and list the variables they would set.
pub fn execute(ctx: &Context, secrets: &[SecretRef]) -> Result<()> {
    let injector = load::load_secrets(ctx, secrets)?;

    let mut names: Vec<String> = injector.secrets().keys().map(|k| env_key(k.as_str())).collect();
    names.sort();
    names.dedup();

    output::success(&format!(
        "{} variables from {} secret store",
        names.len(),
        injector.store().name()
    ));
    for name in &names {
        output::list_item(&output::key(name));
    }

    Ok(())
}
