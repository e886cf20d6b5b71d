//! Run command.
//!
//! Executes a command with the merged secrets injected as environment
//! variables. The secrets only reach the child, never the parent's own
//! environment or the disk.

use std::process::Command;

use super::{load, Context};
use crate::core::config::SecretRef;
use crate::error::{Error, Result};

/// Run a command with secrets injected as environment variables.
pub fn execute(ctx: &Context, secrets: &[SecretRef], command: &[String]) -> Result<()> {
    let exit_code = run_with_secrets(ctx, secrets, command)?;
    std::process::exit(exit_code);
}

fn run_with_secrets(ctx: &Context, secrets: &[SecretRef], command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let injector = load::load_secrets(ctx, secrets)?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    injector.inject_into(&mut cmd);

    let status = cmd.status()?;
    // Killed by a signal: no exit code, report failure
    Ok(status.code().unwrap_or(1))
}
