//! Command-line interface.

pub mod check;
pub mod completions;
pub mod export;
pub mod load;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::SecretRef;

/// smei - inject AWS Secrets Manager secrets as environment variables.
#[derive(Parser)]
#[command(
    name = "smei",
    about = "Inject AWS Secrets Manager secrets as environment variables",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// AWS region (default: region in .smei.toml, then us-east-1)
    #[arg(long, global = true, env = "SMEI_REGION")]
    pub region: Option<String>,

    /// Config file (default: ./.smei.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Secrets named on the command line.
#[derive(Args, Debug, Default)]
pub struct Sources {
    /// Secret to load, as NAME or NAME,PREFIX (repeatable)
    #[arg(short, long = "secret", value_name = "NAME[,PREFIX]")]
    pub secrets: Vec<SecretRef>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a command with secrets injected as env vars
    Run {
        #[command(flatten)]
        sources: Sources,

        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Print merged secrets as .env lines
    Export {
        #[command(flatten)]
        sources: Sources,

        /// Output as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Load secrets and list the variables they would set
    Check {
        #[command(flatten)]
        sources: Sources,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Global options shared by every loading command.
#[derive(Debug, Default, Clone)]
pub struct Context {
    pub region: Option<String>,
    pub config: Option<PathBuf>,
}

/// Execute a command.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    use Command::*;

    let ctx = Context {
        region: cli.region,
        config: cli.config,
    };

    match cli.command {
        Run { sources, command } => run::execute(&ctx, &sources.secrets, &command),
        Export { sources, json } => export::execute(&ctx, &sources.secrets, json),
        Check { sources } => check::execute(&ctx, &sources.secrets),
        Completions { shell } => completions::execute(shell),
    }
}
