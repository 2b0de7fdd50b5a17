//! CLI routing and command dispatch.

use crate::core::paths;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod credential;
pub mod status;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub env_file: PathBuf,
    pub non_interactive: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "webui-bootstrap",
    version,
    about = "Admin credential bootstrap for the WebUI"
)]
pub struct Cli {
    /// Store file holding the WEBUI_* settings
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Run in non-interactive mode (no prompts, suitable for automation)
    #[arg(long, global = true, env = "WEBUI_BOOTSTRAP_NON_INTERACTIVE")]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let ctx = CliContext {
            env_file: paths::resolve_env_file(self.env_file),
            non_interactive: self.non_interactive,
        };

        match self.command {
            Commands::Ensure => credential::run_ensure(&ctx),
            Commands::Reset(args) => credential::run_reset(&ctx, args),
            Commands::Generate(args) => credential::run_generate(&ctx, args),
            Commands::Set(args) => credential::run_set(&ctx, args),
            Commands::Status(args) => status::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make sure an acceptable admin password exists and is persisted
    Ensure,
    /// Rotate to a fresh password regardless of the current one
    Reset(credential::ResetArgs),
    /// Print a policy-compliant password without saving anything
    Generate(credential::GenerateArgs),
    /// Persist an operator-chosen password
    Set(credential::SetArgs),
    /// Inspect the store file and the configured password
    Status(status::StatusArgs),
}
