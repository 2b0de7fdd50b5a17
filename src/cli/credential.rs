//! Handlers for the credential-mutating commands.

use crate::cli::CliContext;
use crate::constants;
use crate::core::{config, generator, manager, store};
use anyhow::{bail, Context, Result};
use clap::Args;
use dialoguer::Password;
use std::io::Read;
use zeroize::Zeroizing;

#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Print the new password to stdout
    #[arg(long)]
    pub show: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Length of the generated password
    #[arg(long, default_value_t = constants::DEFAULT_PASSWORD_LENGTH)]
    pub length: usize,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Read the password from stdin instead of an interactive prompt
    #[arg(long)]
    pub from_stdin: bool,
}

pub fn run_ensure(ctx: &CliContext) -> Result<()> {
    let mut cfg = config::load(&ctx.env_file)?;
    match manager::ensure_password(&mut cfg, &ctx.env_file)? {
        manager::BootstrapOutcome::Accepted => {
            println!(
                "Configured password accepted; {} untouched",
                ctx.env_file.display()
            );
        }
        manager::BootstrapOutcome::GeneratedPersisted => {
            println!(
                "Generated a new password and saved it to {}",
                ctx.env_file.display()
            );
        }
        manager::BootstrapOutcome::GeneratedEphemeral => {
            println!(
                "Generated a new password but could not save it to {}; it is valid for this process only",
                ctx.env_file.display()
            );
        }
    }
    Ok(())
}

pub fn run_reset(ctx: &CliContext, args: ResetArgs) -> Result<()> {
    let mut cfg = config::load(&ctx.env_file)?;
    let password = Zeroizing::new(manager::reset_password(&mut cfg, &ctx.env_file)?);
    if args.show {
        println!("{}", password.as_str());
    } else {
        println!("Wrote {}", ctx.env_file.display());
    }
    Ok(())
}

pub fn run_generate(_ctx: &CliContext, args: GenerateArgs) -> Result<()> {
    let password = Zeroizing::new(generator::generate_password(args.length)?);
    println!("{}", password.as_str());
    Ok(())
}

pub fn run_set(ctx: &CliContext, args: SetArgs) -> Result<()> {
    if ctx.non_interactive && !args.from_stdin {
        bail!("--non-interactive requires --from-stdin for set");
    }

    let password = read_secret(args.from_stdin)?;
    if manager::is_rejected(&password) {
        bail!("refusing to set an empty or known-default password");
    }

    store::persist(&ctx.env_file, constants::MANAGED_KEY, &password)?;
    println!("Wrote {}", ctx.env_file.display());
    Ok(())
}

fn read_secret(from_stdin: bool) -> Result<Zeroizing<String>> {
    if from_stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read password from stdin")?;
        Ok(Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string()))
    } else {
        Ok(Zeroizing::new(
            Password::new()
                .with_prompt("New admin password")
                .allow_empty_password(false)
                .interact()
                .context("read password from prompt")?,
        ))
    }
}
