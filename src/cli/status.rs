//! Read-only inspection of the store file and the configured password.

use crate::cli::CliContext;
use crate::constants;
use crate::core::{config, manager, store};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, Table};
use serde::Serialize;
use std::fs;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Serialize)]
struct StatusReport {
    env_file: String,
    env_file_exists: bool,
    managed_key: &'static str,
    managed_key_present: bool,
    password_acceptable: bool,
    password_preview: Option<String>,
    enabled: bool,
    user_name: String,
    modified: Option<String>,
}

pub fn run(ctx: &CliContext, args: StatusArgs) -> Result<()> {
    if args.format != "table" && args.format != "json" {
        bail!("invalid format: {} (use table|json)", args.format);
    }

    let cfg = config::load(&ctx.env_file)?;
    let exists = ctx.env_file.is_file();
    let managed_key_present = store::lookup(&ctx.env_file, constants::MANAGED_KEY)?.is_some();

    let modified = if exists {
        fs::metadata(&ctx.env_file)
            .ok()
            .and_then(|m| m.modified().ok())
            .map(|t| {
                let dt: DateTime<Local> = t.into();
                dt.format("%Y-%m-%d %H:%M:%S").to_string()
            })
    } else {
        None
    };

    let report = StatusReport {
        env_file: ctx.env_file.display().to_string(),
        env_file_exists: exists,
        managed_key: constants::MANAGED_KEY,
        managed_key_present,
        password_acceptable: !manager::is_rejected(&cfg.password),
        password_preview: if cfg.password.is_empty() {
            None
        } else {
            Some(mask_value(&cfg.password))
        },
        enabled: cfg.enabled,
        user_name: cfg.user_name,
        modified,
    };

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&report).context("serialize status")?;
        println!("{}", json);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("store file"), Cell::new(&report.env_file)]);
    table.add_row(vec![
        Cell::new("file exists"),
        yes_no(report.env_file_exists),
    ]);
    table.add_row(vec![
        Cell::new(format!("{} present", report.managed_key)),
        yes_no(report.managed_key_present),
    ]);
    table.add_row(vec![
        Cell::new("password acceptable"),
        yes_no(report.password_acceptable),
    ]);
    table.add_row(vec![
        Cell::new("password preview"),
        Cell::new(report.password_preview.as_deref().unwrap_or("-")),
    ]);
    table.add_row(vec![
        Cell::new("webui enabled"),
        yes_no(report.enabled),
    ]);
    table.add_row(vec![Cell::new("admin user"), Cell::new(&report.user_name)]);
    table.add_row(vec![
        Cell::new("modified"),
        Cell::new(report.modified.as_deref().unwrap_or("-")),
    ]);

    println!("{}", table);
    Ok(())
}

fn yes_no(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    }
}

/// Masked preview of a secret: first and last two characters only.
fn mask_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..2].iter().collect();
        let tail: String = chars[chars.len() - 2..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_value() {
        assert_eq!(mask_value("abcdef"), "ab...ef");
        assert_eq!(mask_value("ab"), "**");
        assert_eq!(mask_value(""), "");
        assert_eq!(mask_value("pässwörd"), "pä...rd");
    }
}
