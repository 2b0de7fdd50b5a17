//! Configuration loading from the store file and process environment.

use crate::constants;
use crate::models::config::WebUiConfig;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Load the WebUI configuration snapshot.
///
/// Values come from the store file first; process environment variables
/// override them. A missing file or missing keys fall back to the model
/// defaults.
pub fn load(env_file: &Path) -> Result<WebUiConfig> {
    let mut config = WebUiConfig::default();

    if env_file.exists() {
        let content = fs::read_to_string(env_file)
            .with_context(|| format!("read {}", env_file.display()))?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                apply(&mut config, key.trim(), unquote(value));
            }
        }
    }

    for key in [
        constants::ENABLED_KEY,
        constants::USER_NAME_KEY,
        constants::MANAGED_KEY,
    ] {
        if let Ok(value) = env::var(key) {
            apply(&mut config, key, value);
        }
    }

    Ok(config)
}

fn apply(config: &mut WebUiConfig, key: &str, value: String) {
    match key {
        constants::ENABLED_KEY => config.enabled = parse_bool(&value),
        constants::USER_NAME_KEY => config.user_name = value,
        constants::MANAGED_KEY => config.password = value,
        _ => {}
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn unquote(raw: &str) -> String {
    raw.trim().trim_matches('"').trim_matches('\'').to_string()
}
