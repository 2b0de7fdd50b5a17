//! Decision logic for the admin credential: accept, rotate, persist,
//! report.

use crate::constants;
use crate::core::{generator, store};
use crate::models::config::WebUiConfig;
use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

/// Outcome of one evaluation of the configured password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The configured value was acceptable; nothing was written.
    Accepted,
    /// A fresh value was generated and durably saved.
    GeneratedPersisted,
    /// A fresh value was generated but could not be saved. It is valid
    /// for the current process only.
    GeneratedEphemeral,
}

/// Whether a configured password is unacceptable: empty or a known
/// default. Pure function of the value; configured passwords get no
/// further strength checks.
pub fn is_rejected(password: &str) -> bool {
    password.is_empty() || constants::KNOWN_DEFAULT_PASSWORDS.contains(&password)
}

/// Ensure the configuration snapshot carries a usable admin password.
///
/// An acceptable configured value is kept as-is and the store file is not
/// touched. Otherwise a fresh value is generated, persisted best-effort,
/// and written into the snapshot, so callers always observe a usable
/// credential whatever the persistence outcome.
pub fn ensure_password(config: &mut WebUiConfig, env_file: &Path) -> Result<BootstrapOutcome> {
    if !is_rejected(&config.password) {
        return Ok(BootstrapOutcome::Accepted);
    }

    let password = generator::generate_password(constants::DEFAULT_PASSWORD_LENGTH)?;
    let persisted = try_persist(env_file, &password);
    config.password = password;

    reveal_secret(&config.password, env_file, persisted);
    if persisted {
        Ok(BootstrapOutcome::GeneratedPersisted)
    } else {
        Ok(BootstrapOutcome::GeneratedEphemeral)
    }
}

/// Current admin password, generating and persisting a new one if the
/// configured value is unacceptable.
pub fn get_or_create(config: &mut WebUiConfig, env_file: &Path) -> Result<String> {
    ensure_password(config, env_file)?;
    Ok(config.password.clone())
}

/// Rotate to a fresh password regardless of the current value.
///
/// Persistence is attempted exactly once; a failure is logged and the new
/// value still replaces the in-memory one. Returns the new password.
pub fn reset_password(config: &mut WebUiConfig, env_file: &Path) -> Result<String> {
    let password = generator::generate_password(constants::DEFAULT_PASSWORD_LENGTH)?;
    try_persist(env_file, &password);
    config.password = password;
    info!("admin password has been reset");
    Ok(config.password.clone())
}

/// Best-effort persistence: failures are logged and reported as `false`,
/// never propagated, since the generated value stays valid in memory for
/// the current process.
fn try_persist(env_file: &Path, password: &str) -> bool {
    match store::persist(env_file, constants::MANAGED_KEY, password) {
        Ok(()) => true,
        Err(e) => {
            error!(
                "cannot save {} to {}: {:#}",
                constants::MANAGED_KEY,
                env_file.display(),
                e
            );
            false
        }
    }
}

/// The only place a plaintext secret reaches the log stream. There is no
/// other delivery channel for an auto-generated password, so it is
/// surfaced once at elevated severity for the operator to retrieve.
fn reveal_secret(password: &str, env_file: &Path, persisted: bool) {
    if persisted {
        warn!(
            "admin password was auto-generated and saved to {}: {}",
            env_file.display(),
            password
        );
        warn!(
            "the same password is used on the next startup; edit {} in {} to change it",
            constants::MANAGED_KEY,
            env_file.display()
        );
    } else {
        error!(
            "admin password was auto-generated but could not be saved: {}",
            password
        );
        error!("a new password will be generated on the next restart");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::generator::meets_complexity;
    use std::fs;
    use tempfile::TempDir;

    fn config_with(password: &str) -> WebUiConfig {
        WebUiConfig {
            password: password.to_string(),
            ..WebUiConfig::default()
        }
    }

    #[test]
    fn test_is_rejected() {
        assert!(is_rejected(""));
        assert!(is_rejected("admin123"));
        assert!(!is_rejected("Tr0ub4dor&3xyz"));
        assert!(!is_rejected("short"));
    }

    #[test]
    fn test_empty_password_is_rotated_and_persisted() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        let mut config = config_with("");

        let outcome = ensure_password(&mut config, &env_file).unwrap();

        assert_eq!(outcome, BootstrapOutcome::GeneratedPersisted);
        assert!(meets_complexity(&config.password));
        assert_eq!(
            fs::read_to_string(&env_file).unwrap(),
            format!("WEBUI_PASSWORD={}\n", config.password)
        );
    }

    #[test]
    fn test_known_default_is_rotated() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        let mut config = config_with("admin123");

        let outcome = ensure_password(&mut config, &env_file).unwrap();

        assert_eq!(outcome, BootstrapOutcome::GeneratedPersisted);
        assert_ne!(config.password, "admin123");
        assert!(meets_complexity(&config.password));
    }

    #[test]
    fn test_acceptable_password_is_kept_without_writing() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        let mut config = config_with("Tr0ub4dor&3xyz");

        let outcome = ensure_password(&mut config, &env_file).unwrap();

        assert_eq!(outcome, BootstrapOutcome::Accepted);
        assert_eq!(config.password, "Tr0ub4dor&3xyz");
        assert!(!env_file.exists());
    }

    #[test]
    fn test_persist_failure_still_updates_config() {
        let dir = TempDir::new().unwrap();
        // A directory at the destination makes persistence fail.
        let env_file = dir.path().join("as-dir");
        fs::create_dir(&env_file).unwrap();
        let mut config = config_with("");

        let outcome = ensure_password(&mut config, &env_file).unwrap();

        assert_eq!(outcome, BootstrapOutcome::GeneratedEphemeral);
        assert!(meets_complexity(&config.password));
    }

    #[test]
    fn test_get_or_create_returns_winning_value() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        let mut config = config_with("");

        let password = get_or_create(&mut config, &env_file).unwrap();

        assert_eq!(password, config.password);
        assert_eq!(
            fs::read_to_string(&env_file).unwrap(),
            format!("WEBUI_PASSWORD={}\n", password)
        );
    }

    #[test]
    fn test_reset_rotates_an_acceptable_password() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        let mut config = config_with("Tr0ub4dor&3xyz");

        let password = reset_password(&mut config, &env_file).unwrap();

        assert_ne!(password, "Tr0ub4dor&3xyz");
        assert!(meets_complexity(&password));
        assert_eq!(config.password, password);
        assert_eq!(
            fs::read_to_string(&env_file).unwrap(),
            format!("WEBUI_PASSWORD={}\n", password)
        );
    }

    #[test]
    fn test_reset_preserves_unrelated_lines() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        fs::write(&env_file, "OTHER=foo\nWEBUI_PASSWORD=old\nZZZ=bar\n").unwrap();
        let mut config = config_with("old");

        let password = reset_password(&mut config, &env_file).unwrap();

        let content = fs::read_to_string(&env_file).unwrap();
        assert_eq!(
            content,
            format!("OTHER=foo\nWEBUI_PASSWORD={}\nZZZ=bar\n", password)
        );
    }
}
