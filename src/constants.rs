//! Centralized constants for the managed credential and its store file.

/// Default store file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// The single key this tool owns exclusively within the store file. Also
/// the environment variable carrying the configured password.
pub const MANAGED_KEY: &str = "WEBUI_PASSWORD";

/// Environment variable / store key toggling the WebUI.
pub const ENABLED_KEY: &str = "WEBUI_ENABLED";

/// Environment variable / store key for the admin account name.
pub const USER_NAME_KEY: &str = "WEBUI_USER_NAME";

/// Environment variable overriding the store file location.
pub const ENV_FILE_VAR: &str = "WEBUI_BOOTSTRAP_ENV_FILE";

/// Default length for generated passwords.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Smallest length that can cover all four required character classes.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Symbols eligible for generated passwords.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()";

/// Configured passwords rejected as known defaults.
pub const KNOWN_DEFAULT_PASSWORDS: &[&str] = &["admin123"];

/// Attempt cap for the generate-until-compliant loop. Class coverage at
/// the default length succeeds within a handful of attempts, so hitting
/// this cap means the random source is broken.
pub const MAX_GENERATE_ATTEMPTS: usize = 1024;

/// Permission mode for a store file this tool creates.
pub const ENV_FILE_MODE: u32 = 0o600;
