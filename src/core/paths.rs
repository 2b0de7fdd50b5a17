//! Store file location resolution.

use crate::constants;
use std::env;
use std::path::PathBuf;

/// Resolve the store file path from a CLI argument, the environment, or
/// the default relative location, in that order.
pub fn resolve_env_file(arg: Option<PathBuf>) -> PathBuf {
    if let Some(path) = arg {
        return path;
    }
    if let Ok(path) = env::var(constants::ENV_FILE_VAR) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    PathBuf::from(constants::DEFAULT_ENV_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arg_wins() {
        let path = resolve_env_file(Some(PathBuf::from("/etc/webui/.env")));
        assert_eq!(path, PathBuf::from("/etc/webui/.env"));
    }

    #[test]
    fn test_falls_back_to_default() {
        // The override variable is not set under the test runner.
        if env::var(constants::ENV_FILE_VAR).is_err() {
            assert_eq!(resolve_env_file(None), PathBuf::from(".env"));
        }
    }
}
