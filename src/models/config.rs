//! WebUI configuration model supplied to the credential manager.

use serde::{Deserialize, Serialize};

/// Configuration snapshot for the WebUI admin account.
///
/// Read-mostly: the manager only writes `password`, and only in memory,
/// so the running process always observes the winning credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebUiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default)]
    pub password: String,
}

impl Default for WebUiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            user_name: default_user_name(),
            password: String::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_user_name() -> String {
    "admin".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WebUiConfig::default();
        assert!(config.enabled);
        assert_eq!(config.user_name, "admin");
        assert!(config.password.is_empty());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: WebUiConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enabled);
        assert_eq!(config.user_name, "admin");
        assert!(config.password.is_empty());
    }
}
