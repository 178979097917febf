//! Configuration for trees built by this crate.
//!
//! Supports YAML file and environment variable overrides.

use serde::Deserialize;
use std::path::Path;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "redblack.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "REDBLACK_CONFIG";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "REDBLACK_LOG";
/// Environment variable overriding the initial arena capacity.
pub const INITIAL_CAPACITY_ENV_VAR: &str = "REDBLACK_INITIAL_CAPACITY";
/// Environment variable overriding the node limit.
pub const MAX_NODES_ENV_VAR: &str = "REDBLACK_MAX_NODES";
/// Environment variable enabling post-mutation validation.
pub const VERIFY_ENV_VAR: &str = "REDBLACK_VERIFY";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree construction settings.
    pub tree: TreeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Tree construction settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Node slots reserved up front.
    pub initial_capacity: usize,
    /// Upper bound on live nodes. Inserting past it reports out-of-memory.
    pub max_nodes: Option<usize>,
    /// Validate every invariant after each insert and delete, panicking on a
    /// violation. Costs O(n) per mutation.
    pub verify_invariants: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `REDBLACK_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (`REDBLACK_CONFIG`, else `redblack.yaml` if present)
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(capacity) = std::env::var(INITIAL_CAPACITY_ENV_VAR) {
            if let Ok(c) = capacity.parse() {
                self.tree.initial_capacity = c;
            }
        }

        if let Ok(limit) = std::env::var(MAX_NODES_ENV_VAR) {
            if let Ok(l) = limit.parse() {
                self.tree.max_nodes = Some(l);
            }
        }

        if let Ok(verify) = std::env::var(VERIFY_ENV_VAR) {
            if let Ok(v) = verify.parse() {
                self.tree.verify_invariants = v;
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for var in [
            CONFIG_ENV_VAR,
            INITIAL_CAPACITY_ENV_VAR,
            MAX_NODES_ENV_VAR,
            VERIFY_ENV_VAR,
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tree.initial_capacity, 0);
        assert!(config.tree.max_nodes.is_none());
        assert!(!config.tree.verify_invariants);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = Config::from_yaml("tree:\n  max_nodes: 16\n").unwrap();
        assert_eq!(config.tree.max_nodes, Some(16));
        assert_eq!(config.tree.initial_capacity, 0);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_from_yaml_rejects_bad_types() {
        let err = Config::from_yaml("tree:\n  initial_capacity: lots\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/redblack.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(path, _) if path == "/nonexistent/redblack.yaml"));
    }

    #[test]
    #[serial]
    fn test_load_from_env_path_with_overrides() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "tree:\n  initial_capacity: 32\n  verify_invariants: true\nlogging:\n  filter: debug"
        )
        .unwrap();

        std::env::set_var(CONFIG_ENV_VAR, file.path());
        std::env::set_var(MAX_NODES_ENV_VAR, "100");
        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.tree.initial_capacity, 32);
        assert!(config.tree.verify_invariants);
        assert_eq!(config.tree.max_nodes, Some(100));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    #[serial]
    fn test_load_ignores_unparseable_overrides() {
        clear_env();
        std::env::set_var(CONFIG_ENV_VAR, "/nonexistent/redblack.yaml");
        std::env::set_var(INITIAL_CAPACITY_ENV_VAR, "many");
        std::env::set_var(VERIFY_ENV_VAR, "true");
        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.tree.initial_capacity, 0);
        assert!(config.tree.verify_invariants);
    }
}
