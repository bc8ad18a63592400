//! Engine configuration, loadable from TOML
//!
//! The engine works without any configuration: [`EngineConfig::default`]
//! is the fixed five-second budget with no depth cap. A config file is only
//! read by the command-line game.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::search::{SearchLimits, DEFAULT_TIME_LIMIT};

/// Search settings for the computer player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Thinking time per move in milliseconds
    pub time_limit_ms: u64,
    /// Deepest iteration to run; absent means no cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u8>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            time_limit_ms: u64::try_from(DEFAULT_TIME_LIMIT.as_millis()).unwrap_or(u64::MAX),
            max_depth: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit_ms == 0 {
            return Err(ConfigError::Validation("time_limit_ms must be > 0".into()));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Validation("max_depth must be >= 1".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    /// Search bounds for one move
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.time_limit(),
            max_depth: self.max_depth,
            max_nodes: None,
        }
    }

    /// Render the configuration as TOML (useful for creating config files).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.time_limit(), Duration::from_secs(5));
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: EngineConfig = toml::from_str("max_depth = 6").unwrap();
        assert_eq!(config.max_depth, Some(6));
        assert_eq!(config.time_limit_ms, 5000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_time_limit() {
        let config = EngineConfig {
            time_limit_ms: 0,
            max_depth: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let config = EngineConfig {
            time_limit_ms: 100,
            max_depth: Some(0),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limits() {
        let config = EngineConfig {
            time_limit_ms: 250,
            max_depth: Some(7),
        };
        let limits = config.limits();
        assert_eq!(limits.time_limit, Duration::from_millis(250));
        assert_eq!(limits.max_depth, Some(7));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "time_limit_ms = 1500").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.time_limit_ms, 1500);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "time_limit_ms = 0\n").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "time_limit_ms = \"fast\"\n").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_toml_roundtrips() {
        let config = EngineConfig {
            time_limit_ms: 800,
            max_depth: Some(9),
        };
        let toml_str = config.to_toml().unwrap();
        let parsed: EngineConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);

        let default_str = EngineConfig::default().to_toml().unwrap();
        assert!(!default_str.contains("max_depth"));
    }
}
