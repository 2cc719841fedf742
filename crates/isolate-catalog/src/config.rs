//! Configuration for the isolate catalog
//!
//! Loaded from `<config_dir>/isolate-catalog/config.toml` when present:
//!
//! ```toml
//! snapshot_path = "/var/lib/isolates/snapshot.json"
//!
//! [taxonomy]
//! root_name = "Microorganisms"
//!
//! [logging]
//! filter = "isolate_catalog=debug,info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use isolate_taxonomy::ROOT_NAME;

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON snapshot to load at startup
    pub snapshot_path: Option<PathBuf>,
    /// Taxonomy tree settings
    pub taxonomy: TaxonomyConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            taxonomy: TaxonomyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Taxonomy tree configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Name of the root node
    pub root_name: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            root_name: ROOT_NAME.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Default location of the configuration file
    pub fn standard_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("isolate-catalog").join("config.toml"))
    }

    /// Load from the standard location, falling back to defaults when absent
    pub fn load_standard() -> Result<Self, ConfigError> {
        match Self::standard_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading catalog config from {:?}", path);
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.taxonomy.root_name.trim().is_empty() {
            return Err(ConfigError::Invalid("taxonomy.root_name must not be empty".to_string()));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.filter must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Configuration load or validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.taxonomy.root_name, "Microorganisms");
        assert!(config.snapshot_path.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CatalogConfig::default();
        config.snapshot_path = Some(PathBuf::from("/tmp/snapshot.json"));
        config.logging.filter = "debug".into();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(CatalogConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CatalogConfig::from_toml("[taxonomy]\nroot_name = \"Cave microbes\"\n").unwrap();
        assert_eq!(config.taxonomy.root_name, "Cave microbes");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_invalid_root_name() {
        let mut config = CatalogConfig::default();
        config.taxonomy.root_name = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(CatalogConfig::from_toml("taxonomy = 3"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nfilter = \"warn\"\n").unwrap();
        let config = CatalogConfig::load(&path).unwrap();
        assert_eq!(config.logging.filter, "warn");

        assert!(matches!(
            CatalogConfig::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
