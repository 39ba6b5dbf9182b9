//! Application configuration loaded from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use quote_core::catalog::CatalogConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Registered backend name: "memory" or "csv".
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Backend-specific source, e.g. the CSV directory.
    #[serde(default)]
    pub source: Option<String>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Label printed after every amount.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Level or full `EnvFilter` directive.
    #[serde(default = "default_level")]
    pub level: String,
    /// Append log records to this file as well.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_currency() -> String {
    "RON".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(
        content: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from `path`, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Apply command-line overrides. `None` keeps the file value.
    pub fn apply_overrides(
        &mut self,
        backend: Option<String>,
        source: Option<String>,
        log_level: Option<String>,
    ) {
        if let Some(backend) = backend {
            self.catalog.backend = backend;
        }
        if source.is_some() {
            self.catalog.source = source;
        }
        if let Some(level) = log_level {
            self.logging.level = level;
        }
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            backend: self.catalog.backend.clone(),
            source: self.catalog.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_when_no_file() {
        let config = AppConfig::load(None).unwrap();

        assert_eq!(config.catalog.backend, "memory");
        assert_eq!(config.catalog.source, None);
        assert_eq!(config.display.currency, "RON");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = AppConfig::from_toml("", Path::new("empty.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml = r#"
            [catalog]
            backend = "csv"
            source = "catalog"

            [display]
            currency = "EUR"
        "#;

        let config = AppConfig::from_toml(toml, Path::new("quote.toml")).unwrap();

        assert_eq!(config.catalog.backend, "csv");
        assert_eq!(config.catalog.source.as_deref(), Some("catalog"));
        assert_eq!(config.display.currency, "EUR");
        assert_eq!(config.logging, LoggingSection::default());
    }

    #[test]
    fn parse_error_names_file() {
        let err = AppConfig::from_toml("[catalog\nbackend =", Path::new("broken.toml"))
            .expect_err("should fail");

        assert!(err.to_string().contains("broken.toml"), "got: {err}");
    }

    #[test]
    fn missing_file_is_read_error() {
        let result = AppConfig::load(Some(Path::new("/this/path/does/not/exist.toml")));

        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = AppConfig::default();
        config.catalog.source = Some("from-file".to_string());

        config.apply_overrides(Some("csv".to_string()), None, Some("debug".to_string()));

        assert_eq!(config.catalog.backend, "csv");
        assert_eq!(config.catalog.source.as_deref(), Some("from-file"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn catalog_config_mirrors_section() {
        let mut config = AppConfig::default();
        config.apply_overrides(None, Some("data".to_string()), None);

        let catalog = config.catalog_config();

        assert_eq!(
            catalog,
            CatalogConfig {
                backend: "memory".to_string(),
                source: Some("data".to_string()),
            }
        );
    }
}
