//! Configuration loading utilities

use crate::schema::Config;
use bikeshare_common::{DashboardError, Result as DashboardResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "BIKESHARE_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["dashboard.yaml", "dashboard.yml", "dashboard.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment
    /// variable overrides.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::parse(path, &content)?;
        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Lookup order: `BIKESHARE_CONFIG_PATH`, then `dashboard.yaml`,
    /// `dashboard.yml` and `dashboard.toml` in the working directory, then
    /// built-in defaults. Environment overrides apply in every case.
    pub fn load() -> DashboardResult<Config> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Ok(Self::load_config(config_path)?);
        }

        if let Some(path) = DEFAULT_CONFIG_FILES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
        {
            return Ok(Self::load_config(path)?);
        }

        debug!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Check a configuration against the schema rules. Callers that change
    /// a loaded configuration, such as command-line overrides, run this
    /// again afterwards.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::from)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Parse configuration text, choosing the format from the file extension.
    pub fn parse(path: &Path, content: &str) -> Result<Config, ConfigError> {
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }

    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |name| env::var(name).ok())
    }

    /// Apply overrides looked up through `lookup`, keyed by environment
    /// variable name.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("BIKESHARE_DATA_PATH") {
            config.data.path = PathBuf::from(path);
        }

        if let Some(host) = lookup("BIKESHARE_HOST") {
            config.server.host = host.parse().map_err(|e| ConfigError::EnvParse {
                var: "BIKESHARE_HOST".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(port) = lookup("BIKESHARE_PORT") {
            config.server.port = port.parse().map_err(|e| ConfigError::EnvParse {
                var: "BIKESHARE_PORT".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(level) = lookup("BIKESHARE_LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColorScheme;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults() {
        let config = ConfigLoader::parse(
            Path::new("dashboard.yaml"),
            "data:\n  path: /srv/bike/day.csv\nserver:\n  port: 9000\n",
        )
        .unwrap();

        assert_eq!(config.data.path, PathBuf::from("/srv/bike/day.csv"));
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.graphs, crate::GraphsConfig::default());
    }

    #[test]
    fn test_parse_toml_by_extension() {
        let config = ConfigLoader::parse(
            Path::new("dashboard.toml"),
            "[graphs]\nscale = 2.0\ncolor_scheme = \"vibrant\"\n",
        )
        .unwrap();

        assert!((config.graphs.scale - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.graphs.color_scheme, ColorScheme::Vibrant);
    }

    #[test]
    fn test_parse_custom_palette() {
        let config = ConfigLoader::parse(
            Path::new("dashboard.toml"),
            "[graphs]\ncolor_scheme = { custom = [\"#FF0000\", \"#00FF00\"] }\n",
        )
        .unwrap();

        assert_eq!(
            config.graphs.color_scheme,
            ColorScheme::Custom(vec!["#FF0000".to_string(), "#00FF00".to_string()])
        );
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let file = write_config(".yaml", "graphs:\n  background_color: white\n");
        let err = ConfigLoader::load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_after_changes() {
        let mut config = Config::default();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.logging.level = "verbose".to_string();
        let err = ConfigLoader::validate(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = ConfigLoader::load_config("/nonexistent/dashboard.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/dashboard.yaml"));
    }

    #[test]
    fn test_apply_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BIKESHARE_DATA_PATH", "hour.csv"),
            ("BIKESHARE_HOST", "0.0.0.0"),
            ("BIKESHARE_PORT", "8080"),
            ("BIKESHARE_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        ConfigLoader::apply_overrides(&mut config, |name| {
            vars.get(name).map(|v| (*v).to_string())
        })
        .unwrap();

        assert_eq!(config.data.path, PathBuf::from("hour.csv"));
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_apply_overrides_rejects_bad_port() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, |name| {
            (name == "BIKESHARE_PORT").then(|| "eighty".to_string())
        })
        .unwrap_err();

        match err {
            ConfigError::EnvParse { var, .. } => assert_eq!(var, "BIKESHARE_PORT"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
