use serde::{Deserialize, Serialize};

use super::assets::AssetConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::telemetry::TelemetryConfig;

const LOCAL_CONFIG_PATH: &str = "favicon.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/favicon/config.toml";

/// Main configuration structure for the favicon resolver
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Cache, race and timeout settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Bundled icon location
    #[serde(default)]
    pub assets: AssetConfig,

    /// Failure telemetry
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. favicon.toml in current directory
    /// 3. /etc/favicon/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(directory) = overrides.asset_directory {
            self.assets.directory = directory;
        }
        if let Some(capacity) = overrides.cache_capacity {
            self.resolver.cache_capacity = capacity;
        }
        if overrides.disable_telemetry {
            self.telemetry.enabled = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;

        if resolver.cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "Cache capacity cannot be 0".to_string(),
            ));
        }

        if resolver.request_timeout_secs == 0 || resolver.resource_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Fetch timeouts must be greater than 0".to_string(),
            ));
        }

        if !resolver.aggregator_url.starts_with("http") {
            return Err(ConfigError::Validation(format!(
                "Aggregator URL '{}' is not an http(s) URL",
                resolver.aggregator_url
            )));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|candidate| std::path::Path::new(candidate).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub asset_directory: Option<String>,
    pub cache_capacity: Option<usize>,
    pub disable_telemetry: bool,
}
