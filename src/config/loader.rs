//! Configuration File Loading
//!
//! Finds, loads and saves decorator configuration files in TOML or JSON.

use super::DecoratorConfig;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "SGRDECO_CONFIG";

/// Directory and file stem used under the platform config directory
const APP_NAME: &str = "sgrdeco";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(ConfigFormat::Toml),
            Some("json") => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }
}

/// Configuration file loader
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Candidate configuration files, in priority order
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader over the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
        }
    }

    /// Create a loader over explicit candidate files
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Load configuration from the default search paths, falling back to
    /// the built-in defaults when no file exists
    pub fn load() -> Result<DecoratorConfig> {
        Self::new().load_or_default()
    }

    /// Load the first existing candidate file, or the defaults
    pub fn load_or_default(&self) -> Result<DecoratorConfig> {
        match self.find_config() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(DecoratorConfig::default())
            }
        }
    }

    /// First candidate file that exists
    pub fn find_config(&self) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .inspect(|path| debug!("Looking for config at {}", path.display()))
            .find(|path| path.is_file())
            .cloned()
    }

    /// Load a specific configuration file, format chosen by extension
    pub fn load_from_path(path: &Path) -> Result<DecoratorConfig> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::UnsupportedConfigFormat {
            path: path.to_path_buf(),
        })?;

        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Self::parse(&content, format)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text
    pub fn parse(content: &str, format: ConfigFormat) -> Result<DecoratorConfig> {
        let parsed: std::result::Result<DecoratorConfig, String> = match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| Error::ConfigParseFailed {
            format: format.name().to_string(),
            reason,
        })
    }

    /// Save configuration to a specific path, format chosen by extension
    pub fn save_to_path(config: &DecoratorConfig, path: &Path) -> Result<()> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::UnsupportedConfigFormat {
            path: path.to_path_buf(),
        })?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match format {
            ConfigFormat::Toml => toml::to_string_pretty(config).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        }
        .map_err(|reason| Error::ConfigSerializationFailed {
            format: format.name().to_string(),
            reason,
        })?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Get default search paths for configuration files
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(explicit) = env::var_os(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(explicit));
        }

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(APP_NAME).join("config.toml"));
            paths.push(config_dir.join(APP_NAME).join("config.json"));
        }

        // Current working directory
        if let Ok(cwd) = env::current_dir() {
            paths.push(cwd.join(format!("{APP_NAME}.toml")));
        }

        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
