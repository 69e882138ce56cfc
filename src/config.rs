use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::{
    composition::ComposeOptions,
    error::{ConfigError, Result},
};

/// Main configuration for the banner compositor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Caption font settings
    #[serde(default)]
    pub font: FontConfig,

    /// Defaults applied to each composition
    #[serde(default)]
    pub compose: ComposeOptions,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.compose.validate()?;
        Ok(())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Largest accepted request body, both uploads included
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_upload_bytes: 32 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.port".to_string(),
                value: self.port.to_string()
            }.into());
        }

        if self.max_upload_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.max_upload_bytes".to_string(),
                value: self.max_upload_bytes.to_string()
            }.into());
        }

        Ok(())
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Caption font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType file tried first; the built-in face is used when it can't be read
    pub path: PathBuf,

    /// Extra pixels between caption lines
    pub line_spacing: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Poppins-Regular.ttf"),
            line_spacing: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.compose.font_size, 50);
        assert_eq!(config.font.path, PathBuf::from("Poppins-Regular.ttf"));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original_config = Config::default();
        original_config.server.port = 8080;
        original_config.compose.font_size = 72;

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(loaded_config.server.port, 8080);
        assert_eq!(loaded_config.compose.font_size, 72);
        assert_eq!(original_config.font.line_spacing, loaded_config.font.line_spacing);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(&file_path, "[server]\nport = 9000\n").unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.compose.font_size, 50);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let err = Config::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CompositorError::Config(ConfigError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_font_size() {
        let mut config = Config::default();
        config.compose.font_size = 0;
        assert!(config.validate().is_err());

        config.compose.font_size = 1_000_000;
        assert!(config.validate().is_err());
    }
}
