//! Configuration module for the analyzer.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the `analizador` binary.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use anz_lex::Limits;

use crate::error::{AnalyzerError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "analizador.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Source file to analyze.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory the report files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Whether to write the report files at all.
    #[serde(default = "default_true")]
    pub write_reports: bool,

    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Literal limits enforced by the lexer.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Literal limits, as written in the configuration file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    /// Maximum characters between the quotes of a string literal.
    #[serde(default = "default_max_string_chars")]
    pub max_string_chars: usize,

    /// Largest accepted integer literal.
    #[serde(default = "default_max_integer")]
    pub max_integer: u32,
}

fn default_input() -> PathBuf {
    PathBuf::from("input").join("input.txt")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_true() -> bool {
    true
}

fn default_max_string_chars() -> usize {
    Limits::default().max_string_chars
}

fn default_max_integer() -> u32 {
    Limits::default().max_integer
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            write_reports: true,
            verbose: false,
            limits: LimitsConfig::default(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_string_chars: default_max_string_chars(),
            max_integer: default_max_integer(),
        }
    }
}

impl From<LimitsConfig> for Limits {
    fn from(config: LimitsConfig) -> Self {
        Limits {
            max_string_chars: config.max_string_chars,
            max_integer: config.max_integer,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/analizador/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(AnalyzerError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalyzerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            AnalyzerError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let write_error = |source| AnalyzerError::Report {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            AnalyzerError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content).map_err(write_error)?;
        Ok(())
    }

    /// Reject settings the lexer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.limits.max_string_chars == 0 {
            return Err(AnalyzerError::Config(
                "limits.max_string_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn lexer_limits(&self) -> Limits {
        self.limits.into()
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("analizador").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("analizador").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            input: PathBuf::from("/tmp/programa.txt"),
            output_dir: PathBuf::from("/tmp/salida"),
            write_reports: false,
            verbose: true,
            limits: LimitsConfig {
                max_string_chars: 10,
                max_integer: 255,
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(config.write_reports);
        assert_eq!(config.input, PathBuf::from("input/input.txt"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.limits.max_string_chars, 64);
        assert_eq!(config.limits.max_integer, 32767);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("analizador.toml");

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("analizador.toml");
        std::fs::write(&config_path, "verbose = true\n[limits]\nmax_integer = 100\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.limits.max_integer, 100);
        assert_eq!(config.limits.max_string_chars, 64);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("analizador.toml");
        std::fs::write(&config_path, "verbose = [").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(AnalyzerError::Config(_))));
    }

    #[test]
    fn test_zero_string_limit_rejected() {
        let mut config = Config::default();
        config.limits.max_string_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/analizador.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_lexer_limits() {
        let limits = create_test_config().lexer_limits();
        assert_eq!(limits.max_string_chars, 10);
        assert_eq!(limits.max_integer, 255);
    }
}
