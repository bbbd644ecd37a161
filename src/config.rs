//! Decoder configuration
//!
//! Settings can be loaded from and saved to JSON or TOML files; the format
//! is picked from the file extension.

use crate::{RadiotapError, Result};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Hand the payload to the frame decoder. When false the payload is
    /// kept as raw bytes.
    pub decode_payload: bool,
    /// Fail the whole decode when the frame decoder rejects the payload.
    /// When false the payload falls back to raw bytes.
    pub strict_payload: bool,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

/// Outcome of [`DecoderConfig::validate`]
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            decode_payload: true,
            strict_payload: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DecoderConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| RadiotapError::Config(format!("Failed to read config file: {}", e)))?;

        let config: DecoderConfig = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| RadiotapError::Config(format!("Failed to parse JSON config: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| RadiotapError::Config(format!("Failed to parse TOML config: {}", e)))?,
            _ => return Err(RadiotapError::Config("Unsupported config file format".to_string())),
        };

        let validation = config.validate();
        if !validation.valid {
            return Err(RadiotapError::Config(format!(
                "Configuration validation failed: {}",
                validation.errors.join(", ")
            )));
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => self.to_json()?,
            Some("toml") => self.to_toml()?,
            _ => return Err(RadiotapError::Config("Unsupported config file format".to_string())),
        };

        fs::write(path, content)
            .map_err(|e| RadiotapError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            result.errors.push(format!(
                "Invalid log level '{}', must be one of: {}",
                self.logging.level,
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        if !self.decode_payload && !self.strict_payload {
            result
                .warnings
                .push("strict_payload has no effect when decode_payload is off".to_string());
        }

        result.valid = result.errors.is_empty();
        result
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RadiotapError::Config(format!("Failed to serialize config to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("radiotap-decoder-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_config_default() {
        let config = DecoderConfig::default();
        assert!(config.decode_payload);
        assert!(config.strict_payload);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().valid);
    }

    #[test]
    fn test_config_validation_errors() {
        let mut config = DecoderConfig::default();
        config.logging.level = "loud".to_string();

        let result = config.validate();
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_config_validation_warnings() {
        let config = DecoderConfig {
            decode_payload: false,
            strict_payload: false,
            ..Default::default()
        };

        let result = config.validate();
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = DecoderConfig::default();

        let json = config.to_json().unwrap();
        assert!(json.contains("decode_payload"));

        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DecoderConfig = toml::from_str("strict_payload = false\n").unwrap();
        assert!(config.decode_payload);
        assert!(!config.strict_payload);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let config = DecoderConfig {
            decode_payload: false,
            ..Default::default()
        };

        for ext in ["json", "toml"] {
            let path = temp_path(&format!("config.{}", ext));
            config.save_to_file(&path).unwrap();
            let loaded = DecoderConfig::load_from_file(&path).unwrap();
            let _ = fs::remove_file(&path);
            assert_eq!(loaded, config);
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DecoderConfig::default()
            .save_to_file(temp_path("config.ini"))
            .unwrap_err();
        assert!(matches!(err, RadiotapError::Config(_)));
    }
}
