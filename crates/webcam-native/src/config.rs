//! Bridge configuration
//!
//! The defaults match what the Android app expects in logcat; a host may
//! override them with a JSON file named by `WEBCAM_NATIVE_CONFIG`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{BridgeError, Result};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "WEBCAM_NATIVE_CONFIG";

/// Log tag the Android app filters logcat on.
pub const DEFAULT_TAG: &str = "WebCamNative";

/// Label preceding the version in the emitted log line.
pub const DEFAULT_LABEL: &str = "OpenCV版本";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for a [`crate::VersionBridge`] and the platform logger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Tag attached to every log record
    pub tag: String,
    /// Message label, rendered as `<label>: <version>`
    pub label: String,
    /// Default log level when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            label: DEFAULT_LABEL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `WEBCAM_NATIVE_CONFIG`, or defaults when unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::from_file(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Check the values that cross C string boundaries.
    pub fn validate(&self) -> Result<()> {
        check_c_text("tag", &self.tag)?;
        check_c_text("label", &self.label)?;
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(BridgeError::Config(format!(
                "unknown log_level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    /// Render the log line for a version string.
    pub fn message_for(&self, version: &str) -> String {
        format!("{}: {}", self.label, version)
    }
}

fn check_c_text(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BridgeError::Config(format!("{field} must not be empty")));
    }
    if value.contains('\0') {
        return Err(BridgeError::Config(format!(
            "{field} must not contain NUL bytes"
        )));
    }
    Ok(())
}
