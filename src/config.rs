//! Converter configuration.
//!
//! A [`ConverterConfig`] names the source and target color models and
//! whether input triples are checked against the source model's domain
//! before converting.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_models::{ColorModel, ConverterConfig};
//! use std::path::Path;
//!
//! // Load from file
//! let config = ConverterConfig::from_json_file(Path::new("converter.json"))?;
//!
//! // Or build one
//! let config = ConverterConfig::new(ColorModel::Yiq, ColorModel::Hls);
//! # Ok::<(), color_models::ColorError>(())
//! ```
//!
//! The JSON form uses lowercase model names:
//!
//! ```json
//! { "source": "rgb", "target": "hsv", "validate_input": true }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{color::ColorModel, ColorError, Result};

/// Source/target pair for a [`ColorConverter`](crate::ColorConverter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Model of incoming triples
    pub source: ColorModel,

    /// Model of outgoing triples
    pub target: ColorModel,

    /// Reject out-of-domain input in `try_convert`
    /// When false, input follows the permissive arithmetic of the
    /// conversion functions.
    #[serde(default)]
    pub validate_input: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new(ColorModel::Rgb, ColorModel::Hsv)
    }
}

impl ConverterConfig {
    /// Create a permissive configuration
    pub fn new(source: ColorModel, target: ColorModel) -> Self {
        Self {
            source,
            target,
            validate_input: false,
        }
    }

    /// Enable or disable input validation
    pub fn with_validation(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ColorError::config("Invalid converter configuration", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ColorError::config(format!("Failed to read {}", path.display()), e))?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded converter config");
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ColorError::config("Failed to serialize converter configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| ColorError::config(format!("Failed to write {}", path.display()), e))?;
        debug!(path = %path.display(), "saved converter config");
        Ok(())
    }
}
