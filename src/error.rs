//! Error types for the color_models library
//!
//! The core conversion functions never fail. These errors come from the
//! opt-in surfaces around them: hex parsing, model name parsing, input
//! validation and configuration files.

use thiserror::Error;

use crate::color::ColorModel;

/// Result type alias for color_models operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors raised outside the permissive conversion core
#[derive(Error, Debug)]
pub enum ColorError {
    /// Hex color string could not be parsed
    #[error("Invalid hex color {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Color model name is not one of rgb, yiq, hls, hsv
    #[error("Unknown color model: {name}")]
    UnknownModel { name: String },

    /// Component lies outside the documented domain of its model
    #[error("{model} component {component} out of range: {value}")]
    OutOfRange {
        model: ColorModel,
        component: char,
        value: f64,
    },

    /// Component is NaN or infinite
    #[error("{model} component {component} is not finite")]
    NonFinite { model: ColorModel, component: char },

    /// Configuration could not be read, written or parsed
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ColorError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a hex parsing error
    pub fn invalid_hex(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by caller-supplied color data
    ///
    /// Such errors can be fixed by correcting the input and retrying.
    /// Configuration errors cannot.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHex { .. }
                | ColorError::UnknownModel { .. }
                | ColorError::OutOfRange { .. }
                | ColorError::NonFinite { .. }
        )
    }
}
