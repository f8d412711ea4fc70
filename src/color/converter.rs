//! Configured conversion between a fixed pair of color models

use tracing::debug;

use super::conversion::convert;
use super::ColorModel;
use crate::{config::ConverterConfig, Result};

/// Converts triples from one color model to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConverter {
    config: ConverterConfig,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl ColorConverter {
    /// Create a converter from a configuration
    pub fn new(config: ConverterConfig) -> Self {
        debug!(
            source = %config.source,
            target = %config.target,
            validate_input = config.validate_input,
            "creating color converter"
        );
        Self { config }
    }

    /// Create a permissive converter between two models
    pub fn between(source: ColorModel, target: ColorModel) -> Self {
        Self::new(ConverterConfig::new(source, target))
    }

    /// Configuration this converter was built from
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Model of incoming triples
    pub fn source(&self) -> ColorModel {
        self.config.source
    }

    /// Model of outgoing triples
    pub fn target(&self) -> ColorModel {
        self.config.target
    }

    /// Convert a triple without validation
    ///
    /// Identical to [`convert`] with this converter's models.
    pub fn convert(&self, triple: [f64; 3]) -> [f64; 3] {
        convert(self.config.source, self.config.target, triple)
    }

    /// Convert a triple, validating it first when configured to
    ///
    /// # Errors
    ///
    /// With `validate_input` set, returns the error from
    /// [`ColorModel::validate`] for the source model. Never fails otherwise.
    pub fn try_convert(&self, triple: [f64; 3]) -> Result<[f64; 3]> {
        if self.config.validate_input {
            if let Err(err) = self.config.source.validate(triple) {
                debug!(?triple, %err, "rejected input triple");
                return Err(err);
            }
        }
        Ok(self.convert(triple))
    }
}
