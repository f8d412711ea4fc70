//! Color models and conversion
//!
//! This module holds the conversion functions, the typed color values
//! built on them, and the configured converter.

pub mod conversion;
pub mod converter;
pub mod model;

pub use conversion::{
    convert, hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_yiq, yiq_to_rgb,
};
pub use converter::ColorConverter;
pub use model::{ColorModel, Hls, Hsv, Rgb, Yiq};
