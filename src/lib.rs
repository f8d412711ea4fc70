//! # Color Models
//!
//! Conversions between the RGB, YIQ, HLS and HSV color models.
//!
//! This library provides:
//! - Six pure conversion functions on `(f64, f64, f64)` triples
//! - Typed color values ([`Rgb`], [`Yiq`], [`Hls`], [`Hsv`]) built on them
//! - A runtime [`ColorModel`] choice with any-to-any conversion via RGB
//! - A [`ColorConverter`] configured from JSON, with optional input validation
//!
//! All components are fractions: RGB, HLS and HSV live in `[0, 1]`, hue is a
//! position around the color wheel where 0 and 1 meet. The conversion
//! functions never fail; only YIQ to RGB clamps its output.
//!
//! ## Example
//!
//! ```rust
//! use color_models::{rgb_to_hsv, hsv_to_rgb, Hls, Rgb};
//!
//! let (h, s, v) = rgb_to_hsv(1.0, 0.84, 0.0);
//! assert!((h - 0.14).abs() < 1e-9);
//!
//! let (_, g, _) = hsv_to_rgb(h, s, v);
//! assert!((g - 0.84).abs() < 1e-9);
//!
//! let gold = Rgb::from_hex("#FFD700")?;
//! let hls = Hls::from(gold);
//! assert_eq!(hls.s, 1.0);
//! # Ok::<(), color_models::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{
    convert, hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_yiq, yiq_to_rgb,
    ColorConverter, ColorModel, Hls, Hsv, Rgb, Yiq,
};
pub use config::ConverterConfig;
pub use error::{ColorError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_serialization() {
        let hsv = Hsv::new(0.14, 1.0, 1.0);

        let json = serde_json::to_string(&hsv).unwrap();
        assert_eq!(json, r#"{"h":0.14,"s":1.0,"v":1.0}"#);

        let deserialized: Hsv = serde_json::from_str(&json).unwrap();
        assert_eq!(hsv, deserialized);
    }
}
