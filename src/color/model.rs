//! Typed color values and the color model enum
//!
//! The conversion functions work on bare triples whose meaning comes from
//! context. The types here attach that meaning: one struct per model, and
//! [`ColorModel`] for choosing a model at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::conversion::{
    hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_yiq, yiq_to_rgb,
};
use crate::{ColorError, Result};

/// The four supported color models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModel {
    Rgb,
    Yiq,
    Hls,
    Hsv,
}

impl ColorModel {
    /// All models, in declaration order
    pub const ALL: [ColorModel; 4] = [
        ColorModel::Rgb,
        ColorModel::Yiq,
        ColorModel::Hls,
        ColorModel::Hsv,
    ];

    /// Lowercase model name
    pub fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "rgb",
            ColorModel::Yiq => "yiq",
            ColorModel::Hls => "hls",
            ColorModel::Hsv => "hsv",
        }
    }

    /// Component labels, in triple order
    pub fn components(self) -> [char; 3] {
        match self {
            ColorModel::Rgb => ['r', 'g', 'b'],
            ColorModel::Yiq => ['y', 'i', 'q'],
            ColorModel::Hls => ['h', 'l', 's'],
            ColorModel::Hsv => ['h', 's', 'v'],
        }
    }

    /// Convert a triple in this model to RGB
    pub fn to_rgb(self, [x, y, z]: [f64; 3]) -> [f64; 3] {
        let (r, g, b) = match self {
            ColorModel::Rgb => (x, y, z),
            ColorModel::Yiq => yiq_to_rgb(x, y, z),
            ColorModel::Hls => hls_to_rgb(x, y, z),
            ColorModel::Hsv => hsv_to_rgb(x, y, z),
        };
        [r, g, b]
    }

    /// Convert an RGB triple into this model
    pub fn from_rgb(self, [r, g, b]: [f64; 3]) -> [f64; 3] {
        let (x, y, z) = match self {
            ColorModel::Rgb => (r, g, b),
            ColorModel::Yiq => rgb_to_yiq(r, g, b),
            ColorModel::Hls => rgb_to_hls(r, g, b),
            ColorModel::Hsv => rgb_to_hsv(r, g, b),
        };
        [x, y, z]
    }

    /// Check that a triple lies in the documented domain of this model
    ///
    /// Every component must be finite. RGB, HLS and HSV components and the
    /// YIQ luma must lie in `[0, 1]`; YIQ chrominance is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::NonFinite`] or [`ColorError::OutOfRange`] for
    /// the first offending component.
    pub fn validate(self, triple: [f64; 3]) -> Result<()> {
        for (index, (&value, component)) in triple.iter().zip(self.components()).enumerate() {
            if !value.is_finite() {
                return Err(ColorError::NonFinite {
                    model: self,
                    component,
                });
            }
            let bounded = !(self == ColorModel::Yiq && index > 0);
            if bounded && !(0.0..=1.0).contains(&value) {
                return Err(ColorError::OutOfRange {
                    model: self,
                    component,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        ColorModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ColorError::UnknownModel {
                name: s.to_string(),
            })
    }
}

macro_rules! triple_struct {
    ($(#[$doc:meta])* $name:ident { $a:ident, $b:ident, $c:ident }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            pub $a: f64,
            pub $b: f64,
            pub $c: f64,
        }

        impl $name {
            pub const fn new($a: f64, $b: f64, $c: f64) -> Self {
                Self { $a, $b, $c }
            }

            pub const fn to_array(self) -> [f64; 3] {
                [self.$a, self.$b, self.$c]
            }

            pub const fn from_array([$a, $b, $c]: [f64; 3]) -> Self {
                Self { $a, $b, $c }
            }
        }

        impl From<(f64, f64, f64)> for $name {
            fn from(($a, $b, $c): (f64, f64, f64)) -> Self {
                Self { $a, $b, $c }
            }
        }

        impl From<$name> for (f64, f64, f64) {
            fn from(color: $name) -> Self {
                (color.$a, color.$b, color.$c)
            }
        }
    };
}

triple_struct!(
    /// RGB color, components nominally in `[0, 1]`
    Rgb { r, g, b }
);

triple_struct!(
    /// YIQ color: luma in `[0, 1]`, signed chrominance
    Yiq { y, i, q }
);

triple_struct!(
    /// HLS color, all components nominally in `[0, 1]`
    Hls { h, l, s }
);

triple_struct!(
    /// HSV color, all components nominally in `[0, 1]`
    Hsv { h, s, v }
);

impl From<Rgb> for Yiq {
    fn from(c: Rgb) -> Self {
        rgb_to_yiq(c.r, c.g, c.b).into()
    }
}

impl From<Yiq> for Rgb {
    fn from(c: Yiq) -> Self {
        yiq_to_rgb(c.y, c.i, c.q).into()
    }
}

impl From<Rgb> for Hls {
    fn from(c: Rgb) -> Self {
        rgb_to_hls(c.r, c.g, c.b).into()
    }
}

impl From<Hls> for Rgb {
    fn from(c: Hls) -> Self {
        hls_to_rgb(c.h, c.l, c.s).into()
    }
}

impl From<Rgb> for Hsv {
    fn from(c: Rgb) -> Self {
        rgb_to_hsv(c.r, c.g, c.b).into()
    }
}

impl From<Hsv> for Rgb {
    fn from(c: Hsv) -> Self {
        hsv_to_rgb(c.h, c.s, c.v).into()
    }
}

impl From<Rgb> for palette::Srgb<f64> {
    fn from(c: Rgb) -> Self {
        palette::Srgb::new(c.r, c.g, c.b)
    }
}

impl From<palette::Srgb<f64>> for Rgb {
    fn from(c: palette::Srgb<f64>) -> Self {
        Rgb::new(c.red, c.green, c.blue)
    }
}

impl Rgb {
    /// Create an RGB color from 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Quantize to 8-bit channels, clamping out-of-range components
    pub fn to_u8(self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    /// Format as an uppercase hex string (e.g., "#FF0000")
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_u8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Parse a hex color string ("#FF0000" or "FF0000")
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] unless the input holds exactly
    /// six hex digits after an optional leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_hex(
                hex,
                format!("expected 6 hex digits, got {:?}", digits),
            ));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| ColorError::invalid_hex(hex, format!("invalid {} value: {}", name, e)))
        };
        let r = channel(0..2, "red")?;
        let g = channel(2..4, "green")?;
        let b = channel(4..6, "blue")?;

        Ok(Self::from_u8(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_parse_and_display() {
        for model in ColorModel::ALL {
            assert_eq!(model.to_string().parse::<ColorModel>().unwrap(), model);
        }
        assert_eq!(" HSV ".parse::<ColorModel>().unwrap(), ColorModel::Hsv);
        assert!(matches!(
            "lab".parse::<ColorModel>(),
            Err(ColorError::UnknownModel { name }) if name == "lab"
        ));
    }

    #[test]
    fn test_model_serde_lowercase() {
        let json = serde_json::to_string(&ColorModel::Yiq).unwrap();
        assert_eq!(json, "\"yiq\"");
        let model: ColorModel = serde_json::from_str("\"hls\"").unwrap();
        assert_eq!(model, ColorModel::Hls);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(ColorModel::Rgb.validate([0.0, 0.5, 1.0]).is_ok());
        assert!(ColorModel::Yiq.validate([0.5, -0.6, 0.6]).is_ok());
        assert!(ColorModel::Yiq.validate([0.5, -3.0, 3.0]).is_ok());

        match ColorModel::Hsv.validate([0.2, 1.5, 0.5]) {
            Err(ColorError::OutOfRange { model, component, value }) => {
                assert_eq!(model, ColorModel::Hsv);
                assert_eq!(component, 's');
                assert_eq!(value, 1.5);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }

        assert!(matches!(
            ColorModel::Yiq.validate([1.2, 0.0, 0.0]),
            Err(ColorError::OutOfRange { component: 'y', .. })
        ));
        assert!(matches!(
            ColorModel::Yiq.validate([0.5, f64::INFINITY, 0.0]),
            Err(ColorError::NonFinite { component: 'i', .. })
        ));
        assert!(matches!(
            ColorModel::Hls.validate([f64::NAN, 0.5, 0.5]),
            Err(ColorError::NonFinite { component: 'h', .. })
        ));
    }

    #[test]
    fn test_typed_conversions_match_functions() {
        let rgb = Rgb::new(1.0, 0.84, 0.0);
        let hsv = Hsv::from(rgb);
        assert_eq!(hsv, Hsv::from(rgb_to_hsv(1.0, 0.84, 0.0)));
        let hls = Hls::from(rgb);
        assert_eq!(hls.h, hsv.h);

        let back = Rgb::from(hls);
        assert!((back.g - 0.84).abs() < 1e-9);
        let yiq = Yiq::from(rgb);
        assert!((yiq.y - 0.7956).abs() < 1e-9);
    }

    #[test]
    fn test_array_and_tuple_roundtrip() {
        let hls = Hls::from_array([0.1, 0.2, 0.3]);
        assert_eq!(hls.to_array(), [0.1, 0.2, 0.3]);
        let tuple: (f64, f64, f64) = hls.into();
        assert_eq!(tuple, (0.1, 0.2, 0.3));
    }

    #[test]
    fn test_palette_interop() {
        let srgb: palette::Srgb<f64> = Rgb::new(0.2, 0.4, 0.8).into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (0.2, 0.4, 0.8));
        assert_eq!(Rgb::from(srgb), Rgb::new(0.2, 0.4, 0.8));
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_hex(), "#FF0000");
        assert_eq!(Rgb::new(0.0, 1.0, 0.0).to_hex(), "#00FF00");
        assert_eq!(Rgb::new(0.0, 0.0, 1.0).to_hex(), "#0000FF");
        // Out-of-range components clamp
        assert_eq!(Rgb::new(1.5, -0.2, 0.5).to_hex(), "#FF0080");
    }

    #[test]
    fn test_rgb_from_hex() {
        let red = Rgb::from_hex("#FF0000").unwrap();
        assert_eq!(red, Rgb::new(1.0, 0.0, 0.0));

        let teal = Rgb::from_hex("008080").unwrap();
        assert_eq!(teal.to_u8(), [0, 128, 128]);
    }

    #[test]
    fn test_rgb_from_hex_invalid() {
        assert!(Rgb::from_hex("#FF").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("#FF00000").is_err());
        assert!(Rgb::from_hex("#ÄÄÄ").is_err());
        assert!(Rgb::from_hex("+F0000").is_err());
    }
}
