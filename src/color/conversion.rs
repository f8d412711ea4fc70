//! Color model conversion functions
//!
//! Pure conversions between RGB and the YIQ, HLS and HSV models:
//! - RGB <-> YIQ (linear NTSC matrix, clamped on the way back)
//! - RGB <-> HLS (double hexcone)
//! - RGB <-> HSV (single hexcone)
//!
//! Every function takes and returns a plain `(f64, f64, f64)` triple. No
//! input is validated: out-of-domain values follow the arithmetic, and NaN
//! propagates to the output. All hue wrapping is Euclidean, so negative
//! hues land in `[0, 1)` rather than `(-1, 0]`.

use tracing::trace;

use crate::color::ColorModel;
use crate::constants::{yiq, HSV_SECTORS, ONE_SIXTH, ONE_THIRD, TWO_THIRDS};

/// Wrap a hue into `[0, 1)` using mathematical modulo
#[inline]
fn wrap_unit(x: f64) -> f64 {
    // Tiny negative inputs round up to exactly 1.0
    let wrapped = x.rem_euclid(1.0);
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

#[inline]
fn max3(a: f64, b: f64, c: f64) -> f64 {
    a.max(b).max(c)
}

#[inline]
fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

#[inline]
fn dot3(w: [f64; 3], a: f64, b: f64, c: f64) -> f64 {
    w[0] * a + w[1] * b + w[2] * c
}

/// Convert RGB to YIQ
///
/// Linear transform with no clamping; I and Q are signed.
pub fn rgb_to_yiq(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let y = dot3(yiq::Y_FROM_RGB, r, g, b);
    let i = dot3(yiq::I_FROM_RGB, r, g, b);
    let q = dot3(yiq::Q_FROM_RGB, r, g, b);
    (y, i, q)
}

/// Convert YIQ to RGB
///
/// Each channel is clamped to `[0, 1]` independently, so out-of-gamut YIQ
/// values saturate instead of failing.
pub fn yiq_to_rgb(y: f64, i: f64, q: f64) -> (f64, f64, f64) {
    let r = y + yiq::R_FROM_IQ[0] * i + yiq::R_FROM_IQ[1] * q;
    let g = y + yiq::G_FROM_IQ[0] * i + yiq::G_FROM_IQ[1] * q;
    let b = y + yiq::B_FROM_IQ[0] * i + yiq::B_FROM_IQ[1] * q;
    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

/// Hue of a chromatic RGB color in `[0, 1)`
///
/// Caller guarantees `maxc != minc`. When two channels tie for the
/// maximum, red wins over green and green wins over blue.
fn hue_from_rgb(r: f64, g: f64, b: f64, maxc: f64, minc: f64) -> f64 {
    let rangec = maxc - minc;
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;

    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    wrap_unit(h / 6.0)
}

/// Convert RGB to HLS
///
/// Greys (`r == g == b`) return hue and saturation of zero.
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = max3(r, g, b);
    let minc = min3(r, g, b);
    let sumc = maxc + minc;
    let l = sumc / 2.0;
    if minc == maxc {
        return (0.0, l, 0.0);
    }

    let rangec = maxc - minc;
    let s = if l <= 0.5 {
        rangec / sumc
    } else {
        rangec / (2.0 - maxc - minc)
    };
    (hue_from_rgb(r, g, b, maxc, minc), l, s)
}

/// One RGB channel of an HLS color, given the channel's hue offset
fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = wrap_unit(hue);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

/// Convert HLS to RGB
///
/// Zero saturation yields the grey `(l, l, l)` and ignores hue.
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    (
        hls_channel(m1, m2, h + ONE_THIRD),
        hls_channel(m1, m2, h),
        hls_channel(m1, m2, h - ONE_THIRD),
    )
}

/// Convert RGB to HSV
///
/// Greys return hue and saturation of zero. The hue is computed by the
/// same routine as [`rgb_to_hls`], so both agree bit for bit.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let maxc = max3(r, g, b);
    let minc = min3(r, g, b);
    let v = maxc;
    if minc == maxc {
        return (0.0, 0.0, v);
    }
    let s = (maxc - minc) / maxc;
    (hue_from_rgb(r, g, b, maxc, minc), s, v)
}

/// Convert HSV to RGB
///
/// Zero saturation yields the grey `(v, v, v)`. Hues outside `[0, 1)`
/// select their sector with Euclidean modulo.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let scaled = h * 6.0;
    let whole = scaled.floor();
    let f = scaled - whole;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (whole as i64).rem_euclid(HSV_SECTORS) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Convert a triple between any two color models
///
/// Conversions between two non-RGB models pass through RGB, so a YIQ
/// source is clamped to the RGB gamut on the way.
pub fn convert(from: ColorModel, to: ColorModel, triple: [f64; 3]) -> [f64; 3] {
    if from == to {
        return triple;
    }
    trace!(%from, %to, ?triple, "routing conversion through rgb");
    to.from_rgb(from.to_rgb(triple))
}
