//! Numeric constants shared by the conversion functions
//!
//! The YIQ coefficients are the NTSC matrix and its published inverse,
//! rounded as they appear in the broadcast literature.

/// One third of the hue wheel
pub const ONE_THIRD: f64 = 1.0 / 3.0;

/// One sixth of the hue wheel (width of a single sector)
pub const ONE_SIXTH: f64 = 1.0 / 6.0;

/// Two thirds of the hue wheel
pub const TWO_THIRDS: f64 = 2.0 / 3.0;

/// RGB to YIQ forward matrix
pub mod yiq {
    /// Luma weights for R, G, B
    pub const Y_FROM_RGB: [f64; 3] = [0.30, 0.59, 0.11];

    /// In-phase chrominance weights for R, G, B
    pub const I_FROM_RGB: [f64; 3] = [0.60, -0.28, -0.32];

    /// Quadrature chrominance weights for R, G, B
    pub const Q_FROM_RGB: [f64; 3] = [0.21, -0.52, 0.31];

    /// I and Q weights added to Y to recover red
    pub const R_FROM_IQ: [f64; 2] = [0.948262, 0.624013];

    /// I and Q weights added to Y to recover green
    pub const G_FROM_IQ: [f64; 2] = [-0.276066, -0.639810];

    /// I and Q weights added to Y to recover blue
    pub const B_FROM_IQ: [f64; 2] = [-1.105450, 1.729860];
}

/// Number of hue sectors used by the HSV reconstruction
pub const HSV_SECTORS: i64 = 6;
