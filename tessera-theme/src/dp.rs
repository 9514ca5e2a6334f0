//! # Density-Independent Pixels (Dp)
//!
//! Every length token (spacing, sizes, radii, type metrics, shadow offsets)
//! is expressed in dp. The host converts to physical pixels with its own
//! scale factor when styles are resolved.
//!
//! ```
//! use tessera_theme::Dp;
//!
//! let padding = Dp(16.0);
//! assert_eq!(padding.to_pixels(2.0), 32.0);
//! ```

use std::fmt;

use serde::Serialize;

/// Density-independent pixels.
///
/// One dp is one physical pixel at a scale factor of 1.0. Serializes as a
/// bare number.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero length.
    pub const ZERO: Dp = Dp(0.0);

    /// Creates a new `Dp`; usable in constants.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Physical pixels at `scale_factor` pixels per dp.
    pub fn to_pixels(self, scale_factor: f64) -> f64 {
        self.0 * scale_factor
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dp", self.0)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}
