//! HCT: hue and chroma from CAM16, tone from CIE L*.
//!
//! ## Usage
//!
//! Hold hue and chroma fixed and move tone to walk a perceptually even
//! lightness ramp, which is how tonal palettes are built.
//!
//! ```
//! use tessera_color::{Argb, Hct};
//!
//! let seed = Hct::from_argb(Argb::from_hex("#6750A4").unwrap());
//! let lighter = seed.with_tone(80.0);
//! assert!((lighter.tone() - 80.0).abs() < 0.5);
//! assert!((lighter.hue() - seed.hue()).abs() < 2.0);
//! ```

mod solver;

pub use solver::solve_to_argb;

use crate::{Argb, cam16::Cam16, utils::lstar_from_argb};

/// A color in hue, chroma and tone coordinates.
///
/// Values are always those of the stored sRGB color; requesting a chroma that
/// sRGB cannot show yields the closest in-gamut color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    /// Solves for the sRGB color nearest to the requested coordinates.
    pub fn from(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Measures an sRGB color.
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Chroma; the achievable maximum depends on hue and tone.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Tone (L*), `[0, 100]`.
    pub fn tone(&self) -> f64 {
        self.tone
    }

    /// The sRGB color.
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// Same hue and chroma at another tone.
    pub fn with_tone(&self, tone: f64) -> Self {
        Self::from(self.hue, self.chroma, tone)
    }

    /// Same chroma and tone at another hue.
    pub fn with_hue(&self, hue: f64) -> Self {
        Self::from(hue, self.chroma, self.tone)
    }

    /// Same hue and tone at another chroma.
    pub fn with_chroma(&self, chroma: f64) -> Self {
        Self::from(self.hue, chroma, self.tone)
    }
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Hct::from_argb(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_coordinates() {
        let hct = Hct::from_argb(Argb(0xFF67_50A4));
        assert!((hct.hue() - 298.981).abs() < 1e-3);
        assert!((hct.chroma() - 47.857).abs() < 1e-3);
        assert!((hct.tone() - 40.083).abs() < 1e-3);
    }

    #[test]
    fn test_argb_round_trip_through_hct() {
        for argb in [0xFF67_50A4u32, 0xFFB3_261E, 0xFF38_6A20, 0xFF12_3456, 0xFFFE_DCBA] {
            let hct = Hct::from_argb(Argb(argb));
            let solved = Hct::from(hct.hue(), hct.chroma(), hct.tone());
            assert_eq!(solved.to_argb(), Argb(argb));
        }
    }

    #[test]
    fn test_with_tone_keeps_hue() {
        let seed = Hct::from_argb(Argb(0xFF38_6A20));
        for tone in [30.0, 50.0, 70.0] {
            let moved = seed.with_tone(tone);
            assert!((moved.tone() - tone).abs() < 0.5);
            assert!((moved.hue() - seed.hue()).abs() < 2.0);
        }
    }
}
