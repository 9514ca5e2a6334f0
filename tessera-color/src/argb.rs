//! Packed 8-bit sRGB colors and `#RRGGBB` parsing.

use std::{fmt, str::FromStr};

use crate::ColorError;

/// An sRGB color packed as `0xAARRGGBB`.
///
/// Every color produced by the engine is opaque. Parsing accepts exactly
/// `#RRGGBB` (case insensitive) so that a malformed key color is rejected at
/// theme construction instead of rendering as a wrong hue.
///
/// ```
/// use tessera_color::Argb;
///
/// let seed: Argb = "#6750A4".parse().unwrap();
/// assert_eq!(seed.red(), 0x67);
/// assert_eq!(seed.to_hex(), "#6750a4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    /// Packs opaque red, green and blue channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Argb(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Parses a `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex {
            input: hex.to_owned(),
        };
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let rgb = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Argb(0xFF00_0000 | rgb))
    }

    /// Formats the color as lowercase `#rrggbb`, dropping alpha.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00FF_FFFF)
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00FF_FFFF)
    }
}

impl FromStr for Argb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Argb::from_hex(s)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(argb: Argb) -> Self {
        argb.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#6750a4", "#b3261e", "#386a20", "#0a0b0c"] {
            assert_eq!(Argb::from_hex(hex).unwrap().to_hex(), hex);
        }
        assert_eq!(Argb::from_hex("#6750A4").unwrap().to_hex(), "#6750a4");
    }

    #[test]
    fn test_channels() {
        let color = Argb::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(color.0, 0xFF12_3456);
        assert_eq!(color.alpha(), 0xFF);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
    }

    #[test]
    fn test_rejects_malformed_hex() {
        for bad in ["not-a-color", "6750A4", "#6750A", "#6750A4FF", "#GG50A4", "#+750A4", ""] {
            let err = Argb::from_hex(bad).unwrap_err();
            assert_eq!(
                err,
                ColorError::InvalidHex {
                    input: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn test_error_message_names_input() {
        let err = "not-a-color".parse::<Argb>().unwrap_err();
        assert!(err.to_string().contains("not-a-color"));
    }
}
