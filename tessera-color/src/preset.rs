//! Named key colors offered to users picking a theme.

use crate::Argb;

/// A documented key color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyColorPreset {
    /// `#6750A4`, the Material 3 baseline.
    #[default]
    Purple,
    /// `#B3261E`.
    Red,
    /// `#386A20`.
    Green,
    /// `#0061A4`.
    Blue,
    /// `#8B5000`.
    Orange,
    /// `#006A6A`.
    Teal,
}

impl KeyColorPreset {
    /// All presets, baseline first.
    pub const ALL: [KeyColorPreset; 6] = [
        KeyColorPreset::Purple,
        KeyColorPreset::Red,
        KeyColorPreset::Green,
        KeyColorPreset::Blue,
        KeyColorPreset::Orange,
        KeyColorPreset::Teal,
    ];

    /// The key color as `#RRGGBB`.
    pub const fn hex(self) -> &'static str {
        match self {
            KeyColorPreset::Purple => "#6750A4",
            KeyColorPreset::Red => "#B3261E",
            KeyColorPreset::Green => "#386A20",
            KeyColorPreset::Blue => "#0061A4",
            KeyColorPreset::Orange => "#8B5000",
            KeyColorPreset::Teal => "#006A6A",
        }
    }

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            KeyColorPreset::Purple => "Default",
            KeyColorPreset::Red => "Red",
            KeyColorPreset::Green => "Green",
            KeyColorPreset::Blue => "Blue",
            KeyColorPreset::Orange => "Orange",
            KeyColorPreset::Teal => "Teal",
        }
    }

    /// The key color.
    pub const fn argb(self) -> Argb {
        match self {
            KeyColorPreset::Purple => Argb(0xFF67_50A4),
            KeyColorPreset::Red => Argb(0xFFB3_261E),
            KeyColorPreset::Green => Argb(0xFF38_6A20),
            KeyColorPreset::Blue => Argb(0xFF00_61A4),
            KeyColorPreset::Orange => Argb(0xFF8B_5000),
            KeyColorPreset::Teal => Argb(0xFF00_6A6A),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_matches_argb() {
        for preset in KeyColorPreset::ALL {
            assert_eq!(Argb::from_hex(preset.hex()), Ok(preset.argb()));
        }
    }
}
