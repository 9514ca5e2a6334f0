//! Tonal palettes and the recipes that derive them from a key color.
//!
//! ## Usage
//!
//! Build a [`PaletteSet`] from a key color, then sample any tone from any
//! role, including tones the standard scheme does not use.
//!
//! ```
//! use tessera_color::{Argb, PaletteSet, Variant};
//!
//! let palettes = PaletteSet::from_argb(Argb(0xFF67_50A4), Variant::TonalSpot);
//! assert_eq!(palettes.primary.tone(0.0), Argb::BLACK);
//! assert_eq!(palettes.primary.tone(100.0), Argb::WHITE);
//! ```

use crate::{
    Argb, Hct, dislike::fix_if_disliked, temperature::TemperatureCache,
    utils::sanitize_degrees,
};

/// A ramp of colors sharing one hue and chroma, indexed by tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
    key_color: Hct,
}

impl TonalPalette {
    /// Palette with the given hue and chroma.
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        Self {
            hue,
            chroma,
            key_color: key_color(hue, chroma),
        }
    }

    /// Palette with the hue and chroma of `argb`.
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_hct(Hct::from_argb(argb))
    }

    /// Palette with the hue and chroma of `hct`, keyed on `hct` itself.
    pub fn from_hct(hct: Hct) -> Self {
        Self {
            hue: hct.hue(),
            chroma: hct.chroma(),
            key_color: hct,
        }
    }

    /// The color at `tone`.
    ///
    /// Tones outside `[0, 100]` are clamped, so `tone(-5.0)` is black and
    /// `tone(120.0)` is white. Tone 99 of a yellow palette is the average of
    /// tones 98 and 100, since sRGB cannot hold a pale yellow at the requested
    /// chroma.
    pub fn tone(&self, tone: f64) -> Argb {
        let tone = tone.clamp(0.0, 100.0);
        if tone == 99.0 && is_yellow(self.hue) {
            return average_argb(self.tone(98.0), self.tone(100.0));
        }
        Hct::from(self.hue, self.chroma, tone).to_argb()
    }

    /// Hue shared by every tone.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Requested chroma; extreme tones may render with less.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// The tone of this palette that best shows its chroma.
    pub fn key_color(&self) -> Hct {
        self.key_color
    }
}

fn is_yellow(hue: f64) -> bool {
    (105.0..125.0).contains(&hue)
}

fn average_argb(a: Argb, b: Argb) -> Argb {
    let mean = |x: u8, y: u8| ((x as u16 + y as u16 + 1) / 2) as u8;
    Argb::from_rgb(
        mean(a.red(), b.red()),
        mean(a.green(), b.green()),
        mean(a.blue(), b.blue()),
    )
}

/// Binary searches whole tones for the one closest to 50 whose maximum
/// chroma reaches `chroma`.
fn key_color(hue: f64, chroma: f64) -> Hct {
    const PIVOT_TONE: i32 = 50;
    const MAX_CHROMA: f64 = 200.0;
    const EPSILON: f64 = 0.01;

    let mut max_chromas = [f64::NAN; 102];
    let mut max_chroma = |tone: i32| {
        let slot = &mut max_chromas[tone as usize];
        if slot.is_nan() {
            *slot = Hct::from(hue, MAX_CHROMA, tone as f64).chroma();
        }
        *slot
    };

    let (mut lower, mut upper) = (0, 100);
    while lower < upper {
        let mid = (lower + upper) / 2;
        let ascending = max_chroma(mid) < max_chroma(mid + 1);
        if max_chroma(mid) >= chroma - EPSILON {
            if (lower - PIVOT_TONE).abs() < (upper - PIVOT_TONE).abs() {
                upper = mid;
            } else {
                if lower == mid {
                    break;
                }
                lower = mid;
            }
        } else if ascending {
            lower = mid + 1;
        } else {
            upper = mid;
        }
    }
    Hct::from(hue, chroma, lower as f64)
}

/// Recipe turning a key color into palette hues and chromas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Calm, low-chroma accents around the key hue. The Material 3 default.
    #[default]
    TonalSpot,
    /// Keeps the key color's own chroma in the primary palette and scales the
    /// other roles from it; tertiary is the analogous color one temperature
    /// step away.
    Content,
    /// Maximum-chroma primary, secondary and tertiary rotated by hue band.
    Vibrant,
    /// Primary rotated away from the key hue for a playful scheme.
    Expressive,
    /// Near-grayscale with a hint of the key hue.
    Neutral,
    /// Pure grayscale apart from error.
    Monochrome,
    /// Colorful accents over fully gray neutrals.
    Rainbow,
    /// Primary and secondary rotated 50° counter-clockwise.
    FruitSalad,
}

impl Variant {
    /// All variants.
    pub const ALL: [Variant; 8] = [
        Variant::TonalSpot,
        Variant::Content,
        Variant::Vibrant,
        Variant::Expressive,
        Variant::Neutral,
        Variant::Monochrome,
        Variant::Rainbow,
        Variant::FruitSalad,
    ];

    /// Stable lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::TonalSpot => "tonal_spot",
            Variant::Content => "content",
            Variant::Vibrant => "vibrant",
            Variant::Expressive => "expressive",
            Variant::Neutral => "neutral",
            Variant::Monochrome => "monochrome",
            Variant::Rainbow => "rainbow",
            Variant::FruitSalad => "fruit_salad",
        }
    }
}

/// Palette a scheme slot samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteRole {
    /// Key accent.
    Primary,
    /// Less prominent accent.
    Secondary,
    /// Contrasting accent.
    Tertiary,
    /// Backgrounds and surfaces.
    Neutral,
    /// Outlines and medium-emphasis surfaces.
    NeutralVariant,
    /// Error states.
    Error,
}

/// The six palettes of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteSet {
    /// Primary palette.
    pub primary: TonalPalette,
    /// Secondary palette.
    pub secondary: TonalPalette,
    /// Tertiary palette.
    pub tertiary: TonalPalette,
    /// Neutral palette.
    pub neutral: TonalPalette,
    /// Neutral-variant palette.
    pub neutral_variant: TonalPalette,
    /// Error palette.
    pub error: TonalPalette,
}

impl PaletteSet {
    /// Hue and chroma of the error palette, shared by every variant.
    pub const ERROR_HUE_CHROMA: (f64, f64) = (25.0, 84.0);

    /// Derives palettes from a key color.
    pub fn from_argb(seed: Argb, variant: Variant) -> Self {
        Self::from_hct(Hct::from_argb(seed), variant)
    }

    /// Derives palettes from a key color in HCT.
    pub fn from_hct(source: Hct, variant: Variant) -> Self {
        let hue = source.hue();
        let chroma = source.chroma();
        let palette = TonalPalette::from_hue_and_chroma;
        let rotated = |degrees: f64| sanitize_degrees(hue + degrees);

        let (primary, secondary, tertiary, neutral, neutral_variant) = match variant {
            Variant::TonalSpot => (
                palette(hue, 36.0),
                palette(hue, 16.0),
                palette(rotated(60.0), 24.0),
                palette(hue, 6.0),
                palette(hue, 8.0),
            ),
            Variant::Content => (
                palette(hue, chroma),
                palette(hue, (chroma - 32.0).max(chroma * 0.5)),
                TonalPalette::from_hct(fix_if_disliked(
                    TemperatureCache::new(source).analogous(3, 6)[2],
                )),
                palette(hue, chroma / 8.0),
                palette(hue, chroma / 8.0 + 4.0),
            ),
            Variant::Vibrant => (
                palette(hue, 200.0),
                palette(
                    rotated_hue(hue, &VIBRANT_HUES, &VIBRANT_SECONDARY_ROTATIONS),
                    24.0,
                ),
                palette(
                    rotated_hue(hue, &VIBRANT_HUES, &VIBRANT_TERTIARY_ROTATIONS),
                    32.0,
                ),
                palette(hue, 10.0),
                palette(hue, 12.0),
            ),
            Variant::Expressive => (
                palette(rotated(240.0), 40.0),
                palette(
                    rotated_hue(hue, &EXPRESSIVE_HUES, &EXPRESSIVE_SECONDARY_ROTATIONS),
                    24.0,
                ),
                palette(
                    rotated_hue(hue, &EXPRESSIVE_HUES, &EXPRESSIVE_TERTIARY_ROTATIONS),
                    32.0,
                ),
                palette(rotated(15.0), 8.0),
                palette(rotated(15.0), 12.0),
            ),
            Variant::Neutral => (
                palette(hue, 12.0),
                palette(hue, 8.0),
                palette(hue, 16.0),
                palette(hue, 2.0),
                palette(hue, 2.0),
            ),
            Variant::Monochrome => (
                palette(hue, 0.0),
                palette(hue, 0.0),
                palette(hue, 0.0),
                palette(hue, 0.0),
                palette(hue, 0.0),
            ),
            Variant::Rainbow => (
                palette(hue, 48.0),
                palette(hue, 16.0),
                palette(rotated(60.0), 24.0),
                palette(hue, 0.0),
                palette(hue, 0.0),
            ),
            Variant::FruitSalad => (
                palette(rotated(-50.0), 48.0),
                palette(rotated(-50.0), 36.0),
                palette(hue, 36.0),
                palette(hue, 10.0),
                palette(hue, 16.0),
            ),
        };

        let (error_hue, error_chroma) = Self::ERROR_HUE_CHROMA;
        Self {
            primary,
            secondary,
            tertiary,
            neutral,
            neutral_variant,
            error: palette(error_hue, error_chroma),
        }
    }

    /// The palette for `role`.
    pub fn get(&self, role: PaletteRole) -> &TonalPalette {
        match role {
            PaletteRole::Primary => &self.primary,
            PaletteRole::Secondary => &self.secondary,
            PaletteRole::Tertiary => &self.tertiary,
            PaletteRole::Neutral => &self.neutral,
            PaletteRole::NeutralVariant => &self.neutral_variant,
            PaletteRole::Error => &self.error,
        }
    }
}

const VIBRANT_HUES: [f64; 9] = [0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0];
const VIBRANT_SECONDARY_ROTATIONS: [f64; 9] =
    [18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0];
const VIBRANT_TERTIARY_ROTATIONS: [f64; 9] =
    [35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0];

const EXPRESSIVE_HUES: [f64; 9] = [0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0];
const EXPRESSIVE_SECONDARY_ROTATIONS: [f64; 9] =
    [45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0];
const EXPRESSIVE_TERTIARY_ROTATIONS: [f64; 9] =
    [120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0];

/// Rotates `source_hue` by the rotation of the hue band it falls in.
///
/// `hues` holds ascending band edges; a hue sitting exactly on an edge is not
/// rotated.
fn rotated_hue(source_hue: f64, hues: &[f64], rotations: &[f64]) -> f64 {
    hues.windows(2)
        .zip(rotations)
        .find(|(band, _)| band[0] < source_hue && source_hue < band[1])
        .map_or(source_hue, |(_, rotation)| {
            sanitize_degrees(source_hue + rotation)
        })
}
