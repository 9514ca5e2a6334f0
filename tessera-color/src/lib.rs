//! Material Design 3 color derivation for tessera themes.
//!
//! A single key color is measured in HCT (hue and chroma from CAM16, tone
//! from CIE L*), expanded into six tonal palettes, and sampled at fixed tones
//! into a light and a dark [`ColorScheme`].
//!
//! # Usage
//!
//! ```
//! use tessera_color::{ColorError, Variant, derive_scheme, derive_scheme_with};
//!
//! let scheme = derive_scheme("#6750A4").unwrap();
//! assert_eq!(scheme.light.on_primary.to_hex(), "#ffffff");
//!
//! // Any tone of any palette is available to custom consumers.
//! let tone_35 = scheme.palettes.primary.tone(35.0);
//! assert_ne!(tone_35, scheme.light.primary);
//!
//! let vibrant = derive_scheme_with("#6750A4", Variant::Vibrant).unwrap();
//! assert_ne!(vibrant.light.primary, scheme.light.primary);
//!
//! assert!(matches!(
//!     derive_scheme("not-a-color"),
//!     Err(ColorError::InvalidHex { .. })
//! ));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod argb;
pub mod cam16;
mod color;
pub mod contrast;
pub mod dislike;
mod error;
pub mod hct;
pub mod palette;
mod preset;
pub mod scheme;
pub mod temperature;
pub mod utils;

pub use argb::Argb;
pub use cam16::{Cam16, ViewingConditions};
pub use color::Color;
pub use error::ColorError;
pub use hct::Hct;
pub use palette::{PaletteRole, PaletteSet, TonalPalette, Variant};
pub use preset::KeyColorPreset;
pub use scheme::{
    ColorRole, ColorScheme, MaterialColorScheme, TONE_TABLE, ToneSpec, derive_scheme,
    derive_scheme_with,
};
pub use temperature::TemperatureCache;
