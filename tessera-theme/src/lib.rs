//! Material 3 design tokens and styling configuration for tessera.
//!
//! The derived light and dark schemes from [`tessera_color`] are merged with
//! static spacing, size, radius, z-index, elevation, typography and
//! state-layer tokens into an immutable [`TokenTable`], a [`MaterialTheme`]
//! and the [`ThemeConfig`] handed to the styling system.
//!
//! # Usage
//!
//! ```
//! use tessera_color::ColorRole;
//! use tessera_theme::{Brightness, TokenName, TokenValue, build_theme};
//!
//! let built = build_theme("#6750A4").unwrap();
//! assert_eq!(
//!     built.tokens.resolve(TokenName::DarkColor(ColorRole::Primary)),
//!     TokenValue::Color(built.tokens.color(ColorRole::Primary, Brightness::Dark))
//! );
//! let json = built.config.to_json().unwrap();
//! assert!(json.contains("\"darkPrimary\":\"#cfbdfe\""));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod config;
mod dp;
pub mod elevation;
mod error;
pub mod fonts;
mod handle;
pub mod state_layer;
mod theme;
pub mod tokens;
pub mod typography;

pub use config::{SHORTHANDS, ThemeColors, ThemeConfig};
pub use dp::Dp;
pub use elevation::{
    ElevationLevel, ElevationToken, ShadowDescriptor, elevation_table, surface_color_at_elevation,
    surface_color_at_elevation_for,
};
pub use error::ThemeError;
pub use fonts::{FontDefinition, Fonts};
pub use handle::ThemeHandle;
pub use state_layer::{MaterialAlpha, StateLayer, hex_to_rgba, state_layer};
pub use theme::{
    BuiltTheme, DEFAULT_FONT_FAMILY, MaterialShapes, MaterialTheme, ThemeOptions, build_theme,
    build_theme_with, build_tokens,
};
pub use tokens::{
    Brightness, Radius, Size, Space, Step, TokenName, TokenNamespaces, TokenTable, TokenValue,
    ZIndex,
};
pub use typography::{FontWeight, MaterialTypography, TextStyle, TypeScale};
