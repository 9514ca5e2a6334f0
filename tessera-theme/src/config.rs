//! The styling-system configuration: themes, tokens, elevation, shorthands
//! and fonts.

use std::collections::BTreeMap;

use serde::Serialize;
use tessera_color::{Argb, ColorScheme};

use crate::{ThemeError, elevation::ElevationToken, fonts::Fonts, tokens::TokenNamespaces};

/// A flat `name -> color` map registered as one named theme.
pub type ThemeColors = BTreeMap<String, Argb>;

/// Style property shorthands understood by the styling system.
pub const SHORTHANDS: &[(&str, &str)] = &[
    ("bg", "backgroundColor"),
    ("br", "borderRadius"),
    ("bc", "borderColor"),
    ("bw", "borderWidth"),
    ("f", "flex"),
    ("h", "height"),
    ("w", "width"),
    ("m", "margin"),
    ("mt", "marginTop"),
    ("mr", "marginRight"),
    ("mb", "marginBottom"),
    ("ml", "marginLeft"),
    ("mx", "marginHorizontal"),
    ("my", "marginVertical"),
    ("p", "padding"),
    ("pt", "paddingTop"),
    ("pr", "paddingRight"),
    ("pb", "paddingBottom"),
    ("pl", "paddingLeft"),
    ("px", "paddingHorizontal"),
    ("py", "paddingVertical"),
    ("maxH", "maxHeight"),
    ("maxW", "maxWidth"),
    ("minH", "minHeight"),
    ("minW", "minWidth"),
    ("zi", "zIndex"),
];

/// Flattens a scheme into a named theme.
pub fn theme_colors(scheme: &ColorScheme) -> ThemeColors {
    scheme
        .swatches()
        .map(|(name, argb)| (name.to_string(), argb))
        .collect()
}

/// Configuration in the shape the styling system accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeConfig {
    /// `light`, `dark` and any extra base themes.
    pub themes: BTreeMap<String, ThemeColors>,
    /// Namespaced scale tables.
    pub tokens: TokenNamespaces,
    /// Elevation levels keyed `level0` to `level5`.
    pub elevation: BTreeMap<&'static str, ElevationToken>,
    /// Property shorthands.
    pub shorthands: BTreeMap<&'static str, &'static str>,
    /// Font definitions.
    pub fonts: Fonts,
}

impl ThemeConfig {
    /// Serializes the configuration to JSON.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the configuration to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The shorthand table as a map.
pub fn shorthands() -> BTreeMap<&'static str, &'static str> {
    SHORTHANDS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_keys_are_unique() {
        assert_eq!(shorthands().len(), SHORTHANDS.len());
        assert_eq!(shorthands()["bg"], "backgroundColor");
    }
}
