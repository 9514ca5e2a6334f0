//! Font definitions handed to the styling system.
//!
//! Each family carries per-style maps keyed by type scale name, derived from
//! [`MaterialTypography`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    Dp,
    typography::{FontWeight, MaterialTypography, TypeScale},
};

/// One font family with its metrics per text style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDefinition {
    /// Family name, e.g. `Roboto`.
    pub family: String,
    /// Font size per style.
    pub size: BTreeMap<&'static str, Dp>,
    /// Line height per style.
    pub line_height: BTreeMap<&'static str, Dp>,
    /// Weight per style.
    pub weight: BTreeMap<&'static str, FontWeight>,
    /// Tracking per style.
    pub letter_spacing: BTreeMap<&'static str, Dp>,
}

impl FontDefinition {
    /// Collects the metrics of the styles selected by `filter`.
    pub fn from_typography(
        family: impl Into<String>,
        typography: &MaterialTypography,
        filter: impl Fn(TypeScale) -> bool,
    ) -> Self {
        let mut definition = Self {
            family: family.into(),
            size: BTreeMap::new(),
            line_height: BTreeMap::new(),
            weight: BTreeMap::new(),
            letter_spacing: BTreeMap::new(),
        };
        for scale in TypeScale::ALL.into_iter().filter(|&scale| filter(scale)) {
            let style = typography.get(scale);
            let key = scale.name();
            definition.size.insert(key, style.font_size);
            definition.line_height.insert(key, style.line_height);
            definition.weight.insert(key, style.font_weight);
            definition.letter_spacing.insert(key, style.letter_spacing);
        }
        definition
    }
}

/// Heading and body fonts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fonts {
    /// Display, headline and title styles.
    pub heading: FontDefinition,
    /// Body and label styles.
    pub body: FontDefinition,
}

impl Fonts {
    /// Splits the type scale between the two families.
    pub fn new(heading_family: &str, body_family: &str, typography: &MaterialTypography) -> Self {
        Self {
            heading: FontDefinition::from_typography(heading_family, typography, |scale| {
                scale.is_heading()
            }),
            body: FontDefinition::from_typography(body_family, typography, |scale| {
                !scale.is_heading()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fonts_split_the_scale() {
        let fonts = Fonts::new("Roboto Flex", "Roboto", &MaterialTypography::default());
        assert_eq!(fonts.heading.family, "Roboto Flex");
        assert_eq!(fonts.heading.size.len(), 9);
        assert_eq!(fonts.body.size.len(), 6);
        assert_eq!(fonts.heading.size["displayLarge"], Dp(57.0));
        assert_eq!(fonts.body.weight["labelSmall"], FontWeight::MEDIUM);
        assert!(!fonts.body.size.contains_key("titleLarge"));
    }
}
