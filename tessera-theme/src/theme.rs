//! Theme construction from a key color.
//!
//! ## Usage
//!
//! `build_theme` covers the common case; `build_theme_with` takes
//! [`ThemeOptions`] for a scheme variant, font families and extra base
//! themes.
//!
//! ```
//! use tessera_color::{ColorRole, Variant};
//! use tessera_theme::{Brightness, ThemeOptions, build_theme_with};
//!
//! let options = ThemeOptions::default()
//!     .with_key_color("#B3261E")
//!     .with_variant(Variant::Vibrant);
//! let built = build_theme_with(&options).unwrap();
//! let dark = built.theme.clone().with_brightness(Brightness::Dark);
//! assert_eq!(dark.resolve(ColorRole::Primary), built.tokens.dark.primary);
//! assert!(built.config.themes.contains_key("dark"));
//! ```

use std::collections::BTreeMap;

use tessera_color::{Argb, ColorRole, ColorScheme, KeyColorPreset, MaterialColorScheme, Variant};
use tracing::{debug, warn};

use crate::{
    Dp, ThemeError,
    config::{ThemeColors, ThemeConfig, shorthands, theme_colors},
    elevation::elevation_table,
    fonts::Fonts,
    tokens::{Brightness, Radius, TokenTable},
    typography::MaterialTypography,
};

/// Default font family for headings and body text.
pub const DEFAULT_FONT_FAMILY: &str = "Roboto";

/// Inputs to [`build_theme_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOptions {
    /// Key color as `#RRGGBB`.
    pub key_color: String,
    /// Palette recipe.
    pub variant: Variant,
    /// Family for display, headline and title styles.
    pub heading_font: String,
    /// Family for body and label styles.
    pub body_font: String,
    /// Type scale the fonts are derived from.
    pub typography: MaterialTypography,
    /// Extra named themes registered next to `light` and `dark`.
    pub base_themes: BTreeMap<String, ThemeColors>,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            key_color: KeyColorPreset::default().hex().to_string(),
            variant: Variant::default(),
            heading_font: DEFAULT_FONT_FAMILY.to_string(),
            body_font: DEFAULT_FONT_FAMILY.to_string(),
            typography: MaterialTypography::default(),
            base_themes: BTreeMap::new(),
        }
    }
}

impl ThemeOptions {
    /// Sets the key color.
    pub fn with_key_color(mut self, key_color: impl Into<String>) -> Self {
        self.key_color = key_color.into();
        self
    }

    /// Sets the palette recipe.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the heading and body font families.
    pub fn with_fonts(mut self, heading: impl Into<String>, body: impl Into<String>) -> Self {
        self.heading_font = heading.into();
        self.body_font = body.into();
        self
    }

    /// Sets the type scale.
    pub fn with_typography(mut self, typography: MaterialTypography) -> Self {
        self.typography = typography;
        self
    }

    /// Registers an extra named theme.
    pub fn with_base_theme(mut self, name: impl Into<String>, colors: ThemeColors) -> Self {
        self.base_themes.insert(name.into(), colors);
        self
    }
}

/// Material shape scale used by components to resolve default container
/// corner radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialShapes {
    /// Extra small container radius.
    pub extra_small: Dp,
    /// Small container radius.
    pub small: Dp,
    /// Medium container radius.
    pub medium: Dp,
    /// Large container radius.
    pub large: Dp,
    /// Extra large container radius.
    pub extra_large: Dp,
    /// Pill radius.
    pub full: Dp,
}

impl Default for MaterialShapes {
    fn default() -> Self {
        Self {
            extra_small: Radius::ExtraSmall.value(),
            small: Radius::Small.value(),
            medium: Radius::Medium.value(),
            large: Radius::Large.value(),
            extra_large: Radius::ExtraLarge.value(),
            full: Radius::Full.value(),
        }
    }
}

/// Material theme: both color schemes, the active mode, typography and
/// shapes.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialTheme {
    /// Light-mode colors.
    pub light: ColorScheme,
    /// Dark-mode colors.
    pub dark: ColorScheme,
    /// Active mode.
    pub brightness: Brightness,
    /// Typography scale used by text-based components.
    pub typography: MaterialTypography,
    /// Shape scale used by container components.
    pub shapes: MaterialShapes,
}

impl MaterialTheme {
    /// Create a theme from derived schemes, using default shapes.
    pub fn from_color_scheme(scheme: &MaterialColorScheme, typography: MaterialTypography) -> Self {
        Self {
            light: scheme.light.clone(),
            dark: scheme.dark.clone(),
            brightness: Brightness::default(),
            typography,
            shapes: MaterialShapes::default(),
        }
    }

    /// Same theme in another mode.
    pub fn with_brightness(self, brightness: Brightness) -> Self {
        Self { brightness, ..self }
    }

    /// The active scheme.
    pub fn color_scheme(&self) -> &ColorScheme {
        match self.brightness {
            Brightness::Light => &self.light,
            Brightness::Dark => &self.dark,
        }
    }

    /// The color of `role` in the active mode.
    pub fn resolve(&self, role: ColorRole) -> Argb {
        self.color_scheme().get(role)
    }
}

/// Everything derived from one set of [`ThemeOptions`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltTheme {
    /// Key color the theme was built from.
    pub key_color: Argb,
    /// Token table.
    pub tokens: TokenTable,
    /// Theme for component styling.
    pub theme: MaterialTheme,
    /// Styling-system configuration.
    pub config: ThemeConfig,
}

/// Builds the token table for a key color.
pub fn build_tokens(seed_hex: &str) -> Result<TokenTable, ThemeError> {
    let scheme = tessera_color::derive_scheme(seed_hex)?;
    Ok(TokenTable::from_scheme(&scheme))
}

/// Builds tokens, theme and styling configuration for a key color with
/// default options.
pub fn build_theme(seed_hex: &str) -> Result<BuiltTheme, ThemeError> {
    build_theme_with(&ThemeOptions::default().with_key_color(seed_hex))
}

/// Builds tokens, theme and styling configuration.
///
/// Nothing is produced unless every step succeeds.
#[tracing::instrument(
    level = "debug",
    skip(options),
    fields(key_color = %options.key_color, variant = options.variant.name())
)]
pub fn build_theme_with(options: &ThemeOptions) -> Result<BuiltTheme, ThemeError> {
    let scheme = tessera_color::derive_scheme_with(&options.key_color, options.variant)?;
    let tokens = TokenTable::from_scheme(&scheme);
    let theme = MaterialTheme::from_color_scheme(&scheme, options.typography);

    let mut themes = options.base_themes.clone();
    for brightness in [Brightness::Light, Brightness::Dark] {
        let colors = theme_colors(tokens.scheme(brightness));
        if themes.insert(brightness.name().to_string(), colors).is_some() {
            warn!(
                "Base theme {:?} is replaced by the derived scheme",
                brightness.name()
            );
        }
    }

    let config = ThemeConfig {
        themes,
        tokens: tokens.namespaces(),
        elevation: elevation_table(),
        shorthands: shorthands(),
        fonts: Fonts::new(&options.heading_font, &options.body_font, &options.typography),
    };

    debug!(themes = config.themes.len(), "Theme built");
    Ok(BuiltTheme {
        key_color: scheme.seed,
        tokens,
        theme,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_color::ColorError;

    #[test]
    fn test_rebuild_is_idempotent() {
        assert_eq!(build_theme("#6750A4").unwrap(), build_theme("#6750A4").unwrap());
        assert_eq!(build_tokens("#386A20").unwrap(), build_tokens("#386a20").unwrap());
    }

    #[test]
    fn test_build_theme_golden() {
        let built = build_theme("#6750A4").unwrap();
        assert_eq!(built.tokens.light.primary.to_hex(), "#65558f");
        assert_eq!(built.tokens.dark.primary.to_hex(), "#cfbdfe");
        assert_eq!(built.theme.resolve(ColorRole::Primary), built.tokens.light.primary);
        assert_eq!(
            built.config.themes["dark"]["onPrimary"],
            built.tokens.dark.on_primary
        );
    }

    #[test]
    fn test_malformed_seed_aborts() {
        for seed in ["", "#12345", "#GGGGGG", "6750A4"] {
            assert!(matches!(
                build_theme(seed),
                Err(ThemeError::Color(ColorError::InvalidHex { .. }))
            ));
            assert!(build_tokens(seed).is_err());
        }
    }

    #[test]
    fn test_derived_themes_win_over_base_themes() {
        let custom: ThemeColors = [("primary".to_string(), Argb::WHITE)].into_iter().collect();
        let options = ThemeOptions::default()
            .with_base_theme("light", custom.clone())
            .with_base_theme("brand", custom.clone());
        let built = build_theme_with(&options).unwrap();
        assert_eq!(built.config.themes.len(), 3);
        assert_eq!(built.config.themes["brand"], custom);
        assert_eq!(
            built.config.themes["light"]["primary"],
            built.tokens.light.primary
        );
    }

    #[test]
    fn test_config_shape() {
        let options = ThemeOptions::default().with_fonts("Inter", "Roboto");
        let built = build_theme_with(&options).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&built.config.to_json().unwrap()).unwrap();
        for key in ["themes", "tokens", "elevation", "shorthands", "fonts"] {
            assert!(json.get(key).is_some(), "{key}");
        }
        for namespace in ["color", "space", "size", "radius", "zIndex"] {
            assert!(json["tokens"].get(namespace).is_some(), "{namespace}");
        }
        assert_eq!(json["tokens"]["color"]["darkPrimary"], "#cfbdfe");
        assert_eq!(json["tokens"]["radius"]["full"], 9999.0);
        assert_eq!(json["fonts"]["heading"]["family"], "Inter");
        assert_eq!(json["themes"]["light"]["primary"], "#65558f");
        assert_eq!(json["elevation"]["level3"]["height"], 6.0);
        assert_eq!(json["elevation"]["level5"]["shadow"]["offset"][1], 8.0);
        assert_eq!(json["elevation"]["level0"]["shadow"]["opacity"], 0.0);
    }

    #[test]
    fn test_brightness_switches_resolution() {
        let theme = build_theme("#B3261E").unwrap().theme;
        let dark = theme.clone().with_brightness(Brightness::Dark);
        assert_ne!(
            theme.resolve(ColorRole::OnPrimary),
            dark.resolve(ColorRole::OnPrimary)
        );
        assert_eq!(dark.shapes.medium, Dp(12.0));
    }
}
