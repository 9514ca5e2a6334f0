//! Light and dark Material 3 color schemes sampled from tonal palettes.
//!
//! ## Usage
//!
//! Derive both schemes from a key color once, then read slots by field or by
//! [`ColorRole`].
//!
//! ```
//! use tessera_color::{ColorRole, derive_scheme};
//!
//! let scheme = derive_scheme("#6750A4").unwrap();
//! assert_eq!(scheme.light.primary.to_hex(), "#65558f");
//! assert_eq!(scheme.dark.get(ColorRole::Primary).to_hex(), "#cfbdfe");
//! ```

use tracing::debug;

use crate::{Argb, Color, ColorError, PaletteRole, PaletteSet, Variant};

macro_rules! color_roles {
    ($( $(#[$meta:meta])* $variant:ident => $field:ident, $name:literal; )*) => {
        /// A semantic color slot of a [`ColorScheme`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ColorRole {
            $( $(#[$meta])* $variant, )*
        }

        impl ColorRole {
            /// Every slot, in declaration order.
            pub const ALL: &'static [ColorRole] = &[$(ColorRole::$variant),*];

            /// Token name of the slot, e.g. `onPrimaryContainer`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorRole::$variant => $name,)*
                }
            }

            /// Looks a slot up by its token name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(ColorRole::$variant),)*
                    _ => None,
                }
            }
        }

        /// One mode's full set of semantic colors.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct ColorScheme {
            /// Whether this is the dark scheme.
            pub is_dark: bool,
            $( $(#[$meta])* pub $field: Argb, )*
        }

        impl ColorScheme {
            /// The color of `role`.
            pub fn get(&self, role: ColorRole) -> Argb {
                match role {
                    $(ColorRole::$variant => self.$field,)*
                }
            }

            fn try_from_fn<E>(
                is_dark: bool,
                mut sample: impl FnMut(ColorRole) -> Result<Argb, E>,
            ) -> Result<Self, E> {
                Ok(Self {
                    is_dark,
                    $( $field: sample(ColorRole::$variant)?, )*
                })
            }
        }
    };
}

color_roles! {
    /// The primary color of the scheme.
    Primary => primary, "primary";
    /// Color used for content on top of `primary`.
    OnPrimary => on_primary, "onPrimary";
    /// A container color for `primary`.
    PrimaryContainer => primary_container, "primaryContainer";
    /// Color used for content on top of `primary_container`.
    OnPrimaryContainer => on_primary_container, "onPrimaryContainer";
    /// The secondary color of the scheme.
    Secondary => secondary, "secondary";
    /// Color used for content on top of `secondary`.
    OnSecondary => on_secondary, "onSecondary";
    /// A container color for `secondary`.
    SecondaryContainer => secondary_container, "secondaryContainer";
    /// Color used for content on top of `secondary_container`.
    OnSecondaryContainer => on_secondary_container, "onSecondaryContainer";
    /// The tertiary color of the scheme.
    Tertiary => tertiary, "tertiary";
    /// Color used for content on top of `tertiary`.
    OnTertiary => on_tertiary, "onTertiary";
    /// A container color for `tertiary`.
    TertiaryContainer => tertiary_container, "tertiaryContainer";
    /// Color used for content on top of `tertiary_container`.
    OnTertiaryContainer => on_tertiary_container, "onTertiaryContainer";
    /// The error color of the scheme.
    Error => error, "error";
    /// Color used for content on top of `error`.
    OnError => on_error, "onError";
    /// A container color for `error`.
    ErrorContainer => error_container, "errorContainer";
    /// Color used for content on top of `error_container`.
    OnErrorContainer => on_error_container, "onErrorContainer";
    /// The background color of the scheme.
    Background => background, "background";
    /// Color used for content on top of `background`.
    OnBackground => on_background, "onBackground";
    /// The surface color of the scheme.
    Surface => surface, "surface";
    /// Color used for content on top of `surface`.
    OnSurface => on_surface, "onSurface";
    /// A variant of the surface color.
    SurfaceVariant => surface_variant, "surfaceVariant";
    /// Color used for content on top of `surface_variant`.
    OnSurfaceVariant => on_surface_variant, "onSurfaceVariant";
    /// The outline color.
    Outline => outline, "outline";
    /// A variant of the outline color.
    OutlineVariant => outline_variant, "outlineVariant";
    /// An inverse of the surface color.
    InverseSurface => inverse_surface, "inverseSurface";
    /// Color used for content on top of `inverse_surface`.
    InverseOnSurface => inverse_on_surface, "inverseOnSurface";
    /// An inverse of the primary color.
    InversePrimary => inverse_primary, "inversePrimary";
    /// The scrim color.
    Scrim => scrim, "scrim";
    /// The shadow color.
    Shadow => shadow, "shadow";
    /// Tint color used by tonal elevation overlays on surfaces.
    SurfaceTint => surface_tint, "surfaceTint";
    /// Dimmest surface.
    SurfaceDim => surface_dim, "surfaceDim";
    /// Brightest surface.
    SurfaceBright => surface_bright, "surfaceBright";
    /// Lowest-emphasis container surface.
    SurfaceContainerLowest => surface_container_lowest, "surfaceContainerLowest";
    /// Low-emphasis container surface.
    SurfaceContainerLow => surface_container_low, "surfaceContainerLow";
    /// Default container surface.
    SurfaceContainer => surface_container, "surfaceContainer";
    /// High-emphasis container surface.
    SurfaceContainerHigh => surface_container_high, "surfaceContainerHigh";
    /// Highest-emphasis container surface.
    SurfaceContainerHighest => surface_container_highest, "surfaceContainerHighest";
    /// Primary at the same tone in light and dark schemes.
    PrimaryFixed => primary_fixed, "primaryFixed";
    /// Dimmer `primary_fixed`.
    PrimaryFixedDim => primary_fixed_dim, "primaryFixedDim";
    /// Content color used on `primary_fixed` and `primary_fixed_dim`.
    OnPrimaryFixed => on_primary_fixed, "onPrimaryFixed";
    /// Lower-emphasis content color used on `primary_fixed` roles.
    OnPrimaryFixedVariant => on_primary_fixed_variant, "onPrimaryFixedVariant";
    /// Secondary at the same tone in light and dark schemes.
    SecondaryFixed => secondary_fixed, "secondaryFixed";
    /// Dimmer `secondary_fixed`.
    SecondaryFixedDim => secondary_fixed_dim, "secondaryFixedDim";
    /// Content color used on `secondary_fixed` and `secondary_fixed_dim`.
    OnSecondaryFixed => on_secondary_fixed, "onSecondaryFixed";
    /// Lower-emphasis content color used on `secondary_fixed` roles.
    OnSecondaryFixedVariant => on_secondary_fixed_variant, "onSecondaryFixedVariant";
    /// Tertiary at the same tone in light and dark schemes.
    TertiaryFixed => tertiary_fixed, "tertiaryFixed";
    /// Dimmer `tertiary_fixed`.
    TertiaryFixedDim => tertiary_fixed_dim, "tertiaryFixedDim";
    /// Content color used on `tertiary_fixed` and `tertiary_fixed_dim`.
    OnTertiaryFixed => on_tertiary_fixed, "onTertiaryFixed";
    /// Lower-emphasis content color used on `tertiary_fixed` roles.
    OnTertiaryFixedVariant => on_tertiary_fixed_variant, "onTertiaryFixedVariant";
}

/// Where a scheme slot samples its color from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// The slot.
    pub role: ColorRole,
    /// Palette to sample.
    pub palette: PaletteRole,
    /// Tone in the light scheme.
    pub light: f64,
    /// Tone in the dark scheme.
    pub dark: f64,
}

const fn spec(role: ColorRole, palette: PaletteRole, light: f64, dark: f64) -> ToneSpec {
    ToneSpec {
        role,
        palette,
        light,
        dark,
    }
}

/// Material 3 (palette, tone) assignments for every [`ColorRole`].
pub const TONE_TABLE: &[ToneSpec] = {
    use ColorRole as R;
    use PaletteRole as P;
    &[
        spec(R::Primary, P::Primary, 40.0, 80.0),
        spec(R::OnPrimary, P::Primary, 100.0, 20.0),
        spec(R::PrimaryContainer, P::Primary, 90.0, 30.0),
        spec(R::OnPrimaryContainer, P::Primary, 10.0, 90.0),
        spec(R::Secondary, P::Secondary, 40.0, 80.0),
        spec(R::OnSecondary, P::Secondary, 100.0, 20.0),
        spec(R::SecondaryContainer, P::Secondary, 90.0, 30.0),
        spec(R::OnSecondaryContainer, P::Secondary, 10.0, 90.0),
        spec(R::Tertiary, P::Tertiary, 40.0, 80.0),
        spec(R::OnTertiary, P::Tertiary, 100.0, 20.0),
        spec(R::TertiaryContainer, P::Tertiary, 90.0, 30.0),
        spec(R::OnTertiaryContainer, P::Tertiary, 10.0, 90.0),
        spec(R::Error, P::Error, 40.0, 80.0),
        spec(R::OnError, P::Error, 100.0, 20.0),
        spec(R::ErrorContainer, P::Error, 90.0, 30.0),
        spec(R::OnErrorContainer, P::Error, 10.0, 90.0),
        spec(R::Background, P::Neutral, 98.0, 6.0),
        spec(R::OnBackground, P::Neutral, 10.0, 90.0),
        spec(R::Surface, P::Neutral, 98.0, 6.0),
        spec(R::OnSurface, P::Neutral, 10.0, 90.0),
        spec(R::SurfaceVariant, P::NeutralVariant, 90.0, 30.0),
        spec(R::OnSurfaceVariant, P::NeutralVariant, 30.0, 80.0),
        spec(R::Outline, P::NeutralVariant, 50.0, 60.0),
        spec(R::OutlineVariant, P::NeutralVariant, 80.0, 30.0),
        spec(R::InverseSurface, P::Neutral, 20.0, 90.0),
        spec(R::InverseOnSurface, P::Neutral, 95.0, 20.0),
        spec(R::InversePrimary, P::Primary, 80.0, 40.0),
        spec(R::Scrim, P::Neutral, 0.0, 0.0),
        spec(R::Shadow, P::Neutral, 0.0, 0.0),
        spec(R::SurfaceTint, P::Primary, 40.0, 80.0),
        spec(R::SurfaceDim, P::Neutral, 87.0, 6.0),
        spec(R::SurfaceBright, P::Neutral, 98.0, 24.0),
        spec(R::SurfaceContainerLowest, P::Neutral, 100.0, 4.0),
        spec(R::SurfaceContainerLow, P::Neutral, 96.0, 10.0),
        spec(R::SurfaceContainer, P::Neutral, 94.0, 12.0),
        spec(R::SurfaceContainerHigh, P::Neutral, 92.0, 17.0),
        spec(R::SurfaceContainerHighest, P::Neutral, 90.0, 22.0),
        spec(R::PrimaryFixed, P::Primary, 90.0, 90.0),
        spec(R::PrimaryFixedDim, P::Primary, 80.0, 80.0),
        spec(R::OnPrimaryFixed, P::Primary, 10.0, 10.0),
        spec(R::OnPrimaryFixedVariant, P::Primary, 30.0, 30.0),
        spec(R::SecondaryFixed, P::Secondary, 90.0, 90.0),
        spec(R::SecondaryFixedDim, P::Secondary, 80.0, 80.0),
        spec(R::OnSecondaryFixed, P::Secondary, 10.0, 10.0),
        spec(R::OnSecondaryFixedVariant, P::Secondary, 30.0, 30.0),
        spec(R::TertiaryFixed, P::Tertiary, 90.0, 90.0),
        spec(R::TertiaryFixedDim, P::Tertiary, 80.0, 80.0),
        spec(R::OnTertiaryFixed, P::Tertiary, 10.0, 10.0),
        spec(R::OnTertiaryFixedVariant, P::Tertiary, 30.0, 30.0),
    ]
};

impl ColorScheme {
    /// Samples every slot from `palettes` using [`TONE_TABLE`].
    pub fn from_palettes(palettes: &PaletteSet, is_dark: bool) -> Result<Self, ColorError> {
        Self::from_palettes_with_table(palettes, is_dark, TONE_TABLE)
    }

    /// Samples every slot using a custom tone table.
    ///
    /// Fails with [`ColorError::MissingTone`] if any slot has no entry; no
    /// partially filled scheme is ever returned.
    pub fn from_palettes_with_table(
        palettes: &PaletteSet,
        is_dark: bool,
        table: &[ToneSpec],
    ) -> Result<Self, ColorError> {
        Self::try_from_fn(is_dark, |role| {
            let spec = table
                .iter()
                .find(|spec| spec.role == role)
                .ok_or(ColorError::MissingTone { role: role.name() })?;
            let tone = if is_dark { spec.dark } else { spec.light };
            Ok(palettes.get(spec.palette).tone(tone))
        })
    }

    /// `(token name, color)` for every slot, in [`ColorRole::ALL`] order.
    pub fn swatches(&self) -> impl Iterator<Item = (&'static str, Argb)> + '_ {
        ColorRole::ALL
            .iter()
            .map(move |&role| (role.name(), self.get(role)))
    }

    /// Every slot as linear [`Color`], in [`ColorRole::ALL`] order.
    ///
    /// Pass the result to [`Color::slice_as_bytes`] to fill a uniform buffer.
    pub fn to_linear_colors(&self) -> Vec<Color> {
        ColorRole::ALL
            .iter()
            .map(|&role| Color::from(self.get(role)))
            .collect()
    }

    /// Returns the matching content color for a background color in this
    /// scheme.
    ///
    /// When the background color does not match a known scheme color, this
    /// returns `None`.
    pub fn content_color_for(&self, background: Argb) -> Option<Argb> {
        let surfaces = [
            self.surface,
            self.surface_bright,
            self.surface_dim,
            self.surface_container,
            self.surface_container_high,
            self.surface_container_highest,
            self.surface_container_low,
            self.surface_container_lowest,
        ];
        if background == self.primary {
            Some(self.on_primary)
        } else if background == self.secondary {
            Some(self.on_secondary)
        } else if background == self.tertiary {
            Some(self.on_tertiary)
        } else if background == self.background {
            Some(self.on_background)
        } else if background == self.error {
            Some(self.on_error)
        } else if background == self.primary_container {
            Some(self.on_primary_container)
        } else if background == self.secondary_container {
            Some(self.on_secondary_container)
        } else if background == self.tertiary_container {
            Some(self.on_tertiary_container)
        } else if background == self.error_container {
            Some(self.on_error_container)
        } else if background == self.inverse_surface {
            Some(self.inverse_on_surface)
        } else if surfaces.contains(&background) {
            Some(self.on_surface)
        } else if background == self.surface_variant {
            Some(self.on_surface_variant)
        } else if background == self.primary_fixed || background == self.primary_fixed_dim {
            Some(self.on_primary_fixed)
        } else if background == self.secondary_fixed || background == self.secondary_fixed_dim {
            Some(self.on_secondary_fixed)
        } else if background == self.tertiary_fixed || background == self.tertiary_fixed_dim {
            Some(self.on_tertiary_fixed)
        } else {
            None
        }
    }
}

/// Light and dark schemes derived from one key color, plus the palettes they
/// were sampled from.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialColorScheme {
    /// The key color.
    pub seed: Argb,
    /// Palette recipe used.
    pub variant: Variant,
    /// Light-mode scheme.
    pub light: ColorScheme,
    /// Dark-mode scheme.
    pub dark: ColorScheme,
    /// Palettes for tones outside the standard scheme.
    pub palettes: PaletteSet,
}

impl MaterialColorScheme {
    /// Derives both schemes from a parsed key color.
    pub fn from_argb(seed: Argb, variant: Variant) -> Result<Self, ColorError> {
        let palettes = PaletteSet::from_argb(seed, variant);
        let light = ColorScheme::from_palettes(&palettes, false)?;
        let dark = ColorScheme::from_palettes(&palettes, true)?;
        Ok(Self {
            seed,
            variant,
            light,
            dark,
            palettes,
        })
    }

    /// The light or dark scheme.
    pub fn scheme(&self, is_dark: bool) -> &ColorScheme {
        if is_dark { &self.dark } else { &self.light }
    }
}

/// Derives light and dark schemes from a `#RRGGBB` key color with the default
/// [`Variant::TonalSpot`] recipe.
pub fn derive_scheme(seed_hex: &str) -> Result<MaterialColorScheme, ColorError> {
    derive_scheme_with(seed_hex, Variant::default())
}

/// Derives light and dark schemes from a `#RRGGBB` key color.
#[tracing::instrument(level = "debug")]
pub fn derive_scheme_with(
    seed_hex: &str,
    variant: Variant,
) -> Result<MaterialColorScheme, ColorError> {
    let seed = Argb::from_hex(seed_hex)?;
    let scheme = MaterialColorScheme::from_argb(seed, variant)?;
    debug!(
        "Derived {} scheme from {seed}: primary {} / {}",
        variant.name(),
        scheme.light.primary,
        scheme.dark.primary
    );
    Ok(scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::ratio_of_argb;

    #[test]
    fn test_default_seed_golden_values() {
        let scheme = derive_scheme("#6750A4").unwrap();
        let light = [
            (ColorRole::Primary, "#65558f"),
            (ColorRole::OnPrimary, "#ffffff"),
            (ColorRole::PrimaryContainer, "#e9ddff"),
            (ColorRole::OnPrimaryContainer, "#201047"),
            (ColorRole::Secondary, "#625b71"),
            (ColorRole::Tertiary, "#7e5260"),
            (ColorRole::Error, "#ba1a1a"),
            (ColorRole::Surface, "#fdf7ff"),
            (ColorRole::OnSurface, "#1d1b20"),
            (ColorRole::SurfaceContainer, "#f2ecf4"),
        ];
        for (role, hex) in light {
            assert_eq!(scheme.light.get(role).to_hex(), hex, "light {}", role.name());
        }
        let dark = [
            (ColorRole::Primary, "#cfbdfe"),
            (ColorRole::OnPrimary, "#36275d"),
            (ColorRole::PrimaryContainer, "#4d3d75"),
            (ColorRole::OnPrimaryContainer, "#e9ddff"),
            (ColorRole::Error, "#ffb4ab"),
            (ColorRole::Surface, "#141218"),
            (ColorRole::SurfaceContainer, "#211f24"),
        ];
        for (role, hex) in dark {
            assert_eq!(scheme.dark.get(role).to_hex(), hex, "dark {}", role.name());
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        for seed in ["#6750A4", "#B3261E", "#386A20", "#0061a4"] {
            assert_eq!(derive_scheme(seed).unwrap(), derive_scheme(seed).unwrap());
        }
    }

    #[test]
    fn test_seed_sensitivity() {
        let purple = derive_scheme("#6750A4").unwrap().light.primary;
        let red = derive_scheme("#B3261E").unwrap().light.primary;
        let green = derive_scheme("#386A20").unwrap().light.primary;
        assert_eq!(red.to_hex(), "#904a42");
        assert_eq!(green.to_hex(), "#446732");
        assert_ne!(red, green);
        assert_ne!(red, purple);
        assert_ne!(green, purple);
    }

    #[test]
    fn test_malformed_seed_fails() {
        let err = derive_scheme("not-a-color").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidHex {
                input: "not-a-color".to_string()
            }
        );
    }

    #[test]
    fn test_light_and_dark_differ() {
        let scheme = derive_scheme("#6750A4").unwrap();
        assert!(!scheme.light.is_dark);
        assert!(scheme.dark.is_dark);
        assert_ne!(scheme.light.on_primary, scheme.dark.on_primary);
    }

    #[test]
    fn test_tone_table_covers_every_role() {
        for &role in ColorRole::ALL {
            let entries = TONE_TABLE.iter().filter(|spec| spec.role == role).count();
            assert_eq!(entries, 1, "{}", role.name());
        }
        assert_eq!(TONE_TABLE.len(), ColorRole::ALL.len());
    }

    #[test]
    fn test_missing_tone_entry_aborts() {
        let palettes = PaletteSet::from_argb(Argb(0xFF67_50A4), Variant::TonalSpot);
        let truncated: Vec<ToneSpec> = TONE_TABLE
            .iter()
            .copied()
            .filter(|spec| spec.role != ColorRole::SurfaceContainerHigh)
            .collect();
        let err = ColorScheme::from_palettes_with_table(&palettes, false, &truncated).unwrap_err();
        assert_eq!(
            err,
            ColorError::MissingTone {
                role: "surfaceContainerHigh"
            }
        );
    }

    #[test]
    fn test_role_names_round_trip() {
        for &role in ColorRole::ALL {
            assert_eq!(ColorRole::from_name(role.name()), Some(role));
        }
        assert_eq!(ColorRole::from_name("darkPrimary"), None);
    }

    #[test]
    fn test_swatches_cover_every_slot() {
        let scheme = derive_scheme("#386A20").unwrap();
        let swatches: Vec<_> = scheme.light.swatches().collect();
        assert_eq!(swatches.len(), ColorRole::ALL.len());
        assert_eq!(swatches[0], ("primary", scheme.light.primary));
        assert!(swatches.iter().all(|(_, argb)| argb.alpha() == 0xFF));
    }

    #[test]
    fn test_linear_colors_follow_role_order() {
        let scheme = derive_scheme("#6750A4").unwrap().dark;
        let linear = scheme.to_linear_colors();
        assert_eq!(linear.len(), ColorRole::ALL.len());
        let surface = ColorRole::ALL
            .iter()
            .position(|&role| role == ColorRole::Surface)
            .unwrap();
        assert_eq!(linear[surface].to_argb(), scheme.surface);
        assert!(linear.iter().all(|color| color.a == 1.0));
        assert_eq!(
            Color::slice_as_bytes(&linear).len(),
            ColorRole::ALL.len() * 16
        );
    }

    #[test]
    fn test_on_colors_have_contrast() {
        let pairs = [
            (ColorRole::Primary, ColorRole::OnPrimary),
            (ColorRole::PrimaryContainer, ColorRole::OnPrimaryContainer),
            (ColorRole::Secondary, ColorRole::OnSecondary),
            (ColorRole::SecondaryContainer, ColorRole::OnSecondaryContainer),
            (ColorRole::Tertiary, ColorRole::OnTertiary),
            (ColorRole::TertiaryContainer, ColorRole::OnTertiaryContainer),
            (ColorRole::Error, ColorRole::OnError),
            (ColorRole::ErrorContainer, ColorRole::OnErrorContainer),
            (ColorRole::Background, ColorRole::OnBackground),
            (ColorRole::Surface, ColorRole::OnSurface),
            (ColorRole::SurfaceVariant, ColorRole::OnSurfaceVariant),
            (ColorRole::InverseSurface, ColorRole::InverseOnSurface),
        ];
        for seed in ["#6750A4", "#B3261E", "#386A20", "#FFEB3B"] {
            let scheme = derive_scheme(seed).unwrap();
            for mode in [&scheme.light, &scheme.dark] {
                for (background, content) in pairs {
                    let ratio = ratio_of_argb(mode.get(background), mode.get(content));
                    assert!(
                        ratio >= 4.5,
                        "{seed} {} on {}: {ratio}",
                        content.name(),
                        background.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_content_color_for() {
        let scheme = derive_scheme("#6750A4").unwrap().light;
        assert_eq!(
            scheme.content_color_for(scheme.primary),
            Some(scheme.on_primary)
        );
        assert_eq!(
            scheme.content_color_for(scheme.surface_container_high),
            Some(scheme.on_surface)
        );
        assert_eq!(scheme.content_color_for(Argb(0xFF01_0203)), None);
    }
}
