//! Elevation levels, their shadows and tonal surface overlays.
//!
//! ## Usage
//!
//! Pick a level for a raised surface, then read its shadow descriptor and
//! tinted surface color.
//!
//! ```
//! use tessera_color::derive_scheme;
//! use tessera_theme::{ElevationLevel, surface_color_at_elevation};
//!
//! let scheme = derive_scheme("#6750A4").unwrap().light;
//! let shadow = ElevationLevel::Level2.shadow();
//! assert_eq!(shadow.android_elevation, 3.0);
//! assert_ne!(
//!     surface_color_at_elevation(&scheme, ElevationLevel::Level2.height()),
//!     scheme.surface
//! );
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tessera_color::{Argb, Color, ColorScheme};

use crate::Dp;

/// Material 3 elevation levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElevationLevel {
    /// Flat, 0dp.
    #[default]
    Level0,
    /// 1dp.
    Level1,
    /// 3dp.
    Level2,
    /// 6dp.
    Level3,
    /// 8dp.
    Level4,
    /// 12dp.
    Level5,
}

/// A single drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowDescriptor {
    /// Shadow color before opacity.
    pub color: Argb,
    /// Offset in the format [x, y].
    pub offset: [Dp; 2],
    /// Opacity applied to `color`.
    pub opacity: f32,
    /// Blur radius.
    pub blur_radius: Dp,
    /// Elevation for hosts that draw native shadows.
    pub android_elevation: f64,
}

impl ShadowDescriptor {
    /// No shadow.
    pub const NONE: ShadowDescriptor = ShadowDescriptor {
        color: Argb::BLACK,
        offset: [Dp::ZERO, Dp::ZERO],
        opacity: 0.0,
        blur_radius: Dp::ZERO,
        android_elevation: 0.0,
    };

    /// The shadow color with opacity applied.
    pub fn rgba(&self) -> Color {
        Color::from(self.color).with_alpha(self.opacity)
    }
}

impl ElevationLevel {
    /// Flat to highest.
    pub const ALL: [ElevationLevel; 6] = [
        ElevationLevel::Level0,
        ElevationLevel::Level1,
        ElevationLevel::Level2,
        ElevationLevel::Level3,
        ElevationLevel::Level4,
        ElevationLevel::Level5,
    ];

    /// Token key, `level0` to `level5`.
    pub const fn key(self) -> &'static str {
        match self {
            ElevationLevel::Level0 => "level0",
            ElevationLevel::Level1 => "level1",
            ElevationLevel::Level2 => "level2",
            ElevationLevel::Level3 => "level3",
            ElevationLevel::Level4 => "level4",
            ElevationLevel::Level5 => "level5",
        }
    }

    /// Elevation height.
    pub const fn height(self) -> Dp {
        Dp(match self {
            ElevationLevel::Level0 => 0.0,
            ElevationLevel::Level1 => 1.0,
            ElevationLevel::Level2 => 3.0,
            ElevationLevel::Level3 => 6.0,
            ElevationLevel::Level4 => 8.0,
            ElevationLevel::Level5 => 12.0,
        })
    }

    /// Opacity of the surface tint overlay at this level.
    pub fn tint_alpha(self) -> f32 {
        tonal_overlay_alpha(self.height())
    }

    /// Shadow cast at this level.
    pub const fn shadow(self) -> ShadowDescriptor {
        let (offset_y, opacity, blur) = match self {
            ElevationLevel::Level0 => return ShadowDescriptor::NONE,
            ElevationLevel::Level1 => (1.0, 0.15, 3.0),
            ElevationLevel::Level2 => (2.0, 0.17, 6.0),
            ElevationLevel::Level3 => (4.0, 0.19, 8.0),
            ElevationLevel::Level4 => (6.0, 0.21, 10.0),
            ElevationLevel::Level5 => (8.0, 0.23, 12.0),
        };
        ShadowDescriptor {
            color: Argb::BLACK,
            offset: [Dp::ZERO, Dp(offset_y)],
            opacity,
            blur_radius: Dp(blur),
            android_elevation: self.height().0,
        }
    }
}

/// One row of the elevation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationToken {
    /// Elevation height.
    pub height: Dp,
    /// Surface tint overlay opacity.
    pub tint_alpha: f32,
    /// Shadow cast at this level.
    pub shadow: ShadowDescriptor,
}

impl From<ElevationLevel> for ElevationToken {
    fn from(level: ElevationLevel) -> Self {
        Self {
            height: level.height(),
            tint_alpha: level.tint_alpha(),
            shadow: level.shadow(),
        }
    }
}

/// Every level keyed by `level0` to `level5`.
pub fn elevation_table() -> BTreeMap<&'static str, ElevationToken> {
    ElevationLevel::ALL
        .into_iter()
        .map(|level| (level.key(), ElevationToken::from(level)))
        .collect()
}

/// Opacity of the surface tint overlay at `elevation`.
pub fn tonal_overlay_alpha(elevation: Dp) -> f32 {
    if elevation.0 <= 0.0 {
        return 0.0;
    }
    (((4.5 * (elevation.0 + 1.0).ln()) + 2.0) / 100.0) as f32
}

/// Computes the surface tonal color at an elevation.
pub fn surface_color_at_elevation(scheme: &ColorScheme, elevation: Dp) -> Argb {
    let alpha = tonal_overlay_alpha(elevation);
    if alpha == 0.0 {
        return scheme.surface;
    }
    Color::from(scheme.surface)
        .blend_over(Color::from(scheme.surface_tint), alpha)
        .to_argb()
}

/// Returns `surface_color_at_elevation` for the scheme surface, otherwise
/// `background` unchanged.
pub fn surface_color_at_elevation_for(
    scheme: &ColorScheme,
    background: Argb,
    elevation: Dp,
) -> Argb {
    if background == scheme.surface {
        surface_color_at_elevation(scheme, elevation)
    } else {
        background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_color::derive_scheme;

    #[test]
    fn test_shadows_grow_with_level() {
        for pair in ElevationLevel::ALL.windows(2) {
            let (low, high) = (pair[0].shadow(), pair[1].shadow());
            assert!(high.opacity > low.opacity);
            assert!(high.blur_radius > low.blur_radius);
            assert!(high.android_elevation > low.android_elevation);
        }
        assert_eq!(ElevationLevel::Level0.shadow(), ShadowDescriptor::NONE);
    }

    #[test]
    fn test_tonal_overlay_alpha() {
        assert_eq!(tonal_overlay_alpha(Dp::ZERO), 0.0);
        let one = tonal_overlay_alpha(Dp(1.0));
        assert!((one - 0.0512).abs() < 1e-3);
        assert!(tonal_overlay_alpha(Dp(12.0)) > one);
        assert_eq!(ElevationLevel::Level1.tint_alpha(), one);
        assert_eq!(ElevationLevel::Level0.tint_alpha(), 0.0);
    }

    #[test]
    fn test_elevation_table_covers_every_level() {
        let table = elevation_table();
        assert_eq!(table.len(), ElevationLevel::ALL.len());
        let level3 = table["level3"];
        assert_eq!(level3.height, Dp(6.0));
        assert_eq!(level3.shadow, ElevationLevel::Level3.shadow());
        assert_eq!(table["level0"].tint_alpha, 0.0);

        let json = serde_json::to_value(table["level2"]).unwrap();
        assert_eq!(json["height"], 3.0);
        assert_eq!(json["shadow"]["blurRadius"], 6.0);
        assert_eq!(json["shadow"]["androidElevation"], 3.0);
        assert!(json.get("tintAlpha").is_some());
    }

    #[test]
    fn test_surface_tint_only_applies_to_surface() {
        let scheme = derive_scheme("#6750A4").unwrap().dark;
        assert_eq!(surface_color_at_elevation(&scheme, Dp::ZERO), scheme.surface);
        assert_ne!(surface_color_at_elevation(&scheme, Dp(6.0)), scheme.surface);
        assert_eq!(
            surface_color_at_elevation_for(&scheme, scheme.primary, Dp(6.0)),
            scheme.primary
        );
    }
}
