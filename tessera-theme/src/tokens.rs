//! The design token table: color, space, size, radius and z-index namespaces.
//!
//! ## Usage
//!
//! Build a table from a key color, then resolve typed token names. Typed
//! resolution cannot fail; string lookups exist for styles authored as
//! `"$primary"` and return `Option`.
//!
//! ```
//! use tessera_color::ColorRole;
//! use tessera_theme::{Brightness, Dp, Radius, TokenName, TokenValue, build_tokens};
//!
//! let tokens = build_tokens("#6750A4").unwrap();
//! assert_eq!(
//!     tokens.color(ColorRole::Primary, Brightness::Light).to_hex(),
//!     "#65558f"
//! );
//! assert_eq!(
//!     tokens.resolve(TokenName::Radius(Radius::Full)),
//!     TokenValue::Dp(Dp(9999.0))
//! );
//! assert_eq!(tokens.lookup("$darkPrimary"), Some(TokenValue::Color(tokens.dark.primary)));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tessera_color::{Argb, ColorRole, ColorScheme, MaterialColorScheme};
use tracing::warn;

use crate::Dp;

/// Prefix distinguishing dark-mode color tokens from light ones.
pub const DARK_PREFIX: &str = "dark";

/// Light or dark mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Brightness {
    /// Light mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl Brightness {
    /// Whether this is dark mode.
    pub const fn is_dark(self) -> bool {
        matches!(self, Brightness::Dark)
    }

    /// Theme name registered with the styling system.
    pub const fn name(self) -> &'static str {
        match self {
            Brightness::Light => "light",
            Brightness::Dark => "dark",
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Brightness::Light => Brightness::Dark,
            Brightness::Dark => Brightness::Light,
        }
    }
}

/// Position on the eight-step generic scales shared by space, size and
/// radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    /// Step 1.
    Xxs,
    /// Step 2.
    Xs,
    /// Step 3.
    Sm,
    /// Step 4.
    Md,
    /// Step 5.
    Lg,
    /// Step 6.
    Xl,
    /// Step 7.
    Xxl,
    /// Step 8.
    Xxxl,
}

impl Step {
    /// All steps, smallest first.
    pub const ALL: [Step; 8] = [
        Step::Xxs,
        Step::Xs,
        Step::Sm,
        Step::Md,
        Step::Lg,
        Step::Xl,
        Step::Xxl,
        Step::Xxxl,
    ];

    /// Token key.
    pub const fn key(self) -> &'static str {
        match self {
            Step::Xxs => "xxs",
            Step::Xs => "xs",
            Step::Sm => "sm",
            Step::Md => "md",
            Step::Lg => "lg",
            Step::Xl => "xl",
            Step::Xxl => "xxl",
            Step::Xxxl => "xxxl",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    fn from_key(key: &str) -> Option<Self> {
        Step::ALL.into_iter().find(|step| step.key() == key)
    }
}

const SPACE_SCALE: [f64; 8] = [2.0, 4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0];
const SIZE_SCALE: [f64; 8] = [16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 56.0, 64.0];
const RADIUS_SCALE: [f64; 8] = [2.0, 4.0, 6.0, 8.0, 12.0, 16.0, 20.0, 28.0];

/// Spacing token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Space(pub Step);

impl Space {
    /// All spacing tokens.
    pub const ALL: [Space; 8] = [
        Space(Step::Xxs),
        Space(Step::Xs),
        Space(Step::Sm),
        Space(Step::Md),
        Space(Step::Lg),
        Space(Step::Xl),
        Space(Step::Xxl),
        Space(Step::Xxxl),
    ];

    /// Token key.
    pub const fn key(self) -> &'static str {
        self.0.key()
    }

    /// Spacing length.
    pub const fn value(self) -> Dp {
        Dp(SPACE_SCALE[self.0.index()])
    }
}

/// Size token: a generic step or a named component size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    /// Generic step.
    Step(Step),
    /// Common button height.
    Button,
    /// Text input height.
    Input,
    /// Checkbox box edge.
    Checkbox,
    /// Switch track height.
    Switch,
    /// Icon edge.
    Icon,
    /// Avatar diameter.
    Avatar,
}

impl Size {
    /// All size tokens: the eight steps, then the named sizes.
    pub const ALL: [Size; 14] = [
        Size::Step(Step::Xxs),
        Size::Step(Step::Xs),
        Size::Step(Step::Sm),
        Size::Step(Step::Md),
        Size::Step(Step::Lg),
        Size::Step(Step::Xl),
        Size::Step(Step::Xxl),
        Size::Step(Step::Xxxl),
        Size::Button,
        Size::Input,
        Size::Checkbox,
        Size::Switch,
        Size::Icon,
        Size::Avatar,
    ];

    /// Token key.
    pub const fn key(self) -> &'static str {
        match self {
            Size::Step(step) => step.key(),
            Size::Button => "button",
            Size::Input => "input",
            Size::Checkbox => "checkbox",
            Size::Switch => "switch",
            Size::Icon => "icon",
            Size::Avatar => "avatar",
        }
    }

    /// Length.
    pub const fn value(self) -> Dp {
        Dp(match self {
            Size::Step(step) => SIZE_SCALE[step.index()],
            Size::Button => 40.0,
            Size::Input => 56.0,
            Size::Checkbox => 18.0,
            Size::Switch => 32.0,
            Size::Icon => 24.0,
            Size::Avatar => 40.0,
        })
    }
}

/// Corner radius token: a generic step or a Material shape size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radius {
    /// Generic step.
    Step(Step),
    /// Extra small shape (4dp).
    ExtraSmall,
    /// Small shape (8dp).
    Small,
    /// Medium shape (12dp).
    Medium,
    /// Large shape (16dp).
    Large,
    /// Extra large shape (28dp).
    ExtraLarge,
    /// Fully rounded.
    Full,
}

impl Radius {
    /// All radius tokens: the eight steps, then the shape sizes.
    pub const ALL: [Radius; 14] = [
        Radius::Step(Step::Xxs),
        Radius::Step(Step::Xs),
        Radius::Step(Step::Sm),
        Radius::Step(Step::Md),
        Radius::Step(Step::Lg),
        Radius::Step(Step::Xl),
        Radius::Step(Step::Xxl),
        Radius::Step(Step::Xxxl),
        Radius::ExtraSmall,
        Radius::Small,
        Radius::Medium,
        Radius::Large,
        Radius::ExtraLarge,
        Radius::Full,
    ];

    /// Token key.
    pub const fn key(self) -> &'static str {
        match self {
            Radius::Step(step) => step.key(),
            Radius::ExtraSmall => "extraSmall",
            Radius::Small => "small",
            Radius::Medium => "medium",
            Radius::Large => "large",
            Radius::ExtraLarge => "extraLarge",
            Radius::Full => "full",
        }
    }

    /// Radius length.
    pub const fn value(self) -> Dp {
        Dp(match self {
            Radius::Step(step) => RADIUS_SCALE[step.index()],
            Radius::ExtraSmall => 4.0,
            Radius::Small => 8.0,
            Radius::Medium => 12.0,
            Radius::Large => 16.0,
            Radius::ExtraLarge => 28.0,
            Radius::Full => 9999.0,
        })
    }
}

/// Layering token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZIndex {
    /// Page content.
    Base,
    /// Raised cards and app bars.
    Raised,
    /// Menus and dropdowns.
    Dropdown,
    /// Sheets and scrims.
    Overlay,
    /// Dialogs.
    Modal,
    /// Snackbars and toasts.
    Toast,
}

impl ZIndex {
    /// All layers, bottom first.
    pub const ALL: [ZIndex; 6] = [
        ZIndex::Base,
        ZIndex::Raised,
        ZIndex::Dropdown,
        ZIndex::Overlay,
        ZIndex::Modal,
        ZIndex::Toast,
    ];

    /// Token key.
    pub const fn key(self) -> &'static str {
        match self {
            ZIndex::Base => "base",
            ZIndex::Raised => "raised",
            ZIndex::Dropdown => "dropdown",
            ZIndex::Overlay => "overlay",
            ZIndex::Modal => "modal",
            ZIndex::Toast => "toast",
        }
    }

    /// Stacking order.
    pub const fn value(self) -> i32 {
        self as i32 * 100
    }
}

/// A typed reference into the token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenName {
    /// Light-mode color, e.g. `primary`.
    Color(ColorRole),
    /// Dark-mode color, e.g. `darkPrimary`.
    DarkColor(ColorRole),
    /// Spacing.
    Space(Space),
    /// Size.
    Size(Size),
    /// Corner radius.
    Radius(Radius),
    /// Layer.
    ZIndex(ZIndex),
}

impl TokenName {
    /// Parses a token reference.
    ///
    /// Colors are bare (`primary`, `darkOnSurface`); other namespaces are
    /// qualified (`space.md`, `size.button`, `radius.full`, `zIndex.modal`).
    /// A leading `$` is ignored.
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.strip_prefix('$').unwrap_or(reference);
        if let Some((namespace, key)) = reference.split_once('.') {
            return match namespace {
                "space" => Step::from_key(key).map(|step| TokenName::Space(Space(step))),
                "size" => Size::ALL
                    .into_iter()
                    .find(|size| size.key() == key)
                    .map(TokenName::Size),
                "radius" => Radius::ALL
                    .into_iter()
                    .find(|radius| radius.key() == key)
                    .map(TokenName::Radius),
                "zIndex" => ZIndex::ALL
                    .into_iter()
                    .find(|layer| layer.key() == key)
                    .map(TokenName::ZIndex),
                _ => None,
            };
        }
        if let Some(role) = ColorRole::from_name(reference) {
            return Some(TokenName::Color(role));
        }
        let rest = reference.strip_prefix(DARK_PREFIX)?;
        let mut chars = rest.chars();
        let first = chars.next()?;
        if !first.is_ascii_uppercase() {
            return None;
        }
        let light_name = format!("{}{}", first.to_ascii_lowercase(), chars.as_str());
        ColorRole::from_name(&light_name).map(TokenName::DarkColor)
    }
}

/// A resolved token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    /// A color.
    Color(Argb),
    /// A length.
    Dp(Dp),
    /// A stacking order.
    ZIndex(i32),
}

/// Name of the dark-mode token for `role`, e.g. `darkOnPrimary`.
pub fn dark_token_name(role: ColorRole) -> String {
    let name = role.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("{DARK_PREFIX}{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => DARK_PREFIX.to_string(),
    }
}

/// Immutable token table built from one key color.
///
/// A new key color means a new table; tables are never patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    /// Light-mode colors.
    pub light: ColorScheme,
    /// Dark-mode colors.
    pub dark: ColorScheme,
}

impl TokenTable {
    /// Builds the table from derived schemes.
    pub fn from_scheme(scheme: &MaterialColorScheme) -> Self {
        Self {
            light: scheme.light.clone(),
            dark: scheme.dark.clone(),
        }
    }

    /// The scheme for `brightness`.
    pub fn scheme(&self, brightness: Brightness) -> &ColorScheme {
        match brightness {
            Brightness::Light => &self.light,
            Brightness::Dark => &self.dark,
        }
    }

    /// The color of `role` in `brightness`.
    pub fn color(&self, role: ColorRole, brightness: Brightness) -> Argb {
        self.scheme(brightness).get(role)
    }

    /// Resolves a typed token.
    pub fn resolve(&self, name: TokenName) -> TokenValue {
        match name {
            TokenName::Color(role) => TokenValue::Color(self.light.get(role)),
            TokenName::DarkColor(role) => TokenValue::Color(self.dark.get(role)),
            TokenName::Space(space) => TokenValue::Dp(space.value()),
            TokenName::Size(size) => TokenValue::Dp(size.value()),
            TokenName::Radius(radius) => TokenValue::Dp(radius.value()),
            TokenName::ZIndex(layer) => TokenValue::ZIndex(layer.value()),
        }
    }

    /// Resolves a token reference string, see [`TokenName::parse`].
    pub fn lookup(&self, reference: &str) -> Option<TokenValue> {
        TokenName::parse(reference).map(|name| self.resolve(name))
    }

    /// Resolves a color reference, falling back to black for unknown or
    /// non-color references so a broken style still renders.
    pub fn resolve_color_or_default(&self, reference: &str) -> Argb {
        match self.lookup(reference) {
            Some(TokenValue::Color(argb)) => argb,
            _ => {
                warn!("Unknown color token {reference:?}, falling back to black");
                Argb::BLACK
            }
        }
    }

    /// The flat color namespace: light names, then `dark`-prefixed names.
    pub fn color_entries(&self) -> Vec<(String, Argb)> {
        let light = self
            .light
            .swatches()
            .map(|(name, argb)| (name.to_string(), argb));
        let dark = ColorRole::ALL
            .iter()
            .map(|&role| (dark_token_name(role), self.dark.get(role)));
        light.chain(dark).collect()
    }

    /// All namespaces as the maps handed to the styling system.
    pub fn namespaces(&self) -> TokenNamespaces {
        TokenNamespaces {
            color: self.color_entries().into_iter().collect(),
            space: Space::ALL
                .into_iter()
                .map(|space| (space.key(), space.value()))
                .collect(),
            size: Size::ALL
                .into_iter()
                .map(|size| (size.key(), size.value()))
                .collect(),
            radius: Radius::ALL
                .into_iter()
                .map(|radius| (radius.key(), radius.value()))
                .collect(),
            z_index: ZIndex::ALL
                .into_iter()
                .map(|layer| (layer.key(), layer.value()))
                .collect(),
        }
    }
}

/// Token namespaces in the shape the styling system's `tokens` entry expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenNamespaces {
    /// Light and `dark`-prefixed colors.
    pub color: BTreeMap<String, Argb>,
    /// Spacing scale.
    pub space: BTreeMap<&'static str, Dp>,
    /// Generic and component sizes.
    pub size: BTreeMap<&'static str, Dp>,
    /// Generic and shape radii.
    pub radius: BTreeMap<&'static str, Dp>,
    /// Layers.
    pub z_index: BTreeMap<&'static str, i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_color::derive_scheme;

    fn table(seed: &str) -> TokenTable {
        TokenTable::from_scheme(&derive_scheme(seed).unwrap())
    }

    #[test]
    fn test_dark_token_names() {
        assert_eq!(dark_token_name(ColorRole::Primary), "darkPrimary");
        assert_eq!(
            dark_token_name(ColorRole::OnSurfaceVariant),
            "darkOnSurfaceVariant"
        );
    }

    #[test]
    fn test_parse_references() {
        assert_eq!(
            TokenName::parse("$primary"),
            Some(TokenName::Color(ColorRole::Primary))
        );
        assert_eq!(
            TokenName::parse("darkSurfaceContainerHigh"),
            Some(TokenName::DarkColor(ColorRole::SurfaceContainerHigh))
        );
        assert_eq!(
            TokenName::parse("space.md"),
            Some(TokenName::Space(Space(Step::Md)))
        );
        assert_eq!(
            TokenName::parse("$size.button"),
            Some(TokenName::Size(Size::Button))
        );
        assert_eq!(
            TokenName::parse("radius.extraLarge"),
            Some(TokenName::Radius(Radius::ExtraLarge))
        );
        assert_eq!(
            TokenName::parse("zIndex.modal"),
            Some(TokenName::ZIndex(ZIndex::Modal))
        );
        for bad in ["", "$", "dark", "darkprimary", "space.huge", "color.primary", "primaryy"] {
            assert_eq!(TokenName::parse(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_every_color_entry_resolves() {
        let tokens = table("#6750A4");
        for (name, argb) in tokens.color_entries() {
            assert_eq!(tokens.lookup(&name), Some(TokenValue::Color(argb)), "{name}");
        }
    }

    #[test]
    fn test_namespace_shape_is_seed_independent() {
        let purple = table("#6750A4").namespaces();
        let red = table("#B3261E").namespaces();
        let keys = |map: &BTreeMap<String, Argb>| map.keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys(&purple.color), keys(&red.color));
        assert_eq!(purple.color.len(), ColorRole::ALL.len() * 2);
        assert_eq!(purple.space, red.space);
        assert_eq!(purple.size, red.size);
        assert_eq!(purple.radius, red.radius);
        assert_eq!(purple.z_index, red.z_index);
        assert_ne!(purple.color, red.color);
    }

    #[test]
    fn test_scales() {
        assert_eq!(Space::ALL.len(), 8);
        assert!(Space::ALL.windows(2).all(|w| w[0].value() < w[1].value()));
        assert_eq!(Size::Button.value(), Dp(40.0));
        assert_eq!(Radius::Full.value(), Dp(9999.0));
        assert_eq!(ZIndex::Toast.value(), 500);
    }

    #[test]
    fn test_unknown_color_falls_back_to_black() {
        let tokens = table("#386A20");
        assert_eq!(tokens.resolve_color_or_default("$nope"), Argb::BLACK);
        assert_eq!(tokens.resolve_color_or_default("space.md"), Argb::BLACK);
        assert_eq!(
            tokens.resolve_color_or_default("$primary"),
            tokens.light.primary
        );
    }

    #[test]
    fn test_brightness() {
        assert_eq!(Brightness::default(), Brightness::Light);
        assert!(Brightness::Light.toggled().is_dark());
        assert_eq!(Brightness::Dark.name(), "dark");
    }
}
