//! Shared, swappable theme.
//!
//! ## Usage
//!
//! Hold one [`ThemeHandle`] for the app. Readers take cheap snapshots; a key
//! color or mode change builds the replacement off to the side and swaps it
//! in whole.
//!
//! ```
//! use tessera_color::ColorRole;
//! use tessera_theme::{Brightness, ThemeHandle, ThemeOptions};
//!
//! let handle = ThemeHandle::new(ThemeOptions::default()).unwrap();
//! let before = handle.snapshot();
//! handle.set_key_color("#386A20").unwrap();
//! assert_ne!(handle.snapshot().tokens, before.tokens);
//! assert!(handle.set_key_color("green").is_err());
//!
//! handle.set_brightness(Brightness::Dark);
//! assert_eq!(
//!     handle.snapshot().theme.resolve(ColorRole::Surface),
//!     handle.resolve(ColorRole::Surface)
//! );
//! ```

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tessera_color::{Argb, ColorRole, Variant};
use tracing::{info, warn};

use crate::{
    ThemeError,
    theme::{BuiltTheme, ThemeOptions, build_theme_with},
    tokens::Brightness,
};

/// The active theme and the options it was built from.
///
/// The published [`BuiltTheme`] carries the active mode in
/// `theme.brightness`; updates are applied one at a time.
#[derive(Debug)]
pub struct ThemeHandle {
    current: RwLock<Arc<BuiltTheme>>,
    options: Mutex<ThemeOptions>,
}

impl ThemeHandle {
    /// Builds the initial theme.
    pub fn new(options: ThemeOptions) -> Result<Self, ThemeError> {
        let built = build_theme_with(&options)?;
        Ok(Self {
            current: RwLock::new(Arc::new(built)),
            options: Mutex::new(options),
        })
    }

    /// The current theme. Later swaps do not affect the returned snapshot.
    pub fn snapshot(&self) -> Arc<BuiltTheme> {
        self.current.read().clone()
    }

    /// The options of the current theme.
    pub fn options(&self) -> ThemeOptions {
        self.options.lock().clone()
    }

    /// Rebuilds from a new key color, keeping the other options.
    ///
    /// On error the current theme stays active.
    pub fn set_key_color(&self, key_color: &str) -> Result<Arc<BuiltTheme>, ThemeError> {
        self.update(|options| options.clone().with_key_color(key_color))
    }

    /// Rebuilds with another palette recipe, keeping the other options.
    pub fn set_variant(&self, variant: Variant) -> Result<Arc<BuiltTheme>, ThemeError> {
        self.update(|options| options.clone().with_variant(variant))
    }

    /// Rebuilds from new options and swaps the result in.
    ///
    /// On error the current theme stays active.
    pub fn rebuild(&self, options: ThemeOptions) -> Result<Arc<BuiltTheme>, ThemeError> {
        self.update(|_| options)
    }

    fn update(
        &self,
        next: impl FnOnce(&ThemeOptions) -> ThemeOptions,
    ) -> Result<Arc<BuiltTheme>, ThemeError> {
        let mut options = self.options.lock();
        let next = next(&options);
        let mut built = match build_theme_with(&next) {
            Ok(built) => built,
            Err(err) => {
                warn!("Keeping current theme: {err}");
                return Err(err);
            }
        };
        let mut current = self.current.write();
        built.theme.brightness = current.theme.brightness;
        let built = Arc::new(built);
        *current = built.clone();
        *options = next;
        info!("Theme switched to key color {}", built.key_color);
        Ok(built)
    }

    /// Active mode.
    pub fn brightness(&self) -> Brightness {
        self.current.read().theme.brightness
    }

    /// Switches the active mode by publishing a copy of the current theme in
    /// that mode.
    pub fn set_brightness(&self, brightness: Brightness) {
        let _options = self.options.lock();
        let mut current = self.current.write();
        if current.theme.brightness == brightness {
            return;
        }
        let mut next = BuiltTheme::clone(&current);
        next.theme.brightness = brightness;
        *current = Arc::new(next);
    }

    /// The color of `role` in the active mode of the current theme.
    pub fn resolve(&self, role: ColorRole) -> Argb {
        self.current.read().theme.resolve(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_swap_keeps_current_theme() {
        let handle = ThemeHandle::new(ThemeOptions::default()).unwrap();
        let before = handle.snapshot();
        assert!(handle.set_key_color("#XYZXYZ").is_err());
        assert!(Arc::ptr_eq(&before, &handle.snapshot()));
        assert_eq!(handle.options().key_color, "#6750A4");
    }

    #[test]
    fn test_snapshot_survives_swap() {
        let handle = ThemeHandle::new(ThemeOptions::default()).unwrap();
        let before = handle.snapshot();
        let after = handle.set_key_color("#B3261E").unwrap();
        assert_eq!(before.tokens.light.primary.to_hex(), "#65558f");
        assert_eq!(after.tokens.light.primary.to_hex(), "#904a42");
        assert!(Arc::ptr_eq(&after, &handle.snapshot()));
        assert_eq!(handle.options().key_color, "#B3261E");
    }

    #[test]
    fn test_resolve_follows_brightness() {
        let handle = ThemeHandle::new(ThemeOptions::default()).unwrap();
        let light = handle.resolve(ColorRole::Surface);
        handle.set_brightness(Brightness::Dark);
        assert_eq!(handle.brightness(), Brightness::Dark);
        assert_eq!(handle.resolve(ColorRole::Surface).to_hex(), "#141218");
        assert_ne!(light, handle.resolve(ColorRole::Surface));
    }

    #[test]
    fn test_snapshot_agrees_with_handle_on_mode() {
        let handle = ThemeHandle::new(ThemeOptions::default()).unwrap();
        let light = handle.snapshot();
        handle.set_brightness(Brightness::Dark);
        let dark = handle.snapshot();
        assert_eq!(dark.theme.brightness, Brightness::Dark);
        assert_eq!(
            dark.theme.resolve(ColorRole::Surface),
            handle.resolve(ColorRole::Surface)
        );
        assert_eq!(light.theme.brightness, Brightness::Light);

        // A rebuild keeps the active mode.
        let rebuilt = handle.set_key_color("#386A20").unwrap();
        assert_eq!(rebuilt.theme.brightness, Brightness::Dark);
        assert_eq!(
            rebuilt.theme.resolve(ColorRole::Primary),
            rebuilt.tokens.dark.primary
        );
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let handle = Arc::new(ThemeHandle::new(ThemeOptions::default()).unwrap());
        let key_color = {
            let handle = handle.clone();
            std::thread::spawn(move || handle.set_key_color("#B3261E").map(|_| ()))
        };
        let variant = {
            let handle = handle.clone();
            std::thread::spawn(move || handle.set_variant(Variant::Vibrant).map(|_| ()))
        };
        key_color.join().unwrap().unwrap();
        variant.join().unwrap().unwrap();

        let options = handle.options();
        assert_eq!(options.key_color, "#B3261E");
        assert_eq!(options.variant, Variant::Vibrant);
        let expected = crate::build_theme_with(&options).unwrap();
        assert_eq!(handle.snapshot().tokens, expected.tokens);
    }

    #[test]
    fn test_concurrent_readers_see_whole_themes() {
        let handle = Arc::new(ThemeHandle::new(ThemeOptions::default()).unwrap());
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = handle.clone();
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let theme = handle.snapshot();
                        let primary = theme.tokens.light.primary;
                        assert_eq!(theme.config.themes["light"]["primary"], primary);
                    }
                })
            })
            .collect();
        for seed in ["#B3261E", "#386A20", "#6750A4"] {
            handle.set_key_color(seed).unwrap();
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
