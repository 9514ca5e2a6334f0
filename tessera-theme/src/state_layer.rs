//! State-layer opacities and overlay helpers.
//!
//! ## Usage
//!
//! Interactive surfaces draw their content color over the container at a
//! fixed opacity per interaction state.

use tessera_color::{Argb, Color};
use tracing::warn;

/// Standard Material 3 alpha values used for state layers and disabled content.
pub struct MaterialAlpha;

impl MaterialAlpha {
    /// Alpha for hover state layers.
    pub const HOVER: f32 = 0.08;
    /// Alpha for pressed state layers.
    pub const PRESSED: f32 = 0.1;
    /// Alpha for focused state layers.
    pub const FOCUSED: f32 = 0.1;
    /// Alpha for dragged state layers.
    pub const DRAGGED: f32 = 0.16;
    /// Alpha for disabled containers (e.g., filled controls).
    pub const DISABLED_CONTAINER: f32 = 0.12;
    /// Alpha for disabled content (text/icons) placed on disabled containers.
    pub const DISABLED_CONTENT: f32 = 0.38;
}

/// Interaction state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateLayer {
    /// Pointer over the component.
    Hover,
    /// Keyboard focus.
    Focus,
    /// Pointer or touch down.
    Press,
    /// Being dragged.
    Drag,
}

impl StateLayer {
    /// Overlay opacity for the state.
    pub const fn alpha(self) -> f32 {
        match self {
            StateLayer::Hover => MaterialAlpha::HOVER,
            StateLayer::Focus => MaterialAlpha::FOCUSED,
            StateLayer::Press => MaterialAlpha::PRESSED,
            StateLayer::Drag => MaterialAlpha::DRAGGED,
        }
    }
}

/// Draws `content` over `container` at the opacity of `state`.
pub fn state_layer(container: Argb, content: Argb, state: StateLayer) -> Argb {
    Color::from(container)
        .blend_over(Color::from(content), state.alpha())
        .to_argb()
}

/// Formats a hex color as a CSS `rgba(r, g, b, a)` string.
///
/// Missing or malformed input renders as black rather than failing.
pub fn hex_to_rgba(hex: Option<&str>, alpha: f32) -> String {
    let argb = match hex.map(Argb::from_hex) {
        Some(Ok(argb)) => argb,
        Some(Err(err)) => {
            warn!("{err}, using black");
            Argb::BLACK
        }
        None => Argb::BLACK,
    };
    format!(
        "rgba({}, {}, {}, {})",
        argb.red(),
        argb.green(),
        argb.blue(),
        alpha.clamp(0.0, 1.0)
    )
}
