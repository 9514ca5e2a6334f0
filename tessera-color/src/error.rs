//! Errors raised while parsing key colors and deriving schemes.

use thiserror::Error;

/// Failure while turning a key color into a color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a `#RRGGBB` string.
    #[error("invalid hex color {input:?}: expected `#RRGGBB`")]
    InvalidHex {
        /// The string that failed to parse.
        input: String,
    },
    /// The tone table has no entry for a scheme slot.
    #[error("no tone table entry for color role `{role}`")]
    MissingTone {
        /// Token name of the slot without an entry.
        role: &'static str,
    },
}
