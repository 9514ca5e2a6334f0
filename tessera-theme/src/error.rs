//! Theme construction errors.

use tessera_color::ColorError;
use thiserror::Error;

/// Failure while building tokens or a theme.
///
/// Any failure aborts the whole build; callers never receive a partially
/// colored table.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The key color could not be turned into a scheme.
    #[error(transparent)]
    Color(#[from] ColorError),
    /// The styling configuration could not be serialized.
    #[error("failed to serialize theme config: {0}")]
    Serialize(#[from] serde_json::Error),
}
