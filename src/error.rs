//! Error types for the crate's string boundaries.
//!
//! The transform itself is total over its numeric domain: degenerate
//! thresholds degrade gracefully (non-finite intermediates are replaced
//! by zero) and never produce an error. Only unrecognized selector
//! strings and malformed hex colors fail, and they fail fast.

use thiserror::Error;

/// Errors surfaced when parsing caller-supplied strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported distance shape {0:?} (expected \"cube\" or \"sphere\")")]
    UnsupportedShape(String),

    #[error("unsupported interpolation curve {0:?} (expected \"linear\", \"power\", \"root\", \"smooth\" or \"inverse-sin\")")]
    UnsupportedCurve(String),

    #[error("invalid hex color {0:?} (expected exactly 6 hex digits, e.g. \"#1A2B3C\")")]
    InvalidHexColor(String),
}

/// Result type alias for color-to-alpha operations.
pub type Result<T> = std::result::Result<T, Error>;
