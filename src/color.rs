//! Hex-string adapter for RGB key colors.
//!
//! UI layers exchange key colors as `#RRGGBB` strings while the
//! transform works on `[u8; 3]` triples. Parsing is case-insensitive
//! and tolerates a missing `#`; formatting is always uppercase with a
//! leading `#` and never carries an alpha component.

use crate::error::{Error, Result};

/// Parse a `#RRGGBB` hex string into an RGB triple.
///
/// # Arguments
/// * `hex` - Exactly 6 hex digits, optionally prefixed with `#`.
///   Case-insensitive.
///
/// # Returns
/// `[r, g, b]` on success, [`Error::InvalidHexColor`] otherwise.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(Error::InvalidHexColor(hex.to_string()));
    }

    let channel = |lo: usize| {
        u8::from_str_radix(&digits[lo..lo + 2], 16)
            .map_err(|_| Error::InvalidHexColor(hex.to_string()))
    };

    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Format an RGB triple as an uppercase `#RRGGBB` string.
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
