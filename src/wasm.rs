//! WebAssembly exports for the color-to-alpha transform.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Buffers
//! cross the boundary as flat arrays with explicit width, height, and
//! channel count.
//!
//! Unrecognized shape/curve selector strings and malformed hex colors
//! are hard errors and surface as JavaScript exceptions.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::color;
use crate::transform::color_to_alpha::{color_to_alpha_f32, color_to_alpha_u8};
use crate::transform::curve::CurveMode;
use crate::transform::distance::ShapeMode;

// ============================================================================
// Color to Alpha - u8 (8-bit)
// ============================================================================

/// Apply the color-to-alpha transform to a u8 image.
///
/// # Arguments
/// * `data` - Flat array of pixel bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 1, 3, or 4; existing alpha is dropped
/// * `key_r`, `key_g`, `key_b` - RGB key color being removed
/// * `transparency_threshold` - lower distance threshold (>= 0)
/// * `opacity_threshold` - upper distance threshold (>= 0)
/// * `shape` - "cube" or "sphere"
/// * `interpolation` - "linear", "power", "root", "smooth" or "inverse-sin"
///
/// # Returns
/// Flat array of RGBA bytes (length = width * height * 4)
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn color_to_alpha_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    key_r: u8,
    key_g: u8,
    key_b: u8,
    transparency_threshold: f32,
    opacity_threshold: f32,
    shape: &str,
    interpolation: &str,
) -> Result<Vec<u8>, JsError> {
    let shape = shape
        .parse::<ShapeMode>()
        .map_err(|e| JsError::new(&e.to_string()))?;
    let curve = interpolation
        .parse::<CurveMode>()
        .map_err(|e| JsError::new(&e.to_string()))?;

    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())
        .expect("Invalid dimensions");

    let result = color_to_alpha_u8(
        input.view(),
        [key_r, key_g, key_b],
        transparency_threshold,
        opacity_threshold,
        shape,
        curve,
    );
    Ok(result.into_raw_vec_and_offset().0)
}

// ============================================================================
// Color to Alpha - f32 (float)
// ============================================================================

/// Apply the color-to-alpha transform to an f32 image.
///
/// Input/output values are 0.0-1.0; thresholds are on the same scale
/// (cube distances reach 1.0, sphere ~1.732).
///
/// # Arguments
/// * `data` - Flat array of pixel floats (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 1, 3, or 4; existing alpha is dropped
///
/// # Returns
/// Flat array of RGBA floats (length = width * height * 4)
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn color_to_alpha_f32_wasm(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    key_r: f32,
    key_g: f32,
    key_b: f32,
    transparency_threshold: f32,
    opacity_threshold: f32,
    shape: &str,
    interpolation: &str,
) -> Result<Vec<f32>, JsError> {
    let shape = shape
        .parse::<ShapeMode>()
        .map_err(|e| JsError::new(&e.to_string()))?;
    let curve = interpolation
        .parse::<CurveMode>()
        .map_err(|e| JsError::new(&e.to_string()))?;

    let input = Array3::from_shape_vec((height, width, channels), data.to_vec())
        .expect("Invalid dimensions");

    let result = color_to_alpha_f32(
        input.view(),
        [key_r, key_g, key_b],
        transparency_threshold,
        opacity_threshold,
        shape,
        curve,
    );
    Ok(result.into_raw_vec_and_offset().0)
}

// ============================================================================
// Hex Adapter
// ============================================================================

/// Parse a `#RRGGBB` hex string (case-insensitive) into `[r, g, b]`.
#[wasm_bindgen]
pub fn hex_to_rgb_wasm(hex: &str) -> Result<Vec<u8>, JsError> {
    let rgb = color::hex_to_rgb(hex).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(rgb.to_vec())
}

/// Format an RGB triple as an uppercase `#RRGGBB` string.
#[wasm_bindgen]
pub fn rgb_to_hex_wasm(r: u8, g: u8, b: u8) -> String {
    color::rgb_to_hex([r, g, b])
}
