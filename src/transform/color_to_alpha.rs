//! The color-to-alpha transform.
//!
//! Reconstructs a plausible alpha channel for a flat image by measuring
//! how much of each pixel's color is attributable to a chosen key
//! color: pixels at or inside the transparency threshold become fully
//! transparent, pixels at or beyond the opacity threshold stay opaque,
//! and the band in between fades proportionally while its residual
//! color is extrapolated away from the key.

use ndarray::{Array3, ArrayView3};

use super::alpha::alpha_map;
use super::compose::{compose_rgba_f32, compose_rgba_u8};
use super::curve::CurveMode;
use super::distance::{rgb_distance_f32, rgb_distance_u8, ShapeMode};
use super::extrapolate::{extrapolate_colors_f32, extrapolate_colors_u8};

/// Materialize a (height, width, 3) RGB buffer from 1-, 3-, or
/// 4-channel input. Gray is broadcast to all three channels; a 4th
/// channel is dropped (alpha is recomputed from scratch).
fn to_rgb_u8(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut rgb = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            if channels == 1 {
                let v = input[[y, x, 0]];
                for c in 0..3 {
                    rgb[[y, x, c]] = v;
                }
            } else {
                for c in 0..3 {
                    rgb[[y, x, c]] = input[[y, x, c]];
                }
            }
        }
    }
    rgb
}

fn to_rgb_f32(input: ArrayView3<f32>) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    let mut rgb = Array3::<f32>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            if channels == 1 {
                let v = input[[y, x, 0]];
                for c in 0..3 {
                    rgb[[y, x, c]] = v;
                }
            } else {
                for c in 0..3 {
                    rgb[[y, x, c]] = input[[y, x, c]];
                }
            }
        }
    }
    rgb
}

/// Apply the color-to-alpha transform - u8 version.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels).
///   Existing alpha, if any, is ignored; the input is treated as fully
///   opaque.
/// * `key` - RGB color being removed
/// * `transparency_threshold` - distances at or below become fully
///   transparent
/// * `opacity_threshold` - distances at or above stay fully opaque.
///   Equal or inverted thresholds are accepted and degrade to a hard
///   step, never to an error.
/// * `shape` - distance model (slider bound: 255 for cube, ~442 for
///   sphere)
/// * `curve` - transition reshaping
///
/// # Returns
/// New RGBA image (height, width, 4). Pixels outside the transition
/// band keep their input RGB byte-for-byte.
pub fn color_to_alpha_u8(
    input: ArrayView3<u8>,
    key: [u8; 3],
    transparency_threshold: f32,
    opacity_threshold: f32,
    shape: ShapeMode,
    curve: CurveMode,
) -> Array3<u8> {
    let rgb = to_rgb_u8(input);
    let distances = rgb_distance_u8(rgb.view(), key, shape);
    let alpha = alpha_map(&distances, transparency_threshold, opacity_threshold, curve);
    let rgb = extrapolate_colors_u8(
        rgb.view(),
        &distances,
        key,
        transparency_threshold,
        opacity_threshold,
    );
    compose_rgba_u8(rgb.view(), &alpha)
}

/// Apply the color-to-alpha transform - f32 version.
///
/// Same contract as [`color_to_alpha_u8`] with 0.0-1.0 channel values;
/// thresholds are on the same scale (cube distances reach 1.0, sphere
/// √3).
pub fn color_to_alpha_f32(
    input: ArrayView3<f32>,
    key: [f32; 3],
    transparency_threshold: f32,
    opacity_threshold: f32,
    shape: ShapeMode,
    curve: CurveMode,
) -> Array3<f32> {
    let rgb = to_rgb_f32(input);
    let distances = rgb_distance_f32(rgb.view(), key, shape);
    let alpha = alpha_map(&distances, transparency_threshold, opacity_threshold, curve);
    let rgb = extrapolate_colors_f32(
        rgb.view(),
        &distances,
        key,
        transparency_threshold,
        opacity_threshold,
    );
    compose_rgba_f32(rgb.view(), &alpha)
}
