//! Distance-to-alpha mapping.
//!
//! Normalizes each distance against the two thresholds, reshapes it
//! with the selected curve, and then applies the authoritative
//! transparency/opacity masks on top.

use ndarray::Array2;

use super::curve::CurveMode;

/// Replace a non-finite intermediate with zero.
///
/// Degenerate threshold configurations (zero span, zero opacity
/// threshold) divide by zero. The contract is to degrade to a
/// transparent contribution locally instead of propagating NaN or
/// infinity.
#[inline]
pub(crate) fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// Map a distance plane to a curve-shaped alpha plane with values in
/// [0, 1].
///
/// Per element: `(distance − transparency) / span` with non-finite
/// results replaced by 0, clamped to [0, 1], then reshaped by `curve`.
/// The masks are applied last and take priority over the curve value:
/// `distance ≤ transparency_threshold` forces 0 and
/// `distance ≥ opacity_threshold` forces 1, the opaque mask winning
/// when both thresholds coincide.
///
/// # Arguments
/// * `distances` - (height, width) distance plane
/// * `transparency_threshold` - distances at or below become transparent
/// * `opacity_threshold` - distances at or above stay opaque
/// * `curve` - transition reshaping
///
/// # Returns
/// (height, width) alpha plane with values in [0, 1]
pub fn alpha_map(
    distances: &Array2<f32>,
    transparency_threshold: f32,
    opacity_threshold: f32,
    curve: CurveMode,
) -> Array2<f32> {
    let span = opacity_threshold - transparency_threshold;

    distances.mapv(|d| {
        let normalized = finite_or_zero((d - transparency_threshold) / span);
        let mut a = curve.apply(normalized.clamp(0.0, 1.0));
        if d <= transparency_threshold {
            a = 0.0;
        }
        if d >= opacity_threshold {
            a = 1.0;
        }
        a
    })
}
