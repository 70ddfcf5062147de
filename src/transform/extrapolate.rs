//! Transition-band color extrapolation.
//!
//! A pixel that keeps only part of its alpha would darken toward the
//! key color when composited. To compensate, its residual color is
//! pushed away from the key in proportion to how close it originally
//! was to full opacity, so that `rgb * alpha + key * (1 - alpha)`
//! approximately reconstructs the source pixel over the key color.

use ndarray::{Array2, Array3, ArrayView3};

use super::alpha::finite_or_zero;
use crate::maybe_rayon::*;

/// Extrapolate one channel away from the key color.
///
/// `ratio` is `distance / opacity_threshold`. Division by a zero ratio
/// yields a non-finite value, replaced by 0 per the crate-wide policy.
#[inline]
fn extrapolate_channel(value: f32, key: f32, ratio: f32) -> f32 {
    finite_or_zero((value - key) / ratio + key)
}

/// Apply extrapolation to the transition band of an RGB buffer - u8
/// version.
///
/// # Arguments
/// * `rgb` - RGB image (height, width, 3)
/// * `distances` - per-pixel distance to the key color
/// * `key` - RGB key color
/// * `transparency_threshold` / `opacity_threshold` - band limits;
///   pixels outside the open interval are copied through unchanged
///
/// # Returns
/// RGB image (height, width, 3) with transition-band pixels
/// extrapolated, rounded, and clamped to 0-255
pub fn extrapolate_colors_u8(
    rgb: ArrayView3<u8>,
    distances: &Array2<f32>,
    key: [u8; 3],
    transparency_threshold: f32,
    opacity_threshold: f32,
) -> Array3<u8> {
    let (height, width, _) = rgb.dim();
    if height == 0 || width == 0 {
        return Array3::zeros((height, width, 3));
    }

    let mut flat = vec![0u8; height * width * 3];
    flat.par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let d = distances[[y, x]];
                let in_band = d > transparency_threshold && d < opacity_threshold;
                let ratio = d / opacity_threshold;

                for c in 0..3 {
                    let v = rgb[[y, x, c]];
                    row[x * 3 + c] = if in_band {
                        extrapolate_channel(v as f32, key[c] as f32, ratio)
                            .round()
                            .clamp(0.0, 255.0) as u8
                    } else {
                        v
                    };
                }
            }
        });

    Array3::from_shape_vec((height, width, 3), flat)
        .expect("Shape mismatch in extrapolate_colors_u8")
}

/// Apply extrapolation to the transition band of an RGB buffer - f32
/// version.
///
/// Same contract as [`extrapolate_colors_u8`] with 0.0-1.0 channel
/// values and no rounding step.
pub fn extrapolate_colors_f32(
    rgb: ArrayView3<f32>,
    distances: &Array2<f32>,
    key: [f32; 3],
    transparency_threshold: f32,
    opacity_threshold: f32,
) -> Array3<f32> {
    let (height, width, _) = rgb.dim();
    if height == 0 || width == 0 {
        return Array3::zeros((height, width, 3));
    }

    let mut flat = vec![0.0f32; height * width * 3];
    flat.par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let d = distances[[y, x]];
                let in_band = d > transparency_threshold && d < opacity_threshold;
                let ratio = d / opacity_threshold;

                for c in 0..3 {
                    let v = rgb[[y, x, c]];
                    row[x * 3 + c] = if in_band {
                        extrapolate_channel(v, key[c], ratio).clamp(0.0, 1.0)
                    } else {
                        v
                    };
                }
            }
        });

    Array3::from_shape_vec((height, width, 3), flat)
        .expect("Shape mismatch in extrapolate_colors_f32")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array3};

    #[test]
    fn test_band_pixel_is_pushed_away_from_key() {
        // Gray 128 against black, distance 128 of 255: the residual
        // color extrapolates to ~255 per channel.
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img.fill(128);
        let distances = arr2(&[[128.0]]);

        let out = extrapolate_colors_u8(img.view(), &distances, [0, 0, 0], 0.0, 255.0);

        for c in 0..3 {
            assert_eq!(out[[0, 0, c]], 255);
        }
    }

    #[test]
    fn test_outside_band_unchanged() {
        let mut img = Array3::<u8>::zeros((1, 2, 3));
        img[[0, 0, 0]] = 10;
        img[[0, 0, 1]] = 20;
        img[[0, 0, 2]] = 30;
        img[[0, 1, 0]] = 200;
        img[[0, 1, 1]] = 210;
        img[[0, 1, 2]] = 220;

        // First pixel below the transparency threshold, second above
        // the opacity threshold: both must come back byte-identical.
        let distances = arr2(&[[5.0, 180.0]]);
        let out = extrapolate_colors_u8(img.view(), &distances, [0, 0, 0], 10.0, 150.0);

        assert_eq!(out[[0, 0, 0]], 10);
        assert_eq!(out[[0, 0, 1]], 20);
        assert_eq!(out[[0, 0, 2]], 30);
        assert_eq!(out[[0, 1, 0]], 200);
        assert_eq!(out[[0, 1, 1]], 210);
        assert_eq!(out[[0, 1, 2]], 220);
    }

    #[test]
    fn test_boundary_distances_not_extrapolated() {
        // The band is the open interval: exactly-at-threshold pixels
        // keep their color.
        let mut img = Array3::<u8>::zeros((1, 2, 3));
        img.fill(99);
        let distances = arr2(&[[10.0, 150.0]]);

        let out = extrapolate_colors_u8(img.view(), &distances, [0, 0, 0], 10.0, 150.0);

        assert_eq!(out[[0, 0, 0]], 99);
        assert_eq!(out[[0, 1, 0]], 99);
    }

    #[test]
    fn test_extrapolation_clamps_channels() {
        // Near the transparency end the ratio is small and the push is
        // large; channels must clamp instead of wrapping.
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 240;
        img[[0, 0, 1]] = 10;
        img[[0, 0, 2]] = 128;
        let distances = arr2(&[[30.0]]);

        let out = extrapolate_colors_u8(img.view(), &distances, [128, 128, 128], 10.0, 250.0);

        // ratio = 30/250 = 0.12; (240-128)/0.12 overflows upward,
        // (10-128)/0.12 downward.
        assert_eq!(out[[0, 0, 0]], 255);
        assert_eq!(out[[0, 0, 1]], 0);
        assert_eq!(out[[0, 0, 2]], 128);
    }

    #[test]
    fn test_non_finite_ratio_falls_back_to_zero() {
        // Degenerate configuration: distance 0 inside the band is only
        // reachable with a negative transparency threshold, and the
        // 0/0 ratio must resolve to 0 channels, not NaN.
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img.fill(77);
        let distances = arr2(&[[0.0]]);

        let out = extrapolate_colors_u8(img.view(), &distances, [0, 0, 0], -1.0, 100.0);

        for c in 0..3 {
            assert_eq!(out[[0, 0, c]], 0);
        }
    }

    #[test]
    fn test_f32_variant_clamps_to_unit() {
        let mut img = Array3::<f32>::zeros((1, 1, 3));
        img.fill(0.5);
        let distances = arr2(&[[0.5]]);

        let out = extrapolate_colors_f32(img.view(), &distances, [0.0, 0.0, 0.0], 0.0, 1.0);

        for c in 0..3 {
            assert_eq!(out[[0, 0, c]], 1.0);
        }
    }
}
