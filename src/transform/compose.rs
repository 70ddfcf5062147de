//! Final RGBA assembly.
//!
//! Pure stacking of the (possibly extrapolated) RGB channels with the
//! computed alpha plane. The only numeric policy here is the alpha
//! scaling to the output range; the clamp is a safety net, the mapper
//! already guarantees [0, 1].

use ndarray::{Array2, Array3, ArrayView3};

/// Stack an RGB buffer and an alpha plane into an RGBA buffer - u8
/// version.
///
/// # Arguments
/// * `rgb` - RGB image (height, width, 3)
/// * `alpha` - (height, width) alpha plane with values in [0, 1]
///
/// # Returns
/// RGBA image (height, width, 4) with alpha scaled to 0-255 and rounded
pub fn compose_rgba_u8(rgb: ArrayView3<u8>, alpha: &Array2<f32>) -> Array3<u8> {
    let (height, width, _) = rgb.dim();
    let mut output = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                output[[y, x, c]] = rgb[[y, x, c]];
            }
            output[[y, x, 3]] = (alpha[[y, x]] * 255.0).round().clamp(0.0, 255.0) as u8;
        }
    }
    output
}

/// Stack an RGB buffer and an alpha plane into an RGBA buffer - f32
/// version.
///
/// Alpha stays in 0.0-1.0, clamped as a safety net.
pub fn compose_rgba_f32(rgb: ArrayView3<f32>, alpha: &Array2<f32>) -> Array3<f32> {
    let (height, width, _) = rgb.dim();
    let mut output = Array3::<f32>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                output[[y, x, c]] = rgb[[y, x, c]];
            }
            output[[y, x, 3]] = alpha[[y, x]].clamp(0.0, 1.0);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array3};

    #[test]
    fn test_compose_scales_and_rounds_alpha() {
        let mut rgb = Array3::<u8>::zeros((1, 3, 3));
        rgb.fill(42);
        let alpha = arr2(&[[0.0, 0.5019608, 1.0]]);

        let out = compose_rgba_u8(rgb.view(), &alpha);

        assert_eq!(out.dim(), (1, 3, 4));
        assert_eq!(out[[0, 0, 3]], 0);
        assert_eq!(out[[0, 1, 3]], 128);
        assert_eq!(out[[0, 2, 3]], 255);
        assert_eq!(out[[0, 1, 0]], 42);
    }

    #[test]
    fn test_compose_clamps_out_of_range_alpha() {
        let rgb = Array3::<u8>::zeros((1, 2, 3));
        let alpha = arr2(&[[-0.25, 1.5]]);

        let out = compose_rgba_u8(rgb.view(), &alpha);

        assert_eq!(out[[0, 0, 3]], 0);
        assert_eq!(out[[0, 1, 3]], 255);
    }

    #[test]
    fn test_compose_f32_passes_alpha_through() {
        let mut rgb = Array3::<f32>::zeros((1, 1, 3));
        rgb.fill(0.25);
        let alpha = arr2(&[[0.75]]);

        let out = compose_rgba_f32(rgb.view(), &alpha);

        assert_eq!(out.dim(), (1, 1, 4));
        assert_eq!(out[[0, 0, 0]], 0.25);
        assert_eq!(out[[0, 0, 3]], 0.75);
    }
}
