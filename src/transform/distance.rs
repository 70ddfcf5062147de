//! Key-color distance metrics.
//!
//! Every later stage of the transform runs on a per-pixel scalar
//! distance between the pixel's color and the key color. Two geometric
//! models are supported: the axis-aligned maximum channel difference
//! ("cube") and the Euclidean norm of the channel differences
//! ("sphere").

use std::str::FromStr;

use ndarray::{Array2, ArrayView3};

use crate::error::Error;
use crate::maybe_rayon::*;

/// Geometric model for measuring distance in RGB space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapeMode {
    /// Maximum absolute per-channel difference. Range 0-255 for u8 data.
    #[default]
    Cube,
    /// Euclidean norm of the channel differences. Range 0-~441.67 for
    /// u8 data.
    Sphere,
}

impl ShapeMode {
    /// Largest reachable distance for 0-255 channel data.
    ///
    /// Callers use this to size threshold sliders; the transform itself
    /// imposes no clamp.
    pub fn max_distance_u8(self) -> f32 {
        match self {
            ShapeMode::Cube => 255.0,
            ShapeMode::Sphere => 255.0 * 3.0f32.sqrt(),
        }
    }

    /// Largest reachable distance for 0.0-1.0 channel data.
    pub fn max_distance_f32(self) -> f32 {
        match self {
            ShapeMode::Cube => 1.0,
            ShapeMode::Sphere => 3.0f32.sqrt(),
        }
    }

    /// Canonical selector name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeMode::Cube => "cube",
            ShapeMode::Sphere => "sphere",
        }
    }
}

impl FromStr for ShapeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "cube" => Ok(ShapeMode::Cube),
            "sphere" => Ok(ShapeMode::Sphere),
            _ => Err(Error::UnsupportedShape(s.to_string())),
        }
    }
}

/// Distance between a single pixel and the key color (0-255 scale).
#[inline]
pub fn pixel_distance_u8(pixel: [u8; 3], key: [u8; 3], shape: ShapeMode) -> f32 {
    let dr = pixel[0] as f32 - key[0] as f32;
    let dg = pixel[1] as f32 - key[1] as f32;
    let db = pixel[2] as f32 - key[2] as f32;
    match shape {
        ShapeMode::Cube => dr.abs().max(dg.abs()).max(db.abs()),
        ShapeMode::Sphere => (dr * dr + dg * dg + db * db).sqrt(),
    }
}

/// Distance between a single pixel and the key color (0.0-1.0 scale).
#[inline]
pub fn pixel_distance_f32(pixel: [f32; 3], key: [f32; 3], shape: ShapeMode) -> f32 {
    let dr = pixel[0] - key[0];
    let dg = pixel[1] - key[1];
    let db = pixel[2] - key[2];
    match shape {
        ShapeMode::Cube => dr.abs().max(dg.abs()).max(db.abs()),
        ShapeMode::Sphere => (dr * dr + dg * dg + db * db).sqrt(),
    }
}

/// Per-pixel distance to the key color over a whole buffer - u8 version.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels).
///   A single channel is treated as gray (equal RGB); a 4th channel is
///   ignored.
/// * `key` - RGB key color
/// * `shape` - Distance model
///
/// # Returns
/// (height, width) array of distances as f32
pub fn rgb_distance_u8(input: ArrayView3<u8>, key: [u8; 3], shape: ShapeMode) -> Array2<f32> {
    let (height, width, channels) = input.dim();
    if height == 0 || width == 0 {
        return Array2::zeros((height, width));
    }

    let mut flat = vec![0.0f32; height * width];
    flat.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let pixel = if channels == 1 {
                    let v = input[[y, x, 0]];
                    [v, v, v]
                } else {
                    [input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]]
                };
                *out = pixel_distance_u8(pixel, key, shape);
            }
        });

    Array2::from_shape_vec((height, width), flat).expect("Shape mismatch in rgb_distance_u8")
}

/// Per-pixel distance to the key color over a whole buffer - f32 version.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels),
///   values 0.0-1.0. A single channel is treated as gray; a 4th channel
///   is ignored.
/// * `key` - RGB key color, values 0.0-1.0
/// * `shape` - Distance model
///
/// # Returns
/// (height, width) array of distances as f32
pub fn rgb_distance_f32(input: ArrayView3<f32>, key: [f32; 3], shape: ShapeMode) -> Array2<f32> {
    let (height, width, channels) = input.dim();
    if height == 0 || width == 0 {
        return Array2::zeros((height, width));
    }

    let mut flat = vec![0.0f32; height * width];
    flat.par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let pixel = if channels == 1 {
                    let v = input[[y, x, 0]];
                    [v, v, v]
                } else {
                    [input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]]
                };
                *out = pixel_distance_f32(pixel, key, shape);
            }
        });

    Array2::from_shape_vec((height, width), flat).expect("Shape mismatch in rgb_distance_f32")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_sphere_distance_3_4_5() {
        // A 3-4-5 triangle in RGB space must come out exact.
        let d = pixel_distance_u8([3, 4, 0], [0, 0, 0], ShapeMode::Sphere);
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_cube_distance_max_channel() {
        let d = pixel_distance_u8([15, 5, 40], [10, 20, 30], ShapeMode::Cube);
        assert_eq!(d, 15.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = [200, 30, 90];
        let b = [10, 60, 255];
        for shape in [ShapeMode::Cube, ShapeMode::Sphere] {
            assert_eq!(
                pixel_distance_u8(a, b, shape),
                pixel_distance_u8(b, a, shape)
            );
        }
    }

    #[test]
    fn test_buffer_distance_ignores_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 3;
        img[[0, 0, 1]] = 4;
        img[[0, 0, 3]] = 77; // must not contribute

        let d = rgb_distance_u8(img.view(), [0, 0, 0], ShapeMode::Sphere);
        assert_eq!(d[[0, 0]], 5.0);
    }

    #[test]
    fn test_buffer_distance_gray_broadcast() {
        let mut img = Array3::<u8>::zeros((1, 1, 1));
        img[[0, 0, 0]] = 10;

        // Gray 10 against key (10, 10, 10) is distance zero.
        let d = rgb_distance_u8(img.view(), [10, 10, 10], ShapeMode::Cube);
        assert_eq!(d[[0, 0]], 0.0);
    }

    #[test]
    fn test_f32_distance_matches_scale() {
        let d = pixel_distance_f32([0.5, 0.5, 0.5], [0.0, 0.0, 0.0], ShapeMode::Cube);
        assert!((d - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_max_distance_bounds() {
        assert_eq!(ShapeMode::Cube.max_distance_u8(), 255.0);
        assert!((ShapeMode::Sphere.max_distance_u8() - 441.67294).abs() < 1e-2);
    }

    #[test]
    fn test_shape_mode_parsing() {
        assert_eq!("cube".parse::<ShapeMode>().unwrap(), ShapeMode::Cube);
        assert_eq!("sphere".parse::<ShapeMode>().unwrap(), ShapeMode::Sphere);
        assert!("pyramid".parse::<ShapeMode>().is_err());
    }

    #[test]
    fn test_default_is_cube() {
        assert_eq!(ShapeMode::default(), ShapeMode::Cube);
    }
}
