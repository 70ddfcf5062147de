//! Color-to-Alpha Rust Extensions
//!
//! High-performance color-to-alpha transform implemented in Rust with
//! Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! Given an image and a key color, the transform reconstructs an alpha
//! channel: pixels close to the key color become transparent, pixels
//! far from it stay opaque, and the band in between fades while its
//! residual color is extrapolated away from the key so that compositing
//! approximately reproduces the original appearance.
//!
//! ## Image Format
//! Entry points support multiple channel configurations:
//! - **Grayscale**: (height, width, 1) - broadcast to RGB
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - existing alpha is dropped and
//!   recomputed from scratch
//!
//! Both bit depths are supported:
//! - `u8`: 8-bit per channel (0-255)
//! - `f32`: Float per channel (0.0-1.0)
//!
//! Output always has exactly 4 channels and the input's dimensions.
//!
//! ## Degenerate Inputs
//! Equal or inverted thresholds are user-reachable slider states, not
//! errors: non-finite intermediates are replaced by zero and the
//! transparency/opacity masks stay authoritative. Only unrecognized
//! shape/curve selector strings fail, at the boundary, with a hard
//! error.

pub mod color;
pub mod error;
pub(crate) mod maybe_rayon;
pub mod transform;

#[cfg(feature = "wasm")]
pub mod wasm;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::color;
    use crate::transform::color_to_alpha::{color_to_alpha_f32, color_to_alpha_u8};
    use crate::transform::curve::CurveMode;
    use crate::transform::distance::ShapeMode;

    fn parse_selectors(shape: &str, interpolation: &str) -> PyResult<(ShapeMode, CurveMode)> {
        let shape = shape
            .parse::<ShapeMode>()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let curve = interpolation
            .parse::<CurveMode>()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((shape, curve))
    }

    // ========================================================================
    // Color to Alpha
    // ========================================================================

    /// Apply the color-to-alpha transform to a u8 image.
    ///
    /// Pixels within `transparency_threshold` of `color` become
    /// transparent, pixels beyond `opacity_threshold` remain opaque,
    /// and the band in between transitions along `interpolation`.
    ///
    /// # Arguments
    /// * `image` - Image with 1, 3, or 4 channels (height, width, channels)
    /// * `color` - RGB key color being removed
    /// * `transparency_threshold` - lower distance threshold (>= 0)
    /// * `opacity_threshold` - upper distance threshold (>= 0)
    /// * `shape` - "cube" (max channel difference) or "sphere" (Euclidean)
    /// * `interpolation` - "linear", "power", "root", "smooth" or
    ///   "inverse-sin"
    ///
    /// # Returns
    /// RGBA image (height, width, 4)
    #[pyfunction]
    #[pyo3(signature = (image, color, transparency_threshold, opacity_threshold, shape="cube", interpolation="linear"))]
    pub fn color_to_alpha<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        color: (u8, u8, u8),
        transparency_threshold: f32,
        opacity_threshold: f32,
        shape: &str,
        interpolation: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let (shape, curve) = parse_selectors(shape, interpolation)?;
        let result = color_to_alpha_u8(
            image.as_array(),
            [color.0, color.1, color.2],
            transparency_threshold,
            opacity_threshold,
            shape,
            curve,
        );
        Ok(result.into_pyarray(py))
    }

    /// Apply the color-to-alpha transform to an f32 image.
    ///
    /// Input/output values are 0.0-1.0; thresholds are on the same
    /// scale (cube distances reach 1.0, sphere ~1.732).
    #[pyfunction]
    #[pyo3(signature = (image, color, transparency_threshold, opacity_threshold, shape="cube", interpolation="linear"))]
    pub fn color_to_alpha_float<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        color: (f32, f32, f32),
        transparency_threshold: f32,
        opacity_threshold: f32,
        shape: &str,
        interpolation: &str,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let (shape, curve) = parse_selectors(shape, interpolation)?;
        let result = color_to_alpha_f32(
            image.as_array(),
            [color.0, color.1, color.2],
            transparency_threshold,
            opacity_threshold,
            shape,
            curve,
        );
        Ok(result.into_pyarray(py))
    }

    // ========================================================================
    // Hex Adapter
    // ========================================================================

    /// Parse a `#RRGGBB` hex string (case-insensitive) into an RGB tuple.
    #[pyfunction]
    pub fn hex_to_rgb(hex: &str) -> PyResult<(u8, u8, u8)> {
        let [r, g, b] =
            color::hex_to_rgb(hex).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((r, g, b))
    }

    /// Format an RGB tuple as an uppercase `#RRGGBB` string.
    #[pyfunction]
    pub fn rgb_to_hex(color_tuple: (u8, u8, u8)) -> String {
        color::rgb_to_hex([color_tuple.0, color_tuple.1, color_tuple.2])
    }

    /// Color-to-alpha Rust extension module
    #[pymodule]
    pub fn color_to_alpha_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(color_to_alpha, m)?)?;
        m.add_function(wrap_pyfunction!(color_to_alpha_float, m)?)?;
        m.add_function(wrap_pyfunction!(hex_to_rgb, m)?)?;
        m.add_function(wrap_pyfunction!(rgb_to_hex, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::color_to_alpha_rust;
