//! The color-to-alpha transform pipeline.
//!
//! ## Supported Formats
//!
//! Entry points accept images with 1, 3, or 4 channels:
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Grayscale8 | (H, W, 1) | u8 | Broadcast to RGB, 0-255 |
//! | Grayscale float | (H, W, 1) | f32 | Broadcast to RGB, 0.0-1.0 |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | RGB float | (H, W, 3) | f32 | Red, green, blue, 0.0-1.0 |
//! | RGBA8 | (H, W, 4) | u8 | Existing alpha is dropped |
//! | RGBA float | (H, W, 4) | f32 | Existing alpha is dropped |
//!
//! Output is always a freshly allocated RGBA buffer of the input's
//! height and width.
//!
//! ## Pipeline
//!
//! ```text
//! pixels + key + thresholds ── distance ── alpha map (curve) ──┐
//!                     │                                        │
//!                     └─────── extrapolate (band only) ──── compose ── RGBA
//! ```
//!
//! - **distance**: per-pixel scalar distance to the key color under the
//!   selected [`ShapeMode`]
//! - **alpha**: threshold-normalized, [`CurveMode`]-shaped alpha with
//!   authoritative transparency/opacity masks
//! - **extrapolate**: pushes transition-band colors away from the key
//!   so compositing approximately reconstructs the source
//! - **compose**: stacks RGB and alpha into the output buffer
//!
//! Every pixel's output depends only on its own channels and the scalar
//! parameters, so the whole transform is data-parallel with no
//! coordination; row loops go through `crate::maybe_rayon`.

pub mod alpha;
pub mod color_to_alpha;
pub mod compose;
pub mod curve;
pub mod distance;
pub mod extrapolate;

pub use color_to_alpha::{color_to_alpha_f32, color_to_alpha_u8};
pub use curve::CurveMode;
pub use distance::ShapeMode;
