//! Image buffer primitives for the fusion engine.
//!
//! ## Buffers and Views
//! [`Image`] owns a row-major buffer. [`ImageView`] borrows one with an
//! element stride (not byte stride), so views over padded buffers are
//! cheap. Samples are `u8` at the boundary of the engine and
//! `f32` inside every arithmetic combination.
//!
//! ## Shape Normalization
//! [`validate_shape`] brings a primary/secondary pair to the primary's shape
//! by bilinear resampling of the secondary; [`validate_shape_with`] takes
//! the [`Interpolation`] explicitly. Sampling uses pixel-center
//! coordinates with clamped borders.
//!
//! ## Quantization
//! [`clamp_to_u8`] is the single exit path from `f32` back to storage:
//! clamp to `[0, 255]`, round to nearest.

mod border;
mod error;
mod image;
mod resize;
mod sample;

pub use border::{BorderMode, map_index};
pub use error::Error;
pub use image::{Image, ImageView, clamp_to_u8, to_f32};
pub use resize::{Interpolation, resize, resize_bilinear, validate_shape, validate_shape_with};
pub use sample::{sample_bilinear_f32, sample_nearest};

/// Lower bound of the storage intensity range.
pub const INTENSITY_MIN: f32 = 0.0;
/// Upper bound of the storage intensity range.
pub const INTENSITY_MAX: f32 = 255.0;
