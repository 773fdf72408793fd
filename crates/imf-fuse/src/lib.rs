//! Fusion of two co-registered grayscale images.
//!
//! [`ImageFuser`] is the usual entry point: it resamples the secondary image
//! to the primary's shape, then applies one [`FusionMethod`]:
//! - element-wise average, maximum, minimum or weighted average
//! - single-level wavelet fusion (approximation averaged, details maxed)
//! - Laplacian pyramid fusion (level-wise maximum)
//!
//! Every rule returns an `Image<u8>` shaped like the primary input with
//! samples clamped to `[0, 255]`. The rule functions are public as well and
//! operate on equally-shaped `f32` views.

mod config;
mod dispatch;
mod pixel;
mod pyramid;
mod wavelet;

pub use config::FusionConfig;
pub use dispatch::{FusionMethod, ImageFuser, fuse};
pub use pixel::{fuse_average, fuse_max, fuse_min, fuse_weighted_average};
pub use pyramid::{fuse_laplacian, fuse_laplacian_pyramid};
pub use wavelet::{fuse_subbands, fuse_wavelet};
