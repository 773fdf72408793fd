//! Umbrella crate for the `image-fusion` workspace.
//!
//! Re-exports the image buffers, pyramid and wavelet transforms, and the
//! fusion rules under one path.

pub use imf_core::*;
pub use imf_fuse::*;
pub use imf_pyr::*;
pub use imf_wavelet::*;
