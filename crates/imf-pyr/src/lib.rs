//! Gaussian and Laplacian pyramids for multiresolution fusion.
//!
//! `imf-pyr` uses the 5-tap binomial kernel `[1 4 6 4 1] / 16` with
//! reflect-101 borders for both the reduce and the expand step.
//!
//! Size policy:
//! - Reduce output is `(ceil(w / 2), ceil(h / 2))`.
//! - Expand always evaluates at the exact shape of the finer level, so odd
//!   sizes never produce a mismatch between a Gaussian level and the
//!   expanded coarser level. The same rule is used to build and to collapse,
//!   which keeps the decomposition exactly invertible.

pub mod conv1d;
mod pyramid;
mod scale;

pub use conv1d::BINOMIAL5;
pub use pyramid::{GaussianPyramid, LaplacianPyramid};
pub use scale::{pyr_down, pyr_up, reduced_dims};
