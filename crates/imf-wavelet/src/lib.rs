//! Single-level 2D discrete wavelet transform.
//!
//! The transform is separable: a two-channel filter bank is applied along
//! rows, then along columns, producing one approximation band
//! and three detail bands (horizontal, vertical, diagonal).
//!
//! ## Boundary Convention
//! Signals are extended periodically. An odd-length signal is first made
//! even by repeating its last sample, so a band has `ceil(n / 2)` samples
//! per axis. [`decompose`] records the source shape in [`Subbands`] and
//! [`reconstruct`] crops back to it. Both sides use the same convention, so
//! the pair round-trips to floating-point precision.
//!
//! ## Families
//! [`WaveletFamily`] is the registry of supported discrete families. The
//! orthogonal ones are `haar`, `db1`..`db38`, `sym2`..`sym20` and
//! `coif1`..`coif5`; the spline biorthogonal pairs `bior<r>.<d>` and their
//! duals `rbio<r>.<d>` cover 1.1 to 3.9 and the CDF 9/7 pair 4.4.
//! [`WaveletKind`] tells the constructions apart.

mod dwt;
mod family;
mod tables;

pub use dwt::{Subbands, decompose, decompose_named, reconstruct, reconstruct_named};
pub use family::{WaveletFamily, WaveletKind};
