use thiserror::Error;

/// Failure conditions shared by every crate of the fusion engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("image is empty or not rectangular")]
    EmptyOrNonRectangularImage,

    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error(
        "shape mismatch: {}x{} vs {}x{}",
        left.0,
        left.1,
        right.0,
        right.1
    )]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("unsupported wavelet family: '{0}'")]
    UnsupportedWavelet(String),

    #[error("unknown fusion method: '{0}'")]
    UnknownMethod(String),

    #[error("wavelet fusion requires a wavelet family")]
    MissingWavelet,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid stride")]
    InvalidStride,
}

impl Error {
    /// Builds a [`Error::ShapeMismatch`] from two `(width, height)` pairs.
    pub fn shape_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        Self::ShapeMismatch { left, right }
    }
}
