use imf_core::{Error, Image, ImageView};
use imf_pyr::LaplacianPyramid;
use tracing::trace;

/// Level-wise maximum of two Laplacian pyramids, residual included.
///
/// Both pyramids must have the same depth and identical shapes at every
/// level; nothing is cropped or padded to make them agree.
pub fn fuse_laplacian(
    a: &LaplacianPyramid,
    b: &LaplacianPyramid,
) -> Result<LaplacianPyramid, Error> {
    if a.depth() != b.depth() {
        return Err(Error::ShapeMismatch {
            left: a.residual().shape(),
            right: b.residual().shape(),
        });
    }

    let levels = a
        .levels()
        .iter()
        .zip(b.levels())
        .map(|(la, lb)| la.as_view().zip_map(&lb.as_view(), f32::max))
        .collect::<Result<Vec<_>, _>>()?;
    LaplacianPyramid::from_levels(levels)
}

/// Builds a pyramid of `depth` levels for each input, fuses them with
/// [`fuse_laplacian`] and collapses the result to `u8`.
pub fn fuse_laplacian_pyramid(
    a: &ImageView<'_, f32>,
    b: &ImageView<'_, f32>,
    depth: usize,
) -> Result<Image<u8>, Error> {
    let pa = LaplacianPyramid::build(a, depth)?;
    let pb = LaplacianPyramid::build(b, depth)?;
    trace!(shapes = ?pa.shapes(), "fusing laplacian pyramids");

    fuse_laplacian(&pa, &pb)?.collapse_to_u8()
}
