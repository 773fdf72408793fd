use imf_core::{Error, Image, ImageView, clamp_to_u8};
use imf_wavelet::{Subbands, WaveletFamily, decompose, reconstruct};

/// Averages the approximation bands and keeps the per-sample maximum of
/// each detail band.
pub fn fuse_subbands(a: &Subbands, b: &Subbands) -> Result<Subbands, Error> {
    if a.source_shape() != b.source_shape() {
        return Err(Error::shape_mismatch(a.source_shape(), b.source_shape()));
    }

    let ll = a.ll.as_view().zip_map(&b.ll.as_view(), |x, y| (x + y) * 0.5)?;
    let lh = a.lh.as_view().zip_map(&b.lh.as_view(), f32::max)?;
    let hl = a.hl.as_view().zip_map(&b.hl.as_view(), f32::max)?;
    let hh = a.hh.as_view().zip_map(&b.hh.as_view(), f32::max)?;

    let (w, h) = a.source_shape();
    Subbands::new(ll, lh, hl, hh, w, h)
}

/// Single-level wavelet fusion of two equally-shaped images.
pub fn fuse_wavelet(
    a: &ImageView<'_, f32>,
    b: &ImageView<'_, f32>,
    family: WaveletFamily,
) -> Result<Image<u8>, Error> {
    if a.shape() != b.shape() {
        return Err(Error::shape_mismatch(a.shape(), b.shape()));
    }

    let bands_a = decompose(a, family)?;
    let bands_b = decompose(b, family)?;
    let fused = fuse_subbands(&bands_a, &bands_b)?;
    let out = reconstruct(&fused, family)?;
    Ok(clamp_to_u8(&out.as_view()))
}
