use imf_core::{BorderMode, Error, Image, ImageView, map_index};
use tracing::trace;

use crate::family::WaveletFamily;

/// One level of a 2D wavelet decomposition.
///
/// All four bands share the shape `(ceil(w / 2), ceil(h / 2))` of the
/// source image `w x h`, which is recorded so the inverse can restore it.
#[derive(Debug, Clone, PartialEq)]
pub struct Subbands {
    /// Approximation: low-pass along both axes.
    pub ll: Image<f32>,
    /// Horizontal detail: low-pass along x, high-pass along y.
    pub lh: Image<f32>,
    /// Vertical detail: high-pass along x, low-pass along y.
    pub hl: Image<f32>,
    /// Diagonal detail: high-pass along both axes.
    pub hh: Image<f32>,
    width: usize,
    height: usize,
}

impl Subbands {
    /// Assembles bands for a source of `width x height`.
    ///
    /// Every band must have shape `(ceil(width / 2), ceil(height / 2))`.
    pub fn new(
        ll: Image<f32>,
        lh: Image<f32>,
        hl: Image<f32>,
        hh: Image<f32>,
        width: usize,
        height: usize,
    ) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyOrNonRectangularImage);
        }
        let expected = band_dims(width, height);
        for band in [&ll, &lh, &hl, &hh] {
            if band.shape() != expected {
                return Err(Error::shape_mismatch(expected, band.shape()));
            }
        }
        Ok(Self {
            ll,
            lh,
            hl,
            hh,
            width,
            height,
        })
    }

    /// `(width, height)` of the decomposed source image.
    pub fn source_shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// `(width, height)` shared by all four bands.
    pub fn band_shape(&self) -> (usize, usize) {
        self.ll.shape()
    }

    /// `(horizontal, vertical, diagonal)` detail bands.
    pub fn details(&self) -> (&Image<f32>, &Image<f32>, &Image<f32>) {
        (&self.lh, &self.hl, &self.hh)
    }
}

#[inline]
fn band_dims(width: usize, height: usize) -> (usize, usize) {
    (width.div_ceil(2), height.div_ceil(2))
}

/// Single-level 2D DWT with periodic extension.
///
/// Odd dimensions are first extended by repeating the last row/column, so
/// each band is `ceil(w / 2) x ceil(h / 2)`. Rows are analysed first, then
/// columns.
pub fn decompose(src: &ImageView<'_, f32>, family: WaveletFamily) -> Result<Subbands, Error> {
    src.ensure_non_empty()?;

    let bank = FilterBank::new(family);
    let (w, h) = src.shape();
    let (bw, bh) = band_dims(w, h);

    // Row pass: low and high halves, h rows of bw samples each.
    let mut row_lo = Image::new_fill(bw, h, 0.0f32);
    let mut row_hi = Image::new_fill(bw, h, 0.0f32);
    let mut padded = vec![0.0f32; 2 * bw];
    let mut lo = vec![0.0f32; bw];
    let mut hi = vec![0.0f32; bw];
    for (y, row) in src.rows().enumerate() {
        extend_even(row, &mut padded);
        bank.analyze(&padded, &mut lo, &mut hi);
        row_lo.data_mut()[y * bw..(y + 1) * bw].copy_from_slice(&lo);
        row_hi.data_mut()[y * bw..(y + 1) * bw].copy_from_slice(&hi);
    }

    // Column pass on each half.
    let (ll, lh) = analyze_columns(&bank, &row_lo, bh);
    let (hl, hh) = analyze_columns(&bank, &row_hi, bh);

    trace!(
        family = family.name(),
        width = w,
        height = h,
        band_w = bw,
        band_h = bh,
        "wavelet decomposition"
    );
    Subbands::new(ll, lh, hl, hh, w, h)
}

/// Inverse of [`decompose`]: rebuilds an image of the recorded source shape.
pub fn reconstruct(bands: &Subbands, family: WaveletFamily) -> Result<Image<f32>, Error> {
    let (w, h) = bands.source_shape();
    let expected = band_dims(w, h);
    for band in [&bands.ll, &bands.lh, &bands.hl, &bands.hh] {
        if band.shape() != expected {
            return Err(Error::shape_mismatch(expected, band.shape()));
        }
    }

    let bank = FilterBank::new(family);
    let (bw, bh) = expected;

    // Column synthesis back to the padded height.
    let row_lo = synthesize_columns(&bank, &bands.ll, &bands.lh, 2 * bh);
    let row_hi = synthesize_columns(&bank, &bands.hl, &bands.hh, 2 * bh);

    // Row synthesis, keeping only the first w samples of the first h rows.
    let mut out = Image::new_fill(w, h, 0.0f32);
    let mut full = vec![0.0f32; 2 * bw];
    for y in 0..h {
        let lo = &row_lo.data()[y * bw..(y + 1) * bw];
        let hi = &row_hi.data()[y * bw..(y + 1) * bw];
        bank.synthesize(lo, hi, &mut full);
        out.data_mut()[y * w..(y + 1) * w].copy_from_slice(&full[..w]);
    }
    Ok(out)
}

/// Decomposes with a family looked up by name.
pub fn decompose_named(src: &ImageView<'_, f32>, family: &str) -> Result<Subbands, Error> {
    decompose(src, WaveletFamily::from_name(family)?)
}

/// Reconstructs with a family looked up by name.
pub fn reconstruct_named(bands: &Subbands, family: &str) -> Result<Image<f32>, Error> {
    reconstruct(bands, WaveletFamily::from_name(family)?)
}

fn analyze_columns(bank: &FilterBank, src: &Image<f32>, bh: usize) -> (Image<f32>, Image<f32>) {
    let (bw, h) = src.shape();
    let mut low = Image::new_fill(bw, bh, 0.0f32);
    let mut high = Image::new_fill(bw, bh, 0.0f32);

    let mut column = vec![0.0f32; h];
    let mut padded = vec![0.0f32; 2 * bh];
    let mut lo = vec![0.0f32; bh];
    let mut hi = vec![0.0f32; bh];
    for x in 0..bw {
        for (y, c) in column.iter_mut().enumerate() {
            *c = src.data()[y * bw + x];
        }
        extend_even(&column, &mut padded);
        bank.analyze(&padded, &mut lo, &mut hi);
        for y in 0..bh {
            low.data_mut()[y * bw + x] = lo[y];
            high.data_mut()[y * bw + x] = hi[y];
        }
    }
    (low, high)
}

fn synthesize_columns(
    bank: &FilterBank,
    low: &Image<f32>,
    high: &Image<f32>,
    out_h: usize,
) -> Image<f32> {
    let (bw, bh) = low.shape();
    let mut out = Image::new_fill(bw, out_h, 0.0f32);

    let mut lo = vec![0.0f32; bh];
    let mut hi = vec![0.0f32; bh];
    let mut full = vec![0.0f32; out_h];
    for x in 0..bw {
        for y in 0..bh {
            lo[y] = low.data()[y * bw + x];
            hi[y] = high.data()[y * bw + x];
        }
        bank.synthesize(&lo, &hi, &mut full);
        for (y, &v) in full.iter().enumerate() {
            out.data_mut()[y * bw + x] = v;
        }
    }
    out
}

/// Copies `src` into `dst` (length `src.len()` rounded up to even),
/// repeating the last sample when `src` has odd length.
fn extend_even(src: &[f32], dst: &mut [f32]) {
    debug_assert_eq!(dst.len(), src.len().div_ceil(2) * 2);
    dst[..src.len()].copy_from_slice(src);
    if dst.len() > src.len()
        && let Some(&last) = src.last()
    {
        dst[src.len()] = last;
    }
}

/// Periodized two-channel filter bank.
///
/// The high-pass filters are the alternating flips of the opposite
/// low-pass filters, `dec_hi[k] = (-1)^k rec_lo[L-1-k]` and
/// `rec_hi[k] = (-1)^k dec_lo[L-1-k]`, which makes synthesis the exact
/// inverse of analysis for every biorthogonal pair. With an orthogonal
/// family the two sides coincide and synthesis is the transpose.
struct FilterBank {
    dec_lo: Vec<f32>,
    dec_hi: Vec<f32>,
    rec_lo: Vec<f32>,
    rec_hi: Vec<f32>,
}

impl FilterBank {
    fn new(family: WaveletFamily) -> Self {
        let dec_lo: Vec<f32> = family.dec_lo().iter().map(|&v| v as f32).collect();
        let rec_lo: Vec<f32> = family.rec_lo().iter().map(|&v| v as f32).collect();
        let dec_hi = alternating_flip(&rec_lo);
        let rec_hi = alternating_flip(&dec_lo);
        Self {
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        }
    }

    /// `lo[n] = Σ dec_lo[k] x[(2n + k) mod N]`, same with `dec_hi` for `hi`.
    fn analyze(&self, signal: &[f32], lo: &mut [f32], hi: &mut [f32]) {
        let n = signal.len();
        debug_assert!(n.is_multiple_of(2));
        debug_assert_eq!(lo.len(), n / 2);
        debug_assert_eq!(hi.len(), n / 2);

        for (i, (a, d)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let mut acc_lo = 0.0f32;
            let mut acc_hi = 0.0f32;
            for (k, (&hk, &gk)) in self.dec_lo.iter().zip(self.dec_hi.iter()).enumerate() {
                let s = signal[wrap(2 * i + k, n)];
                acc_lo += hk * s;
                acc_hi += gk * s;
            }
            *a = acc_lo;
            *d = acc_hi;
        }
    }

    /// `out[(2n + k) mod N] += rec_lo[k] lo[n] + rec_hi[k] hi[n]`.
    fn synthesize(&self, lo: &[f32], hi: &[f32], out: &mut [f32]) {
        let n = out.len();
        debug_assert_eq!(lo.len() * 2, n);
        debug_assert_eq!(hi.len() * 2, n);

        out.fill(0.0);
        for (i, (&a, &d)) in lo.iter().zip(hi.iter()).enumerate() {
            for (k, (&hk, &gk)) in self.rec_lo.iter().zip(self.rec_hi.iter()).enumerate() {
                out[wrap(2 * i + k, n)] += hk * a + gk * d;
            }
        }
    }
}

fn alternating_flip(filter: &[f32]) -> Vec<f32> {
    filter
        .iter()
        .rev()
        .enumerate()
        .map(|(k, &v)| if k % 2 == 0 { v } else { -v })
        .collect()
}

#[inline]
fn wrap(i: usize, len: usize) -> usize {
    map_index(i as isize, len, &BorderMode::<f32>::Wrap).unwrap_or(0)
}
