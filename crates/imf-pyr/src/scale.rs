use imf_core::{BorderMode, Error, Image, ImageView};

use crate::conv1d::{BINOMIAL5, convolve_f32};

/// Expand kernel: binomial taps scaled by 2 per axis to compensate for the
/// zeros inserted between source samples.
const EXPAND5: [f32; 5] = [
    2.0 * BINOMIAL5[0],
    2.0 * BINOMIAL5[1],
    2.0 * BINOMIAL5[2],
    2.0 * BINOMIAL5[3],
    2.0 * BINOMIAL5[4],
];

#[inline]
pub fn reduced_dims(width: usize, height: usize) -> (usize, usize) {
    (width.div_ceil(2), height.div_ceil(2))
}

/// Blur with the 5-tap binomial kernel and keep every second sample.
///
/// Output size is `(ceil(w/2), ceil(h/2))`; a 1x1 image reduces to itself.
pub fn pyr_down(src: &ImageView<'_, f32>) -> Image<f32> {
    let (sw, sh) = src.shape();
    let (dw, dh) = reduced_dims(sw, sh);
    if dw == 0 || dh == 0 {
        return Image::new_fill(dw, dh, 0.0);
    }

    let border = BorderMode::Reflect101;

    // Horizontal pass: sh rows of dw samples.
    let mut horiz = Vec::with_capacity(sh * dw);
    let mut blurred = vec![0.0f32; sw];
    for row in src.rows() {
        convolve_f32(row, &BINOMIAL5, 2, &border, &mut blurred);
        horiz.extend(blurred.iter().step_by(2).copied());
    }

    // Vertical pass over columns of the intermediate buffer.
    let mut dst = Image::new_fill(dw, dh, 0.0f32);
    let mut column = vec![0.0f32; sh];
    let mut column_blurred = vec![0.0f32; sh];
    for x in 0..dw {
        for (y, c) in column.iter_mut().enumerate() {
            *c = horiz[y * dw + x];
        }
        convolve_f32(&column, &BINOMIAL5, 2, &border, &mut column_blurred);
        for (y, &v) in column_blurred.iter().step_by(2).enumerate() {
            dst.data_mut()[y * dw + x] = v;
        }
    }
    dst
}

/// Insert zeros between samples and smooth, evaluated directly at
/// `dst_w x dst_h`.
///
/// The target must be a size that [`pyr_down`] maps back onto `src`, i.e.
/// `ceil(dst_w/2) == src.width()` and `ceil(dst_h/2) == src.height()`.
/// Anything else is a [`Error::ShapeMismatch`].
pub fn pyr_up(src: &ImageView<'_, f32>, dst_w: usize, dst_h: usize) -> Result<Image<f32>, Error> {
    if reduced_dims(dst_w, dst_h) != src.shape() {
        return Err(Error::shape_mismatch(
            src.shape(),
            reduced_dims(dst_w, dst_h),
        ));
    }
    if dst_w == 0 || dst_h == 0 {
        return Ok(Image::new_fill(dst_w, dst_h, 0.0));
    }

    let sh = src.height();
    let border = BorderMode::Reflect101;

    // Horizontal pass: sh rows of dst_w samples.
    let mut horiz = Vec::with_capacity(sh * dst_w);
    let mut upsampled = vec![0.0f32; dst_w];
    let mut smoothed = vec![0.0f32; dst_w];
    for row in src.rows() {
        expand_1d(row, &mut upsampled, &border, &mut smoothed);
        horiz.extend_from_slice(&smoothed);
    }

    let mut dst = Image::new_fill(dst_w, dst_h, 0.0f32);
    let mut column = vec![0.0f32; sh];
    let mut column_up = vec![0.0f32; dst_h];
    let mut column_smoothed = vec![0.0f32; dst_h];
    for x in 0..dst_w {
        for (y, c) in column.iter_mut().enumerate() {
            *c = horiz[y * dst_w + x];
        }
        expand_1d(&column, &mut column_up, &border, &mut column_smoothed);
        for (y, &v) in column_smoothed.iter().enumerate() {
            dst.data_mut()[y * dst_w + x] = v;
        }
    }
    Ok(dst)
}

fn expand_1d(src: &[f32], scratch: &mut [f32], border: &BorderMode<f32>, out: &mut [f32]) {
    // Reflect-101 on a single sample folds the zero taps onto it.
    if out.len() == 1 {
        out[0] = src[0];
        return;
    }

    for (i, s) in scratch.iter_mut().enumerate() {
        *s = if i % 2 == 0 { src[i / 2] } else { 0.0 };
    }
    convolve_f32(scratch, &EXPAND5, 2, border, out);
}

#[cfg(test)]
mod tests {
    use imf_core::{Error, Image};

    use super::{pyr_down, pyr_up, reduced_dims};

    #[test]
    fn reduce_rounds_odd_sizes_up() {
        assert_eq!(reduced_dims(16, 16), (8, 8));
        assert_eq!(reduced_dims(5, 3), (3, 2));
        assert_eq!(reduced_dims(1, 1), (1, 1));

        let img = Image::new_fill(7, 5, 1.0f32);
        assert_eq!(pyr_down(&img.as_view()).shape(), (4, 3));
    }

    #[test]
    fn reduce_and_expand_preserve_constant_images() {
        for (w, h) in [(8usize, 8usize), (7, 5), (2, 3), (1, 1)] {
            let img = Image::new_fill(w, h, 80.0f32);
            let down = pyr_down(&img.as_view());
            assert!(down.data().iter().all(|&v| (v - 80.0).abs() < 1e-4));

            let up = pyr_up(&down.as_view(), w, h).expect("compatible shape");
            assert_eq!(up.shape(), (w, h));
            assert!(
                up.data().iter().all(|&v| (v - 80.0).abs() < 1e-4),
                "{w}x{h}: {:?}",
                up.data()
            );
        }
    }

    #[test]
    fn reduce_weights_center_sample() {
        // A single impulse in the middle of a 5-sample row.
        let img = Image::from_vec(5, 1, vec![0.0f32, 0.0, 16.0, 0.0, 0.0]).expect("valid");
        let down = pyr_down(&img.as_view());
        assert_eq!(down.shape(), (3, 1));
        assert!((down.data()[0] - 2.0).abs() < 1e-5);
        assert!((down.data()[1] - 6.0).abs() < 1e-5);
        assert!((down.data()[2] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn expand_rejects_incompatible_target() {
        let img = Image::new_fill(4, 4, 0.0f32);
        assert_eq!(
            pyr_up(&img.as_view(), 10, 8).unwrap_err(),
            Error::shape_mismatch((4, 4), (5, 4))
        );
        assert!(pyr_up(&img.as_view(), 7, 8).is_ok());
    }
}
