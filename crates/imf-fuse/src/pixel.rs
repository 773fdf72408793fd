//! Element-wise fusion rules.
//!
//! Each rule combines two equally-shaped `f32` views and quantizes the
//! result with [`clamp_to_u8`]. Shapes that disagree are a
//! [`Error::ShapeMismatch`]; run [`imf_core::validate_shape`] first when the
//! inputs may differ.

use imf_core::{Error, Image, ImageView, clamp_to_u8};

use crate::config::check_alpha;

pub fn fuse_average(a: &ImageView<'_, f32>, b: &ImageView<'_, f32>) -> Result<Image<u8>, Error> {
    combine(a, b, |x, y| (x + y) * 0.5)
}

pub fn fuse_max(a: &ImageView<'_, f32>, b: &ImageView<'_, f32>) -> Result<Image<u8>, Error> {
    combine(a, b, f32::max)
}

pub fn fuse_min(a: &ImageView<'_, f32>, b: &ImageView<'_, f32>) -> Result<Image<u8>, Error> {
    combine(a, b, f32::min)
}

/// `alpha * a + (1 - alpha) * b`. Not commutative unless `alpha == 0.5`.
pub fn fuse_weighted_average(
    a: &ImageView<'_, f32>,
    b: &ImageView<'_, f32>,
    alpha: f32,
) -> Result<Image<u8>, Error> {
    check_alpha(alpha)?;
    let beta = 1.0 - alpha;
    combine(a, b, |x, y| alpha * x + beta * y)
}

fn combine(
    a: &ImageView<'_, f32>,
    b: &ImageView<'_, f32>,
    op: impl FnMut(f32, f32) -> f32,
) -> Result<Image<u8>, Error> {
    a.ensure_non_empty()?;
    let fused = a.zip_map(b, op)?;
    Ok(clamp_to_u8(&fused.as_view()))
}

#[cfg(test)]
mod tests {
    use imf_core::{Error, Image};

    use super::{fuse_average, fuse_max, fuse_min, fuse_weighted_average};

    fn uniform(w: usize, h: usize, v: f32) -> Image<f32> {
        Image::new_fill(w, h, v)
    }

    #[test]
    fn uniform_100_and_200() {
        let a = uniform(4, 4, 100.0);
        let b = uniform(4, 4, 200.0);

        let avg = fuse_average(&a.as_view(), &b.as_view()).expect("average");
        assert_eq!(avg.shape(), (4, 4));
        assert!(avg.data().iter().all(|&v| v == 150));

        let max = fuse_max(&a.as_view(), &b.as_view()).expect("max");
        assert!(max.data().iter().all(|&v| v == 200));

        let min = fuse_min(&a.as_view(), &b.as_view()).expect("min");
        assert!(min.data().iter().all(|&v| v == 100));
    }

    #[test]
    fn weighted_average_favors_first_input() {
        let a = uniform(3, 3, 100.0);
        let b = uniform(3, 3, 0.0);
        let out = fuse_weighted_average(&a.as_view(), &b.as_view(), 0.6).expect("weighted");
        assert!(out.data().iter().all(|&v| v == 60));

        let swapped = fuse_weighted_average(&b.as_view(), &a.as_view(), 0.4).expect("weighted");
        assert_eq!(out, swapped);
    }

    #[test]
    fn weighted_average_rejects_bad_alpha() {
        let a = uniform(2, 2, 1.0);
        assert!(matches!(
            fuse_weighted_average(&a.as_view(), &a.as_view(), 1.2),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn results_are_clamped() {
        let a = Image::from_vec(3, 1, vec![-40.0f32, 300.0, 12.4]).expect("valid");
        let b = Image::from_vec(3, 1, vec![-10.0f32, 400.0, 12.6]).expect("valid");
        let max = fuse_max(&a.as_view(), &b.as_view()).expect("max");
        assert_eq!(max.data(), &[0, 255, 13]);
        let min = fuse_min(&a.as_view(), &b.as_view()).expect("min");
        assert_eq!(min.data(), &[0, 255, 12]);
    }

    #[test]
    fn mismatched_shapes_are_reported() {
        let a = uniform(4, 4, 0.0);
        let b = uniform(4, 3, 0.0);
        assert_eq!(
            fuse_average(&a.as_view(), &b.as_view()).unwrap_err(),
            Error::shape_mismatch((4, 4), (4, 3))
        );
    }
}
