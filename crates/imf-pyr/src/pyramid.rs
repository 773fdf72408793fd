use imf_core::{Error, Image, ImageView, clamp_to_u8};
use tracing::trace;

use crate::scale::{pyr_down, pyr_up, reduced_dims};

/// Smoothed and successively halved copies of an image.
///
/// Level 0 is an f32 copy of the input. Each next level is [`pyr_down`] of
/// the previous one. Once a level reaches 1x1 it reduces to itself, so every
/// requested depth can be built.
#[derive(Debug, Default, Clone)]
pub struct GaussianPyramid {
    levels: Vec<Image<f32>>,
}

impl GaussianPyramid {
    pub fn build(src: &ImageView<'_, f32>, depth: usize) -> Result<Self, Error> {
        check_depth(depth)?;
        src.ensure_non_empty()?;

        let mut levels = Vec::with_capacity(depth);
        levels.push(src.to_image());
        for level_idx in 1..depth {
            let next = pyr_down(&levels[level_idx - 1].as_view());
            levels.push(next);
        }
        Ok(Self { levels })
    }

    pub fn level(&self, i: usize) -> Option<&Image<f32>> {
        self.levels.get(i)
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    pub fn into_levels(self) -> Vec<Image<f32>> {
        self.levels
    }
}

/// Band-pass decomposition of an image.
///
/// `levels()[k]` for `k < depth - 1` holds the detail
/// `G[k] - pyr_up(G[k + 1])` at the resolution of Gaussian level `k`.
/// The last entry holds the coarsest Gaussian level itself (the residual).
///
/// Odd sizes are handled by expanding straight to the finer level's shape,
/// in both [`LaplacianPyramid::build`] and [`LaplacianPyramid::collapse`].
#[derive(Debug, Clone, PartialEq)]
pub struct LaplacianPyramid {
    levels: Vec<Image<f32>>,
}

impl LaplacianPyramid {
    /// Default number of levels: the base plus four halvings.
    pub const DEFAULT_DEPTH: usize = 5;

    pub fn build(src: &ImageView<'_, f32>, depth: usize) -> Result<Self, Error> {
        let gaussian = GaussianPyramid::build(src, depth)?.into_levels();

        let mut levels = Vec::with_capacity(gaussian.len());
        for pair in gaussian.windows(2) {
            let (fine, coarse) = (&pair[0], &pair[1]);
            let expanded = pyr_up(&coarse.as_view(), fine.width(), fine.height())?;
            let detail = fine.as_view().zip_map(&expanded.as_view(), |f, e| f - e)?;
            levels.push(detail);
        }
        if let Some(residual) = gaussian.into_iter().last() {
            levels.push(residual);
        }

        trace!(shapes = ?shapes_of(&levels), "built laplacian pyramid");
        Ok(Self { levels })
    }

    /// Wraps precomputed levels, finest first and residual last.
    ///
    /// Each level must be the [`pyr_up`] target of the next one.
    pub fn from_levels(levels: Vec<Image<f32>>) -> Result<Self, Error> {
        check_depth(levels.len())?;
        for pair in levels.windows(2) {
            let (fine, coarse) = (&pair[0], &pair[1]);
            if reduced_dims(fine.width(), fine.height()) != coarse.shape() {
                return Err(Error::shape_mismatch(fine.shape(), coarse.shape()));
            }
        }
        if levels.iter().any(Image::is_empty) {
            return Err(Error::EmptyOrNonRectangularImage);
        }
        Ok(Self { levels })
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn level(&self, i: usize) -> Option<&Image<f32>> {
        self.levels.get(i)
    }

    pub fn levels(&self) -> &[Image<f32>] {
        &self.levels
    }

    pub fn residual(&self) -> &Image<f32> {
        // `check_depth` guarantees at least one level.
        &self.levels[self.levels.len() - 1]
    }

    /// `(width, height)` of every level, finest first.
    pub fn shapes(&self) -> Vec<(usize, usize)> {
        shapes_of(&self.levels)
    }

    /// Sums the bands back together, from the residual up to full
    /// resolution. No clamping is applied.
    pub fn collapse(&self) -> Result<Image<f32>, Error> {
        let mut result = self.residual().clone();
        for finer in self.levels.iter().rev().skip(1) {
            let expanded = pyr_up(&result.as_view(), finer.width(), finer.height())?;
            result = expanded.as_view().zip_map(&finer.as_view(), |e, d| e + d)?;
        }
        Ok(result)
    }

    /// [`LaplacianPyramid::collapse`] followed by clamping to `[0, 255]`.
    pub fn collapse_to_u8(&self) -> Result<Image<u8>, Error> {
        Ok(clamp_to_u8(&self.collapse()?.as_view()))
    }
}

fn check_depth(depth: usize) -> Result<(), Error> {
    if depth == 0 {
        return Err(Error::InvalidConfig(
            "pyramid depth must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn shapes_of(levels: &[Image<f32>]) -> Vec<(usize, usize)> {
    levels.iter().map(Image::shape).collect()
}

#[cfg(test)]
mod tests {
    use imf_core::{Error, Image};

    use crate::{GaussianPyramid, LaplacianPyramid};

    fn gradient(w: usize, h: usize) -> Image<f32> {
        Image::from_fn(w, h, |x, y| ((x * 7 + y * 13) % 256) as f32)
    }

    #[test]
    fn gaussian_levels_halve_with_ceil() {
        let src = gradient(16, 16);
        let pyr = GaussianPyramid::build(&src.as_view(), 6).expect("build");

        let dims: Vec<(usize, usize)> = (0..pyr.num_levels())
            .map(|i| pyr.level(i).expect("level should exist").shape())
            .collect();
        assert_eq!(dims, vec![(16, 16), (8, 8), (4, 4), (2, 2), (1, 1), (1, 1)]);
    }

    #[test]
    fn level_zero_is_f32_copy() {
        let src = Image::from_vec(3, 2, vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
        let pyr = GaussianPyramid::build(&src.as_view(), 3).expect("build");
        assert_eq!(pyr.level(0).expect("level 0").data(), src.data());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let src = gradient(4, 4);
        assert!(matches!(
            LaplacianPyramid::build(&src.as_view(), 0),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn laplacian_shapes_follow_gaussian_chain() {
        let src = gradient(37, 21);
        let pyr = LaplacianPyramid::build(&src.as_view(), LaplacianPyramid::DEFAULT_DEPTH)
            .expect("build");
        assert_eq!(pyr.depth(), 5);
        assert_eq!(
            pyr.shapes(),
            vec![(37, 21), (19, 11), (10, 6), (5, 3), (3, 2)]
        );
    }

    #[test]
    fn collapse_inverts_build_for_even_and_odd_shapes() {
        for (w, h) in [(32usize, 32usize), (37, 21), (5, 9), (1, 1), (2, 7)] {
            let src = gradient(w, h);
            let pyr = LaplacianPyramid::build(&src.as_view(), 5).expect("build");
            let back = pyr.collapse().expect("collapse");
            assert_eq!(back.shape(), (w, h));
            for (&a, &b) in back.data().iter().zip(src.data()) {
                assert!((a - b).abs() < 1e-3, "{w}x{h}: {a} vs {b}");
            }

            let back_u8 = pyr.collapse_to_u8().expect("collapse");
            for (&a, &b) in back_u8.data().iter().zip(src.data()) {
                assert!((a as f32 - b).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn depth_one_keeps_only_the_residual() {
        let src = gradient(6, 4);
        let pyr = LaplacianPyramid::build(&src.as_view(), 1).expect("build");
        assert_eq!(pyr.depth(), 1);
        assert_eq!(pyr.residual(), &src);
        assert_eq!(pyr.collapse().expect("collapse"), src);
    }

    #[test]
    fn from_levels_checks_the_size_chain() {
        let ok = vec![Image::new_fill(5, 3, 0.0f32), Image::new_fill(3, 2, 0.0f32)];
        assert!(LaplacianPyramid::from_levels(ok).is_ok());

        let bad = vec![Image::new_fill(5, 3, 0.0f32), Image::new_fill(2, 2, 0.0f32)];
        assert_eq!(
            LaplacianPyramid::from_levels(bad).unwrap_err(),
            Error::shape_mismatch((5, 3), (2, 2))
        );
    }
}
