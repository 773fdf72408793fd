use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::border::BorderMode;
use crate::image::{Image, ImageView};
use crate::sample::{sample_bilinear_f32, sample_nearest};
use crate::Error;

/// Resampling kernel used when the secondary image is brought to the
/// primary's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Nearest,
    #[default]
    Bilinear,
}

impl Interpolation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
        }
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "bilinear" | "linear" => Ok(Self::Bilinear),
            other => Err(Error::InvalidConfig(format!(
                "unknown interpolation '{other}'"
            ))),
        }
    }
}

/// Resamples `src` to `width x height`.
///
/// Destination pixel centers are mapped back with
/// `src = (dst + 0.5) * (src_len / dst_len) - 0.5` and borders are clamped.
pub fn resize(
    src: &ImageView<'_, f32>,
    width: usize,
    height: usize,
    interpolation: Interpolation,
) -> Result<Image<f32>, Error> {
    src.ensure_non_empty()?;
    if width == 0 || height == 0 {
        return Err(Error::EmptyOrNonRectangularImage);
    }
    if src.shape() == (width, height) {
        return Ok(src.to_image());
    }

    let sx = src.width() as f32 / width as f32;
    let sy = src.height() as f32 / height as f32;

    let out = Image::from_fn(width, height, |x, y| {
        let fx = (x as f32 + 0.5) * sx - 0.5;
        let fy = (y as f32 + 0.5) * sy - 0.5;
        match interpolation {
            Interpolation::Nearest => sample_nearest(src, fx, fy, BorderMode::Clamp),
            Interpolation::Bilinear => sample_bilinear_f32(src, fx, fy, BorderMode::Clamp),
        }
    });
    Ok(out)
}

pub fn resize_bilinear(
    src: &ImageView<'_, f32>,
    width: usize,
    height: usize,
) -> Result<Image<f32>, Error> {
    resize(src, width, height, Interpolation::Bilinear)
}

/// Brings a primary/secondary pair to a common shape.
///
/// The primary is copied as is. The secondary is bilinearly resampled to the
/// primary's shape when the two differ.
pub fn validate_shape(
    primary: &ImageView<'_, f32>,
    secondary: &ImageView<'_, f32>,
) -> Result<(Image<f32>, Image<f32>), Error> {
    validate_shape_with(primary, secondary, Interpolation::Bilinear)
}

/// [`validate_shape`] with an explicit resampling kernel.
pub fn validate_shape_with(
    primary: &ImageView<'_, f32>,
    secondary: &ImageView<'_, f32>,
    interpolation: Interpolation,
) -> Result<(Image<f32>, Image<f32>), Error> {
    primary.ensure_non_empty()?;
    secondary.ensure_non_empty()?;

    if primary.shape() == secondary.shape() {
        return Ok((primary.to_image(), secondary.to_image()));
    }

    let (w, h) = primary.shape();
    debug!(
        from_w = secondary.width(),
        from_h = secondary.height(),
        to_w = w,
        to_h = h,
        interpolation = interpolation.name(),
        "resampling secondary image to primary shape"
    );
    let resampled = resize(secondary, w, h, interpolation)?;
    Ok((primary.to_image(), resampled))
}
