use core::fmt;
use core::str::FromStr;

use imf_core::{Error, Image, ImageView, to_f32, validate_shape_with};
use imf_wavelet::WaveletFamily;
use tracing::debug;

use crate::config::FusionConfig;
use crate::pixel::{fuse_average, fuse_max, fuse_min, fuse_weighted_average};
use crate::pyramid::fuse_laplacian_pyramid;
use crate::wavelet::fuse_wavelet;

/// Fusion rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FusionMethod {
    Average,
    Max,
    Minimum,
    WeightedAverage,
    Wavelet(WaveletFamily),
    LaplacianPyramid,
}

impl FusionMethod {
    /// Display names of every method, in listing order.
    pub const NAMES: [&'static str; 6] = [
        "Average",
        "Max",
        "Minimum",
        "Weighted Average",
        "Wavelet",
        "Laplacian Pyramid",
    ];

    /// Resolves a method name, plus a wavelet family name for `Wavelet`.
    ///
    /// Matching ignores ASCII case, whitespace, `_` and `-`, so
    /// `"Weighted Average"`, `"WeightedAverage"` and `"weighted_average"`
    /// all select the same rule. `wavelet` is only consulted for the wavelet
    /// method, where it is required.
    pub fn parse(method: &str, wavelet: Option<&str>) -> Result<Self, Error> {
        let key = normalize(method);
        let parsed = match key.as_str() {
            "average" | "mean" => Self::Average,
            "max" | "maximum" => Self::Max,
            "min" | "minimum" => Self::Minimum,
            "weightedaverage" | "weighted" => Self::WeightedAverage,
            "wavelet" | "dwt" => {
                let family = wavelet.ok_or(Error::MissingWavelet)?;
                Self::Wavelet(WaveletFamily::from_name(family)?)
            }
            "laplacianpyramid" | "laplacian" | "pyramid" => Self::LaplacianPyramid,
            _ => return Err(Error::UnknownMethod(method.to_string())),
        };
        Ok(parsed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Average => Self::NAMES[0],
            Self::Max => Self::NAMES[1],
            Self::Minimum => Self::NAMES[2],
            Self::WeightedAverage => Self::NAMES[3],
            Self::Wavelet(_) => Self::NAMES[4],
            Self::LaplacianPyramid => Self::NAMES[5],
        }
    }

    pub fn wavelet(&self) -> Option<WaveletFamily> {
        match self {
            Self::Wavelet(family) => Some(*family),
            _ => None,
        }
    }

    /// Every method, with the wavelet rule bound to `family`.
    pub fn all(family: WaveletFamily) -> [FusionMethod; 6] {
        [
            Self::Average,
            Self::Max,
            Self::Minimum,
            Self::WeightedAverage,
            Self::Wavelet(family),
            Self::LaplacianPyramid,
        ]
    }
}

impl fmt::Display for FusionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wavelet(family) => write!(f, "{} ({family})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// Parses `"<method>"` or `"<method>:<wavelet>"`, e.g. `"wavelet:db2"`.
impl FromStr for FusionMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((method, wavelet)) => Self::parse(method, Some(wavelet)),
            None => Self::parse(s, None),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Stateless fusion front end: shape normalization followed by one rule.
#[derive(Debug, Clone, Default)]
pub struct ImageFuser {
    config: FusionConfig,
}

impl ImageFuser {
    pub fn new(config: FusionConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuses two grayscale images.
    ///
    /// `secondary` is resampled to the shape of `primary` first when the two
    /// differ, with the configured [`FusionConfig::resample`] kernel; the
    /// output always has the primary's shape.
    pub fn fuse(
        &self,
        primary: &ImageView<'_, u8>,
        secondary: &ImageView<'_, u8>,
        method: FusionMethod,
    ) -> Result<Image<u8>, Error> {
        primary.ensure_non_empty()?;
        secondary.ensure_non_empty()?;
        self.fuse_f32(&to_f32(primary).as_view(), &to_f32(secondary).as_view(), method)
    }

    /// [`ImageFuser::fuse`] for callers that already hold `f32` samples.
    pub fn fuse_f32(
        &self,
        primary: &ImageView<'_, f32>,
        secondary: &ImageView<'_, f32>,
        method: FusionMethod,
    ) -> Result<Image<u8>, Error> {
        let (a, b) = validate_shape_with(primary, secondary, self.config.resample)?;
        let (a, b) = (a.as_view(), b.as_view());
        debug!(
            method = %method,
            width = a.width(),
            height = a.height(),
            "fusing image pair"
        );

        match method {
            FusionMethod::Average => fuse_average(&a, &b),
            FusionMethod::Max => fuse_max(&a, &b),
            FusionMethod::Minimum => fuse_min(&a, &b),
            FusionMethod::WeightedAverage => fuse_weighted_average(&a, &b, self.config.alpha),
            FusionMethod::Wavelet(family) => fuse_wavelet(&a, &b, family),
            FusionMethod::LaplacianPyramid => {
                fuse_laplacian_pyramid(&a, &b, self.config.pyramid_depth)
            }
        }
    }

    /// Resolves `method`/`wavelet` with [`FusionMethod::parse`] and fuses.
    pub fn fuse_named(
        &self,
        primary: &ImageView<'_, u8>,
        secondary: &ImageView<'_, u8>,
        method: &str,
        wavelet: Option<&str>,
    ) -> Result<Image<u8>, Error> {
        let method = FusionMethod::parse(method, wavelet)?;
        self.fuse(primary, secondary, method)
    }
}

/// One-shot fusion with [`FusionConfig::default`].
pub fn fuse(
    primary: &ImageView<'_, u8>,
    secondary: &ImageView<'_, u8>,
    method: &str,
    wavelet: Option<&str>,
) -> Result<Image<u8>, Error> {
    ImageFuser::default().fuse_named(primary, secondary, method, wavelet)
}

#[cfg(test)]
mod tests {
    use imf_core::{Error, Image, Interpolation};
    use imf_wavelet::WaveletFamily;

    use super::{FusionMethod, ImageFuser, fuse};
    use crate::FusionConfig;

    fn family(name: &str) -> WaveletFamily {
        WaveletFamily::from_name(name).expect("registered family")
    }

    #[test]
    fn parse_accepts_display_and_compact_names() {
        assert_eq!(FusionMethod::parse("Average", None), Ok(FusionMethod::Average));
        assert_eq!(FusionMethod::parse("max", None), Ok(FusionMethod::Max));
        assert_eq!(FusionMethod::parse("Minimum", None), Ok(FusionMethod::Minimum));
        assert_eq!(
            FusionMethod::parse("Weighted Average", None),
            Ok(FusionMethod::WeightedAverage)
        );
        assert_eq!(
            FusionMethod::parse("WeightedAverage", None),
            Ok(FusionMethod::WeightedAverage)
        );
        assert_eq!(
            FusionMethod::parse("laplacian_pyramid", Some("ignored")),
            Ok(FusionMethod::LaplacianPyramid)
        );
        assert_eq!(
            FusionMethod::parse("Wavelet", Some("db2")),
            Ok(FusionMethod::Wavelet(family("db2")))
        );
        assert_eq!(
            FusionMethod::parse("dwt", Some("bior2.2")),
            Ok(FusionMethod::Wavelet(family("bior2.2")))
        );
    }

    #[test]
    fn every_display_name_parses() {
        for name in FusionMethod::NAMES {
            let method = FusionMethod::parse(name, Some("haar")).expect("known name");
            assert_eq!(method.name(), name);
        }
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            FusionMethod::parse("Median", None),
            Err(Error::UnknownMethod("Median".to_string()))
        );
        assert_eq!(FusionMethod::parse("Wavelet", None), Err(Error::MissingWavelet));
        assert_eq!(
            FusionMethod::parse("Wavelet", Some("gaus1")),
            Err(Error::UnsupportedWavelet("gaus1".to_string()))
        );
    }

    #[test]
    fn unknown_method_produces_no_output() {
        let a = Image::new_fill(4, 4, 100u8);
        let b = Image::new_fill(4, 4, 200u8);
        assert_eq!(
            fuse(&a.as_view(), &b.as_view(), "Sharpest", None),
            Err(Error::UnknownMethod("Sharpest".to_string()))
        );
    }

    #[test]
    fn every_registered_wavelet_fuses_by_name() {
        let a = Image::from_fn(12, 9, |x, y| ((x * 19 + y * 7) % 256) as u8);
        for family in WaveletFamily::all() {
            let out = fuse(&a.as_view(), &a.as_view(), "Wavelet", Some(family.name()))
                .unwrap_or_else(|e| panic!("{family}: {e}"));
            assert_eq!(out.shape(), (12, 9));
            for (&o, &i) in out.data().iter().zip(a.data()) {
                assert!((o as i32 - i as i32).abs() <= 1, "{family}: {o} vs {i}");
            }
        }
    }

    #[test]
    fn weighted_average_by_name() {
        let a = Image::new_fill(5, 5, 100u8);
        let b = Image::new_fill(5, 5, 0u8);
        let out = fuse(&a.as_view(), &b.as_view(), "WeightedAverage", None).expect("fuse");
        assert!(out.data().iter().all(|&v| v == 60));
    }

    #[test]
    fn secondary_is_resampled_to_primary_shape() {
        let a = Image::new_fill(256, 256, 50u8);
        let b = Image::new_fill(128, 128, 150u8);
        let fuser = ImageFuser::default();
        for method in FusionMethod::all(WaveletFamily::HAAR) {
            let out = fuser.fuse(&a.as_view(), &b.as_view(), method).expect("fuse");
            assert_eq!(out.shape(), (256, 256), "{method}");
        }
    }

    #[test]
    fn config_selects_resampling_kernel() {
        let a = Image::new_fill(4, 2, 0u8);
        let b = Image::from_vec(2, 1, vec![0u8, 200]).expect("valid");

        let nearest = ImageFuser::new(FusionConfig {
            resample: Interpolation::Nearest,
            ..FusionConfig::default()
        })
        .expect("valid config");
        let out = nearest
            .fuse(&a.as_view(), &b.as_view(), FusionMethod::Max)
            .expect("fuse");
        assert_eq!(out.data(), &[0, 0, 200, 200, 0, 0, 200, 200]);

        let out = ImageFuser::default()
            .fuse(&a.as_view(), &b.as_view(), FusionMethod::Max)
            .expect("fuse");
        assert_eq!(out.data(), &[0, 50, 150, 200, 0, 50, 150, 200]);
    }

    #[test]
    fn config_drives_alpha_and_depth() {
        let fuser = ImageFuser::new(FusionConfig {
            pyramid_depth: 2,
            alpha: 0.25,
            ..FusionConfig::default()
        })
        .expect("valid config");
        let a = Image::new_fill(8, 8, 200u8);
        let b = Image::new_fill(8, 8, 0u8);
        let out = fuser
            .fuse(&a.as_view(), &b.as_view(), FusionMethod::WeightedAverage)
            .expect("fuse");
        assert!(out.data().iter().all(|&v| v == 50));

        assert!(matches!(
            ImageFuser::new(FusionConfig {
                pyramid_depth: 0,
                alpha: 0.5,
                ..FusionConfig::default()
            }),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let a = Image::new_fill(4, 4, 0u8);
        let empty = Image::from_vec(0, 0, Vec::<u8>::new()).expect("zero-sized");
        assert_eq!(
            fuse(&a.as_view(), &empty.as_view(), "Average", None),
            Err(Error::EmptyOrNonRectangularImage)
        );
    }

    #[test]
    fn from_str_takes_an_optional_family_suffix() {
        assert_eq!("Max".parse::<FusionMethod>(), Ok(FusionMethod::Max));
        assert_eq!(
            "wavelet:coif1".parse::<FusionMethod>(),
            Ok(FusionMethod::Wavelet(family("coif1")))
        );
        assert_eq!("wavelet".parse::<FusionMethod>(), Err(Error::MissingWavelet));
    }

    #[test]
    fn display_includes_wavelet_family() {
        assert_eq!(FusionMethod::Wavelet(family("sym4")).to_string(), "Wavelet (sym4)");
        assert_eq!(FusionMethod::LaplacianPyramid.to_string(), "Laplacian Pyramid");
    }
}
