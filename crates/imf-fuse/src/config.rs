use imf_core::{Error, Interpolation};
use serde::{Deserialize, Serialize};

/// Tunable parameters of the fusion rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Number of Laplacian pyramid levels: the base plus `depth - 1`
    /// halvings.
    pub pyramid_depth: usize,
    /// Weight of the primary image in the weighted average, in `[0, 1]`.
    pub alpha: f32,
    /// Kernel used to bring the secondary image to the primary's shape.
    pub resample: Interpolation,
}

impl FusionConfig {
    pub const DEFAULT_PYRAMID_DEPTH: usize = 5;
    pub const DEFAULT_ALPHA: f32 = 0.6;

    pub fn validate(&self) -> Result<(), Error> {
        if self.pyramid_depth == 0 {
            return Err(Error::InvalidConfig(
                "pyramid_depth must be at least 1".to_string(),
            ));
        }
        check_alpha(self.alpha)
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            pyramid_depth: Self::DEFAULT_PYRAMID_DEPTH,
            alpha: Self::DEFAULT_ALPHA,
            resample: Interpolation::Bilinear,
        }
    }
}

pub(crate) fn check_alpha(alpha: f32) -> Result<(), Error> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(Error::InvalidConfig(format!(
            "alpha must lie in [0, 1], got {alpha}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use imf_core::{Error, Interpolation};

    use super::FusionConfig;

    #[test]
    fn defaults_match_reference_constants() {
        let cfg = FusionConfig::default();
        assert_eq!(cfg.pyramid_depth, 5);
        assert!((cfg.alpha - 0.6).abs() < f32::EPSILON);
        assert_eq!(cfg.resample, Interpolation::Bilinear);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let zero_depth = FusionConfig {
            pyramid_depth: 0,
            ..FusionConfig::default()
        };
        assert!(matches!(zero_depth.validate(), Err(Error::InvalidConfig(_))));

        for alpha in [-0.1f32, 1.5, f32::NAN] {
            let cfg = FusionConfig {
                alpha,
                ..FusionConfig::default()
            };
            assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))), "{alpha}");
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: FusionConfig = serde_json::from_str(r#"{ "alpha": 0.25 }"#).expect("parse");
        assert_eq!(cfg.pyramid_depth, 5);
        assert!((cfg.alpha - 0.25).abs() < f32::EPSILON);
        assert_eq!(cfg.resample, Interpolation::Bilinear);

        let cfg: FusionConfig =
            serde_json::from_str(r#"{ "resample": "nearest" }"#).expect("parse");
        assert_eq!(cfg.resample, Interpolation::Nearest);
        assert!(serde_json::from_str::<FusionConfig>(r#"{ "resample": "cubic" }"#).is_err());

        let text = serde_json::to_string(&FusionConfig::default()).expect("serialize");
        let back: FusionConfig = serde_json::from_str(&text).expect("parse");
        assert_eq!(back, FusionConfig::default());
    }
}
