use core::fmt;
use core::str::FromStr;

use imf_core::Error;

use crate::tables::{FilterSpec, REGISTRY};

/// Construction behind a [`WaveletFamily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveletKind {
    Haar,
    Daubechies,
    Symlet,
    Coiflet,
    /// Spline biorthogonal pair (`bior<r>.<d>`).
    Biorthogonal,
    /// Dual of a spline pair with the analysis and synthesis filters
    /// swapped (`rbio<r>.<d>`).
    ReverseBiorthogonal,
}

impl WaveletKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Haar => "Haar",
            Self::Daubechies => "Daubechies",
            Self::Symlet => "Symlets",
            Self::Coiflet => "Coiflets",
            Self::Biorthogonal => "Biorthogonal",
            Self::ReverseBiorthogonal => "Reverse biorthogonal",
        }
    }

    /// Whether analysis and synthesis use the same scaling filter.
    pub fn is_orthogonal(self) -> bool {
        !matches!(self, Self::Biorthogonal | Self::ReverseBiorthogonal)
    }
}

impl fmt::Display for WaveletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A registered discrete wavelet: `haar`, `db1`..`db38`, `sym2`..`sym20`,
/// `coif1`..`coif5`, and the spline pairs `bior<r>.<d>` / `rbio<r>.<d>`.
///
/// Values are cheap handles into a static coefficient registry and can
/// only be obtained from [`WaveletFamily::from_name`],
/// [`WaveletFamily::all`] or the associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WaveletFamily {
    index: usize,
}

impl WaveletFamily {
    /// The Haar wavelet, first entry of the registry.
    pub const HAAR: Self = Self { index: 0 };

    /// Every registered family, in listing order.
    pub fn all() -> impl ExactSizeIterator<Item = WaveletFamily> + Clone {
        (0..REGISTRY.len()).map(|index| Self { index })
    }

    /// Looks a family up by its short name (`"haar"`, `"db2"`,
    /// `"bior2.2"`, ...), ignoring ASCII case and surrounding whitespace.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        let wanted = name.trim();
        REGISTRY
            .iter()
            .position(|spec| spec.name.eq_ignore_ascii_case(wanted))
            .map(|index| Self { index })
            .ok_or_else(|| Error::UnsupportedWavelet(name.to_string()))
    }

    fn spec(self) -> &'static FilterSpec {
        &REGISTRY[self.index]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn kind(self) -> WaveletKind {
        self.spec().kind
    }

    pub fn is_orthogonal(self) -> bool {
        self.kind().is_orthogonal()
    }

    /// Analysis low-pass filter, applied by correlation.
    ///
    /// Always sums to `√2`. For orthogonal kinds it equals
    /// [`WaveletFamily::rec_lo`] and is orthonormal under even shifts.
    pub fn dec_lo(self) -> &'static [f64] {
        self.spec().dec_lo
    }

    /// Synthesis low-pass filter, zero-padded to the length of
    /// [`WaveletFamily::dec_lo`].
    pub fn rec_lo(self) -> &'static [f64] {
        self.spec().rec_lo
    }

    /// Number of taps of every filter in the bank.
    pub fn filter_len(self) -> usize {
        self.dec_lo().len()
    }
}

impl fmt::Display for WaveletFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveletFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use imf_core::Error;

    use super::{WaveletFamily, WaveletKind};

    const SQRT_2: f64 = core::f64::consts::SQRT_2;

    fn family(name: &str) -> WaveletFamily {
        WaveletFamily::from_name(name).expect("registered family")
    }

    /// `Σ_k a[k] · b[k + shift]` over the overlapping taps.
    fn shifted_dot(a: &[f64], b: &[f64], shift: isize) -> f64 {
        (0..a.len() as isize)
            .filter_map(|k| {
                let j = k + shift;
                (0..b.len() as isize)
                    .contains(&j)
                    .then(|| a[k as usize] * b[j as usize])
            })
            .sum()
    }

    fn assert_filters_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).abs() < 1e-12, "{x} vs {y}");
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(WaveletFamily::from_name("haar"), Ok(WaveletFamily::HAAR));
        assert_eq!(family(" DB3 ").name(), "db3");
        assert_eq!("Coif1".parse::<WaveletFamily>().map(|f| f.name()), Ok("coif1"));
        assert_eq!(family("BIOR2.2").name(), "bior2.2");
    }

    #[test]
    fn registry_lists_every_discrete_family_once() {
        let mut expected = vec!["haar".to_string()];
        expected.extend((1..=38).map(|n| format!("db{n}")));
        expected.extend((2..=20).map(|n| format!("sym{n}")));
        expected.extend((1..=5).map(|n| format!("coif{n}")));
        let pairs = [
            "1.1", "1.3", "1.5", "2.2", "2.4", "2.6", "2.8", "3.1", "3.3", "3.5", "3.7", "3.9",
            "4.4",
        ];
        expected.extend(pairs.iter().map(|p| format!("bior{p}")));
        expected.extend(pairs.iter().map(|p| format!("rbio{p}")));

        let names: Vec<&str> = WaveletFamily::all().map(|f| f.name()).collect();
        assert_eq!(names, expected);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["dmey", "gaus1", "db0", "db39", "sym1", "coif6", "bior5.5", "rbio2.3"] {
            assert_eq!(
                WaveletFamily::from_name(name),
                Err(Error::UnsupportedWavelet(name.to_string()))
            );
        }
        assert!(WaveletFamily::from_name("").is_err());
    }

    #[test]
    fn names_round_trip_through_display() {
        for family in WaveletFamily::all() {
            assert_eq!(WaveletFamily::from_name(&family.to_string()), Ok(family));
        }
    }

    #[test]
    fn kinds_follow_the_name_prefix() {
        assert_eq!(WaveletFamily::HAAR.kind(), WaveletKind::Haar);
        assert_eq!(family("db10").kind(), WaveletKind::Daubechies);
        assert_eq!(family("sym8").kind(), WaveletKind::Symlet);
        assert_eq!(family("coif2").kind(), WaveletKind::Coiflet);
        assert_eq!(family("bior1.3").kind(), WaveletKind::Biorthogonal);
        assert_eq!(family("rbio1.3").kind(), WaveletKind::ReverseBiorthogonal);
        assert!(family("coif5").is_orthogonal());
        assert!(!family("bior4.4").is_orthogonal());
    }

    #[test]
    fn filter_lengths_match_the_construction() {
        for n in 1..=38 {
            assert_eq!(family(&format!("db{n}")).filter_len(), 2 * n);
        }
        for n in 2..=20 {
            assert_eq!(family(&format!("sym{n}")).filter_len(), 2 * n);
        }
        for n in 1..=5 {
            assert_eq!(family(&format!("coif{n}")).filter_len(), 6 * n);
        }
        for family in WaveletFamily::all() {
            assert_eq!(family.dec_lo().len(), family.rec_lo().len(), "{family}");
            assert!(family.filter_len().is_multiple_of(2), "{family}");
        }
    }

    #[test]
    fn known_coefficients() {
        let s3 = 3f64.sqrt();
        let denom = 4.0 * SQRT_2;
        let db2 = [(1.0 + s3) / denom, (3.0 + s3) / denom, (3.0 - s3) / denom, (1.0 - s3) / denom];
        for (&got, want) in family("db2").dec_lo().iter().zip(db2) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }

        assert_filters_close(family("db1").dec_lo(), WaveletFamily::HAAR.dec_lo());
        assert_filters_close(family("bior1.1").dec_lo(), WaveletFamily::HAAR.dec_lo());
        assert_filters_close(family("bior1.1").rec_lo(), WaveletFamily::HAAR.dec_lo());
        // Symlets below four vanishing moments coincide with Daubechies.
        assert_filters_close(family("sym2").dec_lo(), family("db2").dec_lo());
        assert_filters_close(family("sym3").dec_lo(), family("db3").dec_lo());

        // bior2.2 synthesis is the hat function (1, 2, 1) / (2√2).
        let hat: Vec<f64> = family("bior2.2")
            .rec_lo()
            .iter()
            .copied()
            .filter(|v| *v != 0.0)
            .collect();
        let want = [0.25 * SQRT_2, 0.5 * SQRT_2, 0.25 * SQRT_2];
        assert_eq!(hat.len(), want.len());
        for (got, want) in hat.iter().zip(want) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
    }

    #[test]
    fn orthogonal_filters_are_orthonormal() {
        for family in WaveletFamily::all().filter(|f| f.is_orthogonal()) {
            let h = family.dec_lo();
            assert_eq!(h, family.rec_lo(), "{family}");

            let sum: f64 = h.iter().sum();
            assert!((sum - SQRT_2).abs() < 1e-9, "{family}: sum {sum}");
            for shift in (0..h.len() as isize).step_by(2) {
                let dot = shifted_dot(h, h, shift);
                let want = if shift == 0 { 1.0 } else { 0.0 };
                assert!((dot - want).abs() < 1e-9, "{family}: shift {shift} dot {dot}");
            }
        }
    }

    #[test]
    fn biorthogonal_pairs_are_dual() {
        for family in WaveletFamily::all().filter(|f| !f.is_orthogonal()) {
            let (dec, rec) = (family.dec_lo(), family.rec_lo());
            let dec_sum: f64 = dec.iter().sum();
            let rec_sum: f64 = rec.iter().sum();
            assert!((dec_sum - SQRT_2).abs() < 1e-9, "{family}: dec sum {dec_sum}");
            assert!((rec_sum - SQRT_2).abs() < 1e-9, "{family}: rec sum {rec_sum}");

            let len = dec.len() as isize;
            for shift in (-len + 2..len).step_by(2) {
                let dot = shifted_dot(rec, dec, shift);
                let want = if shift == 0 { 1.0 } else { 0.0 };
                assert!((dot - want).abs() < 1e-9, "{family}: shift {shift} dot {dot}");
            }
        }
    }

    #[test]
    fn reverse_pairs_swap_the_filters() {
        for family in WaveletFamily::all().filter(|f| f.kind() == WaveletKind::Biorthogonal) {
            let suffix = &family.name()["bior".len()..];
            let reverse = WaveletFamily::from_name(&format!("rbio{suffix}")).expect("registered");
            assert_eq!(reverse.dec_lo(), family.rec_lo(), "{family}");
            assert_eq!(reverse.rec_lo(), family.dec_lo(), "{family}");
        }
    }
}
