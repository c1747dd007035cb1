use std::f64::consts::TAU;
use std::iter::IntoIterator;

use crate::{Assessment, Error, Float, PValueRange, Sample, Verdict, prepare_sample};

/// The significance levels accepted by [`kuiper`]. `0` asks for a p-value range instead.
pub const KUIPER_SIGNIFICANCE_LEVELS: [f64; 6] = [0.0, 0.01, 0.025, 0.05, 0.1, 0.15];

/// Upper-tail critical values of the modified Kuiper statistic, by significance level.
///
/// Ordered by increasing critical value.
pub const KUIPER_CRITICAL_VALUES: [(f64, f64); 5] =
    [(0.15, 1.537), (0.1, 1.62), (0.05, 1.747), (0.025, 1.862), (0.01, 2.001)];

/// The result of Kuiper's test of uniformity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct KuiperComputation<T: Float> {
    /// The modified Kuiper statistic `V`.
    pub statistic: T,

    /// The significance level the test was run at (`0` for none).
    pub alpha: f64,

    /// Number of angles left after removing missing values.
    pub sample_size: usize,
}

impl<T: Float> KuiperComputation<T> {
    /// The critical value for [`alpha`](Self::alpha), or `None` when `alpha` is `0`.
    #[must_use]
    pub fn critical_value(&self) -> Option<f64> {
        KUIPER_CRITICAL_VALUES
            .iter()
            .find(|&&(alpha, _)| alpha == self.alpha)
            .map(|&(_, critical)| critical)
    }

    /// Reads the statistic against [`KUIPER_CRITICAL_VALUES`].
    ///
    /// With `alpha = 0` this brackets the p-value; otherwise `V` is compared with the single
    /// critical value for `alpha`.
    #[must_use]
    pub fn assessment(&self) -> Assessment {
        let statistic = self.statistic.to_f64().unwrap();

        match self.critical_value() {
            Some(critical_value) => Assessment::Critical {
                alpha: self.alpha,
                critical_value,
                verdict: Verdict::from_exceeds(statistic > critical_value),
            },
            None => Assessment::PValueRange(p_value_range(statistic)),
        }
    }
}

fn p_value_range(statistic: f64) -> PValueRange {
    let mut upper = None;

    for &(alpha, critical) in &KUIPER_CRITICAL_VALUES {
        if statistic < critical {
            return PValueRange::new(Some(alpha), upper);
        }
        upper = Some(alpha);
    }

    PValueRange::new(None, upper)
}

/// Performs Kuiper's test of uniformity for circular data.
///
/// The test compares the empirical distribution of the angles with the uniform distribution on
/// the circle. It uses both the largest positive deviation `D⁺` and the largest negative
/// deviation `D⁻`, so unlike Kolmogorov-Smirnov the statistic does not depend on where the
/// circle is cut open. The returned statistic is Stephens' modified form
/// `V = (D⁺ + D⁻)(√n + 0.155 + 0.24/√n)`.
///
/// Takes `data`, an iterator over angles in radians, and `alpha`, which must be one of
/// [`KUIPER_SIGNIFICANCE_LEVELS`]. Missing values are removed and the angles are wrapped into
/// `[0, 2π)` before the statistic is computed.
///
/// An empty sample yields [`Error::NoObservations`] before `alpha` is checked; an unsupported
/// `alpha` yields [`Error::InvalidSignificanceLevel`].
///
/// # Examples
///
/// ```
/// use std::f64::consts::{FRAC_PI_2, PI};
///
/// use circular::{Error, kuiper};
///
/// let spread = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];
/// let result = kuiper(spread, 0.05).unwrap();
/// assert!((result.statistic - 0.56875).abs() < 1e-12);
/// assert!(!result.assessment().verdict().unwrap().is_reject());
///
/// let invalid = kuiper(spread, 0.2);
/// assert!(matches!(invalid, Err(Error::InvalidSignificanceLevel { .. })));
/// ```
pub fn kuiper<T: Float, I: IntoIterator<Item = T>>(
    data: I,
    alpha: f64,
) -> Result<KuiperComputation<T>, Error> {
    let mut angles = prepare_sample(data, Sample::X)?;

    if !KUIPER_SIGNIFICANCE_LEVELS.contains(&alpha) {
        return Err(Error::InvalidSignificanceLevel {
            given: alpha,
            allowed: &KUIPER_SIGNIFICANCE_LEVELS,
        });
    }

    let n = angles.len();
    let n_t = T::from(n).unwrap();
    let tau = T::from(TAU).unwrap();

    sort_angles!(angles.as_mut_slice());

    let (d_plus, d_minus) = angles.iter().enumerate().fold(
        (T::neg_infinity(), T::neg_infinity()),
        |(d_plus, d_minus), (i, &angle)| {
            let u = angle / tau;
            let above = T::from(i + 1).unwrap() / n_t - u;
            let below = u - T::from(i).unwrap() / n_t;
            (d_plus.max(above), d_minus.max(below))
        },
    );

    let sqrt_n = n_t.sqrt();
    let statistic = (d_plus + d_minus)
        * (sqrt_n + T::from(0.155).unwrap() + T::from(0.24).unwrap() / sqrt_n);

    tracing::debug!(n, alpha, statistic = statistic.to_f64(), "kuiper test");

    Ok(KuiperComputation {
        statistic,
        alpha,
        sample_size: n,
    })
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn single_angle() {
        // D+ = D- = 0.5, so V = 1 + 0.155 + 0.24
        let result = kuiper([PI], 0.0).unwrap();
        assert!((result.statistic - 1.395).abs() < 1e-12);
        assert_eq!(result.sample_size, 1);
    }

    #[test]
    fn wraps_before_ranking() {
        let wrapped = kuiper([0.3, 1.2, 4.0, 5.5], 0.0).unwrap();
        let raw = kuiper([0.3 + TAU, 1.2 - TAU, 4.0 - 2.0 * TAU, 5.5 + 3.0 * TAU], 0.0).unwrap();

        assert!((wrapped.statistic - raw.statistic).abs() < 1e-9);
    }

    #[test]
    fn ignores_missing_values() {
        let clean = kuiper([0.0, FRAC_PI_2, PI], 0.0).unwrap();
        let dirty = kuiper([f64::NAN, 0.0, FRAC_PI_2, f64::NAN, PI], 0.0).unwrap();

        assert_eq!(clean, dirty);
    }

    #[test]
    fn statistic_is_non_negative() {
        let clustered = kuiper([1.0, 1.0, 1.0, 1.0], 0.0).unwrap();
        assert!(clustered.statistic > 0.0);

        let spread = kuiper([0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2], 0.0).unwrap();
        assert!(spread.statistic >= 0.0);
    }

    #[test]
    fn runs_on_f32() {
        let result = kuiper([0.0_f32, 1.5, 3.1, 4.7], 0.0).unwrap();
        assert!(result.statistic > 0.0);
    }

    #[test]
    fn empty_sample_short_circuits_alpha_validation() {
        let empty: [f64; 0] = [];

        assert_eq!(kuiper(empty, 0.2), Err(Error::NoObservations(Sample::X)));
        assert_eq!(kuiper([f64::NAN], 0.05), Err(Error::NoObservations(Sample::X)));
    }

    #[test]
    fn rejects_untabulated_alpha() {
        for alpha in [0.2, 0.001, -0.05, f64::NAN] {
            let result = kuiper([0.1, 0.2, 0.3], alpha);
            assert!(
                matches!(result, Err(Error::InvalidSignificanceLevel { allowed, .. }) if allowed == KUIPER_SIGNIFICANCE_LEVELS),
                "alpha {alpha} was accepted"
            );
        }
    }

    #[test]
    fn p_value_ranges() {
        let cases = [
            (1.0, Some(0.15), None),
            (1.537, Some(0.1), Some(0.15)),
            (1.7, Some(0.05), Some(0.1)),
            (1.8, Some(0.025), Some(0.05)),
            (1.9, Some(0.01), Some(0.025)),
            (2.001, None, Some(0.01)),
            (5.0, None, Some(0.01)),
        ];

        for (statistic, lower, upper) in cases {
            assert_eq!(p_value_range(statistic), PValueRange::new(lower, upper), "V = {statistic}");
        }
    }

    #[test]
    fn critical_value_comparison() {
        let computation = KuiperComputation {
            statistic: 1.8,
            alpha: 0.05,
            sample_size: 30,
        };

        assert_eq!(computation.critical_value(), Some(1.747));
        assert_eq!(
            computation.assessment(),
            Assessment::Critical {
                alpha: 0.05,
                critical_value: 1.747,
                verdict: Verdict::Reject,
            }
        );

        let strict = KuiperComputation {
            alpha: 0.01,
            ..computation
        };
        assert_eq!(strict.assessment().verdict(), Some(Verdict::DoNotReject));
    }

    #[test]
    fn zero_alpha_brackets_p_value() {
        let computation = KuiperComputation {
            statistic: 1.0_f64,
            alpha: 0.0,
            sample_size: 30,
        };

        assert_eq!(computation.critical_value(), None);
        assert_eq!(
            computation.assessment(),
            Assessment::PValueRange(PValueRange::new(Some(0.15), None))
        );
    }
}
