use std::iter::IntoIterator;

use crate::{Assessment, Error, Float, PValueRange, Sample, Verdict, prepare_sample};

/// Upper-tail critical values of Watson's two-sample U² statistic, by significance level.
///
/// The `0` entry is a sentinel no U² statistic can exceed.
pub const WATSON_TWO_CRITICAL_VALUES: [(f64, f64); 5] =
    [(0.0, 99.0), (0.001, 0.385), (0.01, 0.268), (0.05, 0.187), (0.1, 0.152)];

/// Critical value used for any significance level missing from [`WATSON_TWO_CRITICAL_VALUES`].
pub const WATSON_TWO_UNTABULATED_CRITICAL_VALUE: f64 = 99.0;

/// Combined sample size below which the asymptotic critical values are unreliable.
pub const WATSON_TWO_MIN_TABULATED_SIZE: usize = 18;

/// The result of Watson's two-sample test of homogeneity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct WatsonTwoComputation<T: Float> {
    /// Watson's U² statistic.
    pub statistic: T,

    /// The significance level the test was run at (`0` for none).
    pub alpha: f64,

    /// Size of the first sample after removing missing values.
    pub x_size: usize,

    /// Size of the second sample after removing missing values.
    pub y_size: usize,
}

impl<T: Float> WatsonTwoComputation<T> {
    /// Returns `true` when the combined sample is too small for the tabulated critical values.
    #[must_use]
    pub const fn is_underpowered(&self) -> bool {
        self.x_size + self.y_size < WATSON_TWO_MIN_TABULATED_SIZE
    }

    /// The critical value for [`alpha`](Self::alpha).
    ///
    /// Significance levels without a table entry fall back to
    /// [`WATSON_TWO_UNTABULATED_CRITICAL_VALUE`], which never leads to a rejection.
    #[must_use]
    pub fn critical_value(&self) -> f64 {
        WATSON_TWO_CRITICAL_VALUES
            .iter()
            .find(|&&(alpha, _)| alpha == self.alpha)
            .map_or(WATSON_TWO_UNTABULATED_CRITICAL_VALUE, |&(_, critical)| critical)
    }

    /// Reads the statistic against [`WATSON_TWO_CRITICAL_VALUES`].
    ///
    /// With `alpha = 0` this brackets the p-value; otherwise U² is compared with
    /// [`critical_value`](Self::critical_value).
    #[must_use]
    pub fn assessment(&self) -> Assessment {
        let statistic = self.statistic.to_f64().unwrap();

        if self.alpha == 0.0 {
            return Assessment::PValueRange(p_value_range(statistic));
        }

        let critical_value = self.critical_value();

        Assessment::Critical {
            alpha: self.alpha,
            critical_value,
            verdict: Verdict::from_exceeds(statistic > critical_value),
        }
    }
}

fn p_value_range(statistic: f64) -> PValueRange {
    let mut lower = None;

    for &(alpha, critical) in WATSON_TWO_CRITICAL_VALUES.iter().skip(1) {
        if statistic > critical {
            return PValueRange::new(lower, Some(alpha));
        }
        lower = Some(alpha);
    }

    PValueRange::new(lower, None)
}

/// Performs Watson's two-sample test of homogeneity for circular data.
///
/// The test asks whether `x` and `y` were drawn from the same distribution on the circle. Both
/// samples are sorted and merged; `d_k` is the difference between the empirical distribution
/// functions of `y` and `x` after the `k`-th merged point, and
/// `U² = n₁n₂/n² · Σ (d_k − d̄)²`.
///
/// Angles equal across the two samples are merged with the `x` value first.
///
/// Takes two iterators over angles in radians and a significance level `alpha`. Use `0` to get a
/// p-value range from [`WatsonTwoComputation::assessment`]. A level missing from
/// [`WATSON_TWO_CRITICAL_VALUES`] is not an error; it falls back to
/// [`WATSON_TWO_UNTABULATED_CRITICAL_VALUE`].
///
/// If either sample is empty after removing missing values, returns
/// [`Error::NoObservations`] naming that sample (`x` is checked first).
///
/// # Examples
///
/// ```
/// use circular::{Error, Sample, watson_two};
///
/// let x = [0.1, 0.9, 1.7, 2.6, 3.4, 4.2, 5.1, 5.9];
/// let y = [0.5, 1.3, 2.1, 3.0, 3.8, 4.6, 5.5, 6.2];
/// let result = watson_two(x, y, 0.05).unwrap();
/// assert!(result.statistic < 0.187);
/// assert!(result.is_underpowered());
///
/// let empty: [f64; 0] = [];
/// assert_eq!(watson_two(x, empty, 0.05), Err(Error::NoObservations(Sample::Y)));
/// ```
pub fn watson_two<T: Float, I: IntoIterator<Item = T>, J: IntoIterator<Item = T>>(
    x: I,
    y: J,
    alpha: f64,
) -> Result<WatsonTwoComputation<T>, Error> {
    let mut x = prepare_sample(x, Sample::X)?;
    let mut y = prepare_sample(y, Sample::Y)?;

    sort_angles!(x.as_mut_slice());
    sort_angles!(y.as_mut_slice());

    let (n1, n2) = (x.len(), y.len());
    let n = n1 + n2;
    let n1_t = T::from(n1).unwrap();
    let n2_t = T::from(n2).unwrap();
    let n_t = T::from(n).unwrap();

    let mut d = Vec::with_capacity(n);
    let (mut a, mut b) = (0_usize, 0_usize);

    while a < n1 || b < n2 {
        if b == n2 || (a < n1 && x[a] <= y[b]) {
            a += 1;
        } else {
            b += 1;
        }
        d.push(T::from(b).unwrap() / n2_t - T::from(a).unwrap() / n1_t);
    }

    let d_sum: T = sum_if_parallel!(&d, |&d_k| d_k);
    let d_bar = d_sum / n_t;
    let sum_sq: T = sum_if_parallel!(&d, |&d_k| (d_k - d_bar).powi(2));
    let statistic = n1_t * n2_t / n_t.powi(2) * sum_sq;

    tracing::debug!(n1, n2, alpha, statistic = statistic.to_f64(), "watson two-sample test");

    Ok(WatsonTwoComputation {
        statistic,
        alpha,
        x_size: n1,
        y_size: n2,
    })
}
