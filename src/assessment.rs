//! Interpretation of a statistic against tabulated critical values.

/// The outcome of comparing a statistic with a critical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Verdict {
    /// The statistic exceeds the critical value.
    Reject,

    /// The statistic does not exceed the critical value.
    DoNotReject,
}

impl Verdict {
    pub(crate) const fn from_exceeds(exceeds: bool) -> Self {
        if exceeds { Self::Reject } else { Self::DoNotReject }
    }

    /// Returns `true` for [`Verdict::Reject`].
    #[must_use]
    pub const fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}

/// An open interval bounding a p-value, read off a table of critical values.
///
/// A missing bound means the interval is open on that side, e.g. `lower = Some(0.15)` with
/// `upper = None` stands for "p-value > 0.15".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PValueRange {
    /// Exclusive lower bound.
    pub lower: Option<f64>,

    /// Exclusive upper bound.
    pub upper: Option<f64>,
}

impl PValueRange {
    pub(crate) const fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    /// Returns `true` if `p_value` lies strictly inside the range.
    #[must_use]
    pub fn contains(&self, p_value: f64) -> bool {
        self.lower.is_none_or(|lower| p_value > lower)
            && self.upper.is_none_or(|upper| p_value < upper)
    }
}

/// How a table-based test result should be read.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Assessment {
    /// No significance level was fixed (`alpha = 0`); the statistic places the p-value in a range.
    PValueRange(PValueRange),

    /// The statistic was compared with the critical value for a fixed significance level.
    Critical {
        /// The significance level the test was run at.
        alpha: f64,

        /// The tabulated critical value for `alpha`.
        critical_value: f64,

        /// Whether the statistic exceeds `critical_value`.
        verdict: Verdict,
    },
}

impl Assessment {
    /// Returns the verdict for a fixed significance level, or `None` for a p-value range.
    #[must_use]
    pub const fn verdict(&self) -> Option<Verdict> {
        match self {
            Self::PValueRange(_) => None,
            Self::Critical { verdict, .. } => Some(*verdict),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ranges() {
        let above = PValueRange::new(Some(0.15), None);
        assert!(above.contains(0.5));
        assert!(!above.contains(0.15));

        let below = PValueRange::new(None, Some(0.01));
        assert!(below.contains(0.001));
        assert!(!below.contains(0.01));

        let between = PValueRange::new(Some(0.05), Some(0.1));
        assert!(between.contains(0.07));
        assert!(!between.contains(0.2));
    }

    #[test]
    fn verdicts() {
        assert_eq!(Verdict::from_exceeds(true), Verdict::Reject);
        assert_eq!(Verdict::from_exceeds(false), Verdict::DoNotReject);
        assert!(Verdict::Reject.is_reject());

        let range = Assessment::PValueRange(PValueRange::new(Some(0.1), None));
        assert_eq!(range.verdict(), None);
    }
}
