use thiserror::Error as ThisError;

use crate::Sample;

/// Represents the outcomes that stop a circular test from producing a statistic.
#[derive(Debug, ThisError, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The sample held no usable angles once missing values were removed.
    ///
    /// This is an expected outcome rather than a fault: callers can match on it and
    /// report that the test was skipped. See [`Error::is_no_observations`].
    #[error("'{0}': No observations (at least after removing missing values).")]
    NoObservations(Sample),

    /// The significance level is not one of the values the test has critical values for.
    #[error("'alpha' must be one of {allowed:?}, but was given {given}.")]
    InvalidSignificanceLevel {
        given: f64,
        allowed: &'static [f64],
    },

    /// The specified mean direction is `NaN` or infinite.
    #[error("The mean direction must be finite, but was given {0}.")]
    NonFiniteMeanDirection(f64),

    /// See [`statrs::distribution::NormalError`].
    #[error("{0}")]
    NormalDistributionError(#[from] statrs::distribution::NormalError),
}

impl Error {
    /// Returns `true` if the test was skipped because a sample was empty.
    #[must_use]
    pub const fn is_no_observations(&self) -> bool {
        matches!(self, Self::NoObservations(_))
    }
}
