//! Preparation of raw angular measurements.
//!
//! Every test runs its input through [`prepare_sample`] before computing anything: missing
//! values are dropped and the remaining angles are wrapped into `[0, 2π)`.

use std::f64::consts::TAU;
use std::fmt;

use crate::{Error, Float};

/// Names a sample supplied to a test.
///
/// One-sample tests only ever use [`Sample::X`]; Watson's two-sample test uses both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Sample {
    /// The first (or only) sample.
    X,

    /// The second sample of a two-sample test.
    Y,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Wraps an angle in radians into `[0, 2π)`.
///
/// Negative and arbitrarily large angles are reduced modulo `2π`. Wrapping an angle that is
/// already in range returns it unchanged.
///
/// # Examples
///
/// ```
/// use std::f64::consts::PI;
///
/// use circular::wrap_angle;
///
/// assert!((wrap_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert!((wrap_angle(5.0 * PI) - PI).abs() < 1e-12);
/// assert_eq!(wrap_angle(1.0), 1.0);
/// ```
#[must_use]
pub fn wrap_angle<T: Float>(angle: T) -> T {
    let tau = T::from(TAU).unwrap();
    let mut wrapped = angle % tau;

    if wrapped < T::zero() {
        wrapped += tau;
    }

    // A tiny negative remainder rounds up to exactly 2π.
    if wrapped >= tau { T::zero() } else { wrapped }
}

/// Strips missing values from `data` and wraps what remains into `[0, 2π)`.
///
/// `NaN` entries are treated as missing. Infinite entries have no position on the circle and
/// are dropped as well. `sample` names the input in the [`Error::NoObservations`] returned when
/// nothing is left.
///
/// # Examples
///
/// ```
/// use std::f64::consts::PI;
///
/// use circular::{Error, Sample, prepare_sample};
///
/// let prepared = prepare_sample([f64::NAN, -PI, 3.0 * PI], Sample::X).unwrap();
/// assert_eq!(prepared.len(), 2);
/// assert!(prepared.iter().all(|&angle| (angle - PI).abs() < 1e-12));
///
/// let empty = prepare_sample([f64::NAN], Sample::Y);
/// assert_eq!(empty, Err(Error::NoObservations(Sample::Y)));
/// ```
pub fn prepare_sample<T: Float, I: IntoIterator<Item = T>>(
    data: I,
    sample: Sample,
) -> Result<Vec<T>, Error> {
    let mut dropped = 0_usize;
    let prepared: Vec<T> = data
        .into_iter()
        .filter(|angle| {
            let keep = angle.is_finite();
            dropped += usize::from(!keep);
            keep
        })
        .map(wrap_angle)
        .collect();

    if dropped > 0 {
        tracing::debug!(%sample, dropped, "removed missing values");
    }

    if prepared.is_empty() {
        tracing::warn!(%sample, "no observations (at least after removing missing values)");
        return Err(Error::NoObservations(sample));
    }

    Ok(prepared)
}
