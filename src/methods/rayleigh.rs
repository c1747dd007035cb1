use std::iter::IntoIterator;

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::{Error, Float, Sample, prepare_sample, wrap_angle};

/// Sample size from which the general-alternative p-value skips its finite-sample correction.
const EDGEWORTH_MAX_SAMPLE_SIZE: usize = 50;

/// The result of the Rayleigh test of uniformity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RayleighComputation<T: Float> {
    /// The mean resultant length `r̄` for the general alternative, or the mean projection
    /// `r̄₀ = Σ cos(xᵢ − μ) / n` onto the specified mean direction.
    pub statistic: T,

    /// The approximate p-value, clipped to `[0, 1]`.
    pub p_value: T,

    /// The specified mean direction wrapped into `[0, 2π)`, or `None` for the general
    /// unimodal alternative.
    pub mean_direction: Option<T>,

    /// Number of angles left after removing missing values.
    pub sample_size: usize,
}

/// Performs the Rayleigh test of uniformity for circular data.
///
/// Against the general unimodal alternative (`mean_direction = None`), the statistic is the mean
/// resultant length `r̄` and the p-value is `exp(−n r̄²)`, refined by a second-order
/// correction for samples smaller than 50.
///
/// When a mean direction `μ` is given, the test is against the alternative that the data
/// cluster around `μ`. The statistic is `r̄₀ = Σ cos(xᵢ − μ) / n` and the p-value comes from a
/// normal approximation to `z₀ = √(2n) r̄₀` with Edgeworth corrections. Samples clustered
/// away from `μ` produce a large p-value.
///
/// Takes `data`, an iterator over angles in radians, and the optional `mean_direction` in
/// radians, which is wrapped into `[0, 2π)` before use.
///
/// # Examples
///
/// ```
/// use std::f64::consts::PI;
///
/// use circular::rayleigh;
///
/// let clustered = [3.0, 3.1, 3.2, 3.15, 3.05, 3.3, 2.9, 3.25];
///
/// let general = rayleigh(clustered, None).unwrap();
/// assert!(general.p_value < 0.05);
///
/// let towards = rayleigh(clustered, Some(PI)).unwrap();
/// assert!(towards.p_value < 0.05);
///
/// let away = rayleigh(clustered, Some(0.0)).unwrap();
/// assert!(away.p_value > 0.95);
/// ```
pub fn rayleigh<T: Float, I: IntoIterator<Item = T>>(
    data: I,
    mean_direction: Option<T>,
) -> Result<RayleighComputation<T>, Error> {
    let angles = prepare_sample(data, Sample::X)?;

    let mean_direction = match mean_direction {
        Some(mu) if !mu.is_finite() => {
            return Err(Error::NonFiniteMeanDirection(mu.to_f64().unwrap()));
        },
        Some(mu) => Some(wrap_angle(mu)),
        None => None,
    };

    let (statistic, p_value) = match mean_direction {
        None => general_alternative(&angles),
        Some(mu) => specified_mean_direction(&angles, mu)?,
    };

    tracing::debug!(
        n = angles.len(),
        statistic = statistic.to_f64(),
        p_value = p_value.to_f64(),
        "rayleigh test"
    );

    Ok(RayleighComputation {
        statistic,
        p_value: p_value.max(T::zero()).min(T::one()),
        mean_direction,
        sample_size: angles.len(),
    })
}

fn general_alternative<T: Float>(angles: &[T]) -> (T, T) {
    let n = angles.len();
    let n_t = T::from(n).unwrap();

    let ss: T = sum_if_parallel!(angles, |&x| x.sin());
    let cc: T = sum_if_parallel!(angles, |&x| x.cos());
    let r_bar = ss.hypot(cc) / n_t;
    let z = n_t * r_bar.powi(2);

    let correction = if n < EDGEWORTH_MAX_SAMPLE_SIZE {
        let c = |v: f64| T::from(v).unwrap();

        T::one() + (c(2.0) * z - z.powi(2)) / (c(4.0) * n_t)
            - (c(24.0) * z - c(132.0) * z.powi(2) + c(76.0) * z.powi(3) - c(9.0) * z.powi(4))
                / (c(288.0) * n_t.powi(2))
    } else {
        T::one()
    };

    (r_bar, (-z).exp() * correction)
}

fn specified_mean_direction<T: Float>(angles: &[T], mu: T) -> Result<(T, T), Error> {
    let n = angles.len();
    let n_f64 = n as f64;

    let projection: T = sum_if_parallel!(angles, |&x| (x - mu).cos());
    let r0_bar = projection / T::from(n).unwrap();
    let z0 = T::from(2 * n).unwrap().sqrt() * r0_bar;

    let standard_normal = Normal::new(0.0, 1.0)?;
    let z = z0.to_f64().unwrap();

    let edgeworth = (3.0 * z - z.powi(3)) / (16.0 * n_f64)
        + (15.0 * z + 305.0 * z.powi(3) - 125.0 * z.powi(5) + 9.0 * z.powi(7))
            / (4608.0 * n_f64.powi(2));
    let p_value = standard_normal.sf(z) + standard_normal.pdf(z) * edgeworth;

    Ok((r0_bar, T::from(p_value).unwrap()))
}
