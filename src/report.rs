//! Plain-text reports for test results.
//!
//! Every computation implements [`Display`](fmt::Display). The formatter precision sets the
//! number of digits printed for statistics and p-values and defaults to 4:
//!
//! ```
//! use circular::rayleigh;
//!
//! let result = rayleigh([0.0, 0.0, 0.0, 0.0], None).unwrap();
//! let report = format!("{result:.2}");
//!
//! assert!(report.contains("General Unimodal Alternative"));
//! assert!(report.contains("Test Statistic: 1.00"));
//! assert!(report.contains("P-value: 0.01"));
//! ```

use std::fmt;

use crate::{
    Assessment,
    Float,
    KuiperComputation,
    PValueRange,
    RayleighComputation,
    Verdict,
    WatsonTwoComputation,
};

const DEFAULT_DIGITS: usize = 4;

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("Reject Null Hypothesis"),
            Self::DoNotReject => f.write_str("Do Not Reject Null Hypothesis"),
        }
    }
}

/// Prints a tabulated level with at least two decimals, so `0.1` reads `0.10`.
struct Level(f64);

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shortest = self.0.to_string();
        let decimals = shortest.split_once('.').map_or(0, |(_, frac)| frac.len()).max(2);

        write!(f, "{:.decimals$}", self.0)
    }
}

impl fmt::Display for PValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower.map(Level), self.upper.map(Level)) {
            (Some(lower), Some(upper)) => write!(f, "{lower} < P-value < {upper}"),
            (Some(lower), None) => write!(f, "P-value > {lower}"),
            (None, Some(upper)) => write!(f, "P-value < {upper}"),
            (None, None) => f.write_str("0 <= P-value <= 1"),
        }
    }
}

fn write_assessment(
    f: &mut fmt::Formatter<'_>,
    assessment: &Assessment,
    digits: usize,
) -> fmt::Result {
    match assessment {
        Assessment::PValueRange(range) => writeln!(f, "{range}\n"),
        Assessment::Critical {
            alpha,
            critical_value,
            verdict,
        } => {
            writeln!(f, "Level {alpha} Critical Value: {critical_value:.digits$}")?;
            writeln!(f, "{verdict}\n")
        },
    }
}

impl<T: Float> fmt::Display for KuiperComputation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DIGITS);
        let statistic = self.statistic.to_f64().unwrap();

        writeln!(f, "\n      Kuiper's Test of Uniformity\n")?;
        writeln!(f, "Test Statistic: {statistic:.digits$}")?;
        write_assessment(f, &self.assessment(), DEFAULT_DIGITS)
    }
}

impl<T: Float> fmt::Display for WatsonTwoComputation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DIGITS);
        let statistic = self.statistic.to_f64().unwrap();

        writeln!(f, "\n      Watson's Two-Sample Test of Homogeneity\n")?;
        if self.is_underpowered() {
            writeln!(f, "Warning: Total Sample Size < 18: Consult tabulated critical values\n")?;
        }
        writeln!(f, "Test Statistic: {statistic:.digits$}")?;
        write_assessment(f, &self.assessment(), digits)
    }
}

impl<T: Float> fmt::Display for RayleighComputation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DIGITS);
        let statistic = self.statistic.to_f64().unwrap();
        let p_value = self.p_value.to_f64().unwrap();

        writeln!(f, "\n      Rayleigh Test of Uniformity")?;
        match self.mean_direction.and_then(|mu| mu.to_f64()) {
            Some(mu) => writeln!(
                f,
                "       Alternative with Specified Mean Direction: {mu:.digits$}\n"
            )?,
            None => writeln!(f, "       General Unimodal Alternative\n")?,
        }
        writeln!(f, "Test Statistic: {statistic:.digits$}")?;
        writeln!(f, "P-value: {p_value:.digits$}\n")
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn kuiper_range_report() {
        let computation = KuiperComputation {
            statistic: 1.9_f64,
            alpha: 0.0,
            sample_size: 40,
        };

        let expected = indoc! {"

                  Kuiper's Test of Uniformity

            Test Statistic: 1.9000
            0.01 < P-value < 0.025

        "};

        assert_eq!(computation.to_string(), expected);
    }

    #[test]
    fn kuiper_critical_report() {
        let computation = KuiperComputation {
            statistic: 1.23456_f64,
            alpha: 0.05,
            sample_size: 40,
        };

        let report = format!("{computation:.2}");

        assert!(report.contains("Test Statistic: 1.23\n"));
        assert!(report.contains("Level 0.05 Critical Value: 1.7470\n"));
        assert!(report.ends_with("Do Not Reject Null Hypothesis\n\n"));
    }

    #[test]
    fn watson_report_warns_on_small_samples() {
        let computation = WatsonTwoComputation {
            statistic: 0.4_f64,
            alpha: 0.0,
            x_size: 5,
            y_size: 6,
        };

        let report = computation.to_string();

        assert!(report.contains("Warning: Total Sample Size < 18"));
        assert!(report.contains("P-value < 0.001"));
        assert!(report.ends_with("P-value < 0.001\n\n"));
    }

    #[test]
    fn watson_report_uses_sentinel_for_untabulated_alpha() {
        let computation = WatsonTwoComputation {
            statistic: 0.4_f64,
            alpha: 0.2,
            x_size: 20,
            y_size: 20,
        };

        let report = format!("{computation:.3}");

        assert!(!report.contains("Warning"));
        assert!(report.contains("Level 0.2 Critical Value: 99.000\n"));
        assert!(report.contains("Do Not Reject Null Hypothesis"));
    }

    #[test]
    fn rayleigh_report_names_mean_direction() {
        let computation = RayleighComputation {
            statistic: 0.5_f64,
            p_value: 0.0123,
            mean_direction: Some(std::f64::consts::PI),
            sample_size: 12,
        };

        let expected = indoc! {"

                  Rayleigh Test of Uniformity
                   Alternative with Specified Mean Direction: 3.1416

            Test Statistic: 0.5000
            P-value: 0.0123

        "};

        assert_eq!(computation.to_string(), expected);
    }

    #[test]
    fn p_value_range_text() {
        assert_eq!(PValueRange::new(Some(0.1), None).to_string(), "P-value > 0.10");
        assert_eq!(PValueRange::new(None, Some(0.001)).to_string(), "P-value < 0.001");
        assert_eq!(PValueRange::new(Some(0.05), Some(0.1)).to_string(), "0.05 < P-value < 0.10");
        assert_eq!(PValueRange::new(Some(0.1), Some(0.15)).to_string(), "0.10 < P-value < 0.15");
        assert_eq!(PValueRange::new(Some(0.01), Some(0.025)).to_string(), "0.01 < P-value < 0.025");
    }
}
