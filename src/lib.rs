#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic)]
#![allow(
    clippy::doc_markdown,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::float_cmp
)]

#[macro_use]
pub(crate) mod macros;

mod assessment;
mod error;
mod methods;
mod report;
mod sample;

use std::iter::Sum;

pub use assessment::{Assessment, PValueRange, Verdict};
pub use error::Error;
pub use methods::*;
use num_traits::{Float as Float_, Num, NumAssign, NumOps};
pub use sample::{Sample, prepare_sample, wrap_angle};

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(feature = "parallel")]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(feature = "parallel")]
impl<T: Float_ + Num + NumAssign + NumOps + Sum + Send + Sync> Float for T {}

/// A convenience trait combining bounds frequently used for floating-point computations.
#[cfg(not(feature = "parallel"))]
pub trait Float: Float_ + Num + NumAssign + NumOps + Sum {}

/// Blanket implementation of [`Float`] for any type that satisfies its bounds.
#[cfg(not(feature = "parallel"))]
impl<T: Float_ + Num + NumAssign + NumOps + Sum> Float for T {}

#[cfg(all(feature = "serde", test))]
mod computation_serde_test {
    use serde_test::{Token, assert_tokens};

    use super::{RayleighComputation, Sample};

    #[test]
    fn test_rayleigh_computation_tokens() {
        let computation = RayleighComputation {
            statistic: 0.5,
            p_value: 0.05,
            mean_direction: Some(1.0),
            sample_size: 12,
        };

        let expected_tokens = vec![
            Token::Struct {
                name: "RayleighComputation",
                len: 4,
            },
            Token::Str("statistic"),
            Token::F64(0.5),
            Token::Str("p_value"),
            Token::F64(0.05),
            Token::Str("mean_direction"),
            Token::Some,
            Token::F64(1.0),
            Token::Str("sample_size"),
            Token::U64(12),
            Token::StructEnd,
        ];

        assert_tokens(&computation, &expected_tokens);
    }

    #[test]
    fn test_sample_tokens() {
        assert_tokens(
            &Sample::Y,
            &[Token::UnitVariant {
                name: "Sample",
                variant: "Y",
            }],
        );
    }
}
