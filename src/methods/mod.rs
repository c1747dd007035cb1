mod kuiper;
mod rayleigh;
mod watson_two;

pub use kuiper::{KUIPER_CRITICAL_VALUES, KUIPER_SIGNIFICANCE_LEVELS, KuiperComputation, kuiper};
pub use rayleigh::{RayleighComputation, rayleigh};
pub use watson_two::{
    WATSON_TWO_CRITICAL_VALUES,
    WATSON_TWO_MIN_TABULATED_SIZE,
    WATSON_TWO_UNTABULATED_CRITICAL_VALUE,
    WatsonTwoComputation,
    watson_two,
};
