// =============================================================================
// Indicator error types
// =============================================================================
//
// The indicator engine fails fast on malformed input instead of letting NaN
// closes leak into every downstream value. Policy is uniform across all four
// indicators: non-finite closes and zero windows are rejected up front;
// empty or too-short series are never errors (they produce aligned all-NaN
// output instead).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    /// A close in the input series is NaN or infinite.
    #[error("non-finite close at index {index}")]
    NonFiniteClose { index: usize },

    /// A rolling window or smoothing period of zero is meaningless.
    #[error("window/period must be at least 1")]
    ZeroWindow,
}
