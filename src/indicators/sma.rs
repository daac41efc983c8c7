// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// The unweighted mean of the last `window` closes. The first `window - 1`
// output positions are NaN because the trailing window is not yet full.

use crate::error::IndicatorError;
use crate::indicators::rolling_mean;
use crate::series::PriceSeries;

/// Default look-back window, matching the common charting convention.
pub const DEFAULT_WINDOW: usize = 20;

/// Compute the SMA series for `series` over `window` closes.
///
/// The output is aligned with the input: `out[i]` is the mean of closes at
/// positions `[i - window + 1, i]`, or NaN while `i < window - 1`.
///
/// # Errors
/// - `ZeroWindow` when `window == 0`.
/// - `NonFiniteClose` when any close is NaN or infinite.
///
/// An empty or too-short series is not an error; the result is all-NaN with
/// the same length as the input.
pub fn sma(series: &PriceSeries, window: usize) -> Result<Vec<f64>, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::ZeroWindow);
    }
    series.validate_closes()?;

    Ok(rolling_mean(&series.closes(), window))
}
