// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// Recency-weighted average with span-based smoothing:
//
//   alpha = 2 / (window + 1)
//   ema_0 = close_0
//   ema_t = close_t * alpha + ema_{t-1} * (1 - alpha)
//
// Unlike the SMA, the EMA is defined from position 0 onward: exponential
// weighting needs no full window, the early values simply carry a
// recency-weighted bias toward the start of the series. That asymmetry with
// the SMA's NaN warm-up is a property of the weighting, not a bug.

use crate::error::IndicatorError;
use crate::series::PriceSeries;

/// Default smoothing span, matching the common charting convention.
pub const DEFAULT_WINDOW: usize = 20;

/// Compute the EMA series for `series` with smoothing span `window`.
///
/// The output is aligned with the input and fully defined: `out[0]` is the
/// first close, each subsequent value folds in the next close with weight
/// `alpha = 2 / (window + 1)`.
///
/// # Errors
/// - `ZeroWindow` when `window == 0`.
/// - `NonFiniteClose` when any close is NaN or infinite.
pub fn ema(series: &PriceSeries, window: usize) -> Result<Vec<f64>, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::ZeroWindow);
    }
    series.validate_closes()?;

    let closes = series.closes();
    let mut out = Vec::with_capacity(closes.len());
    let alpha = 2.0 / (window + 1) as f64;

    let mut prev = match closes.first() {
        Some(&first) => first,
        None => return Ok(out),
    };
    out.push(prev);

    for &close in &closes[1..] {
        prev = close * alpha + prev * (1.0 - alpha);
        out.push(prev);
    }

    Ok(out)
}
