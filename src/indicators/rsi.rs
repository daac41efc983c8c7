// =============================================================================
// Relative Strength Index (RSI) — simple rolling means
// =============================================================================
//
// Step 1 — per-step close deltas (undefined at position 0).
// Step 2 — split each delta into gain = max(delta, 0) and loss = max(-delta, 0).
// Step 3 — avg_gain / avg_loss as plain rolling means over `period` deltas.
// Step 4 — RS  = avg_gain / avg_loss
//          RSI = 100 - 100 / (1 + RS)
//
// The RS division deliberately uses raw IEEE semantics: a window of pure
// gains gives RS = +inf, which the RSI formula collapses to exactly 100
// (saturated overbought); a perfectly flat window gives RS = 0/0 = NaN, which
// propagates as an undefined output rather than a fabricated number.
//
// Thresholds: RSI > 70 => overbought, RSI < 30 => oversold.

use crate::error::IndicatorError;
use crate::indicators::rolling_mean;
use crate::series::PriceSeries;

/// Default look-back period, matching the common charting convention.
pub const DEFAULT_PERIOD: usize = 14;

/// Compute the RSI series for `series` over `period` deltas.
///
/// The output is aligned with the input. The first `period` positions are
/// NaN: `period - 1` from the rolling-mean warm-up plus one because the
/// delta at position 0 does not exist. Defined values lie in `[0, 100]`,
/// except that a flat window yields NaN (0/0 relative strength).
///
/// # Errors
/// - `ZeroWindow` when `period == 0`.
/// - `NonFiniteClose` when any close is NaN or infinite.
pub fn rsi(series: &PriceSeries, period: usize) -> Result<Vec<f64>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::ZeroWindow);
    }
    series.validate_closes()?;

    let closes = series.closes();
    let mut out = vec![f64::NAN; closes.len()];
    if closes.len() < 2 {
        return Ok(out);
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let delta = pair[1] - pair[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    // The delta series starts at input position 1, so each rolling mean at
    // delta index i lands at output position i + 1.
    let avg_gain = rolling_mean(&gains, period);
    let avg_loss = rolling_mean(&losses, period);

    for (i, (&g, &l)) in avg_gain.iter().zip(avg_loss.iter()).enumerate() {
        let rs = g / l; // +inf when l == 0 and g > 0, NaN when both are 0
        out[i + 1] = 100.0 - 100.0 / (1.0 + rs);
    }

    Ok(out)
}
