// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the core technical indicators.
// Every function recomputes over the full series and returns an output vector
// aligned element-wise with the input: one value per candle, with `f64::NAN`
// marking warm-up positions where insufficient history exists. Output length
// always equals input length.
//
// Input policy (uniform across all indicators): a non-finite close is
// rejected with `IndicatorError::NonFiniteClose`, a zero window with
// `IndicatorError::ZeroWindow`. Empty or short series are never errors.

pub mod bollinger;
pub mod ema;
pub mod rsi;
pub mod sma;

/// Trailing rolling mean over `values`, aligned with the input. The first
/// `window - 1` positions are NaN. Incremental running-sum, O(n).
pub(crate) fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = sum / window as f64;
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out[i] = sum / window as f64;
    }
    out
}
