// =============================================================================
// Bollinger Bands
// =============================================================================
//
// A volatility envelope around the SMA: upper = SMA + k*σ, lower = SMA - k*σ
// with k = 2. σ is the rolling SAMPLE standard deviation (divisor
// `window - 1`), the convention used by the common charting libraries. The
// middle band is the plain SMA and is not returned; callers who need it can
// reconstruct it as (upper + lower) / 2.

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::series::PriceSeries;

/// Default look-back window, matching the common charting convention.
pub const DEFAULT_WINDOW: usize = 20;

/// Band multiplier applied to the rolling standard deviation.
const NUM_STD: f64 = 2.0;

/// Upper and lower band series, each aligned with the input series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

/// Compute Bollinger Bands for `series` over `window` closes.
///
/// Both output series are aligned with the input and share the SMA's warm-up
/// policy: the first `window - 1` positions are NaN. A window of 1 has no
/// sample variance (0/0) and therefore yields NaN bands everywhere.
///
/// # Errors
/// - `ZeroWindow` when `window == 0`.
/// - `NonFiniteClose` when any close is NaN or infinite.
pub fn bollinger(series: &PriceSeries, window: usize) -> Result<BollingerBands, IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::ZeroWindow);
    }
    series.validate_closes()?;

    let closes = series.closes();
    let mut upper = vec![f64::NAN; closes.len()];
    let mut lower = vec![f64::NAN; closes.len()];
    if closes.len() < window {
        return Ok(BollingerBands { upper, lower });
    }

    for (offset, chunk) in closes.windows(window).enumerate() {
        let i = offset + window - 1;
        let mean = chunk.iter().sum::<f64>() / window as f64;
        let sq_dev: f64 = chunk.iter().map(|x| (x - mean).powi(2)).sum();
        // Sample variance; window == 1 gives 0/0 = NaN, same as pandas.
        let std_dev = (sq_dev / (window - 1) as f64).sqrt();

        upper[i] = mean + NUM_STD * std_dev;
        lower[i] = mean - NUM_STD * std_dev;
    }

    Ok(BollingerBands { upper, lower })
}
