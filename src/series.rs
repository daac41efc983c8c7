// =============================================================================
// Price series types
// =============================================================================
//
// `PriceSeries` is the single input shape shared by every indicator: an
// ordered run of OHLCV candles, oldest first. All rolling computations are
// positional — timestamps are carried for callers but never consulted by the
// math. Nothing mutates a series; every transform produces a new vector.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;

/// A single OHLCV candle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Time-ordered (oldest first) run of candles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries(Vec<Candle>);

impl PriceSeries {
    pub fn new(candles: Vec<Candle>) -> Self {
        Self(candles)
    }

    /// Build a series from bare closes, synthesizing one-minute timestamps
    /// and flat OHLC. Intended for tests and demos where only `close`
    /// matters.
    pub fn from_closes(closes: &[f64]) -> Self {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle {
                time: Utc.timestamp_opt(i as i64 * 60, 0).single().unwrap_or_default(),
                open: close,
                high: close,
                low: close,
                close,
                volume: 0.0,
            })
            .collect();
        Self(candles)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.0
    }

    /// Closing prices in series order.
    pub fn closes(&self) -> Vec<f64> {
        self.0.iter().map(|c| c.close).collect()
    }

    /// Fail-fast input validation shared by all indicators: every close must
    /// be a finite number. Returns the offending index on failure.
    pub fn validate_closes(&self) -> Result<(), IndicatorError> {
        for (index, candle) in self.0.iter().enumerate() {
            if !candle.close.is_finite() {
                return Err(IndicatorError::NonFiniteClose { index });
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_closes_preserves_order_and_values() {
        let series = PriceSeries::from_closes(&[3.0, 1.0, 2.0]);
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![3.0, 1.0, 2.0]);
        // Timestamps strictly ascending.
        let candles = series.candles();
        assert!(candles[0].time < candles[1].time);
        assert!(candles[1].time < candles[2].time);
    }

    #[test]
    fn validate_accepts_clean_series() {
        let series = PriceSeries::from_closes(&[1.0, 2.5, 3.25]);
        assert!(series.validate_closes().is_ok());
    }

    #[test]
    fn validate_rejects_nan_close() {
        let series = PriceSeries::from_closes(&[1.0, f64::NAN, 3.0]);
        assert_eq!(
            series.validate_closes(),
            Err(IndicatorError::NonFiniteClose { index: 1 })
        );
    }

    #[test]
    fn validate_rejects_infinite_close() {
        let series = PriceSeries::from_closes(&[1.0, f64::INFINITY]);
        assert_eq!(
            series.validate_closes(),
            Err(IndicatorError::NonFiniteClose { index: 1 })
        );
    }

    #[test]
    fn empty_series_is_valid() {
        let series = PriceSeries::from_closes(&[]);
        assert!(series.is_empty());
        assert!(series.validate_closes().is_ok());
    }
}
