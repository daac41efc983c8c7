// =============================================================================
// Aurora TA — educational technical-analysis toolkit
// =============================================================================
//
// Two independent pieces sharing one input shape:
//
// 1. An indicator engine: pure transforms (SMA, EMA, RSI, Bollinger Bands)
//    over an in-memory, time-ordered `PriceSeries`, producing output vectors
//    aligned one-to-one with the input, NaN marking warm-up positions.
// 2. An explanation formatter: a fixed educational message template that
//    echoes a question and the most recent indicator readings.
//
// Every call is stateless and recomputes over the whole series; there is no
// streaming, persistence, or I/O anywhere in this crate.

pub mod assistant;
pub mod error;
pub mod indicators;
pub mod series;
pub mod snapshot;

pub use assistant::format_explanation;
pub use error::IndicatorError;
pub use indicators::bollinger::{bollinger, BollingerBands};
pub use indicators::ema::ema;
pub use indicators::rsi::rsi;
pub use indicators::sma::sma;
pub use series::{Candle, PriceSeries};
pub use snapshot::{IndicatorSnapshot, SnapshotValue};
