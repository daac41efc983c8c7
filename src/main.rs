// =============================================================================
// Aurora TA — Demo Entry Point
// =============================================================================
//
// Synthesizes a deterministic price series, runs every indicator over it,
// collects the latest readings into a snapshot, and prints the educational
// explanation. Data acquisition and presentation are out of scope for the
// library, so the demo supplies both ends itself.

use tracing::info;
use tracing_subscriber::EnvFilter;

use aurora_ta::indicators::{ema, rsi, sma};
use aurora_ta::{bollinger, format_explanation, IndicatorSnapshot, PriceSeries};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Deterministic synthetic closes: gentle uptrend with a sine wobble.
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + i as f64 * 0.25 + (i as f64 * 0.4).sin() * 2.0)
        .collect();
    let series = PriceSeries::from_closes(&closes);
    info!(candles = series.len(), "synthesized demo series");

    let sma20 = sma::sma(&series, sma::DEFAULT_WINDOW)?;
    let ema20 = ema::ema(&series, ema::DEFAULT_WINDOW)?;
    let rsi14 = rsi::rsi(&series, rsi::DEFAULT_PERIOD)?;
    let bands = bollinger(&series, 20)?;

    let last = series.len() - 1;
    info!(
        sma = sma20[last],
        ema = ema20[last],
        rsi = rsi14[last],
        bb_upper = bands.upper[last],
        bb_lower = bands.lower[last],
        "latest readings"
    );

    // Demo-side trend call: fast average above slow average reads bullish.
    let trend = if ema20[last] > sma20[last] {
        "Bullish"
    } else if ema20[last] < sma20[last] {
        "Bearish"
    } else {
        "Neutral"
    };

    let mut snapshot = IndicatorSnapshot::new();
    if rsi14[last].is_finite() {
        snapshot.set_number("rsi", rsi14[last]);
    }
    snapshot.set_label("trend", trend);

    let message = format_explanation("Is the market overbought right now?", &snapshot);
    println!("{message}");

    Ok(())
}
