// =============================================================================
// Educational explanation formatter
// =============================================================================
//
// Produces a fixed-structure, human-readable message from a free-text
// question and an indicator snapshot. Deliberately dumb: it interpolates the
// `trend` and `rsi` readings verbatim and never branches on their values.
// Every other snapshot key is ignored.

use tracing::debug;

use crate::snapshot::IndicatorSnapshot;

/// Trend label used when the snapshot has none.
const DEFAULT_TREND: &str = "Neutral";

/// Placeholder rendered when no RSI reading is available.
const RSI_UNAVAILABLE: &str = "not available";

/// Build the educational explanation message.
///
/// Reads only `"rsi"` (numeric, optional) and `"trend"` (label, optional)
/// from the snapshot. Missing readings fall back to an explicit placeholder
/// and the `"Neutral"` trend respectively; this function has no failure
/// modes.
pub fn format_explanation(question: &str, indicators: &IndicatorSnapshot) -> String {
    let trend = indicators.label("trend").unwrap_or(DEFAULT_TREND);
    let rsi_text = match indicators.number("rsi") {
        Some(value) => format!("{value:.2}"),
        None => RSI_UNAVAILABLE.to_string(),
    };

    debug!(question, trend, rsi = %rsi_text, "formatting explanation");

    format!(
        "### 🤖 Trading Assistant (Educational)\n\
         \n\
         **Your Question:** {question}\n\
         \n\
         **Current Market Summary:**\n\
         - Trend: {trend}\n\
         - RSI: {rsi_text}\n\
         \n\
         **Explanation:**\n\
         - RSI above 70 → Overbought\n\
         - RSI below 30 → Oversold\n\
         - Moving averages help identify trend direction\n\
         - Use multiple indicators together\n\
         \n\
         ⚠️ *This is NOT financial advice. Always do your own research.*\n"
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_question_and_readings() {
        let mut snap = IndicatorSnapshot::new();
        snap.set_number("rsi", 75.0);
        snap.set_label("trend", "Bullish");

        let msg = format_explanation("What is RSI?", &snap);
        assert!(msg.contains("What is RSI?"));
        assert!(msg.contains("Bullish"));
        assert!(msg.contains("75"));
        assert!(msg.contains("NOT financial advice"));
    }

    #[test]
    fn empty_snapshot_uses_defaults() {
        let msg = format_explanation("Q", &IndicatorSnapshot::new());
        assert!(msg.contains("Q"));
        assert!(msg.contains("Neutral"));
        assert!(msg.contains("not available"));
        assert!(msg.contains("NOT financial advice"));
    }

    #[test]
    fn static_bullets_are_always_present() {
        let msg = format_explanation("anything", &IndicatorSnapshot::new());
        assert!(msg.contains("RSI above 70 → Overbought"));
        assert!(msg.contains("RSI below 30 → Oversold"));
        assert!(msg.contains("Moving averages help identify trend direction"));
        assert!(msg.contains("Use multiple indicators together"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut snap = IndicatorSnapshot::new();
        snap.set_number("macd", 1.23);
        snap.set_label("regime", "choppy");

        let msg = format_explanation("Q", &snap);
        assert!(!msg.contains("macd"));
        assert!(!msg.contains("choppy"));
        assert!(msg.contains("Neutral"));
    }

    #[test]
    fn value_sensitive_text_never_branches() {
        // Same fixed structure regardless of the RSI reading.
        let mut low = IndicatorSnapshot::new();
        low.set_number("rsi", 15.0);
        let mut high = IndicatorSnapshot::new();
        high.set_number("rsi", 85.0);

        let a = format_explanation("Q", &low);
        let b = format_explanation("Q", &high);
        assert_eq!(a.replace("15.00", "X"), b.replace("85.00", "X"));
    }
}
