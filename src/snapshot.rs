// =============================================================================
// Indicator snapshot
// =============================================================================
//
// A string-keyed bag of "current reading" values, built by the caller from
// whatever indicators it computed and handed to the explanation formatter.
// Values are either a scalar (e.g. the latest RSI) or a label (e.g. a trend
// direction). The formatter only reads the keys it knows about; anything
// else is carried but ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single snapshot entry: a numeric reading or a text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotValue {
    Number(f64),
    Label(String),
}

/// Mapping from indicator name to its most recent value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSnapshot(HashMap<String, SnapshotValue>);

impl IndicatorSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_number(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), SnapshotValue::Number(value));
    }

    pub fn set_label(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), SnapshotValue::Label(value.into()));
    }

    /// Numeric reading for `key`, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(SnapshotValue::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Text label for `key`, if present and textual.
    pub fn label(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(SnapshotValue::Label(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_roundtrip() {
        let mut snap = IndicatorSnapshot::new();
        snap.set_number("rsi", 62.5);
        snap.set_label("trend", "Bullish");
        assert_eq!(snap.number("rsi"), Some(62.5));
        assert_eq!(snap.label("trend"), Some("Bullish"));
    }

    #[test]
    fn missing_keys_are_none() {
        let snap = IndicatorSnapshot::new();
        assert_eq!(snap.number("rsi"), None);
        assert_eq!(snap.label("trend"), None);
    }

    #[test]
    fn type_mismatch_is_none() {
        let mut snap = IndicatorSnapshot::new();
        snap.set_label("rsi", "seventy");
        assert_eq!(snap.number("rsi"), None);
        assert_eq!(snap.label("rsi"), Some("seventy"));
    }

    #[test]
    fn serde_json_roundtrip() {
        let mut snap = IndicatorSnapshot::new();
        snap.set_number("rsi", 71.0);
        snap.set_label("trend", "Bearish");

        let json = serde_json::to_string(&snap).unwrap();
        let back: IndicatorSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.number("rsi"), Some(71.0));
        assert_eq!(back.label("trend"), Some("Bearish"));
    }
}
