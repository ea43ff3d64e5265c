use crate::types::Candle;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Discrete trading signal label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalLabel {
    StrongBuy,
    WeakBuy,
    Hold,
    WeakSell,
    StrongSell,
}

impl SignalLabel {
    /// Get display label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            SignalLabel::StrongBuy => "Strong Buy",
            SignalLabel::WeakBuy => "Weak Buy",
            SignalLabel::Hold => "Hold",
            SignalLabel::WeakSell => "Weak Sell",
            SignalLabel::StrongSell => "Strong Sell",
        }
    }

    /// Whether this label points upward.
    pub fn is_bullish(&self) -> bool {
        matches!(self, SignalLabel::StrongBuy | SignalLabel::WeakBuy)
    }
}

/// A directional recommendation with an associated confidence in [0, 1].
///
/// Produced fresh on each pipeline cycle; never persisted on its own,
/// only embedded in a [`Forecast`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub label: SignalLabel,
    pub confidence: f64,
}

impl Signal {
    /// The default neutral signal for an empty candle history.
    pub fn hold() -> Self {
        Self {
            label: SignalLabel::Hold,
            confidence: 0.50,
        }
    }
}

/// A synthesized next-period candle derived from a signal and the last
/// real candle. Appended to the rolling history, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Target candle start time: exactly one period after the source candle.
    pub time: i64,
    /// Always true; distinguishes forecasts from real candles downstream.
    pub predicted: bool,
    pub signal: SignalLabel,
    pub confidence: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Predicted open-to-close move in percent.
    pub predicted_change_pct: f64,
    /// Display form of the predicted move, e.g. "1.92%".
    pub predicted_change: String,
    /// ISO-8601 timestamp of when this forecast was generated.
    pub generated_at: String,
    /// Reserved for later enrichment; never populated by the core.
    pub real_candle: Option<Candle>,
}

impl Forecast {
    /// Build a forecast record. OHLC values are expected to be rounded
    /// already; `predicted_change` is the fractional move (0.024 = 2.4%).
    pub fn new(
        time: i64,
        signal: &Signal,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        predicted_change: f64,
    ) -> Self {
        let pct = predicted_change * 100.0;
        Self {
            time,
            predicted: true,
            signal: signal.label,
            confidence: signal.confidence,
            open,
            high,
            low,
            close,
            predicted_change_pct: pct,
            predicted_change: format!("{:.2}%", pct),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            real_candle: None,
        }
    }

    /// Percentage move implied by the forecast's own open and close.
    pub fn change_pct(&self) -> f64 {
        (self.close - self.open) / self.open * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(label: SignalLabel, confidence: f64) -> Signal {
        Signal { label, confidence }
    }

    #[test]
    fn test_hold_signal_defaults() {
        let s = Signal::hold();
        assert_eq!(s.label, SignalLabel::Hold);
        assert_eq!(s.confidence, 0.50);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SignalLabel::StrongBuy.label(), "Strong Buy");
        assert_eq!(SignalLabel::WeakSell.label(), "Weak Sell");
    }

    #[test]
    fn test_is_bullish() {
        assert!(SignalLabel::StrongBuy.is_bullish());
        assert!(SignalLabel::WeakBuy.is_bullish());
        assert!(!SignalLabel::Hold.is_bullish());
        assert!(!SignalLabel::StrongSell.is_bullish());
    }

    #[test]
    fn test_forecast_new_fields() {
        let s = signal(SignalLabel::WeakBuy, 0.60);
        let f = Forecast::new(1_700_014_400, &s, 100.0, 103.5, 99.2, 101.2, 0.012);
        assert_eq!(f.time, 1_700_014_400);
        assert!(f.predicted);
        assert_eq!(f.signal, SignalLabel::WeakBuy);
        assert_eq!(f.confidence, 0.60);
        assert!((f.predicted_change_pct - 1.2).abs() < 1e-10);
        assert_eq!(f.predicted_change, "1.20%");
        assert!(f.real_candle.is_none());
    }

    #[test]
    fn test_forecast_negative_change_string() {
        let s = signal(SignalLabel::StrongSell, 0.80);
        let f = Forecast::new(0, &s, 100.0, 100.5, 96.0, 97.6, -0.024);
        assert_eq!(f.predicted_change, "-2.40%");
    }

    #[test]
    fn test_forecast_serializes_camel_case() {
        let s = signal(SignalLabel::Hold, 0.50);
        let f = Forecast::new(123, &s, 1.0, 1.1, 0.9, 1.0, 0.001);
        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains("\"predictedChange\":\"0.10%\""));
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"realCandle\":null"));
        assert!(json.contains("\"signal\":\"hold\""));
    }

    #[test]
    fn test_forecast_change_pct_from_ohlc() {
        let s = signal(SignalLabel::WeakBuy, 0.55);
        let f = Forecast::new(0, &s, 100.0, 103.0, 99.0, 102.0, 0.02);
        assert!((f.change_pct() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_generated_at_is_iso8601() {
        let s = signal(SignalLabel::Hold, 0.50);
        let f = Forecast::new(0, &s, 1.0, 1.0, 1.0, 1.0, 0.0);
        assert!(f.generated_at.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&f.generated_at).is_ok());
    }
}
