use serde::{Deserialize, Serialize};

/// One interval's OHLCV summary for a trading pair.
///
/// Real candles satisfy `low <= min(open, close)` and
/// `high >= max(open, close)`; synthesized forecast candles are not
/// guaranteed to by construction. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Candle start time as Unix timestamp in seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Percentage move from open to close.
    pub fn change_pct(&self) -> f64 {
        (self.close - self.open) / self.open * 100.0
    }

    /// Candle range relative to close, as a percentage.
    pub fn volatility_pct(&self) -> f64 {
        (self.high - self.low) / self.close * 100.0
    }
}
