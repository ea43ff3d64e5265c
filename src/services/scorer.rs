//! Signal scoring: combines indicator readings into a discrete signal.

use crate::services::indicators::{macd_histogram, momentum, rsi, trend};
use crate::services::indicators::rsi::DEFAULT_PERIOD as RSI_PERIOD;
use crate::types::{Candle, Signal, SignalLabel};
use tracing::debug;

/// Confidence cap for strong signals.
const STRONG_CAP: f64 = 0.85;
/// Confidence cap for weak signals.
const WEAK_CAP: f64 = 0.70;

/// Raw indicator values feeding one scoring pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorReadings {
    pub rsi: f64,
    pub macd_histogram: f64,
    pub trend: f64,
    pub momentum: f64,
}

impl IndicatorReadings {
    /// Compute all readings from a closing-price series, oldest first.
    pub fn from_closes(closes: &[f64]) -> Self {
        Self {
            rsi: rsi(closes, RSI_PERIOD),
            macd_histogram: macd_histogram(closes),
            trend: trend(closes),
            momentum: momentum(closes),
        }
    }
}

/// Score a candle sequence into a signal. Empty input yields the default
/// neutral signal rather than an error.
pub fn score_candles(candles: &[Candle]) -> Signal {
    if candles.is_empty() {
        return Signal::hold();
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    let readings = IndicatorReadings::from_closes(&closes);

    debug!(
        "Indicator readings: rsi={:.1} macd={:.4} trend={:.2} momentum={:.2}",
        readings.rsi, readings.macd_histogram, readings.trend, readings.momentum
    );

    score_readings(&readings)
}

/// Map indicator readings to a signal via independent threshold rules.
///
/// The thresholds and their ordering encode the intended sensitivity of
/// the system and must not be reordered. When the accumulated score is
/// inconclusive the trend sign breaks the tie, so the Hold bucket stays
/// small.
pub fn score_readings(readings: &IndicatorReadings) -> Signal {
    let mut score: f64 = 0.0;

    if readings.rsi < 25.0 {
        score += 3.0;
    } else if readings.rsi < 35.0 {
        score += 1.5;
    } else if readings.rsi > 75.0 {
        score -= 3.0;
    } else if readings.rsi > 65.0 {
        score -= 1.5;
    }

    if readings.macd_histogram > 0.0 {
        score += 2.0;
    } else if readings.macd_histogram < 0.0 {
        score -= 2.0;
    }

    if readings.trend > 5.0 {
        score += 1.5;
    } else if readings.trend < -5.0 {
        score -= 1.5;
    }

    if readings.momentum > 3.0 {
        score += 1.0;
    } else if readings.momentum < -3.0 {
        score -= 1.0;
    }

    let confidence = |cap: f64| (0.45 + score.abs() * 0.05).min(cap);

    if score >= 2.0 {
        Signal {
            label: SignalLabel::StrongBuy,
            confidence: confidence(STRONG_CAP),
        }
    } else if score >= 0.5 {
        Signal {
            label: SignalLabel::WeakBuy,
            confidence: confidence(WEAK_CAP),
        }
    } else if score <= -2.0 {
        Signal {
            label: SignalLabel::StrongSell,
            confidence: confidence(STRONG_CAP),
        }
    } else if score <= -0.5 {
        Signal {
            label: SignalLabel::WeakSell,
            confidence: confidence(WEAK_CAP),
        }
    } else if readings.trend > 0.0 {
        Signal {
            label: SignalLabel::WeakBuy,
            confidence: 0.55,
        }
    } else if readings.trend < 0.0 {
        Signal {
            label: SignalLabel::WeakSell,
            confidence: 0.55,
        }
    } else {
        Signal::hold()
    }
}
