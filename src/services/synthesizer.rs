//! Forecast synthesis: turns a signal and the last real candle into a
//! synthetic next-period candle.

use crate::types::{Candle, Forecast, Signal, SignalLabel};
use rand::Rng;

/// Round to two decimal places, matching the persisted price precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Synthesize a forecast candle from the last observed candle and a
/// signal. The randomness source is injected so tests can seed it.
///
/// The predicted close follows the signal direction scaled by confidence;
/// the high/low spread is a bounded random walk around the source close,
/// sized by the source candle's own volatility and biased toward the
/// predicted direction. The open carries the source close forward
/// (continuity assumption), so `open == round(source.close, 2)` and
/// `time == source.time + period_secs` always hold.
pub fn synthesize<R: Rng + ?Sized>(
    source: &Candle,
    signal: &Signal,
    period_secs: i64,
    rng: &mut R,
) -> Forecast {
    let close = source.close;
    let volatility = (source.high - source.low) / close * 100.0;

    let predicted_change = match signal.label {
        SignalLabel::StrongBuy => signal.confidence * 0.03,
        SignalLabel::WeakBuy => signal.confidence * 0.02,
        SignalLabel::StrongSell => -signal.confidence * 0.03,
        SignalLabel::WeakSell => -signal.confidence * 0.02,
        SignalLabel::Hold => rng.gen_range(-0.0025..=0.0025),
    };

    let predicted_close = close * (1.0 + predicted_change);
    let range = close * volatility / 100.0;

    // Asymmetric spread: generous room in the predicted direction, a
    // capped tail against it.
    let (high_mult, low_mult) = if predicted_change > 0.0 {
        (
            0.5 + rng.gen_range(0.0..0.3),
            0.2 + rng.gen_range(0.0..0.2),
        )
    } else {
        (
            0.2 + rng.gen_range(0.0..0.2),
            0.5 + rng.gen_range(0.0..0.3),
        )
    };

    let predicted_high = close + range * high_mult;
    let predicted_low = close - range * low_mult;

    Forecast::new(
        source.time + period_secs,
        signal,
        round2(close),
        round2(predicted_high),
        round2(predicted_low),
        round2(predicted_close),
        predicted_change,
    )
}
