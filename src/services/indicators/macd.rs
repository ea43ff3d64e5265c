//! MACD (Moving Average Convergence Divergence) histogram.

const FAST_PERIOD: usize = 12;
const SLOW_PERIOD: usize = 26;
const SIGNAL_PERIOD: usize = 9;

/// EMA series over `values`, seeded from the first element.
///
/// This seeding differs from the SMA-seeded textbook variant on purpose:
/// the histogram is recomputed over a fixed trailing window each call, so
/// the window's first element is the only consistent seed available.
fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let k = 2.0 / (period as f64 + 1.0);
    let mut series = Vec::with_capacity(values.len());
    let mut ema = first;
    series.push(ema);

    for &value in &values[1..] {
        ema = value * k + ema * (1.0 - k);
        series.push(ema);
    }

    series
}

/// MACD histogram at the most recent point.
///
/// EMA(12) and EMA(26) are computed over the same trailing window (the
/// last 26 prices); MACD line is their elementwise difference, the signal
/// line is a 9-period EMA of the MACD line, and the histogram is the gap
/// between the two at the latest price. Returns 0 for empty input; no
/// other hard minimum is enforced beyond the window slice.
pub fn macd_histogram(prices: &[f64]) -> f64 {
    let window = if prices.len() > SLOW_PERIOD {
        &prices[prices.len() - SLOW_PERIOD..]
    } else {
        prices
    };

    if window.is_empty() {
        return 0.0;
    }

    let fast = ema_series(window, FAST_PERIOD);
    let slow = ema_series(window, SLOW_PERIOD);

    let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal_line = ema_series(&macd_line, SIGNAL_PERIOD);

    match (macd_line.last(), signal_line.last()) {
        (Some(macd), Some(signal)) => macd - signal,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_empty_input_is_zero() {
        assert_eq!(macd_histogram(&[]), 0.0);
    }

    #[test]
    fn test_histogram_flat_prices_is_zero() {
        let prices = vec![100.0; 40];
        assert!(macd_histogram(&prices).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_positive_in_accelerating_uptrend() {
        let prices: Vec<f64> = (0..40).map(|i| 100.0 * 1.01f64.powi(i)).collect();
        assert!(macd_histogram(&prices) > 0.0);
    }

    #[test]
    fn test_histogram_negative_in_accelerating_downtrend() {
        let prices: Vec<f64> = (0..40).map(|i| 100.0 * 0.99f64.powi(i)).collect();
        assert!(macd_histogram(&prices) < 0.0);
    }

    #[test]
    fn test_histogram_short_input_does_not_panic() {
        // Fewer prices than the slow period: the whole slice is the window.
        let prices = vec![100.0, 101.0, 102.0];
        let value = macd_histogram(&prices);
        assert!(value.is_finite());
    }

    #[test]
    fn test_histogram_single_price_is_zero() {
        // One price: fast EMA == slow EMA == price, MACD line and signal
        // line are both a single zero.
        assert_eq!(macd_histogram(&[42.0]), 0.0);
    }

    #[test]
    fn test_histogram_uses_trailing_window_only() {
        // A wild prefix before a flat trailing window must not leak in.
        let mut prices = vec![1.0, 5000.0, 3.0, 900.0];
        prices.extend(std::iter::repeat(100.0).take(26));
        assert!(macd_histogram(&prices).abs() < 1e-12);
    }

    #[test]
    fn test_histogram_hand_computed_fixture() {
        // Two prices [100, 110]:
        //   fast EMA:  [100, 100 + 10 * 2/13]          = [100, 101.538461...]
        //   slow EMA:  [100, 100 + 10 * 2/27]          = [100, 100.740740...]
        //   MACD line: [0, 0.797720...]
        //   signal:    [0, 0.797720... * 0.2]
        //   histogram = 0.797720... * 0.8
        let k_fast = 2.0 / 13.0;
        let k_slow = 2.0 / 27.0;
        let macd_last = 10.0 * k_fast - 10.0 * k_slow;
        let expected = macd_last - macd_last * 0.2;
        let value = macd_histogram(&[100.0, 110.0]);
        assert!((value - expected).abs() < 1e-12, "got {}, want {}", value, expected);
    }

    #[test]
    fn test_ema_series_seeded_from_first_element() {
        let series = ema_series(&[50.0, 60.0], 9);
        assert_eq!(series[0], 50.0);
        assert!((series[1] - (60.0 * 0.2 + 50.0 * 0.8)).abs() < 1e-12);
    }
}
