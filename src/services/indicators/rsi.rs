//! Relative Strength Index (RSI) indicator.

/// Default RSI lookback period.
pub const DEFAULT_PERIOD: usize = 14;

/// Wilder-smoothed RSI over closing prices, oldest first.
///
/// Values range 0-100:
/// - Below 30: oversold (potential buy)
/// - Above 70: overbought (potential sell)
///
/// Returns the neutral value 50 when fewer than `period + 1` prices are
/// available. Returns 100 when there are no losses in the window.
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if prices.len() < period + 1 {
        return 50.0;
    }

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);

    for pair in prices.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    // Seed averages from the first `period` steps, then apply Wilder's
    // exponential smoothing for the rest.
    let mut avg_gain: f64 = gains.iter().take(period).sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses.iter().take(period).sum::<f64>() / period as f64;

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period - 1) as f64 + gains[i]) / period as f64;
        avg_loss = (avg_loss * (period - 1) as f64 + losses[i]) / period as f64;
    }

    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
