//! Short-term momentum indicator.

const LOOKBACK: usize = 5;

/// Percentage change between the latest price and the price five steps
/// back. Returns 0 with fewer than six prices.
pub fn momentum(prices: &[f64]) -> f64 {
    if prices.len() < LOOKBACK + 1 {
        return 0.0;
    }

    let latest = prices[prices.len() - 1];
    let past = prices[prices.len() - 1 - LOOKBACK];
    (latest - past) / past * 100.0
}
