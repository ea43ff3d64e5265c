//! Moving-average trend indicator.

const FAST_WINDOW: usize = 5;
const SLOW_WINDOW: usize = 20;

/// Trend strength as the spread between short and long simple moving
/// averages: `(MA5 - MA20) / MA20 * 100`.
///
/// Positive values mean the recent average trades above the longer one
/// (uptrend). Returns 0 with fewer than 20 prices.
pub fn trend(prices: &[f64]) -> f64 {
    if prices.len() < SLOW_WINDOW {
        return 0.0;
    }

    let ma_fast =
        prices[prices.len() - FAST_WINDOW..].iter().sum::<f64>() / FAST_WINDOW as f64;
    let ma_slow =
        prices[prices.len() - SLOW_WINDOW..].iter().sum::<f64>() / SLOW_WINDOW as f64;

    (ma_fast - ma_slow) / ma_slow * 100.0
}
