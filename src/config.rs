use crate::services::DEFAULT_MAX_FORECASTS;
use crate::types::CandleInterval;
use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Trading pair to forecast, e.g. "BTCUSDT".
    pub symbol: String,
    /// Candle interval; also the forecast period.
    pub interval: CandleInterval,
    /// How many recent candles to fetch per cycle.
    pub candle_limit: u32,
    /// Directory holding the rolling history files.
    pub data_dir: String,
    /// Cap on retained forecasts.
    pub max_forecasts: usize,
    /// Binance API key (optional, public endpoints work without).
    pub binance_api_key: Option<String>,
    /// Override for the Binance API base URL.
    pub binance_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let interval = env::var("CANDLE_INTERVAL")
            .ok()
            .and_then(|v| CandleInterval::from_str(&v))
            .unwrap_or_default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            symbol: env::var("SYMBOL").unwrap_or_else(|_| "BTCUSDT".to_string()),
            interval,
            candle_limit: env::var("CANDLE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            max_forecasts: env::var("MAX_FORECASTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_FORECASTS),
            binance_api_key: env::var("BINANCE_API_KEY").ok(),
            binance_api_url: env::var("BINANCE_API_URL").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
