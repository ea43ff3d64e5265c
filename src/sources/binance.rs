//! Binance kline (candlestick) data source adapter.

use crate::error::{AppError, Result};
use crate::types::Candle;
use reqwest::Client;
use tracing::{debug, warn};

const BINANCE_API_URL: &str = "https://api.binance.com/api/v3";

/// One kline row from the Binance REST API. Numeric price fields arrive
/// as strings; times are epoch milliseconds.
///
/// `[openTime, open, high, low, close, volume, closeTime, quoteVolume,
///   trades, takerBase, takerQuote, ignore]`
type KlineRow = (
    i64,
    String,
    String,
    String,
    String,
    String,
    i64,
    String,
    u64,
    String,
    String,
    String,
);

fn kline_to_candle(row: &KlineRow) -> Option<Candle> {
    Some(Candle {
        time: row.0 / 1000,
        open: row.1.parse().ok()?,
        high: row.2.parse().ok()?,
        low: row.3.parse().ok()?,
        close: row.4.parse().ok()?,
        volume: row.5.parse().ok()?,
    })
}

/// Binance REST client.
#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl BinanceClient {
    /// Create a client against the public Binance API.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(BINANCE_API_URL, api_key)
    }

    /// Create a client against an alternate base URL. Used by tests and
    /// by deployments fronted by a proxy.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .user_agent("Candlecast/0.1")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Fetch the most recent candles for a trading pair, oldest first.
    ///
    /// Any failure here aborts the whole forecast cycle; there are no
    /// partial results.
    pub async fn fetch_recent_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: u32,
    ) -> Result<Vec<Candle>> {
        let url = format!("{}/klines", self.base_url);
        let limit = limit.to_string();

        let mut request = self.client.get(&url).query(&[
            ("symbol", symbol),
            ("interval", interval),
            ("limit", &limit),
        ]);
        if let Some(ref key) = self.api_key {
            request = request.header("X-MBX-APIKEY", key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!("Binance API returned {}: {:.200}", status, text);
            return Err(AppError::ExternalApi(format!(
                "Binance API error: {}",
                status
            )));
        }

        let rows: Vec<KlineRow> = response.json().await?;
        let mut candles: Vec<Candle> = rows.iter().filter_map(kline_to_candle).collect();
        candles.sort_by_key(|c| c.time);

        debug!("Fetched {} candles for {}", candles.len(), symbol);
        Ok(candles)
    }
}
