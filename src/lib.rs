//! Candlecast - technical-analysis forecast server.
//!
//! Fetches recent OHLCV candles for a trading pair, derives a discrete
//! trading signal from a small set of indicators, synthesizes a forecast
//! candle for the next period, and serves the rolling forecast history
//! plus accuracy stats over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::{HistoryStore, Pipeline};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<HistoryStore>,
    pub pipeline: Arc<Pipeline>,
}
