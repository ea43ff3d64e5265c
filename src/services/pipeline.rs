//! The forecast pipeline: one fetch → score → synthesize → persist cycle.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::scorer::score_candles;
use crate::services::synthesizer::synthesize;
use crate::services::HistoryStore;
use crate::sources::BinanceClient;
use crate::types::Forecast;
use std::sync::Arc;
use tracing::info;

/// Outcome of one completed pipeline cycle.
pub struct CycleReport {
    pub forecast: Forecast,
    pub log: Vec<String>,
}

impl CycleReport {
    /// The cycle's log lines as one block, for the trigger endpoint.
    pub fn output(&self) -> String {
        self.log.join("\n")
    }
}

/// Runs the forecast cycle. Strictly sequential: fetch, snapshot, score,
/// synthesize, append. A data source failure aborts the cycle with the
/// persisted history untouched. There is no internal locking; overlapping
/// producer runs (a manual trigger during a scheduled cycle) can race on
/// the backing files and are a documented limitation.
pub struct Pipeline {
    config: Arc<Config>,
    store: Arc<HistoryStore>,
    binance: Arc<BinanceClient>,
}

impl Pipeline {
    pub fn new(
        config: Arc<Config>,
        store: Arc<HistoryStore>,
        binance: Arc<BinanceClient>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            store,
            binance,
        })
    }

    /// Run one full cycle, returning the synthesized forecast and the
    /// human-readable log the trigger surface exposes.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let mut log = Vec::new();
        let interval = self.config.interval.as_str();

        let line = format!(
            "Fetching recent {} candles for {}...",
            interval, self.config.symbol
        );
        info!("{}", line);
        log.push(line);

        let candles = self
            .binance
            .fetch_recent_candles(&self.config.symbol, interval, self.config.candle_limit)
            .await?;

        let Some(last) = candles.last().cloned() else {
            return Err(AppError::ExternalApi(
                "data source returned no candles".to_string(),
            ));
        };

        self.store.replace_real_snapshot(&candles)?;
        let line = format!("Saved {} real candles", candles.len());
        info!("{}", line);
        log.push(line);

        let signal = score_candles(&candles);
        let line = format!(
            "Signal: {} ({:.0}%), last close ${:.2}",
            signal.label.label(),
            signal.confidence * 100.0,
            last.close
        );
        info!("{}", line);
        log.push(line);

        let mut rng = rand::thread_rng();
        let forecast = synthesize(
            &last,
            &signal,
            self.config.interval.duration_seconds(),
            &mut rng,
        );

        self.store.append_forecast(&forecast)?;

        let line = format!(
            "Forecast: ${:.2} -> ${:.2} (range ${:.2} - ${:.2}, change {})",
            forecast.open, forecast.close, forecast.low, forecast.high, forecast.predicted_change
        );
        info!("{}", line);
        log.push(line);
        log.push("Forecast saved".to_string());

        Ok(CycleReport { forecast, log })
    }
}
