//! Rolling file-backed history of forecasts and real candles.
//!
//! Two flat JSON files under the data directory are the whole persistence
//! layer: a capped, append-only forecast log and the latest real-candle
//! snapshot, overwritten wholesale on each fetch. Reads fail soft to an
//! empty sequence so reporting never crashes on missing or corrupt state;
//! writes fail loudly because silent data loss is worse.

use crate::error::{AppError, Result};
use crate::types::{Candle, Forecast};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default cap on retained forecasts.
pub const DEFAULT_MAX_FORECASTS: usize = 50;

const FORECASTS_FILE: &str = "forecasts.json";
const REAL_SNAPSHOT_FILE: &str = "real-candles.json";

/// File-backed store for the forecast log and real-candle snapshot.
pub struct HistoryStore {
    data_dir: PathBuf,
    max_forecasts: usize,
}

impl HistoryStore {
    /// Create a store rooted at `data_dir`, creating the directory if
    /// needed.
    pub fn new(data_dir: impl Into<PathBuf>, max_forecasts: usize) -> Self {
        let data_dir = data_dir.into();
        if !data_dir.exists() {
            if let Err(e) = fs::create_dir_all(&data_dir) {
                warn!("Failed to create data directory {:?}: {}", data_dir, e);
            }
        }
        Self {
            data_dir,
            max_forecasts,
        }
    }

    fn forecasts_path(&self) -> PathBuf {
        self.data_dir.join(FORECASTS_FILE)
    }

    fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(REAL_SNAPSHOT_FILE)
    }

    /// Current forecast log, oldest first. Missing or unparsable backing
    /// file degrades to empty.
    pub fn read_forecasts(&self) -> Vec<Forecast> {
        Self::read_json(&self.forecasts_path())
    }

    /// Latest fetched real-candle snapshot, oldest first. Missing or
    /// unparsable backing file degrades to empty.
    pub fn read_real_snapshot(&self) -> Vec<Candle> {
        Self::read_json(&self.snapshot_path())
    }

    /// Append a forecast, then truncate from the front to the cap.
    pub fn append_forecast(&self, forecast: &Forecast) -> Result<()> {
        let mut forecasts = self.read_forecasts();
        forecasts.push(forecast.clone());

        if forecasts.len() > self.max_forecasts {
            let excess = forecasts.len() - self.max_forecasts;
            forecasts.drain(..excess);
        }

        self.write_json(&self.forecasts_path(), &forecasts)?;
        debug!("Forecast log now holds {} entries", forecasts.len());
        Ok(())
    }

    /// Overwrite the real-candle snapshot wholesale.
    pub fn replace_real_snapshot(&self, candles: &[Candle]) -> Result<()> {
        self.write_json(&self.snapshot_path(), &candles)
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Vec<T> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(e) => {
                warn!("Treating unparsable {:?} as empty history: {}", path, e);
                Vec::new()
            }
        }
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)
            .map_err(|e| AppError::Store(format!("failed to write {:?}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Signal, SignalLabel};

    fn create_test_store(name: &str) -> HistoryStore {
        let data_dir = PathBuf::from(format!(".test_history_{}", name));
        if data_dir.exists() {
            let _ = fs::remove_dir_all(&data_dir);
        }
        HistoryStore::new(data_dir, 5)
    }

    fn cleanup_test_store(store: &HistoryStore) {
        let _ = fs::remove_dir_all(&store.data_dir);
    }

    fn forecast(time: i64) -> Forecast {
        let signal = Signal {
            label: SignalLabel::WeakBuy,
            confidence: 0.55,
        };
        Forecast::new(time, &signal, 100.0, 102.0, 99.0, 101.0, 0.01)
    }

    fn candle(time: i64) -> Candle {
        Candle {
            time,
            open: 100.0,
            high: 105.0,
            low: 95.0,
            close: 101.0,
            volume: 1000.0,
        }
    }

    #[test]
    fn test_read_forecasts_empty_store() {
        let store = create_test_store("empty_forecasts");
        assert!(store.read_forecasts().is_empty());
        cleanup_test_store(&store);
    }

    #[test]
    fn test_read_snapshot_empty_store() {
        let store = create_test_store("empty_snapshot");
        assert!(store.read_real_snapshot().is_empty());
        cleanup_test_store(&store);
    }

    #[test]
    fn test_append_and_read_forecast() {
        let store = create_test_store("append");
        store.append_forecast(&forecast(1000)).unwrap();

        let forecasts = store.read_forecasts();
        assert_eq!(forecasts.len(), 1);
        assert_eq!(forecasts[0].time, 1000);
        cleanup_test_store(&store);
    }

    #[test]
    fn test_append_respects_cap_and_order() {
        let store = create_test_store("cap");
        for i in 0..8 {
            store.append_forecast(&forecast(i * 100)).unwrap();
        }

        let forecasts = store.read_forecasts();
        assert_eq!(forecasts.len(), 5);
        // Oldest three dropped, remaining order preserved.
        let times: Vec<i64> = forecasts.iter().map(|f| f.time).collect();
        assert_eq!(times, vec![300, 400, 500, 600, 700]);
        cleanup_test_store(&store);
    }

    #[test]
    fn test_replace_snapshot_overwrites() {
        let store = create_test_store("replace");
        store
            .replace_real_snapshot(&[candle(1), candle(2), candle(3)])
            .unwrap();
        store.replace_real_snapshot(&[candle(9)]).unwrap();

        let snapshot = store.read_real_snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].time, 9);
        cleanup_test_store(&store);
    }

    #[test]
    fn test_corrupt_forecasts_file_reads_empty() {
        let store = create_test_store("corrupt");
        fs::write(store.forecasts_path(), "{not valid json!").unwrap();
        assert!(store.read_forecasts().is_empty());
        cleanup_test_store(&store);
    }

    #[test]
    fn test_corrupt_snapshot_reads_empty() {
        let store = create_test_store("corrupt_snapshot");
        fs::write(store.snapshot_path(), "[{\"time\": }]").unwrap();
        assert!(store.read_real_snapshot().is_empty());
        cleanup_test_store(&store);
    }

    #[test]
    fn test_append_after_corruption_recovers() {
        let store = create_test_store("recover");
        fs::write(store.forecasts_path(), "garbage").unwrap();

        store.append_forecast(&forecast(42)).unwrap();
        let forecasts = store.read_forecasts();
        assert_eq!(forecasts.len(), 1);
        assert_eq!(forecasts[0].time, 42);
        cleanup_test_store(&store);
    }

    #[test]
    fn test_forecast_round_trips_through_disk() {
        let store = create_test_store("round_trip");
        let original = forecast(777);
        store.append_forecast(&original).unwrap();

        let loaded = &store.read_forecasts()[0];
        assert_eq!(*loaded, original);
        cleanup_test_store(&store);
    }
}
