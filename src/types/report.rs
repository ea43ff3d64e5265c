//! Reporting shapes pairing forecasts with observed candles.

use crate::types::{Candle, Forecast};
use serde::{Deserialize, Serialize};

/// Per-pair accuracy record comparing a forecast with the real candle
/// that landed at its target time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyRecord {
    /// Whether the forecast called the direction of the move correctly.
    pub direction_correct: bool,
    /// Absolute difference between predicted and real change, in
    /// percentage points.
    pub error: f64,
    pub predicted_change: String,
    pub real_change: String,
}

impl AccuracyRecord {
    /// Compare a forecast against the real candle for the same period.
    /// Both changes come from each candle's own open-to-close move.
    pub fn from_pair(prediction: &Forecast, real: &Candle) -> Self {
        let predicted = prediction.change_pct();
        let actual = real.change_pct();
        Self {
            direction_correct: (predicted > 0.0 && actual > 0.0)
                || (predicted < 0.0 && actual < 0.0),
            error: (predicted - actual).abs(),
            predicted_change: format!("{:.2}%", predicted),
            real_change: format!("{:.2}%", actual),
        }
    }
}

/// A forecast matched with its real counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastComparison {
    pub prediction: Forecast,
    pub real: Candle,
    pub accuracy: AccuracyRecord,
}

/// Aggregate forecast accuracy statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastStats {
    pub total_predictions: usize,
    pub completed_predictions: usize,
    pub correct_direction: usize,
    /// Directional hit rate as a percentage string, or "N/A" when no
    /// forecast has a matching real candle yet.
    pub accuracy: String,
    /// Mean absolute error as a percentage string, or "N/A".
    pub avg_error: String,
}

impl ForecastStats {
    /// Aggregate accuracy records into summary stats. `total` is the full
    /// forecast count, including forecasts not yet matched to a real candle.
    pub fn from_records(total: usize, records: &[AccuracyRecord]) -> Self {
        let completed = records.len();
        let correct = records.iter().filter(|r| r.direction_correct).count();

        let (accuracy, avg_error) = if completed > 0 {
            let hit_rate = correct as f64 / completed as f64 * 100.0;
            let mean_error =
                records.iter().map(|r| r.error.abs()).sum::<f64>() / completed as f64;
            (format!("{:.1}%", hit_rate), format!("{:.2}%", mean_error))
        } else {
            ("N/A".to_string(), "N/A".to_string())
        };

        Self {
            total_predictions: total,
            completed_predictions: completed,
            correct_direction: correct,
            accuracy,
            avg_error,
        }
    }
}
