//! Forecast reporting and trigger endpoints.
//!
//! Reporting handlers read whatever history exists and always answer
//! with valid JSON; absent or corrupt files come back as empty
//! collections or "N/A" stats, never as HTTP errors.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use crate::types::{AccuracyRecord, Candle, Forecast, ForecastComparison, ForecastStats};
use crate::AppState;

/// Response of the trigger endpoint.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub output: String,
}

/// Create the forecasts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/forecasts", get(get_forecasts))
        .route("/real", get(get_real))
        .route("/comparison", get(get_comparison))
        .route("/stats", get(get_stats))
        .route("/predict", post(run_predict))
}

/// Get the rolling forecast history.
async fn get_forecasts(State(state): State<AppState>) -> Json<Vec<Forecast>> {
    Json(state.store.read_forecasts())
}

/// Get the latest real-candle snapshot.
async fn get_real(State(state): State<AppState>) -> Json<Vec<Candle>> {
    Json(state.store.read_real_snapshot())
}

/// Pair each forecast with the real candle that landed within one period
/// of its target time, if any.
fn match_forecasts(
    forecasts: &[Forecast],
    real: &[Candle],
    period_secs: i64,
) -> Vec<ForecastComparison> {
    forecasts
        .iter()
        .filter_map(|forecast| {
            let matched = real
                .iter()
                .find(|c| (c.time - forecast.time).abs() < period_secs)?;
            Some(ForecastComparison {
                prediction: forecast.clone(),
                real: matched.clone(),
                accuracy: AccuracyRecord::from_pair(forecast, matched),
            })
        })
        .collect()
}

/// Get forecasts paired with their observed real candles.
async fn get_comparison(State(state): State<AppState>) -> Json<Vec<ForecastComparison>> {
    let forecasts = state.store.read_forecasts();
    let real = state.store.read_real_snapshot();
    let period_secs = state.config.interval.duration_seconds();

    Json(match_forecasts(&forecasts, &real, period_secs))
}

/// Get aggregate forecast accuracy stats.
async fn get_stats(State(state): State<AppState>) -> Json<ForecastStats> {
    let forecasts = state.store.read_forecasts();
    let real = state.store.read_real_snapshot();
    let period_secs = state.config.interval.duration_seconds();

    let records: Vec<AccuracyRecord> = match_forecasts(&forecasts, &real, period_secs)
        .into_iter()
        .map(|c| c.accuracy)
        .collect();

    Json(ForecastStats::from_records(forecasts.len(), &records))
}

/// Trigger one pipeline cycle on demand.
///
/// A failed cycle is reported in the body, not as an HTTP error: the
/// request itself succeeded even when the forecast did not.
async fn run_predict(State(state): State<AppState>) -> Json<PredictResponse> {
    match state.pipeline.run_cycle().await {
        Ok(report) => Json(PredictResponse {
            success: true,
            output: report.output(),
        }),
        Err(e) => {
            error!("Forecast cycle failed: {}", e);
            Json(PredictResponse {
                success: false,
                output: format!("Forecast cycle failed: {}", e),
            })
        }
    }
}
