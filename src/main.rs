use candlecast::config::Config;
use candlecast::services::{HistoryStore, Pipeline};
use candlecast::sources::BinanceClient;
use candlecast::{api, AppState};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "candlecast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!(
        "Starting candlecast for {} ({}) on {}:{}",
        config.symbol,
        config.interval.as_str(),
        config.host,
        config.port
    );

    let store = Arc::new(HistoryStore::new(&config.data_dir, config.max_forecasts));

    let binance = Arc::new(match config.binance_api_url {
        Some(ref base_url) => {
            BinanceClient::with_base_url(base_url.clone(), config.binance_api_key.clone())
        }
        None => BinanceClient::new(config.binance_api_key.clone()),
    });

    let pipeline = Pipeline::new(config.clone(), store.clone(), binance);

    // Scheduler: run one cycle immediately, then once per candle period.
    {
        let pipeline = pipeline.clone();
        let period_secs = config.interval.duration_seconds() as u64;
        tokio::spawn(async move {
            loop {
                match pipeline.run_cycle().await {
                    Ok(report) => info!("Cycle complete:\n{}", report.output()),
                    Err(e) => error!("Forecast cycle failed: {}", e),
                }
                tokio::time::sleep(Duration::from_secs(period_secs)).await;
            }
        });
    }

    let state = AppState {
        config: config.clone(),
        store,
        pipeline,
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = api::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Candlecast server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
