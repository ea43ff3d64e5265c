pub mod candle;
pub mod forecast;
pub mod interval;
pub mod report;

pub use candle::Candle;
pub use forecast::{Forecast, Signal, SignalLabel};
pub use interval::CandleInterval;
pub use report::{AccuracyRecord, ForecastComparison, ForecastStats};
