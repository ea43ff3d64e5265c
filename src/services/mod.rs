pub mod history;
pub mod indicators;
pub mod pipeline;
pub mod scorer;
pub mod synthesizer;

pub use history::{HistoryStore, DEFAULT_MAX_FORECASTS};
pub use pipeline::{CycleReport, Pipeline};
