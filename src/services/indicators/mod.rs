//! Technical indicator calculations.
//!
//! Pure, stateless functions over an ordered sequence of closing prices
//! (oldest first). Each degrades to a neutral value on insufficient
//! history instead of erroring, so a short candle feed never aborts a
//! forecast cycle. All are deliberate windowed recomputations, not
//! incremental/streaming implementations.

pub mod macd;
pub mod momentum;
pub mod rsi;
pub mod trend;

pub use macd::macd_histogram;
pub use momentum::momentum;
pub use rsi::rsi;
pub use trend::trend;
