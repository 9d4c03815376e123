//! Market engine: instrument roster and the day-advance price model.

pub mod engine;
pub mod index;

pub use engine::{DayAdvance, MarketEngine, NewsPolicy};
pub use index::{compute_index, index_delta, IndexDelta};
