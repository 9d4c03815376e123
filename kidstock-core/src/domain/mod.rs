//! Domain types for the KidStock simulator

pub mod instrument;
pub mod news;
pub mod portfolio;
pub mod position;
pub mod state;

pub use instrument::{Instrument, Listing};
pub use news::{Direction, Effect, NewsEvent};
pub use portfolio::Portfolio;
pub use position::Position;
pub use state::SimulationState;
