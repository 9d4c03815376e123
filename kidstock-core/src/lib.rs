//! KidStock Core: instruments, news-driven day advance, portfolio ledger, valuation.
//!
//! This crate holds the computable part of the simulator:
//! - Domain types (instruments, news events, positions, portfolio, simulation snapshot)
//! - Market engine: random-walk day advance with per-instrument and market-wide shocks
//! - Portfolio ledger: buy/sell with weighted-average cost, valuation and holdings reports
//! - Injectable random source plus a seed hierarchy for deterministic replays
//! - TOML configuration and the default instrument/news catalog
//!
//! Every operation takes an explicit snapshot and returns a new one; nothing in
//! here holds shared mutable state.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod format;
pub mod ledger;
pub mod market;
pub mod rng;

pub use config::{ConfigError, MarketConfig, SimConfig};
pub use domain::{
    Direction, Effect, Instrument, Listing, NewsEvent, Portfolio, Position, SimulationState,
};
pub use ledger::{FlatPositionPolicy, Ledger, LedgerError};
pub use market::{DayAdvance, MarketEngine, NewsPolicy};
pub use rng::{RandomSource, ScriptedRandom, SeedHierarchy, SeededRandom};
