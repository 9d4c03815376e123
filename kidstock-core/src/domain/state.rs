//! SimulationState: the aggregate snapshot that gets saved and restored.

use super::{Instrument, NewsEvent, Portfolio};
use crate::config::SimConfig;
use crate::market::MarketEngine;
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// Aggregate root of one play session.
///
/// Instruments are kept as an ordered list so display order survives a
/// save/restore round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationState {
    pub day: u32,
    pub instruments: Vec<Instrument>,
    pub portfolio: Portfolio,
    #[serde(default)]
    pub last_news: Option<NewsEvent>,
}

impl SimulationState {
    pub fn new(instruments: Vec<Instrument>, starting_cash: f64) -> Self {
        Self {
            day: 1,
            instruments,
            portfolio: Portfolio::new(starting_cash),
            last_news: None,
        }
    }

    /// Day-one state with a freshly seeded roster.
    pub fn initial(config: &SimConfig, rng: &mut dyn RandomSource) -> Self {
        let engine = MarketEngine::new(config.market.clone());
        let instruments = engine.seed_instruments(&config.listings, rng);
        Self::new(instruments, config.starting_cash)
    }

    pub fn instrument(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.instrument(symbol).map(|i| i.price)
    }
}
