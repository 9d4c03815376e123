use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of a market-wide move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up => 1.0,
            Direction::Down => -1.0,
        }
    }
}

/// Price impact of a news event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Signed fractional shock per symbol (`0.05` = +5%).
    PerInstrument { impacts: BTreeMap<String, f64> },
    /// The whole market moves by the configured market shock.
    MarketWide { direction: Direction },
}

/// A headline drawn from the news pool for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsEvent {
    pub title: String,
    pub effect: Effect,
}

impl NewsEvent {
    pub fn per_instrument(title: &str, impacts: &[(&str, f64)]) -> Self {
        Self {
            title: title.to_string(),
            effect: Effect::PerInstrument {
                impacts: impacts
                    .iter()
                    .map(|(sym, impact)| (sym.to_string(), *impact))
                    .collect(),
            },
        }
    }

    pub fn market_wide(title: &str, direction: Direction) -> Self {
        Self {
            title: title.to_string(),
            effect: Effect::MarketWide { direction },
        }
    }

    /// Fractional shock this event applies to `symbol`.
    pub fn impact_on(&self, symbol: &str, market_shock: f64) -> f64 {
        match &self.effect {
            Effect::PerInstrument { impacts } => impacts.get(symbol).copied().unwrap_or(0.0),
            Effect::MarketWide { direction } => direction.sign() * market_shock,
        }
    }

    /// Whether the event names `symbol` directly (market-wide events do not).
    pub fn mentions(&self, symbol: &str) -> bool {
        matches!(&self.effect, Effect::PerInstrument { impacts } if impacts.contains_key(symbol))
    }
}
