//! Portfolio: cash plus every position the player holds.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cash balance and per-symbol positions.
///
/// Depending on the ledger's flat-position policy a sold-out symbol is either
/// absent or present with `quantity == 0`. The accessors below hide that
/// difference: a flat position reads the same as no position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub cash: f64,
    #[serde(default)]
    pub positions: BTreeMap<String, Position>,
}

impl Portfolio {
    pub fn new(cash: f64) -> Self {
        Self {
            cash,
            positions: BTreeMap::new(),
        }
    }

    /// Whether a symbol has an open (non-flat) position.
    pub fn has_position(&self, symbol: &str) -> bool {
        self.holding(symbol).is_some()
    }

    /// Open position for `symbol`, if any.
    pub fn holding(&self, symbol: &str) -> Option<&Position> {
        self.positions.get(symbol).filter(|p| !p.is_flat())
    }

    pub fn held_quantity(&self, symbol: &str) -> u32 {
        self.holding(symbol).map_or(0, |p| p.quantity)
    }

    /// Open positions in symbol order.
    pub fn open_positions(&self) -> impl Iterator<Item = &Position> {
        self.positions.values().filter(|p| !p.is_flat())
    }
}
