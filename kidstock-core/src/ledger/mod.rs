//! Portfolio ledger: buy/sell against a price with weighted-average cost.
//!
//! Both operations validate first and build a new portfolio only on success,
//! so a rejected order leaves the caller's snapshot untouched.

pub mod valuation;

pub use valuation::{holdings, valuate, HoldingReport, Valuation};

use crate::domain::{Portfolio, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("insufficient funds: order costs {needed} but only {available} available")]
    InsufficientFunds { needed: f64, available: f64 },
    #[error("insufficient holdings of {symbol}: tried to sell {requested}, holding {held}")]
    InsufficientHoldings {
        symbol: String,
        requested: u32,
        held: u32,
    },
    #[error("order quantity must be at least 1")]
    ZeroQuantity,
    #[error("buying {requested} more {symbol} would overflow the holding of {held}")]
    QuantityOverflow {
        symbol: String,
        requested: u32,
        held: u32,
    },
}

/// What happens to a position once its quantity reaches zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlatPositionPolicy {
    /// Delete the entry from the portfolio.
    #[default]
    Remove,
    /// Keep the entry with `quantity == 0` and its last average cost.
    Retain,
}

/// Order application rules.
///
/// Cash moves by exactly `price * quantity`; it is never rounded here.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    flat_policy: FlatPositionPolicy,
}

impl Ledger {
    pub fn new(flat_policy: FlatPositionPolicy) -> Self {
        Self { flat_policy }
    }

    pub fn flat_policy(&self) -> FlatPositionPolicy {
        self.flat_policy
    }

    /// Buy `quantity` shares of `symbol` at `price`.
    ///
    /// The new average cost is `(old_avg * old_qty + price * qty) / (old_qty + qty)`;
    /// a first buy (or a buy into a retained flat position) starts at `price`.
    pub fn buy(
        &self,
        portfolio: &Portfolio,
        symbol: &str,
        price: f64,
        quantity: u32,
    ) -> Result<Portfolio, LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::ZeroQuantity);
        }
        let cost = price * quantity as f64;
        if cost > portfolio.cash {
            return Err(LedgerError::InsufficientFunds {
                needed: cost,
                available: portfolio.cash,
            });
        }

        let position = match portfolio.holding(symbol) {
            Some(prev) => {
                let new_qty = prev.quantity.checked_add(quantity).ok_or_else(|| {
                    LedgerError::QuantityOverflow {
                        symbol: symbol.to_string(),
                        requested: quantity,
                        held: prev.quantity,
                    }
                })?;
                let avg = (prev.cost_basis() + cost) / new_qty as f64;
                Position::new(symbol, new_qty, avg)
            }
            None => Position::new(symbol, quantity, price),
        };

        let mut next = portfolio.clone();
        next.cash = portfolio.cash - cost;
        next.positions.insert(symbol.to_string(), position);

        tracing::debug!(symbol, quantity, price, cash = next.cash, "buy filled");
        Ok(next)
    }

    /// Sell `quantity` shares of `symbol` at `price`. Average cost is unchanged.
    pub fn sell(
        &self,
        portfolio: &Portfolio,
        symbol: &str,
        price: f64,
        quantity: u32,
    ) -> Result<Portfolio, LedgerError> {
        if quantity == 0 {
            return Err(LedgerError::ZeroQuantity);
        }
        let held = portfolio.held_quantity(symbol);
        if held < quantity {
            return Err(LedgerError::InsufficientHoldings {
                symbol: symbol.to_string(),
                requested: quantity,
                held,
            });
        }

        let mut next = portfolio.clone();
        next.cash = portfolio.cash + price * quantity as f64;

        let remaining = held - quantity;
        match (remaining, self.flat_policy) {
            (0, FlatPositionPolicy::Remove) => {
                next.positions.remove(symbol);
            }
            _ => {
                if let Some(pos) = next.positions.get_mut(symbol) {
                    pos.quantity = remaining;
                }
            }
        }

        tracing::debug!(symbol, quantity, price, cash = next.cash, "sell filled");
        Ok(next)
    }
}
