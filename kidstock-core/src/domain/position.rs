use serde::{Deserialize, Serialize};

/// Holding in one instrument.
///
/// `average_cost` only carries meaning while `quantity > 0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub symbol: String,
    pub quantity: u32,
    pub average_cost: f64,
}

impl Position {
    pub fn new(symbol: &str, quantity: u32, average_cost: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity,
            average_cost,
        }
    }

    pub fn is_flat(&self) -> bool {
        self.quantity == 0
    }

    pub fn market_value(&self, current_price: f64) -> f64 {
        self.quantity as f64 * current_price
    }

    pub fn cost_basis(&self) -> f64 {
        self.quantity as f64 * self.average_cost
    }

    pub fn unrealized_pnl(&self, current_price: f64) -> f64 {
        self.quantity as f64 * (current_price - self.average_cost)
    }

    /// Gain of the current price over the average cost, in percent.
    pub fn profit_pct(&self, current_price: f64) -> f64 {
        if self.average_cost > 0.0 {
            (current_price - self.average_cost) / self.average_cost * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valuation_helpers() {
        let pos = Position::new("KO", 2, 60.0);
        assert_eq!(pos.market_value(90.0), 180.0);
        assert_eq!(pos.cost_basis(), 120.0);
        assert_eq!(pos.unrealized_pnl(90.0), 60.0);
        assert_eq!(pos.profit_pct(90.0), 50.0);
    }

    #[test]
    fn profit_pct_is_zero_without_cost() {
        let pos = Position::new("KO", 0, 0.0);
        assert!(pos.is_flat());
        assert_eq!(pos.profit_pct(90.0), 0.0);
    }
}
