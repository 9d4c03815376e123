//! Commands a presentation layer dispatches, and what comes back.

use crate::journal::TradeSide;
use kidstock_core::format::format_coins;
use kidstock_core::LedgerError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move the market forward one day.
    AdvanceDay,
    Buy { symbol: String, quantity: u32 },
    Sell { symbol: String, quantity: u32 },
    /// Throw away all progress. Ignored unless `confirmed`.
    Reset { confirmed: bool },
}

impl Command {
    pub fn buy(symbol: &str, quantity: u32) -> Self {
        Command::Buy {
            symbol: symbol.to_string(),
            quantity,
        }
    }

    pub fn sell(symbol: &str, quantity: u32) -> Self {
        Command::Sell {
            symbol: symbol.to_string(),
            quantity,
        }
    }
}

/// Executed trade, as shown in a confirmation toast.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeReceipt {
    pub side: TradeSide,
    pub symbol: String,
    pub quantity: u32,
    pub price: f64,
    pub cash_after: f64,
}

impl TradeReceipt {
    /// One-line confirmation, prices shown at `decimals` places.
    pub fn message(&self, decimals: u32) -> String {
        let verb = match self.side {
            TradeSide::Buy => "Bought",
            TradeSide::Sell => "Sold",
        };
        format!(
            "{verb} {} {} at {}. Cash left: {}",
            self.quantity,
            self.symbol,
            format_coins(self.price, decimals),
            format_coins(self.cash_after, decimals),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    DayAdvanced { day: u32, headlines: Vec<String> },
    Traded(TradeReceipt),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),
    #[error("reset needs explicit confirmation")]
    ResetNotConfirmed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_message() {
        let receipt = TradeReceipt {
            side: TradeSide::Sell,
            symbol: "KO".into(),
            quantity: 3,
            price: 90.0,
            cash_after: 1_240.0,
        };
        assert_eq!(receipt.message(0), "Sold 3 KO at 90 coins. Cash left: 1,240 coins");
    }
}
