//! Portfolio valuation against current instrument prices.

use crate::domain::{Instrument, Portfolio};

/// Headline numbers for the portfolio screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub holdings_value: f64,
    pub total_equity: f64,
    /// Return on `starting_cash`, in percent.
    pub return_pct: f64,
}

/// Value the portfolio at current prices.
///
/// A position whose instrument is missing from the roster contributes 0.
pub fn valuate(portfolio: &Portfolio, instruments: &[Instrument], starting_cash: f64) -> Valuation {
    let holdings_value: f64 = portfolio
        .open_positions()
        .map(|pos| pos.market_value(price_of(instruments, &pos.symbol).unwrap_or(0.0)))
        .sum();
    let total_equity = portfolio.cash + holdings_value;
    let return_pct = if starting_cash != 0.0 {
        (total_equity - starting_cash) / starting_cash * 100.0
    } else {
        0.0
    };
    Valuation {
        holdings_value,
        total_equity,
        return_pct,
    }
}

/// One row of the holdings table.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingReport {
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    pub average_cost: f64,
    pub price: f64,
    pub market_value: f64,
    pub unrealized_pnl: f64,
    pub profit_pct: f64,
    /// Share of total holdings value, in `[0, 1]`.
    pub weight: f64,
}

/// Per-position breakdown, in symbol order, for open positions only.
pub fn holdings(portfolio: &Portfolio, instruments: &[Instrument]) -> Vec<HoldingReport> {
    let mut rows: Vec<HoldingReport> = portfolio
        .open_positions()
        .map(|pos| {
            let inst = instruments.iter().find(|i| i.symbol == pos.symbol);
            let price = inst.map_or(0.0, |i| i.price);
            HoldingReport {
                symbol: pos.symbol.clone(),
                name: inst.map_or_else(|| pos.symbol.clone(), |i| i.name.clone()),
                quantity: pos.quantity,
                average_cost: pos.average_cost,
                price,
                market_value: pos.market_value(price),
                unrealized_pnl: pos.unrealized_pnl(price),
                profit_pct: pos.profit_pct(price),
                weight: 0.0,
            }
        })
        .collect();

    let total: f64 = rows.iter().map(|r| r.market_value).sum();
    if total > 0.0 {
        for row in &mut rows {
            row.weight = row.market_value / total;
        }
    }
    rows
}

fn price_of(instruments: &[Instrument], symbol: &str) -> Option<f64> {
    instruments.iter().find(|i| i.symbol == symbol).map(|i| i.price)
}
