//! Property tests for ledger and market invariants.
//!
//! Uses proptest to verify:
//! 1. Cash accounting: cash equals starting cash minus executed buy costs
//! 2. Sell invariance: selling never moves the average cost
//! 3. Weighted-mean bound: a buy lands the average between old average and price
//! 4. Price floor: a day advance never produces a price below 1
//! 5. Equity identity: total equity equals cash plus marked holdings
//! 6. Snapshot JSON round trip: a reachable state survives serialization

use proptest::prelude::*;
use kidstock_core::config::{MarketConfig, SimConfig};
use kidstock_core::domain::{Direction, Instrument, Listing, NewsEvent, Portfolio, SimulationState};
use kidstock_core::ledger::{valuate, FlatPositionPolicy, Ledger};
use kidstock_core::market::{MarketEngine, NewsPolicy};
use kidstock_core::rng::{ScriptedRandom, SeededRandom};

// ── Strategies (proptest) ────────────────────────────────────────────

/// Prices in whole cents between 0.01 and 199.99.
fn arb_price() -> impl Strategy<Value = f64> {
    (1u32..20_000).prop_map(|cents| f64::from(cents) / 100.0)
}

fn arb_quantity() -> impl Strategy<Value = u32> {
    1u32..5
}

fn arb_symbol() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["KO", "PEP", "NIN", "AAPL"])
}

fn arb_orders() -> impl Strategy<Value = Vec<(&'static str, f64, u32)>> {
    prop::collection::vec((arb_symbol(), arb_price(), arb_quantity()), 1..30)
}

// ── 1. Cash accounting ───────────────────────────────────────────────

proptest! {
    /// cash == start - Σ(price * qty) over the buys that executed.
    #[test]
    fn cash_tracks_executed_buys(orders in arb_orders()) {
        let ledger = Ledger::default();
        let start = 1_000.0;
        let mut portfolio = Portfolio::new(start);
        let mut spent = 0.0;

        for (symbol, price, qty) in orders {
            if let Ok(next) = ledger.buy(&portfolio, symbol, price, qty) {
                spent += price * qty as f64;
                portfolio = next;
            }
            prop_assert!(portfolio.cash >= 0.0);
        }

        prop_assert!((portfolio.cash - (start - spent)).abs() < 1e-6,
            "cash {} vs {}", portfolio.cash, start - spent);
    }
}

// ── 2. Sell invariance ───────────────────────────────────────────────

proptest! {
    /// Selling changes quantity and cash only.
    #[test]
    fn sell_preserves_average_cost(
        buys in prop::collection::vec((arb_price(), arb_quantity()), 1..10),
        sell_price in arb_price(),
        sell_qty in arb_quantity(),
        retain in any::<bool>(),
    ) {
        let policy = if retain { FlatPositionPolicy::Retain } else { FlatPositionPolicy::Remove };
        let ledger = Ledger::new(policy);
        let mut portfolio = Portfolio::new(1_000_000.0);
        for (price, qty) in buys {
            portfolio = ledger.buy(&portfolio, "KO", price, qty).unwrap();
        }
        let before = portfolio.holding("KO").unwrap().clone();

        match ledger.sell(&portfolio, "KO", sell_price, sell_qty) {
            Ok(after) => {
                prop_assert_eq!(after.cash, portfolio.cash + sell_price * sell_qty as f64);
                match after.holding("KO") {
                    Some(pos) => {
                        prop_assert_eq!(pos.average_cost, before.average_cost);
                        prop_assert_eq!(pos.quantity, before.quantity - sell_qty);
                    }
                    None => prop_assert_eq!(before.quantity, sell_qty),
                }
            }
            Err(_) => prop_assert!(sell_qty > before.quantity),
        }
    }
}

// ── 3. Weighted-mean bound ───────────────────────────────────────────

proptest! {
    /// min(old_avg, price) <= new_avg <= max(old_avg, price)
    #[test]
    fn average_cost_stays_between_old_average_and_price(
        buys in prop::collection::vec((arb_price(), arb_quantity()), 1..20),
    ) {
        let ledger = Ledger::default();
        let mut portfolio = Portfolio::new(1_000_000.0);
        for (price, qty) in buys {
            let old = portfolio.holding("KO").map(|p| p.average_cost);
            portfolio = ledger.buy(&portfolio, "KO", price, qty).unwrap();
            let new_avg = portfolio.holding("KO").unwrap().average_cost;
            match old {
                Some(old_avg) => {
                    let lo = old_avg.min(price) - 1e-9;
                    let hi = old_avg.max(price) + 1e-9;
                    prop_assert!(new_avg >= lo && new_avg <= hi,
                        "avg {} outside [{}, {}]", new_avg, lo, hi);
                }
                None => prop_assert_eq!(new_avg, price),
            }
        }
    }
}

// ── 4. Price floor ───────────────────────────────────────────────────

fn harsh_pool() -> Vec<NewsEvent> {
    vec![
        NewsEvent::per_instrument("A collapses", &[("A", -0.95)]),
        NewsEvent::per_instrument("B collapses", &[("B", -0.60)]),
        NewsEvent::market_wide("Crash", Direction::Down),
        NewsEvent::market_wide("Rally", Direction::Up),
    ]
}

proptest! {
    /// No instrument ever drops below the 1-coin floor.
    #[test]
    fn advance_never_goes_below_one(
        seed in any::<u64>(),
        start_a in arb_price(),
        start_b in arb_price(),
        days in 1usize..40,
        up_to in any::<bool>(),
    ) {
        let config = MarketConfig {
            noise_amplitude: 0.5,
            market_shock: 0.5,
            news_policy: if up_to { NewsPolicy::UpTo { max: 2 } } else { NewsPolicy::Single },
            ..MarketConfig::default()
        };
        let engine = MarketEngine::new(config);
        let mut roster = vec![
            Instrument::new(&Listing::new("A", "A", ""), start_a),
            Instrument::new(&Listing::new("B", "B", ""), start_b),
        ];
        let pool = harsh_pool();
        let mut rng = SeededRandom::from_seed(seed);

        for _ in 0..days {
            let before_len: Vec<usize> = roster.iter().map(|i| i.price_history.len()).collect();
            roster = engine.advance_day(&roster, &pool, &mut rng).instruments;
            for (inst, len) in roster.iter().zip(before_len) {
                prop_assert!(inst.price >= 1.0, "{} fell to {}", inst.symbol, inst.price);
                prop_assert!(inst.price_history.len() >= len);
                prop_assert!(inst.price_history.len() <= 60);
            }
        }
    }

    /// Same as above, driven by arbitrary scripted draws (including edges).
    #[test]
    fn advance_floor_holds_for_any_draw(
        draws in prop::collection::vec(0.0..1.0_f64, 1..8),
        price in arb_price(),
    ) {
        let engine = MarketEngine::new(MarketConfig::default());
        let roster = vec![Instrument::new(&Listing::new("A", "A", ""), price)];
        let mut rng = ScriptedRandom::sequence(draws);
        let day = engine.advance_day(&roster, &harsh_pool(), &mut rng);
        prop_assert!(day.instruments[0].price >= 1.0);
    }
}

// ── 5. Equity identity ───────────────────────────────────────────────

proptest! {
    /// total_equity == cash + Σ qty * price, recomputed independently.
    #[test]
    fn equity_identity_holds(
        orders in arb_orders(),
        marks in prop::collection::vec(arb_price(), 4),
    ) {
        let ledger = Ledger::default();
        let mut portfolio = Portfolio::new(1_000.0);
        for (symbol, price, qty) in orders {
            if let Ok(next) = ledger.buy(&portfolio, symbol, price, qty) {
                portfolio = next;
            }
        }
        let roster: Vec<Instrument> = ["KO", "PEP", "NIN", "AAPL"]
            .iter()
            .zip(&marks)
            .map(|(sym, &mark)| Instrument::new(&Listing::new(sym, sym, ""), mark))
            .collect();

        let v = valuate(&portfolio, &roster, 1_000.0);
        let independent: f64 = portfolio
            .positions
            .values()
            .map(|pos| {
                let px = roster.iter().find(|i| i.symbol == pos.symbol).unwrap().price;
                pos.quantity as f64 * px
            })
            .sum();

        prop_assert!((v.total_equity - (portfolio.cash + independent)).abs() < 1e-6);
        prop_assert!((v.holdings_value - independent).abs() < 1e-6);
    }
}

// ── 6. Snapshot JSON round trip ──────────────────────────────────────

proptest! {
    /// A state reached by random play serializes and parses back unchanged.
    #[test]
    fn reachable_state_roundtrips_through_json(
        seed in any::<u64>(),
        steps in prop::collection::vec((0u8..3, 0usize..29, arb_quantity()), 0..25),
    ) {
        let config = SimConfig::default();
        let engine = MarketEngine::new(config.market.clone());
        let ledger = Ledger::new(config.flat_position_policy);
        let mut rng = SeededRandom::from_seed(seed);
        let mut state = SimulationState::initial(&config, &mut rng);

        for (action, idx, qty) in steps {
            let symbol = state.instruments[idx].symbol.clone();
            let price = state.instruments[idx].price;
            match action {
                0 => {
                    let day = engine.advance_day(&state.instruments, &config.news, &mut rng);
                    state.last_news = day.headline().cloned();
                    state.instruments = day.instruments;
                    state.day += 1;
                }
                1 => {
                    if let Ok(p) = ledger.buy(&state.portfolio, &symbol, price, qty) {
                        state.portfolio = p;
                    }
                }
                _ => {
                    if let Ok(p) = ledger.sell(&state.portfolio, &symbol, price, qty) {
                        state.portfolio = p;
                    }
                }
            }
        }

        let json = serde_json::to_string(&state).unwrap();
        let restored: SimulationState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, state);
    }
}
