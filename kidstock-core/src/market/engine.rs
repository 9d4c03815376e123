//! Day-advance price model.
//!
//! Each day every instrument moves by
//!
//! ```text
//! factor    = noise + Σ symbol impacts + Σ market-wide shocks
//! new_price = max(min_price, round(old_price * (1 + factor)))
//! ```
//!
//! where `noise` is uniform in `±noise_amplitude`.
//!
//! Draw order is fixed so a scripted [`RandomSource`] can pin every outcome:
//! news selection first, then one noise draw per instrument in roster order.

use crate::config::MarketConfig;
use crate::domain::{Instrument, Listing, NewsEvent};
use crate::format::{floor_to, round_to};
use crate::rng::RandomSource;
use serde::{Deserialize, Serialize};

/// How many news events a day draws from the pool.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NewsPolicy {
    /// Exactly one event, chosen uniformly (one draw).
    #[default]
    Single,
    /// Zero to `max` distinct events: shuffle the pool (`len - 1` draws),
    /// then keep the first `floor(r * (max + 1))` (one draw).
    UpTo { max: usize },
}

/// Result of one day advance.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAdvance {
    pub instruments: Vec<Instrument>,
    /// Events drawn today, in draw order. Empty on a quiet day.
    pub news: Vec<NewsEvent>,
}

impl DayAdvance {
    /// First event of the day, the one shown as the headline.
    pub fn headline(&self) -> Option<&NewsEvent> {
        self.news.first()
    }
}

/// Stateless price engine parameterised by [`MarketConfig`].
#[derive(Debug, Clone)]
pub struct MarketEngine {
    config: MarketConfig,
}

impl MarketEngine {
    pub fn new(config: MarketConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Build the starting roster with prices drawn from the seed range.
    pub fn seed_instruments(
        &self,
        listings: &[Listing],
        rng: &mut dyn RandomSource,
    ) -> Vec<Instrument> {
        let lo = self.config.seed_price_min;
        let span = self.config.seed_price_max - lo;
        listings
            .iter()
            .map(|listing| {
                let raw = lo + rng.next_f64() * span;
                let price = floor_to(raw, self.config.price_decimals).max(lo);
                Instrument::new(listing, price)
            })
            .collect()
    }

    /// Advance every instrument by one day.
    ///
    /// The inputs are not modified. An empty news pool simply yields a quiet day.
    pub fn advance_day(
        &self,
        instruments: &[Instrument],
        news_pool: &[NewsEvent],
        rng: &mut dyn RandomSource,
    ) -> DayAdvance {
        let news = self.draw_news(news_pool, rng);

        let instruments: Vec<Instrument> = instruments
            .iter()
            .map(|inst| {
                let mut next = inst.clone();
                let noise = (rng.next_f64() - 0.5) * 2.0 * self.config.noise_amplitude;
                let shock: f64 = news
                    .iter()
                    .map(|event| event.impact_on(&inst.symbol, self.config.market_shock))
                    .sum();
                next.push_price(
                    self.next_price(inst.price, noise + shock),
                    self.config.history_window,
                );
                next
            })
            .collect();

        tracing::debug!(
            headlines = news.len(),
            instruments = instruments.len(),
            "advanced market by one day"
        );

        DayAdvance { instruments, news }
    }

    /// Apply `factor` to `price`, round to display precision, floor at `min_price`.
    pub fn next_price(&self, price: f64, factor: f64) -> f64 {
        let moved = round_to(price * (1.0 + factor), self.config.price_decimals);
        if moved.is_finite() {
            moved.max(self.config.min_price)
        } else {
            self.config.min_price
        }
    }

    fn draw_news(&self, pool: &[NewsEvent], rng: &mut dyn RandomSource) -> Vec<NewsEvent> {
        if pool.is_empty() {
            return Vec::new();
        }
        match self.config.news_policy {
            NewsPolicy::Single => {
                let idx = pick_index(rng.next_f64(), pool.len());
                vec![pool[idx].clone()]
            }
            NewsPolicy::UpTo { max } => {
                let mut order: Vec<usize> = (0..pool.len()).collect();
                for i in (1..order.len()).rev() {
                    let j = pick_index(rng.next_f64(), i + 1);
                    order.swap(i, j);
                }
                let count = pick_index(rng.next_f64(), max + 1).min(pool.len());
                order[..count].iter().map(|&i| pool[i].clone()).collect()
            }
        }
    }
}

fn pick_index(r: f64, len: usize) -> usize {
    ((r * len as f64).floor() as usize).min(len.saturating_sub(1))
}
