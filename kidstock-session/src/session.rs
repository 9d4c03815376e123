//! Session: owns the live `SimulationState` and applies commands to it.
//!
//! Every command runs to completion against the current snapshot. On success
//! the new snapshot replaces the old one, a journal entry is written and the
//! snapshot is saved best effort. On failure nothing changes.

use kidstock_core::ledger::{self, HoldingReport, Valuation};
use kidstock_core::market::{self, IndexDelta};
use kidstock_core::rng::{RandomSource, SeedHierarchy};
use kidstock_core::{
    catalog, ConfigError, Ledger, MarketEngine, NewsEvent, SimConfig, SimulationState,
};

use crate::command::{Command, Outcome, SessionError, TradeReceipt};
use crate::journal::{Journal, TradeSide};
use crate::persistence::Persistence;
use crate::store::{KeyValueStore, MemoryStore};

const MARKET_STREAM: &str = "market";
const ROSTER_STREAM: &str = "roster";

/// Where a session gets its random draws from.
pub enum Randomness {
    /// Caller-supplied source, used for every draw in sequence.
    Injected(Box<dyn RandomSource + Send>),
    /// Fresh per-day sources derived from a master seed.
    Seeded(SeedHierarchy),
}

impl Randomness {
    pub fn injected(source: impl RandomSource + Send + 'static) -> Self {
        Randomness::Injected(Box::new(source))
    }

    pub fn seeded(master_seed: u64) -> Self {
        Randomness::Seeded(SeedHierarchy::new(master_seed))
    }

    /// Run `f` against the source for `(game, day, stream)`.
    ///
    /// Each reset starts a new game, so seeded games never repeat a roster or
    /// a price path.
    fn draw<T>(
        &mut self,
        game: u32,
        day: u32,
        stream: &str,
        f: impl FnOnce(&mut dyn RandomSource) -> T,
    ) -> T {
        match self {
            Randomness::Injected(source) => f(source.as_mut()),
            Randomness::Seeded(hierarchy) => {
                let mut source = if game == 0 {
                    hierarchy.source_for(day, stream)
                } else {
                    hierarchy.source_for(day, &format!("{stream}/{game}"))
                };
                f(&mut source)
            }
        }
    }
}

impl std::fmt::Debug for Randomness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Randomness::Injected(_) => f.write_str("Injected(..)"),
            Randomness::Seeded(h) => f.debug_tuple("Seeded").field(&h.master_seed()).finish(),
        }
    }
}

#[derive(Debug)]
pub struct Session<S = MemoryStore> {
    config: SimConfig,
    engine: MarketEngine,
    ledger: Ledger,
    state: SimulationState,
    journal: Journal,
    randomness: Randomness,
    game: u32,
    persistence: Option<Persistence<S>>,
}

impl Session<MemoryStore> {
    /// Session without any persistence. Fails if `config` does not validate.
    pub fn in_memory(config: SimConfig, randomness: Randomness) -> Result<Self, ConfigError> {
        Self::build(config, randomness, None)
    }
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the saved snapshot if there is a usable one, otherwise start fresh.
    ///
    /// Fails only if `config` does not validate; storage problems fall back to a new game.
    pub fn open(
        config: SimConfig,
        randomness: Randomness,
        persistence: Persistence<S>,
    ) -> Result<Self, ConfigError> {
        Self::build(config, randomness, Some(persistence))
    }

    fn build(
        config: SimConfig,
        mut randomness: Randomness,
        persistence: Option<Persistence<S>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let restored = persistence
            .as_ref()
            .and_then(|p| p.load_snapshot())
            .filter(|snap| snap.state.day >= 1 && !snap.state.instruments.is_empty());

        let (state, game, journal) = match restored {
            Some(snap) => {
                tracing::info!(
                    day = snap.state.day,
                    cash = snap.state.portfolio.cash,
                    game = snap.game,
                    "restored saved session"
                );
                let journal = Journal::restore(config.journal_capacity, snap.journal);
                (snap.state, snap.game, journal)
            }
            None => {
                let state = randomness.draw(0, 1, ROSTER_STREAM, |rng| {
                    SimulationState::initial(&config, rng)
                });
                (state, 0, Journal::new(config.journal_capacity))
            }
        };

        Ok(Self {
            engine: MarketEngine::new(config.market.clone()),
            ledger: Ledger::new(config.flat_position_policy),
            config,
            state,
            journal,
            randomness,
            game,
            persistence,
        })
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let outcome = match command {
            Command::AdvanceDay => self.advance_day(),
            Command::Buy { symbol, quantity } => self.trade(TradeSide::Buy, &symbol, quantity)?,
            Command::Sell { symbol, quantity } => self.trade(TradeSide::Sell, &symbol, quantity)?,
            Command::Reset { confirmed } => self.reset(confirmed)?,
        };
        self.persist();
        Ok(outcome)
    }

    fn advance_day(&mut self) -> Outcome {
        let next_day = self.state.day + 1;
        let advance = self
            .randomness
            .draw(self.game, next_day, MARKET_STREAM, |rng| {
                self.engine
                    .advance_day(&self.state.instruments, &self.config.news, rng)
            });

        let headlines: Vec<String> = advance.news.iter().map(|n| n.title.clone()).collect();
        self.state.last_news = advance.headline().cloned();
        self.state.instruments = advance.instruments;
        self.state.day = next_day;
        self.journal.record_news(next_day, headlines.clone());

        Outcome::DayAdvanced {
            day: next_day,
            headlines,
        }
    }

    fn trade(
        &mut self,
        side: TradeSide,
        symbol: &str,
        quantity: u32,
    ) -> Result<Outcome, SessionError> {
        let price = self
            .state
            .price_of(symbol)
            .ok_or_else(|| SessionError::UnknownSymbol(symbol.to_string()))?;

        let portfolio = match side {
            TradeSide::Buy => self.ledger.buy(&self.state.portfolio, symbol, price, quantity),
            TradeSide::Sell => self.ledger.sell(&self.state.portfolio, symbol, price, quantity),
        }?;
        self.state.portfolio = portfolio;
        self.journal
            .record_trade(self.state.day, side, symbol, quantity, price);

        Ok(Outcome::Traded(TradeReceipt {
            side,
            symbol: symbol.to_string(),
            quantity,
            price,
            cash_after: self.state.portfolio.cash,
        }))
    }

    fn reset(&mut self, confirmed: bool) -> Result<Outcome, SessionError> {
        if !confirmed {
            return Err(SessionError::ResetNotConfirmed);
        }
        self.game = self.game.wrapping_add(1);
        let config = &self.config;
        self.state = self
            .randomness
            .draw(self.game, 1, ROSTER_STREAM, |rng| SimulationState::initial(config, rng));
        self.journal.clear();
        tracing::info!(
            cash = self.state.portfolio.cash,
            game = self.game,
            "session reset to starting state"
        );
        Ok(Outcome::Reset)
    }

    fn persist(&mut self) {
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save_session(&self.state, self.game, Some(&self.journal));
        }
    }

    /// Number of confirmed resets so far.
    pub fn game(&self) -> u32 {
        self.game
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn persistence(&self) -> Option<&Persistence<S>> {
        self.persistence.as_ref()
    }

    pub fn persistence_mut(&mut self) -> Option<&mut Persistence<S>> {
        self.persistence.as_mut()
    }

    pub fn valuation(&self) -> Valuation {
        ledger::valuate(
            &self.state.portfolio,
            &self.state.instruments,
            self.config.starting_cash,
        )
    }

    pub fn holdings(&self) -> Vec<HoldingReport> {
        ledger::holdings(&self.state.portfolio, &self.state.instruments)
    }

    /// Named index from the configured baskets.
    pub fn index(&self, name: &str) -> Option<IndexDelta> {
        self.config
            .indices
            .get(name)
            .map(|symbols| market::index_delta(&self.state.instruments, Some(symbols.as_slice())))
    }

    /// Every configured index, in name order.
    pub fn indices(&self) -> Vec<(String, IndexDelta)> {
        self.config
            .indices
            .iter()
            .map(|(name, symbols)| {
                (
                    name.clone(),
                    market::index_delta(&self.state.instruments, Some(symbols.as_slice())),
                )
            })
            .collect()
    }

    /// Pool events that move `symbol` directly.
    pub fn related_news(&self, symbol: &str) -> Vec<&NewsEvent> {
        catalog::news_mentioning(&self.config.news, symbol)
    }
}
