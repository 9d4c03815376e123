//! Simulation configuration, loadable from TOML.
//!
//! Every field has a default matching the classic game: 1,000 starting coins,
//! ±5% daily noise, ±5% market-wide shocks, a 60-day chart and whole-coin prices.

use crate::catalog;
use crate::domain::{Listing, NewsEvent};
use crate::ledger::FlatPositionPolicy;
use crate::market::NewsPolicy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Price model parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarketConfig {
    /// Half-width of the uniform daily noise (`0.05` = ±5%).
    pub noise_amplitude: f64,
    /// Shock applied by a market-wide up/down event.
    pub market_shock: f64,
    /// Maximum number of points kept in each price history.
    pub history_window: usize,
    /// Display precision of prices and cash; 0 means whole coins.
    pub price_decimals: u32,
    /// Floor applied after every day advance.
    pub min_price: f64,
    /// Seed prices are drawn from `[seed_price_min, seed_price_max)`.
    pub seed_price_min: f64,
    pub seed_price_max: f64,
    pub news_policy: NewsPolicy,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            noise_amplitude: 0.05,
            market_shock: 0.05,
            history_window: 60,
            price_decimals: 0,
            min_price: 1.0,
            seed_price_min: 50.0,
            seed_price_max: 100.0,
            news_policy: NewsPolicy::Single,
        }
    }
}

/// Top-level configuration for a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub starting_cash: f64,
    pub market: MarketConfig,
    pub flat_position_policy: FlatPositionPolicy,
    /// Maximum number of entries kept in the activity journal.
    pub journal_capacity: usize,
    pub listings: Vec<Listing>,
    pub news: Vec<NewsEvent>,
    pub indices: BTreeMap<String, Vec<String>>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            starting_cash: 1_000.0,
            market: MarketConfig::default(),
            flat_position_policy: FlatPositionPolicy::Remove,
            journal_capacity: 50,
            listings: catalog::default_listings(),
            news: catalog::default_news(),
            indices: catalog::default_indices(),
        }
    }
}

impl SimConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.market;
        if !(self.starting_cash > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "starting_cash must be positive, got {}",
                self.starting_cash
            )));
        }
        if !(0.0..1.0).contains(&m.noise_amplitude) {
            return Err(ConfigError::Invalid(format!(
                "noise_amplitude must be in [0, 1), got {}",
                m.noise_amplitude
            )));
        }
        if !(0.0..1.0).contains(&m.market_shock) {
            return Err(ConfigError::Invalid(format!(
                "market_shock must be in [0, 1), got {}",
                m.market_shock
            )));
        }
        if m.history_window == 0 {
            return Err(ConfigError::Invalid("history_window must be at least 1".into()));
        }
        if m.price_decimals > 6 {
            return Err(ConfigError::Invalid(format!(
                "price_decimals must be at most 6, got {}",
                m.price_decimals
            )));
        }
        if !(m.min_price > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "min_price must be positive, got {}",
                m.min_price
            )));
        }
        if m.seed_price_min < m.min_price || m.seed_price_max <= m.seed_price_min {
            return Err(ConfigError::Invalid(format!(
                "seed price range [{}, {}) must be non-empty and at or above min_price {}",
                m.seed_price_min, m.seed_price_max, m.min_price
            )));
        }
        if self.listings.is_empty() {
            return Err(ConfigError::Invalid("at least one listing is required".into()));
        }
        let mut seen = HashSet::new();
        for listing in &self.listings {
            if !seen.insert(listing.symbol.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate symbol '{}'",
                    listing.symbol
                )));
            }
        }
        Ok(())
    }
}
