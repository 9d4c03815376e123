use serde::{Deserialize, Serialize};

/// Static description of a tradable instrument, before it has a price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Listing {
    pub fn new(symbol: &str, name: &str, description: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// A simulated instrument and its bounded price series.
///
/// `price_history` is most-recent-last and its last point always equals `price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub price_history: Vec<f64>,
}

impl Instrument {
    /// New instrument whose history starts with the seed price.
    pub fn new(listing: &Listing, seed_price: f64) -> Self {
        Self {
            symbol: listing.symbol.clone(),
            name: listing.name.clone(),
            description: listing.description.clone(),
            price: seed_price,
            price_history: vec![seed_price],
        }
    }

    /// Record a new price, dropping the oldest points beyond `window`.
    pub fn push_price(&mut self, price: f64, window: usize) {
        self.price = price;
        self.price_history.push(price);
        let window = window.max(1);
        if self.price_history.len() > window {
            let excess = self.price_history.len() - window;
            self.price_history.drain(..excess);
        }
    }

    /// Price one day ago, or the current price if there is no earlier point.
    pub fn previous_price(&self) -> f64 {
        match self.price_history.len() {
            0 | 1 => self.price,
            n => self.price_history[n - 2],
        }
    }

    /// Day-over-day change in percent.
    pub fn change_pct(&self) -> f64 {
        let prev = self.previous_price();
        if prev == 0.0 {
            0.0
        } else {
            (self.price - prev) / prev * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candy() -> Instrument {
        Instrument::new(&Listing::new("CNDY", "Candy Co", "Sweets"), 50.0)
    }

    #[test]
    fn new_instrument_starts_history_with_seed() {
        let inst = candy();
        assert_eq!(inst.price, 50.0);
        assert_eq!(inst.price_history, vec![50.0]);
        assert_eq!(inst.previous_price(), 50.0);
        assert_eq!(inst.change_pct(), 0.0);
    }

    #[test]
    fn push_price_truncates_oldest_points() {
        let mut inst = candy();
        for p in 51..=55 {
            inst.push_price(p as f64, 3);
        }
        assert_eq!(inst.price_history, vec![53.0, 54.0, 55.0]);
        assert_eq!(inst.price, 55.0);
    }

    #[test]
    fn change_pct_uses_previous_point() {
        let mut inst = candy();
        inst.push_price(55.0, 60);
        assert_eq!(inst.previous_price(), 50.0);
        assert!((inst.change_pct() - 10.0).abs() < 1e-12);
    }
}
