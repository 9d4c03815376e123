//! Activity journal: the newest-first log of trades and headlines.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Headline recorded for a day that drew no news.
pub const QUIET_MARKET: &str = "No special news today. The market is calm.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Activity {
    Trade {
        side: TradeSide,
        symbol: String,
        quantity: u32,
        price: f64,
    },
    News {
        headlines: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub day: u32,
    pub activity: Activity,
}

/// Bounded journal; oldest entries fall off the end.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: VecDeque<JournalEntry>,
    capacity: usize,
}

impl Journal {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(256)),
            capacity,
        }
    }

    /// Rebuild a journal from saved entries (newest first), keeping at most `capacity`.
    pub fn restore(capacity: usize, entries: Vec<JournalEntry>) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    pub fn record(&mut self, day: u32, activity: Activity) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(JournalEntry { day, activity });
        self.entries.truncate(self.capacity);
    }

    pub fn record_trade(
        &mut self,
        day: u32,
        side: TradeSide,
        symbol: &str,
        quantity: u32,
        price: f64,
    ) {
        self.record(
            day,
            Activity::Trade {
                side,
                symbol: symbol.to_string(),
                quantity,
                price,
            },
        );
    }

    /// Record the day's headlines, or the quiet-market line when there are none.
    pub fn record_news(&mut self, day: u32, headlines: Vec<String>) {
        let headlines = if headlines.is_empty() {
            vec![QUIET_MARKET.to_string()]
        } else {
            headlines
        };
        self.record(day, Activity::News { headlines });
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &JournalEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&JournalEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
