//! KidStock Session: the stateful shell around `kidstock-core`.
//!
//! A [`Session`] owns the current snapshot and applies [`Command`]s one at a
//! time: advance the day, buy, sell, reset. Each successful command writes a
//! [`Journal`] entry and saves the snapshot through [`Persistence`] when one is
//! attached. Storage failures are logged with `tracing` and never surface to
//! the caller.

pub mod command;
pub mod journal;
pub mod persistence;
pub mod session;
pub mod store;

pub use command::{Command, Outcome, SessionError, TradeReceipt};
pub use journal::{Activity, Journal, JournalEntry, TradeSide, QUIET_MARKET};
pub use persistence::{Persistence, Snapshot, DEFAULT_KEY, SNAPSHOT_VERSION};
pub use session::{Randomness, Session};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
