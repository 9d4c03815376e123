//! Snapshot persistence: JSON save/load of `SimulationState`, the activity
//! journal and the reset counter across restarts.
//!
//! Persistence is best effort. A snapshot that cannot be read is treated as
//! absent, and a snapshot that cannot be written is logged and dropped; the
//! in-memory state stays authoritative either way.

use chrono::{DateTime, Utc};
use kidstock_core::SimulationState;
use serde::{Deserialize, Serialize};

use crate::journal::{Journal, JournalEntry};
use crate::store::{KeyValueStore, StoreError};

/// Storage key the snapshot lives under unless told otherwise.
pub const DEFAULT_KEY: &str = "kids-stock-app";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything needed to resume a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub state: SimulationState,
    /// Number of confirmed resets before the current game.
    pub game: u32,
    /// Journal entries, newest first.
    pub journal: Vec<JournalEntry>,
}

/// On-disk wrapper around the state.
#[derive(Debug, Deserialize)]
struct Envelope {
    version: u32,
    #[allow(dead_code)]
    saved_at: DateTime<Utc>,
    state: SimulationState,
    #[serde(default)]
    game: u32,
    #[serde(default)]
    journal: Vec<JournalEntry>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    state: &'a SimulationState,
    game: u32,
    journal: Vec<&'a JournalEntry>,
}

/// Encode a bare state as a versioned JSON snapshot.
pub fn encode(state: &SimulationState) -> Result<String, serde_json::Error> {
    encode_session(state, 0, None)
}

/// Encode a state together with its game counter and journal.
pub fn encode_session(
    state: &SimulationState,
    game: u32,
    journal: Option<&Journal>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        state,
        game,
        journal: journal.map(|j| j.entries().collect()).unwrap_or_default(),
    })
}

/// Decode the state from a snapshot.
pub fn decode(payload: &str) -> Option<SimulationState> {
    decode_snapshot(payload).map(|snapshot| snapshot.state)
}

/// Decode a snapshot. Returns `None` for malformed JSON or an unknown version.
pub fn decode_snapshot(payload: &str) -> Option<Snapshot> {
    match serde_json::from_str::<Envelope>(payload) {
        Ok(env) if env.version == SNAPSHOT_VERSION => Some(Snapshot {
            state: env.state,
            game: env.game,
            journal: env.journal,
        }),
        Ok(env) => {
            tracing::warn!(version = env.version, "ignoring snapshot with unknown version");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable snapshot");
            None
        }
    }
}

/// Saves and restores the session snapshot through a [`KeyValueStore`].
#[derive(Debug)]
pub struct Persistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load the saved state. Missing, unreadable or corrupt snapshots yield `None`.
    pub fn load(&self) -> Option<SimulationState> {
        self.load_snapshot().map(|snapshot| snapshot.state)
    }

    /// Load the full snapshot, journal and game counter included.
    pub fn load_snapshot(&self) -> Option<Snapshot> {
        match self.store.get(&self.key) {
            Ok(Some(payload)) => decode_snapshot(&payload),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "snapshot store unavailable on load");
                None
            }
        }
    }

    /// Save the state, surfacing any failure.
    pub fn try_save(&mut self, state: &SimulationState) -> Result<(), StoreError> {
        self.try_save_session(state, 0, None)
    }

    pub fn try_save_session(
        &mut self,
        state: &SimulationState,
        game: u32,
        journal: Option<&Journal>,
    ) -> Result<(), StoreError> {
        let payload = encode_session(state, game, journal)?;
        self.store.set(&self.key, &payload)
    }

    /// Save the state, logging and swallowing any failure. Returns whether it was written.
    pub fn save(&mut self, state: &SimulationState) -> bool {
        self.save_session(state, 0, None)
    }

    /// Best-effort save of the state with its game counter and journal.
    pub fn save_session(
        &mut self,
        state: &SimulationState,
        game: u32,
        journal: Option<&Journal>,
    ) -> bool {
        match self.try_save_session(state, game, journal) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.key, day = state.day, error = %e, "snapshot not saved");
                false
            }
        }
    }
}
