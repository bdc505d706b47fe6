//! Best score and leaderboard persistence
//!
//! Features:
//! - String key-value store seam (LocalStorage on web, in-memory elsewhere)
//! - Best score stored as a plain integer, 999 meaning "none yet"
//! - Leaderboard stored as a JSON array
//! - Corrupt or missing data loads as "no prior record"

use std::collections::HashMap;
use std::fmt;

use crate::consts::NO_BEST_SCORE;
use crate::highscores::HighScores;
use crate::sim::GameEvent;

/// Storage key for the best score
pub const BEST_SCORE_KEY: &str = "carrommeta_high";
/// Storage key for the leaderboard
pub const LEADERBOARD_KEY: &str = "carrommeta_leaderboard";

/// Why a write did not stick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend (private browsing, native build without one)
    Unavailable,
    /// The backend refused the write (quota, security policy)
    Rejected(String),
    /// Value could not be encoded
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Rejected(msg) => write!(f, "storage rejected write: {}", msg),
            StorageError::Encode(msg) => write!(f, "could not encode value: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Encode(e.to_string())
    }
}

/// Minimal string key-value store, shaped after the Web Storage API
pub trait KeyValueStore {
    /// Read a value. Backend failures read as missing.
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store for native builds and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Parse a stored best score. Anything that isn't a non-negative integer
/// means no record.
pub fn parse_best_score(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(NO_BEST_SCORE)
}

/// Everything that outlives a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Records {
    /// Lowest shot count on record (NO_BEST_SCORE = none)
    pub best_score: u32,
    pub history: HighScores,
}

impl Default for Records {
    fn default() -> Self {
        Self {
            best_score: NO_BEST_SCORE,
            history: HighScores::new(),
        }
    }
}

impl Records {
    /// Load records, falling back to empty ones for anything unreadable
    pub fn load(store: &impl KeyValueStore) -> Self {
        let best_score = parse_best_score(store.get_item(BEST_SCORE_KEY).as_deref());
        let history = store
            .get_item(LEADERBOARD_KEY)
            .map(|json| HighScores::from_json(&json))
            .unwrap_or_default();
        log::info!(
            "Loaded records: best {}, {} leaderboard entries",
            best_score,
            history.len()
        );
        Self {
            best_score,
            history,
        }
    }

    /// Write both entries back
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        store.set_item(BEST_SCORE_KEY, &self.best_score.to_string())?;
        store.set_item(LEADERBOARD_KEY, &self.history.to_json()?)?;
        log::info!("Records saved ({} entries)", self.history.len());
        Ok(())
    }

    /// Fold a finished game in. Returns its leaderboard rank, if it made one.
    pub fn record(&mut self, final_score: u32, at: impl Into<String>) -> Option<usize> {
        self.best_score = self.best_score.min(final_score);
        self.history.add_score(final_score, at)
    }

    /// Persistence side of the session: record and save on `SessionEnded`,
    /// ignore everything else. Returns true if the event was recorded.
    pub fn handle_event(
        &mut self,
        event: &GameEvent,
        store: &mut impl KeyValueStore,
        at: impl Into<String>,
    ) -> bool {
        let GameEvent::SessionEnded { final_score } = *event else {
            return false;
        };
        if let Some(rank) = self.record(final_score, at) {
            log::info!("Leaderboard rank #{} with {} shots", rank, final_score);
        }
        if let Err(e) = self.save(store) {
            log::warn!("Could not save records: {}", e);
        }
        true
    }

    pub fn best(&self) -> Option<u32> {
        (self.best_score != NO_BEST_SCORE).then_some(self.best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that accepts reads but refuses every write
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.0.get_item(key)
        }
        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected("quota exceeded".into()))
        }
        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_parse_best_score() {
        assert_eq!(parse_best_score(None), NO_BEST_SCORE);
        assert_eq!(parse_best_score(Some("17")), 17);
        assert_eq!(parse_best_score(Some(" 23 ")), 23);
        assert_eq!(parse_best_score(Some("abc")), NO_BEST_SCORE);
        assert_eq!(parse_best_score(Some("-4")), NO_BEST_SCORE);
        assert_eq!(parse_best_score(Some("")), NO_BEST_SCORE);
    }

    #[test]
    fn test_load_empty_store() {
        let records = Records::load(&MemoryStore::new());
        assert_eq!(records, Records::default());
        assert_eq!(records.best(), None);
    }

    #[test]
    fn test_load_corrupt_store() {
        let mut store = MemoryStore::new();
        store.set_item(BEST_SCORE_KEY, "lots").unwrap();
        store.set_item(LEADERBOARD_KEY, "{broken").unwrap();
        let records = Records::load(&store);
        assert_eq!(records.best_score, NO_BEST_SCORE);
        assert!(records.history.is_empty());
    }

    #[test]
    fn test_session_end_round_trip() {
        let mut store = MemoryStore::new();
        let mut records = Records::load(&store);

        let ended = GameEvent::SessionEnded { final_score: 21 };
        assert!(records.handle_event(&ended, &mut store, "2026-10-19T10:00:00.000Z"));
        let ended = GameEvent::SessionEnded { final_score: 26 };
        assert!(records.handle_event(&ended, &mut store, "2026-10-19T11:00:00.000Z"));

        assert_eq!(store.get_item(BEST_SCORE_KEY).as_deref(), Some("21"));
        let reloaded = Records::load(&store);
        assert_eq!(reloaded.best(), Some(21));
        let scores: Vec<u32> = reloaded.history.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![21, 26]);
    }

    #[test]
    fn test_other_events_ignored() {
        let mut store = MemoryStore::new();
        let mut records = Records::default();
        assert!(!records.handle_event(&GameEvent::ShotSettled, &mut store, "t"));
        assert_eq!(store.get_item(BEST_SCORE_KEY), None);
    }

    #[test]
    fn test_failed_save_keeps_records_in_memory() {
        let mut store = ReadOnlyStore(MemoryStore::new());
        let mut records = Records::default();
        let ended = GameEvent::SessionEnded { final_score: 30 };
        assert!(records.handle_event(&ended, &mut store, "t"));
        assert_eq!(records.best(), Some(30));
        assert!(matches!(
            records.save(&mut store),
            Err(StorageError::Rejected(_))
        ));
    }
}
