//! Shot-count leaderboard
//!
//! Fewer shots is better, so entries are kept ascending by score. Persisted
//! as a bare JSON array of `{score, at}` records.

use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 50;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Shots needed to clear the board
    pub score: u32,
    /// ISO-8601 timestamp of when the game ended
    pub at: String,
}

/// Leaderboard, lowest score first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Decode a stored list. Anything unreadable counts as an empty board.
    /// Stored lists are re-sorted and capped in case they were edited by hand.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<HighScores>(json) {
            Ok(mut scores) => {
                scores.entries.sort_by_key(|e| e.score);
                scores.entries.truncate(MAX_HIGH_SCORES);
                scores
            }
            Err(e) => {
                log::warn!("Discarding unreadable leaderboard: {}", e);
                Self::new()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Check if a score would make the cut
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Ties go after existing entries, so a full board needs a strictly lower score
        self.entries.last().map(|e| score < e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score < e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished game. Returns the rank achieved (1-indexed) or None if
    /// it didn't make the cut.
    pub fn add_score(&mut self, score: u32, at: impl Into<String>) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            at: at.into(),
        };

        // Insert after any equal scores (sorted ascending)
        let pos = self.entries.iter().position(|e| score < e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the best (lowest) score, if any
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }
}
