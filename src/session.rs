use crate::vocab::DifficultyLevel;
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// A missed word waiting to be shown again. `due_in` counts down once per pick;
/// at zero the word is due for revision.
#[derive(Debug, Clone, PartialEq)]
pub struct MissedEntry {
    pub word: String,
    pub due_in: u32,
    pub times_shown: u32,
}

/// Countdown given to misses restored from a saved session, so they resurface
/// early in the new session.
const RESTORED_DUE: u32 = 5;

/// Per-session mutable memory for the word selector: the last word shown, the
/// missed-word revision queue, score counters, and the session's own RNG.
/// Every session owns its RNG, so two tabs or two runs never share a stream.
#[derive(Debug)]
pub struct SessionState {
    pub last_shown: Option<String>,
    pub missed: Vec<MissedEntry>,
    pub score: u32,
    pub streak: u32,
    pub rng: StdRng,
}

impl SessionState {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic session for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            last_shown: None,
            missed: Vec::new(),
            score: 0,
            streak: 0,
            rng,
        }
    }

    /// Record a correct answer: extend the streak and award level-weighted points.
    pub fn record_hit(&mut self, level: DifficultyLevel) {
        self.streak += 1;
        self.score += level.points();
    }

    /// Flatten to the persistable snapshot. Revision countdowns are not kept;
    /// restored misses are rescheduled on load.
    pub fn to_saved(&self) -> SavedSession {
        SavedSession {
            last_shown: self.last_shown.clone(),
            missed: self.missed.iter().map(|e| e.word.clone()).collect(),
            score: self.score,
            streak: self.streak,
            saved_at: Local::now(),
        }
    }

    /// Rebuild a live session from a snapshot, with a fresh entropy-seeded RNG.
    pub fn from_saved(saved: &SavedSession) -> Self {
        let mut session = Self::new();
        session.last_shown = saved.last_shown.clone();
        session.score = saved.score;
        session.streak = saved.streak;
        session.missed = saved
            .missed
            .iter()
            .map(|word| MissedEntry {
                word: word.clone(),
                due_in: RESTORED_DUE,
                times_shown: 0,
            })
            .collect();
        session
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat session snapshot: primitive fields only, no nested graphs, so any
/// key-value store can hold it as one JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedSession {
    pub last_shown: Option<String>,
    pub missed: Vec<String>,
    pub score: u32,
    pub streak: u32,
    pub saved_at: DateTime<Local>,
}

impl Default for SavedSession {
    fn default() -> Self {
        Self {
            last_shown: None,
            missed: Vec::new(),
            score: 0,
            streak: 0,
            saved_at: Local::now(),
        }
    }
}
