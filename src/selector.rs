use crate::session::{MissedEntry, SessionState};
use crate::vocab::WordRecord;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// The pool has no entries. Fatal to selection; callers must guard against
/// empty pools rather than expect a fallback word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPoolError;

impl fmt::Display for EmptyPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot pick a word from an empty pool")
    }
}

impl std::error::Error for EmptyPoolError {}

/// Picks after a miss until the word first resurfaces.
const FIRST_DUE: std::ops::RangeInclusive<u32> = 3..=8;
/// Picks between later resurfacings of the same word.
const REVISIT_DUE: std::ops::RangeInclusive<u32> = 10..=20;

/// Word selection policy: uniform draws without immediate repeats, with missed
/// words resurfaced on a bounded schedule.
///
/// The schedule guarantees, for every RNG seed, that a missed word comes back
/// at least once and at most `max_revisits` times within a 30-pick window:
/// the first resurface lands within `FIRST_DUE` picks, later ones `REVISIT_DUE`
/// apart, and the word graduates out of the queue after `max_revisits` showings.
#[derive(Debug, Clone)]
pub struct Selector {
    /// Chance per pick of surfacing a missed word ahead of its countdown.
    pub revisit_chance: f64,
    /// Resurfacings before a missed word graduates out of the queue.
    pub max_revisits: u32,
}

impl Default for Selector {
    fn default() -> Self {
        Self {
            revisit_chance: 0.08,
            max_revisits: 3,
        }
    }
}

impl Selector {
    /// Select the next word to present and update `session.last_shown`.
    ///
    /// The returned record always borrows from `pool`; missed entries whose
    /// word has left the pool are dropped. With more than one candidate the
    /// previous word is never returned again immediately.
    pub fn pick_next<'a>(
        &self,
        pool: &'a [WordRecord],
        session: &mut SessionState,
    ) -> Result<&'a WordRecord, EmptyPoolError> {
        if pool.is_empty() {
            return Err(EmptyPoolError);
        }
        if pool.len() == 1 {
            session.last_shown = Some(pool[0].word.clone());
            return Ok(&pool[0]);
        }

        // Age the revision queue, and prune entries that no longer exist in
        // this pool (e.g. a session restored against a different word list).
        for entry in session.missed.iter_mut() {
            entry.due_in = entry.due_in.saturating_sub(1);
        }
        session
            .missed
            .retain(|e| pool.iter().any(|r| r.word == e.word));

        if let Some(record) = self.take_revision(pool, session) {
            session.last_shown = Some(record.word.clone());
            return Ok(record);
        }

        // Uniform draw, redrawing on an immediate repeat.
        loop {
            let idx = session.rng.gen_range(0..pool.len());
            let record = &pool[idx];
            if session.last_shown.as_deref() == Some(record.word.as_str()) {
                continue;
            }
            session.last_shown = Some(record.word.clone());
            return Ok(record);
        }
    }

    /// Mark `word` as answered incorrectly. Idempotent while the word is
    /// already queued; also resets the answer streak.
    pub fn record_miss(&self, session: &mut SessionState, word: &str) {
        session.streak = 0;
        if session.missed.iter().any(|e| e.word == word) {
            return;
        }
        let due_in = session.rng.gen_range(FIRST_DUE);
        session.missed.push(MissedEntry {
            word: word.to_string(),
            due_in,
            times_shown: 0,
        });
    }

    /// Surface a missed word if one is due, or with `revisit_chance` pick one
    /// early. Returns `None` when nothing is eligible (queue empty, or only
    /// the word just shown).
    fn take_revision<'a>(
        &self,
        pool: &'a [WordRecord],
        session: &mut SessionState,
    ) -> Option<&'a WordRecord> {
        let SessionState {
            rng,
            missed,
            last_shown,
            ..
        } = session;

        let eligible: Vec<usize> = missed
            .iter()
            .enumerate()
            .filter(|(_, e)| last_shown.as_deref() != Some(e.word.as_str()))
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return None;
        }

        let due: Vec<usize> = eligible
            .iter()
            .copied()
            .filter(|&i| missed[i].due_in == 0)
            .collect();

        let idx = if !due.is_empty() {
            *due.choose(rng)?
        } else if rng.gen_bool(self.revisit_chance) {
            *eligible.choose(rng)?
        } else {
            return None;
        };

        let entry = &mut missed[idx];
        entry.times_shown += 1;
        entry.due_in = rng.gen_range(REVISIT_DUE);
        let word = entry.word.clone();
        if entry.times_shown >= self.max_revisits {
            missed.remove(idx);
        }

        // Present in the pool; the caller pruned stale entries already.
        pool.iter().find(|r| r.word == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::DifficultyLevel;
    use assert_matches::assert_matches;

    fn pool_of(words: &[&str]) -> Vec<WordRecord> {
        words
            .iter()
            .enumerate()
            .map(|(i, w)| WordRecord {
                word: w.to_string(),
                meaning: format!("meaning of {w}"),
                example: None,
                level: DifficultyLevel::ALL[i % 4],
            })
            .collect()
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let selector = Selector::default();
        let mut session = SessionState::with_seed(1);

        assert_matches!(selector.pick_next(&[], &mut session), Err(EmptyPoolError));
    }

    #[test]
    fn test_single_word_pool_repeats() {
        let selector = Selector::default();
        let pool = pool_of(&["lonely"]);
        let mut session = SessionState::with_seed(1);

        for _ in 0..5 {
            let record = selector.pick_next(&pool, &mut session).unwrap();
            assert_eq!(record.word, "lonely");
        }
    }

    #[test]
    fn test_no_immediate_repeats_even_in_tiny_pool() {
        let selector = Selector::default();
        let pool = pool_of(&["alpha", "beta"]);
        let mut session = SessionState::with_seed(42);

        let mut previous = String::new();
        for _ in 0..100 {
            let record = selector.pick_next(&pool, &mut session).unwrap();
            assert_ne!(record.word, previous);
            previous = record.word.clone();
        }
    }

    #[test]
    fn test_pick_updates_last_shown() {
        let selector = Selector::default();
        let pool = pool_of(&["one", "two", "three"]);
        let mut session = SessionState::with_seed(3);

        let record = selector.pick_next(&pool, &mut session).unwrap();
        assert_eq!(session.last_shown.as_deref(), Some(record.word.as_str()));
    }

    #[test]
    fn test_picked_word_is_always_pool_member() {
        let selector = Selector::default();
        let pool = pool_of(&["ant", "bee", "cow", "dog", "emu"]);
        let mut session = SessionState::with_seed(9);
        selector.record_miss(&mut session, "cow");

        for _ in 0..50 {
            let record = selector.pick_next(&pool, &mut session).unwrap();
            assert!(pool.iter().any(|r| r.word == record.word));
        }
    }

    #[test]
    fn test_record_miss_is_idempotent() {
        let selector = Selector::default();
        let mut session = SessionState::with_seed(5);

        selector.record_miss(&mut session, "feeble");
        selector.record_miss(&mut session, "feeble");

        assert_eq!(session.missed.len(), 1);
    }

    #[test]
    fn test_record_miss_resets_streak() {
        let selector = Selector::default();
        let mut session = SessionState::with_seed(5);
        session.record_hit(DifficultyLevel::Common);
        assert_eq!(session.streak, 1);

        selector.record_miss(&mut session, "feeble");
        assert_eq!(session.streak, 0);
    }

    #[test]
    fn test_missed_word_graduates_after_max_revisits() {
        let selector = Selector::default();
        let pool = pool_of(&[
            "ant", "bee", "cow", "dog", "emu", "fox", "gnu", "hen", "ibis", "joey",
        ]);
        let mut session = SessionState::with_seed(11);
        selector.record_miss(&mut session, "fox");

        let mut fox_count = 0u32;
        for _ in 0..200 {
            let record = selector.pick_next(&pool, &mut session).unwrap();
            if record.word == "fox" {
                fox_count += 1;
            }
        }

        // Graduation caps revisits; later appearances are uniform draws only,
        // so the queue must be empty well before 200 picks.
        assert!(session.missed.is_empty());
        assert!(fox_count >= selector.max_revisits);
    }

    #[test]
    fn test_stale_missed_entries_are_pruned() {
        let selector = Selector::default();
        let pool = pool_of(&["ant", "bee", "cow"]);
        let mut session = SessionState::with_seed(2);
        selector.record_miss(&mut session, "word-from-another-list");

        selector.pick_next(&pool, &mut session).unwrap();
        assert!(session.missed.is_empty());
    }

    #[test]
    fn test_missed_word_never_repeats_immediately() {
        let selector = Selector {
            revisit_chance: 0.5,
            max_revisits: 100,
        };
        let pool = pool_of(&["ant", "bee", "cow"]);
        let mut session = SessionState::with_seed(13);
        selector.record_miss(&mut session, "bee");

        let mut previous = String::new();
        for _ in 0..100 {
            let record = selector.pick_next(&pool, &mut session).unwrap();
            assert_ne!(record.word, previous);
            previous = record.word.clone();
        }
    }
}
