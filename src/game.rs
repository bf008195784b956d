use crate::vocab::WordRecord;
use clap::ValueEnum;
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// The three ways a round can be played.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Type the word from its meaning.
    Spell,
    /// Pick the word that fits a meaning.
    Match,
    /// Pick the meaning that fits a word.
    Quiz,
}

/// Spelling answers ignore case and surrounding whitespace.
pub fn check_spelling(expected: &str, input: &str) -> bool {
    expected.trim().eq_ignore_ascii_case(input.trim())
}

/// Quiz options: the answer's meaning plus distinct distractor meanings drawn
/// from the rest of the pool, shuffled. Returns fewer than `count` options
/// only when the pool cannot supply enough distinct meanings.
pub fn meaning_options<R: Rng>(
    pool: &[WordRecord],
    answer: &WordRecord,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let distractors: Vec<&str> = pool
        .iter()
        .filter(|r| r.word != answer.word && r.meaning != answer.meaning)
        .map(|r| r.meaning.as_str())
        .unique()
        .collect();

    build_options(&distractors, &answer.meaning, count, rng)
}

/// Match options: the answer word plus distractor words, shuffled.
pub fn word_options<R: Rng>(
    pool: &[WordRecord],
    answer: &WordRecord,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let distractors: Vec<&str> = pool
        .iter()
        .filter(|r| r.word != answer.word)
        .map(|r| r.word.as_str())
        .unique()
        .collect();

    build_options(&distractors, &answer.word, count, rng)
}

fn build_options<R: Rng>(
    distractors: &[&str],
    correct: &str,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let wanted = count.saturating_sub(1);
    let mut options: Vec<String> = distractors
        .choose_multiple(rng, wanted)
        .map(|s| s.to_string())
        .collect();
    options.push(correct.to_string());
    options.shuffle(rng);
    options
}
