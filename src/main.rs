pub mod game;
pub mod selector;
pub mod session;
pub mod store;
pub mod vocab;

use crate::{
    game::{check_spelling, meaning_options, word_options, GameMode},
    selector::Selector,
    session::SessionState,
    store::{FileSessionStore, SessionStore},
    vocab::{DifficultyLevel, WordList, WordRecord},
};
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use std::{
    error::Error,
    io::{self, BufRead, Write},
};

const OPTIONS_PER_ROUND: usize = 4;

/// vocabulary drill with seedable word selection and missed-word revision
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A vocabulary drill that picks words pseudo-randomly without immediate repeats, spreads picks across difficulty levels, and brings back the words you miss at a bounded rate."
)]
pub struct Cli {
    /// word list to drill from
    #[clap(short, long, value_enum, default_value_t = SupportedList::Naplan)]
    list: SupportedList,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// inspect the word list data
    Check,
    /// run a drill session in the terminal
    Drill {
        /// number of words per session
        #[clap(short = 'w', long, default_value_t = 10)]
        number_of_words: usize,

        /// play mode
        #[clap(short, long, value_enum, default_value_t = GameMode::Spell)]
        mode: GameMode,

        /// fixed RNG seed for a reproducible word order
        #[clap(long)]
        seed: Option<u64>,

        /// ignore any saved session and start fresh
        #[clap(long)]
        fresh: bool,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum SupportedList {
    Naplan,
}

impl SupportedList {
    fn as_list(&self) -> WordList {
        WordList::new(&self.to_string().to_lowercase())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let list = cli.list.as_list();

    match cli.command {
        Command::Check => run_check(&list),
        Command::Drill {
            number_of_words,
            mode,
            seed,
            fresh,
        } => run_drill(&list, mode, number_of_words, seed, fresh),
    }
}

/// Data inspection over the embedded list: totals, gaps, level spread.
fn run_check(list: &WordList) -> Result<(), Box<dyn Error>> {
    println!("Total words: {}", list.words.len());

    let missing_example = list.words.iter().filter(|r| r.example.is_none()).count();
    println!("Missing example: {missing_example}");

    let by_level = list.words.iter().counts_by(|r| r.level);
    for level in DifficultyLevel::ALL {
        println!("{level}: {}", by_level.get(&level).copied().unwrap_or(0));
    }

    if let (Some(first), Some(last)) = (list.words.first(), list.words.last()) {
        println!("First: {} ({})", first.word, first.level);
        println!("Last: {} ({})", last.word, last.level);
    }

    Ok(())
}

fn run_drill(
    list: &WordList,
    mode: GameMode,
    number_of_words: usize,
    seed: Option<u64>,
    fresh: bool,
) -> Result<(), Box<dyn Error>> {
    let store = FileSessionStore::new();

    // A seeded run is reproducible; mixing in persisted state would break that.
    let persist = seed.is_none() && !fresh;
    let mut session = match seed {
        Some(s) => SessionState::with_seed(s),
        None if fresh => SessionState::new(),
        None => SessionState::from_saved(&store.load()),
    };

    let selector = Selector::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{mode} drill: {number_of_words} words from '{}'\n", list.name);

    for round in 1..=number_of_words {
        let record = selector.pick_next(&list.words, &mut session)?.clone();

        let answered = match mode {
            GameMode::Spell => ask_spell(&record, round, &mut lines)?,
            GameMode::Match => {
                let options = word_options(&list.words, &record, OPTIONS_PER_ROUND, &mut session.rng);
                ask_choice(
                    &format!("[{round}] Which word means \"{}\"?", record.meaning),
                    &options,
                    &record.word,
                    &mut lines,
                )?
            }
            GameMode::Quiz => {
                let options =
                    meaning_options(&list.words, &record, OPTIONS_PER_ROUND, &mut session.rng);
                ask_choice(
                    &format!("[{round}] What does \"{}\" mean?", record.word),
                    &options,
                    &record.meaning,
                    &mut lines,
                )?
            }
        };

        let correct = match answered {
            Some(correct) => correct,
            None => break, // stdin closed
        };

        if correct {
            session.record_hit(record.level);
            println!("Correct! (streak {})\n", session.streak);
        } else {
            selector.record_miss(&mut session, &record.word);
            println!("Not quite. The answer was: {}", record.word);
            if let Some(example) = &record.example {
                println!("  e.g. {example}");
            }
            println!();
        }
    }

    println!(
        "Session over. Score: {}  Streak: {}  Words to revise: {}",
        session.score,
        session.streak,
        session.missed.len()
    );

    if persist {
        store.save(&session.to_saved())?;
    }

    Ok(())
}

/// Spell round: show the meaning, read the typed word. `None` means EOF.
fn ask_spell(
    record: &WordRecord,
    round: usize,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<bool>, Box<dyn Error>> {
    println!("[{round}] Spell the word meaning: \"{}\"", record.meaning);
    print!("> ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(check_spelling(&record.word, &line?))),
        None => Ok(None),
    }
}

/// Multiple-choice round: numbered options, read the chosen number.
fn ask_choice(
    prompt: &str,
    options: &[String],
    correct: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<bool>, Box<dyn Error>> {
    println!("{prompt}");
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }
    print!("> ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => {
            let line = line?;
            let chosen = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| options.get(i));
            Ok(Some(chosen.map(String::as_str) == Some(correct)))
        }
        None => Ok(None),
    }
}
