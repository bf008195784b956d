use super::level::DifficultyLevel;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::error::Error;

static VOCAB_DIR: Dir = include_dir!("src/vocab/data");

/// One vocabulary entry. Field names follow the original word-list data format
/// (`w`/`m`/`e`/`l`), so records round-trip against the published lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    #[serde(rename = "w")]
    pub word: String,
    #[serde(rename = "m")]
    pub meaning: String,
    #[serde(rename = "e", default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(rename = "l")]
    pub level: DifficultyLevel,
}

#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<WordRecord>,
}

impl WordList {
    pub fn new(file_name: &str) -> Self {
        read_list_from_file(format!("{file_name}.json")).unwrap()
    }

    /// Look up a record by word, case-sensitive.
    pub fn find(&self, word: &str) -> Option<&WordRecord> {
        self.words.iter().find(|r| r.word == word)
    }
}

fn read_list_from_file(file_name: String) -> Result<WordList, Box<dyn Error>> {
    let file = VOCAB_DIR
        .get_file(file_name)
        .expect("Word list file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let list = from_str(file_as_str).expect("Unable to deserialize word list json");

    Ok(list)
}
