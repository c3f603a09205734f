use crate::error::{PassphraseError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub const WORDLIST_SIZE: usize = 2048;

const ENGLISH_WORDS: &str = include_str!("../data/wordlists/english.txt");

/// The fixed 2048-word dictionary. Built once and lent out by reference.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    word_to_index: HashMap<String, u16>,
}

impl Wordlist {

    /// The BIP-39 English list embedded in the binary.
    pub fn english() -> Result<Self> {
        ENGLISH_WORDS.parse()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| PassphraseError::storage(path, e))?;
        debug!(path = %path.display(), "loading wordlist");
        content.parse()
    }

    pub fn get_word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|s| s.as_str())
    }

    pub fn get_index(&self, word: &str) -> Option<u16> {
        self.word_to_index.get(word).copied()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromStr for Wordlist {
    type Err = PassphraseError;

    /// One word per line. A byte-order mark and blank lines are skipped.
    fn from_str(content: &str) -> Result<Self> {
        let words: Vec<String> = content
            .lines()
            .map(|w| w.trim().trim_start_matches('\u{feff}').trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.len() != WORDLIST_SIZE {
            return Err(PassphraseError::InvalidWordlist(words.len()));
        }

        let mut word_to_index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, w) in words.iter().enumerate() {
            if word_to_index.insert(w.clone(), i as u16).is_some() {
                return Err(PassphraseError::Config(format!("duplicate word '{}'", w)));
            }
        }

        Ok(Wordlist {
            words,
            word_to_index,
        })
    }
}
