//! Reverse lookup of a single word or 11-bit group.

use crate::bits::{bits_to_string, int_to_bits, is_binary_literal, WORD_BITS};
use crate::error::{PassphraseError, Result};
use crate::wordlist::{Wordlist, WORDLIST_SIZE};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Binary(String),
    Word(String),
}

impl Token {

    pub fn classify(input: &str) -> Self {
        let trimmed = input.trim();
        if is_binary_literal(trimmed) {
            Token::Binary(trimmed.to_string())
        } else {
            Token::Word(trimmed.to_lowercase())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inspection {
    pub token: String,
    pub index: u16,
    pub word: String,
    pub bits: String,
}

pub fn inspect(wordlist: &Wordlist, input: &str) -> Result<Inspection> {
    let token = Token::classify(input);
    debug!(?token, "inspecting token");

    match token {
        Token::Binary(raw) => inspect_binary(wordlist, raw),
        Token::Word(word) => inspect_word(wordlist, word),
    }
}

// Shorter inputs are padded, never rejected; only the raw length can be too long.
fn inspect_binary(wordlist: &Wordlist, raw: String) -> Result<Inspection> {
    if raw.len() > WORD_BITS {
        return Err(PassphraseError::BinaryOutOfRange(raw));
    }

    let bits = format!("{:0>width$}", raw, width = WORD_BITS);
    let index = u16::from_str_radix(&bits, 2)
        .map_err(|_| PassphraseError::BinaryOutOfRange(raw.clone()))?;
    if index as usize >= WORDLIST_SIZE {
        return Err(PassphraseError::BinaryOutOfRange(raw));
    }

    let word = wordlist
        .get_word(index as usize)
        .ok_or_else(|| PassphraseError::BinaryOutOfRange(raw.clone()))?
        .to_string();

    Ok(Inspection { token: raw, index, word, bits })
}

fn inspect_word(wordlist: &Wordlist, word: String) -> Result<Inspection> {
    let index = wordlist
        .get_index(&word)
        .ok_or_else(|| PassphraseError::Lookup(word.clone()))?;

    let bits = bits_to_string(&int_to_bits(index as u32, WORD_BITS));
    Ok(Inspection { token: word.clone(), index, word, bits })
}
