use crate::{
    bits::{bits_to_int, WORD_BITS},
    entropy::Entropy,
    error::{PassphraseError, Result},
    wordlist::Wordlist,
};
use zeroize::{Zeroize, ZeroizeOnDrop};
use std::fmt;

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {

    pub fn from_entropy(entropy: &Entropy, wordlist: &Wordlist) -> Result<Self> {
        let bits = entropy.to_bits_with_checksum();
        debug_assert_eq!(bits.len() % WORD_BITS, 0);

        let mut words = Vec::with_capacity(bits.len() / WORD_BITS);
        for chunk in bits.chunks_exact(WORD_BITS) {
            let index = bits_to_int(chunk) as usize;
            // A loaded list always holds 2048 words, so only a broken list gets here.
            let word = wordlist.get_word(index)
                .ok_or(PassphraseError::InvalidWordlist(wordlist.len()))?;
            words.push(word.to_string());
        }

        Ok(Mnemonic { words })
    }

    /// Entropy bits as read from the bit file; the checksum is computed here.
    pub fn from_entropy_bits(bits: &[bool], wordlist: &Wordlist) -> Result<Self> {
        let entropy = Entropy::from_bits(bits)?;
        Self::from_entropy(&entropy, wordlist)
    }

    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("words", &"<REDACTED>")
            .finish()
    }
}
