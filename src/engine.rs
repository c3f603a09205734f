//! The user-facing operations: generate, derive and inspect.

use crate::{
    bitfile::BitFile,
    config::EngineConfig,
    entropy::{Entropy, EntropyBits},
    error::Result,
    inspect::{inspect, Inspection},
    mnemonic::Mnemonic,
    wordlist::Wordlist,
};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct MnemonicEngine {
    wordlist: Wordlist,
    bitfile: BitFile,
}

impl MnemonicEngine {

    pub fn new(wordlist: Wordlist, bitfile: BitFile) -> Self {
        Self { wordlist, bitfile }
    }

    /// Loads the word list named by `config`; a bad list fails here, before any file is touched.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let wordlist = match &config.wordlist_path {
            Some(path) => Wordlist::from_file(path)?,
            None => Wordlist::english()?,
        };
        Ok(Self::new(wordlist, BitFile::new(&config.binary_path)))
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn bitfile(&self) -> &BitFile {
        &self.bitfile
    }

    pub fn generate_entropy(&self, bits: EntropyBits) -> Result<()> {
        debug!(strength = %bits, "generating entropy");
        let entropy = Entropy::generate(bits)?;
        self.bitfile.write(&entropy)
    }

    pub fn load_entropy(&self) -> Result<Entropy> {
        let bits = self.bitfile.read()?;
        Entropy::from_bits(&bits)
    }

    pub fn derive_mnemonic(&self) -> Result<Mnemonic> {
        let entropy = self.load_entropy()?;
        debug!(bits = entropy.bit_len(), checksum_bits = entropy.bit_len() / 32, "deriving mnemonic");

        let mnemonic = Mnemonic::from_entropy(&entropy, &self.wordlist)?;
        info!(words = mnemonic.word_count(), "mnemonic derived");
        Ok(mnemonic)
    }

    pub fn inspect(&self, token: &str) -> Result<Inspection> {
        inspect(&self.wordlist, token)
    }
}
