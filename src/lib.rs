#![forbid(unsafe_code)]

//! Derives BIP-39 passphrases from a hand-editable entropy bit file.

pub mod bitfile;
pub mod bits;
pub mod config;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod inspect;
pub mod mnemonic;
#[cfg(feature = "cli")]
pub mod qr;
pub mod wordlist;

pub use bitfile::BitFile;
pub use config::EngineConfig;
pub use engine::MnemonicEngine;
pub use entropy::{Entropy, EntropyBits};
pub use error::{PassphraseError, Result};
pub use inspect::{Inspection, Token};
pub use mnemonic::Mnemonic;
pub use wordlist::Wordlist;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::{
        BitFile, EngineConfig, Entropy, EntropyBits, Inspection, Mnemonic,
        MnemonicEngine, Result, Token, Wordlist,
    };
}
