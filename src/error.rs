use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PassphraseError>;

#[derive(Error, Debug)]
pub enum PassphraseError {

    #[error("Entropy source unavailable: {0}")]
    EntropySource(String),

    #[error("Storage error on {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} not found. Please generate it first with -b", .0.display())]
    NotFound(PathBuf),

    #[error("{} contains no entropy bits", .0.display())]
    EmptyEntropy(PathBuf),

    #[error("Invalid entropy length: {0} bits. Must be a positive multiple of 32")]
    InvalidEntropyLength(usize),

    #[error("Wordlist has {0} words, expected 2048")]
    InvalidWordlist(usize),

    #[error("Wordlist configuration error: {0}")]
    Config(String),

    #[error("'{0}' is neither a valid word nor valid binary")]
    Lookup(String),

    #[error("Binary '{0}' is out of range (max 11 bits, 0-2047)")]
    BinaryOutOfRange(String),

    #[error("Hex decode error: {0}")]
    HexError(#[from] hex::FromHexError),

    #[error("QR code error: {0}")]
    QrCode(String),
}

impl PassphraseError {

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PassphraseError::Storage { path: path.into(), source }
    }

    /// Errors caused by a bad inspect token. Everything else aborts the invocation.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PassphraseError::Lookup(_) | PassphraseError::BinaryOutOfRange(_))
    }
}
