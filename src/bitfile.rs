//! The persisted entropy store.
//!
//! Entropy is kept as ASCII `0`/`1` in 11-bit groups, six groups per line,
//! so that a user can flip individual bits by hand without losing track of
//! which bits make up which word. Anything other than `0` and `1` is
//! ignored when reading.

use crate::bits::WORD_BITS;
use crate::entropy::Entropy;
use crate::error::{PassphraseError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_FILE_NAME: &str = "binary.txt";

pub const GROUPS_PER_LINE: usize = 6;

/// Canonical layout: a space after each 11-bit group, a newline after every
/// sixth group, and a closing newline when the last line is partial.
pub fn format_bits(bits: &[bool]) -> String {
    let mut out = String::with_capacity(bits.len() + bits.len() / WORD_BITS * 2 + 1);
    let mut groups = 0;

    for (i, &bit) in bits.iter().enumerate() {
        out.push(if bit { '1' } else { '0' });

        if (i + 1) % WORD_BITS == 0 {
            out.push(' ');
            groups += 1;
        }

        if groups == GROUPS_PER_LINE {
            out.push('\n');
            groups = 0;
        }
    }

    if groups != 0 || bits.len() % WORD_BITS != 0 {
        out.push('\n');
    }

    out
}

/// Works on raw bytes so that comments in any encoding are skipped too.
pub fn parse_bits(text: impl AsRef<[u8]>) -> Vec<bool> {
    text.as_ref()
        .iter()
        .filter_map(|b| match b {
            b'0' => Some(false),
            b'1' => Some(true),
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct BitFile {
    path: PathBuf,
}

impl BitFile {

    pub fn new(path: impl Into<PathBuf>) -> Self {
        BitFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the file with the canonical layout of `entropy`.
    pub fn write(&self, entropy: &Entropy) -> Result<()> {
        let file = self.create()?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(format_bits(&entropy.to_bits()).as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| PassphraseError::storage(&self.path, e))?;

        info!(path = %self.path.display(), bits = entropy.bit_len(), "entropy written");
        Ok(())
    }

    pub fn read(&self) -> Result<Vec<bool>> {
        let text = std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PassphraseError::NotFound(self.path.clone()),
            _ => PassphraseError::storage(&self.path, e),
        })?;

        let bits = parse_bits(text);
        if bits.is_empty() {
            return Err(PassphraseError::EmptyEntropy(self.path.clone()));
        }

        debug!(path = %self.path.display(), bits = bits.len(), "entropy read");
        Ok(bits)
    }

    fn create(&self) -> Result<File> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        options
            .open(&self.path)
            .map_err(|e| PassphraseError::storage(&self.path, e))
    }
}
