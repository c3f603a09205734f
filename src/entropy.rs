use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::error::{PassphraseError, Result};
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SHA-256 yields 256 checksum bits, enough for 8192 bits of entropy.
const MAX_ENTROPY_BITS: usize = 256 * 32;

/// Strength of freshly generated entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropyBits {

    Bits128 = 128,

    Bits160 = 160,

    Bits192 = 192,

    Bits224 = 224,

    #[default]
    Bits256 = 256,
}

impl EntropyBits {

    pub fn word_count(&self) -> usize {
        (*self as usize + self.checksum_bits()) / 11
    }

    pub fn byte_count(&self) -> usize {
        *self as usize / 8
    }

    pub fn checksum_bits(&self) -> usize {
        *self as usize / 32
    }

    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(EntropyBits::Bits128),
            160 => Ok(EntropyBits::Bits160),
            192 => Ok(EntropyBits::Bits192),
            224 => Ok(EntropyBits::Bits224),
            256 => Ok(EntropyBits::Bits256),
            _ => Err(PassphraseError::InvalidEntropyLength(bits)),
        }
    }
}

impl fmt::Display for EntropyBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits ({} words)", *self as usize, self.word_count())
    }
}

/// First `len / 32` bits of SHA-256 over the packed entropy bits.
pub fn checksum_bits(entropy_bits: &[bool]) -> Result<Vec<bool>> {
    validate_length(entropy_bits.len())?;
    Ok(hash_prefix(&bits_to_bytes(entropy_bits), entropy_bits.len() / 32))
}

fn hash_prefix(data: &[u8], bits: usize) -> Vec<bool> {
    let mut prefix = bytes_to_bits(&Sha256::digest(data));
    prefix.truncate(bits);
    prefix
}

fn validate_length(bits: usize) -> Result<()> {
    if bits == 0 || bits % 32 != 0 || bits > MAX_ENTROPY_BITS {
        return Err(PassphraseError::InvalidEntropyLength(bits));
    }
    Ok(())
}

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    data: Vec<u8>,
}

impl Entropy {

    pub fn generate(bits: EntropyBits) -> Result<Self> {
        let mut data = vec![0u8; bits.byte_count()];
        Self::fill_random(&mut data)?;

        Ok(Entropy { data })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        validate_length(bytes.len() * 8)?;
        Ok(Entropy { data: bytes })
    }

    /// Rebuilds entropy from a bit sequence, e.g. one read back from the bit file.
    pub fn from_bits(bits: &[bool]) -> Result<Self> {
        validate_length(bits.len())?;
        Ok(Entropy { data: bits_to_bytes(bits) })
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex)?;
        Self::from_bytes(bytes)
    }

    fn fill_random(buffer: &mut [u8]) -> Result<()> {
        use rand::rngs::OsRng;

        OsRng.try_fill_bytes(buffer)
            .map_err(|e| PassphraseError::EntropySource(e.to_string()))
    }

    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.data)
    }

    pub fn to_bits(&self) -> Vec<bool> {
        bytes_to_bits(&self.data)
    }

    pub fn checksum(&self) -> Vec<bool> {
        hash_prefix(&self.data, self.bit_len() / 32)
    }

    /// Entropy bits followed by checksum bits; always a multiple of 11 long.
    pub fn to_bits_with_checksum(&self) -> Vec<bool> {
        let mut bits = self.to_bits();
        bits.extend(self.checksum());
        bits
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy")
            .field("bits", &self.bit_len())
            .field("data", &"<REDACTED>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_generation() {
        for bits in [EntropyBits::Bits128, EntropyBits::Bits256] {
            let entropy = Entropy::generate(bits).unwrap();
            assert_eq!(entropy.as_bytes().len(), bits.byte_count());
        }
        assert_eq!(Entropy::generate(EntropyBits::default()).unwrap().bit_len(), 256);
    }

    #[test]
    fn test_entropy_from_hex() {
        let hex = "00000000000000000000000000000000";
        let entropy = Entropy::from_hex(hex).unwrap();
        assert_eq!(entropy.bit_len(), 128);
        assert_eq!(entropy.to_hex(), hex);
    }

    #[test]
    fn test_checksum_calculation() {
        let entropy = Entropy::from_hex("00000000000000000000000000000000").unwrap();
        assert_eq!(entropy.checksum(), vec![false, false, true, true]);
    }

    #[test]
    fn test_checksum_of_zero_256_bits() {
        // SHA-256 of 32 zero bytes starts with 0x66.
        let entropy = Entropy::from_bytes(vec![0u8; 32]).unwrap();
        let expected = bytes_to_bits(&[0x66]);
        assert_eq!(entropy.checksum(), expected);
        assert_eq!(checksum_bits(&entropy.to_bits()).unwrap(), expected);
        assert_eq!(entropy.to_bits_with_checksum().len(), 264);
    }

    #[test]
    fn test_invalid_lengths_rejected() {
        assert!(matches!(checksum_bits(&[]), Err(PassphraseError::InvalidEntropyLength(0))));
        assert!(matches!(
            Entropy::from_bits(&[true; 33]),
            Err(PassphraseError::InvalidEntropyLength(33))
        ));
        assert!(Entropy::from_bits(&vec![false; MAX_ENTROPY_BITS + 32]).is_err());
        assert!(Entropy::from_bits(&[false; 96]).is_ok());
    }

    #[test]
    fn test_word_count_mapping() {
        assert_eq!(EntropyBits::Bits128.word_count(), 12);
        assert_eq!(EntropyBits::Bits256.word_count(), 24);
        assert_eq!(EntropyBits::from_bits(192).unwrap(), EntropyBits::Bits192);
        assert!(EntropyBits::from_bits(100).is_err());
    }

    #[test]
    fn test_debug_redacts_data() {
        let entropy = Entropy::from_bytes(vec![0xab; 16]).unwrap();
        let debug = format!("{:?}", entropy);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("ab"));
    }
}
