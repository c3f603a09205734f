//! Conversions between bytes, bit sequences and fixed-width integers.
//!
//! Bits are always most-significant first.

/// Width of one word index. 2^11 = 2048 words.
pub const WORD_BITS: usize = 11;

pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

/// Packs bits into bytes, zero-padding the final byte.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            bytes[i / 8] |= 1 << (7 - i % 8);
        }
    }
    bytes
}

/// Big-endian value of a bit group. The caller supplies the width.
pub fn bits_to_int(bits: &[bool]) -> u32 {
    bits.iter().fold(0u32, |acc, &bit| (acc << 1) | bit as u32)
}

pub fn int_to_bits(value: u32, width: usize) -> Vec<bool> {
    (0..width).rev().map(|i| (value >> i) & 1 == 1).collect()
}

pub fn bits_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

pub fn is_binary_literal(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == '0' || c == '1')
}
