use passphrase_bitcoin::{
    bitfile::{format_bits, parse_bits},
    bits::{bits_to_bytes, bits_to_int, bytes_to_bits, WORD_BITS},
    inspect::inspect,
    Entropy, Mnemonic, Wordlist,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(bits_to_bytes(&bytes_to_bits(&bytes)), bytes);
    }

    #[test]
    fn prop_word_groups_in_range(bits in proptest::collection::vec(any::<bool>(), 0..40)
        .prop_map(|mut v| { v.truncate(v.len() / WORD_BITS * WORD_BITS); v }))
    {
        for group in bits.chunks_exact(WORD_BITS) {
            prop_assert!(bits_to_int(group) <= 2047);
        }
    }

    #[test]
    fn prop_bit_file_layout_preserves_bits(bytes in proptest::collection::vec(any::<u8>(), 1..40)) {
        let bits = bytes_to_bits(&bytes);
        let text = format_bits(&bits);
        prop_assert_eq!(parse_bits(&text), bits);
        prop_assert!(text.ends_with('\n'));
        prop_assert!(text.lines().all(|l| l.split_whitespace().count() <= 6));
    }

    #[test]
    fn prop_mnemonic_length(bytes in proptest::collection::vec(any::<u8>(), 32..=32)) {
        let wordlist = Wordlist::english().unwrap();
        let entropy = Entropy::from_bytes(bytes).unwrap();
        prop_assert_eq!(entropy.checksum().len(), 8);
        prop_assert_eq!(entropy.to_bits_with_checksum().len(), 264);
        prop_assert_eq!(Mnemonic::from_entropy(&entropy, &wordlist).unwrap().word_count(), 24);
    }
}

#[test]
fn test_inspect_round_trip_every_index() {
    let wordlist = Wordlist::english().unwrap();

    for (i, word) in wordlist.words().iter().enumerate() {
        let by_word = inspect(&wordlist, word).unwrap();
        assert_eq!(by_word.index as usize, i);
        assert_eq!(by_word.bits, format!("{:011b}", i));

        let by_bits = inspect(&wordlist, &by_word.bits).unwrap();
        assert_eq!(by_bits.index as usize, i);
        assert_eq!(&by_bits.word, word);
    }
}
