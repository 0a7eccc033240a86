//! Property-based invariant tests for the incremental codec.
//!
//! 1. Transcoding valid text between any two encodings is lossless.
//! 2. Feeding a valid encoding unit by unit yields exactly its codepoints.
//! 3. A proper prefix of a valid encoding decodes to a prefix of the text,
//!    and `finish` reports truncation iff the prefix splits a codepoint.
//! 4. Arbitrary bytes never panic and never yield more chars than bytes.
//! 5. Skip and Replace policies agree on valid input.

use glyphrun_codec::{
    CodeUnit, DecodeError, Decoder, InvalidPolicy, TruncationPolicy, convert, decode,
    decode_with, encode, try_convert_to,
};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Text mixing every UTF-8 length class.
fn arb_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('\u{20}', '\u{7E}'),
            2 => prop::char::range('\u{80}', '\u{7FF}'),
            2 => prop::char::range('\u{800}', '\u{D7FF}'),
            1 => prop::char::range('\u{E000}', '\u{FFFF}'),
            2 => prop::char::range('\u{1_0000}', '\u{10_FFFF}'),
        ],
        0..max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn units_of<U: CodeUnit>(text: &str) -> Vec<U> {
    text.chars().flat_map(encode::<U>).collect()
}

fn feed_all<U: CodeUnit>(units: &[U]) -> Vec<char> {
    let mut decoder = Decoder::<U>::new();
    units
        .iter()
        .filter_map(|&u| decoder.feed(u).ok().flatten())
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Lossless transcoding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn utf8_to_utf16_and_back(text in arb_text(64)) {
        let utf16 = convert::<u8, u16>(text.as_bytes());
        prop_assert_eq!(&utf16, &text.encode_utf16().collect::<Vec<_>>());
        prop_assert_eq!(convert::<u16, u8>(&utf16), text.as_bytes());
    }

    #[test]
    fn utf8_to_utf32_and_back(text in arb_text(64)) {
        let utf32 = convert::<u8, u32>(text.as_bytes());
        prop_assert_eq!(utf32.len(), text.chars().count());
        prop_assert_eq!(convert::<u32, u8>(&utf32), text.as_bytes());
    }

    #[test]
    fn utf16_to_utf32_and_back(text in arb_text(64)) {
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let utf32 = convert::<u16, u32>(&utf16);
        prop_assert_eq!(convert::<u32, u16>(&utf32), utf16);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Incremental decoding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unit_by_unit_matches_std(text in arb_text(64)) {
        let expected: Vec<char> = text.chars().collect();
        prop_assert_eq!(feed_all::<u8>(&units_of::<u8>(&text)), expected.clone());
        prop_assert_eq!(feed_all::<u16>(&units_of::<u16>(&text)), expected.clone());
        prop_assert_eq!(feed_all::<u32>(&units_of::<u32>(&text)), expected);
    }

    #[test]
    fn valid_input_never_errors(text in arb_text(64)) {
        let mut decoder = Decoder::<u8>::new();
        for &b in text.as_bytes() {
            prop_assert!(decoder.feed(b).is_ok());
        }
        prop_assert_eq!(decoder.finish(), Ok(()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Truncated prefixes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prefix_decodes_to_text_prefix(text in arb_text(32), cut in any::<prop::sample::Index>()) {
        let bytes = text.as_bytes();
        let cut = if bytes.is_empty() { 0 } else { cut.index(bytes.len() + 1) };
        let prefix = &bytes[..cut];

        let decoded: String = decode(prefix).collect();
        prop_assert!(text.starts_with(&decoded));

        let mut sink: Vec<u32> = Vec::new();
        let result = try_convert_to::<u8, u32>(prefix, &mut sink, TruncationPolicy::Reject);
        if text.is_char_boundary(cut) {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(decoded.len(), cut);
        } else {
            let is_truncation = matches!(result, Err(DecodeError::TruncatedInput { .. }));
            prop_assert!(is_truncation);
        }
        prop_assert_eq!(sink.len(), decoded.chars().count());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_bytes_are_bounded(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let skipped: Vec<char> = decode(&bytes).collect();
        prop_assert!(skipped.len() <= bytes.len());

        // Anything decoded under Skip matches std's lossy decoder minus U+FFFD.
        let lossy: String = String::from_utf8_lossy(&bytes)
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect();
        let ours: String = skipped
            .into_iter()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect();
        prop_assert_eq!(ours, lossy);
    }

    #[test]
    fn arbitrary_utf16_units_never_panic(units in prop::collection::vec(any::<u16>(), 0..128)) {
        let chars: Vec<char> = decode(&units).collect();
        prop_assert!(chars.len() <= units.len());
        let replaced = decode_with(&units, InvalidPolicy::Replace).count();
        prop_assert!(replaced >= chars.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Policies agree on valid input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn policies_agree_on_valid_input(text in arb_text(64)) {
        let skip: String = decode_with(text.as_bytes(), InvalidPolicy::Skip).collect();
        let replace: String = decode_with(text.as_bytes(), InvalidPolicy::Replace).collect();
        prop_assert_eq!(&skip, &text);
        prop_assert_eq!(replace, text);
    }
}
