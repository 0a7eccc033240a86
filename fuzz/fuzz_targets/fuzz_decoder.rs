#![no_main]

use glyphrun_codec::{DecodeError, Decoder, decode_utf8_lossy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feeding byte by byte must never panic and must agree with the batch
    // decoder.
    let mut decoder = Decoder::<u8>::new();
    let mut chars = Vec::new();
    for &byte in data {
        match decoder.feed(byte) {
            Ok(Some(ch)) => chars.push(ch),
            Ok(None) => assert!(decoder.is_pending(), "Ok(None) without pending state"),
            Err(DecodeError::Interrupted(ch)) => {
                assert!(ch.is_ascii(), "only ASCII can interrupt a UTF-8 sequence");
                chars.push(ch);
            }
            Err(DecodeError::InvalidSequence) => {}
            Err(DecodeError::TruncatedInput { .. }) => panic!("feed reported truncation"),
        }
    }
    let truncated = decoder.is_pending();
    assert_eq!(decoder.finish().is_err(), truncated);
    assert!(!decoder.is_pending(), "finish must leave the decoder idle");

    assert_eq!(chars, decode_utf8_lossy(data));

    // Valid input decodes exactly.
    if let Ok(text) = std::str::from_utf8(data) {
        assert!(!truncated);
        assert_eq!(chars, text.chars().collect::<Vec<_>>());
    }
});
