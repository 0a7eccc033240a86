#![no_main]

use arbitrary::Arbitrary;
use glyphrun_codec::{InvalidPolicy, convert, decode, decode_with, to_utf8};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Input {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

fuzz_target!(|input: Input| {
    // Whatever survives lossy decoding must round-trip through every
    // encoding unchanged.
    let chars: Vec<char> = match &input {
        Input::Utf8(units) => decode(units).collect(),
        Input::Utf16(units) => decode(units).collect(),
        Input::Utf32(units) => decode(units).collect(),
    };

    let utf8: Vec<u8> = convert(&chars.iter().map(|&c| u32::from(c)).collect::<Vec<_>>());
    assert_eq!(utf8, to_utf8(&chars).into_bytes());

    let utf16: Vec<u16> = convert(&utf8);
    let utf32: Vec<u32> = convert(&utf16);
    let back: Vec<char> = decode(&utf32).collect();
    assert_eq!(back, chars);

    // Replacement never loses valid codepoints: dropping U+FFFD from the
    // replaced stream leaves the skipped one, modulo genuine U+FFFD input.
    let replaced: Vec<char> = match &input {
        Input::Utf8(units) => decode_with(units, InvalidPolicy::Replace).collect(),
        Input::Utf16(units) => decode_with(units, InvalidPolicy::Replace).collect(),
        Input::Utf32(units) => decode_with(units, InvalidPolicy::Replace).collect(),
    };
    let strip = |v: &[char]| -> Vec<char> {
        v.iter().copied().filter(|&c| c != char::REPLACEMENT_CHARACTER).collect()
    };
    assert_eq!(strip(&replaced), strip(&chars));
});
