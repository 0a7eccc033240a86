#![forbid(unsafe_code)]

//! Incremental decoding and encoding of the three Unicode transfer encodings.
//!
//! # Role in glyphrun
//! Segmenters operate on validated codepoints (`char`). This crate is the
//! boundary where raw code units become codepoints: a byte stream read from a
//! pty, a UTF-16 buffer from a platform API, or UTF-32 from a C caller.
//!
//! # Pieces
//! - [`Decoder`]: one code unit in, at most one codepoint out. Keeps partial
//!   state between calls so input can arrive in arbitrary chunks.
//! - [`encode`] / [`encode_into`]: one codepoint out as 1..=4 code units.
//! - [`transcode`] / [`convert_to`]: drive both over a whole slice.
//!
//! The unit type selects the encoding: `u8` is UTF-8, `u16` is UTF-16 and
//! `u32` is UTF-32.

pub mod decoder;
pub mod encoding;
pub mod error;
pub mod transcode;
pub mod unit;

pub use decoder::Decoder;
pub use encoding::{Encoding, UnknownEncoding};
pub use error::DecodeError;
pub use transcode::{
    Decode, InvalidPolicy, Transcode, TruncationPolicy, convert, convert_to, decode,
    decode_utf8_lossy, decode_with, to_utf8, transcode, transcode_with, try_convert_to,
};
pub use unit::{CodeUnit, encode, encode_into};

#[doc(hidden)]
pub use unit::DecodeState;
