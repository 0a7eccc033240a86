#![forbid(unsafe_code)]

//! glyphrun public facade.
//!
//! Re-exports the codec, property and segmentation crates behind one
//! dependency, plus a few entry points that work on Rust strings and raw
//! byte buffers instead of `&[char]`:
//!
//! - [`segment_str`] splits a `&str` into [`TextRun`]s carrying both
//!   codepoint and byte offsets.
//! - [`decode_bytes`] decodes a UTF-8/16/32 byte buffer (little-endian for
//!   the wide encodings) according to [`DecodeOptions`];
//!   [`decode_bytes_located`] also reports each codepoint's byte offset.
//!
//! ```
//! use glyphrun::prelude::*;
//!
//! let runs = glyphrun::segment_str("Hi 😀!");
//! let parts: Vec<_> = runs.iter().map(|r| (r.text, r.presentation())).collect();
//! assert_eq!(
//!     parts,
//!     vec![
//!         ("Hi ", PresentationStyle::Text),
//!         ("😀", PresentationStyle::Emoji),
//!         ("!", PresentationStyle::Text),
//!     ]
//! );
//! ```

pub mod bytes;
pub mod text;

pub use glyphrun_codec as codec;
pub use glyphrun_segment as segment;
pub use glyphrun_ucd as ucd;

// --- Codec re-exports ------------------------------------------------------

pub use glyphrun_codec::{
    CodeUnit, DecodeError, Decoder, Encoding, InvalidPolicy, TruncationPolicy, UnknownEncoding,
    convert, convert_to, decode, decode_utf8_lossy, encode, encode_into, to_utf8, transcode,
    try_convert_to,
};

// --- Property re-exports ---------------------------------------------------

pub use glyphrun_ucd::{CharProperties, EmojiSegmentationCategory, Script, UnicodeProperties};

// --- Segmentation re-exports -----------------------------------------------

pub use glyphrun_segment::{
    EmojiRun, EmojiSegmenter, PresentationStyle, RunSegmenter, ScriptRun, ScriptSegmenter,
    SegmentationRange,
};

pub use bytes::{DecodeOptions, Located, decode_bytes, decode_bytes_located};
pub use text::{TextRun, segment_str};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for glyphrun entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Decoding failed under a rejecting policy.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A UTF-16/UTF-32 buffer whose length is not a multiple of the unit
    /// size, under [`TruncationPolicy::Reject`].
    #[error("{len} bytes is not a whole number of {encoding} code units")]
    UnalignedInput { encoding: Encoding, len: usize },
}

/// Standard result type for glyphrun APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude ---------------------------------------------------------------

/// Everything needed for day-to-day segmentation.
pub mod prelude {
    pub use crate::{
        CharProperties, DecodeError, DecodeOptions, Decoder, EmojiSegmentationCategory,
        EmojiSegmenter, Encoding, Error, PresentationStyle, RunSegmenter, Script, ScriptSegmenter,
        SegmentationRange, TextRun, UnicodeProperties, decode_bytes, segment_str,
    };
    pub use crate::segment::segment;
}
