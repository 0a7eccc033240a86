//! Decoding raw byte buffers in any transfer encoding.
//!
//! UTF-16 and UTF-32 units are read little-endian. A trailing partial unit
//! is handled like a truncated codepoint: dropped under
//! [`TruncationPolicy::Discard`], reported under [`TruncationPolicy::Reject`].

use std::slice::ChunksExact;

use glyphrun_codec::{CodeUnit, Decoder, Encoding, InvalidPolicy, TruncationPolicy, decode_with};

use crate::{Error, Result};

/// How [`decode_bytes`] interprets its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    /// Encoding of the byte buffer.
    pub encoding: Encoding,
    /// Treatment of invalid sequences.
    pub invalid: InvalidPolicy,
    /// Treatment of an incomplete tail.
    pub truncation: TruncationPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::Utf8,
            invalid: InvalidPolicy::Skip,
            truncation: TruncationPolicy::Discard,
        }
    }
}

impl DecodeOptions {
    /// Lossy decoding of `encoding`.
    #[must_use]
    pub fn new(encoding: Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn invalid(mut self, policy: InvalidPolicy) -> Self {
        self.invalid = policy;
        self
    }

    #[must_use]
    pub fn truncation(mut self, policy: TruncationPolicy) -> Self {
        self.truncation = policy;
        self
    }
}

/// Decode `bytes` into codepoints.
///
/// ```
/// use glyphrun::{DecodeOptions, Encoding, decode_bytes};
///
/// let le16 = [0x3D, 0xD8, 0x00, 0xDE, 0x21, 0x00];
/// let chars = decode_bytes(&le16, &DecodeOptions::new(Encoding::Utf16)).unwrap();
/// assert_eq!(chars, vec!['😀', '!']);
/// ```
pub fn decode_bytes(bytes: &[u8], options: &DecodeOptions) -> Result<Vec<char>> {
    match options.encoding {
        Encoding::Utf8 => decode_units(bytes, options),
        Encoding::Utf16 => {
            let units: Vec<u16> = whole_units(bytes, 2, options)?
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect();
            decode_units(&units, options)
        }
        Encoding::Utf32 => {
            let units: Vec<u32> = whole_units(bytes, 4, options)?
                .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect();
            decode_units(&units, options)
        }
    }
}

/// A decoded codepoint and the byte offset of its first code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Located {
    pub offset: usize,
    pub ch: char,
}

/// Decode `bytes`, recording where each codepoint starts.
///
/// Offsets count bytes of the input, whatever the encoding. A replacement
/// character sits at the offset of the sequence it replaces; a codepoint
/// that interrupted a pending sequence sits at its own unit.
///
/// ```
/// use glyphrun::{DecodeOptions, Located, decode_bytes_located};
///
/// let located = decode_bytes_located("a€b".as_bytes(), &DecodeOptions::default()).unwrap();
/// let offsets: Vec<usize> = located.iter().map(|l| l.offset).collect();
/// assert_eq!(offsets, vec![0, 1, 4]);
/// ```
pub fn decode_bytes_located(bytes: &[u8], options: &DecodeOptions) -> Result<Vec<Located>> {
    match options.encoding {
        Encoding::Utf8 => locate(bytes.iter().copied(), 1, options),
        Encoding::Utf16 => locate(
            whole_units(bytes, 2, options)?.map(|c| u16::from_le_bytes([c[0], c[1]])),
            2,
            options,
        ),
        Encoding::Utf32 => locate(
            whole_units(bytes, 4, options)?.map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]])),
            4,
            options,
        ),
    }
}

fn locate<U: CodeUnit>(
    units: impl Iterator<Item = U>,
    width: usize,
    options: &DecodeOptions,
) -> Result<Vec<Located>> {
    let mut decoder = Decoder::<U>::new();
    let mut out = Vec::new();
    // Offset of the first unit of the sequence being decoded.
    let mut start = 0;
    for (index, unit) in units.enumerate() {
        let offset = index * width;
        let next = offset + width;
        match decoder.feed(unit) {
            Ok(None) => {}
            Ok(Some(ch)) => {
                out.push(Located { offset: start, ch });
                start = next;
            }
            Err(err) => {
                tracing::trace!(offset = start, error = %err, "rejected code unit sequence");
                if options.invalid == InvalidPolicy::Replace {
                    out.push(Located {
                        offset: start,
                        ch: char::REPLACEMENT_CHARACTER,
                    });
                }
                if let Some(ch) = err.recovered() {
                    out.push(Located { offset, ch });
                    start = next;
                } else if decoder.is_pending() {
                    start = offset;
                } else {
                    start = next;
                }
            }
        }
    }
    if options.truncation == TruncationPolicy::Reject {
        decoder.finish()?;
    }
    Ok(out)
}

fn whole_units<'b>(
    bytes: &'b [u8],
    width: usize,
    options: &DecodeOptions,
) -> Result<ChunksExact<'b, u8>> {
    let chunks = bytes.chunks_exact(width);
    if !chunks.remainder().is_empty() && options.truncation == TruncationPolicy::Reject {
        return Err(Error::UnalignedInput {
            encoding: options.encoding,
            len: bytes.len(),
        });
    }
    Ok(chunks)
}

fn decode_units<U: CodeUnit>(units: &[U], options: &DecodeOptions) -> Result<Vec<char>> {
    let mut chars = decode_with(units, options.invalid);
    let out: Vec<char> = chars.by_ref().collect();
    if options.truncation == TruncationPolicy::Reject {
        chars.finish()?;
    }
    Ok(out)
}
