//! Lazy and eager conversion between transfer encodings.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::unit::{CodeUnit, encode};

/// What to do with code units that do not form a valid codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InvalidPolicy {
    /// Drop them silently.
    #[default]
    Skip,
    /// Emit U+FFFD REPLACEMENT CHARACTER once per rejected sequence.
    Replace,
}

/// What to do when the input ends in the middle of a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TruncationPolicy {
    /// Discard the incomplete tail; not an error.
    #[default]
    Discard,
    /// Report [`DecodeError::TruncatedInput`].
    Reject,
}

// ---------------------------------------------------------------------------
// Decode: units -> chars
// ---------------------------------------------------------------------------

/// Iterator over the codepoints decoded from a slice of code units.
///
/// Created by [`decode`] and [`decode_with`].
#[derive(Debug, Clone)]
pub struct Decode<'a, U: CodeUnit> {
    input: std::slice::Iter<'a, U>,
    decoder: Decoder<U>,
    policy: InvalidPolicy,
    stash: Option<char>,
}

impl<'a, U: CodeUnit> Decode<'a, U> {
    fn new(input: &'a [U], policy: InvalidPolicy) -> Self {
        Self {
            input: input.iter(),
            decoder: Decoder::new(),
            policy,
            stash: None,
        }
    }

    /// Whether the input consumed so far ends inside a codepoint.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.decoder.is_pending()
    }

    /// Drain the remaining input and report whether it ended mid-codepoint.
    pub fn finish(mut self) -> Result<(), DecodeError> {
        self.by_ref().for_each(drop);
        self.decoder.finish()
    }

    fn rejected(&mut self, err: DecodeError) -> Option<char> {
        tracing::trace!(
            encoding = %self.decoder.encoding(),
            error = %err,
            "rejected code unit sequence"
        );
        let recovered = err.recovered();
        match self.policy {
            InvalidPolicy::Skip => recovered,
            InvalidPolicy::Replace => {
                self.stash = recovered;
                Some(char::REPLACEMENT_CHARACTER)
            }
        }
    }
}

impl<U: CodeUnit> Iterator for Decode<'_, U> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if let Some(ch) = self.stash.take() {
            return Some(ch);
        }
        while let Some(&unit) = self.input.next() {
            match self.decoder.feed(unit) {
                Ok(Some(ch)) => return Some(ch),
                Ok(None) => {}
                Err(err) => {
                    if let Some(ch) = self.rejected(err) {
                        return Some(ch);
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.stash.is_some());
        let (_, upper) = self.input.size_hint();
        // Replacement may emit two chars for one unit.
        (pending, upper.map(|n| n * 2 + pending))
    }
}

impl<U: CodeUnit> FusedIterator for Decode<'_, U> {}

/// Decode `input`, skipping invalid sequences and discarding a truncated
/// tail.
pub fn decode<U: CodeUnit>(input: &[U]) -> Decode<'_, U> {
    Decode::new(input, InvalidPolicy::Skip)
}

/// Decode `input` with an explicit [`InvalidPolicy`].
pub fn decode_with<U: CodeUnit>(input: &[U], policy: InvalidPolicy) -> Decode<'_, U> {
    Decode::new(input, policy)
}

// ---------------------------------------------------------------------------
// Transcode: S units -> T units
// ---------------------------------------------------------------------------

/// Lazy sequence of `T` code units produced from `S` code units.
///
/// Created by [`transcode`] and [`transcode_with`].
#[derive(Debug, Clone)]
pub struct Transcode<'a, S: CodeUnit, T: CodeUnit> {
    chars: Decode<'a, S>,
    buf: SmallVec<[T; 4]>,
    pos: usize,
}

impl<S: CodeUnit, T: CodeUnit> Transcode<'_, S, T> {
    /// Drain the remaining input and report whether it ended mid-codepoint.
    pub fn finish(self) -> Result<(), DecodeError> {
        self.chars.finish()
    }
}

impl<S: CodeUnit, T: CodeUnit> Iterator for Transcode<'_, S, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pos == self.buf.len() {
            let ch = self.chars.next()?;
            self.buf = encode::<T>(ch);
            self.pos = 0;
        }
        let unit = self.buf[self.pos];
        self.pos += 1;
        Some(unit)
    }
}

impl<S: CodeUnit, T: CodeUnit> FusedIterator for Transcode<'_, S, T> {}

/// Lazily convert `input` from `S`'s encoding into `T`'s encoding.
///
/// Invalid sequences are skipped; an incomplete trailing codepoint is
/// silently dropped.
///
/// ```
/// use glyphrun_codec::transcode;
///
/// let utf16: Vec<u16> = transcode::<u8, u16>("[ö€😀".as_bytes()).collect();
/// assert_eq!(utf16, "[ö€😀".encode_utf16().collect::<Vec<_>>());
/// ```
pub fn transcode<S: CodeUnit, T: CodeUnit>(input: &[S]) -> Transcode<'_, S, T> {
    transcode_with(input, InvalidPolicy::Skip)
}

/// [`transcode`] with an explicit [`InvalidPolicy`].
pub fn transcode_with<S: CodeUnit, T: CodeUnit>(
    input: &[S],
    policy: InvalidPolicy,
) -> Transcode<'_, S, T> {
    Transcode {
        chars: decode_with(input, policy),
        buf: SmallVec::new(),
        pos: 0,
    }
}

/// Convert all of `input` and append the resulting units to `sink`.
pub fn convert_to<S: CodeUnit, T: CodeUnit>(input: &[S], sink: &mut impl Extend<T>) {
    sink.extend(transcode::<S, T>(input));
}

/// Convert `input` into a freshly allocated vector.
#[must_use]
pub fn convert<S: CodeUnit, T: CodeUnit>(input: &[S]) -> Vec<T> {
    transcode::<S, T>(input).collect()
}

/// Convert all of `input` into `sink`, applying `truncation` to an
/// incomplete tail.
///
/// Everything decodable is appended to `sink` before any truncation error is
/// reported.
pub fn try_convert_to<S: CodeUnit, T: CodeUnit>(
    input: &[S],
    sink: &mut impl Extend<T>,
    truncation: TruncationPolicy,
) -> Result<(), DecodeError> {
    let mut units = transcode::<S, T>(input);
    sink.extend(units.by_ref());
    match truncation {
        TruncationPolicy::Discard => Ok(()),
        TruncationPolicy::Reject => units.finish(),
    }
}

// ---------------------------------------------------------------------------
// Convenience
// ---------------------------------------------------------------------------

/// Decode UTF-8 bytes into codepoints, dropping anything invalid.
///
/// ```
/// use glyphrun_codec::decode_utf8_lossy;
///
/// assert_eq!(decode_utf8_lossy(b"Hi\xB1Ho"), vec!['H', 'i', 'H', 'o']);
/// ```
#[must_use]
pub fn decode_utf8_lossy(bytes: &[u8]) -> Vec<char> {
    decode(bytes).collect()
}

/// Encode codepoints as a UTF-8 `String`.
#[must_use]
pub fn to_utf8(chars: &[char]) -> String {
    chars.iter().collect()
}
