//! Code unit types and the per-encoding state machines behind them.
//!
//! Each of `u8`, `u16` and `u32` is the storage unit of exactly one transfer
//! encoding. The [`CodeUnit`] trait ties a unit type to its decoding step and
//! its encoder so that [`Decoder`](crate::Decoder) and the transcoder can be
//! written once, generically.

use std::fmt;

use smallvec::SmallVec;

use crate::encoding::Encoding;
use crate::error::DecodeError;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Partial-codepoint state shared by all three decoders.
///
/// `expected == 0` means no codepoint is pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeState {
    value: u32,
    consumed: u8,
    expected: u8,
}

impl DecodeState {
    #[inline]
    pub(crate) const fn is_pending(&self) -> bool {
        self.expected != 0
    }

    #[inline]
    pub(crate) const fn consumed(&self) -> u8 {
        self.consumed
    }

    #[inline]
    pub(crate) const fn expected(&self) -> u8 {
        self.expected
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline]
    fn begin(&mut self, value: u32, expected: u8) {
        self.value = value;
        self.consumed = 1;
        self.expected = expected;
    }
}

/// Storage unit of a Unicode transfer encoding (`u8`, `u16` or `u32`).
///
/// Sealed: the three implementations are the only legal ones.
pub trait CodeUnit: Copy + Eq + Default + fmt::Debug + Send + Sync + sealed::Sealed + 'static {
    /// The encoding this unit belongs to.
    const ENCODING: Encoding;

    /// Advance `state` by one unit.
    #[doc(hidden)]
    fn step(state: &mut DecodeState, unit: Self) -> Result<Option<char>, DecodeError>;

    /// Write `ch` into the front of `out`.
    ///
    /// Returns the number of units written, or `None` when `out` is too short
    /// to hold the whole codepoint (nothing is written in that case).
    fn encode_to(ch: char, out: &mut [Self]) -> Option<usize>;

    /// Widen to `u32` for display and diagnostics.
    fn to_u32(self) -> u32;
}

// ---------------------------------------------------------------------------
// UTF-8
// ---------------------------------------------------------------------------

/// Examine `byte` as the first byte of a sequence.
fn utf8_begin(state: &mut DecodeState, byte: u8) -> Result<Option<char>, DecodeError> {
    let (expected, bits) = match byte {
        0x00..=0x7F => return Ok(Some(char::from(byte))),
        // C0/C1 can only produce overlong two-byte forms.
        0xC2..=0xDF => (2, byte & 0x1F),
        0xE0..=0xEF => (3, byte & 0x0F),
        // F5..=FF would exceed U+10FFFF.
        0xF0..=0xF4 => (4, byte & 0x07),
        _ => return Err(DecodeError::InvalidSequence),
    };
    state.begin(u32::from(bits), expected);
    Ok(None)
}

fn utf8_complete(value: u32, length: u8) -> Result<char, DecodeError> {
    let minimum = match length {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if value < minimum {
        return Err(DecodeError::InvalidSequence);
    }
    // Rejects surrogates and anything above U+10FFFF.
    char::from_u32(value).ok_or(DecodeError::InvalidSequence)
}

impl CodeUnit for u8 {
    const ENCODING: Encoding = Encoding::Utf8;

    fn step(state: &mut DecodeState, unit: Self) -> Result<Option<char>, DecodeError> {
        if !state.is_pending() {
            return utf8_begin(state, unit);
        }

        if unit & 0xC0 != 0x80 {
            // The pending sequence is dead; the new byte gets a fresh start.
            state.clear();
            return match utf8_begin(state, unit) {
                Ok(Some(ch)) => Err(DecodeError::Interrupted(ch)),
                Ok(None) | Err(_) => Err(DecodeError::InvalidSequence),
            };
        }

        state.value = (state.value << 6) | u32::from(unit & 0x3F);
        state.consumed += 1;
        if state.consumed < state.expected {
            return Ok(None);
        }

        let (value, length) = (state.value, state.expected);
        state.clear();
        utf8_complete(value, length).map(Some)
    }

    fn encode_to(ch: char, out: &mut [Self]) -> Option<usize> {
        let len = ch.len_utf8();
        if out.len() < len {
            return None;
        }
        Some(ch.encode_utf8(out).len())
    }

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

// ---------------------------------------------------------------------------
// UTF-16
// ---------------------------------------------------------------------------

impl CodeUnit for u16 {
    const ENCODING: Encoding = Encoding::Utf16;

    fn step(state: &mut DecodeState, unit: Self) -> Result<Option<char>, DecodeError> {
        match unit {
            0xD800..=0xDBFF => {
                let abandoned = state.is_pending();
                state.begin(u32::from(unit), 2);
                if abandoned {
                    Err(DecodeError::InvalidSequence)
                } else {
                    Ok(None)
                }
            }
            0xDC00..=0xDFFF => {
                if !state.is_pending() {
                    return Err(DecodeError::InvalidSequence);
                }
                let high = state.value - 0xD800;
                state.clear();
                let value = 0x1_0000 + (high << 10) + (u32::from(unit) - 0xDC00);
                char::from_u32(value)
                    .map(Some)
                    .ok_or(DecodeError::InvalidSequence)
            }
            _ => {
                let ch = char::from_u32(u32::from(unit)).ok_or(DecodeError::InvalidSequence)?;
                if state.is_pending() {
                    state.clear();
                    Err(DecodeError::Interrupted(ch))
                } else {
                    Ok(Some(ch))
                }
            }
        }
    }

    fn encode_to(ch: char, out: &mut [Self]) -> Option<usize> {
        let len = ch.len_utf16();
        if out.len() < len {
            return None;
        }
        Some(ch.encode_utf16(out).len())
    }

    #[inline]
    fn to_u32(self) -> u32 {
        u32::from(self)
    }
}

// ---------------------------------------------------------------------------
// UTF-32
// ---------------------------------------------------------------------------

impl CodeUnit for u32 {
    const ENCODING: Encoding = Encoding::Utf32;

    fn step(state: &mut DecodeState, unit: Self) -> Result<Option<char>, DecodeError> {
        // Every unit is complete on its own; nothing can be pending.
        state.clear();
        char::from_u32(unit)
            .map(Some)
            .ok_or(DecodeError::InvalidSequence)
    }

    fn encode_to(ch: char, out: &mut [Self]) -> Option<usize> {
        let slot = out.first_mut()?;
        *slot = u32::from(ch);
        Some(1)
    }

    #[inline]
    fn to_u32(self) -> u32 {
        self
    }
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Encode one codepoint into the code units of `U`'s encoding.
///
/// ```
/// use glyphrun_codec::encode;
///
/// assert_eq!(encode::<u8>('\u{20AC}').as_slice(), &[0xE2, 0x82, 0xAC]);
/// assert_eq!(encode::<u16>('\u{1F600}').as_slice(), &[0xD83D, 0xDE00]);
/// assert_eq!(encode::<u32>('A').as_slice(), &[0x41]);
/// ```
#[must_use]
pub fn encode<U: CodeUnit>(ch: char) -> SmallVec<[U; 4]> {
    let mut buf = [U::default(); 4];
    let len = U::encode_to(ch, &mut buf).unwrap_or_default();
    SmallVec::from_slice(&buf[..len])
}

/// Encode a sequence of codepoints into `out`, stopping before the first
/// codepoint that does not fit.
///
/// Returns the number of units written.
pub fn encode_into<U: CodeUnit>(chars: &[char], out: &mut [U]) -> usize {
    let mut written = 0;
    for &ch in chars {
        match U::encode_to(ch, &mut out[written..]) {
            Some(n) => written += n,
            None => break,
        }
    }
    written
}
