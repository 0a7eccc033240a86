//! Incremental, one-code-unit-at-a-time decoding.

use std::marker::PhantomData;

use crate::encoding::Encoding;
use crate::error::DecodeError;
use crate::unit::{CodeUnit, DecodeState};

/// Stateful decoder for the encoding whose storage unit is `U`.
///
/// Feed it code units one at a time; it hands back a codepoint whenever one
/// completes. State survives between calls, so a sequence split across two
/// input buffers decodes correctly as long as the same decoder is fed both.
///
/// ```
/// use glyphrun_codec::Decoder;
///
/// let mut decoder = Decoder::<u8>::new();
/// let fed: Vec<_> = [0xF0, 0x9F, 0x98, 0x80]
///     .into_iter()
///     .map(|b| decoder.feed(b))
///     .collect();
/// assert_eq!(fed, vec![Ok(None), Ok(None), Ok(None), Ok(Some('\u{1F600}'))]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder<U: CodeUnit> {
    state: DecodeState,
    _unit: PhantomData<U>,
}

impl<U: CodeUnit> Default for Decoder<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: CodeUnit> Decoder<U> {
    /// A decoder with no pending codepoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DecodeState::default(),
            _unit: PhantomData,
        }
    }

    /// The encoding this decoder reads.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        U::ENCODING
    }

    /// Consume one code unit.
    ///
    /// - `Ok(None)`: the unit was accepted, more are needed.
    /// - `Ok(Some(ch))`: the unit completed `ch`.
    /// - `Err(_)`: see [`DecodeError`]. The decoder never needs a manual
    ///   reset afterwards.
    #[inline]
    pub fn feed(&mut self, unit: U) -> Result<Option<char>, DecodeError> {
        U::step(&mut self.state, unit)
    }

    /// Whether a codepoint is partially decoded.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Units consumed so far for the pending codepoint (0 when idle).
    #[must_use]
    pub const fn pending_units(&self) -> u8 {
        self.state.consumed()
    }

    /// Total units the pending codepoint needs (0 when idle).
    #[must_use]
    pub const fn expected_units(&self) -> u8 {
        self.state.expected()
    }

    /// Drop any partially decoded codepoint.
    pub fn reset(&mut self) {
        self.state.clear();
    }

    /// Signal end of input.
    ///
    /// Returns [`DecodeError::TruncatedInput`] when a codepoint was left
    /// incomplete. The decoder is idle afterwards either way.
    pub fn finish(&mut self) -> Result<(), DecodeError> {
        if !self.state.is_pending() {
            return Ok(());
        }
        let err = DecodeError::TruncatedInput {
            consumed: self.state.consumed(),
            expected: self.state.expected(),
        };
        self.state.clear();
        Err(err)
    }
}
