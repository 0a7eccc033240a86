use thiserror::Error;

/// Failure reported by a [`Decoder`](crate::Decoder) for a single code unit.
///
/// "More input needed" is not an error; it is `Ok(None)` from
/// [`Decoder::feed`](crate::Decoder::feed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The code unit cannot start or legally continue a sequence.
    ///
    /// The decoder is left ready for the next unit. When the offending unit
    /// interrupted a pending sequence and can itself start a new one, the new
    /// sequence is already pending.
    #[error("invalid code unit sequence")]
    InvalidSequence,

    /// A pending sequence was abandoned by a unit that is a complete
    /// codepoint on its own. The abandoned sequence is invalid; the carried
    /// codepoint is valid input and must not be dropped.
    #[error("incomplete sequence interrupted by {0:?}")]
    Interrupted(char),

    /// The input ended while a codepoint was still incomplete.
    #[error("input ended inside a {expected}-unit sequence after {consumed} unit(s)")]
    TruncatedInput { consumed: u8, expected: u8 },
}

impl DecodeError {
    /// The valid codepoint carried by an [`Interrupted`](Self::Interrupted)
    /// error, if any.
    #[must_use]
    pub const fn recovered(&self) -> Option<char> {
        match self {
            Self::Interrupted(ch) => Some(*ch),
            _ => None,
        }
    }
}
