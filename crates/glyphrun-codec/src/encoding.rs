//! Runtime identity of the three Unicode transfer encodings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the three Unicode transfer encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Encoding {
    /// 8-bit code units, 1..=4 per codepoint.
    Utf8,
    /// 16-bit code units, 1..=2 per codepoint (surrogate pairs).
    Utf16,
    /// 32-bit code units, exactly 1 per codepoint.
    Utf32,
}

impl Encoding {
    /// Canonical name, as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::Utf32 => "UTF-32",
        }
    }

    /// Width of one code unit in bits.
    #[must_use]
    pub const fn unit_bits(self) -> u32 {
        match self {
            Self::Utf8 => 8,
            Self::Utf16 => 16,
            Self::Utf32 => 32,
        }
    }

    /// Maximum number of code units a single codepoint can occupy.
    #[must_use]
    pub const fn max_units(self) -> usize {
        match self {
            Self::Utf8 => 4,
            Self::Utf16 => 2,
            Self::Utf32 => 1,
        }
    }

    /// Number of code units `ch` occupies in this encoding.
    #[must_use]
    pub const fn units_for(self, ch: char) -> usize {
        match self {
            Self::Utf8 => ch.len_utf8(),
            Self::Utf16 => ch.len_utf16(),
            Self::Utf32 => 1,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unrecognized encoding name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding: {name}")]
pub struct UnknownEncoding {
    pub name: String,
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "utf8" | "u8" => Ok(Self::Utf8),
            "utf16" | "u16" => Ok(Self::Utf16),
            "utf32" | "u32" => Ok(Self::Utf32),
            _ => Err(UnknownEncoding { name: s.to_owned() }),
        }
    }
}
