use std::fmt;

/// Whether a span renders as ordinary text or as colour emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresentationStyle {
    #[default]
    Text,
    Emoji,
}

impl PresentationStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Emoji => "Emoji",
        }
    }

    #[inline]
    pub const fn is_emoji(self) -> bool {
        matches!(self, Self::Emoji)
    }
}

impl fmt::Display for PresentationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
