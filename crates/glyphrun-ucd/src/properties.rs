//! Property lookup seam used by the segmenters.

use crate::emoji::{EmojiSegmentationCategory, emoji_segmentation_category};
use crate::script::{Script, script};

/// Per-codepoint property lookup.
///
/// Segmenters are generic over this so that callers with their own Unicode
/// tables (a newer UCD, a font's coverage map) can plug them in. Lookups
/// must be pure: the same codepoint always yields the same answer.
pub trait CharProperties {
    /// The codepoint's `Script` property.
    fn script(&self, c: char) -> Script;

    /// The codepoint's category in the emoji sequence grammar.
    fn emoji_category(&self, c: char) -> EmojiSegmentationCategory;
}

impl<P: CharProperties + ?Sized> CharProperties for &P {
    #[inline]
    fn script(&self, c: char) -> Script {
        (**self).script(c)
    }

    #[inline]
    fn emoji_category(&self, c: char) -> EmojiSegmentationCategory {
        (**self).emoji_category(c)
    }
}

/// The built-in tables of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnicodeProperties;

impl CharProperties for UnicodeProperties {
    #[inline]
    fn script(&self, c: char) -> Script {
        script(c)
    }

    #[inline]
    fn emoji_category(&self, c: char) -> EmojiSegmentationCategory {
        emoji_segmentation_category(c)
    }
}
