//! Emoji presentation segmentation.
//!
//! Splits a codepoint buffer into maximal runs that render either as text or
//! as colour emoji. Recognition follows the emoji sequence grammar of
//! Unicode TR51:
//!
//! ```text
//! any_emoji    = EmojiTextPresentation | EmojiEmojiPresentation | KeyCapBase
//!              | EmojiModifierBase | TagBase | Emoji
//! pres_seq     = any_emoji VS16
//! modifier_seq = EmojiModifierBase EmojiModifier
//! flag_seq     = RegionalIndicator RegionalIndicator
//! tag_seq      = TagBase TagSequence+ TagTerm
//! keycap_seq   = KeyCapBase VS16 CombiningEnclosingKeyCap
//! circle_seq   = any_emoji VS16? CombiningEnclosingCircleBackslash
//! zwj_element  = pres_seq | modifier_seq | any_emoji
//! zwj_seq      = zwj_element (ZWJ zwj_element)+
//!
//! emoji_run    = EmojiEmojiPresentation | TagBase | EmojiModifierBase
//!              | pres_seq | modifier_seq | flag_seq | tag_seq | keycap_seq
//!              | zwj_seq | circle_seq
//! text_run     = any_emoji VS15
//! ```
//!
//! At each position the longest matching token wins; on a tie `text_run`
//! wins. A position where nothing matches is a one-codepoint text token.
//! Neighbouring tokens with the same presentation merge.

use glyphrun_ucd::{CharProperties, EmojiSegmentationCategory as Cat, UnicodeProperties};

use crate::presentation::PresentationStyle;

// ---------------------------------------------------------------------------
// EmojiRun
// ---------------------------------------------------------------------------

/// A maximal span of one presentation style.
///
/// Indices are codepoint offsets into the segmented buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmojiRun {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    pub presentation: PresentationStyle,
}

impl EmojiRun {
    /// Number of codepoints in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn is_emoji(&self) -> bool {
        self.presentation.is_emoji()
    }

    /// The run's codepoints within `source`.
    #[inline]
    pub fn text<'a>(&self, source: &'a [char]) -> &'a [char] {
        &source[self.start..self.end]
    }
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token {
    end: usize,
    presentation: PresentationStyle,
}

/// Categories of a buffer, looked up on demand.
struct Categories<'s, 'a, P> {
    text: &'a [char],
    props: &'s P,
}

impl<P: CharProperties> Categories<'_, '_, P> {
    #[inline]
    fn at(&self, i: usize) -> Cat {
        self.text
            .get(i)
            .map_or(Cat::Invalid, |&c| self.props.emoji_category(c))
    }

    /// Length of a `zwj_element` at `i`, or 0.
    fn element_len(&self, i: usize) -> usize {
        let cat = self.at(i);
        if !cat.is_any_emoji() {
            return 0;
        }
        match self.at(i + 1) {
            Cat::VS16 => 2,
            Cat::EmojiModifier if cat == Cat::EmojiModifierBase => 2,
            _ => 1,
        }
    }

    /// Length of the longest `emoji_run` at `i`, or 0.
    fn emoji_len(&self, i: usize) -> usize {
        let first = self.at(i);
        let second = self.at(i + 1);
        let mut best = 0;

        if matches!(
            first,
            Cat::EmojiEmojiPresentation | Cat::TagBase | Cat::EmojiModifierBase
        ) {
            best = 1;
        }

        // pres_seq and modifier_seq
        if (first.is_any_emoji() && second == Cat::VS16)
            || (first == Cat::EmojiModifierBase && second == Cat::EmojiModifier)
        {
            best = best.max(2);
        }

        if first == Cat::RegionalIndicator && second == Cat::RegionalIndicator {
            best = best.max(2);
        }

        if first == Cat::TagBase && second == Cat::TagSequence {
            let mut j = i + 2;
            while self.at(j) == Cat::TagSequence {
                j += 1;
            }
            if self.at(j) == Cat::TagTerm {
                best = best.max(j + 1 - i);
            }
        }

        if first == Cat::KeyCapBase
            && second == Cat::VS16
            && self.at(i + 2) == Cat::CombiningEnclosingKeyCap
        {
            best = best.max(3);
        }

        if first.is_any_emoji() {
            let backslash_at = if second == Cat::VS16 { i + 2 } else { i + 1 };
            if self.at(backslash_at) == Cat::CombiningEnclosingCircleBackslash {
                best = best.max(backslash_at + 1 - i);
            }
        }

        // zwj_seq: greedy element matching is exact because no element is a
        // prefix of a longer element followed by ZWJ.
        let head = self.element_len(i);
        if head > 0 {
            let mut j = i + head;
            let mut joined = false;
            while self.at(j) == Cat::ZWJ {
                let next = self.element_len(j + 1);
                if next == 0 {
                    break;
                }
                j += 1 + next;
                joined = true;
            }
            if joined {
                best = best.max(j - i);
            }
        }

        best
    }

    /// The token starting at `i` (which must be in bounds).
    fn token(&self, i: usize) -> Token {
        let emoji = self.emoji_len(i);
        let text = if self.at(i).is_any_emoji() && self.at(i + 1) == Cat::VS15 {
            2
        } else {
            0
        };

        if emoji > text {
            Token {
                end: i + emoji,
                presentation: PresentationStyle::Emoji,
            }
        } else {
            Token {
                end: i + text.max(1),
                presentation: PresentationStyle::Text,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// EmojiSegmenter
// ---------------------------------------------------------------------------

/// Iterates the text/emoji presentation runs of a codepoint buffer.
///
/// ```
/// use glyphrun_segment::{EmojiSegmenter, PresentationStyle};
///
/// let text: Vec<char> = "AB😀".chars().collect();
/// let runs: Vec<_> = EmojiSegmenter::new(&text).collect();
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].presentation, PresentationStyle::Text);
/// assert_eq!((runs[1].start, runs[1].end), (2, 3));
/// assert!(runs[1].is_emoji());
/// ```
#[derive(Debug, Clone)]
pub struct EmojiSegmenter<'a, P = UnicodeProperties> {
    text: &'a [char],
    props: P,
    cursor: usize,
    /// Token at `cursor` already scanned while finding the previous run's end.
    peeked: Option<Token>,
    current: EmojiRun,
}

impl<'a> EmojiSegmenter<'a> {
    /// Segment `text` with the built-in property tables.
    pub fn new(text: &'a [char]) -> Self {
        Self::with_properties(text, UnicodeProperties)
    }
}

impl<'a, P: CharProperties> EmojiSegmenter<'a, P> {
    /// Segment `text` with a custom property lookup.
    pub fn with_properties(text: &'a [char], props: P) -> Self {
        Self {
            text,
            props,
            cursor: 0,
            peeked: None,
            current: EmojiRun::default(),
        }
    }

    /// Produce the next run, or `None` once the buffer is exhausted.
    pub fn consume(&mut self) -> Option<EmojiRun> {
        if self.cursor >= self.text.len() {
            return None;
        }

        let cats = Categories {
            text: self.text,
            props: &self.props,
        };
        let start = self.cursor;
        let first = self.peeked.take().unwrap_or_else(|| cats.token(start));
        let presentation = first.presentation;
        let mut end = first.end;

        while end < self.text.len() {
            let next = cats.token(end);
            if next.presentation != presentation {
                self.peeked = Some(next);
                break;
            }
            end = next.end;
        }

        self.cursor = end;
        self.current = EmojiRun {
            start,
            end,
            presentation,
        };
        Some(self.current)
    }

    /// The run returned by the last [`consume`](Self::consume); empty before
    /// the first.
    #[inline]
    pub fn current(&self) -> EmojiRun {
        self.current
    }

    /// Codepoints of the current run.
    #[inline]
    pub fn substr(&self) -> &'a [char] {
        self.current.text(self.text)
    }

    #[inline]
    pub fn is_emoji(&self) -> bool {
        self.current.is_emoji()
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        !self.current.is_emoji()
    }

    /// The buffer being segmented.
    #[inline]
    pub fn text(&self) -> &'a [char] {
        self.text
    }
}

impl<P: CharProperties> Iterator for EmojiSegmenter<'_, P> {
    type Item = EmojiRun;

    #[inline]
    fn next(&mut self) -> Option<EmojiRun> {
        self.consume()
    }
}

impl<P: CharProperties> std::iter::FusedIterator for EmojiSegmenter<'_, P> {}

// ===========================================================================
// Tests
// ===========================================================================
