//! Combined script + presentation segmentation.
//!
//! A [`RunSegmenter`] drives a [`ScriptSegmenter`] and an [`EmojiSegmenter`]
//! over the same buffer and splits wherever either of them does. Each
//! resulting [`SegmentationRange`] is homogeneous in both script and
//! presentation, which is what a shaper needs to pick a font and a shaping
//! plan for it.
//!
//! An emoji-presentation run is never split by a script boundary inside it:
//! the range extends to the end of the emoji run and keeps the script at its
//! first codepoint.

use glyphrun_ucd::{CharProperties, Script, UnicodeProperties};

use crate::emoji::{EmojiRun, EmojiSegmenter};
use crate::presentation::PresentationStyle;
use crate::script::{ScriptRun, ScriptSegmenter};

// ---------------------------------------------------------------------------
// SegmentationRange
// ---------------------------------------------------------------------------

/// A maximal span sharing one script and one presentation style.
///
/// The default value `{0, 0, Invalid, Text}` stands for "no range".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentationRange {
    /// Start codepoint offset (inclusive).
    pub start: usize,
    /// End codepoint offset (exclusive).
    pub end: usize,
    pub script: Script,
    pub presentation: PresentationStyle,
}

impl SegmentationRange {
    /// Number of codepoints in the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The range's codepoints within `source`.
    #[inline]
    pub fn text<'a>(&self, source: &'a [char]) -> &'a [char] {
        &source[self.start..self.end]
    }
}

// ---------------------------------------------------------------------------
// RunSegmenter
// ---------------------------------------------------------------------------

/// Iterates the shaping runs of a codepoint buffer.
///
/// ```
/// use glyphrun_segment::{PresentationStyle, RunSegmenter};
/// use glyphrun_ucd::Script;
///
/// let text: Vec<char> = "A 😀".chars().collect();
/// let mut segmenter = RunSegmenter::new(&text);
///
/// let first = segmenter.consume().unwrap();
/// assert_eq!((first.start, first.end, first.script), (0, 2, Script::Latin));
///
/// let second = segmenter.consume().unwrap();
/// assert_eq!((second.start, second.end), (2, 3));
/// assert_eq!(second.presentation, PresentationStyle::Emoji);
///
/// assert!(segmenter.consume().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RunSegmenter<'a, P = UnicodeProperties> {
    text: &'a [char],
    scripts: ScriptSegmenter<'a, P>,
    emojis: EmojiSegmenter<'a, P>,
    script_run: Option<ScriptRun>,
    emoji_run: Option<EmojiRun>,
    last_split: usize,
    current: SegmentationRange,
}

impl<'a> RunSegmenter<'a> {
    /// Segment `text` with the built-in property tables.
    pub fn new(text: &'a [char]) -> Self {
        Self::with_properties(text, UnicodeProperties)
    }
}

impl<'a, P: CharProperties + Clone> RunSegmenter<'a, P> {
    /// Segment `text` with a custom property lookup.
    pub fn with_properties(text: &'a [char], props: P) -> Self {
        Self {
            text,
            scripts: ScriptSegmenter::with_properties(text, props.clone()),
            emojis: EmojiSegmenter::with_properties(text, props),
            script_run: None,
            emoji_run: None,
            last_split: 0,
            current: SegmentationRange::default(),
        }
    }
}

impl<'a, P: CharProperties> RunSegmenter<'a, P> {
    /// Produce the next range, or `None` once the buffer is exhausted.
    pub fn consume(&mut self) -> Option<SegmentationRange> {
        let start = self.last_split;
        if start >= self.text.len() {
            return None;
        }

        let script_run = advance(&mut self.script_run, start, || self.scripts.consume())?;
        let emoji_run = advance(&mut self.emoji_run, start, || self.emojis.consume())?;

        let mut end = script_run.end.min(emoji_run.end);
        if emoji_run.is_emoji() && script_run.end < emoji_run.end {
            tracing::debug!(
                start,
                script_end = script_run.end,
                emoji_end = emoji_run.end,
                script = %script_run.script,
                "script boundary inside emoji run, extending range to emoji end"
            );
            end = emoji_run.end;
        }

        self.last_split = end;
        self.current = SegmentationRange {
            start,
            end,
            script: script_run.script,
            presentation: emoji_run.presentation,
        };
        Some(self.current)
    }

    /// The range returned by the last [`consume`](Self::consume), or the
    /// empty default before the first.
    #[inline]
    pub fn current(&self) -> SegmentationRange {
        self.current
    }

    /// Codepoints of the current range.
    #[inline]
    pub fn substr(&self) -> &'a [char] {
        self.current.text(self.text)
    }

    /// The buffer being segmented.
    #[inline]
    pub fn text(&self) -> &'a [char] {
        self.text
    }
}

/// Pull sub-runs until the cached one reaches past `position`.
fn advance<R: Copy + SubRun>(
    cached: &mut Option<R>,
    position: usize,
    mut pull: impl FnMut() -> Option<R>,
) -> Option<R> {
    while cached.is_none_or(|run| run.end() <= position) {
        *cached = Some(pull()?);
    }
    *cached
}

trait SubRun {
    fn end(&self) -> usize;
}

impl SubRun for ScriptRun {
    fn end(&self) -> usize {
        self.end
    }
}

impl SubRun for EmojiRun {
    fn end(&self) -> usize {
        self.end
    }
}

impl<P: CharProperties> Iterator for RunSegmenter<'_, P> {
    type Item = SegmentationRange;

    #[inline]
    fn next(&mut self) -> Option<SegmentationRange> {
        self.consume()
    }
}

impl<P: CharProperties> std::iter::FusedIterator for RunSegmenter<'_, P> {}

/// Segment a whole buffer at once.
pub fn segment(text: &[char]) -> Vec<SegmentationRange> {
    RunSegmenter::new(text).collect()
}

// ===========================================================================
// Tests
// ===========================================================================
