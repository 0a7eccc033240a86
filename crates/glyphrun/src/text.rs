//! Segmentation of Rust strings.
//!
//! The segmenters work on codepoint indices. Most callers hold a `&str`, so
//! [`segment_str`] maps each range back to byte offsets and a borrowed slice.

use std::ops::Range;

use glyphrun_segment::{PresentationStyle, RunSegmenter, SegmentationRange};
use glyphrun_ucd::Script;

/// One segmentation range of a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun<'a> {
    /// The run's text.
    pub text: &'a str,
    /// Byte offsets of `text` within the source string.
    pub bytes: Range<usize>,
    /// The range in codepoint offsets, with its properties.
    pub range: SegmentationRange,
}

impl TextRun<'_> {
    #[inline]
    pub fn script(&self) -> Script {
        self.range.script
    }

    #[inline]
    pub fn presentation(&self) -> PresentationStyle {
        self.range.presentation
    }
}

/// Split `text` into maximal runs of one script and presentation.
///
/// ```
/// use glyphrun::{Script, segment_str};
///
/// let runs = segment_str("abc αβγ");
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[1].text, "αβγ");
/// assert_eq!(runs[1].bytes, 4..10);
/// assert_eq!(runs[1].script(), Script::Greek);
/// ```
#[must_use]
pub fn segment_str(text: &str) -> Vec<TextRun<'_>> {
    let chars: Vec<char> = text.chars().collect();
    // Byte offset of every codepoint index, plus the end.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    RunSegmenter::new(&chars)
        .map(|range| {
            let bytes = offsets[range.start]..offsets[range.end];
            TextRun {
                text: &text[bytes.clone()],
                bytes,
                range,
            }
        })
        .collect()
}
