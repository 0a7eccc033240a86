#![forbid(unsafe_code)]

//! Run segmentation for text shaping.
//!
//! Shapers need their input split into runs that share one script and one
//! presentation style (plain text vs. colour emoji). This crate provides
//! three segmenters over a borrowed `&[char]` buffer:
//!
//! 1. [`EmojiSegmenter`]: text vs. emoji presentation per the emoji sequence
//!    grammar (ZWJ sequences, flags, keycaps, skin tones, VS15/VS16).
//! 2. [`ScriptSegmenter`]: maximal runs of one resolved script, with
//!    `Common` and `Inherited` folded into their neighbours.
//! 3. [`RunSegmenter`]: the intersection of both, producing
//!    [`SegmentationRange`]s.
//!
//! All three are lazy iterators with a `consume()` method and never allocate.
//! Offsets are codepoint indices into the buffer.
//!
//! # Example
//!
//! ```
//! use glyphrun_segment::{PresentationStyle, segment};
//! use glyphrun_ucd::Script;
//!
//! let text: Vec<char> = "AB😀CD".chars().collect();
//! let ranges = segment(&text);
//! assert_eq!(ranges.len(), 3);
//! assert!(ranges.iter().all(|r| r.script == Script::Latin));
//! assert_eq!(ranges[1].presentation, PresentationStyle::Emoji);
//! ```

pub mod emoji;
pub mod presentation;
pub mod run;
pub mod script;

pub use emoji::{EmojiRun, EmojiSegmenter};
pub use presentation::PresentationStyle;
pub use run::{RunSegmenter, SegmentationRange, segment};
pub use script::{ScriptRun, ScriptSegmenter};
