//! Property-based invariant tests for the segmenters.
//!
//! 1. Every segmenter partitions the buffer: runs are non-empty, contiguous,
//!    start at 0 and end at the buffer length.
//! 2. Run boundaries are exactly the union of script and emoji boundaries
//!    (the built-in tables keep emoji inside Common, so no emoji run ever
//!    straddles a script boundary).
//! 3. Each range carries the script and presentation of the sub-runs that
//!    contain it.
//! 4. Adjacent ranges differ in script or presentation.
//! 5. Segmentation is deterministic and `current()` mirrors the last range.
//! 6. Decoding arbitrary bytes and segmenting never panics.

use std::collections::BTreeSet;

use glyphrun_codec::decode_utf8_lossy;
use glyphrun_segment::{
    EmojiSegmenter, RunSegmenter, ScriptSegmenter, SegmentationRange, segment,
};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Text built from fragments that exercise every kind of boundary.
fn arb_text(max_parts: usize) -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Hello",
            " ",
            ".,!?",
            "0",
            "百家姓",
            "いろは",
            "ऋषियों",
            "نص",
            "키스의",
            "αβγ",
            "\u{0301}",
            "\u{200D}",
            "\u{FE0E}",
            "\u{FE0F}",
            "😀",
            "\u{270C}",
            "\u{2764}",
            "\u{1F3FB}",
            "\u{1F1E9}",
            "1\u{FE0F}\u{20E3}",
            "👩\u{200D}👩\u{200D}👧",
            "🏴\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}",
        ]),
        0..max_parts,
    )
    .prop_map(|parts| parts.concat().chars().collect())
}

fn assert_partition(bounds: &[(usize, usize)], len: usize) -> Result<(), TestCaseError> {
    if len == 0 {
        prop_assert!(bounds.is_empty());
        return Ok(());
    }
    prop_assert_eq!(bounds.first().map(|b| b.0), Some(0));
    prop_assert_eq!(bounds.last().map(|b| b.1), Some(len));
    for &(start, end) in bounds {
        prop_assert!(start < end, "empty run {}..{}", start, end);
    }
    for pair in bounds.windows(2) {
        prop_assert_eq!(pair[0].1, pair[1].0);
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Partition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_segmenter_partitions_the_buffer(text in arb_text(24)) {
        let emoji: Vec<_> = EmojiSegmenter::new(&text).map(|r| (r.start, r.end)).collect();
        assert_partition(&emoji, text.len())?;

        let scripts: Vec<_> = ScriptSegmenter::new(&text).map(|r| (r.start, r.end)).collect();
        assert_partition(&scripts, text.len())?;

        let runs: Vec<_> = segment(&text).iter().map(|r| (r.start, r.end)).collect();
        assert_partition(&runs, text.len())?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Boundaries and properties follow the sub-segmenters
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn boundaries_are_union_of_sub_boundaries(text in arb_text(24)) {
        let script_runs: Vec<_> = ScriptSegmenter::new(&text).collect();
        let emoji_runs: Vec<_> = EmojiSegmenter::new(&text).collect();

        let expected: BTreeSet<usize> = script_runs
            .iter()
            .map(|r| r.end)
            .chain(emoji_runs.iter().map(|r| r.end))
            .collect();
        let actual: BTreeSet<usize> = segment(&text).iter().map(|r| r.end).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn ranges_carry_containing_sub_run_properties(text in arb_text(24)) {
        let script_runs: Vec<_> = ScriptSegmenter::new(&text).collect();
        let emoji_runs: Vec<_> = EmojiSegmenter::new(&text).collect();

        for range in segment(&text) {
            let script_run = script_runs
                .iter()
                .find(|r| r.start <= range.start && range.end <= r.end);
            let emoji_run = emoji_runs
                .iter()
                .find(|r| r.start <= range.start && range.end <= r.end);
            prop_assert_eq!(script_run.map(|r| r.script), Some(range.script));
            prop_assert_eq!(emoji_run.map(|r| r.presentation), Some(range.presentation));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Maximality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjacent_sub_runs_differ(text in arb_text(24)) {
        let scripts: Vec<_> = ScriptSegmenter::new(&text).collect();
        for pair in scripts.windows(2) {
            prop_assert_ne!(pair[0].script, pair[1].script);
        }
        let emoji: Vec<_> = EmojiSegmenter::new(&text).collect();
        for pair in emoji.windows(2) {
            prop_assert_ne!(pair[0].presentation, pair[1].presentation);
        }
    }

    #[test]
    fn adjacent_ranges_differ_in_some_property(text in arb_text(24)) {
        let ranges = segment(&text);
        for pair in ranges.windows(2) {
            prop_assert!(
                pair[0].script != pair[1].script
                    || pair[0].presentation != pair[1].presentation,
                "{:?} and {:?} should have merged",
                pair[0],
                pair[1]
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism and accessors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn segmentation_is_deterministic(text in arb_text(24)) {
        prop_assert_eq!(segment(&text), segment(&text));
    }

    #[test]
    fn current_mirrors_last_consumed(text in arb_text(24)) {
        let mut segmenter = RunSegmenter::new(&text);
        prop_assert_eq!(segmenter.current(), SegmentationRange::default());
        while let Some(range) = segmenter.consume() {
            prop_assert_eq!(segmenter.current(), range);
            prop_assert_eq!(segmenter.substr(), &text[range.start..range.end]);
        }
        prop_assert!(segmenter.consume().is_none());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_bytes_segment_cleanly(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let text = decode_utf8_lossy(&bytes);
        let runs: Vec<_> = segment(&text).iter().map(|r| (r.start, r.end)).collect();
        assert_partition(&runs, text.len())?;
    }

    #[test]
    fn arbitrary_chars_segment_cleanly(text in prop::collection::vec(any::<char>(), 0..64)) {
        let runs: Vec<_> = segment(&text).iter().map(|r| (r.start, r.end)).collect();
        assert_partition(&runs, text.len())?;
    }
}
