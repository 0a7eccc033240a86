#![no_main]

use glyphrun_codec::decode_utf8_lossy;
use glyphrun_segment::{EmojiSegmenter, RunSegmenter, ScriptSegmenter};
use libfuzzer_sys::fuzz_target;

fn assert_partition(bounds: impl Iterator<Item = (usize, usize)>, len: usize, what: &str) {
    let mut expected_start = 0;
    for (start, end) in bounds {
        assert_eq!(start, expected_start, "{what}: gap or overlap at {start}");
        assert!(start < end, "{what}: empty run at {start}");
        expected_start = end;
    }
    assert_eq!(expected_start, len, "{what}: runs do not cover the buffer");
}

fuzz_target!(|data: &[u8]| {
    let text = decode_utf8_lossy(data);
    if text.len() > 4096 {
        return;
    }

    assert_partition(
        EmojiSegmenter::new(&text).map(|r| (r.start, r.end)),
        text.len(),
        "emoji",
    );
    assert_partition(
        ScriptSegmenter::new(&text).map(|r| (r.start, r.end)),
        text.len(),
        "script",
    );

    let mut segmenter = RunSegmenter::new(&text);
    let mut ranges = Vec::new();
    while let Some(range) = segmenter.consume() {
        assert_eq!(segmenter.current(), range);
        ranges.push(range);
    }
    assert!(segmenter.consume().is_none(), "segmenter must stay exhausted");
    assert_partition(ranges.iter().map(|r| (r.start, r.end)), text.len(), "run");

    for pair in ranges.windows(2) {
        assert!(
            pair[0].script != pair[1].script || pair[0].presentation != pair[1].presentation,
            "adjacent ranges {:?} and {:?} should have merged",
            pair[0],
            pair[1]
        );
    }
});
