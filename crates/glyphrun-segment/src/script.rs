//! Script segmentation.
//!
//! Groups codepoints into maximal runs sharing one resolved script.
//! `Common` and `Inherited` codepoints never start a new run: they join the
//! run they appear in, and a run that opens with them takes the first
//! specific script that follows. A buffer with no specific script at all is
//! one `Common` run.

use glyphrun_ucd::{CharProperties, Script, UnicodeProperties};

/// A contiguous run of codepoints sharing the same resolved script.
///
/// Indices are codepoint offsets into the segmented buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptRun {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
    /// Resolved script for this run.
    pub script: Script,
}

impl ScriptRun {
    /// Number of codepoints in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the run is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The run's codepoints within `source`.
    #[inline]
    pub fn text<'a>(&self, source: &'a [char]) -> &'a [char] {
        &source[self.start..self.end]
    }
}

/// Iterates the script runs of a codepoint buffer.
///
/// ```
/// use glyphrun_segment::ScriptSegmenter;
/// use glyphrun_ucd::Script;
///
/// let text: Vec<char> = "Hello мир".chars().collect();
/// let runs: Vec<_> = ScriptSegmenter::new(&text).map(|r| (r.len(), r.script)).collect();
/// assert_eq!(runs, vec![(6, Script::Latin), (3, Script::Cyrillic)]);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptSegmenter<'a, P = UnicodeProperties> {
    text: &'a [char],
    props: P,
    cursor: usize,
}

impl<'a> ScriptSegmenter<'a> {
    /// Segment `text` with the built-in property tables.
    pub fn new(text: &'a [char]) -> Self {
        Self::with_properties(text, UnicodeProperties)
    }
}

impl<'a, P: CharProperties> ScriptSegmenter<'a, P> {
    /// Segment `text` with a custom property lookup.
    pub fn with_properties(text: &'a [char], props: P) -> Self {
        Self {
            text,
            props,
            cursor: 0,
        }
    }

    /// Produce the next run, or `None` once the buffer is exhausted.
    pub fn consume(&mut self) -> Option<ScriptRun> {
        let start = self.cursor;
        if start >= self.text.len() {
            return None;
        }

        let mut resolved: Option<Script> = None;
        let mut end = start;
        for &c in &self.text[start..] {
            let script = self.props.script(c);
            if !script.is_common_or_inherited() {
                match resolved {
                    None => resolved = Some(script),
                    Some(current) if current != script => break,
                    Some(_) => {}
                }
            }
            end += 1;
        }

        self.cursor = end;
        Some(ScriptRun {
            start,
            end,
            script: resolved.unwrap_or(Script::Common),
        })
    }
}

impl<P: CharProperties> Iterator for ScriptSegmenter<'_, P> {
    type Item = ScriptRun;

    #[inline]
    fn next(&mut self) -> Option<ScriptRun> {
        self.consume()
    }
}

impl<P: CharProperties> std::iter::FusedIterator for ScriptSegmenter<'_, P> {}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(s: &str) -> Vec<(String, Script)> {
        let text: Vec<char> = s.chars().collect();
        ScriptSegmenter::new(&text)
            .map(|r| (r.text(&text).iter().collect(), r.script))
            .collect()
    }

    fn run(s: &str, script: Script) -> (String, Script) {
        (s.to_string(), script)
    }

    #[test]
    fn empty() {
        assert!(runs("").is_empty());
    }

    #[test]
    fn pure_latin() {
        assert_eq!(runs("Hello"), vec![run("Hello", Script::Latin)]);
    }

    #[test]
    fn common_absorbed_by_latin() {
        assert_eq!(runs("Abc.;?Xyz"), vec![run("Abc.;?Xyz", Script::Latin)]);
    }

    #[test]
    fn leading_space_takes_following_script() {
        assert_eq!(runs("  Hi"), vec![run("  Hi", Script::Latin)]);
    }

    #[test]
    fn trailing_common_stays_with_preceding_run() {
        assert_eq!(
            runs("abc δ"),
            vec![run("abc ", Script::Latin), run("δ", Script::Greek)]
        );
    }

    #[test]
    fn all_common_is_common() {
        assert_eq!(runs(" "), vec![run(" ", Script::Common)]);
        assert_eq!(runs(".…¡"), vec![run(".…¡", Script::Common)]);
        assert_eq!(runs("⌀⌁⌂"), vec![run("⌀⌁⌂", Script::Common)]);
    }

    #[test]
    fn all_inherited_reports_common() {
        assert_eq!(
            runs("\u{0301}\u{0300}"),
            vec![run("\u{0301}\u{0300}", Script::Common)]
        );
    }

    #[test]
    fn combining_marks_on_dotted_circle() {
        let s = "◌\u{0301}◌\u{0300}◌\u{0308}◌\u{0302}◌\u{0304}◌\u{030A}";
        assert_eq!(runs(s), vec![run(s, Script::Common)]);
    }

    #[test]
    fn arabic_then_hangul() {
        assert_eq!(
            runs("نص키스의"),
            vec![run("نص", Script::Arabic), run("키스의", Script::Hangul)]
        );
    }

    #[test]
    fn armenian_greek_armenian() {
        assert_eq!(
            runs("աբգαβγԱԲԳ"),
            vec![
                run("աբգ", Script::Armenian),
                run("αβγ", Script::Greek),
                run("ԱԲԳ", Script::Armenian),
            ]
        );
    }

    #[test]
    fn emoji_join_the_surrounding_script() {
        assert_eq!(
            runs("百家姓ऋषियों🌱🌲🌳🌴百家姓🌱🌲"),
            vec![
                run("百家姓", Script::Han),
                run("ऋषियों🌱🌲🌳🌴", Script::Devanagari),
                run("百家姓🌱🌲", Script::Han),
            ]
        );
    }

    #[test]
    fn japanese_with_punctuation() {
        assert_eq!(
            runs("いろはに.…¡ほへと"),
            vec![run("いろはに.…¡ほへと", Script::Hiragana)]
        );
    }

    #[test]
    fn devanagari_with_sign_after_plus() {
        assert_eq!(runs("क+े"), vec![run("क+े", Script::Devanagari)]);
    }

    #[test]
    fn zwj_does_not_break_runs() {
        assert_eq!(
            runs("ab\u{200D}\u{200D}efg"),
            vec![run("ab\u{200D}\u{200D}efg", Script::Latin)]
        );
    }

    #[test]
    fn unknown_is_a_script_of_its_own() {
        assert_eq!(
            runs("a\u{E000}b"),
            vec![
                run("a", Script::Latin),
                run("\u{E000}", Script::Unknown),
                run("b", Script::Latin),
            ]
        );
    }

    #[test]
    fn runs_cover_the_buffer() {
        let text: Vec<char> = "Hi мир 百 🌱 نص".chars().collect();
        let all: Vec<ScriptRun> = ScriptSegmenter::new(&text).collect();
        assert_eq!(all.first().map(|r| r.start), Some(0));
        assert_eq!(all.last().map(|r| r.end), Some(text.len()));
        for pair in all.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_ne!(pair[0].script, pair[1].script);
        }
        assert!(all.iter().all(|r| !r.is_empty()));
    }
}
