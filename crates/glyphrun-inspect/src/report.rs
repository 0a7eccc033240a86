//! Report records and their text/JSON renderings.
//!
//! Each subcommand builds a list of serializable records. JSON output is the
//! records verbatim; text output is one aligned block per record.

use std::collections::HashSet;
use std::io::Write;

use clap::ValueEnum;
use glyphrun::ucd::{emoji_segmentation_category, is_emoji, is_emoji_component, script};
use glyphrun::{
    EmojiSegmentationCategory, EmojiSegmenter, Located, PresentationStyle, RunSegmenter, Script,
    ScriptSegmenter,
};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A record with a human-readable rendering.
pub trait TextRecord {
    /// Column header printed once before the records.
    const HEADER: Option<&'static str> = None;

    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Write `records` to `out` in `format`.
pub fn emit<R: TextRecord + Serialize>(
    records: &[R],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if let Some(header) = R::HEADER {
                writeln!(out, "{header}")?;
            }
            for record in records {
                record.write_text(out)?;
            }
        }
    }
    Ok(())
}

// ============================================================================
// Escaping
// ============================================================================

/// Escape UTF-8 bytes: printable ASCII stays, everything else is `\xNN`.
#[must_use]
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 4);
    for &b in bytes {
        match b {
            b'\\' => s.push_str("\\\\"),
            0x1B => s.push_str("\\033"),
            b'\t' => s.push_str("\\t"),
            b'\r' => s.push_str("\\r"),
            b'\n' => s.push_str("\\n"),
            b'"' => s.push_str("\\\""),
            0x20..=0x7E => s.push(char::from(b)),
            _ => s.push_str(&format!("\\x{b:02X}")),
        }
    }
    s
}

/// Escape control characters in `text` so it cannot drive the terminal.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{1B}' => s.push_str("\\033"),
            '\t' => s.push_str("\\t"),
            '\r' => s.push_str("\\r"),
            '\n' => s.push_str("\\n"),
            '"' => s.push_str("\\\""),
            '\\' => s.push_str("\\\\"),
            c if c.is_control() => s.push_str(&format!("\\u{{{:X}}}", u32::from(c))),
            c => s.push(c),
        }
    }
    s
}

fn width_label(width: Option<usize>) -> String {
    width.map_or_else(|| "-".to_string(), |w| w.to_string())
}

// ============================================================================
// codepoints
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodepointRecord {
    /// Byte offset of the codepoint in the input.
    pub offset: usize,
    pub codepoint: u32,
    #[serde(rename = "char")]
    pub ch: char,
    /// Emoji that is not merely an emoji component.
    pub emoji: bool,
    pub script: Script,
    pub category: EmojiSegmentationCategory,
    /// Whether a grapheme cluster boundary precedes the codepoint.
    pub breakable: bool,
    /// Terminal column width; `None` for control characters.
    pub width: Option<usize>,
    /// Escaped UTF-8 encoding.
    pub utf8: String,
}

/// One record per decoded codepoint.
#[must_use]
pub fn codepoints(located: &[Located]) -> Vec<CodepointRecord> {
    let text: String = located.iter().map(|l| l.ch).collect();
    let boundaries: HashSet<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();

    let mut byte = 0;
    located
        .iter()
        .map(|&Located { offset, ch }| {
            let breakable = boundaries.contains(&byte);
            byte += ch.len_utf8();
            let mut buf = [0u8; 4];
            CodepointRecord {
                offset,
                codepoint: u32::from(ch),
                ch,
                emoji: is_emoji(ch) && !is_emoji_component(ch),
                script: script(ch),
                category: emoji_segmentation_category(ch),
                breakable,
                width: ch.width(),
                utf8: escape_bytes(ch.encode_utf8(&mut buf).as_bytes()),
            }
        })
        .collect()
}

impl TextRecord for CodepointRecord {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{:>3}: U+{:08X} [{}] [{:<10}] {} width:{} UTF8:{}",
            self.offset,
            self.codepoint,
            if self.emoji { "EMOJI" } else { "TEXT " },
            self.script,
            if self.breakable {
                "[breakable  ]"
            } else {
                "[unbreakable]"
            },
            width_label(self.width),
            self.utf8,
        )
    }
}

// ============================================================================
// runs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    /// First codepoint index.
    pub start: usize,
    /// One past the last codepoint index.
    pub end: usize,
    pub script: Script,
    pub presentation: PresentationStyle,
    pub text: String,
}

/// The run segmenter's ranges.
#[must_use]
pub fn runs(chars: &[char]) -> Vec<RunRecord> {
    RunSegmenter::new(chars)
        .map(|range| RunRecord {
            start: range.start,
            end: range.end,
            script: range.script,
            presentation: range.presentation,
            text: range.text(chars).iter().collect(),
        })
        .collect()
}

impl TextRecord for RunRecord {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{}-{} ({}): {} {}",
            self.start,
            self.end - 1,
            self.end - self.start,
            self.script,
            self.presentation
        )?;
        writeln!(out, "\"{}\"", escape_text(&self.text))?;
        writeln!(out)
    }
}

// ============================================================================
// scripts
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptCodepoint {
    pub index: usize,
    pub codepoint: u32,
    #[serde(rename = "char")]
    pub ch: char,
    pub width: Option<usize>,
    /// The codepoint's own script, before run resolution.
    pub script: Script,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRunRecord {
    pub start: usize,
    pub end: usize,
    /// The run's resolved script.
    pub script: Script,
    pub codepoints: Vec<ScriptCodepoint>,
}

/// Script runs with the raw script of every member codepoint.
#[must_use]
pub fn scripts(chars: &[char]) -> Vec<ScriptRunRecord> {
    ScriptSegmenter::new(chars)
        .map(|run| ScriptRunRecord {
            start: run.start,
            end: run.end,
            script: run.script,
            codepoints: (run.start..run.end)
                .map(|index| {
                    let ch = chars[index];
                    ScriptCodepoint {
                        index,
                        codepoint: u32::from(ch),
                        ch,
                        width: ch.width(),
                        script: script(ch),
                    }
                })
                .collect(),
        })
        .collect()
}

impl TextRecord for ScriptRunRecord {
    const HEADER: Option<&'static str> = Some("   INDEX     CODEPOINT    TEXT  WIDTH   SCRIPT");

    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}-{}: {}", self.start, self.end - 1, self.script)?;
        for cp in &self.codepoints {
            writeln!(
                out,
                "    {:04}:    U+{:08X}   {}\t∆ {}\t{}",
                cp.index,
                cp.codepoint,
                escape_text(&cp.ch.to_string()),
                width_label(cp.width),
                cp.script
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// emoji
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCodepoint {
    pub index: usize,
    pub codepoint: u32,
    #[serde(rename = "char")]
    pub ch: char,
    pub category: EmojiSegmentationCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiRunRecord {
    pub start: usize,
    pub end: usize,
    pub presentation: PresentationStyle,
    pub codepoints: Vec<EmojiCodepoint>,
}

/// Emoji presentation runs with the grammar category of every codepoint.
#[must_use]
pub fn emoji(chars: &[char]) -> Vec<EmojiRunRecord> {
    EmojiSegmenter::new(chars)
        .map(|run| EmojiRunRecord {
            start: run.start,
            end: run.end,
            presentation: run.presentation,
            codepoints: (run.start..run.end)
                .map(|index| {
                    let ch = chars[index];
                    EmojiCodepoint {
                        index,
                        codepoint: u32::from(ch),
                        ch,
                        category: emoji_segmentation_category(ch),
                    }
                })
                .collect(),
        })
        .collect()
}

impl TextRecord for EmojiRunRecord {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{}-{} ({}): {}",
            self.start,
            self.end - 1,
            self.end - self.start,
            self.presentation
        )?;
        for cp in &self.codepoints {
            writeln!(
                out,
                "    {:04}:    U+{:08X}   {}\t{}",
                cp.index,
                cp.codepoint,
                escape_text(&cp.ch.to_string()),
                cp.category
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn located(s: &str) -> Vec<Located> {
        s.char_indices()
            .map(|(offset, ch)| Located { offset, ch })
            .collect()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn text_of<R: TextRecord + Serialize>(records: &[R]) -> String {
        let mut out = Vec::new();
        emit(records, OutputFormat::Text, &mut out).expect("render");
        String::from_utf8(out).expect("utf-8 output")
    }

    // ── Escaping ────────────────────────────────────────────────────────

    #[test]
    fn escape_bytes_hexes_non_ascii() {
        assert_eq!(escape_bytes(b"a"), "a");
        assert_eq!(escape_bytes("€".as_bytes()), "\\xE2\\x82\\xAC");
        assert_eq!(escape_bytes(b"\x1B\n\"\\"), "\\033\\n\\\"\\\\");
        assert_eq!(escape_bytes(b"\x7F"), "\\x7F");
    }

    #[test]
    fn escape_text_keeps_printable_unicode() {
        assert_eq!(escape_text("héllo 😀"), "héllo 😀");
        assert_eq!(escape_text("\x1B[32mx"), "\\033[32mx");
        assert_eq!(escape_text("a\u{7}b"), "a\\u{7}b");
    }

    // ── codepoints ──────────────────────────────────────────────────────

    #[test]
    fn codepoint_line_layout() {
        let records = codepoints(&located("A"));
        assert_eq!(
            text_of(&records),
            "  0: U+00000041 [TEXT ] [Latin     ] [breakable  ] width:1 UTF8:A\n"
        );
    }

    #[test]
    fn codepoint_offsets_and_emoji_flag() {
        let records = codepoints(&located("a😀"));
        assert_eq!(records[1].offset, 1);
        assert!(records[1].emoji);
        assert_eq!(records[1].width, Some(2));
        assert_eq!(records[1].utf8, "\\xF0\\x9F\\x98\\x80");
        assert_eq!(
            records[1].category,
            EmojiSegmentationCategory::EmojiEmojiPresentation
        );
    }

    #[test]
    fn components_are_not_flagged_as_emoji() {
        // Digits and skin tones are Emoji but also Emoji_Component.
        let records = codepoints(&located("1\u{1F3FB}"));
        assert!(!records[0].emoji);
        assert!(!records[1].emoji);
    }

    #[test]
    fn grapheme_continuations_are_unbreakable() {
        let records = codepoints(&located("e\u{0301}x👩\u{200D}👧"));
        let breakable: Vec<bool> = records.iter().map(|r| r.breakable).collect();
        assert_eq!(breakable, vec![true, false, true, true, false, false]);
    }

    #[test]
    fn control_characters_have_no_width() {
        let records = codepoints(&located("\t"));
        assert_eq!(records[0].width, None);
        assert!(text_of(&records).contains("width:- UTF8:\\t"));
    }

    // ── runs ────────────────────────────────────────────────────────────

    #[test]
    fn run_blocks() {
        let records = runs(&chars("ab😀"));
        assert_eq!(
            text_of(&records),
            "0-1 (2): Latin Text\n\"ab\"\n\n2-2 (1): Latin Emoji\n\"😀\"\n\n"
        );
    }

    #[test]
    fn run_text_is_escaped() {
        let records = runs(&chars("a\x1B"));
        assert_eq!(records.len(), 1);
        assert!(text_of(&records).contains("\"a\\033\""));
    }

    #[test]
    fn empty_input_has_no_records() {
        assert!(runs(&[]).is_empty());
        assert!(scripts(&[]).is_empty());
        assert!(emoji(&[]).is_empty());
        assert!(codepoints(&[]).is_empty());
    }

    // ── scripts ─────────────────────────────────────────────────────────

    #[test]
    fn script_blocks_list_member_scripts() {
        let records = scripts(&chars("a.δ"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].script, Script::Latin);
        assert_eq!(records[0].codepoints[1].script, Script::Common);

        let text = text_of(&records);
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("   INDEX     CODEPOINT    TEXT  WIDTH   SCRIPT")
        );
        assert_eq!(lines.next(), Some("0-1: Latin"));
        assert_eq!(
            lines.next(),
            Some("    0000:    U+00000061   a\t∆ 1\tLatin")
        );
        assert_eq!(
            lines.next(),
            Some("    0001:    U+0000002E   .\t∆ 1\tCommon")
        );
        assert_eq!(lines.next(), Some("2-2: Greek"));
    }

    // ── emoji ───────────────────────────────────────────────────────────

    #[test]
    fn emoji_blocks_list_categories() {
        let records = emoji(&chars("x1\u{FE0F}\u{20E3}"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].presentation, PresentationStyle::Emoji);
        let categories: Vec<_> = records[1].codepoints.iter().map(|c| c.category).collect();
        assert_eq!(
            categories,
            vec![
                EmojiSegmentationCategory::KeyCapBase,
                EmojiSegmentationCategory::VS16,
                EmojiSegmentationCategory::CombiningEnclosingKeyCap,
            ]
        );
        assert!(text_of(&records).starts_with("0-0 (1): Text\n    0000:    U+00000078   x\tInvalid\n"));
    }

    // ── JSON ────────────────────────────────────────────────────────────

    #[test]
    fn json_output_is_an_array_of_records() {
        let records = runs(&chars("Hi 世界"));
        let mut out = Vec::new();
        emit(&records, OutputFormat::Json, &mut out).expect("render");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        let array = value.as_array().expect("array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["script"], "Latin");
        assert_eq!(array[0]["presentation"], "Text");
        assert_eq!(array[1]["text"], "世界");
        assert_eq!(array[1]["script"], "Han");
    }

    #[test]
    fn json_codepoint_fields() {
        let records = codepoints(&located("\t"));
        let value = serde_json::to_value(&records).expect("json");
        assert_eq!(value[0]["char"], "\t");
        assert_eq!(value[0]["codepoint"], 9);
        assert!(value[0]["width"].is_null());
    }
}
