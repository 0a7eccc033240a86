//! Unicode `Script` property via block-range lookup.

use std::fmt;

// ---------------------------------------------------------------------------
// Script enum
// ---------------------------------------------------------------------------

/// Unicode script of a codepoint.
///
/// Covers the scripts commonly met in terminal and UI text. Codepoints
/// outside the table report [`Script::Unknown`].
///
/// `Common` is script-neutral (spaces, digits, punctuation, most symbols and
/// emoji) and `Inherited` takes the script of its base (combining marks,
/// variation selectors, ZWJ/ZWNJ). Segmenters fold both into the surrounding
/// run.
///
/// [`Script::Invalid`] never comes out of a lookup; it is the value of an
/// empty segmentation range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Script {
    /// No script; placeholder for "nothing segmented yet".
    #[default]
    Invalid = 0,
    /// Not covered by the lookup table.
    Unknown,
    /// Script-neutral: spaces, digits, punctuation, symbols.
    Common,
    /// Combining marks that take the base character's script.
    Inherited,
    Latin,
    Greek,
    Cyrillic,
    Armenian,
    Hebrew,
    Arabic,
    Syriac,
    /// Thaana script (Maldivian).
    Thaana,
    Nko,
    Samaritan,
    Mandaic,
    /// Devanagari script (Hindi, Sanskrit, Marathi, etc.).
    Devanagari,
    Bengali,
    /// Gurmukhi script (Punjabi).
    Gurmukhi,
    Gujarati,
    Oriya,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Sinhala,
    Thai,
    Lao,
    Tibetan,
    /// Myanmar script (Burmese).
    Myanmar,
    Georgian,
    /// Hangul script (Korean).
    Hangul,
    Ethiopic,
    Cherokee,
    CanadianAboriginal,
    Ogham,
    Runic,
    Tagalog,
    Khmer,
    Mongolian,
    Coptic,
    Tifinagh,
    Braille,
    Yi,
    /// CJK ideographs (Chinese, Japanese Kanji, Korean Hanja).
    Han,
    Hiragana,
    Katakana,
    /// Bopomofo (Chinese phonetic).
    Bopomofo,
}

impl Script {
    /// Whether this script should be resolved from context.
    #[inline]
    pub const fn is_common_or_inherited(self) -> bool {
        matches!(self, Script::Common | Script::Inherited)
    }

    /// Whether this script is typically written right-to-left.
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(
            self,
            Script::Arabic
                | Script::Hebrew
                | Script::Syriac
                | Script::Thaana
                | Script::Nko
                | Script::Samaritan
                | Script::Mandaic
        )
    }

    /// Unicode long name (`Scripts.txt` spelling).
    pub const fn as_str(self) -> &'static str {
        match self {
            Script::Invalid => "Invalid",
            Script::Unknown => "Unknown",
            Script::Common => "Common",
            Script::Inherited => "Inherited",
            Script::Latin => "Latin",
            Script::Greek => "Greek",
            Script::Cyrillic => "Cyrillic",
            Script::Armenian => "Armenian",
            Script::Hebrew => "Hebrew",
            Script::Arabic => "Arabic",
            Script::Syriac => "Syriac",
            Script::Thaana => "Thaana",
            Script::Nko => "Nko",
            Script::Samaritan => "Samaritan",
            Script::Mandaic => "Mandaic",
            Script::Devanagari => "Devanagari",
            Script::Bengali => "Bengali",
            Script::Gurmukhi => "Gurmukhi",
            Script::Gujarati => "Gujarati",
            Script::Oriya => "Oriya",
            Script::Tamil => "Tamil",
            Script::Telugu => "Telugu",
            Script::Kannada => "Kannada",
            Script::Malayalam => "Malayalam",
            Script::Sinhala => "Sinhala",
            Script::Thai => "Thai",
            Script::Lao => "Lao",
            Script::Tibetan => "Tibetan",
            Script::Myanmar => "Myanmar",
            Script::Georgian => "Georgian",
            Script::Hangul => "Hangul",
            Script::Ethiopic => "Ethiopic",
            Script::Cherokee => "Cherokee",
            Script::CanadianAboriginal => "Canadian_Aboriginal",
            Script::Ogham => "Ogham",
            Script::Runic => "Runic",
            Script::Tagalog => "Tagalog",
            Script::Khmer => "Khmer",
            Script::Mongolian => "Mongolian",
            Script::Coptic => "Coptic",
            Script::Tifinagh => "Tifinagh",
            Script::Braille => "Braille",
            Script::Yi => "Yi",
            Script::Han => "Han",
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
            Script::Bopomofo => "Bopomofo",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Character-to-script detection
// ---------------------------------------------------------------------------

/// Classify a character's Unicode script via block-range lookup.
///
/// Blocks map to their script, with the Common and Inherited exceptions that
/// matter for segmentation carved out first (punctuation inside script
/// blocks, combining marks, CJK iteration marks). Characters outside
/// recognized ranges return [`Script::Unknown`].
///
/// ```
/// use glyphrun_ucd::{Script, script};
///
/// assert_eq!(script('A'), Script::Latin);
/// assert_eq!(script(' '), Script::Common);
/// assert_eq!(script('\u{0301}'), Script::Inherited);
/// assert_eq!(script('百'), Script::Han);
/// ```
pub fn script(c: char) -> Script {
    let cp = u32::from(c);
    match cp {
        // Basic Latin and Latin-1: letters are Latin, the rest Common.
        0x0000..=0x0040 => Script::Common,
        0x0041..=0x005A => Script::Latin,
        0x005B..=0x0060 => Script::Common,
        0x0061..=0x007A => Script::Latin,
        0x007B..=0x00A9 => Script::Common,
        0x00AA => Script::Latin, // ª
        0x00AB..=0x00B9 => Script::Common,
        0x00BA => Script::Latin, // º
        0x00BB..=0x00BF => Script::Common,
        0x00C0..=0x00D6 => Script::Latin,
        0x00D7 => Script::Common, // ×
        0x00D8..=0x00F6 => Script::Latin,
        0x00F7 => Script::Common, // ÷
        0x00F8..=0x02B8 => Script::Latin, // Latin Extended-A/B, IPA, modifier letters
        0x02B9..=0x02DF => Script::Common,
        0x02E0..=0x02E4 => Script::Latin,
        0x02E5..=0x02FF => Script::Common,
        0x0300..=0x036F => Script::Inherited, // Combining Diacritical Marks

        // Greek and Coptic
        0x0374 | 0x037E | 0x0385 | 0x0387 => Script::Common,
        0x03E2..=0x03EF => Script::Coptic,
        0x0370..=0x03FF => Script::Greek,

        // Cyrillic
        0x0485..=0x0486 => Script::Inherited,
        0x0400..=0x052F => Script::Cyrillic,

        0x0531..=0x058F => Script::Armenian,
        0x0591..=0x05FF => Script::Hebrew,

        // Arabic, with shared punctuation and harakat carved out.
        0x0605 | 0x060C | 0x061B | 0x061F | 0x0640 | 0x06DD => Script::Common,
        0x064B..=0x0655 | 0x0670 => Script::Inherited,
        0x0600..=0x06FF => Script::Arabic,

        0x0700..=0x074F => Script::Syriac,
        0x0750..=0x077F => Script::Arabic, // Arabic Supplement
        0x0780..=0x07BF => Script::Thaana,
        0x07C0..=0x07FF => Script::Nko,
        0x0800..=0x083F => Script::Samaritan,
        0x0840..=0x085F => Script::Mandaic,
        0x0860..=0x086F => Script::Syriac, // Syriac Supplement
        0x08E2 => Script::Common,
        0x0870..=0x08FF => Script::Arabic, // Arabic Extended-B/A

        // Devanagari
        0x0951..=0x0954 => Script::Inherited,
        0x0964..=0x0965 => Script::Common, // danda, double danda
        0x0900..=0x097F => Script::Devanagari,

        0x0980..=0x09FF => Script::Bengali,
        0x0A00..=0x0A7F => Script::Gurmukhi,
        0x0A80..=0x0AFF => Script::Gujarati,
        0x0B00..=0x0B7F => Script::Oriya,
        0x0B80..=0x0BFF => Script::Tamil,
        0x0C00..=0x0C7F => Script::Telugu,
        0x0C80..=0x0CFF => Script::Kannada,
        0x0D00..=0x0D7F => Script::Malayalam,
        0x0D80..=0x0DFF => Script::Sinhala,
        0x0E3F => Script::Common, // ฿
        0x0E00..=0x0E7F => Script::Thai,
        0x0E80..=0x0EFF => Script::Lao,
        0x0FD5..=0x0FD8 => Script::Common,
        0x0F00..=0x0FFF => Script::Tibetan,
        0x1000..=0x109F => Script::Myanmar,
        0x10FB => Script::Common,
        0x10A0..=0x10FF => Script::Georgian,
        0x1100..=0x11FF => Script::Hangul, // Hangul Jamo
        0x1200..=0x139F => Script::Ethiopic,
        0x13A0..=0x13FF => Script::Cherokee,
        0x1400..=0x167F => Script::CanadianAboriginal,
        0x1680..=0x169F => Script::Ogham,
        0x16EB..=0x16ED => Script::Common, // runic punctuation
        0x16A0..=0x16FF => Script::Runic,
        0x1700..=0x171F => Script::Tagalog,
        0x1780..=0x17FF => Script::Khmer,
        0x1802..=0x1803 | 0x1805 => Script::Common,
        0x1800..=0x18AF => Script::Mongolian,
        0x18B0..=0x18FF => Script::CanadianAboriginal,
        0x19E0..=0x19FF => Script::Khmer, // Khmer Symbols
        0x1AB0..=0x1AFF => Script::Inherited, // Combining Diacritical Marks Extended
        0x1C80..=0x1C8F => Script::Cyrillic, // Cyrillic Extended-C
        0x1C90..=0x1CBF => Script::Georgian, // Georgian Extended
        0x1CD0..=0x1CFF => Script::Inherited, // Vedic Extensions

        // Phonetic Extensions: mostly Latin with Greek letters interleaved.
        0x1D26..=0x1D2A | 0x1D5D..=0x1D61 | 0x1D66..=0x1D6A | 0x1DBF => Script::Greek,
        0x1D2B | 0x1D78 => Script::Cyrillic,
        0x1D00..=0x1DBE => Script::Latin,
        0x1DC0..=0x1DFF => Script::Inherited, // Combining Diacritical Marks Supplement
        0x1E00..=0x1EFF => Script::Latin, // Latin Extended Additional
        0x1F00..=0x1FFF => Script::Greek, // Greek Extended

        // General Punctuation. ZWNJ and ZWJ join whatever surrounds them.
        0x200C..=0x200D => Script::Inherited,
        0x2000..=0x206F => Script::Common,
        0x2071 | 0x207F | 0x2090..=0x209C => Script::Latin,
        0x2070..=0x209F => Script::Common, // Superscripts and Subscripts
        0x20A0..=0x20CF => Script::Common, // Currency Symbols
        0x20D0..=0x20FF => Script::Inherited, // Combining Marks for Symbols
        0x2126 => Script::Greek, // Ω
        0x212A..=0x212B | 0x2132 | 0x214E => Script::Latin,
        0x2100..=0x214F => Script::Common, // Letterlike Symbols
        0x2160..=0x2188 => Script::Latin, // Roman numerals
        0x2150..=0x218F => Script::Common, // Number Forms
        0x2800..=0x28FF => Script::Braille,
        0x2190..=0x2BFF => Script::Common, // Arrows through Misc Symbols and Arrows
        0x2C60..=0x2C7F => Script::Latin, // Latin Extended-C
        0x2C80..=0x2CFF => Script::Coptic,
        0x2D00..=0x2D2F => Script::Georgian, // Georgian Supplement
        0x2D30..=0x2D7F => Script::Tifinagh,
        0x2D80..=0x2DDF => Script::Ethiopic, // Ethiopic Extended
        0x2DE0..=0x2DFF => Script::Cyrillic, // Cyrillic Extended-A
        0x2E00..=0x2E7F => Script::Common, // Supplemental Punctuation
        0x2E80..=0x2FDF => Script::Han, // CJK and Kangxi radicals
        0x2FF0..=0x2FFF => Script::Common, // Ideographic Description

        // CJK Symbols and Punctuation: Common, except iteration marks and
        // numerals belonging to Han, and tone marks.
        0x3005 | 0x3007 | 0x3021..=0x3029 | 0x3038..=0x303B => Script::Han,
        0x302A..=0x302D => Script::Inherited,
        0x302E..=0x302F => Script::Hangul,
        0x3000..=0x303F => Script::Common,

        0x3099..=0x309A => Script::Inherited, // combining (semi-)voiced marks
        0x309B..=0x309C => Script::Common,
        0x3040..=0x309F => Script::Hiragana,
        0x30A0 | 0x30FB..=0x30FC => Script::Common,
        0x30A1..=0x30FF => Script::Katakana,
        0x3100..=0x312F => Script::Bopomofo,
        0x3130..=0x318F => Script::Hangul, // Hangul Compatibility Jamo
        0x3190..=0x319F => Script::Common, // Kanbun
        0x31A0..=0x31BF => Script::Bopomofo, // Bopomofo Extended
        0x31C0..=0x31EF => Script::Common, // CJK Strokes
        0x31F0..=0x31FF => Script::Katakana, // Katakana Phonetic Extensions
        0x3200..=0x321E | 0x3260..=0x327E => Script::Hangul,
        0x32D0..=0x32FE | 0x3300..=0x3357 => Script::Katakana,
        0x3200..=0x33FF => Script::Common, // Enclosed CJK, CJK Compatibility
        0x3400..=0x4DBF => Script::Han, // Extension A
        0x4DC0..=0x4DFF => Script::Common, // Yijing Hexagram Symbols
        0x4E00..=0x9FFF => Script::Han,
        0xA000..=0xA4CF => Script::Yi,
        0xA640..=0xA69F => Script::Cyrillic, // Cyrillic Extended-B
        0xA720..=0xA721 | 0xA788..=0xA78A => Script::Common,
        0xA722..=0xA7FF => Script::Latin, // Latin Extended-D
        0xA8E0..=0xA8FF => Script::Devanagari, // Devanagari Extended
        0xA960..=0xA97F => Script::Hangul, // Hangul Jamo Extended-A
        0xAA60..=0xAA7F => Script::Myanmar, // Myanmar Extended-A
        0xAB00..=0xAB2F => Script::Ethiopic, // Ethiopic Extended-A
        0xAB5B => Script::Common,
        0xAB65 => Script::Greek,
        0xAB30..=0xAB6F => Script::Latin, // Latin Extended-E
        0xAB70..=0xABBF => Script::Cherokee, // Cherokee Supplement
        0xAC00..=0xD7FF => Script::Hangul, // Syllables, Jamo Extended-B
        0xF900..=0xFAFF => Script::Han, // CJK Compatibility Ideographs

        // Alphabetic Presentation Forms
        0xFB00..=0xFB06 => Script::Latin,
        0xFB13..=0xFB17 => Script::Armenian,
        0xFB1D..=0xFB4F => Script::Hebrew,
        0xFD3E..=0xFD3F => Script::Common, // ornate parentheses
        0xFB50..=0xFDFF => Script::Arabic, // Arabic Presentation Forms-A

        0xFE00..=0xFE0F => Script::Inherited, // Variation Selectors
        0xFE10..=0xFE1F => Script::Common, // Vertical Forms
        0xFE20..=0xFE2F => Script::Inherited, // Combining Half Marks
        0xFE30..=0xFE6F => Script::Common, // CJK Compatibility Forms, Small Forms
        0xFE70..=0xFEFE => Script::Arabic, // Arabic Presentation Forms-B
        0xFEFF => Script::Common, // BOM

        // Halfwidth and Fullwidth Forms
        0xFF21..=0xFF3A | 0xFF41..=0xFF5A => Script::Latin,
        0xFF66..=0xFF6F | 0xFF71..=0xFF9D => Script::Katakana,
        0xFFA0..=0xFFDC => Script::Hangul,
        0xFF00..=0xFFFF => Script::Common,

        0x1B000 => Script::Katakana,
        0x1B001..=0x1B11F => Script::Hiragana, // Kana Supplement / Extended-A
        0x1D000..=0x1D24F => Script::Common, // Musical Symbols
        0x1D400..=0x1D7FF => Script::Common, // Mathematical Alphanumeric Symbols
        0x1F200 => Script::Hiragana, // 🈀
        0x1F000..=0x1FBFF => Script::Common, // Emoji, symbols, pictographs

        // CJK extensions B through H
        0x20000..=0x2A6DF => Script::Han,
        0x2A700..=0x2EBEF => Script::Han,
        0x2F800..=0x2FA1F => Script::Han, // Compatibility Supplement
        0x30000..=0x323AF => Script::Han,

        // Tags (subdivision flag sequences) behave like emoji.
        0xE0001 | 0xE0020..=0xE007F => Script::Common,
        0xE0100..=0xE01EF => Script::Inherited, // Variation Selectors Supplement

        _ => Script::Unknown,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
