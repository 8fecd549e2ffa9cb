//! Unicode script-range fallback classification.
//!
//! When the statistical detector cannot decide (empty or ambiguous input),
//! language is guessed from Unicode block membership alone. The table below
//! is checked in declared order and the first block containing any input
//! character wins; mixed-script text therefore resolves reproducibly.

/// Sentinel code returned when no script range matches.
pub const UNKNOWN_LANG: &str = "unknown";

// Inclusive code-point ranges per language. Order matters: it is part of the
// classifier's contract, not an implementation detail.
const SCRIPT_RANGES: [(&str, char, char); 8] = [
    ("hi", '\u{0900}', '\u{097F}'), // Devanagari
    ("ta", '\u{0B80}', '\u{0BFF}'), // Tamil
    ("te", '\u{0C00}', '\u{0C7F}'), // Telugu
    ("kn", '\u{0C80}', '\u{0CFF}'), // Kannada
    ("bn", '\u{0980}', '\u{09FF}'), // Bengali
    ("ja", '\u{3040}', '\u{30FF}'), // Hiragana + Katakana
    ("ko", '\u{AC00}', '\u{D7AF}'), // Hangul syllables
    ("zh", '\u{4E00}', '\u{9FFF}'), // CJK Unified Ideographs
];

/// Classify text by Unicode script membership.
///
/// Returns the language code of the first table entry whose range contains
/// any character of `text`, or [`UNKNOWN_LANG`] when nothing matches.
///
/// # Examples
///
/// ```
/// use outline_oxide::lang::script::classify_by_script;
///
/// assert_eq!(classify_by_script("अध्याय"), "hi");
/// assert_eq!(classify_by_script("한국어"), "ko");
/// assert_eq!(classify_by_script("plain latin"), "unknown");
/// ```
pub fn classify_by_script(text: &str) -> &'static str {
    for (code, start, end) in SCRIPT_RANGES {
        if text.chars().any(|c| c >= start && c <= end) {
            return code;
        }
    }
    UNKNOWN_LANG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari() {
        assert_eq!(classify_by_script("\u{0905}\u{0927}\u{094D}"), "hi");
    }

    #[test]
    fn test_tamil() {
        assert_eq!(classify_by_script("\u{0B85}\u{0BA4}\u{0BCD}"), "ta");
    }

    #[test]
    fn test_telugu() {
        assert_eq!(classify_by_script("\u{0C05}\u{0C27}"), "te");
    }

    #[test]
    fn test_kannada() {
        assert_eq!(classify_by_script("\u{0C85}\u{0CA7}"), "kn");
    }

    #[test]
    fn test_bengali() {
        assert_eq!(classify_by_script("\u{0985}\u{09A7}"), "bn");
    }

    #[test]
    fn test_japanese_kana() {
        assert_eq!(classify_by_script("ひらがな"), "ja");
        assert_eq!(classify_by_script("カタカナ"), "ja");
    }

    #[test]
    fn test_hangul() {
        assert_eq!(classify_by_script("안녕하세요"), "ko");
    }

    #[test]
    fn test_cjk_ideographs() {
        assert_eq!(classify_by_script("中文文本"), "zh");
    }

    #[test]
    fn test_latin_is_unknown() {
        assert_eq!(classify_by_script("Hello world"), UNKNOWN_LANG);
        assert_eq!(classify_by_script(""), UNKNOWN_LANG);
        assert_eq!(classify_by_script("123 !?"), UNKNOWN_LANG);
    }

    #[test]
    fn test_mixed_script_first_table_entry_wins() {
        // Devanagari comes before CJK in the table, regardless of character
        // order in the input.
        assert_eq!(classify_by_script("中文 \u{0905}"), "hi");
    }

    #[test]
    fn test_range_boundaries_inclusive() {
        assert_eq!(classify_by_script("\u{0900}"), "hi");
        assert_eq!(classify_by_script("\u{097F}"), "hi");
    }
}
