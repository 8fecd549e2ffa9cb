//! Text span and line representation.
//!
//! This module defines the typed input the outline pipeline consumes: styled
//! runs of text (`TextSpan`) grouped into visual lines (`Line`). Spans are
//! produced by an upstream text-extraction collaborator; this crate never
//! parses the document format itself.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Style flags carried by a text span.
    ///
    /// The bit layout follows the convention used by common text extractors,
    /// where each typographic property gets its own bit. Heading scoring only
    /// inspects [`StyleFlags::BOLD`]; the remaining bits are carried through
    /// untouched so callers can round-trip extractor output.
    ///
    /// Serde support comes from bitflags' own `serde` feature (text format,
    /// e.g. `"BOLD"` on the wire).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct StyleFlags: u32 {
        /// Superscript or subscript placement
        const SUPERSCRIPT = 1 << 0;
        /// Italic face
        const ITALIC = 1 << 1;
        /// Serifed face
        const SERIF = 1 << 2;
        /// Monospaced face
        const MONOSPACE = 1 << 3;
        /// Bold weight
        const BOLD = 1 << 4;
    }
}

/// A run of text sharing one font, size, style, and position on a page.
///
/// Spans are immutable and scoped to a single page. The `bbox` y-origin is
/// the page top, so `bbox.top()` gives the span's vertical offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content of the span
    pub text: String,
    /// Font name/family (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Style flags (bold, italic, ...)
    pub flags: StyleFlags,
    /// Bounding box on the page
    pub bbox: Rect,
}

impl TextSpan {
    /// Create a new span.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    /// use outline_oxide::layout::{StyleFlags, TextSpan};
    ///
    /// let span = TextSpan::new(
    ///     "Introduction",
    ///     "Helvetica-Bold",
    ///     24.0,
    ///     StyleFlags::BOLD,
    ///     Rect::new(72.0, 50.0, 200.0, 24.0),
    /// );
    /// assert!(span.is_bold());
    /// ```
    pub fn new(
        text: impl Into<String>,
        font_name: impl Into<String>,
        font_size: f32,
        flags: StyleFlags,
        bbox: Rect,
    ) -> Self {
        Self {
            text: text.into(),
            font_name: font_name.into(),
            font_size,
            flags,
            bbox,
        }
    }

    /// Whether this span renders bold.
    ///
    /// True when the style flags carry the bold bit, or when the font name
    /// embeds a `"Bold"` weight marker (common for fonts that encode weight
    /// in the PostScript name rather than in descriptor flags).
    pub fn is_bold(&self) -> bool {
        self.flags.contains(StyleFlags::BOLD) || self.font_name.contains("Bold")
    }

    /// Vertical offset of the span from the top of the page.
    pub fn y_offset(&self) -> f32 {
        self.bbox.top()
    }
}

/// One visual line: an ordered, non-empty sequence of spans.
///
/// The first span is the line's representative: it supplies the font, size,
/// style, and position used for heading scoring. The line's text is the
/// concatenation of all span texts with single-space separators, trimmed.
///
/// Construction goes through [`Line::from_spans`] so the non-empty invariant
/// holds for every value of this type.
#[derive(Debug, Clone)]
pub struct Line {
    spans: Vec<TextSpan>,
}

impl Line {
    /// Minimum joined-text length for a line to be scored at all.
    ///
    /// Shorter lines are page furniture (bullets, page numbers, stray marks)
    /// and are filtered out before they reach the scorer.
    pub const MIN_TEXT_LEN: usize = 3;

    /// Build a line from its spans.
    ///
    /// Returns `None` for an empty span list; every constructed `Line` has a
    /// representative span.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    /// use outline_oxide::layout::{Line, StyleFlags, TextSpan};
    ///
    /// let spans = vec![
    ///     TextSpan::new("2.3", "Times", 16.0, StyleFlags::BOLD, Rect::new(72.0, 120.0, 30.0, 16.0)),
    ///     TextSpan::new("Methods", "Times", 16.0, StyleFlags::BOLD, Rect::new(110.0, 120.0, 90.0, 16.0)),
    /// ];
    /// let line = Line::from_spans(spans).unwrap();
    /// assert_eq!(line.text(), "2.3 Methods");
    /// ```
    pub fn from_spans(spans: Vec<TextSpan>) -> Option<Self> {
        if spans.is_empty() {
            return None;
        }
        Some(Self { spans })
    }

    /// The spans making up this line, in visual order.
    pub fn spans(&self) -> &[TextSpan] {
        &self.spans
    }

    /// The representative span (first span), which supplies the style and
    /// position attributes for scoring.
    pub fn representative(&self) -> &TextSpan {
        &self.spans[0]
    }

    /// Joined text: all span texts concatenated with single spaces, trimmed.
    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    /// Whether this line is long enough to be a heading candidate.
    ///
    /// Counts characters of the joined text, so multi-byte scripts are not
    /// penalized by their UTF-8 encoding length.
    pub fn is_candidate(&self) -> bool {
        self.text().chars().count() >= Self::MIN_TEXT_LEN
    }

    /// Bounding box of the whole line (union of span boxes).
    pub fn bbox(&self) -> Rect {
        self.spans
            .iter()
            .skip(1)
            .fold(self.spans[0].bbox, |acc, s| acc.union(&s.bbox))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_span(text: &str, x: f32) -> TextSpan {
        TextSpan::new(
            text,
            "Times",
            12.0,
            StyleFlags::empty(),
            Rect::new(x, 100.0, text.len() as f32 * 7.0, 12.0),
        )
    }

    #[test]
    fn test_line_requires_spans() {
        assert!(Line::from_spans(vec![]).is_none());
        assert!(Line::from_spans(vec![mock_span("Hello", 0.0)]).is_some());
    }

    #[test]
    fn test_line_text_joins_with_spaces() {
        let line = Line::from_spans(vec![
            mock_span("Hello", 0.0),
            mock_span("world", 40.0),
        ])
        .unwrap();
        assert_eq!(line.text(), "Hello world");
    }

    #[test]
    fn test_line_text_trims() {
        let line = Line::from_spans(vec![mock_span("  Hello  ", 0.0)]).unwrap();
        assert_eq!(line.text(), "Hello");
    }

    #[test]
    fn test_representative_is_first_span() {
        let mut bold = mock_span("Bold", 0.0);
        bold.flags = StyleFlags::BOLD;
        let line = Line::from_spans(vec![bold, mock_span("rest", 40.0)]).unwrap();
        assert!(line.representative().is_bold());
    }

    #[test]
    fn test_candidate_length_filter() {
        let short = Line::from_spans(vec![mock_span("ab", 0.0)]).unwrap();
        assert!(!short.is_candidate());

        let exact = Line::from_spans(vec![mock_span("abc", 0.0)]).unwrap();
        assert!(exact.is_candidate());
    }

    #[test]
    fn test_candidate_counts_chars_not_bytes() {
        // Three Devanagari characters: 9 bytes, 3 chars.
        let line = Line::from_spans(vec![mock_span("\u{0905}\u{0906}\u{0907}", 0.0)]).unwrap();
        assert!(line.is_candidate());
    }

    #[test]
    fn test_bold_from_flags() {
        let mut span = mock_span("Heading", 0.0);
        span.flags = StyleFlags::BOLD | StyleFlags::SERIF;
        assert!(span.is_bold());
    }

    #[test]
    fn test_bold_from_font_name() {
        let mut span = mock_span("Heading", 0.0);
        span.font_name = "Helvetica-Bold".to_string();
        assert!(span.is_bold());
    }

    #[test]
    fn test_not_bold() {
        let span = mock_span("body text", 0.0);
        assert!(!span.is_bold());
    }

    #[test]
    fn test_line_bbox_union() {
        let line = Line::from_spans(vec![mock_span("Hello", 0.0), mock_span("world", 50.0)]).unwrap();
        let bbox = line.bbox();
        assert_eq!(bbox.left(), 0.0);
        assert_eq!(bbox.right(), 85.0);
    }
}
