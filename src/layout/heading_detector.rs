//! Heading detection over styled text lines.
//!
//! This module scores a line's "headingness" from its representative span's
//! typographic attributes and maps the score onto a discrete heading level.
//! The heuristic is additive and deterministic: independent signals (font
//! size, weight, page position, leading numbering) each contribute at most
//! once, the sum is clamped to 1.0, and a strict threshold ladder assigns
//! H1/H2/H3 or rejects the line.

use crate::layout::text_line::{Line, TextSpan};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heading hierarchy level, in decreasing structural importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading (chapter/title)
    H1,
    /// Section heading
    H2,
    /// Subsection heading
    H3,
}

impl HeadingLevel {
    /// Get the hierarchy level as a number (0 = H1, 1 = H2, 2 = H3).
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::layout::HeadingLevel;
    ///
    /// assert_eq!(HeadingLevel::H1.hierarchy_level(), 0);
    /// assert_eq!(HeadingLevel::H3.hierarchy_level(), 2);
    /// ```
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

// Scoring weights. These are design constants of the heuristic, not runtime
// configuration: the level thresholds below are calibrated against them.
const SIZE_TIERS: [(f32, f64); 4] = [(24.0, 0.4), (20.0, 0.3), (16.0, 0.2), (12.0, 0.1)];
const BOLD_BONUS: f64 = 0.3;
const TOP_REGION_BONUS: f64 = 0.2;
const NUMBERING_BONUS: f64 = 0.1;

/// Vertical offset below which a line counts as "near the page top".
const TOP_REGION_CUTOFF: f32 = 200.0;

// Level thresholds, evaluated highest-first.
const H1_MIN_CONFIDENCE: f64 = 0.8;
const H2_MIN_CONFIDENCE: f64 = 0.6;
const H3_MIN_CONFIDENCE: f64 = 0.4;

lazy_static! {
    // One or more dot-separated integers, optionally closed by '.' or ')',
    // then whitespace: "2.3 Title", "1) Title", "10. Title".
    static ref NUMBERED_HEADING: Regex = Regex::new(r"^\d+(\.\d+)*[.)]?\s+").unwrap();
}

/// Check whether text starts with a numeric outline marker.
///
/// Anchored at the string start: "1.2.3 Title" and "4) Title" match,
/// "Title 1.2" does not.
///
/// # Examples
///
/// ```
/// use outline_oxide::layout::heading_detector::is_numbered_heading;
///
/// assert!(is_numbered_heading("2.3 Methods"));
/// assert!(is_numbered_heading("1) Overview"));
/// assert!(!is_numbered_heading("Methods 2.3"));
/// ```
pub fn is_numbered_heading(text: &str) -> bool {
    NUMBERED_HEADING.is_match(text)
}

/// Compute the heading confidence for a line.
///
/// `span` is the line's representative span (supplies font size, weight, and
/// vertical position); `text` is the line's joined text. Each signal
/// contributes at most once:
///
/// - font size tier: ≥24pt +0.4, ≥20pt +0.3, ≥16pt +0.2, ≥12pt +0.1
/// - bold weight: +0.3
/// - above the top-of-page cutoff: +0.2
/// - leading numeric outline marker: +0.1
///
/// The result is clamped to \[0, 1\] and rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use outline_oxide::geometry::Rect;
/// use outline_oxide::layout::heading_detector::confidence;
/// use outline_oxide::layout::{StyleFlags, TextSpan};
///
/// let span = TextSpan::new(
///     "1. Introduction",
///     "Helvetica-Bold",
///     26.0,
///     StyleFlags::BOLD,
///     Rect::new(72.0, 50.0, 300.0, 26.0),
/// );
/// assert_eq!(confidence(&span, "1. Introduction"), 1.0);
/// ```
pub fn confidence(span: &TextSpan, text: &str) -> f64 {
    let mut score = 0.0;

    for (min_size, bonus) in SIZE_TIERS {
        if span.font_size >= min_size {
            score += bonus;
            break;
        }
    }

    if span.is_bold() {
        score += BOLD_BONUS;
    }
    if span.y_offset() < TOP_REGION_CUTOFF {
        score += TOP_REGION_BONUS;
    }
    if is_numbered_heading(text) {
        score += NUMBERING_BONUS;
    }

    round_confidence(score.min(1.0))
}

/// Map a confidence score onto a heading level.
///
/// Strict threshold ladder, highest first: ≥0.8 → H1, ≥0.6 → H2, ≥0.4 → H3,
/// anything lower is not a heading.
///
/// # Examples
///
/// ```
/// use outline_oxide::layout::heading_detector::assign_level;
/// use outline_oxide::layout::HeadingLevel;
///
/// assert_eq!(assign_level(0.85), Some(HeadingLevel::H1));
/// assert_eq!(assign_level(0.6), Some(HeadingLevel::H2));
/// assert_eq!(assign_level(0.45), Some(HeadingLevel::H3));
/// assert_eq!(assign_level(0.1), None);
/// ```
pub fn assign_level(confidence: f64) -> Option<HeadingLevel> {
    if confidence >= H1_MIN_CONFIDENCE {
        Some(HeadingLevel::H1)
    } else if confidence >= H2_MIN_CONFIDENCE {
        Some(HeadingLevel::H2)
    } else if confidence >= H3_MIN_CONFIDENCE {
        Some(HeadingLevel::H3)
    } else {
        None
    }
}

/// Score a whole line: confidence plus assigned level, if any.
///
/// Returns `None` for lines whose confidence falls below every level
/// threshold. Length filtering happens upstream (`Line::is_candidate`);
/// this function assumes the line is worth scoring.
pub fn classify_line(line: &Line) -> Option<(f64, HeadingLevel)> {
    let text = line.text();
    let score = confidence(line.representative(), &text);
    assign_level(score).map(|level| (score, level))
}

fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::text_line::StyleFlags;

    fn mock_span(size: f32, bold: bool, y: f32) -> TextSpan {
        let flags = if bold {
            StyleFlags::BOLD
        } else {
            StyleFlags::empty()
        };
        TextSpan::new(
            "placeholder",
            "Times",
            size,
            flags,
            Rect::new(72.0, y, 300.0, size),
        )
    }

    #[test]
    fn test_numbered_heading_patterns() {
        assert!(is_numbered_heading("1 Introduction"));
        assert!(is_numbered_heading("1. Introduction"));
        assert!(is_numbered_heading("2.3 Methods"));
        assert!(is_numbered_heading("1.2.3 Details"));
        assert!(is_numbered_heading("4) Results"));
        assert!(is_numbered_heading("10. Conclusion"));

        assert!(!is_numbered_heading("Introduction 1.2"));
        assert!(!is_numbered_heading(".1 Leading dot"));
        assert!(!is_numbered_heading("(1) Parenthesized"));
        assert!(!is_numbered_heading("1.Introduction")); // no whitespace
        assert!(!is_numbered_heading(""));
    }

    #[test]
    fn test_size_tiers_first_match_only() {
        assert_eq!(confidence(&mock_span(26.0, false, 500.0), "x y z"), 0.4);
        assert_eq!(confidence(&mock_span(24.0, false, 500.0), "x y z"), 0.4);
        assert_eq!(confidence(&mock_span(20.0, false, 500.0), "x y z"), 0.3);
        assert_eq!(confidence(&mock_span(16.0, false, 500.0), "x y z"), 0.2);
        assert_eq!(confidence(&mock_span(12.0, false, 500.0), "x y z"), 0.1);
        assert_eq!(confidence(&mock_span(11.0, false, 500.0), "x y z"), 0.0);
    }

    #[test]
    fn test_bold_contribution() {
        assert_eq!(confidence(&mock_span(11.0, true, 500.0), "x y z"), 0.3);
    }

    #[test]
    fn test_bold_font_name_contribution() {
        let mut span = mock_span(11.0, false, 500.0);
        span.font_name = "Times-Bold".to_string();
        assert_eq!(confidence(&span, "x y z"), 0.3);
    }

    #[test]
    fn test_position_contribution() {
        assert_eq!(confidence(&mock_span(11.0, false, 199.9), "x y z"), 0.2);
        assert_eq!(confidence(&mock_span(11.0, false, 200.0), "x y z"), 0.0);
    }

    #[test]
    fn test_numbering_contribution() {
        assert_eq!(confidence(&mock_span(11.0, false, 500.0), "3.1 Title"), 0.1);
    }

    #[test]
    fn test_full_house_clamps_to_one() {
        // 0.4 + 0.3 + 0.2 + 0.1, clamped and rounded.
        let span = mock_span(26.0, true, 50.0);
        assert_eq!(confidence(&span, "1. Introduction"), 1.0);
    }

    #[test]
    fn test_body_text_scores_low() {
        let span = mock_span(14.0, false, 500.0);
        assert_eq!(confidence(&span, "Some paragraph text"), 0.1);
    }

    #[test]
    fn test_level_ladder() {
        assert_eq!(assign_level(1.0), Some(HeadingLevel::H1));
        assert_eq!(assign_level(0.8), Some(HeadingLevel::H1));
        assert_eq!(assign_level(0.79), Some(HeadingLevel::H2));
        assert_eq!(assign_level(0.6), Some(HeadingLevel::H2));
        assert_eq!(assign_level(0.59), Some(HeadingLevel::H3));
        assert_eq!(assign_level(0.4), Some(HeadingLevel::H3));
        assert_eq!(assign_level(0.39), None);
        assert_eq!(assign_level(0.0), None);
    }

    #[test]
    fn test_confidence_is_rounded_to_two_decimals() {
        // 0.2 + 0.1 accumulates floating point noise before rounding.
        let span = mock_span(16.0, false, 500.0);
        let score = confidence(&span, "1.1 Scope");
        assert_eq!(score, 0.3);
    }

    #[test]
    fn test_display() {
        assert_eq!(HeadingLevel::H1.to_string(), "H1");
        assert_eq!(HeadingLevel::H2.to_string(), "H2");
        assert_eq!(HeadingLevel::H3.to_string(), "H3");
    }
}
