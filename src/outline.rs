//! Document outline construction.
//!
//! Consumes scored heading candidates in document order and assembles the
//! nested H1→H2→H3 outline. The builder walks pages line by line, keeps the
//! lines the heading detector accepts, tags each with a language guess, and
//! finally restructures the flat sequence into a tree with a single
//! two-cursor pass.

use crate::lang::LanguageIdentifier;
use crate::layout::heading_detector::{classify_line, HeadingLevel};
use crate::layout::text_line::Line;
use serde::Serialize;

/// A heading accepted into the outline.
///
/// Field names are the wire contract: serialized output uses exactly these
/// names (`level`, `text`, `page`, `confidence`, `font`, `size`, `lang`,
/// `lang_name`, `subsections`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingCandidate {
    /// Assigned heading level
    pub level: HeadingLevel,
    /// The heading text (joined, trimmed line text)
    pub text: String,
    /// 1-based page number the heading appears on
    pub page: u32,
    /// Heading confidence in \[0, 1\], rounded to 2 decimals
    pub confidence: f64,
    /// Font name of the line's representative span
    pub font: String,
    /// Font size of the line's representative span, in points
    pub size: f32,
    /// Detected language code
    pub lang: String,
    /// Detected language display name
    pub lang_name: String,
    /// Child headings, populated during restructuring
    pub subsections: Vec<HeadingCandidate>,
}

/// The result of outline extraction for one document: an externally supplied
/// title plus the nested heading tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentOutline {
    /// Document title (derived by the caller, e.g. from the file name)
    pub title: String,
    /// Top-level (H1) headings in document order
    pub outline: Vec<HeadingCandidate>,
}

/// Accumulates heading candidates page by page and nests them on demand.
///
/// Pages must be fed in document order with 1-based, non-decreasing page
/// numbers; the restructuring fold depends entirely on input order. The
/// builder itself never fails: unparseable or unheading-like lines are
/// silently skipped, and orphan headings are resolved by the documented
/// drop/fallback policy.
///
/// # Examples
///
/// ```
/// use outline_oxide::geometry::Rect;
/// use outline_oxide::layout::{Line, StyleFlags, TextSpan};
/// use outline_oxide::outline::OutlineBuilder;
///
/// let heading = Line::from_spans(vec![TextSpan::new(
///     "1. Introduction",
///     "Helvetica-Bold",
///     26.0,
///     StyleFlags::BOLD,
///     Rect::new(72.0, 50.0, 300.0, 26.0),
/// )])
/// .unwrap();
///
/// let mut builder = OutlineBuilder::new();
/// builder.process_page(1, &[heading]);
/// let result = builder.finish("sample");
///
/// assert_eq!(result.outline.len(), 1);
/// assert_eq!(result.outline[0].text, "1. Introduction");
/// ```
pub struct OutlineBuilder {
    identifier: LanguageIdentifier,
    flat: Vec<HeadingCandidate>,
}

impl OutlineBuilder {
    /// Create an empty builder with a freshly configured language identifier.
    pub fn new() -> Self {
        Self {
            identifier: LanguageIdentifier::new(),
            flat: Vec::new(),
        }
    }

    /// Score one page's lines and accumulate the accepted headings.
    ///
    /// Lines must arrive in visual/document order. Lines whose joined text is
    /// shorter than [`Line::MIN_TEXT_LEN`] characters never reach the scorer.
    pub fn process_page(&mut self, page_number: u32, lines: &[Line]) {
        let before = self.flat.len();

        for line in lines {
            if !line.is_candidate() {
                continue;
            }
            if let Some((confidence, level)) = classify_line(line) {
                let text = line.text();
                log::debug!("page {}: {} {:?} (confidence {:.2})", page_number, level, text, confidence);
                let tag = self.identifier.identify(&text);
                let span = line.representative();
                self.flat.push(HeadingCandidate {
                    level,
                    text,
                    page: page_number,
                    confidence,
                    font: span.font_name.clone(),
                    size: span.font_size,
                    lang: tag.code,
                    lang_name: tag.name,
                    subsections: Vec::new(),
                });
            }
        }

        log::debug!(
            "page {}: {} heading candidate(s)",
            page_number,
            self.flat.len() - before
        );
    }

    /// Number of flat candidates accumulated so far.
    pub fn candidate_count(&self) -> usize {
        self.flat.len()
    }

    /// Nest the accumulated candidates and produce the document result.
    pub fn finish(self, title: impl Into<String>) -> DocumentOutline {
        DocumentOutline {
            title: title.into(),
            outline: restructure(self.flat),
        }
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Restructure a flat, document-ordered candidate sequence into a tree.
///
/// A single left-to-right pass tracking two cursors: the index of the last
/// H1 pushed to the root list, and the index of the last H2 pushed under it
/// (cleared whenever a new H1 arrives). Each candidate is attached exactly
/// once or dropped exactly once:
///
/// - H1 → new root; becomes the current H1, clears the current H2
/// - H2 under an H1 → child of that H1; becomes the current H2
/// - H3 under an H2 → child of that H2
/// - H3 under an H1 with no H2 yet → child of the H1 directly
/// - H2/H3 before any H1 → dropped (no eligible owner)
///
/// Drops are policy, not errors; they surface only as debug-level traces.
/// Relative order is preserved at every nesting level.
pub fn restructure(flat: Vec<HeadingCandidate>) -> Vec<HeadingCandidate> {
    let mut roots: Vec<HeadingCandidate> = Vec::new();
    // Cursor indices into `roots` / the current H1's subsections.
    let mut current_h1: Option<usize> = None;
    let mut current_h2: Option<usize> = None;

    for item in flat {
        match item.level {
            HeadingLevel::H1 => {
                roots.push(item);
                current_h1 = Some(roots.len() - 1);
                current_h2 = None;
            },
            HeadingLevel::H2 => match current_h1 {
                Some(h1) => {
                    let children = &mut roots[h1].subsections;
                    children.push(item);
                    current_h2 = Some(children.len() - 1);
                },
                None => {
                    log::debug!("dropping orphan H2 {:?} (no H1 yet)", item.text);
                },
            },
            HeadingLevel::H3 => match (current_h1, current_h2) {
                (Some(h1), Some(h2)) => {
                    roots[h1].subsections[h2].subsections.push(item);
                },
                (Some(h1), None) => {
                    // No H2 under the current H1: attach flat to the H1.
                    roots[h1].subsections.push(item);
                },
                (None, _) => {
                    log::debug!("dropping orphan H3 {:?} (no H1 yet)", item.text);
                },
            },
        }
    }

    roots
}
