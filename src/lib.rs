//! # Outline Oxide
//!
//! Document outline extraction: score styled text lines for "headingness",
//! map scores onto H1/H2/H3 levels, and assemble the accepted headings into
//! a nested table-of-contents tree annotated with a language guess per entry.
//!
//! ## What this crate is
//!
//! The decision core of an outline extractor. It consumes typed lines of
//! styled spans — produced by whatever parses your document format — and
//! returns a nested, serializable outline:
//!
//! - **Heading scoring**: additive, deterministic confidence from font size,
//!   weight, page position, and leading outline numbering
//! - **Level assignment**: strict confidence threshold ladder
//! - **Restructuring**: a single two-cursor pass nests the flat candidate
//!   sequence into an H1→H2→H3 tree
//! - **Language tagging**: statistical detection with a Unicode script-range
//!   fallback; never fails, always yields a (code, name) pair
//!
//! Document parsing, rendering, and layout analysis are deliberately out of
//! scope; the pipeline is purely sequential and never returns an error for
//! content it does not like.
//!
//! ## Quick start
//!
//! ```
//! use outline_oxide::geometry::Rect;
//! use outline_oxide::layout::{Line, StyleFlags, TextSpan};
//! use outline_oxide::outline::OutlineBuilder;
//!
//! // One line of one page, as the parsing collaborator would supply it.
//! let line = Line::from_spans(vec![TextSpan::new(
//!     "1. Introduction",
//!     "Helvetica-Bold",
//!     26.0,
//!     StyleFlags::BOLD,
//!     Rect::new(72.0, 50.0, 300.0, 26.0),
//! )])
//! .unwrap();
//!
//! let mut builder = OutlineBuilder::new();
//! builder.process_page(1, &[line]);
//! let result = builder.finish("paper");
//!
//! assert_eq!(result.outline[0].text, "1. Introduction");
//! assert_eq!(result.outline[0].confidence, 1.0);
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Line model and heading heuristics
pub mod geometry;
pub mod layout;

// Language identification
pub mod lang;

// Outline assembly
pub mod outline;

pub use error::{Error, Result};
pub use layout::{HeadingLevel, Line, StyleFlags, TextSpan};
pub use outline::{DocumentOutline, HeadingCandidate, OutlineBuilder};
