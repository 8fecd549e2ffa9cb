//! Line model and heading heuristics.
//!
//! This module provides the typed line/span input model and the heading
//! detection heuristic:
//! - Styled spans grouped into visual lines
//! - Additive confidence scoring (size, weight, position, numbering)
//! - Confidence → H1/H2/H3 threshold ladder

pub mod heading_detector;
pub mod text_line;

// Re-export main types
pub use heading_detector::{HeadingLevel, assign_level, classify_line, confidence};
pub use text_line::{Line, StyleFlags, TextSpan};
