//! Geometric primitives for span positioning.
//!
//! Documents place every text span at a position on its page; the outline
//! heuristics only ever look at vertical offsets measured from the page top,
//! so this module stays deliberately small.

use serde::{Deserialize, Serialize};

/// A rectangle in page space.
///
/// The origin is the top-left corner of the page, with `y` growing downward.
/// This matches the coordinate convention of the text-extraction collaborators
/// that produce span bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the top-left corner
    pub x: f32,
    /// Y coordinate of the top-left corner (distance from page top)
    pub y: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    ///
    /// let rect = Rect::new(72.0, 50.0, 400.0, 24.0);
    /// assert_eq!(rect.width, 400.0);
    /// assert_eq!(rect.height, 24.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    ///
    /// Since `y` grows downward, this is the span's vertical offset from the
    /// top of the page — the quantity the heading heuristics score against.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use outline_oxide::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 50.0, 20.0);
    /// let r2 = Rect::new(60.0, 0.0, 50.0, 20.0);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.left(), 0.0);
    /// assert_eq!(union.right(), 110.0);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }
}
