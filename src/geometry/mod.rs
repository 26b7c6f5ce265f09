//! Geometric primitives for device-space drawing.
//!
//! Coordinates handed to the translator are already transformed into device
//! space by the rendering engine: one unit per point, origin at the top of the
//! page, Y growing downward.

mod analyzer;
mod path;

pub use analyzer::{classify_segments, try_rectangle, Axis, AxisSegment};
pub use path::{Path, Segments, Subpath};

use serde::{Deserialize, Serialize};

/// Distance under which two points count as the same for path closure.
pub const CLOSE_EPSILON: f64 = 0.1;

/// A 2D point in device space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_impro::geometry::Point;
    ///
    /// let point = Point::new(10.0, 20.0);
    /// assert_eq!(point.x, 10.0);
    /// assert_eq!(point.y, 20.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether `other` lies within [`CLOSE_EPSILON`] of this point on both axes.
    pub fn coincides_with(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= CLOSE_EPSILON && (self.y - other.y).abs() <= CLOSE_EPSILON
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// An axis-aligned rectangle in device space, kept as its two corners.
///
/// Edges are stored exactly as given, never rebuilt from a width or height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
    /// Right edge
    pub x2: f64,
    /// Bottom edge
    pub y2: f64,
}

impl Rect {
    /// Create a rectangle from its top-left and bottom-right corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_impro::geometry::Rect;
    ///
    /// let rect = Rect::from_points(0.3, -0.1, 0.9, 0.2);
    /// assert_eq!(rect.right(), 0.9);
    /// assert_eq!(rect.bottom(), 0.2);
    /// ```
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f64 {
        self.x1
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f64 {
        self.x2
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f64 {
        self.y1
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f64 {
        self.y2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn test_point_coincides() {
        let p = Point::new(10.0, 20.0);
        assert!(p.coincides_with(&Point::new(10.05, 19.95)));
        assert!(p.coincides_with(&Point::new(10.1, 20.0)));
        assert!(!p.coincides_with(&Point::new(10.2, 20.0)));
        assert!(!p.coincides_with(&Point::new(10.0, 20.5)));
    }

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let back: Point = serde_json::from_str("[3.0, 4.0]").unwrap();
        assert_eq!(back, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::from_points(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_far_edges_exact() {
        for (lo, hi) in [(0.3, 0.9), (-0.1, 0.2), (333.33, 1000.07)] {
            let r = Rect::from_points(lo, lo, hi, hi);
            assert_eq!(r.right(), hi);
            assert_eq!(r.bottom(), hi);
        }
    }
}
