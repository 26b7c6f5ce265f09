//! Flattened device-space paths.
//!
//! A [`Path`] is what the rendering engine hands over on a stroke or fill:
//! an ordered list of polylines whose points are already transformed into
//! device space. Curves are expected to have been flattened by the engine.

use super::Point;
use serde::{Deserialize, Serialize};

/// One polyline of a path. Consecutive points form a segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subpath {
    /// Points in drawing order
    pub points: Vec<Point>,
}

impl Subpath {
    /// Create a subpath from its points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of segments (one less than the number of points).
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// An ordered sequence of subpaths.
///
/// # Example
///
/// ```
/// use pdf_impro::geometry::Path;
///
/// let mut path = Path::new();
/// path.move_to(0.0, 0.0);
/// path.line_to(10.0, 0.0);
/// path.line_to(10.0, 10.0);
/// path.close_path();
///
/// assert_eq!(path.segments().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    /// Subpaths in drawing order
    pub subpaths: Vec<Subpath>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from already built subpaths.
    pub fn from_subpaths(subpaths: Vec<Subpath>) -> Self {
        Self { subpaths }
    }

    /// Create a single-subpath polyline.
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        Self::from_subpaths(vec![Subpath::new(points.into_iter().collect())])
    }

    /// Begin a new subpath at the given point.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(Subpath::new(vec![Point::new(x, y)]));
    }

    /// Extend the current subpath with a line to the given point.
    ///
    /// Starts a subpath at the point when there is none yet.
    pub fn line_to(&mut self, x: f64, y: f64) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.points.push(Point::new(x, y)),
            None => self.move_to(x, y),
        }
    }

    /// Close the current subpath with a segment back to its first point.
    pub fn close_path(&mut self) {
        if let Some(subpath) = self.subpaths.last_mut() {
            if let Some(&first) = subpath.points.first() {
                subpath.points.push(first);
            }
        }
    }

    /// Whether the path has no segment at all.
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.segment_count() == 0)
    }

    /// Iterate over every segment of every subpath in drawing order.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            subpaths: &self.subpaths,
            subpath: 0,
            point: 0,
        }
    }
}

/// Iterator over the `(start, end)` segments of a [`Path`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    subpaths: &'a [Subpath],
    subpath: usize,
    point: usize,
}

impl Iterator for Segments<'_> {
    type Item = (Point, Point);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(subpath) = self.subpaths.get(self.subpath) {
            if self.point + 1 < subpath.points.len() {
                let segment = (subpath.points[self.point], subpath.points[self.point + 1]);
                self.point += 1;
                return Some(segment);
            }
            self.subpath += 1;
            self.point = 0;
        }
        None
    }
}
