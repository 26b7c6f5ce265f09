//! Shape recognition for stroked and filled paths.
//!
//! The device only knows boxes, shaded boxes and horizontal/vertical rules.
//! [`try_rectangle`] decides whether a path can be drawn as a box, and
//! [`classify_segments`] breaks anything else into axis-aligned rules.

use super::{Path, Point, Rect};

/// Minimum number of segments a path needs before it is taken for a box.
const MIN_RECT_SEGMENTS: usize = 4;

/// Detect a box-shaped path and return its bounding rectangle.
///
/// The path is accepted when it has at least four segments and the end of its
/// last segment comes back (within [`CLOSE_EPSILON`](super::CLOSE_EPSILON)) to
/// the first point visited. Any closed path passing that test is reported as
/// its bounding box, rectilinear or not: the device has no polygon primitive.
///
/// # Examples
///
/// ```
/// use pdf_impro::geometry::{try_rectangle, Path, Point};
///
/// let square = Path::polyline([
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
///     Point::new(0.0, 0.0),
/// ]);
/// let rect = try_rectangle(&square).unwrap();
/// assert_eq!((rect.left(), rect.top(), rect.right(), rect.bottom()), (0.0, 0.0, 10.0, 10.0));
/// ```
pub fn try_rectangle(path: &Path) -> Option<Rect> {
    let mut segments = path.segments();
    let (first, second) = segments.next()?;

    let mut min = Point::new(first.x.min(second.x), first.y.min(second.y));
    let mut max = Point::new(first.x.max(second.x), first.y.max(second.y));
    let mut count = 1;
    let mut last = second;

    for (start, end) in segments {
        min.x = min.x.min(start.x).min(end.x);
        min.y = min.y.min(start.y).min(end.y);
        max.x = max.x.max(start.x).max(end.x);
        max.y = max.y.max(start.y).max(end.y);
        count += 1;
        last = end;
    }

    if !last.coincides_with(&first) || count < MIN_RECT_SEGMENTS {
        return None;
    }

    Some(Rect::from_points(min.x, min.y, max.x, max.y))
}

/// Orientation a segment is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Drawn as an `hlin` rule
    Horizontal,
    /// Drawn as a `vlin` rule
    Vertical,
}

/// A path segment snapped to the axis it mostly runs along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSegment {
    /// Dominant direction
    pub axis: Axis,
    /// First point, as drawn
    pub start: Point,
    /// Second point, as drawn
    pub end: Point,
}

impl AxisSegment {
    /// Classify one segment. Ties (including zero-length segments) are vertical.
    pub fn classify(start: Point, end: Point) -> Self {
        let axis = if (end.x - start.x).abs() > (end.y - start.y).abs() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        Self { axis, start, end }
    }

    /// Extent along the dominant axis.
    pub fn length(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => (self.end.x - self.start.x).abs(),
            Axis::Vertical => (self.end.y - self.start.y).abs(),
        }
    }

    /// Smallest coordinate along the dominant axis, whatever the drawing direction.
    pub fn leading_edge(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => self.start.x.min(self.end.x),
            Axis::Vertical => self.start.y.min(self.end.y),
        }
    }

    /// Coordinate across the dominant axis, taken from the start point.
    pub fn offset(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => self.start.y,
            Axis::Vertical => self.start.x,
        }
    }
}

/// Classify every segment of a path, one entry per consecutive point pair.
///
/// Collinear neighbours are not merged.
pub fn classify_segments(path: &Path) -> Vec<AxisSegment> {
    path.segments()
        .map(|(start, end)| AxisSegment::classify(start, end))
        .collect()
}
