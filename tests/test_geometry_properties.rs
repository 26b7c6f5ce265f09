//! Property-based tests for box detection and segment classification.

use pdf_impro::geometry::{classify_segments, try_rectangle, Axis, Path, Point};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0
}

fn points(min: usize, max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((coord(), coord()).prop_map(|(x, y)| Point::new(x, y)), min..max)
}

fn bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
    )
}

// ============================================================================
// Box detection
// ============================================================================

/// Property: a closed path of four or more segments is its bounding box
proptest! {
    #[test]
    fn prop_closed_path_is_bounding_box(mut pts in points(4, 12)) {
        pts.push(pts[0]);
        let rect = try_rectangle(&Path::polyline(pts.clone()));
        prop_assert!(rect.is_some());

        let rect = rect.unwrap();
        let (x0, y0, x1, y1) = bounds(&pts);
        prop_assert_eq!(rect.left(), x0);
        prop_assert_eq!(rect.top(), y0);
        prop_assert_eq!(rect.right(), x1);
        prop_assert_eq!(rect.bottom(), y1);
    }
}

/// Property: a path ending away from its start is never a box
proptest! {
    #[test]
    fn prop_open_path_is_not_box(mut pts in points(4, 12), dx in 0.2f64..50.0) {
        let start = pts[0];
        pts.push(Point::new(start.x + dx, start.y));
        prop_assert!(try_rectangle(&Path::polyline(pts)).is_none());
    }
}

/// Property: fewer than four segments is never a box, even when closed
proptest! {
    #[test]
    fn prop_short_path_is_not_box(mut pts in points(1, 4)) {
        pts.push(pts[0]);
        prop_assert!(try_rectangle(&Path::polyline(pts)).is_none());
    }
}

// ============================================================================
// Segment classification
// ============================================================================

/// Property: one rule per segment, along the dominant axis
proptest! {
    #[test]
    fn prop_segments_follow_dominant_axis(pts in points(2, 10)) {
        let segments = classify_segments(&Path::polyline(pts.clone()));
        prop_assert_eq!(segments.len(), pts.len() - 1);

        for (segment, pair) in segments.iter().zip(pts.windows(2)) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            match segment.axis {
                Axis::Horizontal => {
                    prop_assert!(dx > dy);
                    prop_assert_eq!(segment.length(), dx);
                    prop_assert_eq!(segment.leading_edge(), pair[0].x.min(pair[1].x));
                },
                Axis::Vertical => {
                    prop_assert!(dx <= dy);
                    prop_assert_eq!(segment.length(), dy);
                    prop_assert_eq!(segment.leading_edge(), pair[0].y.min(pair[1].y));
                },
            }
        }
    }
}
