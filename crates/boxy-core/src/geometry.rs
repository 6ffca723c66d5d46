//! Geometry helpers for pattern segments
//!
//! Rounded corners are quadratic Béziers. Consumers that can only draw straight lines
//! (DXF, length measurement) flatten them through lyon.

use lyon::math::point;
use lyon::path::iterator::*;
use lyon::path::Path;

use crate::types::{Point, Segment};

/// Distances below this are treated as zero
pub const EPSILON: f64 = 1e-9;

/// Default maximum deviation when flattening rounded corners, in pattern units
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.05;

fn to_lyon_path(segment: &Segment) -> Path {
    let mut builder = Path::builder();
    match segment {
        Segment::Line { from, to } => {
            builder.begin(point(from.x as f32, from.y as f32));
            builder.line_to(point(to.x as f32, to.y as f32));
        }
        Segment::Arc { from, control, to } => {
            builder.begin(point(from.x as f32, from.y as f32));
            builder.quadratic_bezier_to(
                point(control.x as f32, control.y as f32),
                point(to.x as f32, to.y as f32),
            );
        }
    }
    builder.end(false);
    builder.build()
}

/// Approximate a segment by a polyline. Lines return their two end points.
pub fn flatten_segment(segment: &Segment, tolerance: f64) -> Vec<Point> {
    if let Segment::Line { from, to } = segment {
        return vec![*from, *to];
    }

    let path = to_lyon_path(segment);
    let mut points = Vec::new();
    for event in path.iter().flattened(tolerance.max(0.001) as f32) {
        match event {
            lyon::path::Event::Begin { at } => {
                points.push(Point::new(at.x as f64, at.y as f64));
            }
            lyon::path::Event::Line { to, .. } => {
                points.push(Point::new(to.x as f64, to.y as f64));
            }
            _ => {}
        }
    }

    // Exact end points so adjacent segments still meet after flattening
    if let Some(first) = points.first_mut() {
        *first = segment.start();
    }
    if let Some(last) = points.last_mut() {
        *last = segment.end();
    }
    points
}

/// Drawn length of a segment; arcs are measured along their flattened polyline.
pub fn segment_length(segment: &Segment, tolerance: f64) -> f64 {
    match segment {
        Segment::Line { from, to } => from.distance_to(to),
        Segment::Arc { .. } => flatten_segment(segment, tolerance)
            .windows(2)
            .map(|w| w[0].distance_to(&w[1]))
            .sum(),
    }
}

impl Segment {
    /// See [`segment_length`]
    pub fn length(&self, tolerance: f64) -> f64 {
        segment_length(self, tolerance)
    }

    /// See [`flatten_segment`]
    pub fn flatten(&self, tolerance: f64) -> Vec<Point> {
        flatten_segment(self, tolerance)
    }

    /// Whether the segment has (near) zero extent
    pub fn is_degenerate(&self) -> bool {
        self.points()
            .windows(2)
            .all(|w| w[0].distance_to(&w[1]) < EPSILON)
    }
}

/// Whether two points coincide within `tolerance`
pub fn points_equal(a: &Point, b: &Point, tolerance: f64) -> bool {
    (a.x - b.x).abs() <= tolerance && (a.y - b.y).abs() <= tolerance
}

/// Length of the shared stretch of two straight segments lying on the same line.
///
/// Returns 0.0 when the segments are not collinear or only touch at an end point.
pub fn collinear_overlap(a: (Point, Point), b: (Point, Point), tolerance: f64) -> f64 {
    let Some(dir) = (a.1 - a.0).normalized() else {
        return 0.0;
    };

    // Both ends of b must sit on the infinite line through a
    let off_line = |p: Point| {
        let v = p - a.0;
        (v.x * dir.y - v.y * dir.x).abs()
    };
    if off_line(b.0) > tolerance || off_line(b.1) > tolerance {
        return 0.0;
    }

    let project = |p: Point| {
        let v = p - a.0;
        v.x * dir.x + v.y * dir.y
    };
    let (a0, a1): (f64, f64) = (0.0, project(a.1));
    let (b0, b1) = {
        let (s, e) = (project(b.0), project(b.1));
        if s <= e {
            (s, e)
        } else {
            (e, s)
        }
    };

    let start = a0.max(b0);
    let end = a1.min(b1);
    (end - start).max(0.0)
}
