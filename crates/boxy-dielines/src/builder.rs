//! Segment accumulator used by every generator.
//!
//! Panels are drawn one at a time, so neighbouring panels often describe the same silhouette
//! edge twice (a tuck flap and the lid tuck above it, two touching lock tabs). Axis-aligned
//! lines are trimmed against what has already been emitted with the same role, so every edge
//! ends up covered once.

use boxy_core::{BoundingSize, PatternLayout, PatternSegment, Point, Role, Segment, EPSILON};
use tracing::debug;

use crate::layout::{uncovered, Span};

/// Coordinates closer than this are treated as lying on the same axis line
const AXIS_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// A straight line parallel to one of the axes
#[derive(Debug, Clone, Copy)]
struct AxisLine {
    axis: Axis,
    /// y of a horizontal line, x of a vertical one
    fixed: f64,
    a: f64,
    b: f64,
}

impl AxisLine {
    fn from_points(from: Point, to: Point) -> Option<Self> {
        if (from.y - to.y).abs() < AXIS_TOLERANCE {
            Some(Self {
                axis: Axis::Horizontal,
                fixed: from.y,
                a: from.x,
                b: to.x,
            })
        } else if (from.x - to.x).abs() < AXIS_TOLERANCE {
            Some(Self {
                axis: Axis::Vertical,
                fixed: from.x,
                a: from.y,
                b: to.y,
            })
        } else {
            None
        }
    }

    fn span(&self) -> Span {
        Span::new(self.a.min(self.b), self.a.max(self.b))
    }

    fn is_collinear_with(&self, other: &AxisLine) -> bool {
        self.axis == other.axis && (self.fixed - other.fixed).abs() < AXIS_TOLERANCE
    }

    fn point(&self, t: f64) -> Point {
        match self.axis {
            Axis::Horizontal => Point::new(t, self.fixed),
            Axis::Vertical => Point::new(self.fixed, t),
        }
    }
}

#[derive(Debug, Default)]
pub struct PatternBuilder {
    segments: Vec<PatternSegment>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn cut(&mut self, from: Point, to: Point) {
        self.line(Role::Cut, from, to);
    }

    pub fn fold(&mut self, from: Point, to: Point) {
        self.line(Role::Fold, from, to);
    }

    /// Add a straight line, dropping any stretch already covered by a collinear line of the
    /// same role. Zero-length lines are ignored.
    pub fn line(&mut self, role: Role, from: Point, to: Point) {
        if from.distance_to(&to) < EPSILON {
            return;
        }

        let Some(line) = AxisLine::from_points(from, to) else {
            self.push(role, Segment::line(from, to));
            return;
        };

        let mut covered: Vec<Span> = self
            .segments
            .iter()
            .filter(|s| s.role == role)
            .filter_map(|s| match s.segment {
                Segment::Line { from, to } => AxisLine::from_points(from, to),
                Segment::Arc { .. } => None,
            })
            .filter(|other| line.is_collinear_with(other))
            .map(|other| other.span())
            .collect();

        if covered.is_empty() {
            self.push(role, Segment::line(from, to));
            return;
        }

        covered.sort_by(|a, b| a.start.total_cmp(&b.start));
        let whole = line.span();
        let mut pieces = uncovered(whole.start, whole.end, &covered);

        // Keep the caller's drawing direction
        let forward = line.a <= line.b;
        if !forward {
            pieces.reverse();
        }
        for piece in pieces {
            let (s, e) = if forward {
                (piece.start, piece.end)
            } else {
                (piece.end, piece.start)
            };
            self.push(role, Segment::line(line.point(s), line.point(e)));
        }
    }

    /// Rounded corner replacing the sharp corner at `control`.
    ///
    /// Collapses to a line when the radius is zero on one side, and to nothing when both ends
    /// meet.
    pub fn corner(&mut self, role: Role, from: Point, control: Point, to: Point) {
        if from.distance_to(&to) < EPSILON {
            return;
        }
        if from.distance_to(&control) < EPSILON || control.distance_to(&to) < EPSILON {
            self.line(role, from, to);
            return;
        }
        self.push(role, Segment::arc(from, control, to));
    }

    pub fn cut_corner(&mut self, from: Point, control: Point, to: Point) {
        self.corner(Role::Cut, from, control, to);
    }

    /// Cut along consecutive points
    pub fn cut_path(&mut self, points: &[Point]) {
        for pair in points.windows(2) {
            self.cut(pair[0], pair[1]);
        }
    }

    /// Vertical line at `x` from `y0` to `y1` that skips the given spans.
    pub fn vertical_with_gaps(&mut self, role: Role, x: f64, y0: f64, y1: f64, gaps: &[Span]) {
        for piece in uncovered(y0, y1, gaps) {
            self.line(role, Point::new(x, piece.start), Point::new(x, piece.end));
        }
    }

    pub fn finish(self, size: BoundingSize) -> PatternLayout {
        let cuts = self.segments.iter().filter(|s| s.is_cut()).count();
        debug!(
            "Assembled pattern: {} cut and {} fold segments, {} x {}",
            cuts,
            self.segments.len() - cuts,
            size.width,
            size.height
        );
        PatternLayout::new(self.segments, size)
    }

    fn push(&mut self, role: Role, segment: Segment) {
        self.segments.push(PatternSegment::new(role, segment));
    }
}
