//! Pattern model shared by every box style.
//!
//! A pattern is a flat list of [`PatternSegment`]s, each one a straight line or a rounded
//! corner tagged with a [`Role`], plus the overall [`BoundingSize`]. Coordinates are in the
//! physical unit of the parameters (millimetres in practice), measured from the top-left of the
//! bounding box with x growing right and y growing down.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// 2D point in pattern space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }

    /// Length of the point interpreted as a vector from the origin
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or `None` for a zero vector
    pub fn normalized(&self) -> Option<Point> {
        let len = self.length();
        if len <= f64::EPSILON {
            return None;
        }
        Some(Point::new(self.x / len, self.y / len))
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What the fabricator does along a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Material is separated
    Cut,
    /// Two panels stay joined and are creased
    Fold,
}

impl Role {
    /// Layer/class name used by exporters
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cut => "CUT",
            Self::Fold => "FOLD",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry of a single segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    /// Straight line
    Line { from: Point, to: Point },
    /// Rounded corner as a quadratic Bézier; `control` is the sharp corner being replaced
    Arc {
        from: Point,
        control: Point,
        to: Point,
    },
}

impl Segment {
    pub fn line(from: Point, to: Point) -> Self {
        Self::Line { from, to }
    }

    pub fn arc(from: Point, control: Point, to: Point) -> Self {
        Self::Arc { from, control, to }
    }

    pub fn start(&self) -> Point {
        match self {
            Self::Line { from, .. } | Self::Arc { from, .. } => *from,
        }
    }

    pub fn end(&self) -> Point {
        match self {
            Self::Line { to, .. } | Self::Arc { to, .. } => *to,
        }
    }

    /// All points that define the segment, control point included
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::Line { from, to } => vec![*from, *to],
            Self::Arc { from, control, to } => vec![*from, *control, *to],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.points().iter().all(Point::is_finite)
    }
}

/// A segment together with its fabrication role
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternSegment {
    pub role: Role,
    #[serde(flatten)]
    pub segment: Segment,
}

impl PatternSegment {
    pub fn new(role: Role, segment: Segment) -> Self {
        Self { role, segment }
    }

    pub fn is_cut(&self) -> bool {
        self.role == Role::Cut
    }

    pub fn is_fold(&self) -> bool {
        self.role == Role::Fold
    }
}

/// Overall size of a pattern including its outer padding
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingSize {
    pub width: f64,
    pub height: f64,
}

impl BoundingSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside the box (edges included, with tolerance)
    pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
        point.x >= -tolerance
            && point.y >= -tolerance
            && point.x <= self.width + tolerance
            && point.y <= self.height + tolerance
    }
}

impl fmt::Display for BoundingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

/// Complete output of a pattern generator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternLayout {
    pub segments: Vec<PatternSegment>,
    pub size: BoundingSize,
}

impl PatternLayout {
    pub fn new(segments: Vec<PatternSegment>, size: BoundingSize) -> Self {
        Self { segments, size }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments with the given role, in insertion order
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &PatternSegment> + '_ {
        self.segments.iter().filter(move |s| s.role == role)
    }

    pub fn cuts(&self) -> impl Iterator<Item = &PatternSegment> + '_ {
        self.with_role(Role::Cut)
    }

    pub fn folds(&self) -> impl Iterator<Item = &PatternSegment> + '_ {
        self.with_role(Role::Fold)
    }

    /// Total drawn length of all segments with the given role
    pub fn total_length(&self, role: Role, tolerance: f64) -> f64 {
        self.with_role(role)
            .map(|s| crate::geometry::segment_length(&s.segment, tolerance))
            .sum()
    }
}
