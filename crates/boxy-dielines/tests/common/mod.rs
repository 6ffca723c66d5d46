//! Shared checks for generated patterns

#![allow(dead_code)]

use boxy_core::geometry::collinear_overlap;
use boxy_core::{PatternLayout, Point, Role, Segment};

const TOLERANCE: f64 = 1e-6;

/// Straight segments as (role, from, to)
pub fn lines(layout: &PatternLayout) -> Vec<(Role, Point, Point)> {
    layout
        .segments
        .iter()
        .filter_map(|s| match s.segment {
            Segment::Line { from, to } => Some((s.role, from, to)),
            Segment::Arc { .. } => None,
        })
        .collect()
}

/// No two straight segments share a stretch of the same line, whatever their roles.
pub fn assert_no_collinear_overlap(layout: &PatternLayout) {
    let lines = lines(layout);
    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            let shared = collinear_overlap((a.1, a.2), (b.1, b.2), TOLERANCE);
            assert!(
                shared <= TOLERANCE,
                "{:?} {}->{} overlaps {:?} {}->{} by {}",
                a.0,
                a.1,
                a.2,
                b.0,
                b.1,
                b.2,
                shared
            );
        }
    }
}

/// Every point, arc controls included, is finite and inside the layout bounds.
pub fn assert_within_bounds(layout: &PatternLayout) {
    for s in &layout.segments {
        for p in s.segment.points() {
            assert!(p.is_finite(), "non-finite point in {:?}", s);
            assert!(
                layout.size.contains(&p, TOLERANCE),
                "{} lies outside {}",
                p,
                layout.size
            );
        }
    }
}

fn on_piece(p: Point, a: Point, b: Point) -> bool {
    let ab = b - a;
    let len2 = ab.x * ab.x + ab.y * ab.y;
    let t = if len2 > 0.0 {
        (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    p.distance_to(&(a + ab * t)) <= TOLERANCE
}

/// Segment ends that touch no other segment, as (segment index, point)
pub fn loose_ends(layout: &PatternLayout) -> Vec<(usize, Point)> {
    let pieces: Vec<(usize, Point, Point)> = layout
        .segments
        .iter()
        .enumerate()
        .flat_map(|(i, s)| {
            let points = s.segment.flatten(0.01);
            points
                .windows(2)
                .map(|w| (i, w[0], w[1]))
                .collect::<Vec<_>>()
        })
        .collect();

    let mut loose = Vec::new();
    for (i, s) in layout.segments.iter().enumerate() {
        for p in [s.segment.start(), s.segment.end()] {
            let attached = pieces
                .iter()
                .any(|&(j, a, b)| j != i && on_piece(p, a, b));
            if !attached {
                loose.push((i, p));
            }
        }
    }
    loose
}

/// Straight cuts standing free of everything else at both ends
pub fn isolated_slits(layout: &PatternLayout) -> Vec<(Point, Point)> {
    let loose = loose_ends(layout);
    layout
        .segments
        .iter()
        .enumerate()
        .filter(|(i, _)| loose.iter().filter(|(j, _)| j == i).count() == 2)
        .filter_map(|(_, s)| match s.segment {
            Segment::Line { from, to } if s.role == Role::Cut => Some((from, to)),
            _ => None,
        })
        .collect()
}

/// Every segment end joins another segment, except both ends of a free-standing slit.
pub fn assert_no_gaps(layout: &PatternLayout) {
    let loose = loose_ends(layout);
    for (i, p) in &loose {
        let both_loose = loose.iter().filter(|(j, _)| j == i).count() == 2;
        let segment = &layout.segments[*i];
        assert!(
            both_loose && segment.role == Role::Cut && matches!(segment.segment, Segment::Line { .. }),
            "gap at {} on {:?}",
            p,
            segment
        );
    }
}

pub fn assert_sound(layout: &PatternLayout) {
    assert!(!layout.is_empty());
    assert!(layout.cuts().count() > 0);
    assert!(layout.folds().count() > 0);
    assert_within_bounds(layout);
    assert_no_collinear_overlap(layout);
    assert_no_gaps(layout);
}

/// Vertical lines of `role` at `x`, as (top, bottom) sorted top to bottom
pub fn verticals_at(layout: &PatternLayout, role: Role, x: f64) -> Vec<(f64, f64)> {
    let mut found: Vec<(f64, f64)> = lines(layout)
        .into_iter()
        .filter(|(r, a, b)| {
            *r == role && (a.x - x).abs() < TOLERANCE && (b.x - x).abs() < TOLERANCE
        })
        .map(|(_, a, b)| (a.y.min(b.y), a.y.max(b.y)))
        .collect();
    found.sort_by(|a, b| a.0.total_cmp(&b.0));
    found
}

/// Horizontal lines of `role` at `y`, as (left, right)
pub fn horizontals_at(layout: &PatternLayout, role: Role, y: f64) -> Vec<(f64, f64)> {
    let mut found: Vec<(f64, f64)> = lines(layout)
        .into_iter()
        .filter(|(r, a, b)| {
            *r == role && (a.y - y).abs() < TOLERANCE && (b.y - y).abs() < TOLERANCE
        })
        .map(|(_, a, b)| (a.x.min(b.x), a.x.max(b.x)))
        .collect();
    found.sort_by(|a, b| a.0.total_cmp(&b.0));
    found
}

/// Smallest and largest x over all segment points
pub fn x_extent(layout: &PatternLayout) -> (f64, f64) {
    layout
        .segments
        .iter()
        .flat_map(|s| s.segment.points())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        })
}
