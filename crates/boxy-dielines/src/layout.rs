//! Placement helpers shared by the generators

use boxy_core::EPSILON;
use serde::{Deserialize, Serialize};

use crate::error::{PatternError, PatternResult};

/// Empty margin around every pattern, on all four sides
pub const PADDING: f64 = 60.0;

/// Closed interval along one edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= EPSILON
    }

    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// True when the spans share more than an end point
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end - EPSILON && other.start < self.end - EPSILON
    }
}

/// Length occupied by `count` features of `length` separated by `gap`
pub fn total_span(count: u32, length: f64, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    count as f64 * length + (count - 1) as f64 * gap
}

/// Place `count` features centred on an edge starting at `origin` with usable length `usable`.
pub fn centered_spans(origin: f64, usable: f64, count: u32, length: f64, gap: f64) -> Vec<Span> {
    let start = origin + (usable - total_span(count, length, gap)) / 2.0;
    (0..count)
        .map(|i| {
            let s = start + i as f64 * (length + gap);
            Span::new(s, s + length)
        })
        .collect()
}

/// The parts of `[start, end]` not covered by `spans`, in ascending order.
///
/// `spans` must be sorted and non-overlapping.
pub fn uncovered(start: f64, end: f64, spans: &[Span]) -> Vec<Span> {
    let mut pieces = Vec::new();
    let mut last = start;
    for span in spans {
        if span.start > last {
            pieces.push(Span::new(last, span.start.min(end)));
        }
        last = last.max(span.end);
    }
    if last < end {
        pieces.push(Span::new(last, end));
    }
    pieces.retain(|p| !p.is_empty());
    pieces
}

/// Check that every span lies strictly inside `(start, end)` and that none overlap.
pub fn check_spans(feature: &str, spans: &[Span], start: f64, end: f64) -> PatternResult<()> {
    for (i, span) in spans.iter().enumerate() {
        if span.start <= start + EPSILON || span.end >= end - EPSILON {
            return Err(PatternError::inconsistent(format!(
                "{} {} spans {:.3}..{:.3}, outside the usable edge {:.3}..{:.3}",
                feature,
                i + 1,
                span.start,
                span.end,
                start,
                end
            )));
        }
        if let Some(next) = spans.get(i + 1) {
            if span.overlaps(next) {
                return Err(PatternError::inconsistent(format!(
                    "{} {} and {} overlap ({:.3}..{:.3} vs {:.3}..{:.3})",
                    feature,
                    i + 1,
                    i + 2,
                    span.start,
                    span.end,
                    next.start,
                    next.end
                )));
            }
        }
    }
    Ok(())
}
