//! Triangular prism (Toblerone-style) box
//!
//! Three rectangular panels run left to right with the folds vertical. A tuck tab hangs off
//! the left of panel 1 and carries U-shaped side lock flaps; panel 3 carries matching rounded
//! tabs on its right edge. Each end of the prism is closed by caps drawn identically at the top
//! and bottom of the panels:
//!
//! - panel 1: equilateral triangle with a tuck flap and a slot on its right edge
//! - panel 2: triangle plus an inverted triangle whose free edge carries the lock tab
//! - panel 3: a low trapezoid
//!
//! Caps are computed in a local frame `(x, h)` where `h` grows away from the panels, then
//! mapped to pattern space, so the bottom caps are exact mirror images of the top ones.

pub mod types;

pub use types::{PrismMeasurements, PrismParameters};

use boxy_core::{BoundingSize, PatternLayout, Point, Role, EPSILON};
use tracing::debug;

use crate::builder::PatternBuilder;
use crate::error::{
    log_clamp, require_count, require_non_negative, require_positive, PatternError, PatternResult,
};
use crate::layout::{check_spans, Span, PADDING};
use crate::style::{BoxStyle, DielineGenerator};

/// Inset of the end tuck's outer edge from the triangle apex
pub const APEX_INSET: f64 = 8.0;
/// Inset of the end tuck's outer edge from the triangle base, and of the panel 3 trapezoid
pub const BASE_INSET: f64 = 15.0;
/// Gap between the tuck tab and the panel corners
pub const TUCK_INSET: f64 = 5.0;
/// Distance kept free of side locks at each end of the depth
pub const SIDE_LOCK_MARGIN: f64 = 10.0;
/// Slot length beyond the lock tab it receives
pub const SLOT_CLEARANCE: f64 = 2.0;
/// Slot width across the fold, and depth of the lock tab
pub const SLOT_WIDTH: f64 = 4.0;
/// Largest side lock corner radius
pub const MAX_NOTCH_RADIUS: f64 = 3.0;
/// Side lock flaps may use at most this share of the tuck width
pub const SIDE_LOCK_RATIO: f64 = 0.75;

const SIN_60: f64 = 0.866_025_403_784_438_6;

fn clamp_tuck_round(value: f64, tuck: f64, depth: f64) -> f64 {
    value
        .min(tuck / 2.0)
        .min((depth - 2.0 * TUCK_INSET) / 2.0)
}

fn clamp_side_lock_width(value: f64, tuck: f64) -> f64 {
    value.min(SIDE_LOCK_RATIO * tuck)
}

/// Keeps the end tuck clear of the panel 2 triangle and inside the lock tab band
fn clamp_end_tuck(value: f64, lock_tab_height: f64) -> f64 {
    value
        .min(BASE_INSET)
        .min(2.0 * (lock_tab_height + APEX_INSET * SIN_60))
}

impl PrismParameters {
    /// Copy with every clamped field replaced by the value the generator uses.
    ///
    /// Only meaningful for parameters that pass validation.
    pub fn clamped(&self) -> Self {
        Self {
            tuck_round: clamp_tuck_round(self.tuck_round, self.tuck_width, self.depth),
            side_lock_width: clamp_side_lock_width(self.side_lock_width, self.tuck_width),
            end_tuck_width: clamp_end_tuck(self.end_tuck_width, self.lock_tab_height),
            ..*self
        }
    }
}

/// Validate the parameters and compute the clamped measurements.
pub fn derive(params: &PrismParameters) -> PatternResult<PrismMeasurements> {
    let side = require_positive("side", params.side)?;
    let depth = require_positive("depth", params.depth)?;
    let tuck = require_positive("tuck_width", params.tuck_width)?;
    let tuck_round = require_non_negative("tuck_round", params.tuck_round)?;
    let end_tuck = require_positive("end_tuck_width", params.end_tuck_width)?;
    let lock_tab_width = require_positive("lock_tab_width", params.lock_tab_width)?;
    let lock_tab_height = require_positive("lock_tab_height", params.lock_tab_height)?;
    let side_lock_width = require_positive("side_lock_width", params.side_lock_width)?;
    let slit = require_positive("side_lock_slit_width", params.side_lock_slit_width)?;
    let side_lock_height = require_positive("side_lock_height", params.side_lock_height)?;
    let count = require_count("side_lock_count", params.side_lock_count)?;

    if depth - 2.0 * TUCK_INSET <= EPSILON {
        return Err(PatternError::inconsistent(format!(
            "depth {} leaves no edge for the tuck tab",
            depth
        )));
    }
    if side - 2.0 * BASE_INSET <= EPSILON {
        return Err(PatternError::inconsistent(format!(
            "side {} leaves no outer edge on the panel 3 end flap",
            side
        )));
    }

    let slot_length = lock_tab_width + SLOT_CLEARANCE;
    let max_slot = side - 2.0 * BASE_INSET;
    if slot_length > max_slot {
        return Err(PatternError::out_of_range(
            "lock_tab_width",
            lock_tab_width,
            0.0,
            max_slot - SLOT_CLEARANCE,
        ));
    }

    let tuck_radius = log_clamp(
        "tuck_round",
        tuck_round,
        clamp_tuck_round(tuck_round, tuck, depth),
    );
    let side_lock_width = log_clamp(
        "side_lock_width",
        side_lock_width,
        clamp_side_lock_width(side_lock_width, tuck),
    );
    let end_tuck_width = log_clamp(
        "end_tuck_width",
        end_tuck,
        clamp_end_tuck(end_tuck, lock_tab_height),
    );
    if end_tuck_width < SLOT_WIDTH {
        return Err(PatternError::out_of_range(
            "end_tuck_width",
            end_tuck_width,
            SLOT_WIDTH,
            BASE_INSET,
        ));
    }

    Ok(PrismMeasurements {
        side,
        depth,
        triangle_height: side * SIN_60,
        tuck,
        tuck_radius,
        end_tuck_width,
        lock_tab_height,
        slot_length,
        slot_width: SLOT_WIDTH,
        side_lock_width,
        side_lock_slit: slit,
        side_lock_height,
        side_lock_count: count,
        notch_radius: MAX_NOTCH_RADIUS
            .min(side_lock_width / 2.0)
            .min(side_lock_height / 2.0),
        tab_radius: (side_lock_width / 2.0).min(slit + side_lock_height / 2.0),
    })
}

/// Panel coordinates of a prism pattern
#[derive(Debug, Clone, Copy, PartialEq)]
struct PrismFrame {
    /// Panel edges, left to right
    x: [f64; 4],
    y_top: f64,
    y_bottom: f64,
    tuck_top: f64,
    tuck_bottom: f64,
}

impl PrismFrame {
    fn new(m: &PrismMeasurements) -> Self {
        let ox = PADDING + m.tuck + m.side_lock_width;
        let oy = PADDING + m.triangle_height + m.lock_tab_height;
        let y_bottom = oy + m.depth;
        Self {
            x: [ox, ox + m.side, ox + 2.0 * m.side, ox + 3.0 * m.side],
            y_top: oy,
            y_bottom,
            tuck_top: oy + TUCK_INSET,
            tuck_bottom: y_bottom - TUCK_INSET,
        }
    }

    /// Side lock spans, slits included, top to bottom
    fn side_lock_spans(&self, m: &PrismMeasurements) -> Vec<Span> {
        let n = m.side_lock_count;
        let spacing = (m.depth - 2.0 * SIDE_LOCK_MARGIN) / (n + 1) as f64;
        (0..n)
            .map(|i| {
                let top = self.y_top + SIDE_LOCK_MARGIN + (i + 1) as f64 * spacing
                    - m.side_lock_height / 2.0;
                Span::new(
                    top - m.side_lock_slit,
                    top + m.side_lock_height + m.side_lock_slit,
                )
            })
            .collect()
    }
}

fn size_of(m: &PrismMeasurements) -> BoundingSize {
    BoundingSize::new(
        m.tuck + 2.0 * m.side_lock_width + 3.0 * m.side + 2.0 * PADDING,
        2.0 * m.triangle_height + 2.0 * m.lock_tab_height + m.depth + 2.0 * PADDING,
    )
}

/// Local frame of one end of the prism
#[derive(Debug, Clone, Copy)]
struct CapFrame {
    base: f64,
    /// -1 at the top (h grows upward), +1 at the bottom
    outward: f64,
}

impl CapFrame {
    fn map(&self, p: Point) -> Point {
        Point::new(p.x, self.base + self.outward * p.y)
    }
}

/// Tuck tab with the side lock flaps cut into it, hinged on panel 1's left edge
fn emit_tuck_tab(b: &mut PatternBuilder, m: &PrismMeasurements, f: &PrismFrame, spans: &[Span]) {
    let x0 = f.x[0];
    let left = x0 - m.tuck;
    let r = m.tuck_radius;
    let (tt, tb) = (f.tuck_top, f.tuck_bottom);
    let p = Point::new;

    b.cut(p(x0, tt), p(left + r, tt));
    b.cut_corner(p(left + r, tt), p(left, tt), p(left, tt + r));
    b.cut(p(left, tt + r), p(left, tb - r));
    b.cut_corner(p(left, tb - r), p(left, tb), p(left + r, tb));
    b.cut(p(left + r, tb), p(x0, tb));

    b.cut(p(x0, f.y_top), p(x0, tt));
    b.vertical_with_gaps(Role::Fold, x0, tt, tb, spans);
    b.cut(p(x0, tb), p(x0, f.y_bottom));

    let w = m.side_lock_width;
    let u = m.notch_radius;
    for span in spans {
        let top = span.start + m.side_lock_slit;
        let bottom = span.end - m.side_lock_slit;
        b.cut(p(x0, span.start), p(x0, top));
        b.cut(p(x0, top), p(x0 - w + u, top));
        b.cut_corner(p(x0 - w + u, top), p(x0 - w, top), p(x0 - w, top + u));
        b.cut(p(x0 - w, top + u), p(x0 - w, bottom - u));
        b.cut_corner(p(x0 - w, bottom - u), p(x0 - w, bottom), p(x0 - w + u, bottom));
        b.cut(p(x0 - w + u, bottom), p(x0, bottom));
        b.cut(p(x0, bottom), p(x0, span.end));
    }
}

/// Panel 3's free edge with a rounded tab and centred slit for every side lock
fn emit_lock_edge(b: &mut PatternBuilder, m: &PrismMeasurements, f: &PrismFrame, spans: &[Span]) {
    let x3 = f.x[3];
    let w = m.side_lock_width;
    let r = m.tab_radius;
    let p = Point::new;

    b.vertical_with_gaps(Role::Cut, x3, f.y_top, f.y_bottom, spans);
    for span in spans {
        let (top, bottom) = (span.start, span.end);
        b.cut(p(x3, top), p(x3 + w - r, top));
        b.cut_corner(p(x3 + w - r, top), p(x3 + w, top), p(x3 + w, top + r));
        b.cut(p(x3 + w, top + r), p(x3 + w, bottom - r));
        b.cut_corner(p(x3 + w, bottom - r), p(x3 + w, bottom), p(x3 + w - r, bottom));
        b.cut(p(x3 + w - r, bottom), p(x3, bottom));

        let half = m.side_lock_height / 2.0;
        b.cut(p(x3, span.center() - half), p(x3, span.center() + half));
    }
}

fn emit_end_cap(b: &mut PatternBuilder, m: &PrismMeasurements, f: &PrismFrame, cap: CapFrame) {
    let [x0, x1, x2, x3] = f.x;
    let s = m.side;
    let th = m.triangle_height;
    let e = m.end_tuck_width;
    let l = Point::new;
    let to = |p: Point| cap.map(p);

    // Panel 1: triangle, end tuck on the right edge, slot across that fold
    let apex = l(x0 + s / 2.0, th);
    let corner = l(x1, 0.0);
    b.fold(to(l(x0, 0.0)), to(corner));
    b.cut(to(l(x0, 0.0)), to(apex));

    let dir = (corner - apex) * (1.0 / s);
    let normal = Point::new(-dir.y, dir.x);
    let tuck_start = apex + normal * e + dir * APEX_INSET;
    let tuck_end = corner + normal * e - dir * BASE_INSET;
    b.cut_path(&[apex, tuck_start, tuck_end, corner].map(to));

    let mid = apex.midpoint(&corner);
    let half = dir * (m.slot_length / 2.0);
    let across = normal * (m.slot_width / 2.0);
    let (s0, s1) = (mid - half, mid + half);
    b.fold(to(apex), to(s0));
    b.fold(to(s1), to(corner));
    b.cut_path(&[s0 - across, s1 - across, s1 + across, s0 + across, s0 - across].map(to));

    // Panel 2: triangle folded onto an inverted triangle that carries the lock tab
    let apex = l(x1 + s / 2.0, th);
    let base_corner = l(x2, 0.0);
    let free = l(x2 + s / 2.0, th);
    b.fold(to(l(x1, 0.0)), to(base_corner));
    b.cut(to(l(x1, 0.0)), to(apex));
    b.fold(to(apex), to(base_corner));
    b.cut(to(apex), to(free));

    let dir = (base_corner - free) * (1.0 / s);
    let normal = Point::new(-dir.y, dir.x);
    let mid = free.midpoint(&base_corner);
    let half = dir * (m.slot_length / 2.0);
    let depth = normal * m.slot_width;
    let (t1, t2) = (mid - half, mid + half);
    b.cut_path(&[free, t1, t1 + depth, t2 + depth, t2, base_corner].map(to));

    // Panel 3: trapezoid
    b.fold(to(l(x2, 0.0)), to(l(x3, 0.0)));
    b.cut_path(
        &[
            l(x2, 0.0),
            l(x2 + BASE_INSET, e),
            l(x3 - BASE_INSET, e),
            l(x3, 0.0),
        ]
        .map(to),
    );
}

/// Derive, lay out and check the side locks; shared by `generate` and `bounding_size`.
fn prepare(params: &PrismParameters) -> PatternResult<(PrismMeasurements, PrismFrame, Vec<Span>)> {
    let m = derive(params)?;
    let frame = PrismFrame::new(&m);
    let spans = frame.side_lock_spans(&m);
    check_spans("side lock", &spans, frame.tuck_top, frame.tuck_bottom)?;
    Ok((m, frame, spans))
}

/// Side lock spans along the tuck edge, slits included.
pub fn side_lock_spans(params: &PrismParameters) -> PatternResult<Vec<Span>> {
    prepare(params).map(|(_, _, spans)| spans)
}

/// x coordinates of the panel edges: tuck fold, the two inner folds, and panel 3's free edge.
pub fn panel_edges(params: &PrismParameters) -> PatternResult<[f64; 4]> {
    let m = derive(params)?;
    Ok(PrismFrame::new(&m).x)
}

/// Generate the triangular prism pattern.
pub fn generate(params: &PrismParameters) -> PatternResult<PatternLayout> {
    let (m, frame, spans) = prepare(params)?;
    debug!(
        "Generating prism pattern: side {}, depth {}, {} side locks",
        m.side,
        m.depth,
        spans.len()
    );

    let mut builder = PatternBuilder::new();
    emit_tuck_tab(&mut builder, &m, &frame, &spans);
    emit_lock_edge(&mut builder, &m, &frame, &spans);
    for x in [frame.x[1], frame.x[2]] {
        builder.fold(Point::new(x, frame.y_top), Point::new(x, frame.y_bottom));
    }
    emit_end_cap(
        &mut builder,
        &m,
        &frame,
        CapFrame {
            base: frame.y_top,
            outward: -1.0,
        },
    );
    emit_end_cap(
        &mut builder,
        &m,
        &frame,
        CapFrame {
            base: frame.y_bottom,
            outward: 1.0,
        },
    );
    Ok(builder.finish(size_of(&m)))
}

/// Overall size without generating any segments.
pub fn bounding_size(params: &PrismParameters) -> PatternResult<BoundingSize> {
    prepare(params).map(|(m, _, _)| size_of(&m))
}

impl DielineGenerator for PrismParameters {
    fn style(&self) -> BoxStyle {
        BoxStyle::TriangularPrism
    }

    fn generate(&self) -> PatternResult<PatternLayout> {
        generate(self)
    }

    fn bounding_size(&self) -> PatternResult<BoundingSize> {
        bounding_size(self)
    }
}
