//! Single-piece folding-lid shoe box
//!
//! The centre column is laid out top to bottom as lid flap, lid top, front wall, base and back
//! wall. Each side carries, row by row: a lid tuck, a tuck flap, a dust flap, an inner panel plus
//! side wall, and a second dust flap. Both sides are drawn by the same code with the outward
//! direction flipped.

pub mod types;

pub use types::{
    FoldingLidMeasurements, LockMeasurements, LockingMeasurements, LockingShoeBoxParameters,
    ShoeBoxParameters,
};

use boxy_core::{BoundingSize, PatternLayout, Point, Role, EPSILON};
use tracing::debug;

use crate::builder::PatternBuilder;
use crate::error::{log_clamp, require_non_negative, require_positive, PatternResult};
use crate::layout::{Span, PADDING};
use crate::style::{BoxStyle, DielineGenerator};

/// Smallest lid flap row
pub const MIN_LID_FLAP_WIDTH: f64 = 50.0;

/// Largest dust flap chamfer
pub const MAX_DUST_CHAMFER: f64 = 5.0;

fn clamp_pct(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn clamp_lid_flap(value: f64, height: f64) -> f64 {
    value.min(height).max(MIN_LID_FLAP_WIDTH)
}

fn clamp_tuck_round(value: f64, tuck: f64, width: f64) -> f64 {
    value.min(tuck).min(width / 2.0)
}

impl ShoeBoxParameters {
    /// Copy with every clamped field replaced by the value the generator uses.
    ///
    /// Only meaningful for parameters that pass validation.
    pub fn clamped(&self) -> Self {
        let lid_flap_width = clamp_lid_flap(self.lid_flap_width, self.height);
        Self {
            dust_flap_pct: clamp_pct(self.dust_flap_pct),
            dust_outer_width_pct: clamp_pct(self.dust_outer_width_pct),
            tuck_round: clamp_tuck_round(self.tuck_round, self.tuck_flap, self.width),
            lid_flap_width,
            lid_tuck_radius: self.lid_tuck_radius.min(lid_flap_width),
            ..*self
        }
    }
}

/// Validate the parameters and compute the clamped measurements.
pub fn derive(params: &ShoeBoxParameters) -> PatternResult<FoldingLidMeasurements> {
    let length = require_positive("length", params.length)?;
    let width = require_positive("width", params.width)?;
    let height = require_positive("height", params.height)?;
    let dust_pct = require_non_negative("dust_flap_pct", params.dust_flap_pct)?;
    let outer_pct = require_non_negative("dust_outer_width_pct", params.dust_outer_width_pct)?;
    let tuck = require_non_negative("tuck_flap", params.tuck_flap)?;
    let tuck_round = require_non_negative("tuck_round", params.tuck_round)?;
    let lid_flap = require_non_negative("lid_flap_width", params.lid_flap_width)?;
    let lid_radius = require_non_negative("lid_tuck_radius", params.lid_tuck_radius)?;

    let dust_length = log_clamp("dust_flap_pct", dust_pct, clamp_pct(dust_pct)) / 100.0 * (width / 2.0);
    let dust_outer_width =
        log_clamp("dust_outer_width_pct", outer_pct, clamp_pct(outer_pct)) / 100.0 * height;
    let dust_offset = (height - dust_outer_width) / 2.0;
    let dust_chamfer = MAX_DUST_CHAMFER
        .min(dust_length / 3.0)
        .min(dust_outer_width / 2.0);

    let tuck_radius = log_clamp(
        "tuck_round",
        tuck_round,
        clamp_tuck_round(tuck_round, tuck, width),
    );
    let lid_flap_width = log_clamp("lid_flap_width", lid_flap, clamp_lid_flap(lid_flap, height));
    let lid_tuck_radius = log_clamp("lid_tuck_radius", lid_radius, lid_radius.min(lid_flap_width));

    let side_margin = lid_flap_width
        .max(tuck)
        .max(dust_length)
        .max(2.0 * height);

    Ok(FoldingLidMeasurements {
        length,
        width,
        height,
        dust_length,
        dust_outer_width,
        dust_offset,
        dust_chamfer,
        tuck,
        tuck_radius,
        lid_flap_width,
        lid_tuck_radius,
        side_margin,
    })
}

/// Fold-line coordinates of a shoe box pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShoeBoxFrame {
    pub side: f64,
    pub ox: f64,
    pub oy: f64,
    pub y1: f64,
    pub y2: f64,
    pub y3: f64,
    pub y4: f64,
    pub y5: f64,
    pub length: f64,
}

impl ShoeBoxFrame {
    /// `extra_margin` widens both sides, for lock tabs that stick out past the side walls.
    pub fn new(m: &FoldingLidMeasurements, extra_margin: f64) -> Self {
        let side = m.side_margin + extra_margin;
        let ox = PADDING + side;
        let oy = PADDING;
        let y1 = oy + m.lid_flap_width;
        let y2 = y1 + m.width;
        let y3 = y2 + m.height;
        let y4 = y3 + m.width;
        let y5 = y4 + m.height;
        Self {
            side,
            ox,
            oy,
            y1,
            y2,
            y3,
            y4,
            y5,
            length: m.length,
        }
    }

    pub fn size(&self) -> BoundingSize {
        BoundingSize::new(
            self.length + 2.0 * self.side + 2.0 * PADDING,
            (self.y5 - self.oy) + 2.0 * PADDING,
        )
    }

    /// Left then right long edge of the centre column
    pub fn sides(&self) -> [WallSide; 2] {
        [
            WallSide {
                edge: self.ox,
                dir: -1.0,
            },
            WallSide {
                edge: self.ox + self.length,
                dir: 1.0,
            },
        ]
    }
}

/// One long edge of the centre column and the direction pointing away from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WallSide {
    pub edge: f64,
    pub dir: f64,
}

impl WallSide {
    /// Point `d` units outward from the edge
    pub fn at(&self, d: f64, y: f64) -> Point {
        Point::new(self.edge + self.dir * d, y)
    }
}

/// Emit the whole box outline. Fold and cut lines on the base rows skip the `locks` spans.
pub(crate) fn emit_shell(
    b: &mut PatternBuilder,
    m: &FoldingLidMeasurements,
    f: &ShoeBoxFrame,
    locks: &[Span],
) {
    for side in f.sides() {
        emit_lid_tuck(b, m, f, side);
        emit_tuck_flap(b, m, f, side);
        emit_dust_flap(b, m, side, f.y2, f.y3);
        emit_base_wing(b, m, f, side, locks);
        emit_dust_flap(b, m, side, f.y4, f.y5);
    }

    let right = f.ox + f.length;
    let across = |y: f64| (Point::new(f.ox, y), Point::new(right, y));

    let (a, z) = across(f.oy);
    b.cut(a, z);
    for y in [f.y1, f.y2, f.y3, f.y4] {
        let (a, z) = across(y);
        b.fold(a, z);
    }
    let (a, z) = across(f.y5);
    b.cut(a, z);
}

fn emit_lid_tuck(b: &mut PatternBuilder, m: &FoldingLidMeasurements, f: &ShoeBoxFrame, side: WallSide) {
    let w = m.lid_flap_width;
    let r = m.lid_tuck_radius;

    b.cut(side.at(w, f.y1), side.at(w, f.oy + r));
    b.cut_corner(side.at(w, f.oy + r), side.at(w, f.oy), side.at(w - r, f.oy));
    b.cut(side.at(w - r, f.oy), side.at(0.0, f.oy));
    b.cut(side.at(w, f.y1), side.at(0.0, f.y1));
    b.fold(side.at(0.0, f.oy), side.at(0.0, f.y1));
}

fn emit_tuck_flap(b: &mut PatternBuilder, m: &FoldingLidMeasurements, f: &ShoeBoxFrame, side: WallSide) {
    if m.tuck <= EPSILON {
        b.cut(side.at(0.0, f.y1), side.at(0.0, f.y2));
        return;
    }

    let t = m.tuck;
    let r = m.tuck_radius;
    b.cut(side.at(0.0, f.y1), side.at(t - r, f.y1));
    b.cut_corner(side.at(t - r, f.y1), side.at(t, f.y1), side.at(t, f.y1 + r));
    b.cut(side.at(t, f.y1 + r), side.at(t, f.y2 - r));
    b.cut_corner(side.at(t, f.y2 - r), side.at(t, f.y2), side.at(t - r, f.y2));
    b.cut(side.at(t - r, f.y2), side.at(0.0, f.y2));
    b.fold(side.at(0.0, f.y1), side.at(0.0, f.y2));
}

/// Chamfered trapezoid hinged on the wall edge between `top` and `bottom`
fn emit_dust_flap(b: &mut PatternBuilder, m: &FoldingLidMeasurements, side: WallSide, top: f64, bottom: f64) {
    if m.dust_length <= EPSILON {
        b.cut(side.at(0.0, top), side.at(0.0, bottom));
        return;
    }

    let d = m.dust_length;
    let r = m.dust_chamfer;
    let off = m.dust_offset;
    b.cut_path(&[
        side.at(0.0, top),
        side.at(d - r, top + off),
        side.at(d, top + off + r),
        side.at(d, bottom - off - r),
        side.at(d - r, bottom - off),
        side.at(0.0, bottom),
    ]);
    b.fold(side.at(0.0, top), side.at(0.0, bottom));
}

/// Inner panel and side wall beside the base
fn emit_base_wing(
    b: &mut PatternBuilder,
    m: &FoldingLidMeasurements,
    f: &ShoeBoxFrame,
    side: WallSide,
    locks: &[Span],
) {
    let h = m.height;
    let inner = side.at(h, 0.0).x;
    let outer = side.at(2.0 * h, 0.0).x;

    b.vertical_with_gaps(Role::Fold, side.edge, f.y3, f.y4, locks);
    b.fold(Point::new(inner, f.y3), Point::new(inner, f.y4));
    b.cut(side.at(0.0, f.y3), side.at(h, f.y3));
    b.cut(side.at(0.0, f.y4), side.at(h, f.y4));

    b.cut(side.at(h, f.y3), side.at(2.0 * h, f.y3));
    b.vertical_with_gaps(Role::Cut, outer, f.y3, f.y4, locks);
    b.cut(side.at(2.0 * h, f.y4), side.at(h, f.y4));
}

/// Generate the folding-lid shoe box pattern.
pub fn generate(params: &ShoeBoxParameters) -> PatternResult<PatternLayout> {
    let m = derive(params)?;
    debug!(
        "Generating folding-lid pattern for {} x {} x {}",
        m.length, m.width, m.height
    );

    let frame = ShoeBoxFrame::new(&m, 0.0);
    let mut builder = PatternBuilder::new();
    emit_shell(&mut builder, &m, &frame, &[]);
    Ok(builder.finish(frame.size()))
}

/// Overall size without generating any segments.
pub fn bounding_size(params: &ShoeBoxParameters) -> PatternResult<BoundingSize> {
    let m = derive(params)?;
    Ok(ShoeBoxFrame::new(&m, 0.0).size())
}

impl DielineGenerator for ShoeBoxParameters {
    fn style(&self) -> BoxStyle {
        BoxStyle::FoldingLid
    }

    fn generate(&self) -> PatternResult<PatternLayout> {
        generate(self)
    }

    fn bounding_size(&self) -> PatternResult<BoundingSize> {
        bounding_size(self)
    }
}
