//! Folding-lid shoe box with a double-wall lock
//!
//! The side walls fold over onto the inner panels and key into the base: each lock is a tab on
//! the side wall's outer edge and a matching slot straddling the base/inner-panel fold. Locks
//! are centred along the base edge, and the fold is broken around every slot.

use boxy_core::{BoundingSize, PatternLayout};
use tracing::debug;

use crate::builder::PatternBuilder;
use crate::error::{
    log_clamp, require_count, require_non_negative, require_positive, PatternError, PatternResult,
};
use crate::folding_lid::{
    self, emit_shell, LockMeasurements, LockingMeasurements, LockingShoeBoxParameters,
    ShoeBoxFrame,
};
use crate::layout::{centered_spans, check_spans, total_span, Span};
use crate::style::{BoxStyle, DielineGenerator};

fn clamp_slot_width(value: f64, height: f64) -> f64 {
    value.min(height / 2.0)
}

impl LockingShoeBoxParameters {
    /// Copy with every clamped field replaced by the value the generator uses.
    pub fn clamped(&self) -> Self {
        Self {
            lid: self.lid.clamped(),
            slot_width: clamp_slot_width(self.slot_width, self.lid.height),
            ..*self
        }
    }
}

/// Validate the parameters and compute the clamped measurements.
pub fn derive(params: &LockingShoeBoxParameters) -> PatternResult<LockingMeasurements> {
    let lid = folding_lid::derive(&params.lid)?;
    if !params.lock_enabled {
        return Ok(LockingMeasurements { lid, locks: None });
    }

    let count = require_count("lock_count", params.lock_count)?;
    let length = require_positive("lock_length", params.lock_length)?;
    let gap = require_non_negative("lock_gap", params.lock_gap)?;
    let slot = require_non_negative("slot_width", params.slot_width)?;
    let slot_width = log_clamp("slot_width", slot, clamp_slot_width(slot, lid.height));

    // Slots reach slot_width into the base from both long edges
    if 2.0 * slot_width >= lid.length {
        return Err(PatternError::inconsistent(format!(
            "slots of width {} overlap across a base of length {}",
            slot_width, lid.length
        )));
    }

    let span = total_span(count, length, gap);
    if span >= lid.width {
        return Err(PatternError::out_of_range("lock span", span, 0.0, lid.width));
    }

    Ok(LockingMeasurements {
        lid,
        locks: Some(LockMeasurements {
            count,
            length,
            gap,
            slot_width,
            total_span: span,
        }),
    })
}

fn frame_for(m: &LockingMeasurements) -> ShoeBoxFrame {
    let extra = m.locks.map_or(0.0, |l| l.slot_width);
    ShoeBoxFrame::new(&m.lid, extra)
}

/// Derive, lay out and check the locks; shared by `generate` and `bounding_size`.
fn prepare(
    params: &LockingShoeBoxParameters,
) -> PatternResult<(LockingMeasurements, ShoeBoxFrame, Vec<Span>)> {
    let m = derive(params)?;
    let frame = frame_for(&m);
    let spans = spans_for(&m, &frame);
    check_spans("lock", &spans, frame.y3, frame.y4)?;
    Ok((m, frame, spans))
}

/// Lock positions along the base edge, top to bottom
pub fn lock_spans(params: &LockingShoeBoxParameters) -> PatternResult<Vec<Span>> {
    prepare(params).map(|(_, _, spans)| spans)
}

fn spans_for(m: &LockingMeasurements, f: &ShoeBoxFrame) -> Vec<Span> {
    match m.locks {
        Some(l) => centered_spans(f.y3, m.lid.width, l.count, l.length, l.gap),
        None => Vec::new(),
    }
}

/// Tabs on the side wall edges and slots across the base folds
fn emit_locks(
    b: &mut PatternBuilder,
    m: &LockingMeasurements,
    f: &ShoeBoxFrame,
    locks: &LockMeasurements,
    spans: &[Span],
) {
    let h = m.lid.height;
    let w = locks.slot_width;
    for side in f.sides() {
        for span in spans {
            let (s, e) = (span.start, span.end);
            b.cut_path(&[
                side.at(2.0 * h, s),
                side.at(2.0 * h + w, s),
                side.at(2.0 * h + w, e),
                side.at(2.0 * h, e),
            ]);
            b.cut_path(&[
                side.at(w, s),
                side.at(-w, s),
                side.at(-w, e),
                side.at(w, e),
                side.at(w, s),
            ]);
        }
    }
}

/// Generate the locking shoe box pattern.
pub fn generate(params: &LockingShoeBoxParameters) -> PatternResult<PatternLayout> {
    let (m, frame, spans) = prepare(params)?;
    debug!(
        "Generating locking pattern for {} x {} x {} with {} locks",
        m.lid.length,
        m.lid.width,
        m.lid.height,
        spans.len()
    );

    let mut builder = PatternBuilder::new();
    emit_shell(&mut builder, &m.lid, &frame, &spans);
    if let Some(locks) = &m.locks {
        emit_locks(&mut builder, &m, &frame, locks, &spans);
    }
    Ok(builder.finish(frame.size()))
}

/// Overall size without generating any segments.
pub fn bounding_size(params: &LockingShoeBoxParameters) -> PatternResult<BoundingSize> {
    prepare(params).map(|(_, frame, _)| frame.size())
}

impl DielineGenerator for LockingShoeBoxParameters {
    fn style(&self) -> BoxStyle {
        BoxStyle::LockingFoldingLid
    }

    fn generate(&self) -> PatternResult<PatternLayout> {
        generate(self)
    }

    fn bounding_size(&self) -> PatternResult<BoundingSize> {
        bounding_size(self)
    }
}
