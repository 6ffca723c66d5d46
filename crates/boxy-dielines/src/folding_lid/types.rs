//! Type definitions for the folding-lid shoe box family

use serde::{Deserialize, Serialize};

/// Inputs for the single-piece folding-lid shoe box. All lengths share one unit (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoeBoxParameters {
    /// Length of the base (L)
    pub length: f64,
    /// Width of the base (W)
    pub width: f64,
    /// Wall height (H)
    pub height: f64,
    /// Dust flap length as a percentage of W/2
    pub dust_flap_pct: f64,
    /// Dust flap outer edge as a percentage of H (the inner edge is always H)
    pub dust_outer_width_pct: f64,
    /// Width of the tuck flaps beside the lid top
    pub tuck_flap: f64,
    /// Corner radius of the tuck flaps
    pub tuck_round: f64,
    /// Height of the lid flap row, clamped to 50..H
    pub lid_flap_width: f64,
    /// Corner radius of the lid tucks, at most the lid flap width
    pub lid_tuck_radius: f64,
}

impl Default for ShoeBoxParameters {
    fn default() -> Self {
        Self {
            length: 254.0,
            width: 204.0,
            height: 98.0,
            dust_flap_pct: 50.0,
            dust_outer_width_pct: 60.0,
            tuck_flap: 20.0,
            tuck_round: 8.0,
            lid_flap_width: 50.0,
            lid_tuck_radius: 25.0,
        }
    }
}

/// Shoe box with double walls keyed into the base by tab/slot locks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockingShoeBoxParameters {
    #[serde(flatten)]
    pub lid: ShoeBoxParameters,
    pub lock_enabled: bool,
    pub lock_count: u32,
    /// Length of each lock tab along the base edge
    pub lock_length: f64,
    /// Gap between neighbouring locks
    pub lock_gap: f64,
    /// Depth of the slots, and of the tabs that key into them
    pub slot_width: f64,
}

impl Default for LockingShoeBoxParameters {
    fn default() -> Self {
        Self {
            lid: ShoeBoxParameters::default(),
            lock_enabled: true,
            lock_count: 2,
            lock_length: 30.0,
            lock_gap: 20.0,
            slot_width: 3.0,
        }
    }
}

/// Values derived from [`ShoeBoxParameters`] after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoldingLidMeasurements {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// How far the dust flaps reach out from the wall
    pub dust_length: f64,
    pub dust_outer_width: f64,
    /// Inset of the outer dust flap edge from each end of the wall
    pub dust_offset: f64,
    pub dust_chamfer: f64,
    pub tuck: f64,
    pub tuck_radius: f64,
    pub lid_flap_width: f64,
    pub lid_tuck_radius: f64,
    /// Space reserved on each side of the centre column, excluding lock tabs
    pub side_margin: f64,
}

/// Lock geometry for the locking variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LockMeasurements {
    pub count: u32,
    pub length: f64,
    pub gap: f64,
    /// Slot width after clamping to half the wall height
    pub slot_width: f64,
    /// Length of the base edge occupied by all locks and gaps
    pub total_span: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LockingMeasurements {
    pub lid: FoldingLidMeasurements,
    /// `None` when locks are disabled
    pub locks: Option<LockMeasurements>,
}
