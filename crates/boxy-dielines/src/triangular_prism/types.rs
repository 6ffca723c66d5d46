//! Type definitions for the triangular prism box

use serde::{Deserialize, Serialize};

/// Inputs for the Toblerone-style prism box. All lengths share one unit (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismParameters {
    /// Side of the equilateral end triangle (S)
    pub side: f64,
    /// Length of the box (D)
    pub depth: f64,
    /// Width of the tuck tab on the left of panel 1
    pub tuck_width: f64,
    pub tuck_round: f64,
    /// Perpendicular width of the tuck flap on the panel 1 end triangle
    pub end_tuck_width: f64,
    /// Lock tab length along the end triangle edge; the matching slot is 2 longer
    pub lock_tab_width: f64,
    /// Extra room reserved beyond each end triangle
    pub lock_tab_height: f64,
    /// Width of the side lock flaps, at most 75% of the tuck width
    pub side_lock_width: f64,
    /// Length of the slits above and below each side lock flap
    pub side_lock_slit_width: f64,
    pub side_lock_height: f64,
    pub side_lock_count: u32,
}

impl Default for PrismParameters {
    fn default() -> Self {
        Self {
            side: 60.0,
            depth: 200.0,
            tuck_width: 15.0,
            tuck_round: 5.0,
            end_tuck_width: 10.0,
            lock_tab_width: 15.0,
            lock_tab_height: 10.0,
            side_lock_width: 8.0,
            side_lock_slit_width: 8.0,
            side_lock_height: 15.0,
            side_lock_count: 2,
        }
    }
}

/// Values derived from [`PrismParameters`] after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrismMeasurements {
    pub side: f64,
    pub depth: f64,
    /// Height of the equilateral end triangle, `side * sqrt(3) / 2`
    pub triangle_height: f64,
    pub tuck: f64,
    pub tuck_radius: f64,
    pub end_tuck_width: f64,
    pub lock_tab_height: f64,
    /// Slot cut across the panel 1 end triangle fold
    pub slot_length: f64,
    pub slot_width: f64,
    pub side_lock_width: f64,
    pub side_lock_slit: f64,
    pub side_lock_height: f64,
    pub side_lock_count: u32,
    /// Corner radius of the U-shaped side lock flaps
    pub notch_radius: f64,
    /// Corner radius of the matching tabs on panel 3
    pub tab_radius: f64,
}
