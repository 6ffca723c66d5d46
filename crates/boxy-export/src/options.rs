//! Writer settings shared by all formats

use boxy_core::DEFAULT_FLATTEN_TOLERANCE;

use crate::error::{ExportError, ExportResult};

pub const DEFAULT_PNG_DPI: f64 = 96.0;

/// Raster images larger than this on either side are refused
pub const MAX_PNG_PIXELS: u32 = 20_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Multiplier on the SVG's physical width and height
    pub svg_scale: f64,
    pub png_dpi: f64,
    /// Maximum deviation when arcs are split into DXF lines
    pub arc_tolerance: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            svg_scale: 1.0,
            png_dpi: DEFAULT_PNG_DPI,
            arc_tolerance: DEFAULT_FLATTEN_TOLERANCE,
        }
    }
}

impl ExportOptions {
    pub fn validate(&self) -> ExportResult<()> {
        for (name, value) in [
            ("svg_scale", self.svg_scale),
            ("png_dpi", self.png_dpi),
            ("arc_tolerance", self.arc_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ExportError::invalid_option(
                    name,
                    format!("must be a positive number, got {}", value),
                ));
            }
        }
        Ok(())
    }

    /// Pixels per pattern unit at the configured DPI
    pub fn pixels_per_mm(&self) -> f64 {
        self.png_dpi / boxy_core::units::MM_PER_INCH
    }
}
