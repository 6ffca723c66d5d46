//! # Boxy Export
//!
//! Writers that turn a [`PatternLayout`] into files a cutter or printer can use:
//!
//! - **svg**: 1:1 vector drawing in millimetres
//! - **cad**: DXF with `CUT` and `FOLD` layers
//! - **raster**: PNG at a chosen DPI
//!
//! Writers only read the layout; they never look at box parameters.

pub mod cad;
pub mod error;
pub mod format;
pub mod options;
pub mod raster;
pub mod style;
pub mod svg;

use std::path::Path;

use boxy_core::PatternLayout;

pub use error::{ExportError, ExportResult};
pub use format::ExportFormat;
pub use options::ExportOptions;
pub use style::RoleStyle;

/// Encode the layout in memory.
pub fn to_bytes(
    layout: &PatternLayout,
    format: ExportFormat,
    options: &ExportOptions,
) -> ExportResult<Vec<u8>> {
    options.validate()?;
    match format {
        ExportFormat::Svg => Ok(svg::to_svg_string(layout, options).into_bytes()),
        ExportFormat::Dxf => {
            let mut buffer = Vec::new();
            cad::write_dxf_to(layout, &mut buffer, options)?;
            Ok(buffer)
        }
        ExportFormat::Png => raster::to_png_bytes(layout, options),
    }
}

/// Write the layout to `path` in `format`.
pub fn export(
    layout: &PatternLayout,
    format: ExportFormat,
    path: &Path,
    options: &ExportOptions,
) -> ExportResult<()> {
    match format {
        ExportFormat::Svg => svg::write_svg(layout, path, options),
        ExportFormat::Dxf => cad::write_dxf(layout, path, options),
        ExportFormat::Png => raster::write_png(layout, path, options),
    }
}

/// Write the layout, picking the format from the file extension.
pub fn export_by_extension(
    layout: &PatternLayout,
    path: &Path,
    options: &ExportOptions,
) -> ExportResult<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    export(layout, format, path, options)?;
    Ok(format)
}
