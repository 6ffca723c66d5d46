//! PNG writer backed by tiny-skia

use std::path::Path;

use boxy_core::{PatternLayout, Role, Segment};
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};
use tracing::{info, warn};

use crate::error::{ExportError, ExportResult};
use crate::options::{ExportOptions, MAX_PNG_PIXELS};
use crate::style::RoleStyle;

/// Pixel dimensions of the raster for a layout
pub fn pixel_size(layout: &PatternLayout, options: &ExportOptions) -> ExportResult<(u32, u32)> {
    let scale = options.pixels_per_mm();
    let to_px = |mm: f64| (mm * scale).round();
    let (w, h) = (to_px(layout.size.width), to_px(layout.size.height));
    let limit = MAX_PNG_PIXELS as f64;
    if !(w >= 1.0 && h >= 1.0 && w <= limit && h <= limit) {
        return Err(ExportError::invalid_option(
            "png_dpi",
            format!(
                "{} dpi gives a {} x {} px image (limit {} px per side)",
                options.png_dpi, w, h, MAX_PNG_PIXELS
            ),
        ));
    }
    Ok((w as u32, h as u32))
}

fn stroke_for(style: &RoleStyle) -> Stroke {
    let dash = style.dash.and_then(|[on, off]| StrokeDash::new(vec![on, off], 0.0));
    if style.dash.is_some() && dash.is_none() {
        warn!("Ignoring unusable dash pattern {:?}", style.dash);
    }
    Stroke {
        width: style.width,
        line_cap: LineCap::Round,
        dash,
        ..Default::default()
    }
}

fn draw_role(pixmap: &mut Pixmap, layout: &PatternLayout, role: Role, transform: Transform) {
    let mut pb = PathBuilder::new();
    for s in layout.with_role(role) {
        let start = s.segment.start();
        pb.move_to(start.x as f32, start.y as f32);
        match s.segment {
            Segment::Line { to, .. } => pb.line_to(to.x as f32, to.y as f32),
            Segment::Arc { control, to, .. } => {
                pb.quad_to(control.x as f32, control.y as f32, to.x as f32, to.y as f32)
            }
        }
    }
    let Some(path) = pb.finish() else {
        return;
    };

    let style = RoleStyle::for_role(role);
    let [r, g, b] = style.color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;
    pixmap.stroke_path(&path, &paint, &stroke_for(style), transform, None);
}

/// Rasterise the layout: white background, cuts then folds.
pub fn render(layout: &PatternLayout, options: &ExportOptions) -> ExportResult<Pixmap> {
    options.validate()?;
    let (width, height) = pixel_size(layout, options)?;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ExportError::Png(format!("cannot allocate {} x {} px", width, height)))?;
    pixmap.fill(Color::WHITE);

    let scale = options.pixels_per_mm() as f32;
    let transform = Transform::from_scale(scale, scale);
    draw_role(&mut pixmap, layout, Role::Cut, transform);
    draw_role(&mut pixmap, layout, Role::Fold, transform);
    Ok(pixmap)
}

/// Encoded PNG bytes
pub fn to_png_bytes(layout: &PatternLayout, options: &ExportOptions) -> ExportResult<Vec<u8>> {
    render(layout, options)?
        .encode_png()
        .map_err(|e| ExportError::Png(e.to_string()))
}

pub fn write_png(layout: &PatternLayout, path: &Path, options: &ExportOptions) -> ExportResult<()> {
    let bytes = to_png_bytes(layout, options)?;
    std::fs::write(path, &bytes)?;
    info!(
        "Wrote PNG {} at {} dpi ({} bytes)",
        path.display(),
        options.png_dpi,
        bytes.len()
    );
    Ok(())
}
