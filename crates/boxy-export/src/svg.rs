//! SVG writer
//!
//! The document is drawn at 1:1 in millimetres: the view box spans the pattern size and the
//! physical width and height carry an `mm` suffix. Cuts and folds go into separate groups so
//! cutting software can pick them apart by id.

use std::fmt::Write as _;
use std::path::Path;

use boxy_core::geometry::points_equal;
use boxy_core::{PatternLayout, Point, Role, Segment};
use tracing::info;

use crate::error::ExportResult;
use crate::options::ExportOptions;
use crate::style::RoleStyle;

/// Coordinate text with at most three decimals and no trailing zeros
pub(crate) fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn coord(p: Point) -> String {
    format!("{} {}", num(p.x), num(p.y))
}

/// Path data for consecutive segments, starting a new subpath whenever they are not joined
pub fn path_data<'a>(segments: impl IntoIterator<Item = &'a Segment>) -> String {
    let mut d = String::new();
    let mut pen: Option<Point> = None;
    for segment in segments {
        let start = segment.start();
        if !pen.is_some_and(|p| points_equal(&p, &start, 1e-9)) {
            if !d.is_empty() {
                d.push(' ');
            }
            let _ = write!(d, "M {}", coord(start));
        }
        match *segment {
            Segment::Line { to, .. } => {
                let _ = write!(d, " L {}", coord(to));
            }
            Segment::Arc { control, to, .. } => {
                let _ = write!(d, " Q {} {}", coord(control), coord(to));
            }
        }
        pen = Some(segment.end());
    }
    d
}

fn group(out: &mut String, layout: &PatternLayout, role: Role) {
    let style = RoleStyle::for_role(role);
    let dash = style
        .dash
        .map(|[on, off]| format!(r#" stroke-dasharray="{},{}""#, on, off))
        .unwrap_or_default();
    let _ = writeln!(
        out,
        r#"  <g id="{}" fill="none" stroke="{}" stroke-width="{}"{}>"#,
        role.name(),
        style.hex(),
        style.width,
        dash
    );
    let d = path_data(layout.with_role(role).map(|s| &s.segment));
    if !d.is_empty() {
        let _ = writeln!(out, r#"    <path d="{}"/>"#, d);
    }
    out.push_str("  </g>\n");
}

/// Render the layout as an SVG document.
pub fn to_svg_string(layout: &PatternLayout, options: &ExportOptions) -> String {
    let (w, h) = (layout.size.width, layout.size.height);
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}mm" height="{}mm" viewBox="0 0 {} {}">"#,
        num(w * options.svg_scale),
        num(h * options.svg_scale),
        num(w),
        num(h)
    );
    out.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    group(&mut out, layout, Role::Cut);
    group(&mut out, layout, Role::Fold);
    out.push_str("</svg>\n");
    out
}

pub fn write_svg(layout: &PatternLayout, path: &Path, options: &ExportOptions) -> ExportResult<()> {
    options.validate()?;
    let svg = to_svg_string(layout, options);
    std::fs::write(path, &svg)?;
    info!("Wrote SVG {} ({} bytes)", path.display(), svg.len());
    Ok(())
}
