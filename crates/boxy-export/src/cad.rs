//! DXF writer
//!
//! Every segment becomes one or more `LINE` entities on the `CUT` or `FOLD` layer. Arcs are
//! flattened first, and Y is flipped so the drawing reads the same way up as the SVG.

use std::io::Write;
use std::path::Path;

use boxy_core::{PatternLayout, Point, Role};
use dxf::entities::{Entity, EntityType, Line};
use dxf::enums::Units;
use dxf::tables::Layer;
use dxf::{Color, Drawing};
use tracing::{debug, info};

use crate::error::ExportResult;
use crate::options::ExportOptions;

/// ACI colour index per layer
fn layer_color(role: Role) -> u8 {
    match role {
        Role::Cut => 7,
        Role::Fold => 5,
    }
}

fn dxf_point(p: Point, height: f64) -> dxf::Point {
    dxf::Point::new(p.x, height - p.y, 0.0)
}

/// Build the drawing for a layout.
pub fn to_drawing(layout: &PatternLayout, options: &ExportOptions) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.default_drawing_units = Units::Millimeters;

    for role in [Role::Cut, Role::Fold] {
        drawing.add_layer(Layer {
            name: role.name().to_string(),
            color: Color::from_index(layer_color(role)),
            ..Default::default()
        });
    }

    let height = layout.size.height;
    let mut count = 0usize;
    for s in &layout.segments {
        let points = s.segment.flatten(options.arc_tolerance);
        for pair in points.windows(2) {
            let line = Line::new(dxf_point(pair[0], height), dxf_point(pair[1], height));
            let mut entity = Entity::new(EntityType::Line(line));
            entity.common.layer = s.role.name().to_string();
            drawing.add_entity(entity);
            count += 1;
        }
    }
    debug!("DXF drawing holds {} lines", count);
    drawing
}

/// Write the layout as DXF to any writer.
pub fn write_dxf_to<W: Write>(
    layout: &PatternLayout,
    writer: &mut W,
    options: &ExportOptions,
) -> ExportResult<()> {
    options.validate()?;
    to_drawing(layout, options).save(writer)?;
    Ok(())
}

pub fn write_dxf(layout: &PatternLayout, path: &Path, options: &ExportOptions) -> ExportResult<()> {
    options.validate()?;
    let mut file = std::fs::File::create(path)?;
    write_dxf_to(layout, &mut file, options)?;
    info!("Wrote DXF {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxy_core::{BoundingSize, PatternSegment, Segment};

    fn layout() -> PatternLayout {
        let p = Point::new;
        PatternLayout::new(
            vec![
                PatternSegment::new(Role::Cut, Segment::line(p(10.0, 10.0), p(30.0, 10.0))),
                PatternSegment::new(
                    Role::Cut,
                    Segment::arc(p(30.0, 10.0), p(40.0, 10.0), p(40.0, 20.0)),
                ),
                PatternSegment::new(Role::Fold, Segment::line(p(10.0, 10.0), p(10.0, 40.0))),
            ],
            BoundingSize::new(50.0, 50.0),
        )
    }

    fn lines_on(drawing: &Drawing, layer: &str) -> Vec<Line> {
        drawing
            .entities()
            .filter(|e| e.common.layer == layer)
            .filter_map(|e| match &e.specific {
                EntityType::Line(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layers_and_flip() {
        let drawing = to_drawing(&layout(), &ExportOptions::default());
        let folds = lines_on(&drawing, "FOLD");
        assert_eq!(folds.len(), 1);
        assert_eq!((folds[0].p1.x, folds[0].p1.y), (10.0, 40.0));
        assert_eq!((folds[0].p2.x, folds[0].p2.y), (10.0, 10.0));

        let cuts = lines_on(&drawing, "CUT");
        // One straight line plus the flattened arc
        assert!(cuts.len() > 2);
        let last = cuts.last().unwrap();
        assert!((last.p2.x - 40.0).abs() < 1e-6 && (last.p2.y - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_coarser_tolerance_means_fewer_lines() {
        let fine = to_drawing(
            &layout(),
            &ExportOptions {
                arc_tolerance: 0.001,
                ..Default::default()
            },
        );
        let coarse = to_drawing(
            &layout(),
            &ExportOptions {
                arc_tolerance: 1.0,
                ..Default::default()
            },
        );
        assert!(lines_on(&fine, "CUT").len() > lines_on(&coarse, "CUT").len());
    }

    #[test]
    fn test_saves_and_loads() {
        let mut buffer = Vec::new();
        write_dxf_to(&layout(), &mut buffer, &ExportOptions::default()).unwrap();
        let loaded = Drawing::load(&mut buffer.as_slice()).unwrap();
        assert_eq!(lines_on(&loaded, "FOLD").len(), 1);
        assert!(loaded.layers().any(|l| l.name == "CUT"));
    }
}
