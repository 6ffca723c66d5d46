//! Writes every style in every format to a temporary directory

use boxy_core::Role;
use boxy_dielines::{BoxStyle, DielineGenerator};
use boxy_export::{export, export_by_extension, to_bytes, ExportError, ExportFormat, ExportOptions};
use tempfile::TempDir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn test_all_styles_all_formats() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let options = ExportOptions {
        png_dpi: 25.4,
        ..Default::default()
    };

    for style in BoxStyle::ALL {
        let layout = style.default_parameters().generate().unwrap();
        for format in ExportFormat::ALL {
            let path = dir
                .path()
                .join(format!("{}.{}", style.file_prefix(), format.extension()));
            export(&layout, format, &path, &options).unwrap();
            let bytes = std::fs::read(&path).unwrap();
            assert!(!bytes.is_empty(), "{} is empty", path.display());
            // DXF headers carry timestamps
            if format != ExportFormat::Dxf {
                assert_eq!(bytes, to_bytes(&layout, format, &options).unwrap());
            }
        }
    }
}

#[test]
fn test_svg_matches_pattern_size() {
    let layout = BoxStyle::FoldingLid.default_parameters().generate().unwrap();
    let bytes = to_bytes(&layout, ExportFormat::Svg, &ExportOptions::default()).unwrap();
    let svg = String::from_utf8(bytes).unwrap();

    assert!(svg.contains(r#"width="766mm" height="774mm" viewBox="0 0 766 774""#));
    assert!(svg.contains(r#"<g id="CUT""#));
    assert!(svg.contains(r#"<g id="FOLD""#));
}

#[test]
fn test_dxf_layers_match_roles() {
    let layout = BoxStyle::LockingFoldingLid
        .default_parameters()
        .generate()
        .unwrap();
    let bytes = to_bytes(&layout, ExportFormat::Dxf, &ExportOptions::default()).unwrap();
    let drawing = dxf::Drawing::load(&mut bytes.as_slice()).unwrap();

    let on_layer = |name: &str| {
        drawing
            .entities()
            .filter(|e| e.common.layer == name)
            .count()
    };
    // Arcs are split, so each layer has at least as many lines as segments
    assert!(on_layer("CUT") >= layout.with_role(Role::Cut).count());
    assert_eq!(on_layer("FOLD"), layout.with_role(Role::Fold).count());
}

#[test]
fn test_png_signature_and_size() {
    let layout = BoxStyle::TriangularPrism
        .default_parameters()
        .generate()
        .unwrap();
    let options = ExportOptions {
        png_dpi: 50.8,
        ..Default::default()
    };
    let bytes = to_bytes(&layout, ExportFormat::Png, &options).unwrap();
    assert_eq!(bytes[..8], PNG_SIGNATURE);

    let pixmap = tiny_skia::Pixmap::decode_png(&bytes).unwrap();
    assert_eq!(pixmap.width(), (layout.size.width * 2.0).round() as u32);
    assert_eq!(pixmap.height(), (layout.size.height * 2.0).round() as u32);
}

#[test]
fn test_extension_picks_format() {
    let dir = TempDir::new().unwrap();
    let layout = BoxStyle::FoldingLid.default_parameters().generate().unwrap();

    let path = dir.path().join("lid.DXF");
    let format = export_by_extension(&layout, &path, &ExportOptions::default()).unwrap();
    assert_eq!(format, ExportFormat::Dxf);
    assert!(path.exists());

    let err = export_by_extension(&layout, &dir.path().join("lid.pdf"), &ExportOptions::default());
    assert!(matches!(err, Err(ExportError::UnsupportedFormat(_))));
}

#[test]
fn test_invalid_options_write_nothing() {
    let dir = TempDir::new().unwrap();
    let layout = BoxStyle::FoldingLid.default_parameters().generate().unwrap();
    let options = ExportOptions {
        svg_scale: -1.0,
        ..Default::default()
    };
    for format in ExportFormat::ALL {
        let path = dir.path().join(format!("bad.{}", format));
        assert!(export(&layout, format, &path, &options).is_err());
        assert!(!path.exists());
    }
}
