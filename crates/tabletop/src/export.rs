//! Scene export to SVG and PNG.
//!
//! The SVG document is written with `quick-xml`:
//!
//! ```text
//! <svg viewBox="0 0 W H">
//!   <defs>      every pattern fill in the registry, creation order
//!   <g id="shapes-group">
//!     <polygon class="shape" data-index="0" fill="url(#...)"/>
//!     ...
//! ```
//!
//! PNG output rasterizes that same document (see [`crate::raster`]).

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use thiserror::Error;

use crate::fill::{PaintedPrimitive, PatternFill};
use crate::patterns::tile::path_data;
use crate::patterns::{Paint, TileShape};
use crate::raster;
use crate::registry::FillRegistry;
use crate::scene::{ShapeGeometry, ShapeStore};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const HIGHLIGHT_COLOR: &str = "#FF3B30";

/// Errors producing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write SVG")]
    Xml(#[source] std::io::Error),

    #[error("generated SVG is not UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to parse generated SVG")]
    SvgParse(#[from] resvg::usvg::Error),

    #[error("could not allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    PngEncode(String),

    #[error("cannot tell export format from {path:?} (expected .svg or .png)")]
    UnknownFormat { path: String },

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(ExportFormat::Svg),
            "png" => Some(ExportFormat::Png),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Svg => "SVG",
            ExportFormat::Png => "PNG",
        })
    }
}

/// Knobs for a single export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// PNG pixels per scene unit. Ignored for SVG.
    pub scale: f32,
    /// Outline this shape (used by the live preview).
    pub highlight: Option<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { scale: 1.0, highlight: None }
    }
}

/// Export the scene in the requested format.
pub fn export(
    store: &ShapeStore,
    registry: &FillRegistry,
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    let svg = render_svg(store, registry, options)?;
    match format {
        ExportFormat::Svg => Ok(svg.into_bytes()),
        ExportFormat::Png => {
            let view = store.view_box();
            raster::export_png(&svg, view.width(), view.height(), options.scale)
        }
    }
}

/// Render the scene as a standalone SVG document.
pub fn render_svg(
    store: &ShapeStore,
    registry: &FillRegistry,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    let view = store.view_box();
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let width = view.width().to_string();
    let height = view.height().to_string();
    let view_box = format!("0 0 {width} {height}");
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", view_box.as_str()));
    write(&mut writer, Event::Start(root))?;

    write(&mut writer, Event::Start(BytesStart::new("defs")))?;
    for fill in registry.pattern_fills() {
        write_pattern(&mut writer, fill)?;
    }
    write(&mut writer, Event::End(BytesEnd::new("defs")))?;

    let mut group = BytesStart::new("g");
    group.push_attribute(("id", "shapes-group"));
    write(&mut writer, Event::Start(group))?;

    for (index, shape) in store.iter().enumerate() {
        let highlighted = options.highlight == Some(index);
        let mut element = geometry_element(shape.geometry());
        element.push_attribute(("fill", shape.fill().fill_ref().as_str()));
        element.push_attribute(("class", if highlighted { "shape selected" } else { "shape" }));
        element.push_attribute(("data-index", index.to_string().as_str()));
        if highlighted {
            element.push_attribute(("stroke", HIGHLIGHT_COLOR));
            element.push_attribute(("stroke-width", "1.5"));
        }
        write(&mut writer, Event::Empty(element))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("g")))?;
    write(&mut writer, Event::End(BytesEnd::new("svg")))?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

/// Write an export to `path`, choosing the format from its extension.
pub fn save(
    store: &ShapeStore,
    registry: &FillRegistry,
    path: &Path,
    options: &ExportOptions,
) -> Result<ExportFormat, ExportError> {
    let format = ExportFormat::from_path(path).ok_or_else(|| ExportError::UnknownFormat {
        path: path.display().to_string(),
    })?;
    let bytes = export(store, registry, format, options)?;
    std::fs::write(path, bytes)?;
    log::info!("wrote {} to {}", format, path.display());
    Ok(format)
}

// ============================================================================
// Elements
// ============================================================================

fn write<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), ExportError> {
    writer.write_event(event).map_err(ExportError::Xml)
}

fn write_pattern<W: std::io::Write>(writer: &mut Writer<W>, fill: &PatternFill) -> Result<(), ExportError> {
    let width = fill.width.to_string();
    let height = fill.height.to_string();

    let mut pattern = BytesStart::new("pattern");
    pattern.push_attribute(("id", fill.id.as_str()));
    pattern.push_attribute(("patternUnits", "userSpaceOnUse"));
    pattern.push_attribute(("width", width.as_str()));
    pattern.push_attribute(("height", height.as_str()));
    if let Some(rotation) = fill.rotation {
        let transform = format!(
            "rotate({} {} {})",
            rotation.degrees, rotation.center.x, rotation.center.y
        );
        pattern.push_attribute(("patternTransform", transform.as_str()));
    }
    write(writer, Event::Start(pattern))?;

    for primitive in &fill.primitives {
        write(writer, Event::Empty(primitive_element(primitive)))?;
    }

    write(writer, Event::End(BytesEnd::new("pattern")))
}

fn primitive_element(primitive: &PaintedPrimitive) -> BytesStart<'static> {
    let mut element = match &primitive.shape {
        TileShape::Rect(rect) => rect_element(rect.x, rect.y, rect.width, rect.height),
        TileShape::Polygon(polygon) => {
            let mut e = BytesStart::new("polygon");
            e.push_attribute(("points", polygon.to_svg_points().as_str()));
            e
        }
        TileShape::Circle { center, radius } => {
            let mut e = BytesStart::new("circle");
            e.push_attribute(("cx", center.x.to_string().as_str()));
            e.push_attribute(("cy", center.y.to_string().as_str()));
            e.push_attribute(("r", radius.to_string().as_str()));
            e
        }
        TileShape::Path(segments) => {
            let mut e = BytesStart::new("path");
            e.push_attribute(("d", path_data(segments).as_str()));
            e
        }
    };

    let color = primitive.color.to_string();
    match primitive.paint {
        Paint::Fill => element.push_attribute(("fill", color.as_str())),
        Paint::Stroke { width } => {
            element.push_attribute(("fill", "none"));
            element.push_attribute(("stroke", color.as_str()));
            element.push_attribute(("stroke-width", width.to_string().as_str()));
        }
    }
    element
}

fn geometry_element(geometry: &ShapeGeometry) -> BytesStart<'static> {
    match geometry {
        ShapeGeometry::Rect(rect) => rect_element(rect.x, rect.y, rect.width, rect.height),
        ShapeGeometry::Polygon(polygon) => {
            let mut e = BytesStart::new("polygon");
            e.push_attribute(("points", polygon.to_svg_points().as_str()));
            e
        }
    }
}

fn rect_element(x: f64, y: f64, width: f64, height: f64) -> BytesStart<'static> {
    let mut e = BytesStart::new("rect");
    e.push_attribute(("x", x.to_string().as_str()));
    e.push_attribute(("y", y.to_string().as_str()));
    e.push_attribute(("width", width.to_string().as_str()));
    e.push_attribute(("height", height.to_string().as_str()));
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::fill::FillKey;
    use crate::patterns::PatternKind;
    use crate::rotation::Rotation;
    use crate::scene::LayoutSpec;

    fn scene() -> (ShapeStore, FillRegistry) {
        let mut registry = FillRegistry::new();
        let store = ShapeStore::create(LayoutSpec::Tabletop, Color::BLACK, &mut registry).unwrap();
        (store, registry)
    }

    #[test]
    fn baseline_scene_has_empty_defs_and_every_shape() {
        let (store, registry) = scene();
        let svg = render_svg(&store, &registry, &ExportOptions::default()).unwrap();

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 220 70""#));
        assert!(svg.contains(r#"<g id="shapes-group">"#));
        assert_eq!(svg.matches(r#"class="shape""#).count(), 14);
        assert!(svg.contains(r#"data-index="13""#));
        assert!(!svg.contains("<pattern"));
        assert!(svg.contains(r##"fill="#C5E8A5""##));
    }

    #[test]
    fn pattern_defs_carry_rotation_and_colors() {
        let (mut store, mut registry) = scene();
        let key = FillKey::new(
            PatternKind::Crosshatch,
            Color::WHITE,
            Color::rgb(0x92, 0x5A, 0x9E),
            Rotation::new(90).unwrap(),
        );
        store.apply_fill(2, key, &mut registry).unwrap();
        let svg = render_svg(&store, &registry, &ExportOptions::default()).unwrap();

        assert!(svg.contains(r#"<pattern id="crosshatch-bgFFFFFF-fg925A9E-rot90" patternUnits="userSpaceOnUse" width="10" height="10" patternTransform="rotate(90 5 5)">"#));
        assert!(svg.contains(r##"<path d="M0,0 L10,10 M0,10 L10,0" fill="none" stroke="#925A9E" stroke-width="1"/>"##));
        assert!(svg.contains(r#"fill="url(#crosshatch-bgFFFFFF-fg925A9E-rot90)""#));
    }

    #[test]
    fn highlight_marks_one_shape() {
        let (store, registry) = scene();
        let options = ExportOptions { highlight: Some(4), ..ExportOptions::default() };
        let svg = render_svg(&store, &registry, &options).unwrap();
        assert_eq!(svg.matches("shape selected").count(), 1);
        assert!(svg.contains(HIGHLIGHT_COLOR));
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("out.SVG")), Some(ExportFormat::Svg));
        assert_eq!(ExportFormat::from_path(Path::new("a/b.png")), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_path(Path::new("design.pdf")), None);
        assert_eq!(ExportFormat::from_path(Path::new("design")), None);
    }

    #[test]
    fn write_failures_keep_their_source() {
        use std::error::Error as _;

        let inner = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let err = ExportError::Xml(inner);
        assert_eq!(err.to_string(), "failed to write SVG");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("disk full"));

        let utf8 = String::from_utf8(vec![0xFF]).unwrap_err();
        assert!(ExportError::from(utf8).source().is_some());
    }

    #[test]
    fn png_export_has_scaled_dimensions() {
        let (store, registry) = scene();
        let options = ExportOptions { scale: 2.0, highlight: None };
        let png = export(&store, &registry, ExportFormat::Png, &options).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        // IHDR width/height, big-endian, right after the 8-byte signature and 8-byte chunk header.
        let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        assert_eq!((width, height), (440, 140));
    }
}
