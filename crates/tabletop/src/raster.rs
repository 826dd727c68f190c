//! SVG rasterization with resvg.

use resvg::usvg;
use tiny_skia::Pixmap;

use crate::export::ExportError;

/// Rasterize an SVG document onto a white pixmap.
///
/// The pixmap is `width * scale` by `height * scale` pixels, rounded, and at
/// least one pixel each way.
pub fn render_pixmap(svg: &str, width: f64, height: f64, scale: f32) -> Result<Pixmap, ExportError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let pixmap_width = ((width * scale as f64).round() as u32).max(1);
    let pixmap_height = ((height * scale as f64).round() as u32).max(1);

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height).ok_or(ExportError::Pixmap {
        width: pixmap_width,
        height: pixmap_height,
    })?;

    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    log::debug!("rasterized {}x{} at {}x", pixmap_width, pixmap_height, scale);
    Ok(pixmap)
}

/// Rasterize and encode as PNG.
pub fn export_png(svg: &str, width: f64, height: f64, scale: f32) -> Result<Vec<u8>, ExportError> {
    render_pixmap(svg, width, height, scale)?
        .encode_png()
        .map_err(|e| ExportError::PngEncode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10">
  <defs>
    <pattern id="p" patternUnits="userSpaceOnUse" width="10" height="10">
      <rect x="0" y="0" width="10" height="10" fill="#FF0000"/>
    </pattern>
  </defs>
  <rect x="0" y="0" width="10" height="10" fill="url(#p)"/>
</svg>"##;

    #[test]
    fn renders_pattern_fill() {
        let pixmap = render_pixmap(SQUARE, 10.0, 10.0, 3.0).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (30, 30));
        let center = pixmap.pixel(15, 15).unwrap();
        assert_eq!((center.red(), center.green(), center.blue()), (255, 0, 0));
    }

    #[test]
    fn background_is_white() {
        let empty = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"></svg>"#;
        let pixmap = render_pixmap(empty, 4.0, 4.0, 1.0).unwrap();
        let px = pixmap.pixel(1, 1).unwrap();
        assert_eq!((px.red(), px.green(), px.blue(), px.alpha()), (255, 255, 255, 255));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            render_pixmap("<not svg", 1.0, 1.0, 1.0),
            Err(ExportError::SvgParse(_))
        ));
        let err = render_pixmap("<not svg", 1.0, 1.0, 1.0).unwrap_err();
        assert!(std::error::Error::source(&err).is_some());
    }
}
