//! Crosshatch pattern - both tile diagonals, stroked.

use crate::geometry::Point;
use super::tile::{PathSegment, TilePrimitive, TileTemplate};

/// Tile for the `crosshatch` pattern.
pub fn crosshatch_tile() -> TileTemplate {
    TileTemplate::new(10.0, 10.0).with(TilePrimitive::stroke(
        vec![
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(10.0, 10.0)),
            PathSegment::MoveTo(Point::new(0.0, 10.0)),
            PathSegment::LineTo(Point::new(10.0, 0.0)),
        ],
        1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::tile::{Paint, path_data, TileShape};

    #[test]
    fn strokes_both_diagonals() {
        let tile = crosshatch_tile();
        let TileShape::Path(segments) = &tile.primitives[0].shape else {
            panic!("crosshatch is a path");
        };
        assert_eq!(path_data(segments), "M0,0 L10,10 M0,10 L10,0");
        assert_eq!(tile.primitives[0].paint, Paint::Stroke { width: 1.0 });
    }
}
