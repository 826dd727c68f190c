//! Stripe patterns - horizontal, vertical and diagonal.
//!
//! All three use a 10×10 tile. The straight variants fill half the tile;
//! the diagonal variant strokes the main anti-diagonal plus two short
//! corner segments so the stripe continues seamlessly across tile edges.

use crate::geometry::{Point, Rect};
use super::tile::{PathSegment, TilePrimitive, TileShape, TileTemplate};

const SIZE: f64 = 10.0;
const DIAGONAL_STROKE: f64 = 2.0;

/// Tile for the `stripes-horizontal` pattern.
pub fn horizontal_stripes_tile() -> TileTemplate {
    TileTemplate::new(SIZE, SIZE)
        .with(TilePrimitive::foreground(TileShape::Rect(Rect::new(0.0, 0.0, SIZE, SIZE / 2.0))))
}

/// Tile for the `stripes-vertical` pattern.
pub fn vertical_stripes_tile() -> TileTemplate {
    TileTemplate::new(SIZE, SIZE)
        .with(TilePrimitive::foreground(TileShape::Rect(Rect::new(0.0, 0.0, SIZE / 2.0, SIZE))))
}

/// Tile for the `stripes-diagonal` pattern.
pub fn diagonal_stripes_tile() -> TileTemplate {
    TileTemplate::new(SIZE, SIZE).with(TilePrimitive::stroke(
        vec![
            // top-left corner cap
            PathSegment::MoveTo(Point::new(-1.0, 1.0)),
            PathSegment::LineTo(Point::new(1.0, -1.0)),
            PathSegment::MoveTo(Point::new(0.0, SIZE)),
            PathSegment::LineTo(Point::new(SIZE, 0.0)),
            // bottom-right corner cap
            PathSegment::MoveTo(Point::new(SIZE - 1.0, SIZE + 1.0)),
            PathSegment::LineTo(Point::new(SIZE + 1.0, SIZE - 1.0)),
        ],
        DIAGONAL_STROKE,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::tile::{Paint, path_data};

    #[test]
    fn straight_stripes_fill_half_the_tile() {
        let h = horizontal_stripes_tile();
        let v = vertical_stripes_tile();
        assert_eq!(h.primitives[0].shape, TileShape::Rect(Rect::new(0.0, 0.0, 10.0, 5.0)));
        assert_eq!(v.primitives[0].shape, TileShape::Rect(Rect::new(0.0, 0.0, 5.0, 10.0)));
    }

    #[test]
    fn diagonal_has_corner_caps() {
        let tile = diagonal_stripes_tile();
        let TileShape::Path(segments) = &tile.primitives[0].shape else {
            panic!("diagonal stripes are a path");
        };
        assert_eq!(path_data(segments), "M-1,1 L1,-1 M0,10 L10,0 M9,11 L11,9");
        assert_eq!(tile.primitives[0].paint, Paint::Stroke { width: 2.0 });

        // Caps poke one unit past the tile on each side.
        let b = tile.content_bounds().unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-1.0, -1.0, 11.0, 11.0));
    }
}
