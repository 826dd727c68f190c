//! Grid pattern - a half-width cross in the corner of each tile.
//!
//! One horizontal bar and one vertical bar, both 5 wide, overlap in the
//! top-left corner of a 10×10 tile. Tiled, the bars read as a grid of
//! heavy lines with square background windows.

use crate::geometry::Rect;
use super::tile::{TilePrimitive, TileShape, TileTemplate};

/// Tile for the `grid` pattern.
pub fn grid_tile() -> TileTemplate {
    TileTemplate::new(10.0, 10.0)
        .with(TilePrimitive::foreground(TileShape::Rect(Rect::new(0.0, 0.0, 10.0, 5.0))))
        .with(TilePrimitive::foreground(TileShape::Rect(Rect::new(0.0, 0.0, 5.0, 10.0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_then_vertical_bar() {
        let tile = grid_tile();
        assert_eq!((tile.width, tile.height), (10.0, 10.0));
        assert_eq!(
            tile.primitives.iter().map(|p| p.shape.clone()).collect::<Vec<_>>(),
            vec![
                TileShape::Rect(Rect::new(0.0, 0.0, 10.0, 5.0)),
                TileShape::Rect(Rect::new(0.0, 0.0, 5.0, 10.0)),
            ]
        );
    }

    #[test]
    fn bars_stay_inside_tile() {
        let b = grid_tile().content_bounds().unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 10.0, 10.0));
    }
}
