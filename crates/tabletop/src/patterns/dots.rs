//! Dots pattern - one centered dot per 10×10 tile.

use crate::geometry::Point;
use super::tile::{TilePrimitive, TileShape, TileTemplate};

/// Tile for the `dots` pattern.
pub fn dots_tile() -> TileTemplate {
    TileTemplate::new(10.0, 10.0).with(TilePrimitive::foreground(TileShape::Circle {
        center: Point::new(5.0, 5.0),
        radius: 2.0,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_is_centered() {
        let tile = dots_tile();
        assert_eq!(tile.primitives.len(), 1);
        assert_eq!(tile.primitives[0].shape.bounds().map(|b| (b.min_x, b.max_x)), Some((3.0, 7.0)));
        assert_eq!(tile.center(), Point::new(5.0, 5.0));
    }
}
