//! Triangles pattern - a row of narrow triangles.
//!
//! Three triangles are laid out side by side from the tile origin. Only the
//! first fits the 8-wide tile; the others fall outside it and are clipped.

use crate::geometry::{Point, Polygon};
use super::tile::{TilePrimitive, TileShape, TileTemplate};

const WIDTH: f64 = 8.0;
const HEIGHT: f64 = 20.0;

/// Tile for the `triangles` pattern.
pub fn triangles_tile() -> TileTemplate {
    (0..3).fold(TileTemplate::new(WIDTH, HEIGHT), |tile, i| {
        let x = i as f64 * WIDTH;
        let triangle = Polygon::new(vec![
            Point::new(x, 0.0),
            Point::new(x + WIDTH, 0.0),
            Point::new(x + WIDTH / 2.0, HEIGHT),
        ]);
        tile.with(TilePrimitive::foreground(TileShape::Polygon(triangle)))
    })
}
