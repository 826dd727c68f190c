//! Thin lines pattern - five narrow strips per tile.

use crate::geometry::Rect;
use super::tile::{TilePrimitive, TileShape, TileTemplate};

const STRIPS: usize = 5;
const STRIP_HEIGHT: f64 = 2.0;
const STRIP_PITCH: f64 = 4.0;

/// Tile for the `thinlines` pattern.
///
/// Strips of height 2 start every 4 units from the top of a 20×20 tile.
pub fn thinlines_tile() -> TileTemplate {
    (0..STRIPS).fold(TileTemplate::new(20.0, 20.0), |tile, i| {
        let y = i as f64 * STRIP_PITCH;
        tile.with(TilePrimitive::foreground(TileShape::Rect(Rect::new(0.0, y, 20.0, STRIP_HEIGHT))))
    })
}
