//! Lines pattern - one thick horizontal band per tile.
//!
//! The band covers the top half of a 20×20 tile, so tiling produces
//! alternating foreground/background stripes of equal width.

use crate::geometry::Rect;
use super::tile::{TilePrimitive, TileShape, TileTemplate};

/// Tile for the `lines` pattern.
pub fn lines_tile() -> TileTemplate {
    TileTemplate::new(20.0, 20.0)
        .with(TilePrimitive::foreground(TileShape::Rect(Rect::new(0.0, 0.0, 20.0, 10.0))))
}
