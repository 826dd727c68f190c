//! Zigzag pattern - one V per tile, stroked.
//!
//! The V runs from the top-left corner down to the bottom center and back up
//! to the top-right corner, so adjacent tiles join into a continuous zigzag.

use crate::geometry::Point;
use super::tile::{PathSegment, TilePrimitive, TileTemplate};

/// Tile for the `zigzag` pattern.
pub fn zigzag_tile() -> TileTemplate {
    TileTemplate::new(10.0, 10.0).with(TilePrimitive::stroke(
        vec![
            PathSegment::MoveTo(Point::new(0.0, 0.0)),
            PathSegment::LineTo(Point::new(5.0, 10.0)),
            PathSegment::LineTo(Point::new(10.0, 0.0)),
        ],
        1.0,
    ))
}
