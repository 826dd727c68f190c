//! Checkerboard pattern - 2×2 cells per tile.
//!
//! Odd cells are painted with the background slot rather than left empty,
//! so they stay opaque when the fill is rotated or layered.

use crate::geometry::Rect;
use super::tile::{TilePrimitive, TileShape, TileTemplate};

const CELL: f64 = 10.0;

/// Tile for the `checkerboard` pattern.
pub fn checkerboard_tile() -> TileTemplate {
    let mut tile = TileTemplate::new(2.0 * CELL, 2.0 * CELL);

    for i in 0..2 {
        for j in 0..2 {
            let cell = TileShape::Rect(Rect::new(i as f64 * CELL, j as f64 * CELL, CELL, CELL));
            tile = tile.with(if (i + j) % 2 == 0 {
                TilePrimitive::foreground(cell)
            } else {
                TilePrimitive::background(cell)
            });
        }
    }

    tile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::tile::ColorSlot;

    #[test]
    fn diagonal_cells_are_foreground() {
        let tile = checkerboard_tile();
        assert_eq!(tile.primitives.len(), 4);

        for primitive in &tile.primitives {
            let TileShape::Rect(rect) = &primitive.shape else {
                panic!("checkerboard cells are rects");
            };
            let parity = ((rect.x / CELL) as usize + (rect.y / CELL) as usize) % 2;
            let expected = if parity == 0 { ColorSlot::Foreground } else { ColorSlot::Background };
            assert_eq!(primitive.slot, expected, "cell at ({}, {})", rect.x, rect.y);
        }
    }
}
