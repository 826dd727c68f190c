//! Waves pattern - one smooth crest per tile.
//!
//! A single cubic Bézier rises from the left edge at mid-height to a crest
//! and falls back to mid-height at the right edge.

use crate::geometry::Point;
use super::tile::{PathSegment, TilePrimitive, TileTemplate};

/// Tile for the `waves` pattern.
pub fn waves_tile() -> TileTemplate {
    TileTemplate::new(10.0, 10.0).with(TilePrimitive::stroke(
        vec![
            PathSegment::MoveTo(Point::new(0.0, 5.0)),
            PathSegment::CubicTo {
                ctrl1: Point::new(2.5, 0.0),
                ctrl2: Point::new(7.5, 0.0),
                to: Point::new(10.0, 5.0),
            },
        ],
        1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::tile::{TileShape, path_data};

    #[test]
    fn single_crest() {
        let tile = waves_tile();
        let TileShape::Path(segments) = &tile.primitives[0].shape else {
            panic!("waves are a path");
        };
        assert_eq!(path_data(segments), "M0,5 C2.5,0 7.5,0 10,5");
    }

    #[test]
    fn crest_stays_inside_tile() {
        let b = waves_tile().content_bounds().unwrap();
        assert!(b.min_y > 0.0 && b.max_y <= 10.0);
        assert_eq!((b.min_x, b.max_x), (0.0, 10.0));
    }
}
