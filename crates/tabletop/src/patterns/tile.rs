//! Uncolored tile templates produced by the pattern generators.
//!
//! A template is the kind-specific geometry of one repeating tile. It says
//! nothing about actual colors: every primitive carries a [`ColorSlot`] that
//! the fill registry later swaps for the foreground or background color.

use lyon_geom::{CubicBezierSegment, point};

use crate::geometry::{Bounds, Point, Polygon, Rect};

/// Which of the two fill colors a primitive is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Foreground,
    /// Painted with the background color explicitly instead of being left
    /// transparent (checkerboard's odd cells).
    Background,
}

/// How a primitive is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill,
    Stroke { width: f64 },
}

/// One absolute path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
}

/// Geometry of a single drawable inside a tile.
#[derive(Debug, Clone, PartialEq)]
pub enum TileShape {
    Rect(Rect),
    Polygon(Polygon),
    Circle { center: Point, radius: f64 },
    Path(Vec<PathSegment>),
}

/// A drawable plus the slot and paint it is rendered with.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePrimitive {
    pub shape: TileShape,
    pub slot: ColorSlot,
    pub paint: Paint,
}

/// The generator's output: tile size and ordered primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct TileTemplate {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<TilePrimitive>,
}

impl TileShape {
    /// Geometric bounds, ignoring stroke width.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            TileShape::Rect(rect) => Some(rect.bounds()),
            TileShape::Polygon(polygon) => polygon.bounds(),
            TileShape::Circle { center, radius } => Some(Bounds {
                min_x: center.x - radius,
                min_y: center.y - radius,
                max_x: center.x + radius,
                max_y: center.y + radius,
            }),
            TileShape::Path(segments) => path_bounds(segments),
        }
    }
}

/// Bounds of a path. Cubic segments are bounded exactly (extrema, not
/// control points) via lyon_geom.
fn path_bounds(segments: &[PathSegment]) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    let mut current = Point::new(0.0, 0.0);

    let mut include = |b: Bounds| {
        bounds = Some(match bounds {
            None => b,
            Some(acc) => acc.union(&b),
        });
    };

    for segment in segments {
        match *segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                include(Bounds { min_x: p.x, min_y: p.y, max_x: p.x, max_y: p.y });
                current = p;
            }
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                let curve = CubicBezierSegment {
                    from: point(current.x, current.y),
                    ctrl1: point(ctrl1.x, ctrl1.y),
                    ctrl2: point(ctrl2.x, ctrl2.y),
                    to: point(to.x, to.y),
                };
                let b = curve.bounding_box();
                include(Bounds { min_x: b.min.x, min_y: b.min.y, max_x: b.max.x, max_y: b.max.y });
                current = to;
            }
        }
    }

    bounds
}

/// Serialize path segments as SVG path data (`M-1,1 L1,-1`).
pub fn path_data(segments: &[PathSegment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            PathSegment::MoveTo(p) => format!("M{},{}", p.x, p.y),
            PathSegment::LineTo(p) => format!("L{},{}", p.x, p.y),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => format!(
                "C{},{} {},{} {},{}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl TilePrimitive {
    /// Solid shape in the foreground color.
    pub fn foreground(shape: TileShape) -> Self {
        Self { shape, slot: ColorSlot::Foreground, paint: Paint::Fill }
    }

    /// Solid shape in the background color.
    pub fn background(shape: TileShape) -> Self {
        Self { shape, slot: ColorSlot::Background, paint: Paint::Fill }
    }

    /// Outline-only path in the foreground color.
    pub fn stroke(segments: Vec<PathSegment>, width: f64) -> Self {
        Self {
            shape: TileShape::Path(segments),
            slot: ColorSlot::Foreground,
            paint: Paint::Stroke { width },
        }
    }
}

impl TileTemplate {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, primitives: Vec::new() }
    }

    /// Append a primitive (drawn above everything added before it).
    pub fn with(mut self, primitive: TilePrimitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Rotation pivot for rotated fills.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Union of all primitive bounds.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.primitives
            .iter()
            .filter_map(|p| p.shape.bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_bounds_use_curve_extrema() {
        // Control points reach y=0 but the curve itself only reaches y=1.25.
        let segments = vec![
            PathSegment::MoveTo(Point::new(0.0, 5.0)),
            PathSegment::CubicTo {
                ctrl1: Point::new(2.5, 0.0),
                ctrl2: Point::new(7.5, 0.0),
                to: Point::new(10.0, 5.0),
            },
        ];
        let b = TileShape::Path(segments).bounds().unwrap();
        assert!((b.min_y - 1.25).abs() < 1e-9, "got {}", b.min_y);
        assert_eq!(b.max_y, 5.0);
        assert_eq!(b.min_x, 0.0);
        assert_eq!(b.max_x, 10.0);
    }

    #[test]
    fn path_data_formatting() {
        let segments = vec![
            PathSegment::MoveTo(Point::new(-1.0, 1.0)),
            PathSegment::LineTo(Point::new(1.0, -1.0)),
        ];
        assert_eq!(path_data(&segments), "M-1,1 L1,-1");
    }

    #[test]
    fn template_center_and_bounds() {
        let template = TileTemplate::new(8.0, 20.0)
            .with(TilePrimitive::foreground(TileShape::Rect(Rect::new(0.0, 0.0, 4.0, 4.0))))
            .with(TilePrimitive::foreground(TileShape::Circle {
                center: Point::new(6.0, 10.0),
                radius: 2.0,
            }));
        assert_eq!(template.center(), Point::new(4.0, 10.0));
        let b = template.content_bounds().unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (0.0, 0.0, 8.0, 12.0));
    }
}
