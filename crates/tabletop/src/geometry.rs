//! Core geometry types for tabletop.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = can duplicate the value (`Copy` for small stack values)
//! - `PartialEq` = can compare with `==`

use crate::error::{Error, Result};

/// A 2D point in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// An axis-aligned rectangle given by origin and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A simple closed polygon.
///
/// ## Rust Lesson #4: Ownership & Vec
///
/// This struct OWNS its points. When it's dropped, they're freed.
/// `&[Point]` would be a BORROWED slice (read-only view).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Bounds {
    /// Smallest box containing every point, or `None` for no points.
    pub fn of_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Bounds>, p| {
            Some(match acc {
                None => Bounds { min_x: p.x, min_y: p.y, max_x: p.x, max_y: p.y },
                Some(b) => Bounds {
                    min_x: b.min_x.min(p.x),
                    min_y: b.min_y.min(p.y),
                    max_x: b.max_x.max(p.x),
                    max_y: b.max_y.max(p.y),
                },
            })
        })
    }

    /// Box covering both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.x,
            min_y: self.y,
            max_x: self.x + self.width,
            max_y: self.y + self.height,
        }
    }
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Parse an SVG `points` list such as `"0,0 5,0 0,5"`.
    ///
    /// Separators follow the SVG grammar, so `"5,0,75,0 40,35"` is three
    /// points. Any token that is not a number, or a trailing lone
    /// coordinate, rejects the whole list. A polygon needs at least three
    /// vertices.
    pub fn parse(points: &str) -> Result<Self> {
        let coords = svgtypes::NumberListParser::from(points)
            .collect::<std::result::Result<Vec<f64>, _>>()
            .map_err(|e| Error::InvalidLayout {
                reason: format!("polygon {points:?}: {e}"),
            })?;

        if coords.len() % 2 != 0 {
            return Err(Error::InvalidLayout {
                reason: format!("polygon {points:?} has an odd number of coordinates"),
            });
        }

        let parsed: Vec<Point> = coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();

        if parsed.len() < 3 {
            return Err(Error::InvalidLayout {
                reason: format!("polygon {points:?} has fewer than 3 points"),
            });
        }

        Ok(Self::new(parsed))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of_points(&self.points)
    }

    /// Points formatted for an SVG `points` attribute.
    pub fn to_svg_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
