//! Scene model: the static shapes and what each one is filled with.
//!
//! Geometry comes from a [`LayoutSpec`] and never changes after the store is
//! built. Only the per-shape assignment (a [`FillKey`]) and the realized
//! fill move.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::fill::{Fill, FillKey};
use crate::geometry::{Bounds, Point, Polygon, Rect};
use crate::registry::FillRegistry;

// ============================================================================
// Layouts
// ============================================================================

/// The hand-authored table surface, 220x70, in drawing order.
const TABLETOP_SHAPES: &[(&str, Color)] = &[
    ("0,0 5,0 0,5", LIGHT_GREEN),
    ("5,0,75,0 40,35", LIGHT_BLUE),
    ("75,0 145,0 110,35", LIGHT_GREEN),
    ("145,0 215,0 180,35", LIGHT_BLUE),
    ("215,0 220,0 220,5", LIGHT_GREEN),
    ("0,5 5,0 40,35 5,70 0,65", PINK),
    ("40,35, 75,0 110,35 75,70", OLIVE),
    ("110,35 145,0 180,35 145,70", PINK),
    ("180,35 215,0 220,5 220,65 215,70", OLIVE),
    ("0,65 5,70 0,70", LIGHT_BLUE),
    ("5,70 40,35 75,70", LIGHT_GREEN),
    ("75,70 110,35 145,70", LIGHT_BLUE),
    ("145,70 180,35 215,70", LIGHT_GREEN),
    ("215,70 220,65 220,70", LIGHT_BLUE),
];

const LIGHT_GREEN: Color = Color::rgb(0xC5, 0xE8, 0xA5);
const LIGHT_BLUE: Color = Color::rgb(0xB8, 0xE1, 0xEF);
const PINK: Color = Color::rgb(0xF6, 0xBE, 0xD8);
const OLIVE: Color = Color::rgb(0xAA, 0xA5, 0x66);

/// One shape of a custom layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// SVG `points` list.
    pub points: String,
    pub color: Color,
}

/// Where the scene's shapes come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LayoutSpec {
    /// The 14-polygon table surface.
    #[default]
    Tabletop,
    /// Cells alternating between a square and a pair of triangles, all white.
    Grid { columns: u32, rows: u32, width: f64, height: f64 },
    Custom { width: f64, height: f64, shapes: Vec<ShapeSpec> },
}

impl LayoutSpec {
    /// Check the layout without building anything.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Geometry and baseline color of every shape, in scene order.
    fn build(&self) -> Result<Vec<(ShapeGeometry, Color)>> {
        let shapes = match self {
            LayoutSpec::Tabletop => TABLETOP_SHAPES
                .iter()
                .map(|(points, color)| Ok((ShapeGeometry::Polygon(Polygon::parse(points)?), *color)))
                .collect::<Result<Vec<_>>>()?,
            LayoutSpec::Grid { columns, rows, width, height } => {
                grid_shapes(*columns, *rows, *width, *height)?
            }
            LayoutSpec::Custom { shapes, .. } => shapes
                .iter()
                .map(|spec| Ok((ShapeGeometry::Polygon(Polygon::parse(&spec.points)?), spec.color)))
                .collect::<Result<Vec<_>>>()?,
        };

        if shapes.is_empty() {
            return Err(Error::InvalidLayout { reason: "layout has no shapes".to_string() });
        }
        Ok(shapes)
    }

    /// Declared canvas size, if the layout has one.
    fn canvas_size(&self) -> Option<(f64, f64)> {
        match self {
            LayoutSpec::Tabletop => None,
            LayoutSpec::Grid { width, height, .. } | LayoutSpec::Custom { width, height, .. } => {
                Some((*width, *height))
            }
        }
    }
}

fn grid_shapes(columns: u32, rows: u32, width: f64, height: f64) -> Result<Vec<(ShapeGeometry, Color)>> {
    if columns == 0 || rows == 0 {
        return Err(Error::InvalidLayout {
            reason: format!("grid must have at least one cell, got {columns}x{rows}"),
        });
    }
    if !(width > 0.0 && height > 0.0) {
        return Err(Error::InvalidLayout {
            reason: format!("grid size must be positive, got {width}x{height}"),
        });
    }

    let cell_w = width / columns as f64;
    let cell_h = height / rows as f64;
    let mut shapes = Vec::new();

    for row in 0..rows {
        for column in 0..columns {
            let x = column as f64 * cell_w;
            let y = row as f64 * cell_h;

            if (column + row) % 2 == 0 {
                shapes.push((ShapeGeometry::Rect(Rect::new(x, y, cell_w, cell_h)), Color::WHITE));
            } else {
                let upper = Polygon::new(vec![
                    Point::new(x, y),
                    Point::new(x + cell_w, y),
                    Point::new(x, y + cell_h),
                ]);
                let lower = Polygon::new(vec![
                    Point::new(x + cell_w, y),
                    Point::new(x + cell_w, y + cell_h),
                    Point::new(x, y + cell_h),
                ]);
                shapes.push((ShapeGeometry::Polygon(upper), Color::WHITE));
                shapes.push((ShapeGeometry::Polygon(lower), Color::WHITE));
            }
        }
    }

    Ok(shapes)
}

// ============================================================================
// Shapes
// ============================================================================

/// Immutable outline of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Polygon(Polygon),
    Rect(Rect),
}

impl ShapeGeometry {
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            ShapeGeometry::Polygon(polygon) => polygon.bounds(),
            ShapeGeometry::Rect(rect) => Some(rect.bounds()),
        }
    }
}

/// A shape with its current fill.
#[derive(Debug, Clone)]
pub struct Shape {
    geometry: ShapeGeometry,
    baseline: FillKey,
    assignment: FillKey,
    fill: Rc<Fill>,
}

impl Shape {
    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Assignment the shape had when the scene was built.
    pub fn baseline(&self) -> FillKey {
        self.baseline
    }

    /// Assignment as last applied, before any registry normalization.
    pub fn assignment(&self) -> FillKey {
        self.assignment
    }

    pub fn fill(&self) -> &Rc<Fill> {
        &self.fill
    }

    pub fn is_at_baseline(&self) -> bool {
        self.assignment == self.baseline
    }
}

// ============================================================================
// Store
// ============================================================================

/// Ordered shapes of the scene. Indices are stable for the store's lifetime.
#[derive(Debug)]
pub struct ShapeStore {
    layout: LayoutSpec,
    default_foreground: Color,
    shapes: Vec<Shape>,
}

impl ShapeStore {
    /// Build the scene from a layout. Every shape starts as a solid fill of
    /// its authored color.
    pub fn create(layout: LayoutSpec, default_foreground: Color, registry: &mut FillRegistry) -> Result<Self> {
        let shapes = Self::build_shapes(&layout, default_foreground, registry)?;
        log::debug!("scene built with {} shapes", shapes.len());
        Ok(Self { layout, default_foreground, shapes })
    }

    fn build_shapes(
        layout: &LayoutSpec,
        default_foreground: Color,
        registry: &mut FillRegistry,
    ) -> Result<Vec<Shape>> {
        layout
            .build()?
            .into_iter()
            .map(|(geometry, color)| {
                let baseline = FillKey::solid(color, default_foreground);
                let fill = registry.resolve(&baseline)?;
                Ok(Shape { geometry, baseline, assignment: baseline, fill })
            })
            .collect()
    }

    /// Assign `key` to shape `index`.
    ///
    /// The index is checked before the registry is touched, so a bad index
    /// creates no fill and changes no shape.
    pub fn apply_fill(&mut self, index: usize, key: FillKey, registry: &mut FillRegistry) -> Result<Rc<Fill>> {
        let len = self.shapes.len();
        let shape = self
            .shapes
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        let fill = registry.resolve(&key)?;
        shape.assignment = key;
        shape.fill = Rc::clone(&fill);
        Ok(fill)
    }

    /// Rebuild every shape from the layout.
    pub fn reset(&mut self, registry: &mut FillRegistry) -> Result<()> {
        self.shapes = Self::build_shapes(&self.layout, self.default_foreground, registry)?;
        log::info!("scene reset ({} shapes)", self.shapes.len());
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Shape> {
        self.shapes
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len: self.shapes.len() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.iter()
    }

    pub fn layout(&self) -> &LayoutSpec {
        &self.layout
    }

    /// Scene extent, anchored at the origin.
    pub fn view_box(&self) -> Bounds {
        let content = self
            .shapes
            .iter()
            .filter_map(|s| s.geometry.bounds())
            .reduce(|acc, b| acc.union(&b));

        let (mut max_x, mut max_y) = content.map_or((0.0, 0.0), |b| (b.max_x, b.max_y));
        if let Some((w, h)) = self.layout.canvas_size() {
            max_x = max_x.max(w);
            max_y = max_y.max(h);
        }

        Bounds { min_x: 0.0, min_y: 0.0, max_x, max_y }
    }
}
