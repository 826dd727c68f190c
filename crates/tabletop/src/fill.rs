//! Fill keys and realized fills.
//!
//! A [`FillKey`] names a fill: pattern kind, the two colors and a rotation.
//! A [`Fill`] is what the key realizes to, ready for rendering. Fills are
//! built once by the [`FillRegistry`](crate::registry::FillRegistry) and then
//! shared read-only.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::patterns::{ColorSlot, Paint, PatternKind, TileShape, TileTemplate};
use crate::rotation::Rotation;

/// Structured cache key for a fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FillKey {
    pub pattern: PatternKind,
    pub background: Color,
    pub foreground: Color,
    #[serde(default)]
    pub rotation: Rotation,
}

impl FillKey {
    pub fn new(pattern: PatternKind, background: Color, foreground: Color, rotation: Rotation) -> Self {
        Self { pattern, background, foreground, rotation }
    }

    /// Unrotated solid fill.
    pub fn solid(background: Color, foreground: Color) -> Self {
        Self::new(PatternKind::Solid, background, foreground, Rotation::ZERO)
    }

    /// The key the registry caches under.
    ///
    /// A solid fill never paints its foreground, so the foreground is pinned
    /// to black. Background and rotation are kept as they are.
    pub fn normalized(&self) -> Self {
        match self.pattern {
            PatternKind::Solid => Self { foreground: Color::BLACK, ..*self },
            _ => *self,
        }
    }

    /// Deterministic fill id: `{kind}-bg{RRGGBB}-fg{RRGGBB}-rot{deg}`.
    pub fn fill_id(&self) -> String {
        format!(
            "{}-bg{}-fg{}-rot{}",
            self.pattern.name(),
            self.background.hex(),
            self.foreground.hex(),
            self.rotation.degrees()
        )
    }
}

/// A realized fill.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    Pattern(PatternFill),
}

impl Fill {
    /// Value for an SVG `fill` attribute: `#RRGGBB` or `url(#id)`.
    pub fn fill_ref(&self) -> String {
        match self {
            Fill::Solid(color) => color.to_string(),
            Fill::Pattern(pattern) => format!("url(#{})", pattern.id),
        }
    }

    pub fn as_pattern(&self) -> Option<&PatternFill> {
        match self {
            Fill::Pattern(pattern) => Some(pattern),
            Fill::Solid(_) => None,
        }
    }
}

/// A tile primitive with its slot resolved to a concrete color.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedPrimitive {
    pub shape: TileShape,
    pub color: Color,
    pub paint: Paint,
}

/// Rotation of a whole pattern tile about a pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateTransform {
    pub degrees: u16,
    pub center: Point,
}

/// A colored, optionally rotated pattern tile.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternFill {
    pub id: String,
    pub key: FillKey,
    pub width: f64,
    pub height: f64,
    pub background: Color,
    /// Drawing order. The first entry is always the full-tile background.
    pub primitives: Vec<PaintedPrimitive>,
    pub rotation: Option<RotateTransform>,
}

impl PatternFill {
    /// Color a template with the key's colors.
    ///
    /// A background rect covering the tile is drawn first so the tile is
    /// never transparent.
    pub fn from_template(key: FillKey, template: TileTemplate) -> Self {
        let center = template.center();
        let backdrop = PaintedPrimitive {
            shape: TileShape::Rect(Rect::new(0.0, 0.0, template.width, template.height)),
            color: key.background,
            paint: Paint::Fill,
        };

        let primitives = std::iter::once(backdrop)
            .chain(template.primitives.into_iter().map(|p| PaintedPrimitive {
                shape: p.shape,
                color: match p.slot {
                    ColorSlot::Foreground => key.foreground,
                    ColorSlot::Background => key.background,
                },
                paint: p.paint,
            }))
            .collect();

        let rotation = (!key.rotation.is_zero()).then(|| RotateTransform {
            degrees: key.rotation.degrees(),
            center,
        });

        Self {
            id: key.fill_id(),
            key,
            width: template.width,
            height: template.height,
            background: key.background,
            primitives,
            rotation,
        }
    }
}
