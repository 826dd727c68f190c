//! Pattern generators for tileable fills.
//!
//! Each pattern produces an uncolored [`TileTemplate`]. The fill registry
//! colors and rotates templates; nothing here knows about colors.

pub mod tile;

mod lines;
mod thinlines;
mod checkerboard;
mod grid;
mod triangles;
mod dots;
mod stripe;
mod crosshatch;
mod zigzag;
mod wave;

pub use lines::lines_tile;
pub use thinlines::thinlines_tile;
pub use checkerboard::checkerboard_tile;
pub use grid::grid_tile;
pub use triangles::triangles_tile;
pub use dots::dots_tile;
pub use stripe::{diagonal_stripes_tile, horizontal_stripes_tile, vertical_stripes_tile};
pub use crosshatch::crosshatch_tile;
pub use zigzag::zigzag_tile;
pub use wave::waves_tile;

pub use tile::{ColorSlot, Paint, PathSegment, TilePrimitive, TileShape, TileTemplate};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Available pattern kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PatternKind {
    /// Flat fill with no geometry.
    Solid,
    Lines,
    ThinLines,
    Checkerboard,
    Grid,
    Triangles,
    Dots,
    StripesHorizontal,
    StripesVertical,
    StripesDiagonal,
    Crosshatch,
    Zigzag,
    Waves,
}

impl PatternKind {
    /// Get all pattern kinds.
    pub fn all() -> &'static [PatternKind] {
        &[
            PatternKind::Solid,
            PatternKind::Lines,
            PatternKind::ThinLines,
            PatternKind::Checkerboard,
            PatternKind::Grid,
            PatternKind::Triangles,
            PatternKind::Dots,
            PatternKind::StripesHorizontal,
            PatternKind::StripesVertical,
            PatternKind::StripesDiagonal,
            PatternKind::Crosshatch,
            PatternKind::Zigzag,
            PatternKind::Waves,
        ]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Solid => "solid",
            PatternKind::Lines => "lines",
            PatternKind::ThinLines => "thinlines",
            PatternKind::Checkerboard => "checkerboard",
            PatternKind::Grid => "grid",
            PatternKind::Triangles => "triangles",
            PatternKind::Dots => "dots",
            PatternKind::StripesHorizontal => "stripes-horizontal",
            PatternKind::StripesVertical => "stripes-vertical",
            PatternKind::StripesDiagonal => "stripes-diagonal",
            PatternKind::Crosshatch => "crosshatch",
            PatternKind::Zigzag => "zigzag",
            PatternKind::Waves => "waves",
        }
    }

    /// Brief description for UI display.
    pub fn description(&self) -> &'static str {
        match self {
            PatternKind::Solid => "Flat background color",
            PatternKind::Lines => "Thick horizontal bands",
            PatternKind::ThinLines => "Five thin strips per tile",
            PatternKind::Checkerboard => "Two-color checkerboard",
            PatternKind::Grid => "Heavy grid with square windows",
            PatternKind::Triangles => "Row of narrow triangles",
            PatternKind::Dots => "Centered dot per tile",
            PatternKind::StripesHorizontal => "Horizontal half-tile stripes",
            PatternKind::StripesVertical => "Vertical half-tile stripes",
            PatternKind::StripesDiagonal => "Seamless diagonal stripes",
            PatternKind::Crosshatch => "Crossed diagonal lines",
            PatternKind::Zigzag => "Continuous zigzag line",
            PatternKind::Waves => "Smooth wave line",
        }
    }

    /// `solid` is painted directly and has no tile.
    #[inline]
    pub fn is_solid(&self) -> bool {
        matches!(self, PatternKind::Solid)
    }

    /// Generate the tile template for this kind.
    ///
    /// `solid` has no template; callers must special-case it, and asking for
    /// one fails with [`Error::UnsupportedPatternKind`].
    pub fn generate(&self) -> Result<TileTemplate> {
        let template = match self {
            PatternKind::Solid => {
                return Err(Error::UnsupportedPatternKind { name: self.name().to_string() });
            }
            PatternKind::Lines => lines_tile(),
            PatternKind::ThinLines => thinlines_tile(),
            PatternKind::Checkerboard => checkerboard_tile(),
            PatternKind::Grid => grid_tile(),
            PatternKind::Triangles => triangles_tile(),
            PatternKind::Dots => dots_tile(),
            PatternKind::StripesHorizontal => horizontal_stripes_tile(),
            PatternKind::StripesVertical => vertical_stripes_tile(),
            PatternKind::StripesDiagonal => diagonal_stripes_tile(),
            PatternKind::Crosshatch => crosshatch_tile(),
            PatternKind::Zigzag => zigzag_tile(),
            PatternKind::Waves => waves_tile(),
        };
        Ok(template)
    }

    /// Parse pattern from string.
    pub fn from_name(name: &str) -> Result<PatternKind> {
        match name.trim().to_lowercase().as_str() {
            "solid" | "flat" => Ok(PatternKind::Solid),
            "lines" => Ok(PatternKind::Lines),
            "thinlines" | "thin-lines" => Ok(PatternKind::ThinLines),
            "checkerboard" | "checker" => Ok(PatternKind::Checkerboard),
            "grid" => Ok(PatternKind::Grid),
            "triangles" => Ok(PatternKind::Triangles),
            "dots" => Ok(PatternKind::Dots),
            "stripes-horizontal" | "hstripes" => Ok(PatternKind::StripesHorizontal),
            "stripes-vertical" | "vstripes" => Ok(PatternKind::StripesVertical),
            "stripes-diagonal" | "diagonal" => Ok(PatternKind::StripesDiagonal),
            "crosshatch" => Ok(PatternKind::Crosshatch),
            "zigzag" => Ok(PatternKind::Zigzag),
            "waves" | "wave" => Ok(PatternKind::Waves),
            _ => Err(Error::UnsupportedPatternKind { name: name.to_string() }),
        }
    }
}

/// Generate the tile for a pattern given by name.
///
/// Unknown names fail with [`Error::UnsupportedPatternKind`]; there is no
/// fallback pattern.
pub fn generate(name: &str) -> Result<TileTemplate> {
    PatternKind::from_name(name)?.generate()
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for PatternKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_name(&value)
    }
}

impl From<PatternKind> for &'static str {
    fn from(kind: PatternKind) -> Self {
        kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in PatternKind::all() {
            assert_eq!(PatternKind::from_name(kind.name()), Ok(*kind));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            generate("plaid"),
            Err(Error::UnsupportedPatternKind { name: "plaid".to_string() })
        );
    }

    #[test]
    fn solid_has_no_template() {
        assert!(matches!(
            PatternKind::Solid.generate(),
            Err(Error::UnsupportedPatternKind { .. })
        ));
    }

    #[test]
    fn generation_is_deterministic() {
        for kind in PatternKind::all().iter().filter(|k| !k.is_solid()) {
            assert_eq!(kind.generate().unwrap(), kind.generate().unwrap(), "{}", kind);
        }
    }

    #[test]
    fn every_template_has_foreground_geometry() {
        for kind in PatternKind::all().iter().filter(|k| !k.is_solid()) {
            let tile = kind.generate().unwrap();
            assert!(tile.width > 0.0 && tile.height > 0.0, "{}", kind);
            assert!(
                tile.primitives.iter().any(|p| p.slot == ColorSlot::Foreground),
                "{} should draw something in the foreground color",
                kind
            );
        }
    }

    #[test]
    fn serde_uses_pattern_names() {
        let kind: PatternKind = serde_yaml::from_str("stripes-diagonal").unwrap();
        assert_eq!(kind, PatternKind::StripesDiagonal);
        assert!(serde_yaml::from_str::<PatternKind>("plaid").is_err());
        assert_eq!(serde_yaml::to_string(&PatternKind::ThinLines).unwrap().trim(), "thinlines");
    }
}
