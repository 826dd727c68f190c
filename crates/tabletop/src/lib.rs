//! # tabletop
//!
//! Pattern fills and scene editing for the tabletop designer.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.
//!
//! ## Layout
//!
//! - [`patterns`]: tile templates per pattern kind
//! - [`registry`]: cache of realized fills
//! - [`scene`]: shapes and their assignments
//! - [`editor`]: selection state machine driving the two above
//! - [`export`] / [`raster`]: SVG and PNG output

pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod export;
pub mod fill;
pub mod geometry;
pub mod patterns;
pub mod raster;
pub mod registry;
pub mod rotation;
pub mod scene;

// Re-export common types at crate root for convenience.
pub use color::Color;
pub use config::{ConfigError, EditorConfig, Palette};
pub use editor::{Editor, EditorEvent, EditorObserver, EditorState, Selection};
pub use error::{Error, Result};
pub use export::{ExportError, ExportFormat, ExportOptions};
pub use fill::{Fill, FillKey, PatternFill};
pub use geometry::{Bounds, Point, Polygon, Rect};
pub use patterns::{PatternKind, TileTemplate};
pub use registry::FillRegistry;
pub use rotation::Rotation;
pub use scene::{LayoutSpec, Shape, ShapeGeometry, ShapeStore};
