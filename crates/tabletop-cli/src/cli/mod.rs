//! CLI command implementations.
//!
//! This module contains the implementations for the batch subcommands:
//! - `patterns` - List available pattern kinds
//! - `render` - Build a design and write it as SVG or PNG
//! - `swatches` - Generate pattern swatch sheets
//!
//! The interactive editor lives in `tui`.

pub mod common;
pub mod patterns;
pub mod render;
pub mod swatches;
