//! Error type for fill resolution and scene editing.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
//! `Display` and `std::error::Error` impls for us from the `#[error]`
//! attributes, so each variant only has to say what went wrong.
//!
//! Every error here is local to the call that produced it: the registry and
//! the shape store are left exactly as they were before the call.

use thiserror::Error;

/// Errors raised by the pattern generator, fill registry and shape store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Pattern name or kind the generator has no template for.
    #[error("unsupported pattern kind: {name}")]
    UnsupportedPatternKind { name: String },

    /// Shape index outside the current scene.
    #[error("shape index {index} out of range (scene has {len} shapes)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Color string that is not an opaque RGB color.
    #[error("invalid color: {value:?}")]
    InvalidColor { value: String },

    /// Rotation that is not one of the eight 45° steps.
    #[error("invalid rotation {degrees}°, expected a multiple of 45 in 0..360")]
    InvalidRotation { degrees: i64 },

    /// Palette with no colors or no pattern kinds to draw from.
    #[error("palette has no colors or no pattern kinds")]
    EmptyPalette,

    /// Static layout data that cannot be turned into shapes.
    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
