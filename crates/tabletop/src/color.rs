//! Opaque RGB colors with a canonical `#RRGGBB` spelling.
//!
//! Colors are used both as paint and as part of fill cache keys, so two
//! spellings of the same color (`#fff`, `white`, `#FFFFFF`) must compare
//! equal. Parsing goes through `svgtypes`, which understands every CSS color
//! form an SVG file could contain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse any CSS color. Translucent colors are rejected.
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = svgtypes::Color::from_str(value.trim()).map_err(|_| Error::InvalidColor {
            value: value.to_string(),
        })?;

        if parsed.alpha != u8::MAX {
            return Err(Error::InvalidColor { value: value.to_string() });
        }

        Ok(Self::rgb(parsed.red, parsed.green, parsed.blue))
    }

    /// Six upper-case hex digits without the leading `#`.
    ///
    /// This is the form used inside fill ids.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
