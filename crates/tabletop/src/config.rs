//! Editor configuration.
//!
//! Configurations are YAML documents. Every field has a default, so a file
//! only needs the parts it changes:
//!
//! ```yaml
//! layout:
//!   kind: grid
//!   columns: 8
//!   rows: 4
//!   width: 200
//!   height: 80
//! palette:
//!   colors: ["#FF5252", "#FF9800", "#FFEB3B"]
//!   patterns: [solid, dots, waves]
//! raster_scale: 2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::patterns::PatternKind;
use crate::scene::LayoutSpec;

/// Errors loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Colors and pattern kinds offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<Color>,
    pub patterns: Vec<PatternKind>,
}

/// Everything the editor needs to build and edit a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub layout: LayoutSpec,
    pub palette: Palette,
    /// Pending background before anything is selected.
    pub default_background: Color,
    /// Foreground of every baseline assignment and the initial pending one.
    pub default_foreground: Color,
    /// Select shape 0 after `randomize_all`.
    pub select_first_after_randomize: bool,
    /// PNG pixels per scene unit. At 1.0 the PNG matches the view box.
    pub raster_scale: f32,
}

const TABLETOP_COLORS: [Color; 10] = [
    Color::rgb(0xC5, 0xE8, 0xA5),
    Color::rgb(0xB8, 0xE1, 0xEF),
    Color::rgb(0xF6, 0xBE, 0xD8),
    Color::rgb(0xAA, 0xA5, 0x66),
    Color::rgb(0xF2, 0xE6, 0xC2),
    Color::rgb(0x92, 0x5A, 0x9E),
    Color::rgb(0x40, 0xA1, 0x59),
    Color::rgb(0x85, 0x3F, 0x47),
    Color::rgb(0xF9, 0xD3, 0x84),
    Color::rgb(0xA5, 0x9B, 0xC6),
];

const GRID_COLORS: [Color; 10] = [
    Color::rgb(0xFF, 0x52, 0x52),
    Color::rgb(0xFF, 0x98, 0x00),
    Color::rgb(0xFF, 0xEB, 0x3B),
    Color::rgb(0x8B, 0xC3, 0x4A),
    Color::rgb(0x4C, 0xAF, 0x50),
    Color::rgb(0x03, 0xA9, 0xF4),
    Color::rgb(0x21, 0x96, 0xF3),
    Color::rgb(0x9C, 0x27, 0xB0),
    Color::rgb(0xE9, 0x1E, 0x63),
    Color::rgb(0x79, 0x55, 0x48),
];

impl Default for EditorConfig {
    fn default() -> Self {
        Self::tabletop()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tabletop()
    }
}

impl Palette {
    pub fn tabletop() -> Self {
        Self {
            colors: TABLETOP_COLORS.to_vec(),
            patterns: vec![
                PatternKind::Solid,
                PatternKind::Lines,
                PatternKind::ThinLines,
                PatternKind::Checkerboard,
                PatternKind::Grid,
                PatternKind::Triangles,
            ],
        }
    }

    pub fn grid() -> Self {
        Self {
            colors: GRID_COLORS.to_vec(),
            patterns: vec![
                PatternKind::Solid,
                PatternKind::Dots,
                PatternKind::StripesHorizontal,
                PatternKind::StripesVertical,
                PatternKind::StripesDiagonal,
                PatternKind::Crosshatch,
                PatternKind::Zigzag,
                PatternKind::Waves,
                PatternKind::Triangles,
                PatternKind::Grid,
            ],
        }
    }
}

impl EditorConfig {
    /// The 220x70 table surface with its soft palette.
    pub fn tabletop() -> Self {
        Self {
            layout: LayoutSpec::Tabletop,
            palette: Palette::tabletop(),
            default_background: TABLETOP_COLORS[0],
            default_foreground: TABLETOP_COLORS[9],
            select_first_after_randomize: true,
            raster_scale: 1.0,
        }
    }

    /// An 8x4 grid of squares and triangles, 200x80.
    pub fn grid() -> Self {
        Self {
            layout: LayoutSpec::Grid { columns: 8, rows: 4, width: 200.0, height: 80.0 },
            palette: Palette::grid(),
            default_background: GRID_COLORS[0],
            default_foreground: Color::BLACK,
            select_first_after_randomize: true,
            raster_scale: 1.0,
        }
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "tabletop" => Some(Self::tabletop()),
            "grid" => Some(Self::grid()),
            _ => None,
        }
    }

    /// Names accepted by [`EditorConfig::preset`].
    pub fn preset_names() -> &'static [&'static str] {
        &["tabletop", "grid"]
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.colors.is_empty() {
            return Err(ConfigError::Invalid("palette has no colors".into()));
        }
        if self.palette.patterns.is_empty() {
            return Err(ConfigError::Invalid("palette has no pattern kinds".into()));
        }
        if !(self.raster_scale.is_finite() && self.raster_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "raster_scale must be positive, got {}",
                self.raster_scale
            )));
        }
        self.layout
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for name in EditorConfig::preset_names() {
            let config = EditorConfig::preset(name).unwrap();
            config.validate().unwrap();
            assert_eq!(config.palette.colors.len(), 10);
        }
        assert!(EditorConfig::preset("nope").is_none());
    }

    #[test]
    fn tabletop_defaults_match_palette_ends() {
        let config = EditorConfig::tabletop();
        assert_eq!(config.default_background.to_string(), "#C5E8A5");
        assert_eq!(config.default_foreground.to_string(), "#A59BC6");
        assert_eq!(config.palette.patterns.len(), 6);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config = EditorConfig::from_yaml_str("raster_scale: 2\n").unwrap();
        assert_eq!(config.raster_scale, 2.0);
        assert_eq!(config.layout, LayoutSpec::Tabletop);
        assert_eq!(config.palette, Palette::tabletop());
    }

    #[test]
    fn yaml_grid_with_custom_palette() {
        let yaml = r##"
layout:
  kind: grid
  columns: 4
  rows: 2
  width: 100
  height: 50
palette:
  colors: ["#ff0000", "blue"]
  patterns: [solid, waves]
select_first_after_randomize: false
"##;
        let config = EditorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.palette.colors, vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)]);
        assert_eq!(config.palette.patterns, vec![PatternKind::Solid, PatternKind::Waves]);
        assert!(!config.select_first_after_randomize);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = EditorConfig::tabletop();
        config.palette.colors.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = EditorConfig::tabletop();
        config.raster_scale = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = EditorConfig {
            layout: LayoutSpec::Grid { columns: 0, rows: 0, width: 10.0, height: 10.0 },
            ..EditorConfig::tabletop()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn yaml_errors_are_reported() {
        assert!(matches!(
            EditorConfig::from_yaml_str("palette: {colors: [\"#zzzzzz\"], patterns: [solid]}"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(
            EditorConfig::from_yaml_str("palette: {colors: [red], patterns: [plaid]}"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn yaml_round_trip() {
        let config = EditorConfig::grid();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(EditorConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
