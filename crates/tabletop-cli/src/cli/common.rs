//! Common utilities shared across CLI commands.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tabletop::{Color, EditorConfig, FillKey, PatternKind, Rotation};

/// Resolve the configuration: a YAML file wins over a named preset.
pub fn load_config(preset: &str, config_path: Option<&Path>) -> Result<EditorConfig> {
    match config_path {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => EditorConfig::preset(preset).ok_or_else(|| {
            anyhow!(
                "unknown preset '{}' (available: {})",
                preset,
                EditorConfig::preset_names().join(", ")
            )
        }),
    }
}

/// A `--apply INDEX=KIND:BG[:FG[:ROT]]` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplySpec {
    pub index: usize,
    pub key: FillKey,
}

/// Parse an apply argument. A missing foreground falls back to
/// `default_foreground`, a missing rotation to 0.
pub fn parse_apply(arg: &str, default_foreground: Color) -> Result<ApplySpec> {
    let (index, fill) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("expected INDEX=KIND:BG[:FG[:ROT]], got '{}'", arg))?;

    let index: usize = index
        .trim()
        .parse()
        .with_context(|| format!("invalid shape index '{}'", index))?;

    let parts: Vec<&str> = fill.split(':').collect();
    if parts.len() < 2 || parts.len() > 4 {
        bail!("expected KIND:BG[:FG[:ROT]], got '{}'", fill);
    }

    let pattern = PatternKind::from_name(parts[0])?;
    let background = Color::parse(parts[1])?;
    let foreground = match parts.get(2) {
        Some(fg) => Color::parse(fg)?,
        None => default_foreground,
    };
    let rotation = match parts.get(3) {
        Some(rot) => {
            let degrees: i64 = rot
                .trim()
                .parse()
                .with_context(|| format!("invalid rotation '{}'", rot))?;
            Rotation::new(degrees)?
        }
        None => Rotation::ZERO,
    };

    Ok(ApplySpec {
        index,
        key: FillKey::new(pattern, background, foreground, rotation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_apply_argument() {
        let arg = parse_apply("3=lines:#000000:#ffffff:45", Color::BLACK).unwrap();
        assert_eq!(arg.index, 3);
        assert_eq!(arg.key.fill_id(), "lines-bg000000-fgFFFFFF-rot45");
    }

    #[test]
    fn optional_parts_use_defaults() {
        let fg = Color::rgb(0xA5, 0x9B, 0xC6);
        let arg = parse_apply("0=dots:white", fg).unwrap();
        assert_eq!(arg.key.foreground, fg);
        assert_eq!(arg.key.rotation, Rotation::ZERO);
    }

    #[test]
    fn rejects_malformed_arguments() {
        assert!(parse_apply("lines:#000", Color::BLACK).is_err());
        assert!(parse_apply("x=lines:#000", Color::BLACK).is_err());
        assert!(parse_apply("1=plaid:#000", Color::BLACK).is_err());
        assert!(parse_apply("1=lines:#000:#fff:30", Color::BLACK).is_err());
        assert!(parse_apply("1=lines", Color::BLACK).is_err());
    }

    #[test]
    fn unknown_preset_lists_choices() {
        let err = load_config("nope", None).unwrap_err().to_string();
        assert!(err.contains("tabletop"), "{}", err);
        assert!(load_config("grid", None).is_ok());
    }
}
