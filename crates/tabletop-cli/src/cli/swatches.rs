//! Generate pattern swatch sheets for reference.
//!
//! Lays out one square per pattern kind in a grid and fills each with its
//! pattern, using the regular export path.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use tabletop::scene::ShapeSpec;
use tabletop::{Color, Editor, EditorConfig, ExportFormat, FillKey, LayoutSpec, PatternKind, Rotation};

const SWATCH_SIZE: f64 = 40.0;
const GUTTER: f64 = 8.0;
const COLUMNS: usize = 5;

#[derive(Args, Debug)]
pub struct SwatchArgs {
    /// Output file (.svg or .png)
    #[arg(short, long, default_value = "pattern_swatches.svg")]
    pub output: PathBuf,

    /// Swatch background (default: first palette color)
    #[arg(long)]
    pub background: Option<Color>,

    /// Pattern color (default: configured foreground)
    #[arg(long)]
    pub foreground: Option<Color>,

    /// Rotation in degrees (multiple of 45)
    #[arg(long, default_value_t = 0)]
    pub rotation: i64,

    /// Include every pattern kind, not just the palette's
    #[arg(long)]
    pub all: bool,
}

/// Square cell `index` of the sheet, as an SVG points list.
fn swatch_points(index: usize) -> String {
    let x = GUTTER + (index % COLUMNS) as f64 * (SWATCH_SIZE + GUTTER);
    let y = GUTTER + (index / COLUMNS) as f64 * (SWATCH_SIZE + GUTTER);
    format!(
        "{},{} {},{} {},{} {},{}",
        x, y,
        x + SWATCH_SIZE, y,
        x + SWATCH_SIZE, y + SWATCH_SIZE,
        x, y + SWATCH_SIZE
    )
}

/// Sheet layout for `count` swatches.
fn sheet_layout(count: usize) -> LayoutSpec {
    let columns = count.clamp(1, COLUMNS);
    let rows = count.div_ceil(COLUMNS).max(1);
    LayoutSpec::Custom {
        width: GUTTER + columns as f64 * (SWATCH_SIZE + GUTTER),
        height: GUTTER + rows as f64 * (SWATCH_SIZE + GUTTER),
        shapes: (0..count)
            .map(|i| ShapeSpec { points: swatch_points(i), color: Color::WHITE })
            .collect(),
    }
}

/// Execute the swatches command.
pub fn cmd_swatches(config: &EditorConfig, args: &SwatchArgs) -> Result<()> {
    if ExportFormat::from_path(&args.output).is_none() {
        bail!("output must end in .svg or .png: {}", args.output.display());
    }

    let kinds: Vec<PatternKind> = if args.all {
        PatternKind::all().to_vec()
    } else {
        config.palette.patterns.clone()
    };

    let background = args
        .background
        .or_else(|| config.palette.colors.first().copied())
        .unwrap_or(Color::WHITE);
    let foreground = args.foreground.unwrap_or(config.default_foreground);
    let rotation = Rotation::new(args.rotation)?;

    let sheet = EditorConfig { layout: sheet_layout(kinds.len()), ..config.clone() };
    let mut editor = Editor::new(sheet)?;

    for (index, kind) in kinds.iter().enumerate() {
        editor.select_shape(index)?;
        editor.set_pending(FillKey::new(*kind, background, foreground, rotation));
        editor.apply_pending()?;
    }

    let format = editor.save(&args.output)?;
    eprintln!("Wrote: {} ({}, {} swatches)", args.output.display(), format, kinds.len());
    for (index, kind) in kinds.iter().enumerate() {
        eprintln!("  {:>2}: {}", index, kind);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_wraps_after_five_columns() {
        let LayoutSpec::Custom { width, height, shapes } = sheet_layout(7) else {
            panic!("sheet should be a custom layout");
        };
        assert_eq!(shapes.len(), 7);
        assert_eq!(width, GUTTER + 5.0 * (SWATCH_SIZE + GUTTER));
        assert_eq!(height, GUTTER + 2.0 * (SWATCH_SIZE + GUTTER));
        assert_eq!(shapes[5].points, "8,56 48,56 48,96 8,96");
    }

    #[test]
    fn sheet_layout_is_valid() {
        sheet_layout(PatternKind::all().len()).validate().unwrap();
    }
}
