//! `render` - build a design without the TUI and write it to disk.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tabletop::{Editor, EditorConfig, ExportFormat, FillKey};

use super::common::parse_apply;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file (.svg or .png)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Randomize every shape before applying --apply edits
    #[arg(long)]
    pub randomize: bool,

    /// Seed for --randomize
    #[arg(long, requires = "randomize")]
    pub seed: Option<u64>,

    /// Fill a shape: INDEX=KIND:BG[:FG[:ROT]], e.g. 3=lines:#000000:#FFFFFF:45
    #[arg(long = "apply", value_name = "INDEX=KIND:BG[:FG[:ROT]]")]
    pub apply: Vec<String>,

    /// PNG pixels per scene unit (overrides the config)
    #[arg(long)]
    pub scale: Option<f32>,

    /// Print a JSON summary of the scene to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SceneSummary {
    output: String,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    width: f64,
    height: f64,
    fills: usize,
    shapes: Vec<ShapeSummary>,
}

#[derive(Serialize)]
struct ShapeSummary {
    index: usize,
    #[serde(flatten)]
    assignment: FillKey,
    fill: String,
}

/// Execute the render command.
pub fn cmd_render(mut config: EditorConfig, args: &RenderArgs) -> Result<()> {
    if ExportFormat::from_path(&args.output).is_none() {
        bail!("output must end in .svg or .png: {}", args.output.display());
    }
    if let Some(scale) = args.scale {
        config.raster_scale = scale;
        config.validate()?;
    }

    let default_foreground = config.default_foreground;
    let mut editor = Editor::new(config)?;

    let seed = args.randomize.then(|| args.seed.unwrap_or_else(rand::random));
    if let Some(seed) = seed {
        editor.randomize_all(&mut StdRng::seed_from_u64(seed))?;
    }

    for spec in &args.apply {
        let apply = parse_apply(spec, default_foreground)?;
        editor
            .select_shape(apply.index)
            .with_context(|| format!("--apply {}", spec))?;
        editor.set_pending(apply.key);
        editor.apply_pending()?;
    }

    let format = editor
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    if args.json {
        let view = editor.store().view_box();
        let summary = SceneSummary {
            output: args.output.display().to_string(),
            format: format.to_string(),
            seed,
            width: view.width(),
            height: view.height(),
            fills: editor.registry().len(),
            shapes: editor
                .store()
                .iter()
                .enumerate()
                .map(|(index, shape)| ShapeSummary {
                    index,
                    assignment: shape.assignment(),
                    fill: shape.fill().fill_ref(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        eprintln!(
            "Wrote: {} ({}, {} shapes)",
            args.output.display(),
            format,
            editor.store().len()
        );
    }

    Ok(())
}
