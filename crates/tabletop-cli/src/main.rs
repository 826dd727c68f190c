//! tabletop - terminal editor and CLI for tabletop pattern designs
//!
//! Usage:
//!   tabletop [edit]                  Launch the TUI editor
//!   tabletop patterns                List pattern kinds
//!   tabletop render -o design.png    Render a design without the TUI
//!   tabletop swatches -o sheet.svg   Render every pattern kind side by side

mod cli;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cli::common::load_config;
use cli::render::RenderArgs;
use cli::swatches::SwatchArgs;

#[derive(Parser)]
#[command(name = "tabletop", version, about = "Design patterned tabletop surfaces")]
struct Cli {
    /// Built-in configuration (tabletop, grid)
    #[arg(long, global = true, default_value = "tabletop")]
    preset: String,

    /// YAML configuration file; overrides --preset
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive editor (default)
    Edit {
        /// Seed for the randomize key
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List available pattern kinds
    Patterns {
        /// Also show tile size and description
        #[arg(short, long)]
        verbose: bool,
    },

    /// Render a design to SVG or PNG
    Render(RenderArgs),

    /// Render a swatch sheet of every pattern kind
    Swatches(SwatchArgs),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.preset, cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Edit { seed: None }) {
        Commands::Edit { seed } => tui::run_tui(config, seed),
        Commands::Patterns { verbose } => {
            cli::patterns::cmd_patterns(&config, verbose);
            Ok(())
        }
        Commands::Render(args) => cli::render::cmd_render(config, &args),
        Commands::Swatches(args) => cli::swatches::cmd_swatches(&config, &args),
    }
}
