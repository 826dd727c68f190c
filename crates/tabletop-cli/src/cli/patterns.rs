//! `patterns` - list pattern kinds.

use tabletop::{EditorConfig, PatternKind};

/// Print every pattern kind, marking those in the active palette.
pub fn cmd_patterns(config: &EditorConfig, verbose: bool) {
    println!("Available patterns:");
    for kind in PatternKind::all() {
        let marker = if config.palette.patterns.contains(kind) { "*" } else { " " };
        if verbose {
            let size = match kind.generate() {
                Ok(tile) => format!("{}x{}", tile.width, tile.height),
                Err(_) => "-".to_string(),
            };
            println!("{} {:<20} {:>6}  {}", marker, kind.name(), size, kind.description());
        } else {
            println!("{} {}", marker, kind.name());
        }
    }
    println!();
    println!("* = in the active palette");
}
