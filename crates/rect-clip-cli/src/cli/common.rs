//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use rect_clip::{parse_str, Scene};

/// Output format for clipped geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Svg,
}

/// Whether `path` means stdin/stdout.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// Read the whole input, from a file or from stdin for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdio(path) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

/// Read and parse an input file.
pub fn load_scene(path: &Path) -> Result<Scene> {
    let content = read_input(path)?;
    let scene = parse_str(&content).context("error parsing input data")?;
    log::info!(
        "loaded {} segments{} from {}",
        scene.segments.len(),
        if scene.has_polygon() { " and a polygon" } else { "" },
        path.display()
    );
    Ok(scene)
}

/// Write output to a file, or stdout for `None` / `-`.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(p) if !is_stdio(p) => {
            fs::write(p, content).with_context(|| format!("failed to write {}", p.display()))?;
            log::info!("wrote {}", p.display());
        }
        _ => print!("{}", content),
    }
    Ok(())
}

/// Format a coordinate without trailing zeros (`5`, `2.5`, `-0.125`).
pub fn fmt_coord(v: f64) -> String {
    // Normalise -0 so clipped output never shows "-0".
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{}", v)
}
