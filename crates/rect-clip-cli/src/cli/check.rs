//! Check command - validate input without clipping.

use std::path::Path;

use anyhow::Result;

use rect_clip::Scene;

use super::common::{fmt_coord, load_scene};

/// One-paragraph description of a parsed scene.
pub fn summarize(scene: &Scene) -> String {
    let w = &scene.window;
    let mut out = format!(
        "segments: {}\nwindow: {} {} {} {}{}\n",
        scene.segments.len(),
        fmt_coord(w.x_min),
        fmt_coord(w.y_min),
        fmt_coord(w.x_max),
        fmt_coord(w.y_max),
        if w.is_degenerate() { " (degenerate)" } else { "" }
    );

    if scene.has_polygon() {
        out.push_str(&format!("polygon: {} vertices\n", scene.polygon.len()));
    } else {
        out.push_str("polygon: none\n");
    }

    let degenerate = scene.segments.iter().filter(|s| s.is_degenerate()).count();
    if degenerate > 0 {
        out.push_str(&format!("zero-length segments: {}\n", degenerate));
    }

    out
}

/// Execute the check command.
pub fn cmd_check(input: &Path) -> Result<()> {
    let scene = load_scene(input)?;
    print!("{}", summarize(&scene));
    Ok(())
}
