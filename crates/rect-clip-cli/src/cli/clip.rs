//! Clip command implementation.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;

use rect_clip::{ClippedScene, Point, Segment, Window};

use super::common::{fmt_coord, load_scene, write_output, OutputFormat};
use super::render::scene_to_svg;
use super::style::Style;

/// A point in JSON output format.
#[derive(Serialize)]
struct JsonPoint {
    x: f64,
    y: f64,
}

/// A segment in JSON output format.
#[derive(Serialize)]
struct JsonSegment {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

#[derive(Serialize)]
struct JsonWindow {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

/// One input segment and what survived.
#[derive(Serialize)]
struct JsonSegmentResult {
    original: JsonSegment,
    /// `null` when the segment is fully outside.
    clipped: Option<JsonSegment>,
}

#[derive(Serialize)]
struct JsonPolygon {
    original: Vec<JsonPoint>,
    clipped: Vec<JsonPoint>,
    area: f64,
}

#[derive(Serialize)]
struct JsonOutput {
    window: JsonWindow,
    segments: Vec<JsonSegmentResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    polygon: Option<JsonPolygon>,
}

impl From<Point> for JsonPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Segment> for JsonSegment {
    fn from(s: Segment) -> Self {
        Self { x1: s.p1.x, y1: s.p1.y, x2: s.p2.x, y2: s.p2.y }
    }
}

impl From<Window> for JsonWindow {
    fn from(w: Window) -> Self {
        Self { x_min: w.x_min, y_min: w.y_min, x_max: w.x_max, y_max: w.y_max }
    }
}

fn points_to_json(points: &[Point]) -> Vec<JsonPoint> {
    points.iter().copied().map(JsonPoint::from).collect()
}

/// Serialize a clipped scene as pretty JSON.
pub fn scene_to_json(clipped: &ClippedScene) -> Result<String> {
    let output = JsonOutput {
        window: clipped.window.into(),
        segments: clipped
            .segments
            .iter()
            .map(|r| JsonSegmentResult {
                original: r.original.into(),
                clipped: r.clipped.map(JsonSegment::from),
            })
            .collect(),
        polygon: (!clipped.polygon.is_empty()).then(|| JsonPolygon {
            original: points_to_json(&clipped.polygon),
            clipped: points_to_json(&clipped.clipped_polygon),
            area: clipped.clipped_area(),
        }),
    };

    let mut json = serde_json::to_string_pretty(&output).context("failed to serialize JSON")?;
    json.push('\n');
    Ok(json)
}

/// Plain text output, one line per segment then the polygon.
///
/// Segment lines read `x1 y1 x2 y2` or `outside`; the polygon line reuses
/// the input's `P x y ...` form and is a bare `P` when nothing is left.
pub fn scene_to_text(clipped: &ClippedScene) -> String {
    let mut out = String::new();

    for result in &clipped.segments {
        match result.clipped {
            Some(s) => out.push_str(&format!(
                "{} {} {} {}\n",
                fmt_coord(s.p1.x),
                fmt_coord(s.p1.y),
                fmt_coord(s.p2.x),
                fmt_coord(s.p2.y)
            )),
            None => out.push_str("outside\n"),
        }
    }

    if !clipped.polygon.is_empty() {
        out.push('P');
        for p in &clipped.clipped_polygon {
            out.push_str(&format!(" {} {}", fmt_coord(p.x), fmt_coord(p.y)));
        }
        out.push('\n');
    }

    out
}

/// Execute the clip command.
pub fn cmd_clip(
    input: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    style: Option<&Path>,
) -> Result<()> {
    let scene = load_scene(input)?;

    let start = Instant::now();
    let clipped = scene.clip();
    log::info!(
        "clipped {} segments ({} visible), polygon {} -> {} vertices in {:?}",
        clipped.segments.len(),
        clipped.visible_count(),
        clipped.polygon.len(),
        clipped.clipped_polygon.len(),
        start.elapsed()
    );

    if style.is_some() && format != OutputFormat::Svg {
        log::warn!("--style only applies to SVG output; ignoring it");
    }

    let rendered = match format {
        OutputFormat::Text => scene_to_text(&clipped),
        OutputFormat::Json => scene_to_json(&clipped)?,
        OutputFormat::Svg => {
            let style = match style {
                Some(path) => Style::load(path)?,
                None => Style::default(),
            };
            scene_to_svg(&clipped, &style)?
        }
    };

    write_output(output, &rendered)
}
