//! SVG export of a clipped scene.
//!
//! Draws the window outline, the input geometry dashed and the clipped
//! geometry solid. Input coordinates are y-up, so everything sits inside a
//! `scale(1,-1)` group and the viewBox is flipped to match.

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use rect_clip::{ClippedScene, Point, Segment};

use super::common::fmt_coord;
use super::style::Style;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

type SvgWriter = Writer<Vec<u8>>;

fn start(writer: &mut SvgWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(name);
    for &attr in attrs {
        el.push_attribute(attr);
    }
    writer.write_event(Event::Start(el))?;
    Ok(())
}

fn end(writer: &mut SvgWriter, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn empty(writer: &mut SvgWriter, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut el = BytesStart::new(name);
    for &attr in attrs {
        el.push_attribute(attr);
    }
    writer.write_event(Event::Empty(el))?;
    Ok(())
}

/// Open a styled `<g>` for one layer of the drawing.
fn layer(writer: &mut SvgWriter, id: &str, color: &str, style: &Style, dashed: bool) -> Result<()> {
    let width = fmt_coord(style.stroke_width);
    let dash = fmt_coord(style.stroke_width * 4.0);
    let mut attrs = vec![
        ("id", id),
        ("stroke", color),
        ("stroke-width", width.as_str()),
        ("fill", "none"),
        ("stroke-linecap", "round"),
    ];
    if dashed {
        attrs.push(("stroke-dasharray", dash.as_str()));
    }
    start(writer, "g", &attrs)
}

fn line(writer: &mut SvgWriter, s: &Segment) -> Result<()> {
    let (x1, y1) = (fmt_coord(s.p1.x), fmt_coord(s.p1.y));
    let (x2, y2) = (fmt_coord(s.p2.x), fmt_coord(s.p2.y));
    empty(
        writer,
        "line",
        &[
            ("x1", x1.as_str()),
            ("y1", y1.as_str()),
            ("x2", x2.as_str()),
            ("y2", y2.as_str()),
        ],
    )
}

/// Closed outline through `points`.
fn outline(writer: &mut SvgWriter, points: &[Point]) -> Result<()> {
    let points: String = points
        .iter()
        .map(|p| format!("{},{}", fmt_coord(p.x), fmt_coord(p.y)))
        .collect::<Vec<_>>()
        .join(" ");
    empty(writer, "polygon", &[("points", points.as_str())])
}

/// viewBox covering the window plus margin, in flipped-y coordinates.
fn view_box(clipped: &ClippedScene, style: &Style) -> String {
    let w = &clipped.window;
    let span = |size: f64| {
        let s = size + 2.0 * style.margin;
        // A zero-area window with no margin still needs a drawable box.
        if s > 0.0 { s } else { 1.0 }
    };
    format!(
        "{} {} {} {}",
        fmt_coord(w.x_min - style.margin),
        fmt_coord(-(w.y_max + style.margin)),
        fmt_coord(span(w.width())),
        fmt_coord(span(w.height()))
    )
}

/// Render a clipped scene as a standalone SVG document.
pub fn scene_to_svg(clipped: &ClippedScene, style: &Style) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let view_box = view_box(clipped, style);
    start(&mut writer, "svg", &[("xmlns", SVG_NS), ("viewBox", view_box.as_str())])?;

    start(&mut writer, "title", &[])?;
    writer.write_event(Event::Text(BytesText::new(&format!(
        "{} of {} segments visible, polygon {} -> {} vertices",
        clipped.visible_count(),
        clipped.segments.len(),
        clipped.polygon.len(),
        clipped.clipped_polygon.len()
    ))))?;
    end(&mut writer, "title")?;

    start(&mut writer, "g", &[("transform", "scale(1,-1)")])?;

    layer(&mut writer, "window", &style.window, style, false)?;
    outline(&mut writer, &clipped.window.corners())?;
    end(&mut writer, "g")?;

    layer(&mut writer, "original-segments", &style.original_segment, style, true)?;
    for result in &clipped.segments {
        line(&mut writer, &result.original)?;
    }
    end(&mut writer, "g")?;

    layer(&mut writer, "clipped-segments", &style.clipped_segment, style, false)?;
    for s in clipped.segments.iter().filter_map(|r| r.clipped.as_ref()) {
        line(&mut writer, s)?;
    }
    end(&mut writer, "g")?;

    if !clipped.polygon.is_empty() {
        layer(&mut writer, "original-polygon", &style.original_polygon, style, true)?;
        outline(&mut writer, &clipped.polygon)?;
        end(&mut writer, "g")?;

        layer(&mut writer, "clipped-polygon", &style.clipped_polygon, style, false)?;
        if !clipped.clipped_polygon.is_empty() {
            outline(&mut writer, &clipped.clipped_polygon)?;
        }
        end(&mut writer, "g")?;
    }

    end(&mut writer, "g")?;
    end(&mut writer, "svg")?;

    let mut svg = String::from_utf8(writer.into_inner()).context("generated SVG is not UTF-8")?;
    svg.push('\n');
    Ok(svg)
}
