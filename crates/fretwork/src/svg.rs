//! SVG export for previews and vector tools.
//!
//! The document is sized to the panel in user units with a matching
//! `viewBox`, so one SVG unit is one panel unit. The frame outline goes in
//! its own group above the pattern group; everything is stroke-only.
//!
//! ## Rust Lesson #22: Writers, not string soup
//!
//! quick-xml's `Writer` escapes attribute values and balances tags for us.
//! Each element is one `Event`; nothing is concatenated by hand.

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::geometry::{Arc, GeometryBundle};
use crate::shape::PanelShape;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Stroke width relative to the shorter panel side when none is given.
const DEFAULT_STROKE_FRACTION: f64 = 0.002;

#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Stroke width in panel units; `None` scales with the panel.
    pub stroke_width: Option<f64>,
    pub frame_color: String,
    pub pattern_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            stroke_width: None,
            frame_color: "#cc0000".to_string(),
            pattern_color: "#000000".to_string(),
        }
    }
}

/// Encode a panel as an SVG document.
pub fn encode_svg(
    pattern: &GeometryBundle,
    width: f64,
    height: f64,
    shape: PanelShape,
    options: &SvgOptions,
) -> Result<String> {
    if !(width > 0.0 && height > 0.0) {
        return Err(Error::InvalidPanel { width, height });
    }
    let stroke = options
        .stroke_width
        .unwrap_or(width.min(height) * DEFAULT_STROKE_FRACTION)
        .to_string();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.to_string().as_str()));
    root.push_attribute(("height", height.to_string().as_str()));
    root.push_attribute(("viewBox", format!("0 0 {width} {height}").as_str()));
    emit(&mut writer, Event::Start(root))?;

    emit(&mut writer, Event::Start(group("frame", &options.frame_color, &stroke)))?;
    let mut outline = BytesStart::new("path");
    outline.push_attribute(("d", shape.frame_path(width, height).as_str()));
    emit(&mut writer, Event::Empty(outline))?;
    emit(&mut writer, Event::End(BytesEnd::new("g")))?;

    emit(&mut writer, Event::Start(group("pattern", &options.pattern_color, &stroke)))?;
    for line in &pattern.lines {
        let mut el = BytesStart::new("line");
        for (name, value) in [("x1", line.x1), ("y1", line.y1), ("x2", line.x2), ("y2", line.y2)] {
            el.push_attribute((name, num(value).as_str()));
        }
        emit(&mut writer, Event::Empty(el))?;
    }
    for circle in &pattern.circles {
        emit(&mut writer, Event::Empty(circle_element(circle.cx, circle.cy, circle.r)))?;
    }
    for arc in &pattern.arcs {
        let el = if arc.is_full() {
            circle_element(arc.cx, arc.cy, arc.r)
        } else {
            let mut path = BytesStart::new("path");
            path.push_attribute(("d", arc_path(arc).as_str()));
            path
        };
        emit(&mut writer, Event::Empty(el))?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("g")))?;
    emit(&mut writer, Event::End(BytesEnd::new("svg")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
}

/// [`encode_svg`] straight to a file.
pub fn write_svg(
    path: impl AsRef<Path>,
    pattern: &GeometryBundle,
    width: f64,
    height: f64,
    shape: PanelShape,
    options: &SvgOptions,
) -> Result<()> {
    let text = encode_svg(pattern, width, height, shape, options)?;
    fs::write(path, text)?;
    Ok(())
}

/// Path data for one arc. Angles grow clockwise on screen, hence sweep flag 1.
pub fn arc_path(arc: &Arc) -> String {
    let from = arc.start_point();
    let to = arc.end_point();
    let large = if arc.sweep() > PI { 1 } else { 0 };
    format!(
        "M {} {} A {r} {r} 0 {large} 1 {} {}",
        num(from.x),
        num(from.y),
        num(to.x),
        num(to.y),
        r = num(arc.r)
    )
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| Error::Xml(e.to_string()))
}

fn group<'a>(id: &'a str, color: &'a str, stroke: &'a str) -> BytesStart<'a> {
    let mut g = BytesStart::new("g");
    g.push_attribute(("id", id));
    g.push_attribute(("fill", "none"));
    g.push_attribute(("stroke", color));
    g.push_attribute(("stroke-width", stroke));
    g
}

fn circle_element(cx: f64, cy: f64, r: f64) -> BytesStart<'static> {
    let mut el = BytesStart::new("circle");
    el.push_attribute(("cx", num(cx).as_str()));
    el.push_attribute(("cy", num(cy).as_str()));
    el.push_attribute(("r", num(r).as_str()));
    el
}

/// Four decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

// ============================================================================
// TESTS
// ============================================================================
