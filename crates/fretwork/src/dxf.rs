//! DXF export for cutting software.
//!
//! Writes a minimal ASCII DXF: an empty HEADER, a LAYER table with `FRAME`
//! and `PATTERN`, and one entity per primitive. Panel coordinates are y-down;
//! DXF is y-up, so y is mirrored about the panel height and arc angles are
//! mirrored with it.
//!
//! Arcs are written as native `ARC` entities unless [`ArcMode::Segments`]
//! asks for line chains, which some older controllers need.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use lyon_geom::{point, vector, Angle};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Arc, GeometryBundle, Line};

pub const FRAME_LAYER: &str = "FRAME";
pub const PATTERN_LAYER: &str = "PATTERN";
/// AutoCAD colour index: red.
const FRAME_COLOR: u8 = 1;
/// AutoCAD colour index: green.
const PATTERN_COLOR: u8 = 3;

/// Linear unit of panel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inches,
    #[serde(alias = "mm")]
    Millimeters,
}

impl Unit {
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Millimeters => "mm",
        }
    }

    /// Length of one unit in millimetres.
    pub fn millimeters(&self) -> f64 {
        match self {
            Unit::Inches => 25.4,
            Unit::Millimeters => 1.0,
        }
    }

    /// Multiply a length in `self` by this to express it in `target`.
    pub fn factor_to(&self, target: Unit) -> f64 {
        self.millimeters() / target.millimeters()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Unit::Inches),
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Ok(Unit::Millimeters),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

/// How arc primitives are written.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ArcMode {
    /// One `ARC` entity per arc.
    #[default]
    Native,
    /// `LINE` chains within `tolerance` (output units) of the true arc.
    Segments { tolerance: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DxfOptions {
    /// Unit the panel geometry is measured in.
    pub source: Unit,
    /// Unit written to the file.
    pub target: Unit,
    pub arc_mode: ArcMode,
}

impl DxfOptions {
    pub fn factor(&self) -> f64 {
        self.source.factor_to(self.target)
    }
}

/// Encode frame and pattern geometry as DXF text.
///
/// `height` is the panel height in source units, used to mirror y.
pub fn encode_dxf(
    frame: &GeometryBundle,
    pattern: &GeometryBundle,
    width: f64,
    height: f64,
    options: &DxfOptions,
) -> Result<String> {
    if !(width > 0.0 && height > 0.0) {
        return Err(Error::InvalidPanel { width, height });
    }
    let mut out = DxfWriter { buf: String::new(), factor: options.factor(), height };

    out.pair(0, "SECTION");
    out.pair(2, "HEADER");
    out.pair(0, "ENDSEC");

    out.pair(0, "SECTION");
    out.pair(2, "TABLES");
    out.pair(0, "TABLE");
    out.pair(2, "LAYER");
    out.pair(70, 2);
    for (name, color) in [(FRAME_LAYER, FRAME_COLOR), (PATTERN_LAYER, PATTERN_COLOR)] {
        out.pair(0, "LAYER");
        out.pair(2, name);
        out.pair(70, 0);
        out.pair(62, color);
        out.pair(6, "CONTINUOUS");
    }
    out.pair(0, "ENDTAB");
    out.pair(0, "ENDSEC");

    out.pair(0, "SECTION");
    out.pair(2, "ENTITIES");
    out.bundle(frame, FRAME_LAYER, options.arc_mode);
    out.bundle(pattern, PATTERN_LAYER, options.arc_mode);
    out.pair(0, "ENDSEC");
    out.pair(0, "EOF");

    Ok(out.buf)
}

/// [`encode_dxf`] straight to a file.
pub fn write_dxf(
    path: impl AsRef<Path>,
    frame: &GeometryBundle,
    pattern: &GeometryBundle,
    width: f64,
    height: f64,
    options: &DxfOptions,
) -> Result<()> {
    let text = encode_dxf(frame, pattern, width, height, options)?;
    fs::write(path, text)?;
    Ok(())
}

/// Flatten an arc into chords no further than `tolerance` from the curve.
pub fn flatten_arc(arc: &Arc, tolerance: f64) -> Vec<Line> {
    let curve = lyon_geom::Arc {
        center: point(arc.cx, arc.cy),
        radii: vector(arc.r, arc.r),
        start_angle: Angle::radians(arc.start),
        sweep_angle: Angle::radians(arc.sweep()),
        x_rotation: Angle::radians(0.0),
    };
    let mut lines = Vec::new();
    curve.for_each_flattened(tolerance, &mut |segment| {
        lines.push(Line::new(segment.from.x, segment.from.y, segment.to.x, segment.to.y));
    });
    lines
}

struct DxfWriter {
    buf: String,
    factor: f64,
    height: f64,
}

impl DxfWriter {
    fn pair(&mut self, code: u16, value: impl fmt::Display) {
        // Writing into a String cannot fail
        let _ = write!(self.buf, "{code}\n{value}\n");
    }

    fn coord(&mut self, code: u16, value: f64) {
        // No "-0.0000" in the output, even for values that only round to zero
        let value = (value * 1e4).round() / 1e4;
        let value = if value == 0.0 { 0.0 } else { value };
        self.pair(code, format_args!("{value:.4}"));
    }

    fn x(&self, x: f64) -> f64 {
        x * self.factor
    }

    fn y(&self, y: f64) -> f64 {
        (self.height - y) * self.factor
    }

    fn bundle(&mut self, bundle: &GeometryBundle, layer: &str, arc_mode: ArcMode) {
        for line in &bundle.lines {
            self.line(line, layer);
        }
        for circle in &bundle.circles {
            self.circle(circle.cx, circle.cy, circle.r, layer);
        }
        for arc in &bundle.arcs {
            match arc_mode {
                // A full sweep would encode as a zero-length ARC
                ArcMode::Native if arc.is_full() => self.circle(arc.cx, arc.cy, arc.r, layer),
                ArcMode::Native => self.arc(arc, layer),
                ArcMode::Segments { tolerance } => {
                    // Tolerance is in output units; flattening runs in source units
                    for chord in flatten_arc(arc, tolerance / self.factor) {
                        self.line(&chord, layer);
                    }
                }
            }
        }
    }

    fn point(&mut self, code: u16, x: f64, y: f64) {
        let (x, y) = (self.x(x), self.y(y));
        self.coord(code, x);
        self.coord(code + 10, y);
        self.pair(code + 20, "0.0");
    }

    fn line(&mut self, line: &Line, layer: &str) {
        self.pair(0, "LINE");
        self.pair(8, layer);
        self.point(10, line.x1, line.y1);
        self.point(11, line.x2, line.y2);
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, layer: &str) {
        self.pair(0, "CIRCLE");
        self.pair(8, layer);
        self.point(10, cx, cy);
        self.coord(40, r * self.factor);
    }

    fn arc(&mut self, arc: &Arc, layer: &str) {
        self.pair(0, "ARC");
        self.pair(8, layer);
        self.point(10, arc.cx, arc.cy);
        self.coord(40, arc.r * self.factor);
        // Mirroring y reverses the sweep: [a, b] becomes [-b, -a]
        self.coord(50, degrees(-arc.end));
        self.coord(51, degrees(-arc.start));
    }
}

/// Radians to degrees in `[0, 360)`.
fn degrees(radians: f64) -> f64 {
    let d = radians.to_degrees().rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Circle;
    use std::f64::consts::FRAC_PI_2;

    fn pattern() -> GeometryBundle {
        GeometryBundle {
            lines: vec![Line::new(0.0, 0.0, 1.0, 1.0)],
            circles: vec![Circle::new(2.0, 2.0, 0.5)],
            arcs: vec![Arc::new(3.0, 3.0, 1.0, 0.0, FRAC_PI_2)],
            fills: Vec::new(),
        }
    }

    fn entity_count(dxf: &str, kind: &str) -> usize {
        dxf.lines().filter(|l| *l == kind).count()
    }

    #[test]
    fn sections_and_layers() {
        let dxf = encode_dxf(&GeometryBundle::new(), &pattern(), 10.0, 10.0, &DxfOptions::default()).unwrap();
        assert!(dxf.starts_with("0\nSECTION\n2\nHEADER\n0\nENDSEC\n"));
        assert!(dxf.ends_with("0\nENDSEC\n0\nEOF\n"));
        assert!(dxf.contains("2\nFRAME\n70\n0\n62\n1\n"));
        assert!(dxf.contains("2\nPATTERN\n70\n0\n62\n3\n"));
    }

    #[test]
    fn one_entity_per_primitive() {
        let frame = GeometryBundle::from_lines(vec![Line::new(0.0, 0.0, 10.0, 0.0)]);
        let dxf = encode_dxf(&frame, &pattern(), 10.0, 10.0, &DxfOptions::default()).unwrap();
        assert_eq!(entity_count(&dxf, "LINE"), 2);
        assert_eq!(entity_count(&dxf, "CIRCLE"), 1);
        assert_eq!(entity_count(&dxf, "ARC"), 1);
        assert!(dxf.contains("0\nLINE\n8\nFRAME\n"));
    }

    #[test]
    fn unit_conversion_and_y_mirror() {
        let options = DxfOptions { source: Unit::Inches, target: Unit::Millimeters, ..DxfOptions::default() };
        let bundle = GeometryBundle::from_lines(vec![Line::new(1.0, 0.0, 2.0, 1.0)]);
        let dxf = encode_dxf(&GeometryBundle::new(), &bundle, 4.0, 4.0, &options).unwrap();
        assert!(dxf.contains("10\n25.4000\n20\n101.6000\n30\n0.0\n"));
        assert!(dxf.contains("11\n50.8000\n21\n76.2000\n31\n0.0\n"));
    }

    #[test]
    fn tiny_negatives_write_as_zero() {
        let bundle = GeometryBundle::from_lines(vec![Line::new(-1e-7, 10.0 + 1e-7, -0.00004, 1.0)]);
        let dxf = encode_dxf(&GeometryBundle::new(), &bundle, 10.0, 10.0, &DxfOptions::default()).unwrap();
        assert!(dxf.contains("10\n0.0000\n20\n0.0000\n30\n0.0\n"), "{dxf}");
        assert!(dxf.contains("11\n0.0000\n21\n9.0000\n"));
        assert!(!dxf.contains("-0.0000"));
    }

    #[test]
    fn arc_angles_are_mirrored_degrees() {
        let dxf = encode_dxf(&GeometryBundle::new(), &pattern(), 10.0, 10.0, &DxfOptions::default()).unwrap();
        // Screen sweep 0..90 (clockwise on screen) is 270..360 in y-up space
        assert!(dxf.contains("50\n270.0000\n51\n0.0000\n"));
    }

    #[test]
    fn segment_mode_replaces_arcs_with_lines() {
        let options = DxfOptions { arc_mode: ArcMode::Segments { tolerance: 0.01 }, ..DxfOptions::default() };
        let dxf = encode_dxf(&GeometryBundle::new(), &pattern(), 10.0, 10.0, &options).unwrap();
        assert_eq!(entity_count(&dxf, "ARC"), 0);
        assert!(entity_count(&dxf, "LINE") > 2);
    }

    #[test]
    fn flattened_arc_hits_endpoints() {
        let arc = Arc::new(0.0, 0.0, 10.0, 0.0, FRAC_PI_2);
        let chords = flatten_arc(&arc, 0.01);
        assert!(chords.len() > 4);
        assert!(chords[0].start().distance(arc.start_point()) < 1e-9);
        assert!(chords[chords.len() - 1].end().distance(arc.end_point()) < 1e-6);
    }

    #[test]
    fn rejects_empty_panel() {
        let err = encode_dxf(&GeometryBundle::new(), &pattern(), 0.0, 10.0, &DxfOptions::default());
        assert!(matches!(err, Err(Error::InvalidPanel { .. })));
    }

    #[test]
    fn unit_names_parse() {
        assert_eq!("MM".parse::<Unit>().ok(), Some(Unit::Millimeters));
        assert_eq!("in".parse::<Unit>().ok(), Some(Unit::Inches));
        assert!("furlong".parse::<Unit>().is_err());
    }
}
