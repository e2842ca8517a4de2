//! Panel outlines other than a plain rectangle.
//!
//! The engine always works on the bounding rectangle. A shaped panel is
//! produced afterwards: [`PanelShape::clip`] drops pattern geometry that
//! falls outside the outline, and [`PanelShape::frame`] supplies the outline
//! itself for the encoders.
//!
//! The clip is relaxed on purpose: a line survives if either endpoint is
//! inside, so cuts that cross the frame are kept whole and meet it.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::{Circle, GeometryBundle, Line, Point};

/// Chords used to draw an oval frame.
pub const OVAL_SEGMENTS: usize = 64;
/// Chords used for the curved top of an arch frame.
pub const ARCH_SEGMENTS: usize = 32;
/// Height of an arch's shoulders as a fraction of panel height.
const ARCH_SPRING: f64 = 0.6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelShape {
    #[default]
    Rectangle,
    Circle,
    /// Rectangular below the shoulders, half-ellipse above.
    Arch,
    Oval,
}

impl PanelShape {
    pub fn all() -> &'static [PanelShape] {
        &[PanelShape::Rectangle, PanelShape::Circle, PanelShape::Arch, PanelShape::Oval]
    }

    pub fn name(&self) -> &'static str {
        match self {
            PanelShape::Rectangle => "rectangle",
            PanelShape::Circle => "circle",
            PanelShape::Arch => "arch",
            PanelShape::Oval => "oval",
        }
    }

    /// Inside test for a point on a `w` x `h` panel (edges count as inside).
    pub fn contains(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        match self {
            PanelShape::Rectangle => (0.0..=w).contains(&x) && (0.0..=h).contains(&y),
            PanelShape::Circle => {
                let r = w.min(h) / 2.0;
                (x - w / 2.0).hypot(y - h / 2.0) <= r
            }
            PanelShape::Arch => {
                let spring = h * ARCH_SPRING;
                if !(0.0..=w).contains(&x) || !(0.0..=h).contains(&y) {
                    return false;
                }
                if y >= spring {
                    return true;
                }
                in_ellipse(x, y, w / 2.0, spring, w / 2.0, spring)
            }
            PanelShape::Oval => in_ellipse(x, y, w / 2.0, h / 2.0, w / 2.0, h / 2.0),
        }
    }

    /// Keep pattern geometry inside the outline.
    ///
    /// Lines need one endpoint inside, circles their centre. Arcs and fills
    /// pass through. A rectangle returns the bundle untouched.
    pub fn clip(&self, bundle: GeometryBundle, w: f64, h: f64) -> GeometryBundle {
        if *self == PanelShape::Rectangle {
            return bundle;
        }
        let GeometryBundle { lines, circles, arcs, fills } = bundle;
        GeometryBundle {
            lines: lines
                .into_iter()
                .filter(|l| self.contains(l.x1, l.y1, w, h) || self.contains(l.x2, l.y2, w, h))
                .collect(),
            circles: circles.into_iter().filter(|c| self.contains(c.cx, c.cy, w, h)).collect(),
            arcs,
            fills,
        }
    }

    /// The outline as cuttable geometry.
    ///
    /// Rectangle: 4 lines. Circle: one circle. Oval: [`OVAL_SEGMENTS`]
    /// chords. Arch: 3 straight sides plus [`ARCH_SEGMENTS`] chords.
    pub fn frame(&self, w: f64, h: f64) -> GeometryBundle {
        match self {
            PanelShape::Rectangle => GeometryBundle::from_lines(vec![
                Line::new(0.0, 0.0, w, 0.0),
                Line::new(w, 0.0, w, h),
                Line::new(w, h, 0.0, h),
                Line::new(0.0, h, 0.0, 0.0),
            ]),
            PanelShape::Circle => GeometryBundle {
                circles: vec![Circle::new(w / 2.0, h / 2.0, w.min(h) / 2.0)],
                ..GeometryBundle::default()
            },
            PanelShape::Oval => {
                let points = ellipse_points(w / 2.0, h / 2.0, w / 2.0, h / 2.0, 0.0, TAU, OVAL_SEGMENTS);
                GeometryBundle::from_lines(chain(&points))
            }
            PanelShape::Arch => {
                let spring = h * ARCH_SPRING;
                let mut lines = vec![
                    Line::new(0.0, spring, 0.0, h),
                    Line::new(0.0, h, w, h),
                    Line::new(w, h, w, spring),
                ];
                // Right shoulder over the top to the left one
                let points = ellipse_points(w / 2.0, spring, w / 2.0, spring, 0.0, -PI, ARCH_SEGMENTS);
                lines.extend(chain(&points));
                GeometryBundle::from_lines(lines)
            }
        }
    }

    /// SVG path data for the outline.
    pub fn frame_path(&self, w: f64, h: f64) -> String {
        match self {
            PanelShape::Rectangle => format!("M 0 0 H {w} V {h} H 0 Z"),
            PanelShape::Circle => {
                let r = w.min(h) / 2.0;
                let cy = h / 2.0;
                format!(
                    "M {} {cy} A {r} {r} 0 1 0 {} {cy} A {r} {r} 0 1 0 {} {cy} Z",
                    w / 2.0 - r,
                    w / 2.0 + r,
                    w / 2.0 - r
                )
            }
            PanelShape::Oval => {
                let (rx, ry) = (w / 2.0, h / 2.0);
                format!("M 0 {ry} A {rx} {ry} 0 1 0 {w} {ry} A {rx} {ry} 0 1 0 0 {ry} Z")
            }
            PanelShape::Arch => {
                let spring = h * ARCH_SPRING;
                let rx = w / 2.0;
                format!("M 0 {h} V {spring} A {rx} {spring} 0 0 1 {w} {spring} V {h} Z")
            }
        }
    }
}

impl fmt::Display for PanelShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PanelShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangle" | "rect" => Ok(PanelShape::Rectangle),
            "circle" => Ok(PanelShape::Circle),
            "arch" => Ok(PanelShape::Arch),
            "oval" | "ellipse" => Ok(PanelShape::Oval),
            other => Err(Error::UnknownShape(other.to_string())),
        }
    }
}

#[inline]
fn in_ellipse(x: f64, y: f64, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = (x - cx) / rx;
    let dy = (y - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

/// `segments + 1` points from angle `from` to `to`.
fn ellipse_points(cx: f64, cy: f64, rx: f64, ry: f64, from: f64, to: f64, segments: usize) -> Vec<Point> {
    (0..=segments)
        .map(|i| {
            let t = from + (to - from) * i as f64 / segments as f64;
            Point::new(cx + rx * t.cos(), cy + ry * t.sin())
        })
        .collect()
}

fn chain(points: &[Point]) -> Vec<Line> {
    points.windows(2).map(|pair| Line::between(pair[0], pair[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for shape in PanelShape::all() {
            assert_eq!(shape.name().parse::<PanelShape>().ok(), Some(*shape));
        }
        assert!("hexagon".parse::<PanelShape>().is_err());
    }

    #[test]
    fn contains_per_shape() {
        let (w, h) = (200.0, 100.0);
        assert!(PanelShape::Rectangle.contains(0.0, 0.0, w, h));
        assert!(!PanelShape::Rectangle.contains(-0.1, 50.0, w, h));

        // Circle radius is half the short side
        assert!(PanelShape::Circle.contains(100.0, 1.0, w, h));
        assert!(!PanelShape::Circle.contains(40.0, 50.0, w, h));

        assert!(PanelShape::Oval.contains(1.0, 50.0, w, h));
        assert!(!PanelShape::Oval.contains(5.0, 5.0, w, h));

        // Below the shoulders the arch is a box, above it an ellipse
        assert!(PanelShape::Arch.contains(1.0, 95.0, w, h));
        assert!(!PanelShape::Arch.contains(1.0, 5.0, w, h));
        assert!(PanelShape::Arch.contains(100.0, 1.0, w, h));
    }

    #[test]
    fn rectangle_clip_is_identity() {
        let bundle = GeometryBundle::from_lines(vec![Line::new(-50.0, -50.0, -40.0, -40.0)]);
        assert_eq!(PanelShape::Rectangle.clip(bundle.clone(), 10.0, 10.0), bundle);
    }

    #[test]
    fn clip_keeps_lines_with_one_end_inside() {
        let bundle = GeometryBundle {
            lines: vec![
                Line::new(50.0, 50.0, 150.0, 50.0),
                Line::new(0.0, 0.0, 5.0, 5.0),
            ],
            circles: vec![Circle::new(50.0, 50.0, 80.0), Circle::new(2.0, 2.0, 1.0)],
            ..GeometryBundle::default()
        };
        let clipped = PanelShape::Circle.clip(bundle, 100.0, 100.0);
        assert_eq!(clipped.lines.len(), 1);
        assert_eq!(clipped.circles.len(), 1);
    }

    #[test]
    fn frame_primitive_counts() {
        assert_eq!(PanelShape::Rectangle.frame(10.0, 20.0).lines.len(), 4);
        let circle = PanelShape::Circle.frame(10.0, 20.0);
        assert!(circle.lines.is_empty());
        assert_eq!(circle.circles.len(), 1);
        assert_eq!(PanelShape::Oval.frame(10.0, 20.0).lines.len(), OVAL_SEGMENTS);
        assert_eq!(PanelShape::Arch.frame(10.0, 20.0).lines.len(), 3 + ARCH_SEGMENTS);
    }

    #[test]
    fn arch_frame_is_closed() {
        let lines = PanelShape::Arch.frame(40.0, 80.0).lines;
        for pair in lines.windows(2) {
            assert!(pair[0].end().distance(pair[1].start()) < 1e-9);
        }
        let first = lines[0].start();
        let last = lines[lines.len() - 1].end();
        assert!(first.distance(last) < 1e-9);
    }

    #[test]
    fn frame_paths_start_with_move() {
        for shape in PanelShape::all() {
            let path = shape.frame_path(100.0, 60.0);
            assert!(path.starts_with("M "), "{shape}: {path}");
            assert!(path.ends_with('Z'));
        }
    }
}
