//! Core geometry types for fretwork.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! A generator's output is a [`GeometryBundle`]: plain vectors of lines,
//! circles, arcs and fill regions in the caller's panel-local units.
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy only for small stack values)
//! - `PartialEq` = compare with `==`
//! - `Serialize` = hand the bundle straight to serde_json in the CLI

use std::f64::consts::TAU;

use serde::Serialize;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A full circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// A circular arc swept from `start` to `end` (radians, `end >= start`).
///
/// Angles follow the panel's coordinate frame: x right, y down, so
/// increasing angle turns clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arc {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub start: f64,
    pub end: f64,
}

/// A solid region, for previews that shade material.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Fill {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Polygon { points: Vec<Point> },
}

/// Everything one synthesis call produces.
///
/// ## Rust Lesson #4: Ownership & Vec
///
/// The bundle OWNS its primitives. Once returned it is never mutated by the
/// engine again; callers get a fresh value on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeometryBundle {
    pub lines: Vec<Line>,
    pub circles: Vec<Circle>,
    pub arcs: Vec<Arc>,
    pub fills: Vec<Fill>,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point on the segment `self -> other` at parameter `t`.
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    /// Point at `radius` from `self` in direction `angle` (radians).
    #[inline]
    pub fn polar(&self, radius: f64, angle: f64) -> Point {
        Point::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a line from two points.
    #[inline]
    pub fn between(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Get the start point of the line.
    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Get the end point of the line.
    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Length of the line segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Swap x and y on both endpoints.
    #[inline]
    pub fn transposed(&self) -> Line {
        Line::new(self.y1, self.x1, self.y2, self.x2)
    }

    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Line {
        Line::new(self.x1 + dx, self.y1 + dy, self.x2 + dx, self.y2 + dy)
    }
}

impl Circle {
    #[inline]
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self { cx, cy, r }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Circle {
        Circle::new(self.cx + dx, self.cy + dy, self.r)
    }
}

impl Arc {
    #[inline]
    pub fn new(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> Self {
        Self { cx, cy, r, start, end }
    }

    /// Arc on `circle` between two angles.
    #[inline]
    pub fn on(circle: &Circle, start: f64, end: f64) -> Self {
        Self::new(circle.cx, circle.cy, circle.r, start, end)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// Swept angle in radians.
    #[inline]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// True when the arc covers the whole circle.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.sweep() >= TAU - 1e-9
    }

    #[inline]
    pub fn start_point(&self) -> Point {
        self.center().polar(self.r, self.start)
    }

    #[inline]
    pub fn end_point(&self) -> Point {
        self.center().polar(self.r, self.end)
    }

    #[inline]
    pub fn translated(&self, dx: f64, dy: f64) -> Arc {
        Arc::new(self.cx + dx, self.cy + dy, self.r, self.start, self.end)
    }
}

impl Fill {
    pub fn translated(&self, dx: f64, dy: f64) -> Fill {
        match self {
            Fill::Rect { x, y, width, height } => Fill::Rect {
                x: x + dx,
                y: y + dy,
                width: *width,
                height: *height,
            },
            Fill::Polygon { points } => Fill::Polygon {
                points: points.iter().map(|p| Point::new(p.x + dx, p.y + dy)).collect(),
            },
        }
    }

    /// Bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// An empty polygon has no bounds, so we return `None` rather than a
    /// sentinel the caller could forget to check.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Fill::Rect { x, y, width, height } => Some((*x, *y, x + width, y + height)),
            Fill::Polygon { points } => {
                if points.is_empty() {
                    return None;
                }
                let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
                let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
                let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
                let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
                Some((min_x, min_y, max_x, max_y))
            }
        }
    }
}

impl GeometryBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle holding only lines.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines, ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty() && self.arcs.is_empty() && self.fills.is_empty()
    }

    /// Total number of primitives of every kind.
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.circles.len() + self.arcs.len() + self.fills.len()
    }

    /// Append every primitive of `other`, preserving order.
    pub fn extend(&mut self, other: GeometryBundle) {
        self.lines.extend(other.lines);
        self.circles.extend(other.circles);
        self.arcs.extend(other.arcs);
        self.fills.extend(other.fills);
    }

    /// Copy of the bundle shifted by (dx, dy).
    pub fn translated(&self, dx: f64, dy: f64) -> GeometryBundle {
        GeometryBundle {
            lines: self.lines.iter().map(|l| l.translated(dx, dy)).collect(),
            circles: self.circles.iter().map(|c| c.translated(dx, dy)).collect(),
            arcs: self.arcs.iter().map(|a| a.translated(dx, dy)).collect(),
            fills: self.fills.iter().map(|f| f.translated(dx, dy)).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Point::new(0.0, 0.0).lerp(Point::new(10.0, 4.0), 0.5);
        assert_eq!(mid, Point::new(5.0, 2.0));
    }

    #[test]
    fn arc_endpoints() {
        let arc = Arc::new(0.0, 0.0, 2.0, 0.0, PI / 2.0);
        let end = arc.end_point();
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(end.y, 2.0, epsilon = 1e-12);
        assert!(!arc.is_full());
        assert!(Arc::new(0.0, 0.0, 1.0, 1.0, 1.0 + TAU).is_full());
    }

    #[test]
    fn bundle_translate_and_extend() {
        let mut bundle = GeometryBundle::from_lines(vec![Line::new(0.0, 0.0, 1.0, 0.0)]);
        bundle.circles.push(Circle::new(1.0, 1.0, 0.5));

        let moved = bundle.translated(10.0, 20.0);
        assert_eq!(moved.lines[0], Line::new(10.0, 20.0, 11.0, 20.0));
        assert_eq!(moved.circles[0], Circle::new(11.0, 21.0, 0.5));

        bundle.extend(moved);
        assert_eq!(bundle.primitive_count(), 4);
    }

    #[test]
    fn fill_bounds() {
        let rect = Fill::Rect { x: 1.0, y: 2.0, width: 3.0, height: 4.0 };
        assert_eq!(rect.bounding_box(), Some((1.0, 2.0, 4.0, 6.0)));
        assert_eq!(Fill::Polygon { points: vec![] }.bounding_box(), None);
    }

    #[test]
    fn empty_bundle() {
        assert!(GeometryBundle::new().is_empty());
    }
}
