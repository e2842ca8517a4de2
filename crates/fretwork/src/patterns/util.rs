//! Shared outline builders for pattern generation.
//!
//! Most motifs are a handful of closed outlines, some with bridge gaps cut
//! into them. These helpers build the line sets so every generator emits
//! edges in the same winding and order.

use crate::geometry::{Line, Point};

/// Closed axis-aligned rectangle, clockwise from the top-left corner.
pub fn rect_outline(x: f64, y: f64, w: f64, h: f64) -> [Line; 4] {
    [
        Line::new(x, y, x + w, y),
        Line::new(x + w, y, x + w, y + h),
        Line::new(x + w, y + h, x, y + h),
        Line::new(x, y + h, x, y),
    ]
}

/// Rectangle with a bridge of width `2 * half_gap` left uncut at each side
/// midpoint.
///
/// Returns eight segments, two per side, clockwise from the top-left.
pub fn bridged_rect(x: f64, y: f64, w: f64, h: f64, half_gap: f64) -> [Line; 8] {
    let mx = x + w / 2.0;
    let my = y + h / 2.0;
    [
        Line::new(x, y, mx - half_gap, y),
        Line::new(mx + half_gap, y, x + w, y),
        Line::new(x + w, y, x + w, my - half_gap),
        Line::new(x + w, my + half_gap, x + w, y + h),
        Line::new(x + w, y + h, mx + half_gap, y + h),
        Line::new(mx - half_gap, y + h, x, y + h),
        Line::new(x, y + h, x, my + half_gap),
        Line::new(x, my - half_gap, x, y),
    ]
}

/// Closed diamond: top, right, bottom, left vertices.
pub fn diamond_outline(cx: f64, cy: f64, hw: f64, hh: f64) -> [Line; 4] {
    [
        Line::new(cx, cy - hh, cx + hw, cy),
        Line::new(cx + hw, cy, cx, cy + hh),
        Line::new(cx, cy + hh, cx - hw, cy),
        Line::new(cx - hw, cy, cx, cy - hh),
    ]
}

/// Diamond whose four sides stop a fraction `g` short of both vertices,
/// leaving a bridge at each vertex.
///
/// The bridge at the top and bottom vertices is `2 * hw * g` wide; at the
/// left and right ones it is `2 * hh * g`.
pub fn bridged_diamond(cx: f64, cy: f64, hw: f64, hh: f64, g: f64) -> [Line; 4] {
    let k = 1.0 - g;
    [
        Line::new(cx + hw * g, cy - hh * k, cx + hw * k, cy - hh * g),
        Line::new(cx + hw * k, cy + hh * g, cx + hw * g, cy + hh * k),
        Line::new(cx - hw * g, cy + hh * k, cx - hw * k, cy + hh * g),
        Line::new(cx - hw * k, cy - hh * g, cx - hw * g, cy - hh * k),
    ]
}

/// Edges of a closed polygon, last vertex back to the first.
pub fn polygon_edges(points: &[Point]) -> Vec<Line> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n).map(|i| Line::between(points[i], points[(i + 1) % n])).collect()
}

/// Vertices of a regular polygon; vertex `i` sits at
/// `rotation + i * TAU / sides`.
pub fn regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    let step = std::f64::consts::TAU / sides.max(1) as f64;
    (0..sides).map(|i| center.polar(radius, rotation + step * i as f64)).collect()
}

/// Segment `a -> b` with a gap of `fraction` of its length cut out of the
/// middle.
pub fn split_with_gap(a: Point, b: Point, fraction: f64) -> [Line; 2] {
    let half = fraction / 2.0;
    [
        Line::between(a, a.lerp(b, 0.5 - half)),
        Line::between(a.lerp(b, 0.5 + half), b),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rect_outline_is_closed() {
        let edges = rect_outline(0.0, 0.0, 4.0, 2.0);
        for i in 0..4 {
            assert_eq!(edges[i].end(), edges[(i + 1) % 4].start());
        }
    }

    #[test]
    fn bridged_rect_gaps_at_midpoints() {
        let edges = bridged_rect(0.0, 0.0, 10.0, 6.0, 1.0);
        // Top side: gap from x=4 to x=6
        assert_eq!(edges[0], Line::new(0.0, 0.0, 4.0, 0.0));
        assert_eq!(edges[1], Line::new(6.0, 0.0, 10.0, 0.0));
        // Right side: gap from y=2 to y=4
        assert_eq!(edges[2].end(), Point::new(10.0, 2.0));
        assert_eq!(edges[3].start(), Point::new(10.0, 4.0));
        let cut: f64 = edges.iter().map(Line::length).sum();
        assert_relative_eq!(cut, 32.0 - 8.0);
    }

    #[test]
    fn bridged_diamond_vertex_bridges() {
        let g = 0.1;
        let edges = bridged_diamond(0.0, 0.0, 5.0, 8.0, g);
        // Top vertex: last edge ends and first edge starts either side of it
        let top_gap = edges[3].end().distance(edges[0].start());
        assert_relative_eq!(top_gap, 2.0 * 5.0 * g, epsilon = 1e-12);
        // Right vertex
        let right_gap = edges[0].end().distance(edges[1].start());
        assert_relative_eq!(right_gap, 2.0 * 8.0 * g, epsilon = 1e-12);
    }

    #[test]
    fn split_leaves_centred_gap() {
        let [a, b] = split_with_gap(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 0.2);
        assert_eq!(a, Line::new(0.0, 0.0, 4.0, 0.0));
        assert_eq!(b, Line::new(6.0, 0.0, 10.0, 0.0));
    }

    #[test]
    fn polygon_edges_wrap() {
        let points = regular_polygon(Point::new(0.0, 0.0), 1.0, 3, 0.0);
        let edges = polygon_edges(&points);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].end(), points[0]);
        assert!(polygon_edges(&points[..1]).is_empty());
    }
}
