//! Clean-up applied to every bundle before it leaves the engine.
//!
//! Generators over-cover the panel on purpose (one padding cell each side),
//! so two passes run unconditionally, clip first:
//!
//! 1. [`margin_clip`] drops geometry lying wholly past one edge of a
//!    rectangle inset 3% of the shorter panel side.
//! 2. [`deduplicate`] removes primitives that coincide at a 0.01 tolerance,
//!    which shared cell edges and ring crossings produce in bulk.

use rustc_hash::FxHashSet;

use crate::geometry::{Arc, Circle, GeometryBundle, Line};
use crate::patterns::Panel;

/// Margin inset as a fraction of the shorter panel side.
pub const MARGIN_FRACTION: f64 = 0.03;

/// Default coordinate tolerance for deduplication.
pub const DEDUP_TOLERANCE: f64 = 0.01;

/// The inset rectangle geometry is clipped against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl MarginRect {
    pub fn for_panel(panel: &Panel) -> Self {
        let margin = panel.short_side() * MARGIN_FRACTION;
        Self {
            x0: margin,
            y0: margin,
            x1: panel.width - margin,
            y1: panel.height - margin,
        }
    }

    /// True when the segment lies entirely beyond one edge.
    ///
    /// A segment crossing the margin, or passing outside a corner, is kept
    /// whole: this is a coarse filter, not segment clipping.
    #[inline]
    pub fn excludes_line(&self, line: &Line) -> bool {
        (line.x1 < self.x0 && line.x2 < self.x0)
            || (line.x1 > self.x1 && line.x2 > self.x1)
            || (line.y1 < self.y0 && line.y2 < self.y0)
            || (line.y1 > self.y1 && line.y2 > self.y1)
    }

    /// True when the box `(min_x, min_y, max_x, max_y)` overlaps the rect
    /// with positive area.
    #[inline]
    pub fn overlaps(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> bool {
        max_x > self.x0 && min_x < self.x1 && max_y > self.y0 && min_y < self.y1
    }
}

/// Drop primitives wholly outside the margin rectangle.
///
/// Lines follow [`MarginRect::excludes_line`]. Circles and arcs are judged
/// by the bounding box of their full circle, fills by their own box.
pub fn margin_clip(bundle: GeometryBundle, rect: &MarginRect) -> GeometryBundle {
    let circle_inside =
        |cx: f64, cy: f64, r: f64| rect.overlaps(cx - r, cy - r, cx + r, cy + r);

    GeometryBundle {
        lines: bundle.lines.into_iter().filter(|l| !rect.excludes_line(l)).collect(),
        circles: bundle
            .circles
            .into_iter()
            .filter(|c| circle_inside(c.cx, c.cy, c.r))
            .collect(),
        arcs: bundle
            .arcs
            .into_iter()
            .filter(|a| circle_inside(a.cx, a.cy, a.r))
            .collect(),
        fills: bundle
            .fills
            .into_iter()
            .filter(|f| {
                f.bounding_box()
                    .is_some_and(|(x0, y0, x1, y1)| rect.overlaps(x0, y0, x1, y1))
            })
            .collect(),
    }
}

/// Keep the first of every group of coincident primitives.
///
/// Lines are keyed by their rounded endpoints and checked in both
/// directions, so a reversed copy counts as a duplicate. Circles key on
/// `(cx, cy, r)` and arcs additionally on their angles. Fills pass through.
/// Applying this twice gives the same result as applying it once.
pub fn deduplicate(bundle: GeometryBundle, tolerance: f64) -> GeometryBundle {
    let q = |v: f64| quantize(v, tolerance);

    let mut seen_lines: FxHashSet<[i64; 4]> = FxHashSet::default();
    let lines = bundle
        .lines
        .into_iter()
        .filter(|l| {
            let forward = [q(l.x1), q(l.y1), q(l.x2), q(l.y2)];
            let reverse = [q(l.x2), q(l.y2), q(l.x1), q(l.y1)];
            if seen_lines.contains(&forward) || seen_lines.contains(&reverse) {
                return false;
            }
            seen_lines.insert(forward);
            true
        })
        .collect::<Vec<Line>>();

    let mut seen_circles: FxHashSet<[i64; 3]> = FxHashSet::default();
    let circles = bundle
        .circles
        .into_iter()
        .filter(|c| seen_circles.insert([q(c.cx), q(c.cy), q(c.r)]))
        .collect::<Vec<Circle>>();

    let mut seen_arcs: FxHashSet<[i64; 5]> = FxHashSet::default();
    let arcs = bundle
        .arcs
        .into_iter()
        .filter(|a| seen_arcs.insert([q(a.cx), q(a.cy), q(a.r), q(a.start), q(a.end)]))
        .collect::<Vec<Arc>>();

    GeometryBundle { lines, circles, arcs, fills: bundle.fills }
}

/// Clip, then deduplicate at [`DEDUP_TOLERANCE`].
pub fn finish(bundle: GeometryBundle, panel: &Panel) -> GeometryBundle {
    let rect = MarginRect::for_panel(panel);
    deduplicate(margin_clip(bundle, &rect), DEDUP_TOLERANCE)
}

/// Index of the tolerance bucket `v` rounds to.
#[inline]
fn quantize(v: f64, tolerance: f64) -> i64 {
    (v / tolerance).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> Panel {
        Panel::new(100.0, 200.0)
    }

    #[test]
    fn margin_is_three_percent_of_short_side() {
        let rect = MarginRect::for_panel(&panel());
        assert_eq!(rect, MarginRect { x0: 3.0, y0: 3.0, x1: 97.0, y1: 197.0 });
    }

    #[test]
    fn lines_dropped_only_past_one_edge() {
        let rect = MarginRect::for_panel(&panel());
        let bundle = GeometryBundle::from_lines(vec![
            Line::new(1.0, 10.0, 2.0, 50.0),   // both left of x0
            Line::new(1.0, 10.0, 50.0, 50.0),  // crosses the margin
            Line::new(-5.0, 10.0, 10.0, -5.0), // cuts the corner, not past one edge
            Line::new(10.0, 198.0, 90.0, 199.0), // both below y1
        ]);
        let clipped = margin_clip(bundle, &rect);
        assert_eq!(clipped.lines.len(), 2);
        assert_eq!(clipped.lines[0], Line::new(1.0, 10.0, 50.0, 50.0));
        assert_eq!(clipped.lines[1], Line::new(-5.0, 10.0, 10.0, -5.0));
    }

    #[test]
    fn circles_need_positive_overlap() {
        let rect = MarginRect::for_panel(&panel());
        let mut bundle = GeometryBundle::new();
        bundle.circles.push(Circle::new(-1.0, 50.0, 3.0)); // reaches x = 2
        bundle.circles.push(Circle::new(-1.0, 50.0, 5.0)); // reaches x = 4
        bundle.arcs.push(Arc::new(150.0, 50.0, 10.0, 0.0, 1.0));
        let clipped = margin_clip(bundle, &rect);
        assert_eq!(clipped.circles, vec![Circle::new(-1.0, 50.0, 5.0)]);
        assert!(clipped.arcs.is_empty());
    }

    #[test]
    fn reversed_lines_collapse() {
        let bundle = GeometryBundle::from_lines(vec![
            Line::new(0.0, 0.0, 10.0, 10.0),
            Line::new(10.0, 10.0, 0.0, 0.0),
            Line::new(0.001, 0.0, 10.0, 10.004),
            Line::new(0.0, 0.0, 10.0, 10.1),
        ]);
        let deduped = deduplicate(bundle, DEDUP_TOLERANCE);
        assert_eq!(deduped.lines.len(), 2);
        assert_eq!(deduped.lines[0], Line::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn circles_and_arcs_dedupe_on_all_fields() {
        let mut bundle = GeometryBundle::new();
        bundle.circles.push(Circle::new(5.0, 5.0, 2.0));
        bundle.circles.push(Circle::new(5.0, 5.0, 2.001));
        bundle.circles.push(Circle::new(5.0, 5.0, 3.0));
        bundle.arcs.push(Arc::new(0.0, 0.0, 1.0, 0.0, 1.0));
        bundle.arcs.push(Arc::new(0.0, 0.0, 1.0, 0.0, 2.0));
        bundle.arcs.push(Arc::new(0.0, 0.0, 1.0, 0.0, 1.0));
        let deduped = deduplicate(bundle, DEDUP_TOLERANCE);
        assert_eq!(deduped.circles.len(), 2);
        assert_eq!(deduped.arcs.len(), 2);
    }

    #[test]
    fn dedupe_is_idempotent() {
        let bundle = GeometryBundle::from_lines(
            (0..50)
                .map(|i| {
                    let t = i as f64 * 0.004;
                    Line::new(t, 0.0, 5.0, t)
                })
                .collect(),
        );
        let once = deduplicate(bundle, DEDUP_TOLERANCE);
        let twice = deduplicate(once.clone(), DEDUP_TOLERANCE);
        assert_eq!(once, twice);
    }

    #[test]
    fn finish_clips_before_dedupe() {
        let bundle = GeometryBundle::from_lines(vec![
            Line::new(-10.0, 10.0, -5.0, 10.0),
            Line::new(10.0, 10.0, 20.0, 10.0),
            Line::new(20.0, 10.0, 10.0, 10.0),
        ]);
        let done = finish(bundle, &panel());
        assert_eq!(done.lines, vec![Line::new(10.0, 10.0, 20.0, 10.0)]);
    }
}
