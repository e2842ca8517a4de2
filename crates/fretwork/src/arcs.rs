//! Splitting overlapping circles into arcs at their intersections.
//!
//! Ring motifs place many equal circles on concentric rings. Before bridges
//! can be cut into them, each circle's outline has to be broken into the
//! arcs between consecutive crossings with its neighbours. Hidden arcs are
//! kept: this only splits outlines, it never removes any.

use std::f64::consts::TAU;

use crate::geometry::{Arc, Circle, GeometryBundle, Point};

/// Distance below which two circles count as tangent or coincident.
pub const INTERSECTION_EPSILON: f64 = 1e-3;

/// Angles closer than this collapse to one split point.
const ANGLE_EPSILON: f64 = 1e-9;

/// Crossing points of two circles.
///
/// Uses the radical-line construction: the chord between the crossings
/// is perpendicular to the centre line at distance `a` from the first
/// centre, with half-length `h`.
///
/// - Separate, nested, or (near-)concentric circles return no points.
/// - Circles within [`INTERSECTION_EPSILON`] of tangency return one point.
pub fn circle_intersections(first: &Circle, second: &Circle) -> Vec<Point> {
    let dx = second.cx - first.cx;
    let dy = second.cy - first.cy;
    let d = dx.hypot(dy);
    let (r1, r2) = (first.r, second.r);

    if d < INTERSECTION_EPSILON
        || d > r1 + r2 + INTERSECTION_EPSILON
        || d < (r1 - r2).abs() - INTERSECTION_EPSILON
    {
        return Vec::new();
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let foot = Point::new(first.cx + a * dx / d, first.cy + a * dy / d);

    let external = (d - (r1 + r2)).abs() < INTERSECTION_EPSILON;
    let internal = (d - (r1 - r2).abs()).abs() < INTERSECTION_EPSILON;
    if external || internal || h < INTERSECTION_EPSILON {
        return vec![foot];
    }

    vec![
        Point::new(foot.x + h * dy / d, foot.y - h * dx / d),
        Point::new(foot.x - h * dy / d, foot.y + h * dx / d),
    ]
}

/// A circle's outline after splitting.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// No crossings: the circle is kept whole.
    Whole(Circle),
    /// Arcs between consecutive crossings, in increasing angle.
    Arcs(Vec<Arc>),
}

impl Outline {
    /// Total swept angle. Always `TAU` for a well-formed outline.
    pub fn angular_span(&self) -> f64 {
        match self {
            Outline::Whole(_) => TAU,
            Outline::Arcs(arcs) => arcs.iter().map(Arc::sweep).sum(),
        }
    }
}

/// Split every circle at its crossings with every other circle.
///
/// Returns one [`Outline`] per input circle, in input order. O(n²) in the
/// number of circles.
pub fn decompose_circles_into_arcs(circles: &[Circle]) -> Vec<Outline> {
    circles
        .iter()
        .enumerate()
        .map(|(i, circle)| {
            let mut angles: Vec<f64> = circles
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .flat_map(|(_, other)| circle_intersections(circle, other))
                .map(|p| normalize_angle((p.y - circle.cy).atan2(p.x - circle.cx)))
                .collect();

            if angles.is_empty() {
                return Outline::Whole(*circle);
            }

            angles.sort_by(f64::total_cmp);
            angles.dedup_by(|b, a| (*b - *a).abs() < ANGLE_EPSILON);
            // A split just below TAU is the same point as one at zero
            if angles.len() > 1 {
                let first = angles[0];
                if let Some(&last) = angles.last() {
                    if (first + TAU - last).abs() < ANGLE_EPSILON {
                        angles.pop();
                    }
                }
            }

            let n = angles.len();
            let arcs = (0..n)
                .map(|k| {
                    let start = angles[k];
                    let end = if k + 1 < n { angles[k + 1] } else { angles[0] + TAU };
                    Arc::on(circle, start, end)
                })
                .collect();
            Outline::Arcs(arcs)
        })
        .collect()
}

/// Flatten outlines into a bundle: whole circles as circles, the rest as arcs.
pub fn outlines_to_bundle(outlines: Vec<Outline>) -> GeometryBundle {
    let mut bundle = GeometryBundle::new();
    for outline in outlines {
        match outline {
            Outline::Whole(circle) => bundle.circles.push(circle),
            Outline::Arcs(arcs) => bundle.arcs.extend(arcs),
        }
    }
    bundle
}

/// Angle in `[0, TAU)`.
#[inline]
fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if a >= TAU { 0.0 } else { a }
}
