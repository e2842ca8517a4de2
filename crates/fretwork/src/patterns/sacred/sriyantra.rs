//! Simplified Sri Yantra: two upward and one downward triangle in a circle.

use crate::geometry::{Circle, GeometryBundle, Point};
use crate::params::StyleParams;
use crate::patterns::util::polygon_edges;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::size_factor;

const RADIUS: f64 = 0.35;

/// Triangle vertices as `(x, y)` multiples of the radius from the centre.
const TRIANGLES: [[(f64, f64); 3]; 3] = [
    [(0.0, -0.8), (-0.7, 0.5), (0.7, 0.5)],
    [(0.0, -0.4), (-0.5, 0.3), (0.5, 0.3)],
    [(-0.6, -0.5), (0.0, 0.6), (0.6, -0.5)],
];

pub fn generate(panel: &Panel, _rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let r = panel.short_side() * RADIUS * size_factor(params);
    let c = panel.center();

    let mut lines = Vec::with_capacity(9);
    for triangle in &TRIANGLES {
        let corners = triangle.map(|(x, y)| Point::new(c.x + x * r, c.y + y * r));
        lines.extend(polygon_edges(&corners));
    }
    let mut bundle = GeometryBundle::from_lines(lines);
    bundle.circles.push(Circle::new(c.x, c.y, r));
    bundle
}
