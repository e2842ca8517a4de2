//! Thirteen points on two interleaved rings, every pair connected.

use std::f64::consts::PI;

use crate::geometry::GeometryBundle;
use crate::params::StyleParams;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::{connect_all, ring_points, size_factor};

const RADIUS: f64 = 0.35;

pub fn generate(panel: &Panel, _rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let radius = panel.short_side() * RADIUS * size_factor(params);
    let center = panel.center();

    let mut points = vec![center];
    points.extend(ring_points(center, radius, 6, 0.0));
    points.extend(ring_points(center, radius, 6, PI / 6.0));
    GeometryBundle::from_lines(connect_all(&points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_only() {
        let bundle = generate(&Panel::new(300.0, 300.0), &mut RandomStream::new(1), &StyleParams::new());
        assert_eq!(bundle.lines.len(), 78);
        assert!(bundle.circles.is_empty());
        assert!(bundle.arcs.is_empty());
    }

    #[test]
    fn spokes_reach_radius() {
        let panel = Panel::new(300.0, 200.0);
        let bundle = generate(&panel, &mut RandomStream::new(1), &StyleParams::new().with_density(1.0));
        // First twelve lines run from the centre
        let spoke = bundle.lines[0];
        assert!((spoke.length() - 200.0 * RADIUS).abs() < 1e-9);
    }
}
