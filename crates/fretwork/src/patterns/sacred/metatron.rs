//! Metatron's cube: the fruit of life with all 78 centre pairs joined.

use std::f64::consts::FRAC_PI_3;

use crate::geometry::{Circle, GeometryBundle, Point};
use crate::params::StyleParams;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::{connect_all, size_factor};

/// Circle radius, which is also the centre spacing, relative to the short
/// side. The outermost circles reach `3R` from the middle.
const RADIUS: f64 = 0.16;

pub fn generate(panel: &Panel, _rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let r = panel.short_side() * RADIUS * size_factor(params);
    let centers = fruit_of_life(panel.center(), r);

    let mut bundle = GeometryBundle::from_lines(connect_all(&centers));
    bundle.circles = centers.iter().map(|p| Circle::new(p.x, p.y, r)).collect();
    bundle
}

/// Centre, six at `r`, six at `2r`, the two rings on the same spokes.
fn fruit_of_life(center: Point, r: f64) -> Vec<Point> {
    let mut points = vec![center];
    for ring in [1.0, 2.0] {
        points.extend((0..6).map(|i| center.polar(r * ring, FRAC_PI_3 * i as f64)));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_circles_and_all_connections() {
        let panel = Panel::new(500.0, 500.0);
        let bundle = generate(&panel, &mut RandomStream::new(1), &StyleParams::new());
        assert_eq!(bundle.circles.len(), 13);
        assert_eq!(bundle.lines.len(), 78);
    }

    #[test]
    fn neighbouring_circles_touch() {
        let centers = fruit_of_life(Point::new(0.0, 0.0), 10.0);
        // Inner ring point and the outer point on the same spoke
        assert!((centers[1].distance(centers[7]) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn consumes_no_draws() {
        let mut rng = RandomStream::new(8);
        generate(&Panel::new(100.0, 100.0), &mut rng, &StyleParams::new());
        assert_eq!(rng.state(), RandomStream::new(8).state());
    }
}
