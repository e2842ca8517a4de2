//! Flower of life: equal circles on concentric rings, split into arcs.
//!
//! Ring `k` carries `6k` centres evenly spaced on a circle of radius `k`
//! times the circle radius, so the first ring passes through the centre
//! circle. The outlines are broken at every crossing; with a bridge
//! floor each arc is then pulled back from both crossings so the petals
//! stay joined at their tips.

use crate::arcs::{decompose_circles_into_arcs, outlines_to_bundle, Outline};
use crate::bridge::BridgePolicy;
use crate::geometry::{Arc, Circle, GeometryBundle, Point};
use crate::params::StyleParams;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::{ring_points, size_factor};

const RADIUS: f64 = 0.4;
const MIN_RINGS: usize = 2;
const RING_CHOICES: usize = 2;

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let max_r = panel.short_side() * RADIUS * size_factor(params);
    let rings = MIN_RINGS + rng.next_index(RING_CHOICES);
    let r = max_r / (rings + 1) as f64;

    let circles: Vec<Circle> = ring_centers(panel.center(), r, rings)
        .into_iter()
        .map(|p| Circle::new(p.x, p.y, r))
        .collect();
    let outlines = decompose_circles_into_arcs(&circles);

    let policy = BridgePolicy::from_params(params);
    if policy.min_gap() > 0.0 {
        bridge_outlines(outlines, &policy)
    } else {
        outlines_to_bundle(outlines)
    }
}

/// Centre point, then `6 * ring` points on each ring, starting at angle 0.
fn ring_centers(center: Point, spacing: f64, rings: usize) -> Vec<Point> {
    std::iter::once(center)
        .chain((1..=rings).flat_map(|ring| ring_points(center, spacing * ring as f64, 6 * ring, 0.0)))
        .collect()
}

/// Shorten every arc at both ends so each crossing keeps a chord of at
/// least the floor. Arcs too short to survive are dropped.
fn bridge_outlines(outlines: Vec<Outline>, policy: &BridgePolicy) -> GeometryBundle {
    let mut bundle = GeometryBundle::new();
    for outline in outlines {
        match outline {
            Outline::Whole(circle) => bundle.circles.push(circle),
            Outline::Arcs(arcs) => {
                for arc in arcs {
                    let sweep = arc.sweep();
                    if let Some(gap) = policy.angular_gap(0.0, arc.r, sweep) {
                        bundle.arcs.push(Arc::new(
                            arc.cx,
                            arc.cy,
                            arc.r,
                            arc.start + gap / 2.0,
                            arc.end - gap / 2.0,
                        ));
                    }
                }
            }
        }
    }
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn ring_counts_grow_by_six() {
        let centers = ring_centers(Point::new(0.0, 0.0), 10.0, 3);
        assert_eq!(centers.len(), 1 + 6 + 12 + 18);
    }

    #[test]
    fn every_ring_point_sits_on_its_ring() {
        let origin = Point::new(0.0, 0.0);
        let centers = ring_centers(origin, 10.0, 2);
        for p in &centers[1..7] {
            assert!((p.distance(origin) - 10.0).abs() < 1e-9);
        }
        // Ring 2 is a full circle at twice the spacing, not a hexagon
        for p in &centers[7..] {
            assert!((p.distance(origin) - 20.0).abs() < 1e-9);
        }
        let step = centers[7].distance(centers[8]);
        assert!((step - 40.0 * (PI / 12.0).sin()).abs() < 1e-9);
    }

    #[test]
    fn default_outlines_close() {
        let panel = Panel::new(400.0, 400.0);
        let bundle = generate(&panel, &mut RandomStream::new(3), &StyleParams::new());
        assert!(bundle.lines.is_empty());
        assert!(!bundle.arcs.is_empty());
        // Every arc lies on a circle of the same radius
        let r = bundle.arcs[0].r;
        assert!(bundle.arcs.iter().all(|a| (a.r - r).abs() < 1e-12));
        let total: f64 = bundle.arcs.iter().map(Arc::sweep).sum();
        let circles = (total / TAU).round();
        assert!((total - circles * TAU).abs() < 1e-6);
    }

    #[test]
    fn floor_opens_every_crossing() {
        let panel = Panel::new(400.0, 400.0);
        let params = StyleParams::new().with_min_bridge_gap(2.0);
        let bundle = generate(&panel, &mut RandomStream::new(3), &params);
        let plain = generate(&panel, &mut RandomStream::new(3), &StyleParams::new());
        assert!(!bundle.arcs.is_empty());
        // Slivers between near-coincident crossings are dropped, the rest trimmed
        assert!(bundle.arcs.len() <= plain.arcs.len());
        for cut in &bundle.arcs {
            let whole = plain
                .arcs
                .iter()
                .find(|w| {
                    w.cx == cut.cx && w.cy == cut.cy && w.start <= cut.start && cut.end <= w.end
                })
                .expect("trimmed arc lies inside an untrimmed one");
            let removed = whole.sweep() - cut.sweep();
            let chord = 2.0 * cut.r * (removed / 4.0).sin();
            assert!(chord >= 1.0 - 1e-9, "half-gap chord {chord}");
        }
    }
}
