//! Radial mandala: concentric rings crossed by spokes, with one motif drawn
//! per ring and repeated in every sector of that ring.

use std::f64::consts::TAU;

use crate::geometry::{Circle, GeometryBundle, Line};
use crate::params::StyleParams;
use crate::patterns::util::polygon_edges;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::{ring_points, size_factor};

const RADIUS: f64 = 0.4;
const MIN_RINGS: usize = 3;
const RING_CHOICES: usize = 4;
const SYMMETRIES: [usize; 5] = [6, 8, 10, 12, 16];

/// Half-angle of a petal's base, radians.
const PETAL_SPREAD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motif {
    Petal,
    Dot,
    Triangle,
    Empty,
}

impl Motif {
    const ALL: [Motif; 4] = [Motif::Petal, Motif::Dot, Motif::Triangle, Motif::Empty];
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let max_r = panel.short_side() * RADIUS * size_factor(params);
    let rings = MIN_RINGS + rng.next_index(RING_CHOICES);
    let symmetry = SYMMETRIES[rng.next_index(SYMMETRIES.len())];
    let c = panel.center();
    let sector = TAU / symmetry as f64;

    let mut bundle = GeometryBundle::new();
    for tip in ring_points(c, max_r, symmetry, 0.0) {
        bundle.lines.push(Line::between(c, tip));
    }
    let radius_of = |ring: usize| max_r * ring as f64 / rings as f64;
    for ring in 1..=rings {
        bundle.circles.push(Circle::new(c.x, c.y, radius_of(ring)));
    }

    for ring in 1..=rings {
        let outer = radius_of(ring);
        let inner = radius_of(ring - 1);
        let band = outer - inner;
        let mid_r = (inner + outer) / 2.0;
        let motif = Motif::ALL[rng.next_index(Motif::ALL.len())];

        for i in 0..symmetry {
            let mid = sector * (i as f64 + 0.5);
            match motif {
                Motif::Petal => {
                    let r1 = inner + band * 0.3;
                    let r2 = inner + band * 0.7;
                    let tip = c.polar(r2, mid);
                    bundle.lines.push(Line::between(c.polar(r1, mid - PETAL_SPREAD), tip));
                    bundle.lines.push(Line::between(tip, c.polar(r1, mid + PETAL_SPREAD)));
                }
                Motif::Dot => {
                    let at = c.polar(mid_r, mid);
                    bundle.circles.push(Circle::new(at.x, at.y, band * 0.2));
                }
                Motif::Triangle => {
                    let corners = ring_points(c.polar(mid_r, mid), band * 0.3, 3, mid);
                    bundle.lines.extend(polygon_edges(&corners));
                }
                Motif::Empty => {}
            }
        }
    }
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spokes_and_rings_follow_draws() {
        let mut probe = RandomStream::new(21);
        let rings = MIN_RINGS + probe.next_index(RING_CHOICES);
        let symmetry = SYMMETRIES[probe.next_index(SYMMETRIES.len())];

        let bundle = generate(&Panel::new(400.0, 400.0), &mut RandomStream::new(21), &StyleParams::new());
        let ring_circles = bundle.circles.iter().filter(|c| c.cx == 200.0 && c.cy == 200.0).count();
        assert_eq!(ring_circles, rings);
        let spokes = bundle.lines.iter().filter(|l| l.x1 == 200.0 && l.y1 == 200.0).count();
        assert_eq!(spokes, symmetry);
    }

    #[test]
    fn one_motif_draw_per_ring() {
        let mut probe = RandomStream::new(4);
        let rings = MIN_RINGS + probe.next_index(RING_CHOICES);
        probe.next_index(SYMMETRIES.len());
        for _ in 0..rings {
            probe.next_f64();
        }

        let mut rng = RandomStream::new(4);
        generate(&Panel::new(400.0, 400.0), &mut rng, &StyleParams::new());
        assert_eq!(rng.state(), probe.state());
    }

    #[test]
    fn outermost_ring_matches_spoke_length() {
        let bundle = generate(&Panel::new(400.0, 400.0), &mut RandomStream::new(9), &StyleParams::new());
        let spoke = bundle.lines[0].length();
        let widest = bundle.circles.iter().map(|c| c.r).fold(0.0, f64::max);
        assert!((spoke - widest).abs() < 1e-9);
    }
}
