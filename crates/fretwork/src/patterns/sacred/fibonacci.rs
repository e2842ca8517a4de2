//! Golden spiral: a golden rectangle repeatedly cut into a square and a
//! smaller golden rectangle, with a quarter arc swept through each square.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::geometry::{Arc, Circle, GeometryBundle, Line};
use crate::params::StyleParams;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::size_factor;

/// The golden ratio.
pub const PHI: f64 = 1.618_033_988_749_895;

const SIZE: f64 = 0.4;
const MIN_ITERATIONS: usize = 6;
const ITERATION_CHOICES: usize = 3;
const BOUND: f64 = 0.7;

/// Side of the remaining rectangle the next square is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Bottom,
    Right,
    Top,
}

impl Side {
    fn next(self) -> Side {
        match self {
            Side::Left => Side::Bottom,
            Side::Bottom => Side::Right,
            Side::Right => Side::Top,
            Side::Top => Side::Left,
        }
    }
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let size = panel.short_side() * SIZE * size_factor(params);
    let iterations = MIN_ITERATIONS + rng.next_index(ITERATION_CHOICES);
    let c = panel.center();

    let (mut x, mut y) = (c.x - size / 2.0, c.y - size / (2.0 * PHI));
    let (mut w, mut h) = (size, size / PHI);
    let mut side = Side::Left;

    let mut bundle = GeometryBundle::new();
    for _ in 0..iterations {
        let sq = w.min(h);
        let (arc_x, arc_y, start, division) = match side {
            Side::Left => (x, y + sq, -FRAC_PI_2, Line::new(x + sq, y, x + sq, y + h)),
            Side::Bottom => (x + sq, y + h, PI, Line::new(x, y + h - sq, x + w, y + h - sq)),
            Side::Right => (x + w, y, FRAC_PI_2, Line::new(x + w - sq, y, x + w - sq, y + h)),
            Side::Top => (x, y, 0.0, Line::new(x, y + sq, x + w, y + sq)),
        };
        bundle.lines.push(division);
        bundle.arcs.push(Arc::new(arc_x, arc_y, sq, start, start + FRAC_PI_2));

        match side {
            Side::Left | Side::Top => {
                x += sq;
                w -= sq;
            }
            Side::Bottom => h -= sq,
            Side::Right => {
                y += sq;
                h -= sq;
            }
        }
        side = side.next();
    }

    bundle.circles.push(Circle::new(c.x, c.y, size * BOUND));
    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_arc_and_division_per_iteration() {
        let mut probe = RandomStream::new(6);
        let iterations = MIN_ITERATIONS + probe.next_index(ITERATION_CHOICES);
        let bundle = generate(&Panel::new(300.0, 300.0), &mut RandomStream::new(6), &StyleParams::new());
        assert_eq!(bundle.arcs.len(), iterations);
        assert_eq!(bundle.lines.len(), iterations);
        assert_eq!(bundle.circles.len(), 1);
    }

    #[test]
    fn arcs_shrink_by_golden_ratio() {
        let bundle = generate(&Panel::new(300.0, 300.0), &mut RandomStream::new(6), &StyleParams::new());
        let first = bundle.arcs[0].r;
        let second = bundle.arcs[1].r;
        assert!((first / second - PHI).abs() < 1e-9);
        assert!(bundle.arcs.iter().all(|a| (a.sweep() - FRAC_PI_2).abs() < 1e-12));
    }
}
