//! Chevron rows pointing alternately down and up.

use crate::bridge::BridgePolicy;
use crate::geometry::{GeometryBundle, Line, Point};
use crate::lattice::{interpolation_fraction, Lattice};
use crate::params::StyleParams;
use crate::patterns::util::split_with_gap;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.05;
const RANGE: f64 = 0.07;
const WIDTH_RATIO: f64 = 1.5;

pub const DEFAULT_SCALE: f64 = 1.0;

const NESTS: usize = 3;
/// How much the innermost nest shrinks relative to the outermost.
const NEST_SHRINK: f64 = 0.56;
/// Fraction of each arm left uncut at its midpoint.
const ARM_GAP: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    Nested,
    Broken,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let cell = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Nested, Variation::Broken);

    let chev_w = cell * WIDTH_RATIO;
    let chev_h = cell;
    let policy = BridgePolicy::from_params(params);
    // Tips of facing rows sit chev_h apart, arm ends of neighbours chev_w apart
    let scale = policy.cutout_scale(params.scale_or(DEFAULT_SCALE), chev_h.min(chev_w));
    if scale <= 0.0 {
        return GeometryBundle::new();
    }

    let half_w = chev_w / 2.0;
    let half_h = chev_h / 2.0;
    // Perpendicular distance between consecutive nested arms
    let nest_web = scale * NEST_SHRINK * interpolation_fraction(1, NESTS) * half_w * half_h
        / half_w.hypot(half_h);
    let nests = if policy.holds(nest_web) { NESTS } else { 1 };

    let mut lines = Vec::new();
    for c in Lattice::rectangular(chev_w, chev_h).cells(panel.width, panel.height) {
        let dir = if c.is_odd_row() { -1.0 } else { 1.0 };
        let cx = c.x + half_w;
        let cy = c.y;

        match variation {
            Variation::Nested => {
                for n in 0..nests {
                    let k = scale * (1.0 - interpolation_fraction(n, NESTS) * NEST_SHRINK);
                    let sw = half_w * k;
                    let sh = half_h * k * dir;
                    lines.push(Line::new(cx - sw, cy, cx, cy + sh));
                    lines.push(Line::new(cx, cy + sh, cx + sw, cy));
                }
            }
            Variation::Broken => {
                let sw = half_w * scale;
                let sh = half_h * scale * dir;
                let tip = Point::new(cx, cy + sh);
                let left = Point::new(cx - sw, cy);
                let right = Point::new(cx + sw, cy);
                match policy.gap_fraction(ARM_GAP, sw.hypot(sh)) {
                    Some(gap) => {
                        lines.extend(split_with_gap(left, tip, gap));
                        lines.extend(split_with_gap(right, tip, gap));
                    }
                    None => {
                        lines.push(Line::between(left, tip));
                        lines.push(Line::between(right, tip));
                    }
                }
            }
        }
    }
    GeometryBundle::from_lines(lines)
}
