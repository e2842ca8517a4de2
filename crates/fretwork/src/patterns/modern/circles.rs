//! Circle lattice, hex- or square-packed.
//!
//! The concentric variation cuts each ring as four arcs separated by radial
//! spokes. The spoke gap is recomputed for every ring because the same
//! absolute bridge needs a larger angle on a smaller radius.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::bridge::BridgePolicy;
use crate::geometry::{Arc, Circle, GeometryBundle};
use crate::lattice::Lattice;
use crate::params::StyleParams;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.04;
const RANGE: f64 = 0.06;

/// Outer ring diameter as a fraction of the cell.
pub const DEFAULT_SCALE: f64 = 0.88;

/// Row pitch of the hex packing relative to the cell (sin 60).
const HEX_ROW: f64 = 0.866;
const SPOKES: usize = 4;
/// Spoke width as a fraction of the quarter-turn between spokes.
const SPOKE_GAP: f64 = 0.24 / FRAC_PI_2;
const MIDDLE_RING: f64 = 0.6;
const INNER_RING: f64 = 0.3;
const SMALL: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    Concentric,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Packing {
    Hex,
    Square,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let cell = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Concentric, Variation::Mixed);
    let packing = rng.pick(Packing::Hex, Packing::Square);

    let lattice = match packing {
        Packing::Hex => Lattice::running(cell, cell * HEX_ROW),
        Packing::Square => Lattice::square(cell),
    };
    // Closest neighbour: along the row, or diagonally into the next row
    let spacing = lattice
        .pitch_x()
        .min((lattice.pitch_x() / 2.0).hypot(lattice.pitch_y()));

    let policy = BridgePolicy::from_params(params);
    let outer = policy.cutout_extent(spacing, params.scale_or(DEFAULT_SCALE)) / 2.0;
    if outer <= 0.0 {
        return GeometryBundle::new();
    }

    let mut bundle = GeometryBundle::new();
    for c in lattice.cells(panel.width, panel.height) {
        match variation {
            Variation::Concentric => {
                // Drawn for every cell, kept or not, so the stream stays aligned
                let third_ring = rng.next_f64() > 0.5;
                let mut radii = vec![outer, outer * MIDDLE_RING];
                if third_ring {
                    radii.push(outer * INNER_RING);
                }
                spoked_rings(&mut bundle, c.x, c.y, &radii, &policy);
            }
            Variation::Mixed => {
                let r = if c.is_even() { outer } else { outer * SMALL };
                bundle.circles.push(Circle::new(c.x, c.y, r));
            }
        }
    }
    bundle
}

/// Rings from the outside in, each split into [`SPOKES`] arcs.
///
/// An outer ring too small for its spokes is cut as a plain circle. Inner
/// rings stop as soon as one would crowd the ring outside it or cannot
/// hold its spokes.
fn spoked_rings(bundle: &mut GeometryBundle, cx: f64, cy: f64, radii: &[f64], policy: &BridgePolicy) {
    let mut previous: Option<f64> = None;
    for &r in radii {
        if let Some(prev) = previous {
            if !policy.holds(prev - r) {
                break;
            }
        }
        let Some(gap) = policy.angular_gap(SPOKE_GAP, r, FRAC_PI_2) else {
            if previous.is_none() {
                bundle.circles.push(Circle::new(cx, cy, r));
            }
            break;
        };
        for sp in 0..SPOKES {
            let spoke = TAU * sp as f64 / SPOKES as f64;
            bundle
                .arcs
                .push(Arc::new(cx, cy, r, spoke + gap / 2.0, spoke + FRAC_PI_2 - gap / 2.0));
        }
        previous = Some(r);
    }
}
