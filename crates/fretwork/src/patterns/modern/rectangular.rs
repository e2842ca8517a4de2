//! Rectangular grid: nested bridged rectangles or alternating sizes.

use crate::bridge::BridgePolicy;
use crate::geometry::{GeometryBundle, Line};
use crate::lattice::Lattice;
use crate::params::StyleParams;
use crate::patterns::util::{bridged_rect, rect_outline};
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.05;
const RANGE: f64 = 0.07;

/// Cutout share of the cell.
pub const DEFAULT_SCALE: f64 = 0.85;

/// Bridge width as a fraction of the side it interrupts.
const BRIDGE_FRACTION: f64 = 0.15;
/// Inner rectangle inset as a fraction of the outer side.
const INNER_INSET: f64 = 0.25;
/// Size of the small cutouts in the alternating variation.
const SMALL: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    Nested,
    Alternating,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let cell = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Nested, Variation::Alternating);

    let policy = BridgePolicy::from_params(params);
    let side = policy.cutout_extent(cell, params.scale_or(DEFAULT_SCALE));
    if side <= 0.0 {
        return GeometryBundle::new();
    }
    let offset = (cell - side) / 2.0;

    let mut lines = Vec::new();
    for c in Lattice::square(cell).cells(panel.width, panel.height) {
        let x = c.x + offset;
        let y = c.y + offset;
        match variation {
            Variation::Nested => nested(&mut lines, x, y, side, &policy),
            Variation::Alternating => {
                let size = if c.is_even() { side * SMALL } else { side };
                let shift = (side - size) / 2.0;
                lines.extend(rect_outline(x + shift, y + shift, size, size));
            }
        }
    }
    GeometryBundle::from_lines(lines)
}

/// Half-width of the bridge left at each side midpoint of a nested cutout
/// with side `side`.
///
/// `None` when the side is too short to host a `min_gap` bridge.
pub fn bridge_half_width(side: f64, policy: &BridgePolicy) -> Option<f64> {
    policy.gap_fraction(BRIDGE_FRACTION, side).map(|f| f * side / 2.0)
}

fn nested(lines: &mut Vec<Line>, x: f64, y: f64, side: f64, policy: &BridgePolicy) {
    let Some(half) = bridge_half_width(side, policy) else {
        // No room for bridges: a plain cutout leaves no island behind
        lines.extend(rect_outline(x, y, side, side));
        return;
    };
    lines.extend(bridged_rect(x, y, side, side, half));

    let inset = side * INNER_INSET;
    let inner = side - 2.0 * inset;
    if inner <= 0.0 || !policy.holds(inset) {
        return;
    }
    if let Some(inner_half) = bridge_half_width(inner, policy) {
        lines.extend(bridged_rect(x + inset, y + inset, inner, inner, inner_half));
    }
}
