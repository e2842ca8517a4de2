//! Basketweave: strip pairs alternating direction, or rotated squares.

use crate::bridge::BridgePolicy;
use crate::geometry::GeometryBundle;
use crate::lattice::Lattice;
use crate::params::StyleParams;
use crate::patterns::util::{bridged_diamond, diamond_outline, rect_outline};
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.06;
const RANGE: f64 = 0.08;

/// Cut share of the cell: strips for the weave, square diagonal when rotated.
pub const DEFAULT_SCALE: f64 = 0.7;

const STRIPS: usize = 2;
/// Fraction of each rotated-square side left uncut next to a vertex.
const VERTEX_GAP: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    Weave,
    Rotated,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let cell = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Weave, Variation::Rotated);
    let scale = params.scale_or(DEFAULT_SCALE);
    let policy = BridgePolicy::from_params(params);
    let lattice = Lattice::square(cell);

    let mut lines = Vec::new();
    match variation {
        Variation::Weave => {
            let webs = (STRIPS + 1) as f64;
            let web = (cell * (1.0 - scale) / webs).max(policy.min_gap());
            let strip = (cell - web * webs) / STRIPS as f64;
            let long = cell - 2.0 * web;
            if strip <= 0.0 || long <= 0.0 {
                return GeometryBundle::new();
            }
            for c in lattice.cells(panel.width, panel.height) {
                for i in 0..STRIPS {
                    let step = web + i as f64 * (strip + web);
                    let outline = if c.is_even() {
                        rect_outline(c.x + web, c.y + step, long, strip)
                    } else {
                        rect_outline(c.x + step, c.y + web, strip, long)
                    };
                    lines.extend(outline);
                }
            }
        }
        Variation::Rotated => {
            let half = policy.cutout_extent(cell, scale) / 2.0;
            if half <= 0.0 {
                return GeometryBundle::new();
            }
            let gap = policy.gap_fraction(VERTEX_GAP, 2.0 * half);
            for c in lattice.cells(panel.width, panel.height) {
                let (cx, cy) = (c.x + cell / 2.0, c.y + cell / 2.0);
                match gap {
                    Some(g) => lines.extend(bridged_diamond(cx, cy, half, half, g)),
                    None => lines.extend(diamond_outline(cx, cy, half, half)),
                }
            }
        }
    }
    GeometryBundle::from_lines(lines)
}
