//! Diamond lattice: rows of diamonds packed tip to tip, odd rows shifted.

use crate::bridge::BridgePolicy;
use crate::geometry::{GeometryBundle, Line};
use crate::lattice::Lattice;
use crate::params::StyleParams;
use crate::patterns::util::{bridged_diamond, diamond_outline};
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.06;
const RANGE: f64 = 0.08;

pub const DEFAULT_SCALE: f64 = 0.84;

const ELONGATION: f64 = 1.6;
/// Fraction of each side left uncut next to a vertex.
const VERTEX_GAP: f64 = 0.12;
const INNER: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    /// Single closed diamonds, taller than wide.
    Elongated,
    /// Outer and inner diamond, both bridged at the vertices.
    Double,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let cell = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Elongated, Variation::Double);

    let dw = cell;
    let dh = match variation {
        Variation::Elongated => cell * ELONGATION,
        Variation::Double => cell,
    };

    // Full-size diamonds tile the plane; scaling each about its centre
    // opens a web of 2 * apothem * (1 - s) between parallel sides.
    let apothem = (dw * dh / 4.0) / (dw / 2.0).hypot(dh / 2.0);
    let policy = BridgePolicy::from_params(params);
    let s = policy.cutout_scale(params.scale_or(DEFAULT_SCALE), 2.0 * apothem);
    let hw = dw / 2.0 * s;
    let hh = dh / 2.0 * s;
    if hw <= 0.0 || hh <= 0.0 {
        return GeometryBundle::new();
    }

    let mut lines = Vec::new();
    for c in Lattice::rhombic(dw, dh).cells(panel.width, panel.height) {
        match variation {
            Variation::Elongated => lines.extend(diamond_outline(c.x, c.y, hw, hh)),
            Variation::Double => double(&mut lines, c.x, c.y, hw, hh, apothem * s, &policy),
        }
    }
    GeometryBundle::from_lines(lines)
}

fn double(lines: &mut Vec<Line>, cx: f64, cy: f64, hw: f64, hh: f64, apothem: f64, policy: &BridgePolicy) {
    let Some(g) = policy.gap_fraction(VERTEX_GAP, 2.0 * hw.min(hh)) else {
        lines.extend(diamond_outline(cx, cy, hw, hh));
        return;
    };
    lines.extend(bridged_diamond(cx, cy, hw, hh, g));

    if !policy.holds(apothem * (1.0 - INNER)) {
        return;
    }
    let (ihw, ihh) = (hw * INNER, hh * INNER);
    if let Some(g) = policy.gap_fraction(VERTEX_GAP, 2.0 * ihw.min(ihh)) {
        lines.extend(bridged_diamond(cx, cy, ihw, ihh, g));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_for(variation: Variation) -> i64 {
        (1..100)
            .find(|s| RandomStream::new(*s).pick(Variation::Elongated, Variation::Double) == variation)
            .expect("seed exists")
    }

    #[test]
    fn elongated_diamonds_are_taller() {
        let panel = Panel::new(200.0, 200.0);
        let bundle = generate(&panel, &mut RandomStream::new(seed_for(Variation::Elongated)), &StyleParams::new());
        let top_to_right = bundle.lines[0];
        let hw = top_to_right.x2 - top_to_right.x1;
        let hh = top_to_right.y2 - top_to_right.y1;
        assert!((hh / hw - ELONGATION).abs() < 1e-9);
    }

    #[test]
    fn vertex_bridges_meet_floor() {
        let panel = Panel::new(200.0, 200.0);
        let params = StyleParams::new().with_min_bridge_gap(1.5).with_scale(0.5);
        let bundle = generate(&panel, &mut RandomStream::new(seed_for(Variation::Double)), &params);
        assert!(!bundle.lines.is_empty());
        for quad in bundle.lines.chunks(4) {
            for i in 0..4 {
                let gap = quad[i].end().distance(quad[(i + 1) % 4].start());
                assert!(gap >= 1.5 - 1e-6, "bridge {gap}");
            }
        }
    }

    #[test]
    fn web_between_neighbours_meets_floor() {
        // 12 unit cells, floor 3: cutout scale falls to 1 - 3 / (2 * apothem)
        let panel = Panel::new(200.0, 200.0);
        let params = StyleParams::new().with_min_bridge_gap(3.0).with_scale(1.0);
        let cell = cell_size(&panel, &params, BASE, RANGE);
        let apothem = (cell * cell / 4.0) / (cell / 2.0).hypot(cell / 2.0);
        let s = BridgePolicy::from_params(&params).cutout_scale(1.0, 2.0 * apothem);
        assert!(2.0 * apothem * (1.0 - s) >= 3.0 - 1e-9);
    }
}
