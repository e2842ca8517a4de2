//! Honeycomb - pointy-top hexagon cells.
//!
//! Two variations:
//! - `Partial`: closed hexagons on every other cell (checkerboard skip).
//! - `CenterDot`: every cell, with bridges cut into three alternating
//!   sides and a centre dot drawn as three arcs whose gaps line up with
//!   those bridges, so the dot stays attached through radial spokes.

use std::f64::consts::{PI, TAU};

use crate::bridge::BridgePolicy;
use crate::geometry::{Arc, GeometryBundle, Line, Point};
use crate::lattice::Lattice;
use crate::params::StyleParams;
use crate::patterns::util::{polygon_edges, regular_polygon, split_with_gap};
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.03;
const RANGE: f64 = 0.05;

/// Cutout circumradius as a fraction of the cell circumradius.
pub const DEFAULT_SCALE: f64 = 0.925;

/// Fraction of a bridged side left uncut.
const SIDE_GAP: f64 = 0.25;
const DOT_RADIUS: f64 = 0.2;
/// Fraction of each dot arc's sector left uncut.
const DOT_GAP: f64 = 0.15;
const DOT_ARCS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    Partial,
    CenterDot,
}

/// Generate the honeycomb motif.
pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let hex_r = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Partial, Variation::CenterDot);

    let lattice = Lattice::hexagonal(hex_r);
    let policy = BridgePolicy::from_params(params);
    // Flat-to-flat web between neighbours is pitch_x * (1 - s)
    let in_r = hex_r * policy.cutout_scale(params.scale_or(DEFAULT_SCALE), lattice.pitch_x());
    if in_r <= 0.0 {
        return GeometryBundle::new();
    }

    let mut bundle = GeometryBundle::new();
    for cell in lattice.cells(panel.width, panel.height) {
        let center = Point::new(cell.x, cell.y);
        match variation {
            Variation::Partial => {
                if cell.is_even() {
                    continue;
                }
                bundle.lines.extend(polygon_edges(&hexagon(center, in_r)));
            }
            Variation::CenterDot => center_dot(&mut bundle, center, in_r, &policy),
        }
    }
    bundle
}

/// Vertices at `PI / 3 * i - PI / 6`, so sides 0, 2 and 4 have their
/// midpoints at 0, 120 and 240 degrees.
fn hexagon(center: Point, radius: f64) -> Vec<Point> {
    regular_polygon(center, radius, 6, -PI / 6.0)
}

fn center_dot(bundle: &mut GeometryBundle, center: Point, in_r: f64, policy: &BridgePolicy) {
    let vertices = hexagon(center, in_r);

    // Side length of a regular hexagon equals its circumradius
    let Some(side_gap) = policy.gap_fraction(SIDE_GAP, in_r) else {
        bundle.lines.extend(polygon_edges(&vertices));
        return;
    };

    for i in 0..6 {
        let (a, b) = (vertices[i], vertices[(i + 1) % 6]);
        if i % 2 == 0 {
            bundle.lines.extend(split_with_gap(a, b, side_gap));
        } else {
            bundle.lines.push(Line::between(a, b));
        }
    }

    let dot_r = in_r * DOT_RADIUS;
    let sector = TAU / DOT_ARCS as f64;
    let Some(gap) = policy.angular_gap(DOT_GAP, dot_r, sector) else {
        return;
    };
    for b in 0..DOT_ARCS {
        let bridge_angle = sector * b as f64;
        bundle.arcs.push(Arc::new(
            center.x,
            center.y,
            dot_r,
            bridge_angle + gap / 2.0,
            bridge_angle + sector - gap / 2.0,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_for(variation: Variation) -> i64 {
        (1..100)
            .find(|s| RandomStream::new(*s).pick(Variation::Partial, Variation::CenterDot) == variation)
            .expect("seed exists")
    }

    #[test]
    fn generates_honeycomb_lines() {
        let panel = Panel::new(100.0, 100.0);
        let bundle = generate(&panel, &mut RandomStream::new(1), &StyleParams::new());
        assert!(!bundle.lines.is_empty());
    }

    #[test]
    fn partial_skips_even_cells() {
        let panel = Panel::new(100.0, 100.0);
        let params = StyleParams::new();
        let bundle = generate(&panel, &mut RandomStream::new(seed_for(Variation::Partial)), &params);
        let lattice = Lattice::hexagonal(cell_size(&panel, &params, BASE, RANGE));
        let odd = lattice.cells(100.0, 100.0).filter(|c| !c.is_even()).count();
        assert_eq!(bundle.lines.len(), odd * 6);
        assert!(bundle.arcs.is_empty());
    }

    #[test]
    fn center_dot_gaps_align_with_bridged_sides() {
        let mut bundle = GeometryBundle::new();
        center_dot(&mut bundle, Point::new(0.0, 0.0), 10.0, &BridgePolicy::default());
        // 3 split sides (6 segments) + 3 whole sides
        assert_eq!(bundle.lines.len(), 9);
        assert_eq!(bundle.arcs.len(), 3);
        // Gap centred on 0 degrees: last arc ends just before TAU, first starts just after 0
        let gap = bundle.arcs[0].start * 2.0;
        assert!((gap - DOT_GAP * TAU / 3.0).abs() < 1e-12);
        assert!((TAU - bundle.arcs[2].end - gap / 2.0).abs() < 1e-12);
    }

    #[test]
    fn side_bridges_meet_floor() {
        let mut bundle = GeometryBundle::new();
        let policy = BridgePolicy::new(3.0);
        center_dot(&mut bundle, Point::new(0.0, 0.0), 8.0, &policy);
        // Side 0 is split into lines 0 and 1
        let bridge = bundle.lines[0].end().distance(bundle.lines[1].start());
        assert!(bridge >= 3.0 - 1e-9, "bridge {bridge}");
    }

    #[test]
    fn too_small_for_bridges_cuts_plain_hexagon() {
        let mut bundle = GeometryBundle::new();
        center_dot(&mut bundle, Point::new(0.0, 0.0), 2.0, &BridgePolicy::new(3.0));
        assert_eq!(bundle.lines.len(), 6);
        assert!(bundle.arcs.is_empty());
    }
}
