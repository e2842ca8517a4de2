//! Centered motifs built outward from the panel midpoint.
//!
//! Each generator derives a characteristic radius from the shorter panel
//! side times [`size_factor`] and draws its geometry around
//! [`Panel::center`]. Nothing here walks a lattice, except [`lay_out`] in
//! tiled mode, which repeats one finished motif.

mod fibonacci;
mod flower;
mod mandala;
mod metatron;
mod sriyantra;
mod starwars;
mod torus;

use super::{Generator, Panel, StyleEntry};
use crate::geometry::{GeometryBundle, Line, Point};
use crate::lattice::Lattice;
use crate::params::{LayoutMode, StyleParams};
use crate::rng::RandomStream;

/// Sacred style table, in display order.
pub static STYLES: &[StyleEntry] = &[
    StyleEntry {
        name: "floweroflife",
        description: "Overlapping circles on hexagonal rings, split into arcs",
        generate: flower::generate,
    },
    StyleEntry {
        name: "metatron",
        description: "Thirteen tangent circles with every center connected",
        generate: metatron::generate,
    },
    StyleEntry {
        name: "starwars",
        description: "Thirteen points on two offset rings, fully connected",
        generate: starwars::generate,
    },
    StyleEntry {
        name: "sriyantra",
        description: "Three nested triangles inside a circle",
        generate: sriyantra::generate,
    },
    StyleEntry {
        name: "mandala",
        description: "Rings and spokes with a random motif per ring",
        generate: mandala::generate,
    },
    StyleEntry {
        name: "fibonacci",
        description: "Golden rectangle subdivision with a quarter-arc spiral",
        generate: fibonacci::generate,
    },
    StyleEntry {
        name: "torus",
        description: "Ring of woven loops with alternating gaps",
        generate: torus::generate,
    },
];

/// Scales every characteristic radius: `0.8 + 0.2 * density`.
#[inline]
pub(crate) fn size_factor(params: &StyleParams) -> f64 {
    0.8 + 0.2 * params.density()
}

/// Tiles per short side in tiled mode: `2 + round(2 * density)`.
pub fn tiles_per_side(params: &StyleParams) -> usize {
    2 + (2.0 * params.density()).round() as usize
}

/// Run `motif` according to the params' layout mode.
///
/// Centered mode calls it once on the whole panel. Tiled mode calls it once
/// on a square tile and translates that single bundle to every cell of a
/// square lattice, so the stream is consumed exactly as in centered mode.
pub fn lay_out(
    panel: &Panel,
    rng: &mut RandomStream,
    params: &StyleParams,
    motif: Generator,
) -> GeometryBundle {
    match params.layout_mode() {
        LayoutMode::Centered => motif(panel, rng, params),
        LayoutMode::Tiled => {
            let side = panel.short_side() / tiles_per_side(params) as f64;
            let tile = motif(&Panel::new(side, side), rng, params);
            let mut bundle = GeometryBundle::new();
            for cell in Lattice::square(side).cells(panel.width, panel.height) {
                bundle.extend(tile.translated(cell.x, cell.y));
            }
            bundle
        }
    }
}

/// One line between every pair of points, in `(i, j > i)` order.
pub(crate) fn connect_all(points: &[Point]) -> Vec<Line> {
    let mut lines = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            lines.push(Line::between(*a, *b));
        }
    }
    lines
}

/// `count` points evenly spaced on a circle, the first at `offset` radians.
pub(crate) fn ring_points(center: Point, radius: f64, count: usize, offset: f64) -> Vec<Point> {
    let step = std::f64::consts::TAU / count.max(1) as f64;
    (0..count).map(|i| center.polar(radius, offset + step * i as f64)).collect()
}
