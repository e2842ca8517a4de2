//! Lattice motifs: one cutout per cell of an implicit grid.
//!
//! Every generator here follows the same steps:
//!
//! 1. Derive the cell pitch from the shorter panel side and `density`
//!    (higher density, smaller cells).
//! 2. Draw its categorical variation once, before touching any cell.
//! 3. Walk the padded lattice and emit one motif per cell, sized by
//!    `scale` and kept attached by the [`BridgePolicy`](crate::bridge::BridgePolicy).
//!
//! Off-panel geometry from the padding cells is left for the margin clip.

mod basketweave;
mod brick;
mod chevron;
mod circles;
mod diamond;
mod honeycomb;
mod rectangular;
mod slats;
mod triangle;

pub use rectangular::bridge_half_width;

use super::{Panel, StyleEntry};
use crate::params::StyleParams;

/// Modern style table, in display order.
pub static STYLES: &[StyleEntry] = &[
    StyleEntry {
        name: "slats",
        description: "Parallel slots, staggered segments or tapered widths",
        generate: slats::generate,
    },
    StyleEntry {
        name: "rectangular",
        description: "Square grid of nested or alternating rectangles",
        generate: rectangular::generate,
    },
    StyleEntry {
        name: "diamond",
        description: "Diamond lattice, elongated or double outlined",
        generate: diamond::generate,
    },
    StyleEntry {
        name: "honeycomb",
        description: "Hexagon cells, partial or with a bridged center dot",
        generate: honeycomb::generate,
    },
    StyleEntry {
        name: "chevron",
        description: "Rows of nested or broken chevrons",
        generate: chevron::generate,
    },
    StyleEntry {
        name: "triangle",
        description: "Triangle lattice, alternating or subdivided",
        generate: triangle::generate,
    },
    StyleEntry {
        name: "circles",
        description: "Circle lattice with spoked concentric rings or mixed sizes",
        generate: circles::generate,
    },
    StyleEntry {
        name: "basketweave",
        description: "Woven strip pairs or bridged rotated squares",
        generate: basketweave::generate,
    },
    StyleEntry {
        name: "brick",
        description: "Running bond courses, optionally with soldier rows",
        generate: brick::generate,
    },
];

/// Cell pitch: `short_side * (base + (1 - density) * range)`.
#[inline]
pub(crate) fn cell_size(panel: &Panel, params: &StyleParams, base: f64, range: f64) -> f64 {
    panel.short_side() * (base + (1.0 - params.density()) * range)
}
