//! Triangle lattice: up and down triangles alternating along each row.

use crate::bridge::BridgePolicy;
use crate::geometry::{GeometryBundle, Line, Point};
use crate::lattice::Lattice;
use crate::params::StyleParams;
use crate::patterns::util::polygon_edges;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.05;
const RANGE: f64 = 0.07;

pub const DEFAULT_SCALE: f64 = 0.88;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    /// Only the down triangles are cut.
    Alternate,
    /// Every triangle split in four; only the middle one is cut.
    Subdivided,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let size = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Alternate, Variation::Subdivided);

    let lattice = Lattice::triangular(size);
    let row_h = lattice.pitch_y();
    let policy = BridgePolicy::from_params(params);
    // Neighbouring insets add up to the web between two triangles
    let inset = (size * (1.0 - params.scale_or(DEFAULT_SCALE)) / 2.0).max(policy.min_gap() / 2.0);
    if 2.0 * inset >= row_h {
        return GeometryBundle::new();
    }

    let mut lines: Vec<Line> = Vec::new();
    for c in lattice.cells(panel.width, panel.height) {
        let up = c.is_even();
        if variation == Variation::Alternate && up {
            continue;
        }

        let (x, y) = (c.x, c.y);
        let (apex_y, base_y) = if up {
            (y + inset, y + row_h - inset)
        } else {
            (y + row_h - inset, y + inset)
        };
        let apex = Point::new(x + size / 2.0, apex_y);
        let left = Point::new(x + inset, base_y);
        let right = Point::new(x + size - inset, base_y);

        let corners = match variation {
            Variation::Alternate => [apex, right, left],
            Variation::Subdivided => [
                apex.lerp(left, 0.5),
                apex.lerp(right, 0.5),
                left.lerp(right, 0.5),
            ],
        };
        lines.extend(polygon_edges(&corners));
    }
    GeometryBundle::from_lines(lines)
}
