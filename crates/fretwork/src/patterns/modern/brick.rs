//! Brick pattern - running bond brickwork.
//!
//! Odd courses are offset by half a brick, the classic masonry bond. The
//! padding course below row 0 is laid straight. The soldier variation replaces every Nth course with bricks stood on end;
//! N is drawn once per call.

use crate::bridge::BridgePolicy;
use crate::geometry::GeometryBundle;
use crate::lattice::Lattice;
use crate::params::StyleParams;
use crate::patterns::util::rect_outline;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.08;
const RANGE: f64 = 0.1;
/// Course height relative to brick length.
const HEIGHT_RATIO: f64 = 0.45;

/// Cutout share of the brick length; the rest is mortar web.
pub const DEFAULT_SCALE: f64 = 0.9;

const SOLDIER_MIN_INTERVAL: i64 = 4;
const SOLDIER_INTERVAL_CHOICES: usize = 3;
const SOLDIER_HEIGHT: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bond {
    Standard,
    Soldier,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let brick_w = cell_size(panel, params, BASE, RANGE);
    let brick_h = brick_w * HEIGHT_RATIO;
    let bond = rng.pick(Bond::Standard, Bond::Soldier);
    // Always drawn, so the stream advances the same for both bonds
    let interval = SOLDIER_MIN_INTERVAL + rng.next_index(SOLDIER_INTERVAL_CHOICES) as i64;

    let policy = BridgePolicy::from_params(params);
    let web = (brick_w * (1.0 - params.scale_or(DEFAULT_SCALE))).max(policy.min_gap());

    let course = Lattice::rectangular(brick_w, brick_h);
    let soldiers = Lattice::rectangular(brick_h, brick_h);

    let (bw, bh) = (brick_w - web, brick_h - web);
    let (sw, sh) = (brick_h - web, (brick_w * SOLDIER_HEIGHT).min(brick_h) - web);

    let mut lines = Vec::new();
    for row in course.rows(panel.height) {
        let is_soldier = bond == Bond::Soldier && row.rem_euclid(interval) == 0;
        let (lattice, w, h) = if is_soldier { (&soldiers, sw, sh) } else { (&course, bw, bh) };
        if w <= 0.0 || h <= 0.0 {
            continue;
        }
        // Truncating remainder: course -1 stays unshifted
        let shift = if !is_soldier && row % 2 == 1 { brick_w / 2.0 } else { 0.0 };
        for col in lattice.cols(panel.width) {
            let cell = lattice.cell(row, col);
            lines.extend(rect_outline(cell.x + shift + web / 2.0, cell.y + web / 2.0, w, h));
        }
    }
    GeometryBundle::from_lines(lines)
}
