//! Torus: loops around a ring, cut as bridged arcs with alternate loops
//! skipping alternate segments so the loops read as woven.

use std::f64::consts::TAU;

use crate::bridge::BridgePolicy;
use crate::geometry::{Arc, Circle, GeometryBundle};
use crate::params::StyleParams;
use crate::patterns::Panel;
use crate::rng::RandomStream;

use super::{ring_points, size_factor};

const MAJOR_RADIUS: f64 = 0.3;
const LOOP_RADIUS: f64 = 0.4;
const MIN_LOOPS: usize = 6;
const LOOP_CHOICES: usize = 4;
const SEGMENTS: usize = 6;
/// Gap between segments as a fraction of the segment sector (pi / 12 of pi / 3).
const SEGMENT_GAP: f64 = 0.25;

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let major = panel.short_side() * MAJOR_RADIUS * size_factor(params);
    let loops = MIN_LOOPS + rng.next_index(LOOP_CHOICES);
    let loop_r = major * LOOP_RADIUS;
    let sector = TAU / SEGMENTS as f64;
    let gap = BridgePolicy::from_params(params).angular_gap(SEGMENT_GAP, loop_r, sector);

    let mut bundle = GeometryBundle::new();
    for (i, center) in ring_points(panel.center(), major, loops, 0.0).into_iter().enumerate() {
        let Some(gap) = gap else {
            bundle.circles.push(Circle::new(center.x, center.y, loop_r));
            continue;
        };
        for s in 0..SEGMENTS {
            if i % 2 == 0 && s % 2 == 0 {
                continue;
            }
            let from = sector * s as f64;
            bundle
                .arcs
                .push(Arc::new(center.x, center.y, loop_r, from + gap / 2.0, from + sector - gap / 2.0));
        }
    }
    bundle
}
