//! Slats: parallel slot cutouts separated by solid bars.
//!
//! Slots are built running along x and transposed afterwards for the
//! vertical orientation, so both orientations share one code path.

use crate::bridge::BridgePolicy;
use crate::geometry::{GeometryBundle, Line};
use crate::lattice::{interpolation_fraction, Lattice};
use crate::params::StyleParams;
use crate::patterns::util::rect_outline;
use crate::patterns::Panel;
use crate::postprocess::MARGIN_FRACTION;
use crate::rng::RandomStream;

use super::cell_size;

const BASE: f64 = 0.03;
const RANGE: f64 = 0.05;

/// Slot share of the bar + slot pitch.
pub const DEFAULT_SCALE: f64 = 0.4;

const SEGMENT_BASE: f64 = 0.08;
const SEGMENT_RANGE: f64 = 0.12;
/// Bridge between staggered segments, as a fraction of segment length.
const SEGMENT_GAP: f64 = 0.15;
/// Extra trim at each segment end, as a fraction of slot height.
const END_INSET: f64 = 0.08;

/// Minimum bar between tapered slots, as a fraction of pitch.
const BAR_GAP: f64 = 0.15;
const TAPER_MIN: f64 = 0.3;
const TAPER_SPAN: f64 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variation {
    /// Short slot segments, odd rows shifted half a segment.
    Staggered,
    /// Long closed slots growing wider across the panel.
    Tapered,
}

pub fn generate(panel: &Panel, rng: &mut RandomStream, params: &StyleParams) -> GeometryBundle {
    let pitch = cell_size(panel, params, BASE, RANGE);
    let variation = rng.pick(Variation::Staggered, Variation::Tapered);
    let horizontal = rng.pick(true, false);

    let policy = BridgePolicy::from_params(params);
    let slot = policy.cutout_extent(pitch, params.scale_or(DEFAULT_SCALE));

    let frame = if horizontal { *panel } else { Panel::new(panel.height, panel.width) };
    let lines = match variation {
        Variation::Staggered => staggered(&frame, pitch, slot, params.density(), &policy),
        Variation::Tapered => tapered(&frame, pitch, slot, &policy),
    };

    if horizontal {
        GeometryBundle::from_lines(lines)
    } else {
        GeometryBundle::from_lines(lines.iter().map(Line::transposed).collect())
    }
}

fn staggered(frame: &Panel, pitch: f64, slot: f64, density: f64, policy: &BridgePolicy) -> Vec<Line> {
    let seg_len = frame.short_side() * (SEGMENT_BASE + (1.0 - density) * SEGMENT_RANGE);
    let Some(gap) = policy.gap_fraction(SEGMENT_GAP, seg_len) else {
        return Vec::new();
    };

    let bar = pitch - slot;
    let inset = slot * END_INSET;
    let length = seg_len * (1.0 - gap) - 2.0 * inset;
    if slot <= 0.0 || length <= 0.0 {
        return Vec::new();
    }

    Lattice::running(seg_len, pitch)
        .cells(frame.width, frame.height)
        .flat_map(|cell| rect_outline(cell.x + inset, cell.y + bar, length, slot))
        .collect()
}

fn tapered(frame: &Panel, pitch: f64, slot: f64, policy: &BridgePolicy) -> Vec<Line> {
    let Some(bar_fraction) = policy.gap_fraction(BAR_GAP, pitch) else {
        return Vec::new();
    };
    let widest = pitch * (1.0 - bar_fraction);

    // Slots stop a full pitch inside the margin so both ends stay anchored
    let lead = frame.short_side() * MARGIN_FRACTION + pitch;
    let length = frame.width - 2.0 * lead;
    if slot <= 0.0 || length <= 0.0 {
        return Vec::new();
    }

    let lattice = Lattice::rectangular(frame.width, pitch);
    let rows = lattice.rows(frame.height);
    let count = (rows.end - rows.start).max(0) as usize;

    let mut lines = Vec::new();
    for (i, row) in rows.enumerate() {
        let t = interpolation_fraction(i, count);
        let height = (slot * (TAPER_MIN + t * TAPER_SPAN)).min(widest);
        let y = lattice.cell(row, 0).y;
        lines.extend(rect_outline(lead, y, length, height));
    }
    lines
}
