//! Bridge sizing shared by every generator that leaves material uncut.
//!
//! A bridge is the span a cut stops short of so an island stays attached.
//! Generators ask the policy for a gap as a fraction of the motif's linear
//! or angular extent. With no `minBridgeGap` the fraction is the style's
//! fixed default; otherwise it grows so the absolute gap never drops below
//! the configured minimum as the motif shrinks.
//!
//! The policy is queried per instance, never cached per call: two rings of
//! different radii need two different angular gaps.

use crate::params::StyleParams;

/// Smallest fraction handed back to a generator.
pub const MIN_GAP_FRACTION: f64 = 1e-6;

/// Largest fraction handed back. A gap of half the extent or more would
/// leave a side with no cut at all, or make the two cut pieces overlap.
pub const MAX_GAP_FRACTION: f64 = 0.5 - 1e-6;

/// How far past 0.5 a required fraction may land and still be clamped,
/// so float noise on an exact fit does not discard the motif.
const OVERFLOW_TOLERANCE: f64 = 1e-9;

/// Minimum uncut width, applied inline by the generators.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BridgePolicy {
    min_gap: f64,
}

impl BridgePolicy {
    /// Policy with an absolute floor. Negative or non-finite values mean
    /// no floor.
    pub fn new(min_gap: f64) -> Self {
        let min_gap = if min_gap.is_finite() && min_gap > 0.0 { min_gap } else { 0.0 };
        Self { min_gap }
    }

    pub fn from_params(params: &StyleParams) -> Self {
        Self::new(params.min_bridge_gap())
    }

    pub fn min_gap(&self) -> f64 {
        self.min_gap
    }

    /// Gap as a fraction of `extent`: `max(default_fraction, min_gap / extent)`.
    ///
    /// Returns `None` when the extent cannot host the bridge at all: it is
    /// not positive, or the required fraction is over one half. Callers
    /// skip the cut in that case rather than produce an undersized island.
    pub fn gap_fraction(&self, default_fraction: f64, extent: f64) -> Option<f64> {
        if !(extent > 0.0) || !extent.is_finite() {
            return None;
        }
        clamp_fraction(default_fraction.max(self.min_gap / extent))
    }

    /// Absolute gap length along a span of length `extent`.
    pub fn gap_length(&self, default_fraction: f64, extent: f64) -> Option<f64> {
        self.gap_fraction(default_fraction, extent).map(|f| f * extent)
    }

    /// Angular gap (radians) for one arc of `radius` sweeping `sector`.
    ///
    /// The floor is measured on the chord, which is what the cutter leaves
    /// standing, so the gap satisfies `2 r sin(gap / 2) >= min_gap`.
    pub fn angular_gap(&self, default_fraction: f64, radius: f64, sector: f64) -> Option<f64> {
        if !(radius > 0.0) || !(sector > 0.0) || !radius.is_finite() {
            return None;
        }
        let half_chord = self.min_gap / (2.0 * radius);
        if half_chord > 1.0 {
            return None;
        }
        let needed = 2.0 * half_chord.asin();
        clamp_fraction(default_fraction.max(needed / sector)).map(|f| f * sector)
    }

    /// Cutout-to-cell fraction honouring the web floor.
    ///
    /// `web_span` is the distance over which the cutout and the web between
    /// neighbours share space (usually the pitch). The cutout is capped at
    /// `1 - min_gap / web_span` so the web left between two cells is at
    /// least `min_gap`.
    pub fn cutout_scale(&self, scale: f64, web_span: f64) -> f64 {
        if !(web_span > 0.0) {
            return 0.0;
        }
        scale.min(1.0 - self.min_gap / web_span).max(0.0)
    }

    /// Cutout extent for a cell of `pitch`.
    pub fn cutout_extent(&self, pitch: f64, scale: f64) -> f64 {
        pitch * self.cutout_scale(scale, pitch)
    }

    /// True when a web of `width` meets the floor.
    #[inline]
    pub fn holds(&self, width: f64) -> bool {
        width >= self.min_gap
    }
}

fn clamp_fraction(fraction: f64) -> Option<f64> {
    if !fraction.is_finite() || fraction > 0.5 + OVERFLOW_TOLERANCE {
        return None;
    }
    Some(fraction.clamp(MIN_GAP_FRACTION, MAX_GAP_FRACTION))
}
