//! Synthesis entry points: stream, dispatch, clean-up.
//!
//! ## Rust Lesson #12: Function Pointers
//!
//! Each family's style table stores plain `fn` pointers. Looking a style up
//! by name and calling `(entry.generate)(...)` replaces a chain of string
//! comparisons, and the compiler checks every generator has the same shape.

use tracing::{debug, debug_span, warn};

use crate::geometry::GeometryBundle;
use crate::params::StyleParams;
use crate::patterns::{sacred, Family, Panel};
use crate::postprocess;
use crate::rng::RandomStream;

/// Generate one panel's geometry.
///
/// A fresh [`RandomStream`] is seeded per call, the style named by
/// `params.sub_style` (or the family default) runs once, and the result is
/// margin-clipped and deduplicated. The same arguments always give the same
/// bundle.
///
/// An unknown style name logs a warning and returns an empty bundle.
/// Dimensions are not validated; callers pass positive sizes.
///
/// # Example
/// ```
/// use fretwork::{synthesize, Family, StyleParams};
///
/// let params = StyleParams::new().with_sub_style("honeycomb");
/// let bundle = synthesize(Family::Modern, 400.0, 600.0, 42, &params);
/// assert!(!bundle.lines.is_empty());
/// ```
pub fn synthesize(
    family: Family,
    width: f64,
    height: f64,
    seed: i64,
    params: &StyleParams,
) -> GeometryBundle {
    let style = params.sub_style.as_deref().unwrap_or(family.default_style());
    let _span = debug_span!("synthesize", family = family.name(), style, seed).entered();

    let Some(entry) = family.style(style) else {
        warn!(style, family = family.name(), "unknown sub-style, returning empty bundle");
        return GeometryBundle::new();
    };

    let panel = Panel::new(width, height);
    let mut rng = RandomStream::new(seed);
    let raw = match family {
        Family::Modern => (entry.generate)(&panel, &mut rng, params),
        Family::Sacred => sacred::lay_out(&panel, &mut rng, params, entry.generate),
    };
    debug!(
        lines = raw.lines.len(),
        circles = raw.circles.len(),
        arcs = raw.arcs.len(),
        "generated"
    );

    let bundle = postprocess::finish(raw, &panel);
    debug!(
        lines = bundle.lines.len(),
        circles = bundle.circles.len(),
        arcs = bundle.arcs.len(),
        "post-processed"
    );
    bundle
}

/// [`synthesize`] for the lattice family.
pub fn synthesize_modern(width: f64, height: f64, seed: i64, params: &StyleParams) -> GeometryBundle {
    synthesize(Family::Modern, width, height, seed, params)
}

/// [`synthesize`] for the centered family.
pub fn synthesize_sacred(width: f64, height: f64, seed: i64, params: &StyleParams) -> GeometryBundle {
    synthesize(Family::Sacred, width, height, seed, params)
}
