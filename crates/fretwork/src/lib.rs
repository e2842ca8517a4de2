//! # fretwork
//!
//! Deterministic pattern synthesis for cut panels.
//!
//! Given a panel size, a seed and a few [`StyleParams`], [`synthesize`]
//! returns a [`GeometryBundle`] of lines, circles and arcs ready to cut.
//! Every cutout stays attached to the surrounding material by bridges no
//! narrower than `minBridgeGap`.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.

pub mod arcs;
pub mod bridge;
pub mod dxf;
pub mod error;
pub mod geometry;
pub mod lattice;
pub mod params;
pub mod patterns;
pub mod postprocess;
pub mod rng;
pub mod shape;
pub mod svg;
pub mod synth;

// Re-export common types at crate root for convenience.
pub use arcs::{circle_intersections, decompose_circles_into_arcs, Outline};
pub use bridge::BridgePolicy;
pub use dxf::{encode_dxf, write_dxf, ArcMode, DxfOptions, Unit};
pub use error::{Error, Result};
pub use geometry::{Arc, Circle, Fill, GeometryBundle, Line, Point};
pub use lattice::{Lattice, LatticeKind};
pub use params::{LayoutMode, StyleParams};
pub use patterns::{Family, Panel, StyleEntry};
pub use postprocess::{deduplicate, margin_clip, MarginRect};
pub use rng::RandomStream;
pub use shape::PanelShape;
pub use svg::{encode_svg, write_svg, SvgOptions};
pub use synth::{synthesize, synthesize_modern, synthesize_sacred};
