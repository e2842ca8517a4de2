//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `generate` - Synthesize a panel and write SVG, DXF or JSON
//! - `styles` - List families and styles
//! - `preview` - Render a panel to PNG
//! - `benchmark` - Time synthesis per style

pub mod benchmark;
pub mod common;
pub mod generate;
pub mod preview;
pub mod styles;

pub use benchmark::{cmd_benchmark, BenchmarkArgs};
pub use generate::{cmd_generate, GenerateArgs};
pub use preview::{cmd_preview, PreviewArgs};
pub use styles::{cmd_styles, StylesArgs};
