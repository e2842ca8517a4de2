//! Error type for the fallible edges of the library.
//!
//! Synthesis itself never fails: an unknown style yields an empty bundle.
//! Errors only come from name parsing and from the encoders.

use thiserror::Error;

/// Result type for fretwork operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown pattern family: {0}")]
    UnknownFamily(String),

    #[error("unknown panel shape: {0}")]
    UnknownShape(String),

    #[error("unknown unit: {0} (expected inches or mm)")]
    UnknownUnit(String),

    #[error("unknown layout mode: {0} (expected centered or tiled)")]
    UnknownLayout(String),

    #[error("panel dimensions must be positive, got {width} x {height}")]
    InvalidPanel { width: f64, height: f64 },

    #[error("XML write error: {0}")]
    Xml(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
