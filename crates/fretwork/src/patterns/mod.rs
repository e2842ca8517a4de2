//! Pattern generators, grouped into two families.
//!
//! - [`Family::Modern`] tiles a cutout motif over an implicit lattice.
//! - [`Family::Sacred`] builds one motif outward from the panel centre.
//!
//! Every generator has the same signature ([`Generator`]) and is reached
//! through a fixed name table per family, so dispatch is a lookup rather
//! than a chain of conditionals.

pub mod modern;
pub mod sacred;
pub mod util;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::{GeometryBundle, Point};
use crate::params::StyleParams;
use crate::rng::RandomStream;

/// Panel dimensions in caller units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub width: f64,
    pub height: f64,
}

impl Panel {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The shorter of width and height; every size derives from it.
    #[inline]
    pub fn short_side(&self) -> f64 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Common generator capability: panel, stream and params in, geometry out.
pub type Generator = fn(&Panel, &mut RandomStream, &StyleParams) -> GeometryBundle;

/// One named generator in a family's table.
#[derive(Debug, Clone, Copy)]
pub struct StyleEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub generate: Generator,
}

/// Available pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Modern,
    Sacred,
}

impl Family {
    /// Get all available families.
    pub fn all() -> &'static [Family] {
        &[Family::Modern, Family::Sacred]
    }

    /// Get family name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Family::Modern => "modern",
            Family::Sacred => "sacred",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Family::Modern => "Lattice-tiled minimalist cutouts",
            Family::Sacred => "Centered sacred-geometry motifs",
        }
    }

    /// Parse family from string.
    pub fn from_name(name: &str) -> Option<Family> {
        match name.to_lowercase().as_str() {
            "modern" | "modern-minimalist" | "minimalist" => Some(Family::Modern),
            "sacred" | "sacred-geometry" | "geometry" => Some(Family::Sacred),
            _ => None,
        }
    }

    /// The family's style table, in display order.
    pub fn styles(&self) -> &'static [StyleEntry] {
        match self {
            Family::Modern => modern::STYLES,
            Family::Sacred => sacred::STYLES,
        }
    }

    /// Style used when no `subStyle` is given.
    pub fn default_style(&self) -> &'static str {
        match self {
            Family::Modern => "slats",
            Family::Sacred => "floweroflife",
        }
    }

    /// Look up a style by name (case-insensitive).
    pub fn style(&self, name: &str) -> Option<&'static StyleEntry> {
        self.styles().iter().find(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::from_name(s).ok_or_else(|| Error::UnknownFamily(s.to_string()))
    }
}
