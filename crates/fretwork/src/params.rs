//! Style parameters recognised by the synthesis entry points.
//!
//! Keys deserialize in camelCase (`subStyle`, `minBridgeGap`, `layoutMode`)
//! so a JSON or YAML job file uses the same names as the engine. Every key
//! is optional; the accessors below apply the documented defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Density used when none (or a non-finite one) is supplied.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// How a centered motif is placed on the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// One motif at the panel midpoint.
    #[default]
    Centered,
    /// The motif repeated on a square lattice.
    Tiled,
}

impl LayoutMode {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::Centered => "centered",
            LayoutMode::Tiled => "tiled",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "centered" | "centred" | "center" => Ok(LayoutMode::Centered),
            "tiled" | "tile" => Ok(LayoutMode::Tiled),
            other => Err(Error::UnknownLayout(other.to_string())),
        }
    }
}

/// Options for one synthesis call.
///
/// `density` sets the lattice pitch (higher = finer), `scale` the cutout's
/// share of its cell, and `min_bridge_gap` the absolute floor on every
/// bridge and web.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleParams {
    /// Generator name within the family; `None` picks the family default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bridge_gap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<LayoutMode>,
}

impl StyleParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sub_style(mut self, name: impl Into<String>) -> Self {
        self.sub_style = Some(name.into());
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_min_bridge_gap(mut self, gap: f64) -> Self {
        self.min_bridge_gap = Some(gap);
        self
    }

    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = Some(mode);
        self
    }

    /// Density clamped to [0, 1], or 0.5 when missing.
    pub fn density(&self) -> f64 {
        self.density
            .filter(|d| d.is_finite())
            .map(|d| d.clamp(0.0, 1.0))
            .unwrap_or(DEFAULT_DENSITY)
    }

    /// Cutout-to-cell fraction in (0, 1], or the style's `default`.
    pub fn scale_or(&self, default: f64) -> f64 {
        self.scale
            .filter(|s| s.is_finite() && *s > 0.0)
            .map(|s| s.min(1.0))
            .unwrap_or(default)
    }

    /// Absolute minimum bridge width; zero when missing or invalid.
    pub fn min_bridge_gap(&self) -> f64 {
        self.min_bridge_gap
            .filter(|g| g.is_finite() && *g > 0.0)
            .unwrap_or(0.0)
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode.unwrap_or_default()
    }

    /// Fill every unset field from `other`.
    pub fn or(mut self, other: &StyleParams) -> Self {
        if self.sub_style.is_none() {
            self.sub_style = other.sub_style.clone();
        }
        self.density = self.density.or(other.density);
        self.scale = self.scale.or(other.scale);
        self.min_bridge_gap = self.min_bridge_gap.or(other.min_bridge_gap);
        self.layout_mode = self.layout_mode.or(other.layout_mode);
        self
    }
}
