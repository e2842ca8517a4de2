//! Common utilities shared across CLI commands.
//!
//! A panel job comes from an optional YAML or JSON file with command-line
//! flags layered on top. Every command that synthesizes resolves its
//! [`PanelArgs`] into a [`Job`] first.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use fretwork::{Family, GeometryBundle, LayoutMode, PanelShape, StyleParams, Unit};

/// Output format for a generated panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Dxf,
    Json,
}

impl OutputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "svg" => Some(OutputFormat::Svg),
            "dxf" => Some(OutputFormat::Dxf),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Output settings a job file may carry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Unit written to DXF; the panel unit when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dxf_unit: Option<Unit>,
    /// Write DXF arcs as line chains within this tolerance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arc_tolerance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// One complete panel job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub family: String,
    pub width: f64,
    pub height: f64,
    pub unit: Unit,
    pub shape: PanelShape,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    pub params: StyleParams,
    pub output: OutputOptions,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            family: Family::Modern.name().to_string(),
            width: 24.0,
            height: 36.0,
            unit: Unit::Inches,
            shape: PanelShape::Rectangle,
            seed: None,
            params: StyleParams::default(),
            output: OutputOptions::default(),
        }
    }
}

impl Job {
    /// Read a job file. `.json` parses as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Job> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read job file {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let job = if is_json {
            serde_json::from_str(&text)
                .with_context(|| format!("invalid JSON job {}", path.display()))?
        } else {
            serde_yaml::from_str(&text)
                .with_context(|| format!("invalid YAML job {}", path.display()))?
        };
        Ok(job)
    }

    pub fn family(&self) -> Result<Family> {
        Ok(self.family.parse::<Family>()?)
    }

    /// Style name as it will be looked up.
    pub fn style(&self) -> Result<String> {
        let family = self.family()?;
        Ok(self
            .params
            .sub_style
            .clone()
            .unwrap_or_else(|| family.default_style().to_string()))
    }

    /// The job's seed, drawing and announcing a random one if none was set.
    pub fn seed_or_random(&mut self) -> i64 {
        if let Some(seed) = self.seed {
            return seed;
        }
        let seed = rand::rng().random_range(1..=i64::from(i32::MAX));
        eprintln!("seed: {seed}");
        self.seed = Some(seed);
        seed
    }

    /// Synthesize the pattern and trim it to the panel shape.
    pub fn synthesize(&self, seed: i64) -> Result<GeometryBundle> {
        let family = self.family()?;
        let bundle = fretwork::synthesize(family, self.width, self.height, seed, &self.params);
        let bundle = self.shape.clip(bundle, self.width, self.height);
        debug!(primitives = bundle.primitive_count(), shape = %self.shape, "panel ready");
        Ok(bundle)
    }
}

/// Panel options shared by every synthesizing command.
#[derive(Args, Debug, Clone, Default)]
pub struct PanelArgs {
    /// YAML or JSON job file; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pattern family (modern, sacred)
    #[arg(short, long)]
    pub family: Option<Family>,

    /// Style within the family (see `fretwork styles`)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Panel width
    #[arg(short = 'W', long)]
    pub width: Option<f64>,

    /// Panel height
    #[arg(short = 'H', long)]
    pub height: Option<f64>,

    /// Random seed (random when omitted)
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Pattern density, 0 (coarse) to 1 (fine)
    #[arg(short, long)]
    pub density: Option<f64>,

    /// Cutout size as a fraction of its cell
    #[arg(long)]
    pub scale: Option<f64>,

    /// Minimum uncut bridge width, in panel units
    #[arg(long)]
    pub min_bridge_gap: Option<f64>,

    /// Sacred layout: centered or tiled
    #[arg(long)]
    pub layout: Option<LayoutMode>,

    /// Panel outline: rectangle, circle, arch, oval
    #[arg(long)]
    pub shape: Option<PanelShape>,

    /// Panel unit: inches or mm
    #[arg(short, long)]
    pub unit: Option<Unit>,
}

impl PanelArgs {
    /// Load the job file (if any), then apply every flag that was given.
    pub fn resolve(&self) -> Result<Job> {
        let mut job = match &self.config {
            Some(path) => Job::load(path)?,
            None => Job::default(),
        };

        if let Some(family) = self.family {
            job.family = family.name().to_string();
        }
        if let Some(width) = self.width {
            job.width = width;
        }
        if let Some(height) = self.height {
            job.height = height;
        }
        if let Some(unit) = self.unit {
            job.unit = unit;
        }
        if let Some(shape) = self.shape {
            job.shape = shape;
        }
        if self.seed.is_some() {
            job.seed = self.seed;
        }

        let flags = StyleParams {
            sub_style: self.style.clone(),
            density: self.density,
            scale: self.scale,
            min_bridge_gap: self.min_bridge_gap,
            layout_mode: self.layout,
        };
        job.params = flags.or(&job.params);

        // Fail early on a bad family or panel rather than after synthesis
        job.family()?;
        if !(job.width > 0.0 && job.height > 0.0) {
            return Err(fretwork::Error::InvalidPanel { width: job.width, height: job.height }.into());
        }
        Ok(job)
    }
}

/// Write to `path`, or to stdout when there is none.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote: {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/panel.DXF")), Some(OutputFormat::Dxf));
        assert_eq!(OutputFormat::from_path(Path::new("panel.svg")), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_path(Path::new("panel")), None);
    }

    #[test]
    fn yaml_job_parses() {
        let job: Job = serde_yaml::from_str(
            "family: sacred\nwidth: 30\nheight: 30\nunit: mm\nshape: circle\nseed: 7\nparams:\n  subStyle: torus\n  minBridgeGap: 1.5\n",
        )
        .unwrap();
        assert_eq!(job.family().unwrap(), Family::Sacred);
        assert_eq!(job.unit, Unit::Millimeters);
        assert_eq!(job.shape, PanelShape::Circle);
        assert_eq!(job.params.min_bridge_gap, Some(1.5));
        assert_eq!(job.style().unwrap(), "torus");
    }

    #[test]
    fn flags_override_job() {
        let args = PanelArgs {
            width: Some(10.0),
            style: Some("brick".to_string()),
            ..PanelArgs::default()
        };
        let job = args.resolve().unwrap();
        assert_eq!(job.width, 10.0);
        assert_eq!(job.height, 36.0);
        assert_eq!(job.style().unwrap(), "brick");
    }

    #[test]
    fn rejects_non_positive_panel() {
        let args = PanelArgs { height: Some(0.0), ..PanelArgs::default() };
        assert!(args.resolve().is_err());
    }
}
