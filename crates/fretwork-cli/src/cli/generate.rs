//! Generate command - synthesize one panel and encode it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use fretwork::{
    encode_dxf, encode_svg, ArcMode, DxfOptions, GeometryBundle, PanelShape, StyleParams, SvgOptions, Unit,
};

use super::common::{write_output, Job, OutputFormat, PanelArgs};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (default: from the output extension, else svg)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Unit written to DXF (default: the panel unit)
    #[arg(long)]
    pub dxf_unit: Option<Unit>,

    /// Write DXF arcs as line chains within this tolerance
    #[arg(long)]
    pub arc_tolerance: Option<f64>,

    /// SVG stroke width in panel units
    #[arg(long)]
    pub stroke_width: Option<f64>,
}

/// JSON form of a generated panel.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PanelDocument<'a> {
    family: &'a str,
    style: String,
    width: f64,
    height: f64,
    unit: Unit,
    shape: PanelShape,
    seed: i64,
    params: &'a StyleParams,
    frame: GeometryBundle,
    pattern: &'a GeometryBundle,
}

pub fn cmd_generate(args: &GenerateArgs) -> Result<()> {
    let mut job = args.panel.resolve()?;
    let output = &mut job.output;
    if args.output.is_some() {
        output.path = args.output.clone();
    }
    output.format = args.format.or(output.format);
    output.dxf_unit = args.dxf_unit.or(output.dxf_unit);
    output.arc_tolerance = args.arc_tolerance.or(output.arc_tolerance);
    output.stroke_width = args.stroke_width.or(output.stroke_width);

    let seed = job.seed_or_random();
    let pattern = job.synthesize(seed)?;
    let format = job
        .output
        .format
        .or_else(|| job.output.path.as_deref().and_then(OutputFormat::from_path))
        .unwrap_or(OutputFormat::Svg);

    info!(family = %job.family, seed, ?format, primitives = pattern.primitive_count(), "generated");

    let text = encode(&job, seed, &pattern, format)?;
    write_output(job.output.path.as_deref(), &text)
}

fn encode(job: &Job, seed: i64, pattern: &GeometryBundle, format: OutputFormat) -> Result<String> {
    let (w, h) = (job.width, job.height);
    let text = match format {
        OutputFormat::Svg => {
            let options = SvgOptions { stroke_width: job.output.stroke_width, ..SvgOptions::default() };
            encode_svg(pattern, w, h, job.shape, &options)?
        }
        OutputFormat::Dxf => {
            let options = DxfOptions {
                source: job.unit,
                target: job.output.dxf_unit.unwrap_or(job.unit),
                arc_mode: job
                    .output
                    .arc_tolerance
                    .filter(|t| *t > 0.0)
                    .map_or(ArcMode::Native, |tolerance| ArcMode::Segments { tolerance }),
            };
            encode_dxf(&job.shape.frame(w, h), pattern, w, h, &options)?
        }
        OutputFormat::Json => {
            let doc = PanelDocument {
                family: &job.family,
                style: job.style()?,
                width: w,
                height: h,
                unit: job.unit,
                shape: job.shape,
                seed,
                params: &job.params,
                frame: job.shape.frame(w, h),
                pattern,
            };
            let mut text = serde_json::to_string_pretty(&doc)?;
            text.push('\n');
            text
        }
    };
    Ok(text)
}
