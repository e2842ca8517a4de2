//! Preview command - rasterize a panel to PNG.
//!
//! The panel is encoded to SVG first and rendered with resvg, so the
//! preview shows exactly what `generate --format svg` would write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tiny_skia::{Color, Pixmap, Transform};

use fretwork::{encode_svg, SvgOptions};

use super::common::PanelArgs;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub panel: PanelArgs,

    /// PNG file to write
    #[arg(short, long, default_value = "preview.png")]
    pub output: PathBuf,

    /// Longer image side in pixels
    #[arg(long, default_value_t = 1200)]
    pub size: u32,
}

pub fn cmd_preview(args: &PreviewArgs) -> Result<()> {
    let mut job = args.panel.resolve()?;
    let seed = job.seed_or_random();
    let pattern = job.synthesize(seed)?;

    // Hairline strokes vanish once scaled down; keep them about a pixel wide
    let scale = f64::from(args.size.max(1)) / job.width.max(job.height);
    let options = SvgOptions {
        stroke_width: Some(job.output.stroke_width.unwrap_or(1.5 / scale)),
        ..SvgOptions::default()
    };
    let svg = encode_svg(&pattern, job.width, job.height, job.shape, &options)?;

    let (pixmap_width, pixmap_height) = render_png(&svg, &args.output, scale, job.width, job.height)?;
    eprintln!("Wrote: {} ({}x{})", args.output.display(), pixmap_width, pixmap_height);
    Ok(())
}

fn render_png(svg: &str, path: &std::path::Path, scale: f64, width: f64, height: f64) -> Result<(u32, u32)> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default()).context("failed to parse panel SVG")?;

    let pixmap_width = ((width * scale).round() as u32).max(1);
    let pixmap_height = ((height * scale).round() as u32).max(1);
    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height)
        .with_context(|| format!("could not create a {pixmap_width}x{pixmap_height} pixmap"))?;

    pixmap.fill(Color::WHITE);
    let transform = Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok((pixmap_width, pixmap_height))
}
