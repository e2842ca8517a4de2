//! Benchmark command implementation.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;

use fretwork::{synthesize, Family, StyleParams};

#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    /// Family to time (default: all)
    #[arg(short, long)]
    pub family: Option<Family>,

    /// Runs per style
    #[arg(short = 'n', long, default_value_t = 20)]
    pub iterations: u32,

    #[arg(short = 'W', long, default_value_t = 400.0)]
    pub width: f64,

    #[arg(short = 'H', long, default_value_t = 600.0)]
    pub height: f64,

    /// First seed; each run uses the next one
    #[arg(long, default_value_t = 42)]
    pub seed: i64,

    #[arg(short, long)]
    pub density: Option<f64>,
}

struct Timing {
    family: Family,
    style: &'static str,
    primitives: usize,
    elapsed: Duration,
}

pub fn cmd_benchmark(args: &BenchmarkArgs) -> Result<()> {
    if !(args.width > 0.0 && args.height > 0.0) {
        return Err(fretwork::Error::InvalidPanel { width: args.width, height: args.height }.into());
    }
    let families: Vec<Family> = match args.family {
        Some(family) => vec![family],
        None => Family::all().to_vec(),
    };
    let iterations = args.iterations.max(1);

    let mut timings = Vec::new();
    for family in families {
        for entry in family.styles() {
            let mut params = StyleParams::new().with_sub_style(entry.name);
            params.density = args.density;

            let start = Instant::now();
            let mut primitives = 0;
            for i in 0..iterations {
                let bundle = synthesize(family, args.width, args.height, args.seed + i64::from(i), &params);
                primitives += bundle.primitive_count();
            }
            timings.push(Timing {
                family,
                style: entry.name,
                primitives: primitives / iterations as usize,
                elapsed: start.elapsed(),
            });
        }
    }

    let total: Duration = timings.iter().map(|t| t.elapsed).sum();

    println!();
    println!("═══════════════════════════════════════════════════════");
    println!("  FRETWORK BENCHMARK  {}x{}  x{} runs", args.width, args.height, iterations);
    println!("═══════════════════════════════════════════════════════");
    println!("  {:<8} {:<14} {:>10} {:>14}", "family", "style", "prims", "avg (ms)");
    println!("───────────────────────────────────────────────────────");
    for t in &timings {
        let avg_ms = t.elapsed.as_secs_f64() * 1000.0 / f64::from(iterations);
        println!("  {:<8} {:<14} {:>10} {:>14.3}", t.family.name(), t.style, t.primitives, avg_ms);
    }
    println!("───────────────────────────────────────────────────────");
    println!("  Total: {:.2}ms", total.as_secs_f64() * 1000.0);
    println!("═══════════════════════════════════════════════════════");
    Ok(())
}
