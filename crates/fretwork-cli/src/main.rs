//! fretwork - generate cut-panel patterns from the command line
//!
//! Usage:
//!   fretwork generate -f modern -s honeycomb -W 400 -H 600 --seed 42 > panel.svg
//!   fretwork generate -c job.yaml -o panel.dxf
//!   fretwork styles                      List families and styles
//!   fretwork preview -c job.yaml -o panel.png
//!   fretwork benchmark -f sacred         Time every style of a family
//!
//! Diagnostics go to stderr (`RUST_LOG` or `-v`), so stdout can be piped.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{BenchmarkArgs, GenerateArgs, PreviewArgs, StylesArgs};

#[derive(Parser)]
#[command(name = "fretwork")]
#[command(author, version, about = "Deterministic cut-panel pattern generator")]
#[command(propagate_version = true)]
struct Cli {
    /// Log debug detail to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a panel and write SVG, DXF or JSON
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// List pattern families and their styles
    #[command(alias = "patterns")]
    Styles(StylesArgs),

    /// Render a panel to PNG
    Preview(PreviewArgs),

    /// Time synthesis for every style of a family
    Benchmark(BenchmarkArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate(args) => cli::cmd_generate(&args),
        Commands::Styles(args) => cli::cmd_styles(&args),
        Commands::Preview(args) => cli::cmd_preview(&args),
        Commands::Benchmark(args) => cli::cmd_benchmark(&args),
    }
}

/// stderr subscriber: `-v` forces debug, otherwise `RUST_LOG`, otherwise warn.
fn init_logging(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
