//! rtw - ray tracer toolbox CLI
//!
//! Writes the reference gradient image, inspects PPM files and evaluates
//! vector operations from the command line.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::vec::VecOp;

#[derive(Parser)]
#[command(name = "rtw")]
#[command(author, version, about = "Ray tracer toolbox: PPM output and vector math")]
#[command(long_about = "
Small toolbox around the rtw vector library and PPM writer.

Examples:
  rtw gradient                          # 256x256 gradient to output.ppm
  rtw gradient -W 400 -H 225 -o sky.ppm
  rtw info output.ppm                   # Dimensions and channel stats
  rtw vec cross 1,0,0 0,1,0             # [0.000000 0.000000 1.000000]
  rtw vec len 3,4,0                     # 5
  RUST_LOG=debug rtw gradient           # Verbose logging
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the RGB gradient test image as plain-text PPM
    #[command(visible_alias = "g")]
    Gradient(GradientArgs),

    /// Display PPM image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Evaluate a vector operation
    Vec(VecArgs),
}

#[derive(Args)]
struct GradientArgs {
    /// Output image
    #[arg(short, long, default_value = "output.ppm")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value = "256")]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value = "256")]
    height: u32,

    /// Suppress the scanline progress indicator
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct VecArgs {
    /// Operation to apply
    #[arg(value_enum)]
    op: VecOp,

    /// First operand, as x,y,z
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second operand: x,y,z for vector ops, a number for scalar ops
    #[arg(allow_hyphen_values = true)]
    b: Option<String>,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Gradient(args) => commands::gradient::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Vec(args) => commands::vec::run(args, cli.verbose),
    }
}
