//! Image info command.
//!
//! Prints dimensions and per-channel statistics of PPM files.

use anyhow::Result;
use tracing::{debug, trace};

use crate::InfoArgs;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    trace!(count = args.input.len(), "info::run");

    for path in &args.input {
        let image = super::load_image(path)?;
        debug!(path = %path.display(), "Loaded");

        println!("{}", path.display());
        println!("  Format:     PPM (P3)");
        println!("  Resolution: {}x{}", image.width(), image.height());
        println!("  Pixels:     {}", image.pixels().len());

        for (name, (min, max, mean)) in ["R", "G", "B"].iter().zip(image.channel_stats()) {
            println!("  {}: min={:3} max={:3} mean={:.3}", name, min, max, mean);
        }

        if verbose > 0 {
            let last = image.pixels().len() - 1;
            println!("  First pixel: {:?}", image.pixels()[0]);
            println!("  Last pixel:  {:?}", image.pixels()[last]);
        }
    }

    Ok(())
}
