//! Gradient command.
//!
//! Writes the reference test image: red ramps left to right, green top to
//! bottom, blue right to left.

use std::io::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use anyhow::{bail, Result};
use rtw_io::color::to_rgb8;
use rtw_io::RgbImage;
use rtw_math::Color;
use tracing::{debug, info, trace};

use crate::GradientArgs;

/// Color of pixel (`col`, `row`) in a `width` x `height` gradient.
///
/// Ratios use `dim - 1` as denominator (1 for a single-pixel axis). Blue is
/// `(width - col) / (width - 1)`, which exceeds 1 in the left column; the
/// quantizer saturates it.
pub fn gradient_color(col: u32, row: u32, width: u32, height: u32) -> Color {
    let wd = f64::from(width.saturating_sub(1).max(1));
    let hd = f64::from(height.saturating_sub(1).max(1));
    Color::new(
        f64::from(col) / wd,
        f64::from(row) / hd,
        f64::from(width - col) / wd,
    )
}

/// Renders the gradient into an image, calling `on_row_done(remaining)` as
/// scanlines complete.
///
/// Rows finish on worker threads in any order. Calls are serialized and
/// `remaining` strictly decreases across calls, ending at 0; a count that
/// another thread already passed is skipped.
pub fn render<F>(width: u32, height: u32, on_row_done: F) -> rtw_io::IoResult<RgbImage>
where
    F: Fn(u32) + Sync,
{
    let done = AtomicU32::new(0);
    let reported = Mutex::new(height);
    RgbImage::from_fn(width, height, |col, row| {
        let px = to_rgb8(gradient_color(col, row, width, height));
        if col + 1 == width {
            let remaining = height - (done.fetch_add(1, Ordering::Relaxed) + 1);
            if let Ok(mut last) = reported.lock() {
                if remaining < *last {
                    *last = remaining;
                    on_row_done(remaining);
                }
            }
        }
        px
    })
}

/// Runs the gradient command.
pub fn run(args: GradientArgs, verbose: u8) -> Result<()> {
    trace!(output = %args.output.display(), width = args.width, height = args.height, "gradient::run");

    if args.width == 0 || args.height == 0 {
        bail!(
            "Image dimensions must be positive, got {}x{}",
            args.width,
            args.height
        );
    }

    info!(width = args.width, height = args.height, "Rendering gradient");

    let quiet = args.quiet;
    let image = render(args.width, args.height, |remaining| {
        if !quiet {
            let mut err = std::io::stderr().lock();
            let _ = write!(err, "\rScanlines remaining: {:<8}", remaining);
            let _ = err.flush();
        }
    })?;
    if !quiet {
        eprintln!();
    }

    debug!(pixels = image.pixels().len(), "Rendered");
    super::save_image(&args.output, &image)?;

    println!("Successfully wrote to {}", args.output.display());
    if verbose > 0 {
        let [r, g, b] = image.channel_stats();
        println!("  R {:?}  G {:?}  B {:?}", r, g, b);
    }

    Ok(())
}
