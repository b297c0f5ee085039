use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::config::Config;
use crate::gray::convert;
use crate::imgproc::dithering;
use crate::io;

/// Decode, convert to grayscale, dither in place, re-encode in the input's
/// container format.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let t_start = Instant::now();

    let (src, format) = io::load_image(&config.input)
        .with_context(|| format!("failed to load {}", config.input.display()))?;
    let t_decoded = Instant::now();

    let mut frame = convert::to_grayscale(&src);
    let t_converted = Instant::now();

    dithering::floyd_steinberg(&mut frame, config.invert);
    let t_dithered = Instant::now();

    io::save_image(&frame, &config.output, format)
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    debug!(
        "Cost: decode: {:?}, grayscale: {:?}, dither: {:?}, encode: {:?}",
        t_decoded - t_start,
        t_converted - t_decoded,
        t_dithered - t_converted,
        t_dithered.elapsed()
    );
    info!(
        "Dithered {} to {} ({}x{}, {:?})",
        config.input.display(),
        config.output.display(),
        frame.width(),
        frame.height(),
        format
    );
    Ok(())
}
