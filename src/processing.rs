//! Block-streaming driver for interleaved multi-channel audio
//!
//! Owns one delay line per channel and lends each to its own [`FirFilter`],
//! then feeds the stream through in blocks of `block_size` frames.

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::signal_processing::FirFilter;

/// What a processing run did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingSummary {
    pub channels: u16,
    pub frames: usize,
    pub blocks: usize,
    pub peak_in: f64,
    pub peak_out: f64,
}

fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |acc, x| acc.max(x.abs()))
}

/// Lowpass every channel of `interleaved` in place
///
/// # Errors
/// Returns `FilterError::Config` for an invalid configuration and
/// `FilterError::InvalidArgument` if the data is not a whole number of
/// frames
pub fn process_interleaved(
    config: &FilterConfig,
    sample_rate: u32,
    channels: u16,
    interleaved: &mut [f64],
) -> Result<ProcessingSummary> {
    config.validate(sample_rate)?;

    let num_channels = channels as usize;
    if num_channels == 0 {
        return Err(FilterError::InvalidArgument("channel count must be positive".into()));
    }
    if !interleaved.len().is_multiple_of(num_channels) {
        return Err(FilterError::InvalidArgument(format!(
            "{} samples is not a whole number of {}-channel frames",
            interleaved.len(),
            num_channels
        )));
    }

    let mut delay_lines = vec![vec![0.0; config.num_taps()]; num_channels];
    let mut filters = Vec::with_capacity(num_channels);
    for delay_line in delay_lines.iter_mut() {
        let mut filter = FirFilter::new(config.order, delay_line)?;
        filter.design(sample_rate, config.cutoff_hz, config.window)?;
        filters.push(filter);
    }

    log::info!(
        "Filtering {} channel(s): order={}, cutoff={} Hz, window={}, block={} frames",
        num_channels,
        config.order,
        config.cutoff_hz,
        config.window,
        config.block_size
    );

    let chunk_len = config.block_size.checked_mul(num_channels).ok_or_else(|| {
        FilterError::Config(format!(
            "block size {} x {} channels overflows",
            config.block_size, num_channels
        ))
    })?;
    let total_frames = interleaved.len() / num_channels;

    let peak_in = peak(interleaved);
    let mut scratch = vec![vec![0.0; config.block_size.min(total_frames)]; num_channels];
    let mut blocks = 0;

    for block in interleaved.chunks_mut(chunk_len) {
        let frames = block.len() / num_channels;

        for (ch, (filter, buf)) in filters.iter_mut().zip(scratch.iter_mut()).enumerate() {
            for (slot, frame) in buf.iter_mut().zip(block.chunks_exact(num_channels)) {
                *slot = frame[ch];
            }
            filter.process_samples(buf, frames)?;
            for (frame, &y) in block.chunks_exact_mut(num_channels).zip(buf.iter()) {
                frame[ch] = y;
            }
        }
        blocks += 1;
    }

    let summary = ProcessingSummary {
        channels,
        frames: total_frames,
        blocks,
        peak_in,
        peak_out: peak(interleaved),
    };
    log::debug!("{:?}", summary);
    Ok(summary)
}
