use crate::error::{FilterError, Result};
use crate::signal_processing::{Filter, Window, design_lowpass_into};

/// Windowed-sinc FIR lowpass filter over a caller-owned delay line
///
/// The filter owns its `order + 1` coefficients and borrows a delay line of
/// exactly the same length for its whole lifetime. The delay line is the
/// only state carried between calls, so a stream may be split into blocks
/// of any size without changing the output.
///
/// Tap 0 is paired with the oldest retained sample and tap `N - 1` with the
/// newest.
pub struct FirFilter<'a> {
    coefficients: Vec<f64>,
    delay_line: &'a mut [f64],
    write_index: usize,
}

impl<'a> FirFilter<'a> {
    /// Create a filter of the given order over `delay_line`
    ///
    /// The delay line must hold exactly `order + 1` samples. Its contents
    /// are cleared; its storage stays with the caller.
    ///
    /// # Errors
    /// Returns `FilterError::InvalidArgument` if the delay line length does
    /// not match, or `FilterError::Memory` if the coefficient vector cannot
    /// be allocated
    pub fn new(order: usize, delay_line: &'a mut [f64]) -> Result<Self> {
        let num_taps = order
            .checked_add(1)
            .ok_or_else(|| FilterError::InvalidArgument(format!("order {} too large", order)))?;

        if delay_line.len() != num_taps {
            return Err(FilterError::InvalidArgument(format!(
                "delay line holds {} samples, order {} needs {}",
                delay_line.len(),
                order,
                num_taps
            )));
        }

        let mut coefficients = Vec::new();
        coefficients.try_reserve_exact(num_taps).map_err(|e| {
            FilterError::Memory(format!(
                "could not allocate {} filter coefficients: {}",
                num_taps, e
            ))
        })?;
        coefficients.resize(num_taps, 0.0);

        delay_line.fill(0.0);

        log::debug!("Created FIR filter: order={}, taps={}", order, num_taps);

        Ok(Self {
            coefficients,
            delay_line,
            write_index: 0,
        })
    }

    /// Redesign the coefficients as a windowed-sinc lowpass
    ///
    /// Delay line history and write position are kept, so a running stream
    /// continues with the new response.
    pub fn design(&mut self, sample_rate: u32, cutoff_hz: f64, window: Window) -> Result<()> {
        design_lowpass_into(&mut self.coefficients, sample_rate, cutoff_hz, window)
    }

    /// Process a single sample through the filter
    pub fn process_sample(&mut self, sample: f64) -> f64 {
        let n = self.coefficients.len();
        let w = self.write_index;
        self.delay_line[w] = sample;

        // The ring splits into two contiguous runs: delay[w+1..] holds the
        // oldest samples, delay[..=w] the newest ending with the one just
        // written. Walking them in that order keeps the inner loop free of
        // modulo arithmetic.
        let (newer, older) = self.delay_line.split_at(w + 1);
        let (older_taps, newer_taps) = self.coefficients.split_at(n - w - 1);

        let mut output = 0.0f64;
        for (c, x) in older_taps.iter().zip(older) {
            output += c * x;
        }
        for (c, x) in newer_taps.iter().zip(newer) {
            output += c * x;
        }

        self.write_index += 1;
        if self.write_index == n {
            self.write_index = 0;
        }
        output
    }

    /// Filter the first `sample_count` samples of `buffer` in place
    ///
    /// # Errors
    /// Returns `FilterError::InvalidArgument` if `sample_count` exceeds the
    /// buffer; nothing is touched in that case
    pub fn process_samples(&mut self, buffer: &mut [f64], sample_count: usize) -> Result<()> {
        let len = buffer.len();
        let block = buffer.get_mut(..sample_count).ok_or_else(|| {
            FilterError::InvalidArgument(format!(
                "sample count {} exceeds buffer length {}",
                sample_count, len
            ))
        })?;
        log::trace!("Processing block of {} samples", sample_count);
        self.process_buffer(block);
        Ok(())
    }

    /// Clear the delay line history and rewind the write position
    pub fn reset(&mut self) {
        self.delay_line.fill(0.0);
        self.write_index = 0;
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.coefficients.len()
    }

    /// Get the filter order (number of delay elements)
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Get the group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> f64 {
        self.order() as f64 / 2.0
    }

    /// Get access to the tap coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Get read access to the borrowed delay line
    pub fn delay_line(&self) -> &[f64] {
        &*self.delay_line
    }

    /// Slot the next input sample will be written to
    pub fn write_index(&self) -> usize {
        self.write_index
    }
}

impl Filter for FirFilter<'_> {
    fn process(&mut self, sample: f64) -> f64 {
        self.process_sample(sample)
    }
}
