use crate::constants::{PI, TAU};
use crate::error::{FilterError, Result};
use crate::signal_processing::Window;

/// Fill `coefficients` with the ideal lowpass impulse response for the
/// normalized cutoff `ft = cutoff / sample_rate`, centered on `M / 2`.
///
/// When the tap count is even there is no center tap and every tap uses the
/// general sinc expression.
pub fn ideal_lowpass(coefficients: &mut [f64], ft: f64) {
    let half_m = (coefficients.len() as f64 - 1.0) / 2.0;

    for (i, c) in coefficients.iter_mut().enumerate() {
        let offset = i as f64 - half_m;
        *c = if offset == 0.0 {
            2.0 * ft
        } else {
            (TAU * ft * offset).sin() / (PI * offset)
        };
    }
}

/// Design a windowed-sinc lowpass into an existing coefficient slice
///
/// Overwrites every coefficient. Nothing is written when validation fails.
///
/// # Errors
/// Returns `FilterError::InvalidArgument` if `sample_rate` is zero or
/// `cutoff_hz` is not finite
pub fn design_lowpass_into(
    coefficients: &mut [f64],
    sample_rate: u32,
    cutoff_hz: f64,
    window: Window,
) -> Result<()> {
    if sample_rate == 0 {
        return Err(FilterError::InvalidArgument(
            "sample rate must be positive".to_string(),
        ));
    }
    if !cutoff_hz.is_finite() {
        return Err(FilterError::InvalidArgument(format!(
            "cutoff must be finite, got {}",
            cutoff_hz
        )));
    }

    let nyquist = sample_rate as f64 / 2.0;
    if cutoff_hz <= 0.0 || cutoff_hz >= nyquist {
        log::warn!(
            "Cutoff {} Hz is outside (0, {}) Hz; the design will not be a useful lowpass",
            cutoff_hz,
            nyquist
        );
    }

    let ft = cutoff_hz / sample_rate as f64;
    ideal_lowpass(coefficients, ft);
    window.apply(coefficients);

    log::debug!(
        "Designed {}-tap lowpass: fc={} Hz, fs={} Hz, ft={:.6}, window={}",
        coefficients.len(),
        cutoff_hz,
        sample_rate,
        ft,
        window
    );
    Ok(())
}

/// Design a windowed-sinc lowpass of the given order into a new vector
/// of `order + 1` taps
///
/// # Errors
/// Returns `FilterError::InvalidArgument` for an order whose tap count
/// overflows or an invalid rate or cutoff, and `FilterError::Memory` if the
/// coefficients cannot be allocated
pub fn design_lowpass(
    order: usize,
    sample_rate: u32,
    cutoff_hz: f64,
    window: Window,
) -> Result<Vec<f64>> {
    let num_taps = order
        .checked_add(1)
        .ok_or_else(|| FilterError::InvalidArgument(format!("order {} too large", order)))?;

    let mut coefficients = Vec::new();
    coefficients.try_reserve_exact(num_taps).map_err(|e| {
        FilterError::Memory(format!(
            "could not allocate {} filter coefficients: {}",
            num_taps, e
        ))
    })?;
    coefficients.resize(num_taps, 0.0);

    design_lowpass_into(&mut coefficients, sample_rate, cutoff_hz, window)?;
    Ok(coefficients)
}
