//! Frequency response of a coefficient vector
//!
//! Evaluates the discrete-time Fourier transform of the taps,
//! `H(e^{jω}) = Σ c[k] e^{-jωk}` with `ω = 2π f / fs`. The magnitude does not
//! depend on whether the taps are read oldest-first or newest-first.

use num_complex::Complex;

use crate::constants::TAU;

/// Complex response of `coefficients` at `freq_hz`
pub fn frequency_response(coefficients: &[f64], freq_hz: f64, sample_rate: f64) -> Complex<f64> {
    let omega = TAU * freq_hz / sample_rate;
    coefficients
        .iter()
        .enumerate()
        .map(|(k, &c)| Complex::from_polar(c, -omega * k as f64))
        .sum()
}

/// Magnitude response in dB at `freq_hz`
pub fn magnitude_db(coefficients: &[f64], freq_hz: f64, sample_rate: f64) -> f64 {
    let mag = frequency_response(coefficients, freq_hz, sample_rate).norm();
    20.0 * mag.max(f64::MIN_POSITIVE).log10()
}

/// Response at zero frequency (sum of the coefficients)
pub fn dc_gain(coefficients: &[f64]) -> f64 {
    coefficients.iter().sum()
}

/// Group delay of a linear-phase filter in samples
pub fn group_delay_samples(coefficients: &[f64]) -> f64 {
    coefficients.len().saturating_sub(1) as f64 / 2.0
}

/// Whether `coefficients[i] == coefficients[N-1-i]` within `epsilon`
pub fn is_symmetric(coefficients: &[f64], epsilon: f64) -> bool {
    coefficients
        .iter()
        .zip(coefficients.iter().rev())
        .all(|(a, b)| (a - b).abs() <= epsilon)
}

/// A single point of a sampled magnitude response
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ResponsePoint {
    pub freq_hz: f64,
    pub magnitude_db: f64,
}

/// Magnitude response at `points` frequencies evenly spaced from DC to Nyquist
pub fn sample_response(
    coefficients: &[f64],
    sample_rate: f64,
    points: usize,
) -> Vec<ResponsePoint> {
    if points == 0 {
        return Vec::new();
    }
    let nyquist = sample_rate / 2.0;
    let step = if points > 1 {
        nyquist / (points - 1) as f64
    } else {
        0.0
    };
    (0..points)
        .map(|i| {
            let freq_hz = i as f64 * step;
            ResponsePoint {
                freq_hz,
                magnitude_db: magnitude_db(coefficients, freq_hz, sample_rate),
            }
        })
        .collect()
}
