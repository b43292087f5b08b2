use std::f64::consts::PI;

use firfilter::signal_processing::Filter;

/// Unit-amplitude sine at `freq_hz`
pub fn sine(freq_hz: f64, sample_rate: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| (2.0 * PI * freq_hz * i as f64 / sample_rate).sin())
        .collect()
}

/// Sum of sines with incommensurate phases, deterministic
pub fn multitone(freqs_hz: &[f64], sample_rate: f64, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            freqs_hz
                .iter()
                .enumerate()
                .map(|(k, f)| (2.0 * PI * f * t + k as f64 * 0.7).sin())
                .sum::<f64>()
                / freqs_hz.len() as f64
        })
        .collect()
}

pub fn rms(samples: &[f64]) -> f64 {
    (samples.iter().map(|x| x * x).sum::<f64>() / samples.len() as f64).sqrt()
}

/// Steady-state attenuation of a sine at `freq_hz`, skipping `settle` samples
pub fn attenuation_db<F: Filter>(
    filter: &mut F,
    freq_hz: f64,
    sample_rate: f64,
    num_samples: usize,
    settle: usize,
) -> f64 {
    let input = sine(freq_hz, sample_rate, num_samples);
    let mut output = input.clone();
    filter.process_buffer(&mut output);
    20.0 * (rms(&output[settle..]) / rms(&input[settle..])).log10()
}
