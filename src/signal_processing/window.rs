//! Window functions for windowed-sinc FIR design
//!
//! Every window is evaluated against `M = N - 1`, where `N` is the number of
//! taps, so that the first and last taps sit at the window edges and the
//! window is symmetric about `M / 2`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{PI, TAU};

/// Window applied to the truncated ideal lowpass response
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    clap::ValueEnum,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    /// Uniform weight of 1 (plain truncation)
    Rectangular,
    /// Triangular window: 1 - 2|i - M/2| / M
    Bartlett,
    /// 0.5 - 0.5 cos(2πi/M)
    Hanning,
    /// 0.54 - 0.46 cos(2πi/M)
    #[default]
    Hamming,
    /// 0.42 - 0.5 cos(2πi/M) + 0.08 cos(4πi/M)
    Blackman,
}

impl Window {
    pub const ALL: [Window; 5] = [
        Window::Rectangular,
        Window::Bartlett,
        Window::Hanning,
        Window::Hamming,
        Window::Blackman,
    ];

    /// Weight of tap `index` in a window of `length` taps.
    ///
    /// A single-tap window has no edges to taper, so every variant weighs it
    /// by 1 rather than dividing by `M = 0`.
    pub fn weight(&self, index: usize, length: usize) -> f64 {
        if length <= 1 {
            return 1.0;
        }
        let m = (length - 1) as f64;
        let i = index as f64;

        match self {
            Window::Rectangular => 1.0,
            Window::Bartlett => 1.0 - 2.0 * (i - m / 2.0).abs() / m,
            Window::Hanning => 0.5 - 0.5 * (TAU * i / m).cos(),
            Window::Hamming => 0.54 - 0.46 * (TAU * i / m).cos(),
            Window::Blackman => {
                0.42 - 0.5 * (TAU * i / m).cos() + 0.08 * (4.0 * PI * i / m).cos()
            }
        }
    }

    /// Multiply `coefficients` in place by this window
    pub fn apply(&self, coefficients: &mut [f64]) {
        if *self == Window::Rectangular {
            return;
        }
        let length = coefficients.len();
        for (i, c) in coefficients.iter_mut().enumerate() {
            *c *= self.weight(i, length);
        }
    }

    /// Window weights for `length` taps
    pub fn generate(&self, length: usize) -> Vec<f64> {
        (0..length).map(|i| self.weight(i, length)).collect()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Window::Rectangular => "rectangular",
            Window::Bartlett => "bartlett",
            Window::Hanning => "hanning",
            Window::Hamming => "hamming",
            Window::Blackman => "blackman",
        };
        f.write_str(name)
    }
}

impl FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangular" => Ok(Window::Rectangular),
            "bartlett" | "triangular" => Ok(Window::Bartlett),
            "hann" | "hanning" => Ok(Window::Hanning),
            "hamming" => Ok(Window::Hamming),
            "blackman" => Ok(Window::Blackman),
            _ => Err(format!("unknown window: {}", s)),
        }
    }
}
