//! Configuration for the FIR lowpass front ends.
//!
//! Values come from `FilterConfig::default()`, optionally overlaid by a TOML
//! file, then by command-line flags. Missing TOML keys keep their defaults:
//!
//! ```toml
//! order = 128
//! cutoff_hz = 3500.0
//! window = "blackman"
//! block_size = 512
//! ```

use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_BLOCK_SIZE, MAX_BLOCK_SIZE, MAX_ORDER};
use crate::error::{FilterError, Result};
use crate::signal_processing::Window;

/// Lowpass filter and streaming configuration
///
/// # Example
/// ```
/// use firfilter::config::FilterConfig;
/// use firfilter::signal_processing::Window;
///
/// let config = FilterConfig::from_toml_str("order = 32\nwindow = \"hanning\"").unwrap();
/// assert_eq!(config.order, 32);
/// assert_eq!(config.window, Window::Hanning);
/// assert!(config.validate(44100).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Filter order (number of delay elements; taps = order + 1)
    pub order: usize,
    /// Cutoff frequency in Hz
    pub cutoff_hz: f64,
    /// Window applied to the ideal response
    pub window: Window,
    /// Frames handed to the convolution engine per block
    pub block_size: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            order: 64,
            cutoff_hz: 1000.0,
            window: Window::Hamming,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl FilterConfig {
    /// Parse a TOML document; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Number of taps this configuration designs
    pub fn num_taps(&self) -> usize {
        self.order + 1
    }

    /// Check the configuration against the stream's sample rate
    ///
    /// The core designs any finite cutoff; front ends only accept a cutoff
    /// strictly inside (0, Nyquist).
    pub fn validate(&self, sample_rate: u32) -> Result<()> {
        if sample_rate == 0 {
            return Err(FilterError::Config("sample rate must be positive".into()));
        }
        if self.block_size == 0 {
            return Err(FilterError::Config("block size must be positive".into()));
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(FilterError::Config(format!(
                "block size {} exceeds maximum {}",
                self.block_size, MAX_BLOCK_SIZE
            )));
        }
        if self.order > MAX_ORDER {
            return Err(FilterError::Config(format!(
                "order {} exceeds maximum {}",
                self.order, MAX_ORDER
            )));
        }
        let nyquist = sample_rate as f64 / 2.0;
        if !(self.cutoff_hz > 0.0 && self.cutoff_hz < nyquist) {
            return Err(FilterError::Config(format!(
                "cutoff {} Hz must lie between 0 and {} Hz",
                self.cutoff_hz, nyquist
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.order, 64);
        assert_eq!(config.num_taps(), 65);
        assert_eq!(config.window, Window::Hamming);
        assert!(config.validate(48000).is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FilterConfig::from_toml_str("cutoff_hz = 2500.0").unwrap();
        assert_eq!(config.cutoff_hz, 2500.0);
        assert_eq!(config.order, 64);
        assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
    }

    #[test]
    fn test_full_toml() {
        let config = FilterConfig::from_toml_str(
            r#"
            order = 128
            cutoff_hz = 3500.0
            window = "blackman"
            block_size = 512
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            FilterConfig {
                order: 128,
                cutoff_hz: 3500.0,
                window: Window::Blackman,
                block_size: 512,
            }
        );
    }

    #[test]
    fn test_toml_rejects_unknown_window_and_keys() {
        assert!(matches!(
            FilterConfig::from_toml_str("window = \"kaiser\""),
            Err(FilterError::Config(_))
        ));
        assert!(matches!(
            FilterConfig::from_toml_str("taps = 12"),
            Err(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_validate_cutoff_range() {
        let mut config = FilterConfig::default();
        config.cutoff_hz = 22050.0;
        assert!(config.validate(44100).is_err());
        config.cutoff_hz = 0.0;
        assert!(config.validate(44100).is_err());
        config.cutoff_hz = f64::NAN;
        assert!(config.validate(44100).is_err());
        config.cutoff_hz = 22049.0;
        assert!(config.validate(44100).is_ok());
    }

    #[test]
    fn test_validate_block_size_and_order() {
        let mut config = FilterConfig::default();
        config.block_size = 0;
        assert!(config.validate(48000).is_err());

        let mut config = FilterConfig::default();
        config.order = MAX_ORDER + 1;
        assert!(config.validate(48000).is_err());
    }

    #[test]
    fn test_validate_block_size_upper_bound() {
        let mut config = FilterConfig::default();
        config.block_size = MAX_BLOCK_SIZE;
        assert!(config.validate(48000).is_ok());

        for block_size in [MAX_BLOCK_SIZE + 1, usize::MAX / 2 + 1, usize::MAX] {
            config.block_size = block_size;
            assert!(matches!(config.validate(48000), Err(FilterError::Config(_))));
        }
    }
}
