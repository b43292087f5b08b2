//! Status-returning filter interface
//!
//! Thin boundary over [`FirFilter`] for callers that hold optional handles
//! and signed counts (file and command-line front ends). Every operation
//! validates before it mutates, so a failed call leaves the filter, its
//! delay line and the sample buffer exactly as they were.

use crate::error::{FilterError, Result};
use crate::signal_processing::{FirFilter, Window};

/// Outcome of a filter operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStatus {
    NoError,
    NullArgument,
    InvalidArgument,
    /// Allocation failure or a corrupted handle; the caller should stop
    MemoryError,
}

impl FilterStatus {
    pub fn code(&self) -> i32 {
        match self {
            FilterStatus::NoError => 0,
            FilterStatus::NullArgument => 1,
            FilterStatus::InvalidArgument => 2,
            FilterStatus::MemoryError => 3,
        }
    }

    pub fn is_fatal(&self) -> bool {
        *self == FilterStatus::MemoryError
    }
}

impl From<&FilterError> for FilterStatus {
    fn from(err: &FilterError) -> Self {
        match err {
            FilterError::NullArgument(_) => FilterStatus::NullArgument,
            FilterError::Memory(_) => FilterStatus::MemoryError,
            // Configuration and file errors come from the front ends, never
            // from the filter operations themselves
            FilterError::InvalidArgument(_)
            | FilterError::Config(_)
            | FilterError::Wav(_)
            | FilterError::Io(_) => FilterStatus::InvalidArgument,
        }
    }
}

impl<T> From<&Result<T>> for FilterStatus {
    fn from(result: &Result<T>) -> Self {
        match result {
            Ok(_) => FilterStatus::NoError,
            Err(e) => e.into(),
        }
    }
}

/// Create a filter of `order` over a caller-allocated delay line of
/// `order + 1` samples
///
/// # Errors
/// `InvalidArgument` for a negative order or mismatched delay line,
/// `Memory` if the coefficients cannot be allocated
pub fn create_filter(order: i64, delay_line: &mut [f64]) -> Result<FirFilter<'_>> {
    let order = usize::try_from(order)
        .map_err(|_| FilterError::InvalidArgument(format!("order must be >= 0, got {}", order)))?;
    FirFilter::new(order, delay_line)
}

/// Release a filter's coefficients
///
/// The delay line is not freed; the caller's borrow simply ends.
pub fn destroy_filter(filter: Option<FirFilter<'_>>) -> Result<()> {
    let filter = filter.ok_or(FilterError::NullArgument("filter"))?;
    if filter.num_taps() == 0 {
        return Err(FilterError::Memory(
            "filter coefficients missing".to_string(),
        ));
    }
    log::debug!("Destroying FIR filter with {} taps", filter.num_taps());
    drop(filter);
    Ok(())
}

/// Design windowed-sinc lowpass coefficients into an existing filter
pub fn set_coefficients(
    filter: Option<&mut FirFilter<'_>>,
    sample_rate: i64,
    cutoff_hz: f64,
    window: Window,
) -> Result<()> {
    let filter = filter.ok_or(FilterError::NullArgument("filter"))?;
    let sample_rate = u32::try_from(sample_rate)
        .ok()
        .filter(|&sr| sr > 0)
        .ok_or_else(|| {
            FilterError::InvalidArgument(format!("sample rate must be > 0, got {}", sample_rate))
        })?;
    filter.design(sample_rate, cutoff_hz, window)
}

/// Filter the first `sample_count` samples of `buffer` in place
pub fn process_buffer(
    filter: Option<&mut FirFilter<'_>>,
    buffer: Option<&mut [f64]>,
    sample_count: i64,
) -> Result<()> {
    let filter = filter.ok_or(FilterError::NullArgument("filter"))?;
    let buffer = buffer.ok_or(FilterError::NullArgument("buffer"))?;
    let sample_count = usize::try_from(sample_count).map_err(|_| {
        FilterError::InvalidArgument(format!("sample count must be >= 0, got {}", sample_count))
    })?;
    filter.process_samples(buffer, sample_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_destroy_keeps_delay_line() {
        let mut delay = vec![0.5; 9];
        let filter = create_filter(8, &mut delay).unwrap();
        assert!(destroy_filter(Some(filter)).is_ok());

        // Still ours, same length
        assert_eq!(delay.len(), 9);
        delay.push(1.0);
        assert_eq!(delay.len(), 10);
    }

    #[test]
    fn test_create_rejects_negative_order() {
        let mut delay = vec![0.0; 1];
        let result = create_filter(-1, &mut delay);
        assert_eq!(FilterStatus::from(&result), FilterStatus::InvalidArgument);
    }

    #[test]
    fn test_destroy_null_handle() {
        let result = destroy_filter(None);
        assert_eq!(FilterStatus::from(&result), FilterStatus::NullArgument);
    }

    #[test]
    fn test_set_coefficients_status() {
        let mut delay = vec![0.0; 5];
        let mut filter = create_filter(4, &mut delay).unwrap();

        let result = set_coefficients(None, 8000, 1000.0, Window::Hamming);
        assert_eq!(FilterStatus::from(&result), FilterStatus::NullArgument);

        let result = set_coefficients(Some(&mut filter), 0, 1000.0, Window::Hamming);
        assert_eq!(FilterStatus::from(&result), FilterStatus::InvalidArgument);
        let result = set_coefficients(Some(&mut filter), -8000, 1000.0, Window::Hamming);
        assert_eq!(FilterStatus::from(&result), FilterStatus::InvalidArgument);
        assert!(filter.coefficients().iter().all(|&c| c == 0.0));

        let result = set_coefficients(Some(&mut filter), 8000, 1000.0, Window::Hamming);
        assert_eq!(FilterStatus::from(&result), FilterStatus::NoError);
        assert!((filter.coefficients()[2] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_process_buffer_null_arguments() {
        let mut delay = vec![0.0; 3];
        let mut filter = create_filter(2, &mut delay).unwrap();
        let mut buffer = vec![1.0, 2.0];

        let result = process_buffer(None, Some(buffer.as_mut_slice()), 2);
        assert_eq!(FilterStatus::from(&result), FilterStatus::NullArgument);

        let result = process_buffer(Some(&mut filter), None, 2);
        assert_eq!(FilterStatus::from(&result), FilterStatus::NullArgument);
    }

    #[test]
    fn test_process_buffer_negative_count_mutates_nothing() {
        let mut delay = vec![0.0; 5];
        let mut filter = create_filter(4, &mut delay).unwrap();
        set_coefficients(Some(&mut filter), 8000, 1000.0, Window::Hamming).unwrap();

        let mut buffer = vec![1.0, 2.0, 3.0];
        process_buffer(Some(&mut filter), Some(&mut buffer[..1]), 1).unwrap();
        let history = filter.delay_line().to_vec();
        let index = filter.write_index();
        let before = buffer.clone();

        let result = process_buffer(Some(&mut filter), Some(buffer.as_mut_slice()), -1);
        assert_eq!(FilterStatus::from(&result), FilterStatus::InvalidArgument);
        assert_eq!(buffer, before);
        assert_eq!(filter.delay_line(), history.as_slice());
        assert_eq!(filter.write_index(), index);
    }

    #[test]
    fn test_process_buffer_zero_count_is_noop() {
        let mut delay = vec![0.0; 2];
        let mut filter = create_filter(1, &mut delay).unwrap();
        let mut buffer = vec![1.0];
        let result = process_buffer(Some(&mut filter), Some(buffer.as_mut_slice()), 0);
        assert_eq!(FilterStatus::from(&result), FilterStatus::NoError);
        assert_eq!(buffer, vec![1.0]);
        assert_eq!(filter.write_index(), 0);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FilterStatus::NoError.code(), 0);
        assert!(FilterStatus::MemoryError.is_fatal());
        assert!(!FilterStatus::InvalidArgument.is_fatal());
        let err = FilterError::Memory("x".into());
        assert_eq!(FilterStatus::from(&err), FilterStatus::MemoryError);
    }
}
