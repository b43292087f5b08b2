//! Numeric constants for filter design and processing
//!
//! Shared by the window functions, the coefficient designer and the
//! configuration layer.

/// π, used by the sinc kernel denominator.
pub const PI: f64 = std::f64::consts::PI;

/// 2π, used by the sinc kernel argument and the cosine windows.
pub const TAU: f64 = std::f64::consts::TAU;

/// Largest filter order accepted from user-facing configuration.
/// The core itself accepts any order the allocator can satisfy.
pub const MAX_ORDER: usize = 1 << 16;

/// Default number of frames handed to the convolution engine per block.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Largest block size accepted from user-facing configuration.
pub const MAX_BLOCK_SIZE: usize = 1 << 20;

/// Tolerance used when checking coefficient symmetry.
pub const SYMMETRY_EPSILON: f64 = 1e-12;
