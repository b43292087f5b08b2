pub mod design;
pub mod filter;
pub mod fir_core;
pub mod response;
pub mod window;

pub use design::{design_lowpass, design_lowpass_into, ideal_lowpass};
pub use filter::Filter;
pub use fir_core::FirFilter;
pub use response::{dc_gain, frequency_response, magnitude_db};
pub use window::Window;
