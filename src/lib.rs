pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod processing;
pub mod signal_processing;
pub mod wav;

pub use api::FilterStatus;
pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use signal_processing::{FirFilter, Window};
pub use wav::save_wav;
