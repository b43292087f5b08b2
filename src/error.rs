use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Null argument: {0}")]
    NullArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Memory error: {0}")]
    Memory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FilterError {
    /// Memory errors leave the filter in an unusable state; everything else
    /// is recoverable by the caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, FilterError::Memory(_))
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FilterError::NullArgument(_) => 1,
            FilterError::InvalidArgument(_) => 2,
            FilterError::Memory(_) => 3,
            FilterError::Config(_) => 4,
            FilterError::Wav(_) | FilterError::Io(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
