use thiserror::Error;

/// Argument validation failures raised before any text is processed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("Text must be a string")]
    NonStringText,

    #[error("Shift value must be a number")]
    NonNumericShift,
}

impl CipherError {
    /// Category check for callers that group failures by kind rather than by
    /// variant; every validation error is an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NonStringText | Self::NonNumericShift)
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
