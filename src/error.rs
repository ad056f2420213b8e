use thiserror::Error;

use crate::parse::Format;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The input does not match the pattern of the format it was parsed as.
    #[error("invalid color format: {input:?} is not a valid {format} color")]
    InvalidColorFormat {
        /// The text that failed to parse.
        input: String,
        /// The format the text was parsed as.
        format: Format,
    },
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
