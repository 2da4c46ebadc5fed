use thiserror::Error;

/// Date and date-time parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    /// The input text does not match the fixed-width layout of the
    /// requested format.
    #[error("`{text}` does not match format `{format}`")]
    FormatMismatch {
        /// The rejected input.
        text: String,
        /// The template literal the input was matched against.
        format: &'static str,
    },

    /// The format string is not one of the recognized template tags.
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    /// The parsed fields describe an instant outside the representable
    /// calendar range.
    #[error("date out of range")]
    OutOfRange,
}

pub type DateTimeResult<T> = std::result::Result<T, DateTimeError>;
