use thiserror::Error;

/// `file:` URL ↔ path conversion errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileUrlError {
    /// The input string could not be parsed as a URL at all.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL's scheme is not `file`.
    #[error("URL scheme must be `file`, got `{0}`")]
    InvalidScheme(String),

    /// The URL path contains a percent-encoded path separator (`%2F` or,
    /// on Windows, `%5C`), which would smuggle a separator past path
    /// validation.
    #[error("URL path must not contain encoded path separators")]
    EncodedSeparator,

    /// POSIX file URLs must be host-less.
    #[error("file URL host `{0}` is not allowed on this platform")]
    HostNotAllowed(String),

    /// A host-less Windows file URL path must begin with a drive letter.
    #[error("file URL path must be absolute (missing drive letter)")]
    PathNotAbsolute,
}

pub type FileUrlResult<T> = std::result::Result<T, FileUrlError>;
