//! Error types for Snapfeed
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (settings file, log directory)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Transport-level failure while fetching an image
    #[snafu(display("Request for {url} failed: {source}"))]
    Http { url: String, source: reqwest::Error },

    /// Server answered with a non-success status
    #[snafu(display("Request for {url} returned HTTP {status}"))]
    HttpStatus { url: String, status: u16 },

    /// Response body exceeds the image size limit
    #[snafu(display("Image at {url} is too large ({size} bytes)"))]
    ImageTooLarge { url: String, size: usize },

    /// Response body is not an image format we can decode
    #[snafu(display("Unsupported image format at {url}"))]
    UnsupportedImage { url: String },

    /// Two posts in one feed share an id
    #[snafu(display("Duplicate post id {id} in feed"))]
    DuplicatePostId { id: u32 },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
