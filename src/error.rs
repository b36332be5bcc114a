use std::fmt;

/// Errors reported by the explicitly fallible tree operations.
///
/// The plain operations (`insert`, `remove`) treat these cases as silent
/// no-ops instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Keys must contain at least one character.
    EmptyKey,
    /// No value is stored under the key.
    NotFound { key: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyKey => f.write_str("empty key"),
            Error::NotFound { key } => write!(f, "key not found: {key:?}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
