use thiserror::Error;

/// Errors surfaced by the search box core
///
/// Remote and persistence failures are normally absorbed where they happen
/// and only logged; they exist here so that boundaries can name them.
/// `IndexOutOfRange` is the one variant callers are expected to handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OmniboxError {
    #[error("Query is blank")]
    InvalidInput,

    #[error("Remote suggestions unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for OmniboxError {
    fn from(err: std::io::Error) -> Self {
        OmniboxError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
