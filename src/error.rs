//! Error type for sequence operations.
//!
//! Empty input is never an error in this crate: operations return `0.0`,
//! `None` or an empty `Vec` instead. The only failure is a caller-supplied
//! parameter outside its valid domain, such as a zero chunk size.

/// Error type for invalid operation parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqError {
    /// A parameter violates the operation's constraints.
    InvalidArgument(String),
}

impl std::fmt::Display for SeqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SeqError {}

/// Convenience alias for results carrying a [`SeqError`].
pub type Result<T> = std::result::Result<T, SeqError>;
