//! Error types for parsing and cascading.

use thiserror::Error;

/// Errors that can occur while parsing declarations or cascading styles.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The declaration is malformed for this property: bad syntax, a
    /// disallowed unit, a negative length where CSS forbids one, or a
    /// repeated keyword. The caller drops the declaration and moves on.
    #[error("invalid declaration")]
    Invalid,

    /// An allocation failed. Partial work has been released; the caller
    /// typically abandons the stylesheet.
    #[error("out of memory")]
    NoMemory,
}

pub type Result<T> = std::result::Result<T, Error>;
