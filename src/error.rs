//! Error types for loading, writing and persisting configuration files.
//!
//! Canonicalization itself never fails. Every error here originates in one of
//! the collaborators around it:
//!
//! - **Missing file**: the target path is not an existing regular file
//! - **Syntax errors**: the input is not valid TOML
//! - **Encoding errors**: the input bytes are not UTF-8
//! - **Datetime errors**: a TOML datetime that `chrono` cannot represent
//! - **Serialization errors**: the tree cannot be written back as TOML
//! - **I/O errors**: reading or replacing the file failed
//!
//! ## Examples
//!
//! ```rust
//! use pyprojectsort::{from_str, Error};
//!
//! let result = from_str("name = [unterminated");
//! assert!(matches!(result, Err(Error::Parse(_))));
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors raised around canonicalization.
#[derive(Debug, Error)]
pub enum Error {
    /// The target path does not reference an existing regular file
    #[error("No pyproject.toml detected at path: '{}'", .0.display())]
    MissingFile(PathBuf),

    /// Malformed TOML syntax
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Input bytes were not valid UTF-8
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// A datetime outside the range chrono can represent
    #[error("invalid datetime: {0}")]
    InvalidDatetime(String),

    /// The tree could not be serialized back to TOML
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// TOML documents must have a table at the root
    #[error("cannot write a {0} as a TOML document, the root must be a table")]
    UnsupportedRoot(&'static str),

    /// Reading or writing the file failed
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Creates an I/O error tagged with the path it happened on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyprojectsort::Error;
    /// use std::io;
    ///
    /// let err = Error::io("pyproject.toml", io::Error::from(io::ErrorKind::PermissionDenied));
    /// assert!(err.to_string().contains("pyproject.toml"));
    /// ```
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid datetime error with a display message.
    pub fn invalid_datetime<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidDatetime(msg.to_string())
    }

    /// Returns `true` if this error is the missing-file precondition failure.
    #[must_use]
    pub const fn is_missing_file(&self) -> bool {
        matches!(self, Error::MissingFile(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
