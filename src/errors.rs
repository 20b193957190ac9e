//! Unified error types and result handling for `Shiftbook`.
//!
//! Every fallible operation in the crate returns the [`Result`] alias defined
//! here. Record-file failures are split by cause (structure, coercion, shape)
//! so the interactive layer can report them precisely.

use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment is missing or malformed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what failed to load.
        message: String,
    },

    /// A record file's structure is invalid (missing header, or a row whose
    /// column count differs from the header's).
    #[error("Malformed record file {path}: {message}")]
    Format {
        /// File that failed to parse.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// A column value could not be coerced to its declared type.
    #[error("Column `{column}`: value `{value}` is not a valid {expected}")]
    TypeCoercion {
        /// Column whose value failed to parse.
        column: String,
        /// The raw text that was rejected.
        value: String,
        /// Name of the expected primitive type.
        expected: &'static str,
    },

    /// A record handed to `save` does not share the first record's columns.
    #[error("Record {index} has columns {found:?}, expected {expected:?}")]
    SchemaMismatch {
        /// Zero-based index of the offending record.
        index: usize,
        /// Column sequence derived from the first record.
        expected: Vec<String>,
        /// Column sequence of the offending record.
        found: Vec<String>,
    },

    /// An aggregate was requested over an empty collection.
    #[error("Cannot select an extremum over an empty collection")]
    EmptyCollection,

    /// The backing file for a store does not exist.
    #[error("Record file not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Username/password pair did not match any employee.
    #[error("Invalid credentials for `{username}`")]
    Authentication {
        /// The username that failed to authenticate.
        username: String,
    },

    /// An aggregate referenced an employee id missing from the roster.
    #[error("No employee with id {employee_id} in the roster")]
    UnknownEmployee {
        /// The dangling id.
        employee_id: i64,
    },

    /// I/O error from the filesystem or the console.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
