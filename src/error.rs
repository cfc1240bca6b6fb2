//! Error types for statecopy.
//!
//! Failures raised by caller-supplied getters, setters and mappers are never
//! represented here: the infallible operations let panics unwind untouched
//! and the `try_*` operations hand back the caller's own error value.
//!
//! [`Error`] only covers the sinks written by [`write_joined`](crate::write_joined)
//! and [`write_joined_io`](crate::write_joined_io).

use thiserror::Error;

/// Result type for sink-writing operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while writing joined values into a sink.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The `fmt::Write` sink rejected a write
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    /// The `io::Write` sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
