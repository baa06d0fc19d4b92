//! Error types for greeter operations.
//!
//! Greeting itself cannot fail; the only fallible step is writing the
//! result to the output stream.

use std::io;
use thiserror::Error;

/// Result type alias for greeter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while running the greeter.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the greeting to the output stream failed.
    #[error("failed to write output: {reason}")]
    Output {
        /// Kind of the underlying I/O error.
        kind: io::ErrorKind,
        /// Description of the underlying I/O error.
        reason: String,
    },
}

impl Error {
    /// Returns true if the reader on the other end of the output closed it.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            Self::Output {
                kind: io::ErrorKind::BrokenPipe,
                ..
            }
        )
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Output {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}
