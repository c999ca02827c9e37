use std::io;

use thiserror::Error;

/// Errors that can occur when sampling the clock.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The OS clock primitive could not produce a reading.
    ///
    /// This is not retried automatically. A fast clock read is not expected to fail
    /// transiently, so the failure is surfaced immediately instead of masking it with a
    /// retry or a substitute clock source.
    #[error("the operating system clock could not be read")]
    ClockUnavailable {
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for clock sampling operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
