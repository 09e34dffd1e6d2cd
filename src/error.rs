//! Error types and result type for the MD2 crate.
//!
//! This module defines all error variants that can occur while gathering input,
//! parsing digests, or running the self-test. It uses the `snafu` library for
//! ergonomic error handling with automatic backtrace capture.
//!
//! The digest engine itself is infallible: any byte sequence is a valid message,
//! and allocation failure aborts the process.
//!
//! # Examples
//!
//! ```
//! use md2::{Result, Md2Error};
//!
//! fn read_message() -> Result<Vec<u8>> {
//!     Err(Md2Error::invalid_parameter("Input path cannot be empty"))
//! }
//!
//! match read_message() {
//!     Ok(data) => println!("Read {} bytes", data.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`Md2Error::Io`]: I/O errors while opening or reading the input source
//! - [`Md2Error::InvalidParameter`]: Invalid function or command-line parameters
//! - [`Md2Error::InvalidDataFormat`]: Malformed hex digests
//! - [`Md2Error::SelfTestFailed`]: Known-answer test did not reproduce the reference digest
//! - [`Md2Error::DigestMismatch`]: Computed digest differs from the expected one

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the MD2 crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
/// Use the helper methods on `Md2Error` for convenient error construction.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Md2Error {
    /// I/O error occurred while reading a file or standard input.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Input data is malformed or doesn't match the expected format.
    #[snafu(display("Invalid data format: {message}"))]
    InvalidDataFormat {
        message: String,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// A known-answer test produced a different digest than the reference.
    #[snafu(display("Self-test failed for {input:?}: expected {expected}, got {got}"))]
    SelfTestFailed {
        input: String,
        expected: String,
        got: String,
        backtrace: Backtrace,
    },

    /// The computed digest differs from the one supplied by the caller.
    #[snafu(display("Digest mismatch: expected {expected}, got {got}"))]
    DigestMismatch {
        expected: String,
        got: String,
        backtrace: Backtrace,
    },
}

// For automatic conversions from standard error types
impl From<io::Error> for Md2Error {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<hex::FromHexError> for Md2Error {
    fn from(source: hex::FromHexError) -> Self {
        Self::InvalidDataFormat { message: format!("Invalid hex string: {}", source), backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl Md2Error {
    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use md2::Md2Error;
    ///
    /// let error = Md2Error::invalid_parameter("Path cannot be empty");
    /// assert!(error.to_string().contains("Path cannot be empty"));
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidDataFormat` error with the given message.
    pub fn invalid_data_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidDataFormat {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `SelfTestFailed` error for one known-answer vector.
    pub fn self_test_failed<S: Into<String>>(input: S, expected: &[u8], got: &[u8]) -> Self {
        Self::SelfTestFailed {
            input: input.into(),
            expected: hex::encode(expected),
            got: hex::encode(got),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `DigestMismatch` error with expected and actual digests.
    pub fn digest_mismatch(expected: &[u8], got: &[u8]) -> Self {
        Self::DigestMismatch {
            expected: hex::encode(expected),
            got: hex::encode(got),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is an `Io` variant.
    pub fn is_io(&self) -> bool {
        matches!(self, Md2Error::Io { .. })
    }
}

/// A specialized `Result` type for MD2 operations.
///
/// This is a convenience type alias that uses [`Md2Error`] as the error type.
pub type Result<T> = std::result::Result<T, Md2Error>;
