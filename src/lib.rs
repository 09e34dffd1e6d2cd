//! # MD2 - Message Digest Library and Filter
//!
//! This crate computes the 128-bit MD2 message digest (RFC 1319) of a byte
//! sequence and renders it as hexadecimal.
//!
//! ## Features
//!
//! - **Digest engine**: Padding, checksum and the 18-round compression pass over a 48-byte state
//! - **Self-test**: Known-answer checks against the empty-input digest and the RFC test suite
//! - **Hex presentation**: Canonical and grouped hex output, hex parsing for comparisons
//! - **Input gathering**: Read a whole file or standard input into memory before hashing
//!
//! MD2 is a legacy digest with known weaknesses. This crate reproduces it bit for
//! bit for interoperability; it must not be used where collision resistance matters.
//!
//! ## Quick Start
//!
//! ### Hashing a byte slice
//!
//! ```
//! use md2::md2_digest;
//! use md2::hex_dump::{dump, HexDumpMode};
//!
//! let digest = md2_digest(b"Raphael Pour");
//! assert_eq!(dump(&digest, HexDumpMode::Canonical), "293d248a25588c0528006de4a5ff9382");
//! ```
//!
//! ### Hashing a file
//!
//! ```no_run
//! use md2::io_utils::{read_all, InputSource};
//!
//! # fn main() -> md2::Result<()> {
//! let data = read_all(&InputSource::from_arg(Some("message.bin")))?;
//! println!("{}", md2::md2_hex_digest(&data));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Cryptography**: [`crypto`] for the digest engine, its constants and the self-test
//! - **Utilities**: [`utils`] for input gathering and hex presentation
//!
//! ## Error Handling
//!
//! The digest itself never fails. Fallible operations around it return a
//! [`Result<T>`] type, where errors are represented by [`Md2Error`]. The crate uses
//! the `snafu` library for ergonomic error handling with context and backtraces.

pub mod crypto;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use crypto::{Digest, md2_digest, md2_hex_digest, padding_length};
pub use utils::{hex_dump, io_utils};

// Re-export error types for convenience
pub use error::{Md2Error, Result, snafu};
