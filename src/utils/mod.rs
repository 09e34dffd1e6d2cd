// Utility functions and helpers
//
// This module provides input gathering and hex presentation helpers used around
// the digest engine.

pub mod hex_dump;
pub mod io_utils;

pub use hex_dump::{dump, parse_digest, HexDumpMode};
pub use io_utils::{bytes_from_file, bytes_from_reader, read_all, InputSource};
