//! Hexadecimal rendering and parsing of digests.
//!
//! The canonical form of a digest is its bytes as lowercase two-digit hex with no
//! separators. A grouped form for human reading puts a space after every 8 bytes
//! and a newline after every 16.
//!
//! # Examples
//!
//! ```
//! use md2::hex_dump::{dump, parse_digest, HexDumpMode};
//!
//! let bytes = [0xde, 0xad, 0xbe, 0xef];
//! assert_eq!(dump(&bytes, HexDumpMode::Canonical), "deadbeef");
//!
//! let digest = parse_digest("8350e5a3e24c153df2275c9f80692773").unwrap();
//! assert_eq!(digest[0], 0x83);
//! ```

use std::fmt::Write;

use crate::crypto::{Digest, DIGEST_LENGTH};
use crate::{Md2Error, Result};

/// Number of bytes after which the grouped mode inserts a space.
pub const GROUP_LENGTH: usize = 8;

/// Number of bytes after which the grouped mode inserts a newline.
pub const LINE_LENGTH: usize = 16;

/// Presentation modes for [`dump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexDumpMode {
    /// Contiguous lowercase hex, no separators (default)
    #[default]
    Canonical,
    /// Space every 8 bytes, newline every 16 bytes
    Grouped,
}

/// Renders `bytes` as lowercase hex in the requested mode.
pub fn dump(bytes: &[u8], mode: HexDumpMode) -> String {
    match mode {
        HexDumpMode::Canonical => hex::encode(bytes),
        HexDumpMode::Grouped => {
            let mut out = String::with_capacity(bytes.len() * 2 + bytes.len() / GROUP_LENGTH);
            for (i, byte) in bytes.iter().enumerate() {
                // Writing to a String cannot fail.
                let _ = write!(out, "{:02x}", byte);
                let count = i + 1;
                if count % LINE_LENGTH == 0 {
                    out.push('\n');
                } else if count % GROUP_LENGTH == 0 {
                    out.push(' ');
                }
            }
            out
        }
    }
}

/// Parses a hex digest, accepting either the canonical or the grouped form.
///
/// Whitespace is ignored and upper-case digits are accepted.
///
/// # Errors
///
/// Returns `InvalidDataFormat` if the text is not hex or does not decode to
/// exactly 16 bytes.
pub fn parse_digest(text: &str) -> Result<Digest> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(&compact)?;
    if bytes.len() != DIGEST_LENGTH {
        return Err(Md2Error::invalid_data_format(format!(
            "Digest must be {} bytes, got {}",
            DIGEST_LENGTH,
            bytes.len()
        )));
    }
    let mut digest = [0u8; DIGEST_LENGTH];
    digest.copy_from_slice(&bytes);
    Ok(digest)
}
