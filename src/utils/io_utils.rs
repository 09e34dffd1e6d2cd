//! I/O utility functions for gathering the message to digest.
//!
//! This module provides helper functions for:
//! - Selecting the input source (a file or standard input)
//! - Reading a whole stream into one contiguous buffer
//!
//! The digest needs the total message length before it can pad, so every source
//! is read to the end before hashing starts.
//!
//! # Examples
//!
//! ```no_run
//! use md2::io_utils::{read_all, InputSource};
//!
//! let source = InputSource::from_arg(Some("message.bin"));
//! let data = read_all(&source).unwrap();
//! println!("{} bytes", data.len());
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::{Md2Error, Result};

/// Path argument that selects standard input.
pub const STDIN_ARG: &str = "-";

/// Where the message bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Standard input, read until EOF (default)
    #[default]
    Stdin,
    /// A file, read in binary mode
    File(PathBuf),
}

impl InputSource {
    /// Builds an input source from an optional command-line argument.
    ///
    /// `None` and `"-"` select standard input; anything else is a file path.
    pub fn from_arg<S: AsRef<str>>(arg: Option<S>) -> Self {
        match arg {
            Some(path) if path.as_ref() != STDIN_ARG => InputSource::File(PathBuf::from(path.as_ref())),
            _ => InputSource::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads everything from `reader` into a new buffer.
pub fn bytes_from_reader<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Reads all bytes from a file path.
///
/// # Errors
///
/// Returns an error if the path is empty, or the file cannot be opened or read.
pub fn bytes_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Md2Error::invalid_parameter("Input path cannot be empty"));
    }
    let file = File::open(path).map_err(|e| {
        debug!("Failed to open {}: {}", path.display(), e);
        Md2Error::from(e)
    })?;
    let mut reader = BufReader::new(file);
    bytes_from_reader(&mut reader)
}

/// Reads the whole message from the given source.
pub fn read_all(source: &InputSource) -> Result<Vec<u8>> {
    let data = match source {
        InputSource::Stdin => {
            let stdin = io::stdin();
            let mut handle = stdin.lock();
            bytes_from_reader(&mut handle)?
        }
        InputSource::File(path) => bytes_from_file(path)?,
    };
    debug!("Read {} bytes from {}", data.len(), source);
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg(None::<&str>), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some("data.bin")),
            InputSource::File(PathBuf::from("data.bin"))
        );
        assert_eq!(InputSource::Stdin.to_string(), "<stdin>");
    }

    #[test]
    fn test_bytes_from_reader() {
        let payload: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let mut cursor = Cursor::new(payload.clone());
        assert_eq!(bytes_from_reader(&mut cursor).unwrap(), payload);

        let mut empty = Cursor::new(Vec::<u8>::new());
        assert!(bytes_from_reader(&mut empty).unwrap().is_empty());
    }

    #[test]
    fn test_bytes_from_file() {
        let path = std::env::temp_dir().join(format!("md2-io-utils-{}.bin", std::process::id()));
        {
            let mut file = File::create(&path).unwrap();
            file.write_all(b"Raphael Pour").unwrap();
        }
        let source = InputSource::File(path.clone());
        assert_eq!(read_all(&source).unwrap(), b"Raphael Pour");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = bytes_from_file("/nonexistent/md2/input.bin").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_empty_path() {
        let err = bytes_from_file("").unwrap_err();
        assert!(!err.is_io());
    }
}
