//!
//! The benchmark report input error.
//!

use std::path::PathBuf;

///
/// The benchmark report input error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the input file.
    #[error("Reading input file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Input file {path:?} is empty")]
    EmptyFile {
        /// The path to the input file.
        path: PathBuf,
    },
}
