//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Load-time failures (`NotFound`, `EmptyInput`, `Parse`), rename-spec syntax
//! (`Format`) and write-time failures (`Write`) are all terminal for a conversion.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("CSV file is empty: {}", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("Error reading CSV {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid rename pair `{pair}`: expected exactly one ':' (old:new)")]
    Format { pair: String },

    #[error("Error writing {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("Output file must have .xlsx extension, got: {}", .path.display())]
    InvalidOutputExtension { path: PathBuf },

    #[error("Invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn parse<E: std::fmt::Display>(path: &std::path::Path, e: E) -> Self {
        Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }

    pub fn write<E: std::fmt::Display>(path: &std::path::Path, e: E) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }
}
