use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file does not exist: {}", .path.display())]
    InputMissing { path: PathBuf },

    #[error(transparent)]
    Convert(#[from] csvxl::Error),
}
