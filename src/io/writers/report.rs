use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::core::rename::AppliedRename;
use crate::error::{Error, Result};
use crate::io::writers::write_atomic;

/// Summary of one conversion, returned by the API and optionally saved as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    /// Final column names, in output order
    pub columns: Vec<String>,
    /// Columns written as date-times (final names)
    pub date_columns: Vec<String>,
    pub renamed: Vec<AppliedRename>,
    /// Cleaned names shared by more than one column
    pub collisions: Vec<String>,
    pub converted_at: String,
}

/// Write `report` as pretty-printed JSON.
pub fn write_report(report: &ConversionReport, path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(report).map_err(|e| Error::write(path, e))?;
    write_atomic(path, |file| {
        file.write_all(&json).map_err(|e| Error::write(path, e))?;
        file.write_all(b"\n").map_err(|e| Error::write(path, e))
    })?;
    info!("Wrote conversion report: {:?}", path);
    Ok(())
}
