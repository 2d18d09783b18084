//! Output writers: the single-sheet XLSX workbook and the JSON report sidecar.
//! Both go through [`write_atomic`], so a failed write never leaves a partial
//! file at the destination.
use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

pub mod report;
pub mod xlsx;

/// Write `output` via a temporary file in the same directory, renamed into
/// place only after `write` succeeded and the data was synced to disk.
pub fn write_atomic<F>(output: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".csvxl-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::write(output, e))?;
    debug!("Writing to temporary file {:?}", tmp.path());

    write(tmp.as_file_mut())?;
    tmp.as_file().sync_all().map_err(|e| Error::write(output, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(0o644))
            .map_err(|e| Error::write(output, e))?;
    }

    tmp.persist(output)
        .map_err(|e| Error::write(output, e.error))?;
    Ok(())
}
