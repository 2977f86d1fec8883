use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;

/// Write `bytes` to `dir/file_name`, creating `dir` first.
pub fn write_bytes(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(path)
}

/// Delete a generated file. Returns `false` when there was nothing to delete.
pub fn remove_output(path: &Path) -> Result<bool, ExportError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "generated file removed");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
