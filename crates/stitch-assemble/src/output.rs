//! Output writing.

use std::fs;
use std::path::Path;

use crate::error::AssembleError;

/// Write `contents` to `path`, creating any missing parent directories.
///
/// An existing file is truncated and overwritten.
pub fn write_output(path: &Path, contents: &str) -> Result<(), AssembleError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AssembleError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| AssembleError::Write {
        path: path.to_path_buf(),
        source,
    })
}
