use std::{
    fs,
    path::{Path, PathBuf},
};

use super::error::GenerateError;

/// Write `content` to `dir/file_name`, creating `dir` if needed.
///
/// Existing files are truncated and overwritten. Returns the written path.
pub fn write_output(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    fs::write(&path, content).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
