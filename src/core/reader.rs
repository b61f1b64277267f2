use std::{fs, io, path::Path};

use super::error::GenerateError;

/// Read the whole schema file as UTF-8 text.
///
/// A missing file is reported as [`GenerateError::NotFound`]; every other
/// failure keeps the underlying I/O error.
pub fn read_schema(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => GenerateError::NotFound {
            path: path.to_path_buf(),
        },
        _ => GenerateError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
