//! Error types for the generation pipeline.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while reading the schema or writing generated files.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The schema file does not exist.
    #[error("Scheme file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The schema file exists but could not be read.
    #[error("Failed to read scheme file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated file could not be written.
    #[error("Failed to write file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
