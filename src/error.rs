//! Error types for icon rendering and output

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for icon operations
pub type IconResult<T> = Result<T, IconError>;

/// Errors that can occur while encoding or writing icons
///
/// Each message already carries the underlying error, so no variant exposes
/// it again as a `source`.
#[derive(Error, Debug)]
pub enum IconError {
    /// The zlib compressor failed while building the IDAT payload
    #[error("PNG compression failed: {0}")]
    Compression(io::Error),

    /// The output directory could not be created
    #[error("can't create output directory {}: {error}", path.display())]
    CreateDir { path: PathBuf, error: io::Error },

    /// An output file could not be written
    #[error("can't write {}: {error}", path.display())]
    Write { path: PathBuf, error: io::Error },

    /// The icon manifest could not be serialized
    #[error("failed to serialize icon manifest: {0}")]
    Manifest(serde_json::Error),
}
