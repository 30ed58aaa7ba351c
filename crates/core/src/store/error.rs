//! Error types for durable storage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting jobs or artifacts.
///
/// Read-side failures of the job index are deliberately absent: a missing
/// or unreadable index loads as an empty map instead (see
/// [`JobStore::load`](crate::store::JobStore::load)).
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to encode the job index as JSON.
    #[error("Failed to encode job index: {source}")]
    Encode { source: serde_json::Error },

    /// Failed to write or replace the job index file.
    #[error("Failed to write job index at {path}: {source}")]
    IndexWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to copy an uploaded artifact into the artifact directory.
    #[error("Failed to store artifact at {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Type alias for Result with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
