//! The durable job index.
//!
//! All job records live in a single JSON file mapping job id to record.
//! The file is read and rewritten in full on every mutation; no record is
//! ever patched in place. This keeps the persistence model trivial at the
//! cost of a single-writer assumption, which the tracker's synchronous,
//! operator-driven usage satisfies.

use crate::store::error::{StoreError, StoreResult};
use rk_protocol::job_models::Job;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Durable mapping from job id to job record, backed by one JSON file.
pub struct JobStore {
    path: PathBuf,
}

impl JobStore {
    /// Create a store over the given index file.
    ///
    /// The file need not exist yet; it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying index file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every job record.
    ///
    /// A missing, unreadable, or structurally corrupt index loads as an
    /// empty map rather than an error. This trades silent loss of a
    /// damaged index for availability, which suits an interactive tracker;
    /// callers that need to distinguish "no jobs" from "index gone" must
    /// inspect the file themselves.
    pub fn load(&self) -> BTreeMap<String, Job> {
        let Ok(content) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Rewrite the whole index with the given records.
    ///
    /// The new content is written to a sibling temp file and renamed over
    /// the index, so a crash mid-write leaves the previous index intact.
    pub fn save(&self, jobs: &BTreeMap<String, Job>) -> StoreResult<()> {
        let content =
            serde_json::to_string_pretty(jobs).map_err(|source| StoreError::Encode { source })?;

        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, content).map_err(|source| StoreError::IndexWrite {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::IndexWrite {
            path: self.path.clone(),
            source,
        })?;

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
