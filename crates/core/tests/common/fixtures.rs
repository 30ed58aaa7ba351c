//! Test fixtures for creating disk-backed trackers and sample data.

use rk_core::config::models::NotebookSource;
use rk_core::jobs::JobTracker;
use rk_core::store::{ArtifactStore, JobStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary tracker root.
///
/// Returns a TempDir that must be kept alive for the test duration.
pub fn create_tracker_root() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp tracker root")
}

/// Build a tracker over `<root>/jobs.json` and `<root>/outputs/`,
/// pointed at a fixed test notebook source.
pub fn tracker_at(root: &Path) -> JobTracker {
    JobTracker::new(
        JobStore::new(root.join("jobs.json")),
        ArtifactStore::new(root.join("outputs")),
        NotebookSource {
            owner: "acme".to_string(),
            repo: "notebooks".to_string(),
        },
    )
}

/// Write a small fake media file under the root and return its path.
pub fn sample_upload(root: &Path, name: &str) -> PathBuf {
    let path = root.join(name);
    std::fs::write(&path, b"fake media bytes").expect("Failed to write sample upload");
    path
}

/// Drop a pretend step output into the tracker's artifact directory, as
/// the external notebook would.
#[allow(dead_code)]
pub fn plant_artifact(root: &Path, name: &str) {
    let outputs = root.join("outputs");
    std::fs::create_dir_all(&outputs).expect("Failed to create outputs dir");
    std::fs::write(outputs.join(name), b"processed bytes").expect("Failed to plant artifact");
}
