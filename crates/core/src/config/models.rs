//! Configuration models for the tracker.
//!
//! This module provides the `RelayConfig` structure holding everything the
//! tracker needs to know about its environment: where the notebook
//! templates live and where durable state is kept.

use serde::Deserialize;

/// Location of the notebook template collection the handoff links point at.
///
/// Templates are addressed as
/// `https://colab.research.google.com/github/{owner}/{repo}/blob/main/notebooks/<template>.ipynb`,
/// so `owner` and `repo` are the only two identifiers needed.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NotebookSource {
    /// Account that hosts the template repository.
    pub owner: String,

    /// Name of the template repository.
    pub repo: String,
}

impl Default for NotebookSource {
    fn default() -> Self {
        Self {
            owner: "example".to_string(),
            repo: "media-relay".to_string(),
        }
    }
}

/// Names of the tracker's durable storage locations, relative to its root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// File holding the job index.
    pub jobs_file: String,

    /// Directory holding uploaded inputs and step outputs.
    pub outputs_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            jobs_file: "jobs.json".to_string(),
            outputs_dir: "outputs".to_string(),
        }
    }
}

/// Unified tracker configuration loaded from `.relay-kit/config.toml`.
///
/// Every section is optional in the file; missing sections take their
/// defaults so a bare tracker root works with no configuration at all.
///
/// # Example
///
/// ```toml
/// [notebooks]
/// owner = "my-account"
/// repo = "my-notebooks"
///
/// [storage]
/// jobs_file = "jobs.json"
/// outputs_dir = "outputs"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct RelayConfig {
    /// Where handoff links send the operator.
    #[serde(default)]
    pub notebooks: NotebookSource,

    /// Where jobs and artifacts are persisted.
    #[serde(default)]
    pub storage: StorageConfig,
}
