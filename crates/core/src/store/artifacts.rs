//! The artifact directory.
//!
//! Uploaded inputs and step outputs live in a single flat directory and
//! are only ever addressed by their generated file name. Nothing in the
//! tracker accepts an arbitrary path into this store.

use crate::store::error::{StoreError, StoreResult};
use std::path::{Path, PathBuf};

/// Flat directory of job artifacts, addressed by bare file name.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store over the given directory.
    ///
    /// The directory need not exist yet; it is created on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the artifacts live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy an uploaded file in under its derived storage name.
    ///
    /// The name embeds the fresh job id and creation timestamp plus the
    /// upload's original extension, so it cannot collide with any other
    /// job's artifacts: `{job_id}_{created}_input{ext}`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ArtifactWrite` if the directory cannot be
    /// created or the upload cannot be copied (e.g. the source path does
    /// not exist).
    pub fn save_upload(&self, source: &Path, job_id: &str, created: &str) -> StoreResult<String> {
        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        let name = format!("{job_id}_{created}_input{extension}");
        let destination = self.dir.join(&name);

        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::ArtifactWrite {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::copy(source, &destination).map_err(|source| StoreError::ArtifactWrite {
            path: destination,
            source,
        })?;

        Ok(name)
    }

    /// Whether an artifact with this bare name exists in the store.
    ///
    /// Names containing a path separator never match; they are not bare
    /// artifact names.
    pub fn contains(&self, name: &str) -> bool {
        is_bare_name(name) && self.dir.join(name).is_file()
    }

    /// Full path of the artifact with this bare name.
    ///
    /// Returns `None` for names that are not bare (contain a separator).
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if is_bare_name(name) {
            Some(self.dir.join(name))
        } else {
            None
        }
    }
}

fn is_bare_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_upload_derives_a_collision_free_name() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let upload = temp_dir.path().join("clip.mp4");
        std::fs::write(&upload, b"fake video").expect("write upload");

        let store = ArtifactStore::new(temp_dir.path().join("outputs"));
        let name = store
            .save_upload(&upload, "a1b2c3d4", "20260830_120000")
            .expect("save upload");

        assert_eq!(name, "a1b2c3d4_20260830_120000_input.mp4");
        assert!(store.contains(&name));
        let path = store.resolve(&name).expect("resolve");
        assert_eq!(std::fs::read(path).expect("read"), b"fake video");
    }

    #[test]
    fn extensionless_uploads_store_without_extension() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let upload = temp_dir.path().join("clip");
        std::fs::write(&upload, b"raw").expect("write upload");

        let store = ArtifactStore::new(temp_dir.path().join("outputs"));
        let name = store
            .save_upload(&upload, "a1b2c3d4", "20260830_120000")
            .expect("save upload");

        assert_eq!(name, "a1b2c3d4_20260830_120000_input");
    }

    #[test]
    fn missing_source_is_an_artifact_write_error() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = ArtifactStore::new(temp_dir.path().join("outputs"));

        let result = store.save_upload(
            &temp_dir.path().join("nope.wav"),
            "a1b2c3d4",
            "20260830_120000",
        );

        assert!(matches!(result, Err(StoreError::ArtifactWrite { .. })));
    }

    #[test]
    fn path_like_names_never_resolve() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let store = ArtifactStore::new(temp_dir.path().join("outputs"));

        assert!(!store.contains("../jobs.json"));
        assert!(store.resolve("a/b.mp4").is_none());
        assert!(store.resolve("").is_none());
    }
}
