//! Durable storage for jobs and artifacts.
//!
//! Two stores, both rooted under the tracker's working directory:
//!
//! - [`JobStore`]: the job index, one JSON file mapping id to record,
//!   loaded and rewritten in full on every mutation
//! - [`ArtifactStore`]: a flat directory of uploaded inputs and step
//!   outputs, addressed by generated file name only

pub mod artifacts;
pub mod error;
pub mod index;

pub use artifacts::ArtifactStore;
pub use error::{StoreError, StoreResult};
pub use index::JobStore;
