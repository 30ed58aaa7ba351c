//! Error types for job lifecycle operations.

use crate::store::StoreError;
use thiserror::Error;

/// Errors that can occur during job lifecycle operations.
///
/// Every failure is synchronous and descriptive; surfaces render the
/// message to the operator rather than aborting.
#[derive(Error, Debug)]
pub enum JobError {
    /// No upload was supplied to job creation.
    #[error("Please upload a file first")]
    MissingInput,

    /// An empty pipeline was supplied to job creation. A job with no
    /// steps would be born both Ready and complete.
    #[error("Please select at least one pipeline step")]
    EmptyPipeline,

    /// A pipeline repeats a step name, which would make per-step output
    /// records ambiguous.
    #[error("Pipeline step '{0}' appears more than once")]
    DuplicateStep(String),

    /// The given job id is not in the store.
    #[error("Job {0} not found")]
    NotFound(String),

    /// Durable storage failed underneath the operation.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Type alias for Result with JobError.
pub type JobResult<T> = Result<T, JobError>;
