//! Job lifecycle management.
//!
//! - [`state`]: pure state transitions over a single job record
//! - [`tracker`]: the controller that loads, patches, and rewrites the
//!   durable store around those transitions
//! - [`error`]: classified lifecycle errors

pub mod error;
pub mod state;
pub mod tracker;

pub use error::{JobError, JobResult};
pub use tracker::JobTracker;
