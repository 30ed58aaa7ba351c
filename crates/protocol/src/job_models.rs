//! Job state models.
//!
//! This module defines the structures for tracking a media-processing job
//! as it moves through its configured pipeline of manual steps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Represents the current lifecycle status of a job.
///
/// The status progresses through these states during normal operation:
/// Ready -> Waiting -> Ready -> ... -> Completed
///
/// Special states:
/// - Processing: reserved for surfaces that run a step themselves
/// - Error: reserved for surfaces that report a failed step
///
/// The built-in lifecycle operations never transition into the reserved
/// states; they exist so external reporters can record them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// The current step is configured and waiting to be handed off.
    Ready,

    /// A step is being executed somewhere right now.
    Processing,

    /// Handoff instructions for the current step have been issued;
    /// the operator has not yet reported completion.
    Waiting,

    /// Every step in the pipeline has been completed. Terminal.
    Completed,

    /// A step failed and the job needs attention.
    Error,
}

/// Names of the artifacts a job is tracking.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct JobFiles {
    /// Name of the originally uploaded artifact, as stored in the
    /// artifact directory. Never changes after creation.
    pub input: String,

    /// Name of the most recently produced artifact. Starts equal to
    /// `input` and is overwritten each time a step completes with a
    /// new output.
    pub current: String,
}

/// Processing parameters captured at job creation.
///
/// The lifecycle controller never interprets these; they are carried
/// through to the handoff payload for the external notebook to consume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct JobParameters {
    /// Free-form text for voice cloning / speech synthesis steps.
    #[serde(default)]
    pub voice_text: String,

    /// Emotion tag for lip sync steps.
    #[serde(default = "default_emotion")]
    pub emotion: String,

    /// Quality tag for enhancement steps.
    #[serde(default = "default_enhancement")]
    pub enhancement_type: String,
}

fn default_emotion() -> String {
    "neutral".to_string()
}

fn default_enhancement() -> String {
    "basic".to_string()
}

impl Default for JobParameters {
    fn default() -> Self {
        Self {
            voice_text: String::new(),
            emotion: default_emotion(),
            enhancement_type: default_enhancement(),
        }
    }
}

/// A single tracked media-processing job.
///
/// Jobs are created once, then mutated exclusively through the lifecycle
/// operations (handoff generation and step advancement). A job is terminal
/// once its status reaches [`JobStatus::Completed`].
#[derive(Serialize, Deserialize, Debug, Clone, TS)]
pub struct Job {
    /// Short unique identifier assigned at creation.
    pub id: String,

    /// Creation timestamp, formatted `%Y%m%d_%H%M%S`.
    ///
    /// Also embedded in the stored input artifact's name, so the pair
    /// (id, created) uniquely names the upload on disk.
    pub created: String,

    /// Current lifecycle status.
    pub status: JobStatus,

    /// Index of the next step awaiting execution.
    ///
    /// Always in `0..=pipeline.len()`; equal to `pipeline.len()` exactly
    /// when the job is completed.
    pub current_step: usize,

    /// Ordered step names, fixed at creation. Insertion order is
    /// execution order. Step names are unique within one pipeline.
    pub pipeline: Vec<String>,

    /// Input and current artifact names.
    pub files: JobFiles,

    /// Parameters passed through to each step's handoff payload.
    pub parameters: JobParameters,

    /// Artifact name each completed step produced, keyed by step name.
    pub step_outputs: BTreeMap<String, String>,

    /// Append-only, timestamped human-readable event log.
    pub logs: Vec<String>,
}

impl Job {
    /// Whether every step in the pipeline has been completed.
    pub fn is_complete(&self) -> bool {
        self.current_step >= self.pipeline.len()
    }

    /// The name of the next step awaiting execution, if any.
    pub fn current_step_name(&self) -> Option<&str> {
        self.pipeline.get(self.current_step).map(String::as_str)
    }
}

/// One job's line in the all-jobs status report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct JobReport {
    /// Job identifier.
    pub id: String,

    /// Current lifecycle status.
    pub status: JobStatus,

    /// Number of completed steps.
    pub steps_done: usize,

    /// Total number of steps in the pipeline.
    pub steps_total: usize,

    /// Creation timestamp.
    pub created: String,
}

/// Outcome of reporting a step complete.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum StepAdvance {
    /// The job was already at the end of its pipeline; nothing changed.
    AlreadyComplete,

    /// A step was recorded and at least one more remains.
    NextStep {
        /// Name of the step now awaiting execution.
        step_name: String,
    },

    /// The final step was recorded and the job is now complete.
    Completed {
        /// Name of the final output artifact.
        final_output: String,
    },
}
