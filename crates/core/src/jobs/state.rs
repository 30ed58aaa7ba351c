//! Job state machine implementation.
//!
//! This module provides functions for managing the lifecycle of a single
//! [`Job`] record: creation, log appends, the waiting transition, and step
//! advancement. The functions mutate a record in memory only; persisting
//! the result is the caller's concern (see
//! [`JobTracker`](crate::jobs::tracker::JobTracker)).

use chrono::Local;
use rk_protocol::job_models::{Job, JobFiles, JobParameters, JobStatus, StepAdvance};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Generate a fresh short job id.
///
/// Eight hex characters cut from a v4 UUID: short enough to type into a
/// form, random enough that collisions are negligible at this tool's
/// scale.
pub fn new_job_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

/// Current local time formatted as a creation timestamp (`%Y%m%d_%H%M%S`).
pub fn creation_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Create a new Job with Ready status at step zero.
///
/// # Arguments
///
/// * `id` - Fresh job id from [`new_job_id`]
/// * `created` - Creation timestamp from [`creation_timestamp`]
/// * `pipeline` - Ordered step names to execute
/// * `input_file` - Storage name of the uploaded artifact
/// * `parameters` - Processing parameters, fixed for the job's lifetime
pub fn create_job(
    id: String,
    created: String,
    pipeline: Vec<String>,
    input_file: String,
    parameters: JobParameters,
) -> Job {
    let mut job = Job {
        id,
        created,
        status: JobStatus::Ready,
        current_step: 0,
        pipeline,
        files: JobFiles {
            input: input_file.clone(),
            current: input_file,
        },
        parameters,
        step_outputs: BTreeMap::new(),
        logs: Vec::new(),
    };
    log_to_job(&mut job, "Job created");
    job
}

/// Append a timestamped entry to the job's log.
///
/// Entries are never truncated or reordered; the log is the job's full
/// audit trail.
pub fn log_to_job(job: &mut Job, message: &str) {
    job.logs
        .push(format!("{} - {message}", Local::now().format("%H:%M:%S")));
}

/// Transition the job to Waiting after its handoff has been issued.
///
/// Called when the operator has been given the notebook link for the
/// current step. Only an explicit completion report clears this state;
/// there is no polling and no timeout. The step index is untouched.
pub fn mark_waiting(job: &mut Job, step_name: &str) {
    job.status = JobStatus::Waiting;
    log_to_job(job, &format!("Colab link generated for {step_name}"));
}

/// Record completion of the current step and advance the job.
///
/// At the terminal state this is a pure no-op returning
/// [`StepAdvance::AlreadyComplete`]: no log entry, no mutation, so
/// repeated completion reports are harmless.
///
/// Otherwise the step's output name (or a deterministic placeholder,
/// `{id}_step_{index}_output`, when the operator supplied none) is
/// recorded, `current_step` moves forward by one, and the status becomes
/// either Ready for the next step or Completed at the end of the
/// pipeline. `files.current` is only overwritten when a real output name
/// was supplied.
pub fn advance_job(job: &mut Job, output: Option<&str>) -> StepAdvance {
    if job.is_complete() {
        return StepAdvance::AlreadyComplete;
    }

    let output = output.filter(|name| !name.is_empty());
    let step_name = job.pipeline[job.current_step].clone();
    let output_name = output
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}_step_{}_output", job.id, job.current_step));

    job.step_outputs.insert(step_name.clone(), output_name);
    job.current_step += 1;
    log_to_job(job, &format!("Completed {step_name}"));

    if let Some(name) = output {
        job.files.current = name.to_string();
    }

    if job.is_complete() {
        job.status = JobStatus::Completed;
        log_to_job(job, "All steps completed!");
        StepAdvance::Completed {
            final_output: job.files.current.clone(),
        }
    } else {
        job.status = JobStatus::Ready;
        StepAdvance::NextStep {
            step_name: job.pipeline[job.current_step].clone(),
        }
    }
}
