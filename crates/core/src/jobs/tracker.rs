//! The job lifecycle controller.
//!
//! `JobTracker` ties the job index, the artifact directory, and the
//! handoff builder together behind the five lifecycle operations. Every
//! mutating operation follows the same shape: load the full index, patch
//! exactly one record, rewrite the index. No `Job` reference survives
//! across a reload, so in-memory and durable state cannot diverge.
//!
//! The tracker is synchronous and single-writer by design: operations are
//! driven one at a time by an interactive operator, and a step "runs" by
//! sitting in the Waiting state until that operator reports it done.

use crate::config::models::{NotebookSource, RelayConfig};
use crate::handoff::build_step_handoff;
use crate::jobs::error::{JobError, JobResult};
use crate::jobs::state::{advance_job, create_job, creation_timestamp, mark_waiting, new_job_id};
use crate::store::{ArtifactStore, JobStore};
use rk_protocol::handoff_models::Handoff;
use rk_protocol::job_models::{Job, JobParameters, JobReport, JobStatus, StepAdvance};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Controller for creating jobs and advancing them through their pipelines.
pub struct JobTracker {
    store: JobStore,
    artifacts: ArtifactStore,
    notebooks: NotebookSource,
}

impl JobTracker {
    /// Create a tracker over explicit stores and notebook source.
    pub fn new(store: JobStore, artifacts: ArtifactStore, notebooks: NotebookSource) -> Self {
        Self {
            store,
            artifacts,
            notebooks,
        }
    }

    /// Create a tracker rooted at a directory, using the given configuration
    /// for storage names and the notebook source.
    pub fn open(root: &Path, config: &RelayConfig) -> Self {
        Self::new(
            JobStore::new(root.join(&config.storage.jobs_file)),
            ArtifactStore::new(root.join(&config.storage.outputs_dir)),
            config.notebooks.clone(),
        )
    }

    /// Create a new job from an uploaded file.
    ///
    /// Persists the upload into the artifact store under a name derived
    /// from the fresh id, the creation timestamp, and the upload's
    /// extension, then records the job at step zero with status Ready.
    ///
    /// # Arguments
    ///
    /// * `upload` - Path of the uploaded file; `None` means the operator
    ///   submitted the form without one
    /// * `pipeline` - Ordered step names to execute
    /// * `parameters` - Processing parameters, fixed for the job's lifetime
    ///
    /// # Returns
    ///
    /// The new job's id.
    ///
    /// # Errors
    ///
    /// - `MissingInput` if no upload was supplied
    /// - `EmptyPipeline` if no steps were selected
    /// - `DuplicateStep` if the pipeline repeats a step name
    /// - `Storage` if the artifact copy or index rewrite fails
    pub fn create_job(
        &self,
        upload: Option<&Path>,
        pipeline: Vec<String>,
        parameters: JobParameters,
    ) -> JobResult<String> {
        let upload = upload.ok_or(JobError::MissingInput)?;
        if pipeline.is_empty() {
            return Err(JobError::EmptyPipeline);
        }

        // Duplicate step names would make step_outputs ambiguous
        let mut seen = HashSet::new();
        for step in &pipeline {
            if !seen.insert(step.as_str()) {
                return Err(JobError::DuplicateStep(step.clone()));
            }
        }

        let id = new_job_id();
        let created = creation_timestamp();
        let input_file = self.artifacts.save_upload(upload, &id, &created)?;

        let mut jobs = self.store.load();
        jobs.insert(
            id.clone(),
            create_job(id.clone(), created, pipeline, input_file, parameters),
        );
        self.store.save(&jobs)?;

        Ok(id)
    }

    /// Report the status of every job, ordered by creation time then id.
    ///
    /// Pure read; mutates nothing.
    pub fn job_statuses(&self) -> Vec<JobReport> {
        let mut reports: Vec<JobReport> = self
            .store
            .load()
            .into_values()
            .map(|job| JobReport {
                id: job.id,
                status: job.status,
                steps_done: job.current_step,
                steps_total: job.pipeline.len(),
                created: job.created,
            })
            .collect();
        reports.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        reports
    }

    /// Generate handoff instructions for a job's current step.
    ///
    /// Resolves the step's notebook template (unknown step names fall back
    /// to the general notebook, never an error), builds the link and
    /// payload, and transitions the job to Waiting with a log entry. The
    /// step index itself is never touched here.
    ///
    /// At the terminal state this returns [`Handoff::AlreadyComplete`]
    /// without mutating anything.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the job id is unknown
    /// - `Storage` if the index rewrite fails
    pub fn generate_handoff(&self, job_id: &str) -> JobResult<Handoff> {
        let mut jobs = self.store.load();
        let job = jobs
            .get_mut(job_id)
            .ok_or_else(|| JobError::NotFound(job_id.to_string()))?;

        let Some(handoff) = build_step_handoff(&self.notebooks, job) else {
            return Ok(Handoff::AlreadyComplete);
        };

        mark_waiting(job, &handoff.step_name);
        self.store.save(&jobs)?;

        Ok(Handoff::Step(handoff))
    }

    /// Report the current step complete and advance the job.
    ///
    /// See [`advance_job`](crate::jobs::state::advance_job) for the
    /// per-record semantics. At the terminal state this is idempotent:
    /// the index is not rewritten and no log entry is appended.
    ///
    /// # Arguments
    ///
    /// * `job_id` - The job to advance
    /// * `output` - Name of the artifact the step produced, if the
    ///   operator supplied one
    ///
    /// # Errors
    ///
    /// - `NotFound` if the job id is unknown
    /// - `Storage` if the index rewrite fails
    pub fn advance_step(&self, job_id: &str, output: Option<&str>) -> JobResult<StepAdvance> {
        let mut jobs = self.store.load();
        let job = jobs
            .get_mut(job_id)
            .ok_or_else(|| JobError::NotFound(job_id.to_string()))?;

        let advance = advance_job(job, output);
        if advance != StepAdvance::AlreadyComplete {
            self.store.save(&jobs)?;
        }

        Ok(advance)
    }

    /// Path of a completed job's final artifact, if it is ready.
    ///
    /// Returns `None` unless the job exists, has completed every step,
    /// and its current artifact is present in the artifact store. Pure
    /// read; mutates nothing.
    pub fn download_result(&self, job_id: &str) -> Option<PathBuf> {
        let jobs = self.store.load();
        let job = jobs.get(job_id)?;

        if job.status != JobStatus::Completed {
            return None;
        }
        if !self.artifacts.contains(&job.files.current) {
            return None;
        }
        self.artifacts.resolve(&job.files.current)
    }

    /// Fetch a single job record, e.g. for detail views and logs.
    ///
    /// Pure read; mutates nothing.
    pub fn get_job(&self, job_id: &str) -> Option<Job> {
        self.store.load().remove(job_id)
    }

    /// The artifact store this tracker writes into.
    pub fn artifacts(&self) -> &ArtifactStore {
        &self.artifacts
    }
}
