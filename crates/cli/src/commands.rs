//! Command handlers
//!
//! Routes each subcommand to the matching lifecycle operation and renders
//! the result for the operator.

use clap::Subcommand;
use color_eyre::Result;
use colored::Colorize;
use rk_core::handoff::render_instructions;
use rk_core::jobs::JobTracker;
use rk_protocol::handoff_models::Handoff;
use rk_protocol::job_models::{JobParameters, JobReport, StepAdvance};
use std::path::{Path, PathBuf};

/// Tracker subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new job from an uploaded media file
    Create {
        /// Media file to process
        #[arg(long)]
        file: PathBuf,

        /// Pipeline step, in execution order (repeat for multiple steps)
        #[arg(long = "step", required = true)]
        steps: Vec<String>,

        /// Text for voice cloning / TTS steps
        #[arg(long, default_value = "")]
        voice_text: String,

        /// Emotion tag for lip sync steps
        #[arg(long, default_value = "neutral")]
        emotion: String,

        /// Enhancement quality tag
        #[arg(long, default_value = "basic")]
        enhancement: String,
    },
    /// Show the status of every job
    Status {
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate the notebook handoff for a job's current step
    Handoff {
        /// Job ID
        job_id: String,
    },
    /// Report the current step complete and advance the job
    Complete {
        /// Job ID
        job_id: String,

        /// Name of the artifact the step produced, if any
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the path of a completed job's final artifact
    Download {
        /// Job ID
        job_id: String,
    },
    /// Show a job's log history
    Logs {
        /// Job ID
        job_id: String,
    },
}

/// Handle a parsed subcommand against the tracker.
pub fn handle_command(command: Commands, tracker: &JobTracker) -> Result<()> {
    match command {
        Commands::Create {
            file,
            steps,
            voice_text,
            emotion,
            enhancement,
        } => create_job(tracker, &file, steps, voice_text, emotion, enhancement),
        Commands::Status { json } => show_status(tracker, json),
        Commands::Handoff { job_id } => generate_handoff(tracker, &job_id),
        Commands::Complete { job_id, output } => complete_step(tracker, &job_id, output.as_deref()),
        Commands::Download { job_id } => download_result(tracker, &job_id),
        Commands::Logs { job_id } => show_logs(tracker, &job_id),
    }
}

fn create_job(
    tracker: &JobTracker,
    file: &Path,
    steps: Vec<String>,
    voice_text: String,
    emotion: String,
    enhancement: String,
) -> Result<()> {
    let parameters = JobParameters {
        voice_text,
        emotion,
        enhancement_type: enhancement,
    };
    let pipeline = steps.clone();
    let job_id = tracker.create_job(Some(file), pipeline, parameters)?;

    println!("{}", format!("Job {job_id} created successfully!").green().bold());
    if let Some(job) = tracker.get_job(&job_id) {
        println!("File: {}", job.files.input);
    }
    println!("Pipeline: {}", steps.join(" -> "));

    Ok(())
}

fn show_status(tracker: &JobTracker, json: bool) -> Result<()> {
    let reports = tracker.job_statuses();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("{}", "No jobs found.".yellow());
    } else {
        for report in &reports {
            print_job_report(report);
        }
    }

    Ok(())
}

fn print_job_report(report: &JobReport) {
    println!("{}", format!("Job {}", report.id).bold());
    println!("   Status: {:?}", report.status);
    println!(
        "   Progress: {}/{} steps",
        report.steps_done, report.steps_total
    );
    println!("   Created: {}", report.created);
    println!();
}

fn generate_handoff(tracker: &JobTracker, job_id: &str) -> Result<()> {
    match tracker.generate_handoff(job_id)? {
        Handoff::AlreadyComplete => {
            println!("{}", "All steps completed for this job!".green());
        }
        Handoff::Step(step) => {
            print!("{}", render_instructions(&step));
        }
    }

    Ok(())
}

fn complete_step(tracker: &JobTracker, job_id: &str, output: Option<&str>) -> Result<()> {
    match tracker.advance_step(job_id, output)? {
        StepAdvance::AlreadyComplete => {
            println!("{}", "Job already completed!".yellow());
        }
        StepAdvance::NextStep { step_name } => {
            println!("{}", "Step completed!".green());
            println!("Next: {step_name}");
            println!("Run `relay handoff {job_id}` to continue.");
        }
        StepAdvance::Completed { final_output } => {
            println!("{}", format!("Job {job_id} completed successfully!").green().bold());
            println!("Final output: {final_output}");
        }
    }

    Ok(())
}

fn download_result(tracker: &JobTracker, job_id: &str) -> Result<()> {
    match tracker.download_result(job_id) {
        Some(path) => println!("{}", path.display()),
        None => println!(
            "{}",
            "No result available: the job is unknown, unfinished, or its artifact is missing."
                .yellow()
        ),
    }

    Ok(())
}

fn show_logs(tracker: &JobTracker, job_id: &str) -> Result<()> {
    match tracker.get_job(job_id) {
        Some(job) => {
            for entry in &job.logs {
                println!("{entry}");
            }
        }
        None => println!("{}", format!("Job {job_id} not found").red()),
    }

    Ok(())
}
