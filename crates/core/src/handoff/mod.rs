//! Handoff link construction.
//!
//! Turns a job's current step into everything the operator needs to run
//! it: the notebook template to open (resolved through the fixed step
//! mapping), a locator into the configured template collection, and the
//! flat parameter payload the notebook reads on startup.

use crate::config::models::NotebookSource;
use rk_protocol::handoff_models::{HandoffPayload, NotebookTemplate, StepHandoff};
use rk_protocol::job_models::Job;

/// Base locator of the hosted notebook environment.
pub const NOTEBOOK_BASE_URL: &str = "https://colab.research.google.com/github";

/// Compose the full notebook locator for a template and payload.
///
/// Shape: `{base}/{owner}/{repo}/blob/main/notebooks/{template}.ipynb?{query}`.
pub fn notebook_url(
    source: &NotebookSource,
    template: NotebookTemplate,
    payload: &HandoffPayload,
) -> String {
    format!(
        "{NOTEBOOK_BASE_URL}/{}/{}/blob/main/notebooks/{}?{}",
        source.owner,
        source.repo,
        template.file_name(),
        payload.query_string()
    )
}

/// Build the handoff for a job's current pending step.
///
/// Returns `None` when the job has no steps left; the caller turns that
/// into an "already complete" result without mutating anything.
pub fn build_step_handoff(source: &NotebookSource, job: &Job) -> Option<StepHandoff> {
    let step_name = job.current_step_name()?;
    let template = NotebookTemplate::for_step(step_name);
    let payload = HandoffPayload::new(&job.id, step_name, &job.files.current, &job.parameters);

    Some(StepHandoff {
        job_id: job.id.clone(),
        step_number: job.current_step + 1,
        step_name: step_name.to_string(),
        notebook: template,
        url: notebook_url(source, template, &payload),
        input_file: job.files.current.clone(),
    })
}

/// Render the operator-facing instruction block for a handoff.
///
/// Plain text; presentation surfaces may re-wrap or decorate it.
pub fn render_instructions(handoff: &StepHandoff) -> String {
    format!(
        "Ready for Step {}: {}\n\
         \n\
         Notebook: {}\n\
         \n\
         1. Open the notebook link above\n\
         2. Ensure GPU runtime is enabled (Runtime -> Change runtime type -> GPU)\n\
         3. Run all cells in order; the notebook processes your file\n\
         4. When it finishes, return here and report the step complete\n\
         \n\
         Current input file: {}\n",
        handoff.step_number, handoff.step_name, handoff.url, handoff.input_file
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::state::create_job;
    use rk_protocol::job_models::JobParameters;

    fn source() -> NotebookSource {
        NotebookSource {
            owner: "acme".to_string(),
            repo: "notebooks".to_string(),
        }
    }

    #[test]
    fn url_embeds_collection_template_and_payload() {
        let job = create_job(
            "a1b2c3d4".to_string(),
            "20260830_120000".to_string(),
            vec!["Audio Enhancement".to_string()],
            "a1b2c3d4_20260830_120000_input.wav".to_string(),
            JobParameters::default(),
        );

        let handoff = build_step_handoff(&source(), &job).expect("handoff");

        assert_eq!(handoff.notebook, NotebookTemplate::AudioEnhance);
        assert_eq!(
            handoff.url,
            "https://colab.research.google.com/github/acme/notebooks/blob/main/notebooks/\
             audio_enhance.ipynb?job_id=a1b2c3d4&step=audio_enhancement\
             &input_file=a1b2c3d4_20260830_120000_input.wav\
             &voice_text=&emotion=neutral&enhancement_type=basic"
        );
    }

    #[test]
    fn unknown_steps_hand_off_to_the_general_notebook() {
        let job = create_job(
            "a1b2c3d4".to_string(),
            "20260830_120000".to_string(),
            vec!["Colorize".to_string()],
            "a1b2c3d4_20260830_120000_input.mp4".to_string(),
            JobParameters::default(),
        );

        let handoff = build_step_handoff(&source(), &job).expect("handoff");

        assert_eq!(handoff.notebook, NotebookTemplate::GeneralProcess);
        assert!(handoff.url.contains("/general_process.ipynb?"));
    }

    #[test]
    fn completed_jobs_have_no_handoff() {
        let mut job = create_job(
            "a1b2c3d4".to_string(),
            "20260830_120000".to_string(),
            vec![],
            "a1b2c3d4_20260830_120000_input.mp4".to_string(),
            JobParameters::default(),
        );
        job.status = rk_protocol::job_models::JobStatus::Completed;

        assert!(build_step_handoff(&source(), &job).is_none());
    }

    #[test]
    fn instructions_name_the_step_link_and_input() {
        let job = create_job(
            "a1b2c3d4".to_string(),
            "20260830_120000".to_string(),
            vec!["Video Enhancement".to_string()],
            "in.mp4".to_string(),
            JobParameters::default(),
        );
        let handoff = build_step_handoff(&source(), &job).expect("handoff");

        let text = render_instructions(&handoff);

        assert!(text.contains("Ready for Step 1: Video Enhancement"));
        assert!(text.contains(&handoff.url));
        assert!(text.contains("Current input file: in.mp4"));
    }
}
