//! Handoff payload models.
//!
//! A "handoff" is the packet of information an operator needs to run the
//! current step of a job in the external notebook environment: which
//! notebook to open, and a flat query payload identifying the job, the
//! step, the input artifact, and the processing parameters.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::job_models::JobParameters;

/// The notebook template that performs a given pipeline step.
///
/// This is a fixed, extensible mapping from step name to notebook
/// resource. Unrecognized step names resolve to [`NotebookTemplate::GeneralProcess`]
/// rather than failing, so new step names can be introduced by surfaces
/// before a dedicated notebook exists for them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum NotebookTemplate {
    /// Clones a voice from sample audio and synthesizes speech.
    VoiceClone,

    /// Synchronizes lip movements with audio and applies expressions.
    LipSync,

    /// Splits large files for processing and merges the results.
    SplitMerge,

    /// Denoises and enhances audio.
    AudioEnhance,

    /// Upscales and enhances video.
    VideoEnhance,

    /// Fallback notebook for any step without a dedicated template.
    GeneralProcess,
}

impl NotebookTemplate {
    /// Resolve the template for a pipeline step name.
    pub fn for_step(step_name: &str) -> Self {
        match step_name {
            "Voice Cloning & TTS" => Self::VoiceClone,
            "Lip Sync & Emotions" => Self::LipSync,
            "Split & Merge" => Self::SplitMerge,
            "Audio Enhancement" => Self::AudioEnhance,
            "Video Enhancement" => Self::VideoEnhance,
            _ => Self::GeneralProcess,
        }
    }

    /// The template's resource name within the notebook collection.
    pub fn resource(&self) -> &'static str {
        match self {
            Self::VoiceClone => "voice_clone",
            Self::LipSync => "lip_sync",
            Self::SplitMerge => "split_merge",
            Self::AudioEnhance => "audio_enhance",
            Self::VideoEnhance => "video_enhance",
            Self::GeneralProcess => "general_process",
        }
    }

    /// The notebook file name, as it appears in the collection.
    pub fn file_name(&self) -> String {
        format!("{}.ipynb", self.resource())
    }
}

/// Flat key/value payload appended to the notebook locator.
///
/// The external notebook reads these values to locate the job's input
/// and configure the step. Field order here is wire order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct HandoffPayload {
    /// Identifier of the job this step belongs to.
    pub job_id: String,

    /// Normalized step identifier (lower-cased, spaces to underscores).
    pub step: String,

    /// Name of the artifact the step should consume.
    pub input_file: String,

    /// Free-form synthesis text.
    pub voice_text: String,

    /// Emotion tag.
    pub emotion: String,

    /// Enhancement quality tag.
    pub enhancement_type: String,
}

impl HandoffPayload {
    /// Build the payload for one step of a job.
    pub fn new(job_id: &str, step_name: &str, input_file: &str, parameters: &JobParameters) -> Self {
        Self {
            job_id: job_id.to_string(),
            step: normalize_step_name(step_name),
            input_file: input_file.to_string(),
            voice_text: parameters.voice_text.clone(),
            emotion: parameters.emotion.clone(),
            enhancement_type: parameters.enhancement_type.clone(),
        }
    }

    /// Render the payload as a `key=value&...` query string, in wire order.
    pub fn query_string(&self) -> String {
        [
            ("job_id", &self.job_id),
            ("step", &self.step),
            ("input_file", &self.input_file),
            ("voice_text", &self.voice_text),
            ("emotion", &self.emotion),
            ("enhancement_type", &self.enhancement_type),
        ]
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// Normalize a step name into its payload identifier.
pub fn normalize_step_name(step_name: &str) -> String {
    step_name.to_lowercase().replace(' ', "_")
}

/// Instructions for running one pending step externally.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct StepHandoff {
    /// Identifier of the job being advanced.
    pub job_id: String,

    /// 1-based step number, for display.
    pub step_number: usize,

    /// Name of the step to run.
    pub step_name: String,

    /// Resolved notebook template for the step.
    pub notebook: NotebookTemplate,

    /// Full locator of the notebook, payload included.
    pub url: String,

    /// Name of the artifact the step will consume.
    pub input_file: String,
}

/// Result of requesting a handoff for a job.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Handoff {
    /// The job has no steps left to run; nothing was mutated.
    AlreadyComplete,

    /// Instructions for the current pending step.
    Step(StepHandoff),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_steps_resolve_to_dedicated_templates() {
        assert_eq!(
            NotebookTemplate::for_step("Voice Cloning & TTS"),
            NotebookTemplate::VoiceClone
        );
        assert_eq!(
            NotebookTemplate::for_step("Lip Sync & Emotions"),
            NotebookTemplate::LipSync
        );
        assert_eq!(
            NotebookTemplate::for_step("Split & Merge"),
            NotebookTemplate::SplitMerge
        );
        assert_eq!(
            NotebookTemplate::for_step("Audio Enhancement"),
            NotebookTemplate::AudioEnhance
        );
        assert_eq!(
            NotebookTemplate::for_step("Video Enhancement"),
            NotebookTemplate::VideoEnhance
        );
    }

    #[test]
    fn unknown_steps_fall_back_to_general_process() {
        assert_eq!(
            NotebookTemplate::for_step("Colorize"),
            NotebookTemplate::GeneralProcess
        );
        assert_eq!(NotebookTemplate::for_step(""), NotebookTemplate::GeneralProcess);
    }

    #[test]
    fn step_names_normalize_for_the_payload() {
        assert_eq!(normalize_step_name("Voice Cloning & TTS"), "voice_cloning_&_tts");
        assert_eq!(normalize_step_name("Audio Enhancement"), "audio_enhancement");
    }

    #[test]
    fn query_string_preserves_wire_order() {
        let parameters = JobParameters {
            voice_text: "hello".to_string(),
            emotion: "happy".to_string(),
            enhancement_type: "cinematic".to_string(),
        };
        let payload = HandoffPayload::new("a1b2c3d4", "Audio Enhancement", "in.wav", &parameters);

        assert_eq!(
            payload.query_string(),
            "job_id=a1b2c3d4&step=audio_enhancement&input_file=in.wav\
             &voice_text=hello&emotion=happy&enhancement_type=cinematic"
        );
    }
}
