use crate::application::services::{
    FallbackError, FallbackOrchestrator, SanitizeError, build_notes_prompt, extract_json,
};
use crate::domain::{ParsedPayload, Transcript, TranscriptError};
use crate::infrastructure::observability::sanitize_prompt;

pub struct NotesService {
    orchestrator: FallbackOrchestrator,
}

impl NotesService {
    pub fn new(orchestrator: FallbackOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// Validates `text`, asks the providers for study notes and parses the
    /// reply. Malformed replies are never retried against another provider.
    pub async fn generate_notes(&self, text: &str) -> Result<ParsedPayload, NotesError> {
        let transcript = Transcript::parse(text)?;
        tracing::debug!(
            transcript = %sanitize_prompt(transcript.as_str()),
            transcript_len = transcript.as_str().len(),
            "Generating notes"
        );

        let prompt = build_notes_prompt(&transcript);
        let generation = self.orchestrator.generate(&prompt).await?;

        match extract_json(&generation.raw_text) {
            Ok(payload) => {
                let missing = payload.missing_keys();
                if !missing.is_empty() {
                    tracing::warn!(
                        provider = %generation.provider,
                        missing = ?missing,
                        "Model output lacks expected keys"
                    );
                }
                Ok(payload)
            }
            Err(source) => {
                tracing::warn!(
                    provider = %generation.provider,
                    error = %source,
                    raw = %sanitize_prompt(&generation.raw_text),
                    "Model output could not be parsed"
                );
                Err(NotesError::InvalidOutput {
                    source,
                    raw: generation.raw_text,
                })
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotesError {
    #[error("invalid transcript: {0}")]
    Transcript(#[from] TranscriptError),
    #[error("generation failed: {0}")]
    Generation(#[from] FallbackError),
    #[error("invalid AI output: {source}")]
    InvalidOutput {
        #[source]
        source: SanitizeError,
        raw: String,
    },
}
