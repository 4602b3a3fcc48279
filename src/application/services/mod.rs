mod fallback_orchestrator;
mod notes_service;
mod prompt_builder;
mod provider_candidates;
mod response_sanitizer;

pub use fallback_orchestrator::{FallbackError, FallbackOrchestrator};
pub use notes_service::{NotesError, NotesService};
pub use prompt_builder::build_notes_prompt;
pub use provider_candidates::ProviderCandidates;
pub use response_sanitizer::{SanitizeError, extract_json, find_json_object, strip_code_fences};
