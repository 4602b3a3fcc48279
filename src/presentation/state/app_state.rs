use std::sync::Arc;

use crate::application::services::NotesService;
use crate::presentation::config::LlmProvider;

/// Built once in `main` and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub notes_service: Arc<NotesService>,
    pub provider: LlmProvider,
}
