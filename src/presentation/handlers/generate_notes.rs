use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::services::NotesError;
use crate::domain::ErrorPayload;
use crate::presentation::state::AppState;

pub const INVALID_OUTPUT_MESSAGE: &str = "Invalid AI output";

#[derive(Debug, Deserialize)]
pub struct GenerateNotesRequest {
    #[serde(alias = "transcript")]
    pub text: String,
}

/// `POST /api/generate-notes`
///
/// | outcome                          | status | body                 |
/// |----------------------------------|--------|----------------------|
/// | parsed model output              | 200    | payload passthrough  |
/// | model output not parseable       | 200    | `{error, raw}`       |
/// | empty transcript / bad body      | 4xx    | `{error}`            |
/// | no provider succeeded            | 500    | `{error}`            |
#[tracing::instrument(skip(state, request))]
pub async fn generate_notes_handler(
    State(state): State<AppState>,
    request: Result<Json<GenerateNotesRequest>, JsonRejection>,
) -> Response {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected generate-notes body");
            return (
                rejection.status(),
                Json(ErrorPayload::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    match state.notes_service.generate_notes(&request.text).await {
        Ok(payload) => {
            tracing::info!("Notes generated");
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(NotesError::Transcript(e)) => {
            tracing::warn!(error = %e, "Empty transcript");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorPayload::new("Transcript text must not be empty")),
            )
                .into_response()
        }
        Err(NotesError::InvalidOutput { source, raw }) => {
            tracing::warn!(error = %source, "Returning invalid AI output to caller");
            (
                StatusCode::OK,
                Json(ErrorPayload::with_raw(INVALID_OUTPUT_MESSAGE, raw)),
            )
                .into_response()
        }
        Err(NotesError::Generation(e)) => {
            tracing::error!(error = %e, "Notes generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorPayload::new(format!("Notes generation failed: {}", e))),
            )
                .into_response()
        }
    }
}
