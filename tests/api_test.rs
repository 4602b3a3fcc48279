mod common;

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use classpulse::infrastructure::observability::REQUEST_ID_HEADER;
use classpulse::presentation::{AppState, LlmProvider, create_router};

use common::{Outcome, ScriptedLlmClient, VALID_PAYLOAD, notes_service};

const INDEX_HTML: &str = "<!DOCTYPE html><html><body>ClassPulse</body></html>";

fn create_test_app(client: Arc<ScriptedLlmClient>, frontend_dir: &Path) -> axum::Router {
    let state = AppState {
        notes_service: Arc::new(notes_service(client, &["primary", "secondary"])),
        provider: LlmProvider::Gemini,
    };
    create_router(state, frontend_dir)
}

fn frontend_bundle() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets/app.js"), "console.log('ok');").unwrap();
    dir
}

fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-notes")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_ok() {
    let frontend = frontend_bundle();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), frontend.path());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["provider"], "gemini");
}

#[tokio::test]
async fn given_valid_transcript_when_generating_notes_then_returns_all_payload_keys() {
    let frontend = frontend_bundle();
    let client = Arc::new(
        ScriptedLlmClient::new()
            .with("primary", Outcome::Reply(format!("```json\n{VALID_PAYLOAD}\n```"))),
    );
    let app = create_test_app(client, frontend.path());

    let response = app
        .oneshot(generate_request(r#"{"text": "Plants convert light into glucose."}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    for key in ["notes", "teacher_score", "flashcards", "quiz"] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn given_transcript_field_alias_when_generating_notes_then_is_accepted() {
    let frontend = frontend_bundle();
    let client = Arc::new(
        ScriptedLlmClient::new().with("primary", Outcome::Reply(VALID_PAYLOAD.to_string())),
    );
    let app = create_test_app(client.clone(), frontend.path());

    let response = app
        .oneshot(generate_request(r#"{"transcript": "Gravity pulls."}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(client.calls(), vec!["primary"]);
}

#[tokio::test]
async fn given_blank_transcript_when_generating_notes_then_returns_bad_request_without_provider_call()
{
    let frontend = frontend_bundle();
    let client = Arc::new(
        ScriptedLlmClient::new().with("primary", Outcome::Reply(VALID_PAYLOAD.to_string())),
    );

    for body in [r#"{"text": ""}"#, r#"{"text": "   "}"#] {
        let app = create_test_app(client.clone(), frontend.path());
        let response = app.oneshot(generate_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].is_string());
    }
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn given_missing_body_when_generating_notes_then_returns_json_bad_request() {
    let frontend = frontend_bundle();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), frontend.path());

    let response = app.oneshot(generate_request("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn given_prose_reply_when_generating_notes_then_returns_soft_error_with_raw() {
    let frontend = frontend_bundle();
    let raw = "Sure! Here's your answer: blah blah";
    let client =
        Arc::new(ScriptedLlmClient::new().with("primary", Outcome::Reply(raw.to_string())));
    let app = create_test_app(client, frontend.path());

    let response = app
        .oneshot(generate_request(r#"{"text": "lecture"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid AI output");
    assert_eq!(json["raw"], raw);
}

#[tokio::test]
async fn given_every_provider_fails_when_generating_notes_then_returns_server_error_json() {
    let frontend = frontend_bundle();
    let client = Arc::new(
        ScriptedLlmClient::new()
            .with("primary", Outcome::Transport("timed out".to_string()))
            .with("secondary", Outcome::Provider("quota exceeded".to_string())),
    );
    let app = create_test_app(client.clone(), frontend.path());

    let response = app
        .oneshot(generate_request(r#"{"text": "lecture"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("quota exceeded"));
    assert!(json.get("raw").is_none());
    assert_eq!(client.calls(), vec!["primary", "secondary"]);
}

#[tokio::test]
async fn given_request_id_header_when_calling_api_then_echoes_it() {
    let frontend = frontend_bundle();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), frontend.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
}

#[tokio::test]
async fn given_no_request_id_when_calling_api_then_generates_one() {
    let frontend = frontend_bundle();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), frontend.path());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let request_id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid_like(request_id));
}

fn uuid_like(value: &str) -> bool {
    value.len() == 36 && value.chars().filter(|c| *c == '-').count() == 4
}

#[tokio::test]
async fn given_frontend_bundle_when_requesting_root_then_serves_index() {
    let frontend = frontend_bundle();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), frontend.path());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, INDEX_HTML);
}

#[tokio::test]
async fn given_frontend_bundle_when_requesting_asset_then_serves_file() {
    let frontend = frontend_bundle();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), frontend.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/assets/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "console.log('ok');");
}

#[tokio::test]
async fn given_frontend_bundle_when_requesting_unknown_route_then_falls_back_to_index() {
    let frontend = frontend_bundle();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), frontend.path());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/lectures/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, INDEX_HTML);
}

#[tokio::test]
async fn given_missing_bundle_when_requesting_root_then_returns_diagnostic_page() {
    let empty = tempfile::tempdir().unwrap();
    let app = create_test_app(Arc::new(ScriptedLlmClient::new()), empty.path());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    assert!(body_text(response).await.contains("Frontend not built"));
}

#[tokio::test]
async fn given_missing_bundle_when_calling_api_then_api_still_works() {
    let empty = tempfile::tempdir().unwrap();
    let client = Arc::new(
        ScriptedLlmClient::new().with("primary", Outcome::Reply(VALID_PAYLOAD.to_string())),
    );
    let app = create_test_app(client, empty.path());

    let response = app
        .oneshot(generate_request(r#"{"text": "lecture"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
