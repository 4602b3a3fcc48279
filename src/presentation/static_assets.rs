use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use tower_http::services::{ServeDir, ServeFile};

pub const INDEX_DOCUMENT: &str = "index.html";

/// Serves the single-page bundle in `dir` for every path the API does not
/// claim, falling back to `index.html`. Without an `index.html` the fallback
/// is a diagnostic page with 404.
pub fn with_frontend<S>(router: Router<S>, dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let index = dir.join(INDEX_DOCUMENT);

    if index.is_file() {
        tracing::info!(dir = %dir.display(), "Serving frontend bundle");
        let serve_dir = ServeDir::new(dir).fallback(ServeFile::new(index));
        return router.fallback_service(serve_dir);
    }

    tracing::warn!(dir = %dir.display(), "Frontend bundle not found");
    let dir = dir.display().to_string();
    router.fallback(move || {
        let dir = dir.clone();
        async move { missing_bundle_page(&dir) }
    })
}

fn missing_bundle_page(dir: &str) -> impl IntoResponse + use<> {
    (
        StatusCode::NOT_FOUND,
        Html(format!(
            "<!DOCTYPE html>\n<html>\n<head><title>Frontend not built</title></head>\n<body>\n\
             <h1>Frontend not built</h1>\n\
             <p>No <code>{INDEX_DOCUMENT}</code> was found in <code>{dir}</code>.</p>\n\
             <p>Build the UI bundle into that directory or set <code>APP_FRONTEND__DIR</code>. \
             The API remains available at <code>POST /api/generate-notes</code>.</p>\n\
             </body>\n</html>\n"
        )),
    )
}
