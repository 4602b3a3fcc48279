use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use classpulse::application::services::NotesService;
use classpulse::infrastructure::llm::ProviderFactory;
use classpulse::infrastructure::observability::{TracingConfig, init_tracing};
use classpulse::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    init_tracing(&TracingConfig::for_environment(environment));

    let settings = Settings::load(environment).context("Failed to load settings")?;

    if let Some(variable) = settings.llm.missing_credential() {
        tracing::warn!(
            variable,
            "Hosted provider selected but no API key is set; every generation request will fail"
        );
    }

    let orchestrator = ProviderFactory::create_orchestrator(&settings.llm)
        .context("Failed to build LLM client")?;

    let state = AppState {
        notes_service: Arc::new(NotesService::new(orchestrator)),
        provider: settings.llm.provider,
    };

    let router = create_router(state, Path::new(&settings.frontend.dir));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host/port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
