pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
pub mod static_assets;

pub use config::{Environment, LlmProvider, Settings};
pub use router::create_router;
pub use state::AppState;
