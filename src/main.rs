//! Ming Le backend entry point.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ming_le::adapters::ai::{OpenAiConfig, OpenAiProvider};
use ming_le::adapters::http::{app_router, AppState};
use ming_le::application::TranslateHandler;
use ming_le::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .ok_or("OPENAI_API_KEY is required")?;
    let provider = OpenAiProvider::new(
        OpenAiConfig::new(api_key)
            .with_model(config.ai.model.as_str())
            .with_base_url(config.ai.base_url.as_str())
            .with_timeout(config.ai.timeout()),
    );

    let translate = Arc::new(TranslateHandler::new(Arc::new(provider)));
    let state = AppState::new(translate);
    let router = app_router(state, &config.server);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, model = %config.ai.model, "ming-le backend listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
