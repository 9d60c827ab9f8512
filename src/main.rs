use std::sync::Arc;
use std::time::Duration;

use seeker::api::create_router;
use seeker::completion::CompletionClient;
use seeker::config::Config;
use seeker::orchestrator::Orchestrator;
use seeker::search::SearchClient;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let config = Config::from_env()?;

    // One client for both providers; the timeout keeps a hung upstream from
    // pinning a request forever.
    let http = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let search = SearchClient::new(http.clone(), config.serp_api_key, config.serp_base_url);
    let completion =
        CompletionClient::new(http, config.openai_api_key, config.openai_base_url);
    let orchestrator = Arc::new(Orchestrator::new(search, completion));

    let router = create_router(orchestrator);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server is running on http://localhost:{}", config.port);
    axum::serve(listener, router).await?;

    Ok(())
}
