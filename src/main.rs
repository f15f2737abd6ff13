use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use veracity::{
    app_state::AppState,
    classifier::{self, NewsClassifier},
    config::Config,
    router,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Train the classifier before anything can serve; a bad corpus is fatal
    let corpus = classifier::load_corpus(config.dataset_path())?;
    let classifier = Arc::new(NewsClassifier::train(&corpus)?);

    let state = AppState::new(classifier, config.translate_base_url().clone());
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", config.bind_addr());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received shutdown signal, initiating graceful shutdown...");
}
