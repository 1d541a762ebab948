#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("HTTP client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("{0}")]
    Leptos(String),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::SiteConfig::from_env()?;
    let port = config.port;
    tracing::info!(upstream = %config.api_upstream_url, static_dir = %config.static_dir.display(), "configuration loaded");

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "athletics-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
