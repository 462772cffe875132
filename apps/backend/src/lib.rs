pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia_core::{CardSource, Viewer, PLACEHOLDER_IMAGE};

use crate::config::Config;
use crate::services::source::DataSource;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub viewer: Arc<Mutex<Viewer>>,
    pub source: Arc<DataSource>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            viewer: Arc::new(Mutex::new(Viewer::new(config.failure_policy))),
            source: Arc::new(DataSource::from_config(config)),
        }
    }
}

/// Build the full router: JSON API plus static data and image files.
pub fn router(state: AppState, config: &Config) -> Router {
    let placeholder = config
        .images_dir
        .join(PLACEHOLDER_IMAGE.trim_start_matches("images/"));
    let images = ServeDir::new(&config.images_dir).fallback(ServeFile::new(placeholder));

    Router::new()
        .route("/health", get(routes::health_check))
        .route("/api/session", get(routes::session::current))
        .route("/api/session/load", post(routes::session::load))
        .route("/api/session/reveal", post(routes::session::reveal))
        .route("/api/session/next", post(routes::session::next_card))
        .route("/api/session/previous", post(routes::session::previous_card))
        .nest_service("/data", ServeDir::new(&config.data_dir))
        .nest_service("/images", images)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the configured initial date. A failure is logged, not fatal.
pub async fn load_initial(state: &AppState, date: &str) {
    let ticket = state.viewer.lock().await.begin_load(date);
    let fetched = state.source.fetch(ticket.date()).await;

    let mut viewer = state.viewer.lock().await;
    match viewer.finish_load(ticket, fetched) {
        Ok(session) => tracing::info!("Initial flashcards loaded for {}", session.date()),
        Err(e) => tracing::error!("Initialization failed: {}", e),
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Serving data from {} and images from {}",
        config.data_dir.display(),
        config.images_dir.display()
    );

    let state = AppState::new(&config);
    load_initial(&state, &config.initial_date).await;

    let app = router(state, &config);
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
