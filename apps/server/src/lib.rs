pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post, put},
    Router,
};
use quiz_core::QuizSession;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::SqliteStore;
use crate::error::ApiError;

/// The single quiz session served by this process.
pub type Session = QuizSession<SqliteStore>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Lock the session for the duration of one request.
    pub fn session(&self) -> Result<MutexGuard<'_, Session>, ApiError> {
        self.session
            .lock()
            .map_err(|_| ApiError::Internal("session lock poisoned".to_string()))
    }
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Catalog routes
        .route(
            "/api/categories",
            get(routes::catalog::list).post(routes::catalog::create),
        )
        .route("/api/categories/:name", put(routes::catalog::rename))
        .route(
            "/api/categories/:name/items",
            get(routes::catalog::items).post(routes::catalog::add_item),
        )
        .route(
            "/api/categories/:name/items/:index",
            put(routes::catalog::edit_item),
        )
        // Session routes
        .route(
            "/api/session/categories",
            put(routes::session::select).delete(routes::session::clear),
        )
        .route("/api/session/direction", put(routes::session::direction))
        // Quiz routes
        .route("/api/quiz/next", post(routes::quiz::next))
        .route("/api/quiz/answer", post(routes::quiz::answer))
        // Score routes
        .route(
            "/api/score",
            get(routes::score::summary).delete(routes::score::reset),
        )
        .route("/api/score/errors", get(routes::score::errors))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("Opening quiz database at {}", config.db_path.display());
    let store = SqliteStore::open(&config.db_path)?;

    let (session, load_error) = QuizSession::open(store);
    if let Some(e) = load_error {
        tracing::warn!("Continuing with an empty catalog: {}", e);
    }

    let app = router(AppState::new(session));
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
