//! Common test utilities and fixtures for integration tests.
//!
//! Every test gets its own in-memory SQLite store seeded with
//! [`fixtures::sample_rows`] and a session with a fixed RNG seed.

pub mod fixtures;

use axum_test::TestServer;
use serde_json::Value;

use kanji_quiz_server::db::SqliteStore;
use kanji_quiz_server::{router, AppState};
use quiz_core::QuizSession;

/// Test context holding the shared state and a test server over the router.
pub struct TestContext {
    pub state: AppState,
    pub server: TestServer,
}

impl TestContext {
    /// Create a context over the sample catalog.
    pub fn new() -> Self {
        let store = SqliteStore::open_in_memory().expect("Failed to open in-memory database");
        store
            .insert_rows(&fixtures::sample_rows())
            .expect("Failed to seed database");
        Self::with_store(store)
    }

    /// Create a context over an empty, never-saved database.
    pub fn empty() -> Self {
        let store = SqliteStore::open_in_memory().expect("Failed to open in-memory database");
        Self::with_store(store)
    }

    fn with_store(store: SqliteStore) -> Self {
        let (session, load_error) = QuizSession::with_seed(store, 42);
        assert!(load_error.is_none(), "unexpected load error: {load_error:?}");

        let state = AppState::new(session);
        let server = TestServer::new(router(state.clone())).expect("Failed to start test server");
        Self { state, server }
    }

    /// The option that answers the question currently on screen.
    pub fn correct_option(&self) -> String {
        let session = self.state.session().expect("session lock");
        let current = session
            .state()
            .current
            .clone()
            .expect("a question should be active");
        current.direction.option_for(&current.item)
    }

    /// Select categories and fetch the first question.
    pub async fn start(&self, categories: &[&str]) -> Value {
        self.server
            .put("/api/session/categories")
            .json(&fixtures::select(categories))
            .await
            .assert_status_ok();

        let response = self.server.post("/api/quiz/next").await;
        response.assert_status_ok();
        response.json()
    }
}
