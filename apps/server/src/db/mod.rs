//! Local SQLite persistence for the quiz catalog.

pub mod schema;
pub mod store;

pub use store::SqliteStore;
