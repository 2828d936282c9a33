//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors surfaced by the quiz engine.
///
/// All of them are local, single-shot failures: nothing here is retried and
/// none of them leave the session unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("data source error: {0}")]
    DataSource(String),

    #[error("category already exists: {0}")]
    DuplicateCategory(String),

    #[error("category not found: {0}")]
    NotFound(String),

    #[error("item index {index} out of range for category {category}")]
    OutOfRange { category: String, index: usize },

    #[error("invalid item: {0}")]
    InvalidItem(String),

    #[error("no category selected")]
    NoCategorySelected,

    #[error("not enough distractors for item {0}")]
    InsufficientDistractors(String),

    #[error("no question is waiting for an answer")]
    NoActiveQuestion,
}
