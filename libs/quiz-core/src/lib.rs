//! Core quiz engine shared by the server and any other front end.
//!
//! Provides:
//! - Catalog of quiz items grouped by category, with a pluggable store
//! - No-repeat item selection across the active categories
//! - Distractor generation for three-option questions
//! - Score keeping with an error log
//! - `QuizSession`, the single owned handle tying these together

pub mod catalog;
pub mod distractor;
pub mod error;
pub mod quiz;
pub mod scorer;
pub mod selector;
pub mod session;
pub mod types;

pub use catalog::{Catalog, CatalogStore, CategorySummary, MemoryStore};
pub use distractor::{build_question, pick_distractors};
pub use error::{QuizError, Result};
pub use quiz::{Persisted, QuizSession, Step};
pub use scorer::Scorer;
pub use selector::{next_item, Selection};
pub use session::{CategorySelection, CurrentItem, SessionState};
pub use types::{
    AnswerOutcome, Direction, ErrorRecord, ItemPatch, Question, QuizItem, RawRow, ScoreSummary,
    SENTINEL_CATEGORY,
};
