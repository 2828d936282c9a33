//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::{
    AnswerOutcome, CategorySelection, Direction, ErrorRecord, ItemPatch, Persisted, Question,
    QuizItem, ScoreSummary, Step,
};

// === Catalog ===

/// Category with its size and whether it is in the active selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub name: String,
    pub item_count: usize,
    pub active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenameCategoryRequest {
    pub new_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub category: String,
    pub items: Vec<QuizItem>,
}

/// New item fields; the category comes from the path
#[derive(Debug, Serialize, Deserialize)]
pub struct NewItemRequest {
    #[serde(default)]
    pub primary_form: String,
    #[serde(default)]
    pub phonetic_form: String,
    pub meaning: String,
    #[serde(default)]
    pub item_type: String,
}

impl NewItemRequest {
    pub fn into_item(self, category: &str) -> QuizItem {
        QuizItem::new(&self.primary_form, &self.phonetic_form, &self.meaning)
            .in_category(category)
            .with_type(&self.item_type)
    }
}

/// Result of a catalog mutation
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<Persisted> for MutationResponse {
    fn from(persisted: Persisted) -> Self {
        Self {
            saved: persisted.is_saved(),
            warning: persisted.warning().map(str::to_string),
        }
    }
}

// === Session ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectCategoriesRequest {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub all: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub selection: CategorySelection,
}

/// Omitting `direction` toggles the current one
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DirectionRequest {
    #[serde(default)]
    pub direction: Option<Direction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DirectionResponse {
    pub direction: Direction,
}

// === Quiz ===

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorLogResponse {
    pub errors: Vec<ErrorRecord>,
}
