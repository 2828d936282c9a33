//! Core types for the quiz engine.

use serde::{Deserialize, Serialize};

/// Category assigned to items that arrive without one.
pub const SENTINEL_CATEGORY: &str = "General";

/// Header cell value some stores leak into the category column.
pub const HEADER_TOKEN: &str = "Category";

/// A single question/answer entry.
///
/// Items carry no synthetic ID; two items are the same item iff every field
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    #[serde(default)]
    pub primary_form: String,
    #[serde(default)]
    pub phonetic_form: String,
    pub meaning: String,
    pub category: String,
    #[serde(default)]
    pub item_type: String,
}

impl QuizItem {
    /// Create an item in the sentinel category.
    pub fn new(primary_form: &str, phonetic_form: &str, meaning: &str) -> Self {
        Self {
            primary_form: primary_form.trim().to_string(),
            phonetic_form: phonetic_form.trim().to_string(),
            meaning: meaning.trim().to_string(),
            category: SENTINEL_CATEGORY.to_string(),
            item_type: String::new(),
        }
    }

    /// Set the item type, lower-cased.
    pub fn with_type(mut self, item_type: &str) -> Self {
        self.item_type = normalize_type(item_type);
        self
    }

    /// Set the category.
    pub fn in_category(mut self, category: &str) -> Self {
        self.category = normalize_category(Some(category));
        self
    }

    /// Build an item from a raw store row.
    pub fn from_row(row: RawRow) -> Self {
        Self {
            primary_form: row.primary_form.unwrap_or_default().trim().to_string(),
            phonetic_form: row.phonetic_form.unwrap_or_default().trim().to_string(),
            meaning: row.meaning.unwrap_or_default().trim().to_string(),
            category: normalize_category(row.category.as_deref()),
            item_type: row.item_type.as_deref().map(normalize_type).unwrap_or_default(),
        }
    }

    /// Convert back into a store row.
    pub fn to_row(&self) -> RawRow {
        RawRow {
            primary_form: non_empty(&self.primary_form),
            phonetic_form: non_empty(&self.phonetic_form),
            meaning: Some(self.meaning.clone()),
            category: Some(self.category.clone()),
            item_type: non_empty(&self.item_type),
        }
    }

    /// Primary form if present, phonetic form otherwise.
    pub fn display_form(&self) -> &str {
        if self.primary_form.is_empty() {
            &self.phonetic_form
        } else {
            &self.primary_form
        }
    }

    /// `" (type)"` when the item has a type, empty otherwise.
    pub fn type_suffix(&self) -> String {
        if self.item_type.is_empty() {
            String::new()
        } else {
            format!(" ({})", self.item_type)
        }
    }

    /// Whether the item is shown through its primary form.
    pub fn is_primary_format(&self) -> bool {
        !self.primary_form.is_empty()
    }

    /// Check the invariants an item needs before it can be asked.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.meaning.trim().is_empty() {
            return Err("meaning must not be empty".to_string());
        }
        if self.display_form().trim().is_empty() {
            return Err("primary or phonetic form must not be empty".to_string());
        }
        Ok(())
    }
}

/// Row shape exchanged with the persistent store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub primary_form: Option<String>,
    pub phonetic_form: Option<String>,
    pub meaning: Option<String>,
    pub category: Option<String>,
    pub item_type: Option<String>,
}

/// Partial update applied by `edit_item`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
}

impl ItemPatch {
    /// Apply the patch to an item, leaving unset fields untouched.
    pub fn apply(&self, item: &mut QuizItem) {
        if let Some(ref v) = self.primary_form {
            item.primary_form = v.trim().to_string();
        }
        if let Some(ref v) = self.phonetic_form {
            item.phonetic_form = v.trim().to_string();
        }
        if let Some(ref v) = self.meaning {
            item.meaning = v.trim().to_string();
        }
        if let Some(ref v) = self.item_type {
            item.item_type = normalize_type(v);
        }
    }
}

/// Which side of the item is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Show the primary/phonetic form, ask for the meaning.
    Forward,
    /// Show the meaning, ask for the primary/phonetic form.
    Reverse,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Forward
    }
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// Text shown as the question for an item.
    pub fn prompt_for(self, item: &QuizItem) -> String {
        match self {
            Self::Forward => item.display_form().to_string(),
            Self::Reverse => item.meaning.clone(),
        }
    }

    /// Text of the option that answers the question for an item.
    pub fn option_for(self, item: &QuizItem) -> String {
        let base = match self {
            Self::Forward => item.meaning.as_str(),
            Self::Reverse => item.display_form(),
        };
        format!("{}{}", base, item.type_suffix())
    }
}

/// A multiple-choice question ready for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: String,
    pub prompt: String,
    pub phonetic_form: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub item_type: String,
    pub direction: Direction,
    pub options: Vec<String>,
}

/// Result of judging a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub given_answer: String,
    pub question_text: String,
}

/// A missed question, kept in answer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub question_text: String,
    pub correct_answer_text: String,
    pub given_answer_text: String,
    pub phonetic_form: String,
}

/// Aggregate score for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
    pub percentage_correct: f64,
}

fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        None | Some("") | Some(HEADER_TOKEN) => SENTINEL_CATEGORY.to_string(),
        Some(name) => name.to_string(),
    }
}

fn normalize_type(item_type: &str) -> String {
    item_type.trim().to_lowercase()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
