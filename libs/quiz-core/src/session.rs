//! Per-session quiz state.

use crate::catalog::Catalog;
use crate::types::{Direction, QuizItem};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Which categories the user opted into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "categories", rename_all = "snake_case")]
pub enum CategorySelection {
    /// Nothing chosen yet; the caller must prompt.
    Unselected,
    /// An explicit set of category names.
    Chosen(BTreeSet<String>),
    /// Every category in the catalog, resolved at each draw.
    All,
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::Unselected
    }
}

impl CategorySelection {
    /// Resolve to concrete category names in catalog order.
    pub fn resolve(&self, catalog: &Catalog) -> Vec<String> {
        match self {
            Self::Unselected => Vec::new(),
            Self::Chosen(names) => names.iter().cloned().collect(),
            Self::All => catalog.categories().map(str::to_string).collect(),
        }
    }

    pub fn includes(&self, category: &str) -> bool {
        match self {
            Self::Unselected => false,
            Self::Chosen(names) => names.contains(category),
            Self::All => true,
        }
    }
}

/// The item currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentItem {
    pub category: String,
    pub index: usize,
    pub item: QuizItem,
    /// Direction the item was asked in.
    pub direction: Direction,
    pub answered: bool,
}

/// Mutable state of one quiz session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub selection: CategorySelection,
    pub direction: Direction,
    pub current: Option<CurrentItem>,
    seen: BTreeMap<String, BTreeSet<usize>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices already shown from a category in the current pass.
    pub fn seen(&self, category: &str) -> Option<&BTreeSet<usize>> {
        self.seen.get(category)
    }

    pub fn seen_count(&self, category: &str) -> usize {
        self.seen.get(category).map_or(0, BTreeSet::len)
    }

    pub fn is_seen(&self, category: &str, index: usize) -> bool {
        self.seen
            .get(category)
            .is_some_and(|indices| indices.contains(&index))
    }

    pub(crate) fn mark_seen(&mut self, category: &str, index: usize) {
        self.seen.entry(category.to_string()).or_default().insert(index);
    }

    /// Take back a draw that was never shown.
    pub(crate) fn unmark_seen(&mut self, category: &str, index: usize) {
        if let Some(indices) = self.seen.get_mut(category) {
            indices.remove(&index);
            if indices.is_empty() {
                self.seen.remove(category);
            }
        }
    }

    /// Forget what was shown from the given categories.
    pub(crate) fn reset_seen<'a>(&mut self, categories: impl IntoIterator<Item = &'a String>) {
        for category in categories {
            self.seen.remove(category);
        }
    }

    /// Follow a category rename so the current pass survives it.
    pub(crate) fn rename_category(&mut self, old: &str, new: &str) {
        if let Some(indices) = self.seen.remove(old) {
            self.seen.insert(new.to_string(), indices);
        }
        if let CategorySelection::Chosen(ref mut names) = self.selection {
            if names.remove(old) {
                names.insert(new.to_string());
            }
        }
        if let Some(ref mut current) = self.current {
            if current.category == old {
                current.category = new.to_string();
                current.item.category = new.to_string();
            }
        }
    }
}
