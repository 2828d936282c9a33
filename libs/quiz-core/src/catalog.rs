//! Quiz catalog: items grouped by category, plus the persistence seam.

use crate::error::{QuizError, Result};
use crate::types::{ItemPatch, QuizItem, RawRow, SENTINEL_CATEGORY};
use serde::Serialize;
use std::convert::Infallible;

/// Backing store the catalog is loaded from and saved to.
pub trait CatalogStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load every row. `None` means the store does not exist yet.
    fn load(&self) -> std::result::Result<Option<Vec<RawRow>>, Self::Error>;

    /// Categories the store knows about, including ones without rows.
    fn load_categories(&self) -> std::result::Result<Vec<String>, Self::Error> {
        Ok(Vec::new())
    }

    /// Replace the stored catalog.
    fn save(&mut self, catalog: &Catalog) -> std::result::Result<(), Self::Error>;
}

/// Store that keeps the last saved catalog in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Option<Vec<RawRow>>,
    categories: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with rows.
    pub fn with_rows(rows: Vec<RawRow>) -> Self {
        Self {
            rows: Some(rows),
            categories: Vec::new(),
        }
    }

    pub fn rows(&self) -> Option<&[RawRow]> {
        self.rows.as_deref()
    }
}

impl CatalogStore for MemoryStore {
    type Error = Infallible;

    fn load(&self) -> std::result::Result<Option<Vec<RawRow>>, Self::Error> {
        Ok(self.rows.clone())
    }

    fn load_categories(&self) -> std::result::Result<Vec<String>, Self::Error> {
        Ok(self.categories.clone())
    }

    fn save(&mut self, catalog: &Catalog) -> std::result::Result<(), Self::Error> {
        self.rows = Some(catalog.to_rows());
        self.categories = catalog.categories().map(str::to_string).collect();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    name: String,
    items: Vec<QuizItem>,
}

/// Category name with its item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub item_count: usize,
}

/// Ordered mapping of category name to ordered items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Default for Catalog {
    /// Catalog holding only the empty sentinel category.
    fn default() -> Self {
        Self {
            categories: vec![Category {
                name: SENTINEL_CATEGORY.to_string(),
                items: Vec::new(),
            }],
        }
    }
}

impl Catalog {
    /// Catalog without any category.
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Load from a store. An absent store yields the sentinel-only catalog.
    pub fn load<S: CatalogStore>(store: &S) -> Result<Self> {
        let rows = store
            .load()
            .map_err(|e| QuizError::DataSource(e.to_string()))?;
        let Some(rows) = rows else {
            tracing::info!("no stored catalog, starting with {}", SENTINEL_CATEGORY);
            return Ok(Self::default());
        };
        let declared = store
            .load_categories()
            .map_err(|e| QuizError::DataSource(e.to_string()))?;
        Ok(Self::from_rows(rows, &declared))
    }

    /// Group rows by category. Categories end up sorted by name and items keep
    /// their row order.
    pub fn from_rows(rows: Vec<RawRow>, declared_categories: &[String]) -> Self {
        let mut catalog = Self::empty();
        for name in declared_categories {
            catalog.ensure_category(name);
        }
        for row in rows {
            let item = QuizItem::from_row(row);
            if let Err(reason) = item.validate() {
                tracing::warn!(category = %item.category, "skipping stored item: {}", reason);
                continue;
            }
            let name = item.category.clone();
            catalog.ensure_category(&name).push(item);
        }
        catalog.sort_categories();
        catalog
    }

    /// Flatten into store rows, category by category.
    pub fn to_rows(&self) -> Vec<RawRow> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(QuizItem::to_row))
            .collect()
    }

    /// Category names in catalog order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| CategorySummary {
                name: c.name.clone(),
                item_count: c.items.len(),
            })
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Items of a category, if it exists.
    pub fn items(&self, name: &str) -> Option<&[QuizItem]> {
        self.position(name).map(|i| self.categories[i].items.as_slice())
    }

    pub fn item(&self, name: &str, index: usize) -> Option<&QuizItem> {
        self.items(name).and_then(|items| items.get(index))
    }

    /// Number of items in a category; zero when it does not exist.
    pub fn item_count(&self, name: &str) -> usize {
        self.items(name).map_or(0, <[QuizItem]>::len)
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All items outside `category`, in catalog order.
    pub fn items_outside<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a QuizItem> {
        self.categories
            .iter()
            .filter(move |c| c.name != category)
            .flat_map(|c| c.items.iter())
    }

    /// Add an empty category at the end of the ordering.
    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(QuizError::InvalidItem("category name must not be empty".to_string()));
        }
        if self.contains(name) {
            return Err(QuizError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(Category {
            name: name.to_string(),
            items: Vec::new(),
        });
        Ok(())
    }

    /// Move every item of `old` under `new`, then re-sort category names.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<()> {
        let new = new.trim();
        if new.is_empty() {
            return Err(QuizError::InvalidItem("category name must not be empty".to_string()));
        }
        if self.contains(new) {
            return Err(QuizError::DuplicateCategory(new.to_string()));
        }
        let idx = self
            .position(old)
            .ok_or_else(|| QuizError::NotFound(old.to_string()))?;

        let category = &mut self.categories[idx];
        category.name = new.to_string();
        for item in &mut category.items {
            item.category = new.to_string();
        }
        self.sort_categories();
        Ok(())
    }

    /// Append an item to a category.
    pub fn add_item(&mut self, category: &str, mut item: QuizItem) -> Result<()> {
        let idx = self
            .position(category)
            .ok_or_else(|| QuizError::NotFound(category.to_string()))?;
        item.category = category.to_string();
        item.item_type = item.item_type.trim().to_lowercase();
        item.validate().map_err(QuizError::InvalidItem)?;
        self.categories[idx].items.push(item);
        Ok(())
    }

    /// Update an item in place. The item keeps its position.
    pub fn edit_item(&mut self, category: &str, index: usize, patch: &ItemPatch) -> Result<()> {
        let idx = self
            .position(category)
            .ok_or_else(|| QuizError::NotFound(category.to_string()))?;
        let slot = self.categories[idx]
            .items
            .get_mut(index)
            .ok_or_else(|| QuizError::OutOfRange {
                category: category.to_string(),
                index,
            })?;

        let mut updated = slot.clone();
        patch.apply(&mut updated);
        updated.validate().map_err(QuizError::InvalidItem)?;
        *slot = updated;
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    fn ensure_category(&mut self, name: &str) -> &mut Vec<QuizItem> {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.categories.push(Category {
                    name: name.to_string(),
                    items: Vec::new(),
                });
                self.categories.len() - 1
            }
        };
        &mut self.categories[idx].items
    }

    fn sort_categories(&mut self) {
        self.categories.sort_by(|a, b| a.name.cmp(&b.name));
    }
}
