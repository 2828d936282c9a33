//! Owned quiz session: catalog, session state, score and store in one handle.
//!
//! Every user action goes through `&mut QuizSession`, so a session is never
//! mutated concurrently. Catalog mutations are saved right away; a failed save
//! is reported back but the in-memory change stands.

use crate::catalog::{Catalog, CatalogStore};
use crate::distractor::build_question;
use crate::error::{QuizError, Result};
use crate::scorer::Scorer;
use crate::selector::{next_item, Selection};
use crate::session::{CategorySelection, SessionState};
use crate::types::{
    AnswerOutcome, Direction, ErrorRecord, ItemPatch, Question, QuizItem, ScoreSummary,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeSet;

/// What `next_question` produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "question", rename_all = "snake_case")]
pub enum Step {
    Question(Question),
    /// The pass is over and every active category is available again.
    Completed,
}

/// Outcome of saving after a catalog mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    Saved,
    Failed(String),
}

impl Persisted {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Save failure message, if any.
    pub fn warning(&self) -> Option<&str> {
        match self {
            Self::Saved => None,
            Self::Failed(msg) => Some(msg),
        }
    }
}

/// A single quiz session over a catalog store.
pub struct QuizSession<S: CatalogStore> {
    catalog: Catalog,
    state: SessionState,
    scorer: Scorer,
    store: S,
    rng: StdRng,
}

impl<S: CatalogStore> QuizSession<S> {
    /// Open a session on `store`.
    ///
    /// A load failure is returned alongside a session running on the
    /// sentinel-only catalog.
    pub fn open(store: S) -> (Self, Option<QuizError>) {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    /// Open a session with a deterministic RNG.
    pub fn with_seed(store: S, seed: u64) -> (Self, Option<QuizError>) {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: S, rng: StdRng) -> (Self, Option<QuizError>) {
        let (catalog, load_error) = match Catalog::load(&store) {
            Ok(catalog) => (catalog, None),
            Err(e) => {
                tracing::error!("failed to load quiz catalog: {}", e);
                (Catalog::default(), Some(e))
            }
        };
        tracing::info!(
            categories = catalog.categories().count(),
            items = catalog.len(),
            "quiz session opened"
        );

        let session = Self {
            catalog,
            state: SessionState::new(),
            scorer: Scorer::new(),
            store,
            rng,
        };
        (session, load_error)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // === Category selection ===

    pub fn selection(&self) -> &CategorySelection {
        &self.state.selection
    }

    /// Activate exactly the given categories.
    pub fn select_categories<I, T>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(QuizError::NoCategorySelected);
        }
        if let Some(missing) = names.iter().find(|n| !self.catalog.contains(n)) {
            return Err(QuizError::NotFound(missing.clone()));
        }
        self.state.selection = CategorySelection::Chosen(names);
        Ok(())
    }

    /// Activate every category, including ones added later.
    pub fn select_all(&mut self) {
        self.state.selection = CategorySelection::All;
    }

    /// Drop the selection; the next draw asks for categories again.
    pub fn clear_categories(&mut self) {
        self.state.selection = CategorySelection::Unselected;
    }

    // === Direction ===

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.state.direction = direction;
    }

    pub fn toggle_direction(&mut self) -> Direction {
        self.state.direction = self.state.direction.toggled();
        self.state.direction
    }

    // === Questions ===

    /// Draw the next item and turn it into a question.
    pub fn next_question(&mut self) -> Result<Step> {
        match next_item(&self.catalog, &mut self.state, &mut self.rng)? {
            Selection::Completed => Ok(Step::Completed),
            Selection::Item {
                category,
                index,
                item,
            } => {
                let built = build_question(
                    &self.catalog,
                    &category,
                    &item,
                    self.state.direction,
                    &mut self.rng,
                );
                if built.is_err() {
                    // Undo the draw; the item was never shown.
                    self.state.unmark_seen(&category, index);
                    self.state.current = None;
                }
                Ok(Step::Question(built?))
            }
        }
    }

    /// Judge `given` against the current item and update the score.
    pub fn submit_answer(&mut self, given: &str) -> Result<AnswerOutcome> {
        let current = self
            .state
            .current
            .as_mut()
            .filter(|c| !c.answered)
            .ok_or(QuizError::NoActiveQuestion)?;
        current.answered = true;

        let correct_answer = current.direction.option_for(&current.item);
        let question_text = current.direction.prompt_for(&current.item);
        let correct = self.scorer.record_answer(
            given,
            &correct_answer,
            &question_text,
            &current.item.phonetic_form,
        );
        tracing::debug!(correct, category = %current.category, "answer recorded");

        Ok(AnswerOutcome {
            correct,
            correct_answer,
            given_answer: given.to_string(),
            question_text,
        })
    }

    // === Score ===

    pub fn score(&self) -> ScoreSummary {
        self.scorer.summary()
    }

    pub fn percentage_correct(&self) -> f64 {
        self.scorer.percentage_correct()
    }

    pub fn error_log(&self) -> &[ErrorRecord] {
        self.scorer.error_log()
    }

    pub fn reset_score(&mut self) {
        self.scorer.reset();
    }

    // === Catalog mutations ===

    pub fn add_category(&mut self, name: &str) -> Result<Persisted> {
        self.catalog.add_category(name)?;
        Ok(self.persist())
    }

    /// Rename a category; seen tracking and selection follow the new name.
    pub fn rename_category(&mut self, old: &str, new: &str) -> Result<Persisted> {
        self.catalog.rename_category(old, new)?;
        self.state.rename_category(old, new.trim());
        Ok(self.persist())
    }

    pub fn add_item(&mut self, category: &str, item: QuizItem) -> Result<Persisted> {
        self.catalog.add_item(category, item)?;
        Ok(self.persist())
    }

    /// Edit an item in place; a pending question on it is judged against the edit.
    pub fn edit_item(
        &mut self,
        category: &str,
        index: usize,
        patch: &ItemPatch,
    ) -> Result<Persisted> {
        self.catalog.edit_item(category, index, patch)?;
        if let Some(current) = self
            .state
            .current
            .as_mut()
            .filter(|c| c.category == category && c.index == index)
        {
            if let Some(item) = self.catalog.item(category, index) {
                current.item = item.clone();
            }
        }
        Ok(self.persist())
    }

    fn persist(&mut self) -> Persisted {
        match self.store.save(&self.catalog) {
            Ok(()) => Persisted::Saved,
            Err(e) => {
                tracing::warn!("failed to save quiz catalog: {}", e);
                Persisted::Failed(e.to_string())
            }
        }
    }
}
