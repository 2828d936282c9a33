//! Next-item selection without repeats until the active categories run dry.
//!
//! Randomness is two-staged: a category is drawn uniformly among the active
//! categories that still have unseen items, then an unseen item is drawn
//! uniformly within it. Small categories are therefore visited as often as
//! large ones.

use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::session::{CurrentItem, SessionState};
use crate::types::QuizItem;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Outcome of a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A fresh item, now the session's current item.
    Item {
        category: String,
        index: usize,
        item: QuizItem,
    },
    /// Every active category was exhausted; seen tracking has been reset.
    Completed,
}

/// Unseen items per active category, skipping categories with none left.
fn unseen_by_category<'a>(
    catalog: &'a Catalog,
    state: &SessionState,
    active: &'a [String],
) -> Vec<(&'a str, Vec<(usize, &'a QuizItem)>)> {
    active
        .iter()
        .filter_map(|category| {
            let unseen: Vec<(usize, &QuizItem)> = catalog
                .items(category)
                .unwrap_or_default()
                .iter()
                .enumerate()
                .filter(|(i, _)| !state.is_seen(category, *i))
                .collect();
            (!unseen.is_empty()).then_some((category.as_str(), unseen))
        })
        .collect()
}

/// Draw the next unseen item from the active categories.
///
/// A pass is exhausted once no active category has an unseen item left.
pub fn next_item<R: Rng + ?Sized>(
    catalog: &Catalog,
    state: &mut SessionState,
    rng: &mut R,
) -> Result<Selection> {
    let active = state.selection.resolve(catalog);
    if active.is_empty() {
        return Err(QuizError::NoCategorySelected);
    }

    let available = unseen_by_category(catalog, state, &active);
    let Some((category, unseen)) = available.choose(rng) else {
        tracing::info!(categories = ?active, "quiz pass completed");
        state.reset_seen(&active);
        return Ok(Selection::Completed);
    };

    // Only categories with unseen items are kept, so `unseen` is non-empty.
    let (index, item) = unseen[rng.random_range(0..unseen.len())];
    let category = category.to_string();
    let item = item.clone();

    state.mark_seen(&category, index);
    state.current = Some(CurrentItem {
        category: category.clone(),
        index,
        item: item.clone(),
        direction: state.direction,
        answered: false,
    });
    tracing::debug!(%category, index, "selected item");

    Ok(Selection::Item {
        category,
        index,
        item,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CategorySelection;
    use crate::types::RawRow;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{BTreeSet, HashSet};

    fn row(meaning: &str, phonetic: &str, category: &str) -> RawRow {
        RawRow {
            phonetic_form: Some(phonetic.to_string()),
            meaning: Some(meaning.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        }
    }

    fn chosen(names: &[&str]) -> CategorySelection {
        CategorySelection::Chosen(names.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>())
    }

    fn mixed_catalog() -> Catalog {
        let mut rows = Vec::new();
        for i in 0..5 {
            rows.push(row(&format!("a{i}"), &format!("pa{i}"), "A"));
        }
        for i in 0..2 {
            rows.push(row(&format!("b{i}"), &format!("pb{i}"), "B"));
        }
        rows.push(row("c0", "pc0", "C"));
        Catalog::from_rows(rows, &[])
    }

    #[test]
    fn requires_a_selection() {
        let catalog = mixed_catalog();
        let mut state = SessionState::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            next_item(&catalog, &mut state, &mut rng),
            Err(QuizError::NoCategorySelected)
        );
    }

    #[test]
    fn two_items_then_completion() {
        let catalog = Catalog::from_rows(
            vec![row("dog", "inu", "General"), row("cat", "neko", "General")],
            &[],
        );
        let mut state = SessionState::new();
        state.selection = chosen(&["General"]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut meanings = HashSet::new();
        for _ in 0..2 {
            match next_item(&catalog, &mut state, &mut rng).unwrap() {
                Selection::Item { item, .. } => {
                    meanings.insert(item.meaning);
                }
                Selection::Completed => panic!("completed too early"),
            }
        }
        assert_eq!(
            meanings,
            ["dog", "cat"].iter().map(|s| s.to_string()).collect::<HashSet<_>>()
        );

        assert_eq!(
            next_item(&catalog, &mut state, &mut rng).unwrap(),
            Selection::Completed
        );
        assert_eq!(state.seen_count("General"), 0);
        assert!(matches!(
            next_item(&catalog, &mut state, &mut rng).unwrap(),
            Selection::Item { .. }
        ));
    }

    #[test]
    fn no_repeats_within_a_pass() {
        let catalog = mixed_catalog();
        for seed in 0..20 {
            let mut state = SessionState::new();
            state.selection = chosen(&["A", "B", "C"]);
            let mut rng = StdRng::seed_from_u64(seed);

            let mut drawn = HashSet::new();
            for _ in 0..catalog.len() {
                match next_item(&catalog, &mut state, &mut rng).unwrap() {
                    Selection::Item {
                        category, index, ..
                    } => assert!(drawn.insert((category, index)), "repeat in seed {seed}"),
                    Selection::Completed => panic!("completed too early"),
                }
            }
            assert_eq!(drawn.len(), 8);
            assert_eq!(
                next_item(&catalog, &mut state, &mut rng).unwrap(),
                Selection::Completed
            );
            for c in ["A", "B", "C"] {
                assert_eq!(state.seen_count(c), 0);
            }
        }
    }

    #[test]
    fn identical_items_are_distinct_draws() {
        let catalog = Catalog::from_rows(
            vec![row("dog", "inu", "General"), row("dog", "inu", "General")],
            &[],
        );
        let mut state = SessionState::new();
        state.selection = chosen(&["General"]);
        let mut rng = StdRng::seed_from_u64(3);

        let first = next_item(&catalog, &mut state, &mut rng).unwrap();
        let second = next_item(&catalog, &mut state, &mut rng).unwrap();
        assert!(matches!(first, Selection::Item { .. }));
        assert!(matches!(second, Selection::Item { .. }));
        assert_ne!(first, second);
    }

    #[test]
    fn only_draws_from_active_categories() {
        let catalog = mixed_catalog();
        let mut state = SessionState::new();
        state.selection = chosen(&["B"]);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..2 {
            match next_item(&catalog, &mut state, &mut rng).unwrap() {
                Selection::Item { category, .. } => assert_eq!(category, "B"),
                Selection::Completed => panic!("completed too early"),
            }
        }
        assert_eq!(state.seen_count("A"), 0);
    }

    #[test]
    fn sets_current_item() {
        let catalog = mixed_catalog();
        let mut state = SessionState::new();
        state.selection = CategorySelection::All;
        let mut rng = StdRng::seed_from_u64(5);

        let Selection::Item {
            category, index, ..
        } = next_item(&catalog, &mut state, &mut rng).unwrap()
        else {
            panic!("expected an item");
        };
        let current = state.current.as_ref().unwrap();
        assert_eq!(current.category, category);
        assert_eq!(current.index, index);
        assert!(!current.answered);
        assert!(state.is_seen(&category, index));
    }

    #[test]
    fn empty_active_categories_complete_immediately() {
        let catalog = Catalog::default();
        let mut state = SessionState::new();
        state.selection = chosen(&["General"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            next_item(&catalog, &mut state, &mut rng).unwrap(),
            Selection::Completed
        );
    }
}
