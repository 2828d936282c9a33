//! Wrong-answer generation and question assembly.

use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::types::{Direction, Question, QuizItem};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Number of wrong options shown next to the correct one.
pub const DISTRACTOR_COUNT: usize = 2;

/// Whether `candidate` may stand in as a wrong answer for `target`.
///
/// Candidates must share the target's type and display format, and must not
/// render to the same option as the target.
fn is_eligible(
    candidate: &QuizItem,
    target: &QuizItem,
    correct_option: &str,
    direction: Direction,
) -> bool {
    candidate != target
        && candidate.item_type == target.item_type
        && candidate.is_primary_format() == target.is_primary_format()
        && direction.option_for(candidate) != correct_option
}

/// Distinct option texts from `items`, skipping the ones already in `taken`.
fn option_pool<'a>(
    items: impl Iterator<Item = &'a QuizItem>,
    target: &QuizItem,
    correct_option: &str,
    direction: Direction,
    taken: &[String],
) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for item in items.filter(|i| is_eligible(i, target, correct_option, direction)) {
        let option = direction.option_for(item);
        if !pool.contains(&option) && !taken.contains(&option) {
            pool.push(option);
        }
    }
    pool
}

/// Pick wrong options for `item`, preferring its own category.
///
/// Falls back to every other category when the own category cannot supply
/// enough candidates.
pub fn pick_distractors<R: Rng + ?Sized>(
    catalog: &Catalog,
    category: &str,
    item: &QuizItem,
    direction: Direction,
    rng: &mut R,
) -> Result<Vec<String>> {
    let correct_option = direction.option_for(item);
    let own = catalog.items(category).unwrap_or_default();
    let local = option_pool(own.iter(), item, &correct_option, direction, &[]);

    if local.len() >= DISTRACTOR_COUNT {
        return Ok(local
            .choose_multiple(rng, DISTRACTOR_COUNT)
            .cloned()
            .collect());
    }

    let needed = DISTRACTOR_COUNT - local.len();
    let foreign = option_pool(
        catalog.items_outside(category),
        item,
        &correct_option,
        direction,
        &local,
    );
    if foreign.len() < needed {
        tracing::warn!(
            %category,
            item = %item.display_form(),
            "not enough distractors"
        );
        return Err(QuizError::InsufficientDistractors(item.display_form().to_string()));
    }

    let mut picked: Vec<String> = foreign.choose_multiple(rng, needed).cloned().collect();
    picked.extend(local);
    Ok(picked)
}

/// Build a shuffled three-option question for `item`.
pub fn build_question<R: Rng + ?Sized>(
    catalog: &Catalog,
    category: &str,
    item: &QuizItem,
    direction: Direction,
    rng: &mut R,
) -> Result<Question> {
    let mut options = vec![direction.option_for(item)];
    options.extend(pick_distractors(catalog, category, item, direction, rng)?);
    options.shuffle(rng);

    Ok(Question {
        category: category.to_string(),
        prompt: direction.prompt_for(item),
        phonetic_form: item.phonetic_form.clone(),
        item_type: item.item_type.clone(),
        direction,
        options,
    })
}
