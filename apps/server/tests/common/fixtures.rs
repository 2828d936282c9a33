//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use quiz_core::RawRow;

fn row(primary: &str, phonetic: &str, meaning: &str, category: &str, item_type: &str) -> RawRow {
    RawRow {
        primary_form: Some(primary.to_string()).filter(|s| !s.is_empty()),
        phonetic_form: Some(phonetic.to_string()),
        meaning: Some(meaning.to_string()),
        category: Some(category.to_string()),
        item_type: Some(item_type.to_string()).filter(|s| !s.is_empty()),
    }
}

/// Seed catalog: four animals, three colors and one item nothing can pair with.
pub fn sample_rows() -> Vec<RawRow> {
    vec![
        row("犬", "inu", "dog", "Animals", ""),
        row("猫", "neko", "cat", "Animals", ""),
        row("鳥", "tori", "bird", "Animals", ""),
        row("魚", "sakana", "fish", "Animals", ""),
        row("赤", "aka", "red", "Colors", ""),
        row("青", "ao", "blue", "Colors", ""),
        row("白", "shiro", "white", "Colors", ""),
        row("", "totemo", "very", "Lonely", "adv"),
    ]
}

/// Request body for adding an item.
pub fn new_item(primary: &str, phonetic: &str, meaning: &str, item_type: &str) -> Value {
    json!({
        "primary_form": primary,
        "phonetic_form": phonetic,
        "meaning": meaning,
        "item_type": item_type,
    })
}

/// Request body selecting the given categories.
pub fn select(categories: &[&str]) -> Value {
    json!({ "categories": categories })
}
