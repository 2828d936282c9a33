//! SQLite schema definitions.

/// Complete schema for the quiz database.
pub const SCHEMA: &str = r#"
-- Categories, including ones without items
CREATE TABLE IF NOT EXISTS categories (
    name TEXT PRIMARY KEY,
    position INTEGER NOT NULL
);

-- Quiz items in catalog order
CREATE TABLE IF NOT EXISTS quiz_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    position INTEGER NOT NULL,
    primary_form TEXT,
    phonetic_form TEXT,
    meaning TEXT,
    category TEXT,
    item_type TEXT
);

CREATE INDEX IF NOT EXISTS idx_quiz_items_position ON quiz_items(position);
"#;
