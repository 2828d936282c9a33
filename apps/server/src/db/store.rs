//! SQLite-backed catalog store.

use quiz_core::{Catalog, CatalogStore, RawRow};
use rusqlite::{params, Connection};
use std::path::Path;

type Result<T> = std::result::Result<T, rusqlite::Error>;

/// Catalog store on a single SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        Ok(())
    }

    /// Insert raw rows as-is, bypassing the catalog (seeding and imports).
    pub fn insert_rows(&self, rows: &[RawRow]) -> Result<()> {
        let next: i64 = self.conn.query_row(
            "SELECT COALESCE(MAX(position) + 1, 0) FROM quiz_items",
            [],
            |row| row.get(0),
        )?;
        for (offset, row) in rows.iter().enumerate() {
            self.conn.execute(
                "INSERT INTO quiz_items (position, primary_form, phonetic_form, meaning, category, item_type) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    next + offset as i64,
                    row.primary_form,
                    row.phonetic_form,
                    row.meaning,
                    row.category,
                    row.item_type,
                ],
            )?;
        }
        Ok(())
    }

    fn count(&self, table: &str) -> Result<i64> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
    }

    fn row_to_raw(row: &rusqlite::Row) -> rusqlite::Result<RawRow> {
        Ok(RawRow {
            primary_form: row.get(0)?,
            phonetic_form: row.get(1)?,
            meaning: row.get(2)?,
            category: row.get(3)?,
            item_type: row.get(4)?,
        })
    }
}

impl CatalogStore for SqliteStore {
    type Error = rusqlite::Error;

    fn load(&self) -> Result<Option<Vec<RawRow>>> {
        if self.count("quiz_items")? == 0 && self.count("categories")? == 0 {
            return Ok(None);
        }

        let mut stmt = self.conn.prepare(
            "SELECT primary_form, phonetic_form, meaning, category, item_type FROM quiz_items ORDER BY position",
        )?;
        let rows = stmt
            .query_map([], Self::row_to_raw)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(Some(rows))
    }

    fn load_categories(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM categories ORDER BY position")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM quiz_items", [])?;
        tx.execute("DELETE FROM categories", [])?;

        for (position, name) in catalog.categories().enumerate() {
            tx.execute(
                "INSERT INTO categories (name, position) VALUES (?1, ?2)",
                params![name, position as i64],
            )?;
        }
        for (position, row) in catalog.to_rows().iter().enumerate() {
            tx.execute(
                "INSERT INTO quiz_items (position, primary_form, phonetic_form, meaning, category, item_type) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    position as i64,
                    row.primary_form,
                    row.phonetic_form,
                    row.meaning,
                    row.category,
                    row.item_type,
                ],
            )?;
        }

        tx.commit()?;
        tracing::debug!(items = catalog.len(), "quiz catalog saved");
        Ok(())
    }
}
