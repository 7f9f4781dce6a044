mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// String-keyed persistent slots. Each slot holds one opaque string value.
pub(crate) trait Slots {
    fn read_slot(&self, key: &str) -> Result<Option<String>>;
    fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;
}

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.init_schema().context("Failed to create database schema")?;
        log::debug!("opened database at {}", path.display());
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    /// Create the tables if missing and stamp the schema version once.
    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA_V1)?;
        let stamped = self.conn.execute(
            "INSERT INTO schema_version (version)
             SELECT ?1 WHERE NOT EXISTS (SELECT 1 FROM schema_version)",
            params![schema::CURRENT_VERSION],
        )?;
        if stamped > 0 {
            log::info!("created schema v{}", schema::CURRENT_VERSION);
        }
        Ok(())
    }
}

impl Slots for Database {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read slot '{key}'"))
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, chrono::Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("Failed to write slot '{key}'"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
