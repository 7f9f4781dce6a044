#![allow(clippy::unwrap_used)]

use super::*;

// ── Schema ────────────────────────────────────────────────────

#[test]
fn test_fresh_database_records_schema_version() {
    let db = Database::open_in_memory().unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
}

#[test]
fn test_init_schema_is_idempotent() {
    let mut db = Database::open_in_memory().unwrap();
    db.write_slot("k", "v").unwrap();
    db.init_schema().unwrap();
    db.init_schema().unwrap();
    let rows: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(db.read_slot("k").unwrap().as_deref(), Some("v"));
}

// ── Slots ─────────────────────────────────────────────────────

#[test]
fn test_read_absent_slot() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.read_slot("missing").unwrap(), None);
}

#[test]
fn test_write_then_read() {
    let mut db = Database::open_in_memory().unwrap();
    db.write_slot("et_theme", "dark").unwrap();
    assert_eq!(db.read_slot("et_theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_write_overwrites() {
    let mut db = Database::open_in_memory().unwrap();
    db.write_slot("et_theme", "dark").unwrap();
    db.write_slot("et_theme", "light").unwrap();
    assert_eq!(db.read_slot("et_theme").unwrap().as_deref(), Some("light"));
    let rows: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_slots_are_independent() {
    let mut db = Database::open_in_memory().unwrap();
    db.write_slot("a", "1").unwrap();
    db.write_slot("b", "2").unwrap();
    assert_eq!(db.read_slot("a").unwrap().as_deref(), Some("1"));
    assert_eq!(db.read_slot("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_unicode_value() {
    let mut db = Database::open_in_memory().unwrap();
    db.write_slot("k", r#"[{"title":"☕ café"}]"#).unwrap();
    assert_eq!(
        db.read_slot("k").unwrap().as_deref(),
        Some(r#"[{"title":"☕ café"}]"#)
    );
}

#[test]
fn test_slots_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendtui.db");
    {
        let mut db = Database::open(&path).unwrap();
        db.write_slot("et_theme", "dark").unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.read_slot("et_theme").unwrap().as_deref(), Some("dark"));
    let versions: i64 = db
        .conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(versions, 1);
}

#[test]
fn test_open_bad_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("spendtui.db");
    assert!(Database::open(&path).is_err());
}
