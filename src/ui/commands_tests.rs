#![allow(clippy::unwrap_used)]

use std::time::Instant;

use super::*;
use crate::store::{ThemeStore, TransactionStore};
use crate::ui::app::InputMode;

fn setup() -> (Database, App) {
    let db = Database::open_in_memory().unwrap();
    let app = App::new(
        TransactionStore::load(&db),
        ThemeStore::load(&db),
        "₹".into(),
        Instant::now(),
    );
    (db, app)
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("", ""), 0);
    assert_eq!(levenshtein("filter", "filter"), 0);
    assert_eq!(levenshtein("fliter", "filter"), 2);
    assert_eq!(levenshtein("them", "theme"), 1);
}

#[test]
fn test_unknown_command_suggests() {
    let (mut db, mut app) = setup();
    handle_command("thme dark", &mut app, &mut db).unwrap();
    assert!(app.status_message.contains(":theme"));
}

#[test]
fn test_quit() {
    let (mut db, mut app) = setup();
    handle_command("q", &mut app, &mut db).unwrap();
    assert!(!app.running);
}

#[test]
fn test_add_opens_form() {
    let (mut db, mut app) = setup();
    handle_command("add", &mut app, &mut db).unwrap();
    assert_eq!(app.input_mode, InputMode::Form);
}

#[test]
fn test_filter_command() {
    let (mut db, mut app) = setup();
    handle_command("filter Food", &mut app, &mut db).unwrap();
    assert_eq!(app.filter, Filter::Category("Food".into()));
    handle_command("f all", &mut app, &mut db).unwrap();
    assert_eq!(app.filter, Filter::All);
}

#[test]
fn test_theme_command() {
    let (mut db, mut app) = setup();
    handle_command("theme dark", &mut app, &mut db).unwrap();
    assert_eq!(app.themes.current(), Theme::Dark);
    handle_command("theme dark", &mut app, &mut db).unwrap();
    assert_eq!(app.themes.current(), Theme::Dark);
    handle_command("theme", &mut app, &mut db).unwrap();
    assert_eq!(app.themes.current(), Theme::Light);
    handle_command("theme sepia", &mut app, &mut db).unwrap();
    assert_eq!(app.themes.current(), Theme::Light);
    assert!(app.status_message.contains("sepia"));
}

#[test]
fn test_export_command() {
    let (mut db, mut app) = setup();
    app.store.add(&mut db, "Coffee", "4.5", "Food", "").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    handle_command(&format!("export {}", path.display()), &mut app, &mut db).unwrap();
    assert!(path.exists());
    assert!(app.status_message.starts_with("Exported 1"));
}

#[test]
fn test_every_command_has_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), "{name}");
    }
}
