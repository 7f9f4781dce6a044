#![allow(clippy::unwrap_used)]

use std::time::Instant;

use super::animate::COUNTER_DURATION;
use super::app::*;
use crate::db::Database;
use crate::models::{Theme, DEFAULT_CATEGORIES};
use crate::store::{Filter, ThemeStore, TransactionStore};

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

fn fill_form(app: &mut App, title: &str, amount: &str, category: &str) {
    app.open_form();
    app.form.title = title.into();
    app.form.amount = amount.into();
    app.form.category_index = DEFAULT_CATEGORIES
        .iter()
        .position(|c| *c == category)
        .unwrap();
}

// ── form ──────────────────────────────────────────────────────

#[test]
fn test_form_field_cycle() {
    assert_eq!(FormField::Title.next(), FormField::Amount);
    assert_eq!(FormField::Date.next(), FormField::Title);
    assert_eq!(FormField::Title.prev(), FormField::Date);
}

#[test]
fn test_form_category_cycle_wraps() {
    let mut form = AddForm::new();
    assert_eq!(form.category(), "Income");
    form.cycle_category(-1);
    assert_eq!(form.category(), *DEFAULT_CATEGORIES.last().unwrap());
    form.cycle_category(1);
    assert_eq!(form.category(), "Income");
}

#[test]
fn test_form_focused_input() {
    let mut form = AddForm::new();
    form.focus = FormField::Amount;
    form.focused_input().unwrap().push('5');
    assert_eq!(form.amount, "5");
    form.focus = FormField::Category;
    assert!(form.focused_input().is_none());
}

#[test]
fn test_form_defaults_date_to_today() {
    let form = AddForm::new();
    assert_eq!(form.date, chrono::Local::now().format("%Y-%m-%d").to_string());
}

#[test]
fn test_submit_valid_form_adds_and_resets() {
    let (mut db, mut app) = setup();
    fill_form(&mut app, "Coffee", "4.5", "Food");
    app.submit_form(&mut db, Instant::now());

    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(app.form.title.is_empty());
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.selected().unwrap().amount, -4.5);
    assert!(app.status_message.contains("- ₹4.50"));
}

#[test]
fn test_submit_invalid_form_keeps_contents() {
    let (mut db, mut app) = setup();
    fill_form(&mut app, "   ", "4.5", "Food");
    app.submit_form(&mut db, Instant::now());
    assert_eq!(app.input_mode, InputMode::Form);
    assert_eq!(app.form.error.as_deref(), Some("Please enter a title"));
    assert_eq!(app.form.amount, "4.5");

    app.form.title = "Coffee".into();
    app.form.amount = "abc".into();
    app.submit_form(&mut db, Instant::now());
    assert_eq!(app.form.error.as_deref(), Some("Please enter a non-zero amount"));
    assert_eq!(app.form.title, "Coffee");
    assert_eq!(app.store.len(), 0);
}

#[test]
fn test_reopening_form_clears_error() {
    let (mut db, mut app) = setup();
    fill_form(&mut app, "", "1", "Food");
    app.submit_form(&mut db, Instant::now());
    app.close_form();
    app.open_form();
    assert!(app.form.error.is_none());
}

// ── row actions ───────────────────────────────────────────────

#[test]
fn test_delete_undo_purge_selected() {
    let (mut db, mut app) = setup();
    fill_form(&mut app, "Salary", "2000", "Income");
    app.submit_form(&mut db, Instant::now());
    fill_form(&mut app, "Coffee", "4.5", "Food");
    app.submit_form(&mut db, Instant::now());

    // Most recent first: Coffee is selected
    assert_eq!(app.selected().unwrap().title, "Coffee");

    app.delete_selected(&mut db, Instant::now());
    assert!(app.selected().unwrap().is_pending());
    assert_eq!(app.store.totals().expenses, 0.0);

    app.undo_selected(&mut db, Instant::now());
    assert!(app.selected().unwrap().is_active());
    assert_eq!(app.store.totals().expenses, 4.5);

    // Purge only applies to pending rows
    app.purge_selected(&mut db, Instant::now());
    assert_eq!(app.store.len(), 2);

    app.delete_selected(&mut db, Instant::now());
    app.purge_selected(&mut db, Instant::now());
    assert_eq!(app.store.len(), 1);
    assert_eq!(app.selected().unwrap().title, "Salary");
    assert_eq!(TransactionStore::load(&db).len(), 1);
}

#[test]
fn test_actions_on_empty_list_are_noops() {
    let (mut db, mut app) = setup();
    app.delete_selected(&mut db, Instant::now());
    app.undo_selected(&mut db, Instant::now());
    app.purge_selected(&mut db, Instant::now());
    assert!(app.status_message.is_empty());
}

#[test]
fn test_cursor_clamped_after_purge() {
    let (mut db, mut app) = setup();
    for title in ["a", "b"] {
        fill_form(&mut app, title, "1", "Food");
        app.submit_form(&mut db, Instant::now());
    }
    app.transaction_index = 1;
    app.delete_selected(&mut db, Instant::now());
    app.purge_selected(&mut db, Instant::now());
    assert_eq!(app.transaction_index, 0);
    assert_eq!(app.selected().unwrap().title, "b");
}

// ── filter ────────────────────────────────────────────────────

#[test]
fn test_filter_choices_include_custom_categories() {
    let (mut db, mut app) = setup();
    app.store.add(&mut db, "Vet", "80", "Pets", "").unwrap();
    let choices = app.filter_choices();
    assert_eq!(choices[0], Filter::All);
    assert_eq!(choices.len(), 1 + DEFAULT_CATEGORIES.len() + 1);
    assert_eq!(choices.last(), Some(&Filter::Category("Pets".into())));
}

#[test]
fn test_cycle_filter_wraps() {
    let (_db, mut app) = setup();
    app.cycle_filter(1, Instant::now());
    assert_eq!(app.filter, Filter::Category("Income".into()));
    app.cycle_filter(-1, Instant::now());
    assert_eq!(app.filter, Filter::All);
    app.cycle_filter(-1, Instant::now());
    assert_eq!(
        app.filter,
        Filter::Category(DEFAULT_CATEGORIES.last().unwrap().to_string())
    );
}

#[test]
fn test_filter_keeps_pending_visible_and_totals_unfiltered() {
    let (mut db, mut app) = setup();
    app.store.add(&mut db, "Salary", "2000", "Income", "").unwrap();
    let coffee = app.store.add(&mut db, "Coffee", "4.5", "Food", "").unwrap();
    app.store.mark_pending(&mut db, &coffee.id).unwrap();
    app.set_filter(Filter::Category("Food".into()), Instant::now());

    assert_eq!(app.visible().len(), 1);
    assert!(app.visible()[0].is_pending());
    assert_eq!(app.store.totals().balance, 2000.0);
}

// ── theme / counters ──────────────────────────────────────────

#[test]
fn test_toggle_theme_persists() {
    let (mut db, mut app) = setup();
    app.toggle_theme(&mut db);
    assert_eq!(app.themes.current(), Theme::Dark);
    assert_eq!(ThemeStore::load(&db).current(), Theme::Dark);
}

#[test]
fn test_counters_follow_totals() {
    let (mut db, mut app) = setup();
    let now = Instant::now();
    fill_form(&mut app, "Salary", "2000", "Income");
    app.submit_form(&mut db, now);
    fill_form(&mut app, "Coffee", "4.5", "Food");
    app.submit_form(&mut db, now);

    assert!(app.counters.is_animating(now));
    let later = now + COUNTER_DURATION;
    assert_eq!(app.counters.balance.value_at(later), 1995.5);
    assert_eq!(app.counters.income.value_at(later), 2000.0);
    assert_eq!(app.counters.expenses.value_at(later), 4.5);
}

#[test]
fn test_money_uses_configured_symbol() {
    let (_db, app) = setup();
    assert_eq!(app.money(-4.5), "- ₹4.50");
}
