use std::time::Instant;

use crate::db::Slots;
use crate::models::{Transaction, DEFAULT_CATEGORIES};
use crate::store::{Filter, StoreError, ThemeStore, TransactionStore};
use crate::ui::animate::Counters;
use crate::ui::util::{clamp_cursor, format_currency};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Form,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Form => write!(f, "ADD"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Title,
    Amount,
    Category,
    Date,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Title, Self::Amount, Self::Category, Self::Date]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
        }
    }

    fn offset(self, delta: isize) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0) as isize;
        let len = all.len() as isize;
        all[(idx + delta).rem_euclid(len) as usize]
    }

    pub(crate) fn next(self) -> Self {
        self.offset(1)
    }

    pub(crate) fn prev(self) -> Self {
        self.offset(-1)
    }
}

/// State of the add-transaction form. Contents survive a cancelled form and
/// a failed submit; only a successful add clears them.
#[derive(Debug, Clone)]
pub(crate) struct AddForm {
    pub(crate) title: String,
    pub(crate) amount: String,
    pub(crate) category_index: usize,
    pub(crate) date: String,
    pub(crate) focus: FormField,
    pub(crate) error: Option<String>,
}

impl AddForm {
    pub(crate) fn new() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category_index: 0,
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            focus: FormField::Title,
            error: None,
        }
    }

    pub(crate) fn category(&self) -> &'static str {
        DEFAULT_CATEGORIES
            .get(self.category_index)
            .copied()
            .unwrap_or(DEFAULT_CATEGORIES[0])
    }

    pub(crate) fn cycle_category(&mut self, delta: isize) {
        let len = DEFAULT_CATEGORIES.len() as isize;
        self.category_index = (self.category_index as isize + delta).rem_euclid(len) as usize;
    }

    /// The text buffer behind the focused field, if it is a text field.
    pub(crate) fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Amount => Some(&mut self.amount),
            FormField::Date => Some(&mut self.date),
            FormField::Category => None,
        }
    }

    pub(crate) fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Amount => &self.amount,
            FormField::Category => self.category(),
            FormField::Date => &self.date,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) currency: String,

    pub(crate) store: TransactionStore,
    pub(crate) themes: ThemeStore,
    pub(crate) filter: Filter,
    pub(crate) form: AddForm,
    pub(crate) counters: Counters,

    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(
        store: TransactionStore,
        themes: ThemeStore,
        currency: String,
        now: Instant,
    ) -> Self {
        let counters = Counters::starting_at_zero(store.totals(), now);
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            currency,

            store,
            themes,
            filter: Filter::All,
            form: AddForm::new(),
            counters,

            transaction_index: 0,
            transaction_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Records currently on screen, most recent first.
    pub(crate) fn visible(&self) -> Vec<&Transaction> {
        self.store.list(&self.filter)
    }

    pub(crate) fn selected(&self) -> Option<&Transaction> {
        self.visible().get(self.transaction_index).copied()
    }

    pub(crate) fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency)
    }

    /// Re-derive everything that depends on the store after a change.
    pub(crate) fn refresh(&mut self, now: Instant) {
        let len = self.visible().len();
        clamp_cursor(&mut self.transaction_index, &mut self.transaction_scroll, len);
        self.counters.retarget(self.store.totals(), now);
    }

    pub(crate) fn open_form(&mut self) {
        self.form.error = None;
        self.input_mode = InputMode::Form;
    }

    pub(crate) fn close_form(&mut self) {
        self.form.error = None;
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn submit_form(&mut self, slots: &mut impl Slots, now: Instant) {
        let result = self.store.add(
            slots,
            &self.form.title,
            &self.form.amount,
            self.form.category(),
            &self.form.date,
        );
        let txn = match result {
            Ok(txn) => {
                self.set_status(format!("Added '{}' ({})", txn.title, self.money(txn.amount)));
                txn
            }
            Err(StoreError::Validation(e)) => {
                self.form.error = Some(e.to_string());
                return;
            }
            Err(e @ StoreError::Persist(_)) => {
                self.set_status(e.to_string());
                match self.store.all().last() {
                    Some(txn) => txn.clone(),
                    None => return,
                }
            }
        };
        log::debug!("form submitted {}", txn.id);
        self.form = AddForm::new();
        self.input_mode = InputMode::Normal;
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.refresh(now);
    }

    /// Soft-delete the selected row if it is active.
    pub(crate) fn delete_selected(&mut self, slots: &mut impl Slots, now: Instant) {
        let Some(txn) = self.selected().filter(|t| t.is_active()) else {
            return;
        };
        let (id, title) = (txn.id.clone(), txn.title.clone());
        match self.store.mark_pending(slots, &id) {
            Ok(_) => self.set_status(format!("Marked '{title}' for deletion (u undo, X delete)")),
            Err(e) => self.persist_failed(e),
        }
        self.refresh(now);
    }

    /// Restore the selected row if it is pending deletion.
    pub(crate) fn undo_selected(&mut self, slots: &mut impl Slots, now: Instant) {
        let Some(txn) = self.selected().filter(|t| t.is_pending()) else {
            return;
        };
        let (id, title) = (txn.id.clone(), txn.title.clone());
        match self.store.undo_pending(slots, &id) {
            Ok(_) => self.set_status(format!("Restored '{title}'")),
            Err(e) => self.persist_failed(e),
        }
        self.refresh(now);
    }

    /// Remove the selected row for good if it is pending deletion.
    pub(crate) fn purge_selected(&mut self, slots: &mut impl Slots, now: Instant) {
        let Some(txn) = self.selected().filter(|t| t.is_pending()) else {
            return;
        };
        let (id, title) = (txn.id.clone(), txn.title.clone());
        match self.store.permanent_delete(slots, &id) {
            Ok(_) => self.set_status(format!("Deleted '{title}'")),
            Err(e) => self.persist_failed(e),
        }
        self.refresh(now);
    }

    /// `All`, the fixed categories, then any other category present in the list.
    pub(crate) fn filter_choices(&self) -> Vec<Filter> {
        let mut choices = vec![Filter::All];
        choices.extend(
            DEFAULT_CATEGORIES
                .iter()
                .map(|c| Filter::Category(c.to_string())),
        );
        choices.extend(
            self.store
                .categories()
                .into_iter()
                .filter(|c| !DEFAULT_CATEGORIES.contains(&c.as_str()))
                .map(Filter::Category),
        );
        choices
    }

    pub(crate) fn cycle_filter(&mut self, delta: isize, now: Instant) {
        let choices = self.filter_choices();
        let idx = choices.iter().position(|f| *f == self.filter).unwrap_or(0) as isize;
        let next = (idx + delta).rem_euclid(choices.len() as isize) as usize;
        self.set_filter(choices[next].clone(), now);
    }

    pub(crate) fn set_filter(&mut self, filter: Filter, now: Instant) {
        self.filter = filter;
        self.transaction_index = 0;
        self.transaction_scroll = 0;
        self.set_status(format!("Filter: {}", self.filter));
        self.refresh(now);
    }

    pub(crate) fn toggle_theme(&mut self, slots: &mut impl Slots) {
        match self.themes.toggle(slots) {
            Ok(theme) => self.set_status(format!("Theme: {theme}")),
            Err(e) => {
                log::error!("{e:#}");
                self.set_status(format!("Could not save theme: {e:#}"));
            }
        }
    }

    fn persist_failed(&mut self, e: anyhow::Error) {
        log::error!("{e:#}");
        self.set_status(format!("Could not save transactions: {e:#}"));
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
