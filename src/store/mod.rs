mod error;
pub(crate) mod theme;

pub(crate) use error::{StoreError, ValidationError};
pub(crate) use theme::ThemeStore;

use anyhow::{Context, Result};
use std::collections::{BTreeSet, HashSet};

use crate::db::Slots;
use crate::models::{signed_amount, Status, Transaction};

pub(crate) const TRANSACTIONS_KEY: &str = "et_transactions";

/// The filter value meaning "every category".
pub(crate) const ALL_FILTER: &str = "all";

const ID_SUFFIX_LEN: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub(crate) fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s == ALL_FILTER {
            Self::All
        } else {
            Self::Category(s.to_string())
        }
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => txn.category == *c,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Category(c) => write!(f, "{c}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct Totals {
    pub(crate) income: f64,
    pub(crate) expenses: f64,
    pub(crate) balance: f64,
}

impl Totals {
    pub(crate) fn of<'a>(txns: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let (income, expenses) = txns
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(inc, exp), t| {
                if t.is_income() {
                    (inc + t.amount, exp)
                } else if t.is_expense() {
                    (inc, exp + t.abs_amount())
                } else {
                    (inc, exp)
                }
            });
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// The transaction list plus its persistence boundary.
///
/// State is loaded once with [`TransactionStore::load`] and every mutation
/// writes the full list back to the slot before returning.
#[derive(Debug, Default)]
pub(crate) struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Populate from the transactions slot. Missing, unreadable or malformed
    /// data yields an empty store.
    pub(crate) fn load(slots: &impl Slots) -> Self {
        let raw = match slots.read_slot(TRANSACTIONS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::warn!("could not read saved transactions, starting empty: {e:#}");
                return Self::default();
            }
        };

        match decode(&raw) {
            Ok(transactions) => {
                log::info!("loaded {} transactions", transactions.len());
                Self { transactions }
            }
            Err(e) => {
                log::warn!("discarding saved transactions: {e:#}");
                Self::default()
            }
        }
    }

    fn save(&self, slots: &mut impl Slots) -> Result<()> {
        let json = encode(&self.transactions)?;
        slots.write_slot(TRANSACTIONS_KEY, &json)
    }

    pub(crate) fn add(
        &mut self,
        slots: &mut impl Slots,
        title: &str,
        raw_amount: &str,
        category: &str,
        date: &str,
    ) -> Result<Transaction, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        let raw = parse_amount(raw_amount)?;
        let date = date.trim();

        let txn = Transaction {
            id: self.fresh_id(),
            title: title.to_string(),
            amount: signed_amount(raw, category),
            category: category.to_string(),
            date: (!date.is_empty()).then(|| date.to_string()),
            status: Status::Active,
        };
        self.transactions.push(txn.clone());
        log::info!("added {} '{}' {}", txn.id, txn.title, txn.amount);

        self.save(slots).map_err(|e| {
            log::error!("{e:#}");
            StoreError::Persist(e)
        })?;
        Ok(txn)
    }

    /// Soft-delete. Returns whether a record with `id` exists.
    pub(crate) fn mark_pending(&mut self, slots: &mut impl Slots, id: &str) -> Result<bool> {
        self.set_status(slots, id, Status::PendingDeletion)
    }

    /// Returns whether a record with `id` exists.
    pub(crate) fn undo_pending(&mut self, slots: &mut impl Slots, id: &str) -> Result<bool> {
        self.set_status(slots, id, Status::Active)
    }

    fn set_status(&mut self, slots: &mut impl Slots, id: &str, status: Status) -> Result<bool> {
        let Some(txn) = self.transactions.iter_mut().find(|t| t.id == id) else {
            log::debug!("no transaction {id} to mark {status:?}");
            return Ok(false);
        };
        txn.status = status;
        log::info!("marked {id} {status:?}");
        self.save(slots)?;
        Ok(true)
    }

    /// Remove the record entirely. Returns whether anything was removed.
    pub(crate) fn permanent_delete(&mut self, slots: &mut impl Slots, id: &str) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            log::debug!("no transaction {id} to delete");
            return Ok(false);
        }
        log::info!("deleted {id}");
        self.save(slots)?;
        Ok(true)
    }

    /// Records in display order (most recent first). Pending records are
    /// listed too; only totals skip them.
    pub(crate) fn list(&self, filter: &Filter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .rev()
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// Totals over active records only.
    pub(crate) fn totals(&self) -> Totals {
        Totals::of(self.transactions.iter().filter(|t| t.is_active()))
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Records in insertion order.
    pub(crate) fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Distinct categories present in the list, sorted.
    pub(crate) fn categories(&self) -> Vec<String> {
        self.transactions
            .iter()
            .map(|t| t.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n != 0.0 => Ok(n),
        _ => Err(ValidationError::InvalidAmount),
    }
}

pub(crate) fn encode(transactions: &[Transaction]) -> Result<String> {
    serde_json::to_string(transactions).context("Failed to serialize transactions")
}

/// Parse a snapshot. Only a payload that is not a JSON array is an error;
/// elements that do not decode as a record, or that repeat an earlier id,
/// are dropped.
pub(crate) fn decode(raw: &str) -> Result<Vec<Transaction>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).context("Malformed transaction data")?;
    let mut seen = HashSet::new();
    let mut transactions = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let txn: Transaction = match serde_json::from_value(value) {
            Ok(txn) => txn,
            Err(e) => {
                log::warn!("dropping unreadable transaction at index {index}: {e}");
                continue;
            }
        };
        if !seen.insert(txn.id.clone()) {
            log::warn!("dropping duplicate transaction id {}", txn.id);
            continue;
        }
        transactions.push(txn);
    }
    Ok(transactions)
}

/// Base-36 millisecond timestamp followed by six random base-36 characters.
pub(crate) fn generate_id() -> String {
    let millis = u128::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
    let random = uuid::Uuid::new_v4().as_u128() % 36u128.pow(ID_SUFFIX_LEN);
    let suffix = to_base36(random);
    format!(
        "{}{}{suffix}",
        to_base36(millis),
        "0".repeat(ID_SUFFIX_LEN as usize - suffix.len())
    )
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
