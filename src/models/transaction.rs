use serde::{Deserialize, Serialize};

/// The category whose amounts are stored as positive (income).
pub const INCOME_CATEGORY: &str = "Income";

/// Categories offered by the add form. The store itself accepts any string.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    INCOME_CATEGORY,
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

/// Lifecycle of a record: active ⇄ pending deletion → removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Active,
    PendingDeletion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredTransaction", into = "StoredTransaction")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: Option<String>,
    pub status: Status,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::PendingDeletion
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    pub fn date_str(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}

/// Apply the sign convention: income is positive, every other category negative.
pub fn signed_amount(raw: f64, category: &str) -> f64 {
    if category == INCOME_CATEGORY {
        raw.abs()
    } else {
        -raw.abs()
    }
}

/// On-disk shape of a record. `date` is always written (empty when absent) and
/// `pending` only when set, so older snapshots without either still load.
#[derive(Serialize, Deserialize)]
struct StoredTransaction {
    id: String,
    title: String,
    amount: f64,
    category: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pending: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl From<StoredTransaction> for Transaction {
    fn from(s: StoredTransaction) -> Self {
        Self {
            id: s.id,
            title: s.title,
            amount: s.amount,
            category: s.category,
            date: s.date.filter(|d| !d.is_empty()),
            status: if s.pending {
                Status::PendingDeletion
            } else {
                Status::Active
            },
        }
    }
}

impl From<Transaction> for StoredTransaction {
    fn from(t: Transaction) -> Self {
        Self {
            pending: t.is_pending(),
            id: t.id,
            title: t.title,
            amount: t.amount,
            category: t.category,
            date: Some(t.date.unwrap_or_default()),
        }
    }
}
