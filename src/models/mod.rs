mod theme;
mod transaction;

pub use theme::Theme;
pub use transaction::{signed_amount, Status, Transaction, DEFAULT_CATEGORIES};

#[cfg(test)]
mod tests;
