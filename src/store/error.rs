use thiserror::Error;

/// Rejected user input on add. Nothing is mutated when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ValidationError {
    #[error("Please enter a title")]
    EmptyTitle,
    #[error("Please enter a non-zero amount")]
    InvalidAmount,
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The record was accepted in memory but the snapshot could not be written.
    #[error("Failed to save transactions: {0:#}")]
    Persist(anyhow::Error),
}
