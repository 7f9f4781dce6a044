pub(crate) mod form;
pub(crate) mod summary;
pub(crate) mod transactions;
