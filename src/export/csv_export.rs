use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::Transaction;

pub(crate) const HEADERS: [&str; 6] = ["id", "title", "amount", "category", "date", "pending"];

pub(crate) struct CsvExporter;

impl CsvExporter {
    /// Write every record, in insertion order, with a header row.
    /// Returns the number of records written.
    pub(crate) fn write<W: Write>(writer: W, txns: &[Transaction]) -> Result<usize> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(HEADERS)
            .context("Failed to write CSV header")?;

        for txn in txns {
            let amount = txn.amount.to_string();
            wtr.write_record([
                txn.id.as_str(),
                txn.title.as_str(),
                amount.as_str(),
                txn.category.as_str(),
                txn.date_str(),
                if txn.is_pending() { "true" } else { "false" },
            ])
            .with_context(|| format!("Failed to write transaction {}", txn.id))?;
        }

        wtr.flush().context("Failed to flush CSV output")?;
        Ok(txns.len())
    }

    pub(crate) fn to_path(path: &Path, txns: &[Transaction]) -> Result<usize> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let count = Self::write(file, txns)?;
        log::info!("exported {count} transactions to {}", path.display());
        Ok(count)
    }
}
