use anyhow::{Context, Result};
use env_logger::{Env, Target, WriteStyle};
use std::fs::OpenOptions;
use std::path::Path;

pub(crate) const DEFAULT_FILTER: &str = "spendtui=info";

/// Send log records to `log_path`. The terminal is owned by the UI, so
/// nothing is written to stderr. `RUST_LOG` overrides the default filter.
pub(crate) fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format_timestamp_millis()
        .try_init()
        .context("Failed to initialise logging")?;
    Ok(())
}
