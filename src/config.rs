use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const DATA_DIR_ENV: &str = "SPENDTUI_DATA_DIR";
pub(crate) const CURRENCY_ENV: &str = "SPENDTUI_CURRENCY";

const DEFAULT_CURRENCY: &str = "₹";
const DB_FILE: &str = "spendtui.db";
const LOG_FILE: &str = "spendtui.log";

/// Runtime settings, resolved once at startup from the environment.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    pub(crate) currency: String,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let data_dir = match lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(crate::run::shellexpand(dir.trim())),
            None => directories::ProjectDirs::from("com", "spendtui", "SpendTUI")
                .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
                .data_dir()
                .to_path_buf(),
        };
        let currency = lookup(CURRENCY_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        Ok(Self { data_dir, currency })
    }

    pub(crate) fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })
    }

    pub(crate) fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
