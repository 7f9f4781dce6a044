mod config;
mod db;
mod export;
mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    config.ensure_data_dir()?;

    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("Warning: logging disabled: {e:#}");
    }
    log::debug!("data directory {}", config.data_dir.display());

    let mut db = db::Database::open(&config.db_path())?;

    match args.len() {
        0 | 1 => run::as_tui(&config, &mut db),
        _ => run::as_cli(&args, &config, &mut db),
    }
}
