mod cli;
mod tui;

pub(crate) use cli::as_cli;
pub(crate) use tui::as_tui;

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

/// `~/spendtui-export-<today>.csv`, expanded.
pub(crate) fn default_export_path() -> String {
    let today = chrono::Local::now().format("%Y-%m-%d");
    shellexpand(&format!("~/spendtui-export-{today}.csv"))
}
