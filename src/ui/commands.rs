use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Instant;

use super::app::App;
use crate::db::Database;
use crate::export::CsvExporter;
use crate::models::Theme;
use crate::store::Filter;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Database) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("a", "Add a transaction", cmd_add, r);
    register_command!("add", "Add a transaction", cmd_add, r);
    register_command!(
        "filter",
        "Show one category (e.g. :filter Food, :filter all)",
        cmd_filter,
        r
    );
    register_command!("f", "Show one category (e.g. :f Food)", cmd_filter, r);
    register_command!(
        "theme",
        "Switch theme (e.g. :theme dark, :theme to toggle)",
        cmd_theme,
        r
    );
    register_command!(
        "export",
        "Export transactions to CSV (e.g. :export ~/spend.csv)",
        cmd_export,
        r
    );
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, db)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn cmd_quit(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_add(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.open_form();
    Ok(())
}

fn cmd_filter(args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.set_filter(Filter::parse(args), Instant::now());
    Ok(())
}

fn cmd_theme(args: &str, app: &mut App, db: &mut Database) -> anyhow::Result<()> {
    if args.is_empty() {
        app.toggle_theme(db);
        return Ok(());
    }
    match Theme::parse(args) {
        Some(theme) if theme == app.themes.current() => app.set_status(format!("Theme: {theme}")),
        Some(_) => app.toggle_theme(db),
        None => app.set_status(format!("Unknown theme '{args}' (light or dark)")),
    }
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        crate::run::default_export_path()
    } else {
        crate::run::shellexpand(args)
    };

    match CsvExporter::to_path(std::path::Path::new(&path), app.store.all()) {
        Ok(0) => app.set_status("No transactions to export"),
        Ok(count) => app.set_status(format!("Exported {count} transactions to {path}")),
        Err(e) => {
            log::error!("{e:#}");
            app.set_status(format!("Export failed: {e:#}"));
        }
    }
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _db: &mut Database) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
