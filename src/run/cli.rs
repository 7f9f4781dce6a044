use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;
use crate::db::Database;
use crate::export::CsvExporter;
use crate::models::{Theme, Transaction};
use crate::store::{Filter, ThemeStore, TransactionStore};
use crate::ui::util::{format_currency, truncate};

pub(crate) fn as_cli(args: &[String], config: &Config, db: &mut Database) -> Result<()> {
    let currency = config.currency.as_str();
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], currency, db),
        "list" | "ls" => cli_list(&args[2..], currency, db),
        "delete" | "rm" => cli_delete(&args[2..], db),
        "undo" => cli_undo(&args[2..], db),
        "purge" => cli_purge(&args[2..], db),
        "summary" | "s" => cli_summary(currency, db),
        "export" => cli_export(&args[2..], db),
        "theme" => cli_theme(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("spendtui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("SpendTUI - local-only expense tracker");
    println!();
    println!("Usage: spendtui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                               Launch interactive TUI");
    println!("  add <title> <amount> <category> [date]  Record a transaction");
    println!("  list [category|all]                  List transactions, newest first");
    println!("  delete <id>                          Mark a transaction for deletion");
    println!("  undo <id>                            Restore a transaction marked for deletion");
    println!("  purge <id>                           Delete a transaction permanently");
    println!("  summary                              Print balance, income and expenses");
    println!("  export [path]                        Export transactions to CSV");
    println!("  theme [light|dark]                   Show or set the UI theme");
    println!("  --help, -h                           Show this help");
    println!("  --version, -V                        Show version");
    println!();
    println!("Environment:");
    println!("  SPENDTUI_DATA_DIR                    Where the database and log live");
    println!("  SPENDTUI_CURRENCY                    Currency symbol (default ₹)");
    println!("  RUST_LOG                             Log filter (default spendtui=info)");
}

fn cli_add(args: &[String], currency: &str, db: &mut Database) -> Result<()> {
    let [title, amount, category, rest @ ..] = args else {
        anyhow::bail!("Usage: spendtui add <title> <amount> <category> [date]");
    };
    let date = rest.first().map(String::as_str).unwrap_or("");

    let mut store = TransactionStore::load(db);
    let txn = store.add(db, title, amount, category, date)?;
    println!("Added {}", describe(&txn, currency));
    Ok(())
}

fn cli_list(args: &[String], currency: &str, db: &mut Database) -> Result<()> {
    let filter = Filter::parse(args.first().map(String::as_str).unwrap_or(""));
    let store = TransactionStore::load(db);
    let list = store.list(&filter);
    if list.is_empty() {
        println!("No transactions ({filter})");
        return Ok(());
    }

    println!(
        "{:<16} {:<24} {:>14} {:<14} {:<12} Status",
        "ID", "Title", "Amount", "Category", "Date"
    );
    println!("{}", "─".repeat(90));
    for txn in list {
        println!(
            "{:<16} {:<24} {:>14} {:<14} {:<12} {}",
            txn.id,
            truncate(&txn.title, 24),
            format_currency(txn.amount, currency),
            txn.category,
            txn.date_str(),
            if txn.is_pending() { "pending" } else { "" },
        );
    }
    Ok(())
}

fn cli_delete(args: &[String], db: &mut Database) -> Result<()> {
    let id = require_id(args, "delete")?;
    let mut store = TransactionStore::load(db);
    if store.mark_pending(db, id)? {
        println!("Marked {id} for deletion (spendtui undo {id} to restore)");
    }
    Ok(())
}

fn cli_undo(args: &[String], db: &mut Database) -> Result<()> {
    let id = require_id(args, "undo")?;
    let mut store = TransactionStore::load(db);
    if store.undo_pending(db, id)? {
        println!("Restored {id}");
    }
    Ok(())
}

fn cli_purge(args: &[String], db: &mut Database) -> Result<()> {
    let id = require_id(args, "purge")?;
    let mut store = TransactionStore::load(db);
    if store.permanent_delete(db, id)? {
        println!("Deleted {id}");
    }
    Ok(())
}

fn cli_summary(currency: &str, db: &mut Database) -> Result<()> {
    let store = TransactionStore::load(db);
    let totals = store.totals();
    let pending = store.all().iter().filter(|t| t.is_pending()).count();

    println!("SpendTUI");
    println!("{}", "─".repeat(40));
    println!("  Balance:    {}", format_currency(totals.balance, currency));
    println!("  Income:     {}", format_currency(totals.income, currency));
    println!("  Expenses:   {}", format_currency(totals.expenses, currency));
    println!("  Total Txns: {}", store.len());
    if pending > 0 {
        println!("  Pending:    {pending} (not counted)");
    }
    Ok(())
}

fn cli_export(args: &[String], db: &mut Database) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| super::shellexpand(a))
        .unwrap_or_else(super::default_export_path);

    let store = TransactionStore::load(db);
    let count = CsvExporter::to_path(Path::new(&output_path), store.all())?;
    if count == 0 {
        println!("No transactions to export");
    } else {
        println!("Exported {count} transactions to {output_path}");
    }
    Ok(())
}

fn cli_theme(args: &[String], db: &mut Database) -> Result<()> {
    let mut themes = ThemeStore::load(db);
    let Some(arg) = args.first() else {
        println!("{}", themes.current());
        return Ok(());
    };
    let theme = Theme::parse(arg)
        .with_context(|| format!("Unknown theme '{arg}' (expected light or dark)"))?;
    themes.set(db, theme)?;
    println!("Theme set to {theme}");
    Ok(())
}

fn require_id<'a>(args: &'a [String], command: &str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .with_context(|| format!("Usage: spendtui {command} <id>"))
}

fn describe(txn: &Transaction, currency: &str) -> String {
    let date = match txn.date_str() {
        "" => String::new(),
        d => format!(" on {d}"),
    };
    format!(
        "{} '{}' {} [{}]{date}",
        txn.id,
        txn.title,
        format_currency(txn.amount, currency),
        txn.category,
    )
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
