#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::path::PathBuf;

use super::*;

fn resolve_with(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::resolve(|key| map.get(key).cloned()).unwrap()
}

#[test]
fn test_data_dir_override() {
    let config = resolve_with(&[(DATA_DIR_ENV, "/tmp/spend")]);
    assert_eq!(config.data_dir, PathBuf::from("/tmp/spend"));
    assert_eq!(config.db_path(), PathBuf::from("/tmp/spend/spendtui.db"));
    assert_eq!(config.log_path(), PathBuf::from("/tmp/spend/spendtui.log"));
}

#[test]
fn test_blank_override_is_ignored() {
    let config = resolve_with(&[(DATA_DIR_ENV, "  "), (CURRENCY_ENV, "")]);
    assert_ne!(config.data_dir, PathBuf::from("  "));
    assert_eq!(config.currency, "₹");
}

#[test]
fn test_currency_override() {
    let config = resolve_with(&[(DATA_DIR_ENV, "/tmp/spend"), (CURRENCY_ENV, "$")]);
    assert_eq!(config.currency, "$");
}

#[test]
fn test_ensure_data_dir_creates_nested() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let config = resolve_with(&[(DATA_DIR_ENV, nested.to_str().unwrap())]);
    config.ensure_data_dir().unwrap();
    assert!(nested.is_dir());
}
