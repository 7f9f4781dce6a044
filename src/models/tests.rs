#![allow(clippy::unwrap_used)]

use super::transaction::INCOME_CATEGORY;
use super::*;

// ── Transaction ───────────────────────────────────────────────

fn make_txn(amount: f64) -> Transaction {
    Transaction {
        id: "abc123".into(),
        title: "Test".into(),
        amount,
        category: "Food".into(),
        date: Some("2024-01-15".into()),
        status: Status::Active,
    }
}

#[test]
fn test_income() {
    let txn = make_txn(100.0);
    assert!(txn.is_income());
    assert!(!txn.is_expense());
}

#[test]
fn test_expense() {
    let txn = make_txn(-50.0);
    assert!(!txn.is_income());
    assert!(txn.is_expense());
}

#[test]
fn test_abs_amount() {
    assert_eq!(make_txn(-42.99).abs_amount(), 42.99);
    assert_eq!(make_txn(42.99).abs_amount(), 42.99);
}

#[test]
fn test_status_defaults_to_active() {
    let txn = make_txn(1.0);
    assert!(txn.is_active());
    assert!(!txn.is_pending());
    assert_eq!(Status::default(), Status::Active);
}

#[test]
fn test_signed_amount_income_is_positive() {
    assert_eq!(signed_amount(2000.0, INCOME_CATEGORY), 2000.0);
    assert_eq!(signed_amount(-2000.0, INCOME_CATEGORY), 2000.0);
}

#[test]
fn test_signed_amount_other_categories_negative() {
    for cat in DEFAULT_CATEGORIES.iter().filter(|c| **c != INCOME_CATEGORY) {
        assert_eq!(signed_amount(4.5, cat), -4.5, "category {cat}");
        assert_eq!(signed_amount(-4.5, cat), -4.5, "category {cat}");
    }
}

#[test]
fn test_signed_amount_sentinel_is_case_sensitive() {
    assert_eq!(signed_amount(10.0, "income"), -10.0);
}

// ── Serialization ─────────────────────────────────────────────

#[test]
fn test_serialize_active_omits_pending() {
    let json = serde_json::to_value(make_txn(-4.5)).unwrap();
    assert_eq!(json["id"], "abc123");
    assert_eq!(json["amount"], -4.5);
    assert_eq!(json["date"], "2024-01-15");
    assert!(json.get("pending").is_none());
    assert!(json.get("status").is_none());
}

#[test]
fn test_serialize_pending_sets_flag() {
    let mut txn = make_txn(-4.5);
    txn.status = Status::PendingDeletion;
    let json = serde_json::to_value(txn).unwrap();
    assert_eq!(json["pending"], true);
}

#[test]
fn test_serialize_missing_date_as_empty_string() {
    let mut txn = make_txn(-4.5);
    txn.date = None;
    let json = serde_json::to_value(txn).unwrap();
    assert_eq!(json["date"], "");
}

#[test]
fn test_deserialize_minimal_record() {
    let txn: Transaction =
        serde_json::from_str(r#"{"id":"x1","title":"Rent","amount":-900,"category":"Bills"}"#)
            .unwrap();
    assert_eq!(txn.id, "x1");
    assert_eq!(txn.amount, -900.0);
    assert_eq!(txn.date, None);
    assert_eq!(txn.status, Status::Active);
}

#[test]
fn test_deserialize_empty_or_null_date_is_none() {
    let a: Transaction = serde_json::from_str(
        r#"{"id":"a","title":"t","amount":1,"category":"Income","date":""}"#,
    )
    .unwrap();
    let b: Transaction = serde_json::from_str(
        r#"{"id":"b","title":"t","amount":1,"category":"Income","date":null}"#,
    )
    .unwrap();
    assert_eq!(a.date, None);
    assert_eq!(b.date, None);
}

#[test]
fn test_deserialize_pending_flag() {
    let txn: Transaction = serde_json::from_str(
        r#"{"id":"p","title":"t","amount":-3,"category":"Food","date":"","pending":true}"#,
    )
    .unwrap();
    assert!(txn.is_pending());
}

#[test]
fn test_deserialize_rejects_missing_title() {
    let result: Result<Transaction, _> =
        serde_json::from_str(r#"{"id":"p","amount":-3,"category":"Food"}"#);
    assert!(result.is_err());
}

// ── Theme ─────────────────────────────────────────────────────

#[test]
fn test_theme_as_str() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(format!("{}", Theme::Dark), "dark");
}

#[test]
fn test_theme_parse() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse(" Dark "), Some(Theme::Dark));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn test_theme_toggled() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}
