// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use gastos::models::{AppSettings, Language, Theme, Transaction, TransactionType};
use gastos::store::Store;

fn setup() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open_at(dir.path()).unwrap();
    (dir, store)
}

fn tx(id: &str, date: &str, amount: &str, r#type: TransactionType) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: amount.parse().unwrap(),
        r#type,
        category_id: "food".to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        note: Some("nota".to_string()),
    }
}

#[test]
fn transactions_round_trip() {
    let (_dir, store) = setup();
    let transactions = vec![
        tx("a", "2024-03-01", "100", TransactionType::Income),
        tx("b", "2024-03-01", "40.50", TransactionType::Expense),
    ];
    store.save_transactions(&transactions).unwrap();
    assert_eq!(store.load_transactions(), transactions);
}

#[test]
fn categories_round_trip() {
    let (_dir, store) = setup();
    let mut categories = store.load_categories();
    categories.retain(|c| c.r#type == TransactionType::Expense);
    store.save_categories(&categories).unwrap();
    assert_eq!(store.load_categories(), categories);
}

#[test]
fn absent_transactions_default_empty() {
    let (_dir, store) = setup();
    assert!(store.load_transactions().is_empty());
}

#[test]
fn absent_categories_default_to_seed() {
    let (_dir, store) = setup();
    let categories = store.load_categories();
    assert_eq!(categories.len(), 12);
    let expenses = categories
        .iter()
        .filter(|c| c.r#type == TransactionType::Expense)
        .count();
    assert_eq!(expenses, 8);
    assert!(categories.iter().any(|c| c.id == "food"));
    assert!(categories.iter().any(|c| c.id == "gifts-received"));
}

#[test]
fn corrupt_values_fall_back_to_defaults() {
    let (dir, store) = setup();
    std::fs::write(dir.path().join("transactions.json"), "{ not json").unwrap();
    std::fs::write(dir.path().join("categories.json"), "[[[").unwrap();
    std::fs::write(dir.path().join("app-storage.json"), "42").unwrap();
    assert!(store.load_transactions().is_empty());
    assert_eq!(store.load_categories().len(), 12);
    assert_eq!(store.load_settings(), AppSettings::default());
}

#[test]
fn corrupt_value_is_replaced_on_next_save() {
    let (dir, store) = setup();
    let path = dir.path().join("transactions.json");
    std::fs::write(&path, "garbage").unwrap();
    let transactions = vec![tx("a", "2024-03-01", "1", TransactionType::Expense)];
    store.save_transactions(&transactions).unwrap();
    assert_eq!(store.load_transactions(), transactions);
}

#[test]
fn settings_default_and_round_trip() {
    let (_dir, store) = setup();
    let settings = store.load_settings();
    assert_eq!(settings.language, Language::Es);
    assert_eq!(settings.theme, Theme::Light);

    let changed = AppSettings {
        language: Language::En,
        theme: Theme::Dark,
    };
    store.save_settings(&changed).unwrap();
    assert_eq!(store.load_settings(), changed);
}

#[test]
fn wire_format_uses_camel_case_keys() {
    let (dir, store) = setup();
    let transactions = vec![tx("a", "2024-03-01", "9.99", TransactionType::Expense)];
    store.save_transactions(&transactions).unwrap();
    let raw = std::fs::read_to_string(dir.path().join("transactions.json")).unwrap();
    assert!(raw.contains("\"categoryId\""));
    assert!(raw.contains("\"2024-03-01\""));
    assert!(raw.contains("\"expense\""));
}
