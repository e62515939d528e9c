// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use gastos::commands::categories::{add_category, remove_category};
use gastos::data::seed_categories;
use gastos::models::{LedgerError, Transaction, TransactionType};

fn tx_for(category_id: &str) -> Transaction {
    Transaction {
        id: "t1".to_string(),
        amount: "12".parse().unwrap(),
        r#type: TransactionType::Expense,
        category_id: category_id.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        note: None,
    }
}

#[test]
fn referenced_category_delete_is_blocked() {
    let mut categories = seed_categories();
    let transactions = vec![tx_for("food")];
    let before = categories.len();

    let err = remove_category(&mut categories, &transactions, "food").unwrap_err();
    assert_eq!(err, LedgerError::CategoryInUse("food".to_string()));
    assert_eq!(categories.len(), before);
    assert!(categories.iter().any(|c| c.id == "food"));
}

#[test]
fn unreferenced_category_deletes_immediately() {
    let mut categories = seed_categories();
    let removed = remove_category(&mut categories, &[], "transport").unwrap();
    assert_eq!(removed.id, "transport");
    assert_eq!(categories.len(), 11);
}

#[test]
fn unknown_category_delete_errors() {
    let mut categories = seed_categories();
    let err = remove_category(&mut categories, &[], "ghost").unwrap_err();
    assert_eq!(err, LedgerError::UnknownCategory("ghost".to_string()));
}

#[test]
fn new_category_gets_slug_id_and_default_color() {
    let mut categories = seed_categories();
    let category = add_category(
        &mut categories,
        "  Side   Projects ",
        None,
        TransactionType::Income,
        None,
    )
    .unwrap()
    .unwrap();
    assert_eq!(category.id, "side-projects");
    assert_eq!(category.name, "Side   Projects");
    assert_eq!(category.name_en, "Side   Projects");
    assert_eq!(category.color, "#22C55E");
    assert_eq!(categories.len(), 13);
}

#[test]
fn duplicate_slug_is_refused() {
    let mut categories = seed_categories();
    add_category(
        &mut categories,
        "Comida Extra",
        None,
        TransactionType::Expense,
        None,
    )
    .unwrap();
    // Differs only by case and whitespace, collapses to the same id.
    let err = add_category(
        &mut categories,
        "comida   EXTRA",
        None,
        TransactionType::Expense,
        None,
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<LedgerError>(),
        Some(&LedgerError::DuplicateCategory("comida-extra".to_string()))
    );
    assert_eq!(categories.len(), 13);
}

#[test]
fn blank_name_is_silently_dropped() {
    let mut categories = seed_categories();
    let created = add_category(
        &mut categories,
        "   ",
        None,
        TransactionType::Expense,
        None,
    )
    .unwrap();
    assert!(created.is_none());
    assert_eq!(categories.len(), 12);
}

#[test]
fn explicit_english_name_and_color_are_kept() {
    let mut categories = seed_categories();
    let category = add_category(
        &mut categories,
        "Mascotas",
        Some("Pets"),
        TransactionType::Expense,
        Some("#123456"),
    )
    .unwrap()
    .unwrap();
    assert_eq!(category.name_en, "Pets");
    assert_eq!(category.color, "#123456");
    assert_eq!(category.r#type, TransactionType::Expense);
}
