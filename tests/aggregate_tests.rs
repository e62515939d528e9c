// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use gastos::aggregate::{in_window, on_date, recent_first, split_by_type, totals};
use gastos::models::{Transaction, TransactionType};
use rust_decimal::Decimal;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn tx(id: &str, date: NaiveDate, amount: &str, r#type: TransactionType) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: amount.parse().unwrap(),
        r#type,
        category_id: "food".to_string(),
        date,
        note: None,
    }
}

#[test]
fn empty_sequence_totals_zero() {
    let transactions: Vec<Transaction> = vec![];
    let t = totals(&transactions);
    assert_eq!(t.total_income, Decimal::ZERO);
    assert_eq!(t.total_expenses, Decimal::ZERO);
    assert_eq!(t.balance, Decimal::ZERO);
}

#[test]
fn balance_is_income_minus_expenses() {
    let transactions = vec![
        tx("a", d(2024, 3, 1), "120.50", TransactionType::Income),
        tx("b", d(2024, 3, 2), "30.25", TransactionType::Expense),
        tx("c", d(2024, 3, 3), "10", TransactionType::Expense),
        tx("d", d(2024, 3, 8), "5.75", TransactionType::Income),
    ];
    let t = totals(&transactions);
    assert_eq!(t.balance, t.total_income - t.total_expenses);
    assert_eq!(t.total_income, "126.25".parse().unwrap());
    assert_eq!(t.total_expenses, "40.25".parse().unwrap());
}

#[test]
fn day_aggregate_scenario() {
    let transactions = vec![
        tx("a", d(2024, 3, 1), "100", TransactionType::Income),
        tx("b", d(2024, 3, 1), "40", TransactionType::Expense),
        tx("c", d(2024, 3, 2), "999", TransactionType::Expense),
    ];
    let day = on_date(&transactions, d(2024, 3, 1));
    let t = totals(day.iter().copied());
    assert_eq!(t.total_income, Decimal::from(100));
    assert_eq!(t.total_expenses, Decimal::from(40));
    assert_eq!(t.balance, Decimal::from(60));
}

#[test]
fn window_bounds_are_inclusive() {
    let transactions = vec![
        tx("a", d(2024, 1, 31), "1", TransactionType::Expense),
        tx("b", d(2024, 2, 1), "1", TransactionType::Expense),
        tx("c", d(2024, 2, 29), "1", TransactionType::Expense),
        tx("d", d(2024, 3, 1), "1", TransactionType::Expense),
    ];
    let selected = in_window(&transactions, d(2024, 2, 1), d(2024, 2, 29));
    let ids: Vec<&str> = selected.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
}

#[test]
fn recent_first_is_descending_and_stable() {
    let transactions = vec![
        tx("a", d(2024, 3, 1), "1", TransactionType::Expense),
        tx("b", d(2024, 3, 5), "1", TransactionType::Expense),
        tx("c", d(2024, 3, 1), "1", TransactionType::Income),
    ];
    let mut selected: Vec<&Transaction> = transactions.iter().collect();
    recent_first(&mut selected);
    let ids: Vec<&str> = selected.iter().map(|t| t.id.as_str()).collect();
    // Same-date entries keep insertion order.
    assert_eq!(ids, vec!["b", "a", "c"]);
}

#[test]
fn split_by_type_partitions() {
    let transactions = vec![
        tx("a", d(2024, 3, 1), "1", TransactionType::Income),
        tx("b", d(2024, 3, 2), "1", TransactionType::Expense),
        tx("c", d(2024, 3, 3), "1", TransactionType::Income),
    ];
    let selected: Vec<&Transaction> = transactions.iter().collect();
    let (income, expenses) = split_by_type(&selected);
    assert_eq!(income.len(), 2);
    assert_eq!(expenses.len(), 1);
    assert!(income.iter().all(|t| t.r#type == TransactionType::Income));
}
