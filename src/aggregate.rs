// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Income/expense/balance totals over any transaction sequence.
/// Amounts accumulate as decimals; rounding is left to presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

pub fn totals<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Totals {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Income => total_income += t.amount,
            TransactionType::Expense => total_expenses += t.amount,
        }
    }
    Totals {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    }
}

/// Transactions falling inside the inclusive [start, end] date window,
/// in stored order.
pub fn in_window<'a>(
    transactions: &'a [Transaction],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| start <= t.date && t.date <= end)
        .collect()
}

pub fn on_date<'a>(transactions: &'a [Transaction], date: NaiveDate) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| t.date == date).collect()
}

/// Most recent first. The sort is stable, so same-date entries keep
/// their insertion order.
pub fn recent_first(transactions: &mut [&Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn split_by_type<'a>(
    transactions: &[&'a Transaction],
) -> (Vec<&'a Transaction>, Vec<&'a Transaction>) {
    transactions
        .iter()
        .copied()
        .partition(|t| t.r#type == TransactionType::Income)
}
