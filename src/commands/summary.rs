// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::calendar::month_window;
use crate::data::{self, Labels};
use crate::models::{Category, Language, Transaction};
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::Local;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let reference = match m.get_one::<String>("month") {
        Some(month) => parse_month(month)?,
        None => Local::now().date_naive(),
    };

    let transactions = store.load_transactions();
    let categories = store.load_categories();
    let settings = store.load_settings();
    let labels = data::labels(settings.language);

    let (start, end) = month_window(reference);
    let mut month_txs = aggregate::in_window(&transactions, start, end);
    aggregate::recent_first(&mut month_txs);
    let totals = aggregate::totals(month_txs.iter().copied());

    if maybe_print_json(json_flag, jsonl_flag, &totals)? {
        return Ok(());
    }

    println!("{}", reference.format("%Y-%m"));
    println!(
        "{}",
        pretty_table(
            &[labels.income, labels.expenses, labels.balance],
            vec![vec![
                fmt_money(&totals.total_income),
                fmt_money(&totals.total_expenses),
                fmt_money(&totals.balance),
            ]],
        )
    );

    let (income, expenses) = aggregate::split_by_type(&month_txs);
    print_listing(
        labels.monthly_income,
        labels.no_income,
        &income,
        &categories,
        settings.language,
        labels,
    );
    print_listing(
        labels.monthly_expenses,
        labels.no_expenses,
        &expenses,
        &categories,
        settings.language,
        labels,
    );
    Ok(())
}

fn print_listing(
    title: &str,
    empty_message: &str,
    transactions: &[&Transaction],
    categories: &[Category],
    language: Language,
    labels: &Labels,
) {
    println!("{}", title);
    if transactions.is_empty() {
        println!("{}", empty_message);
        return;
    }
    let rows: Vec<Vec<String>> = transactions
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                fmt_money(&t.amount),
                data::category_label(categories, &t.category_id, language).to_string(),
                t.note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[labels.date, labels.amount, labels.category, labels.note],
            rows,
        )
    );
}
