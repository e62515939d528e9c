// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::calendar::month_window;
use crate::data;
use crate::models::{LedgerError, Transaction, TransactionType};
use crate::store::Store;
use crate::utils::{
    confirm, fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table,
};
use anyhow::{Result, ensure};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount_raw = sub.get_one::<String>("amount").unwrap();
    let category = sub.get_one::<String>("category").unwrap().trim();
    // An empty amount or category drops the submission without creating
    // anything.
    if amount_raw.trim().is_empty() || category.is_empty() {
        return Ok(());
    }
    let amount = parse_decimal(amount_raw)?;
    ensure!(
        amount >= Decimal::ZERO,
        "Amount must be non-negative, got {}",
        amount
    );
    let r#type: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let note = sub
        .get_one::<String>("note")
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let tx = Transaction {
        id: Uuid::new_v4().to_string(),
        amount,
        r#type,
        category_id: category.to_string(),
        date,
        note,
    };
    let mut transactions = store.load_transactions();
    transactions.push(tx);
    store.save_transactions(&transactions)?;
    println!(
        "Recorded {} {} on {} ({})",
        r#type.as_str(),
        fmt_money(&amount),
        date,
        category
    );
    Ok(())
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut transactions = store.load_transactions();
    let pos = transactions
        .iter()
        .position(|t| t.id == *id)
        .ok_or_else(|| LedgerError::UnknownTransaction(id.clone()))?;

    if !sub.get_flag("yes") {
        let labels = data::labels(store.load_settings().language);
        if !confirm(labels.delete_confirmation)? {
            return Ok(());
        }
    }

    let removed = transactions.remove(pos);
    store.save_transactions(&transactions)?;
    println!(
        "Removed {} {} from {}",
        removed.r#type.as_str(),
        fmt_money(&removed.amount),
        removed.date
    );
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data_rows = query_rows(store, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &data_rows)? {
        return Ok(());
    }
    let labels = data::labels(store.load_settings().language);
    if data_rows.is_empty() {
        println!("{}", labels.no_transactions);
        return Ok(());
    }
    let rows: Vec<Vec<String>> = data_rows
        .iter()
        .map(|r| {
            vec![
                r.date.clone(),
                r.r#type.clone(),
                r.amount.clone(),
                r.category.clone(),
                r.note.clone(),
                r.id.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                labels.date,
                labels.r#type,
                labels.amount,
                labels.category,
                labels.note,
                "Id",
            ],
            rows,
        )
    );
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub amount: String,
    pub category: String,
    pub note: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let transactions = store.load_transactions();
    let categories = store.load_categories();
    let language = store.load_settings().language;

    let mut selected: Vec<&Transaction> = transactions.iter().collect();
    if let Some(month) = sub.get_one::<String>("month") {
        let (start, end) = month_window(parse_month(month)?);
        selected.retain(|t| start <= t.date && t.date <= end);
    }
    if let Some(date) = sub.get_one::<String>("date") {
        let date = parse_date(date)?;
        selected.retain(|t| t.date == date);
    }
    if let Some(category) = sub.get_one::<String>("category") {
        selected.retain(|t| t.category_id == *category);
    }
    aggregate::recent_first(&mut selected);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        selected.truncate(*limit);
    }

    Ok(selected
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.as_str().to_string(),
            amount: format!("{:.2}", t.amount),
            category: data::category_label(&categories, &t.category_id, language).to_string(),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect())
}
