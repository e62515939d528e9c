// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::data;
use crate::models::{Category, LedgerError, Transaction, TransactionType};
use crate::store::Store;
use crate::utils::{maybe_print_json, pretty_table, slugify};
use anyhow::{Result, bail};

const DEFAULT_INCOME_COLOR: &str = "#22C55E";
const DEFAULT_EXPENSE_COLOR: &str = "#EF4444";

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
    let name = sub.get_one::<String>("name").unwrap();
    let name_en = sub.get_one::<String>("name-en").map(|s| s.as_str());
    let r#type: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let color = sub.get_one::<String>("color").map(|s| s.as_str());

    let mut categories = store.load_categories();
    if let Some(category) = add_category(&mut categories, name, name_en, r#type, color)? {
        store.save_categories(&categories)?;
        println!("Added category '{}' ({})", category.name, category.id);
    }
    Ok(())
}

/// Append a new category. An all-whitespace name is dropped without
/// creating anything; a name whose slug collides with an existing id is
/// refused.
pub fn add_category(
    categories: &mut Vec<Category>,
    name: &str,
    name_en: Option<&str>,
    r#type: TransactionType,
    color: Option<&str>,
) -> Result<Option<Category>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    let id = slugify(name);
    if categories.iter().any(|c| c.id == id) {
        return Err(LedgerError::DuplicateCategory(id).into());
    }
    let default_color = match r#type {
        TransactionType::Income => DEFAULT_INCOME_COLOR,
        TransactionType::Expense => DEFAULT_EXPENSE_COLOR,
    };
    let category = Category {
        id,
        name: name.to_string(),
        name_en: name_en
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(name)
            .to_string(),
        r#type,
        color: color.unwrap_or(default_color).to_string(),
    };
    categories.push(category.clone());
    Ok(Some(category))
}

/// Remove a category, refusing while any transaction references it. No
/// partial or cascading delete: a refusal leaves both collections
/// untouched.
pub fn remove_category(
    categories: &mut Vec<Category>,
    transactions: &[Transaction],
    id: &str,
) -> Result<Category, LedgerError> {
    let pos = categories
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| LedgerError::UnknownCategory(id.to_string()))?;
    if transactions.iter().any(|t| t.category_id == id) {
        return Err(LedgerError::CategoryInUse(id.to_string()));
    }
    Ok(categories.remove(pos))
}

fn rm(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut categories = store.load_categories();
    let transactions = store.load_transactions();
    match remove_category(&mut categories, &transactions, id) {
        Ok(removed) => {
            store.save_categories(&categories)?;
            println!("Removed category '{}'", removed.name);
            Ok(())
        }
        Err(LedgerError::CategoryInUse(_)) => {
            let labels = data::labels(store.load_settings().language);
            bail!("{}", labels.cant_delete_category);
        }
        Err(err) => Err(err.into()),
    }
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let categories = store.load_categories();
    if maybe_print_json(json_flag, jsonl_flag, &categories)? {
        return Ok(());
    }
    let language = store.load_settings().language;
    let labels = data::labels(language);
    let rows: Vec<Vec<String>> = categories
        .iter()
        .map(|c| {
            vec![
                c.id.clone(),
                data::category_label(&categories, &c.id, language).to_string(),
                c.r#type.as_str().to_string(),
                c.color.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", labels.category, labels.r#type, "Color"], rows)
    );
    Ok(())
}
