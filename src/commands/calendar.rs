// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::calendar::{CalendarCell, month_grid};
use crate::data;
use crate::store::Store;
use crate::utils::parse_month;
use anyhow::Result;
use chrono::{Datelike, Local};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let reference = match m.get_one::<String>("month") {
        Some(month) => parse_month(month)?,
        None => today,
    };
    let transactions = store.load_transactions();
    let labels = data::labels(store.load_settings().language);

    let cells = month_grid(reference, today, &transactions);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(labels.week_days.iter().map(|d| Cell::new(*d)));
    for week in cells.chunks(7) {
        table.add_row(week.iter().map(|cell| Cell::new(render_cell(cell))));
    }

    println!("{}", reference.format("%Y-%m"));
    println!("{}", table);
    Ok(())
}

/// Day number plus income/expense badges. Out-of-month days are shown in
/// parentheses, today in brackets.
fn render_cell(cell: &CalendarCell) -> String {
    let day = cell.date.day();
    let head = if cell.is_today {
        format!("[{:>2}]", day)
    } else if cell.is_current_month {
        format!(" {:>2}", day)
    } else {
        format!("({:>2})", day)
    };
    let totals = aggregate::totals(cell.transactions.iter().copied());
    let mut lines = vec![head];
    if totals.total_income > Decimal::ZERO {
        lines.push(format!("+{:.2}", totals.total_income));
    }
    if totals.total_expenses > Decimal::ZERO {
        lines.push(format!("-{:.2}", totals.total_expenses));
    }
    lines.join("\n")
}
