// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Transaction;
use chrono::{Datelike, Days, Months, NaiveDate};

/// One day of the displayed grid. Derived on every render, never stored.
#[derive(Debug)]
pub struct CalendarCell<'a> {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub transactions: Vec<&'a Transaction>,
}

/// Inclusive [first day, last day] of the reference date's month.
pub fn month_window(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = reference.with_day(1).unwrap_or(reference);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
        .unwrap_or(start);
    (start, end)
}

/// The month grid for `reference`, padded back to the Monday on/before
/// the month's first day and forward to the Sunday on/after its last
/// day. The result is always whole weeks: length a multiple of 7, first
/// date a Monday, last a Sunday. Out-of-month days are included with
/// `is_current_month` unset and still carry their matching transactions.
///
/// Comparisons are by date value only; `today` is supplied by the caller
/// so rendering stays pure.
pub fn month_grid<'a>(
    reference: NaiveDate,
    today: NaiveDate,
    transactions: &'a [Transaction],
) -> Vec<CalendarCell<'a>> {
    let (month_start, month_end) = month_window(reference);

    let lead = month_start.weekday().num_days_from_monday() as u64;
    let trail = (6 - month_end.weekday().num_days_from_monday()) as u64;
    let start = month_start
        .checked_sub_days(Days::new(lead))
        .unwrap_or(month_start);
    let end = month_end
        .checked_add_days(Days::new(trail))
        .unwrap_or(month_end);

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| CalendarCell {
            date: day,
            is_current_month: day.year() == reference.year() && day.month() == reference.month(),
            is_today: day == today,
            transactions: transactions.iter().filter(|t| t.date == day).collect(),
        })
        .collect()
}
