// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Language, TransactionType};

/// Categories seeded when the "categories" key is absent from the store.
pub fn seed_categories() -> Vec<Category> {
    let expense: [(&str, &str, &str, &str); 8] = [
        ("food", "Comida", "Food", "#EF4444"),
        ("transport", "Transporte", "Transport", "#F59E0B"),
        ("entertainment", "Entretenimiento", "Entertainment", "#10B981"),
        ("shopping", "Compras", "Shopping", "#6366F1"),
        ("health", "Salud", "Health", "#EC4899"),
        ("gifts", "Regalos", "Gifts", "#8B5CF6"),
        ("vacation", "Vacaciones", "Vacation", "#14B8A6"),
        ("bills", "Facturas", "Bills", "#F97316"),
    ];
    let income: [(&str, &str, &str, &str); 4] = [
        ("salary", "Salario", "Salary", "#22C55E"),
        ("freelance", "Trabajo Freelance", "Freelance Work", "#06B6D4"),
        ("investments", "Inversiones", "Investments", "#3B82F6"),
        ("gifts-received", "Regalos Recibidos", "Gifts Received", "#A855F7"),
    ];

    let build = |r#type: TransactionType, (id, name, name_en, color): (&str, &str, &str, &str)| {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            name_en: name_en.to_string(),
            r#type,
            color: color.to_string(),
        }
    };

    expense
        .into_iter()
        .map(|c| build(TransactionType::Expense, c))
        .chain(income.into_iter().map(|c| build(TransactionType::Income, c)))
        .collect()
}

/// Output strings per display language.
pub struct Labels {
    pub income: &'static str,
    pub expenses: &'static str,
    pub balance: &'static str,
    pub monthly_income: &'static str,
    pub monthly_expenses: &'static str,
    pub no_income: &'static str,
    pub no_expenses: &'static str,
    pub no_transactions: &'static str,
    pub cant_delete_category: &'static str,
    pub delete_confirmation: &'static str,
    pub date: &'static str,
    pub r#type: &'static str,
    pub amount: &'static str,
    pub category: &'static str,
    pub note: &'static str,
    pub week_days: [&'static str; 7],
}

const ES: Labels = Labels {
    income: "Ingresos",
    expenses: "Gastos",
    balance: "Balance",
    monthly_income: "Ingresos del Mes",
    monthly_expenses: "Gastos del Mes",
    no_income: "No hay ingresos este mes",
    no_expenses: "No hay gastos este mes",
    no_transactions: "No hay transacciones",
    cant_delete_category: "No se puede eliminar una categoría que tiene transacciones asociadas",
    delete_confirmation: "¿Estás seguro de que quieres eliminar esta transacción?",
    date: "Fecha",
    r#type: "Tipo",
    amount: "Cantidad",
    category: "Categoría",
    note: "Nota",
    week_days: ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"],
};

const EN: Labels = Labels {
    income: "Income",
    expenses: "Expenses",
    balance: "Balance",
    monthly_income: "Monthly Income",
    monthly_expenses: "Monthly Expenses",
    no_income: "No income this month",
    no_expenses: "No expenses this month",
    no_transactions: "No transactions",
    cant_delete_category: "Cannot delete a category that has associated transactions",
    delete_confirmation: "Are you sure you want to delete this transaction?",
    date: "Date",
    r#type: "Type",
    amount: "Amount",
    category: "Category",
    note: "Note",
    week_days: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

/// Resolve a category id to its display label for the given language.
/// Dangling references resolve to an empty label.
pub fn category_label<'a>(categories: &'a [Category], id: &str, language: Language) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| match language {
            Language::Es => c.name.as_str(),
            Language::En => c.name_en.as_str(),
        })
        .unwrap_or("")
}
