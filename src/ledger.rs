use std::collections::HashMap;

use chrono::Datelike;

use crate::models::{Kind, Transaction};

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Sum income and expense amounts over any slice of transactions.
/// Works on a filtered subsequence just as well as the full ledger.
pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;
    for t in transactions {
        match t.kind {
            Kind::Income => income += t.amount,
            Kind::Expense => expense += t.amount,
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

// ---------------------------------------------------------------------------
// Monthly expenditure
// ---------------------------------------------------------------------------

// Exact calendar-field comparison; month 1 must never match November.
fn in_month(t: &Transaction, month: u32, year: i32) -> bool {
    t.kind == Kind::Expense && t.date.month() == month && t.date.year() == year
}

pub fn monthly_expenditure(transactions: &[Transaction], month: u32, year: i32) -> f64 {
    transactions
        .iter()
        .filter(|t| in_month(t, month, year))
        .map(|t| t.amount)
        .sum()
}

// ---------------------------------------------------------------------------
// Category breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    pub category: String,
    pub total: f64,
}

/// Per-category expense sums for one month, sorted descending by spend.
/// Categories with equal sums keep their first-appearance order (the sort
/// is stable), so the result is deterministic for a given input sequence.
pub fn expenditure_by_category(
    transactions: &[Transaction],
    month: u32,
    year: i32,
) -> Vec<CategorySpend> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, f64> = HashMap::new();
    for t in transactions.iter().filter(|t| in_month(t, month, year)) {
        if !sums.contains_key(t.category.as_str()) {
            order.push(&t.category);
        }
        *sums.entry(&t.category).or_insert(0.0) += t.amount;
    }

    let mut breakdown: Vec<CategorySpend> = order
        .into_iter()
        .map(|category| CategorySpend {
            category: category.to_string(),
            total: sums[category],
        })
        .collect();
    breakdown.sort_by(|a, b| b.total.total_cmp(&a.total));
    breakdown
}
