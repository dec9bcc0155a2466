use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::{Result, TallyError};

/// Direction of a transaction. The amount itself is always non-negative;
/// whether it adds to or subtracts from the balance is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }
}

impl FromStr for Kind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "income" => Ok(Kind::Income),
            "expense" => Ok(Kind::Expense),
            other => Err(TallyError::Validation(format!(
                "unknown kind '{other}', expected 'income' or 'expense'"
            ))),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: i64,
    pub kind: Kind,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Validated field values for a transaction that has no row id yet.
/// Used for both inserts and full-record updates.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub kind: Kind,
    pub category: String,
    pub amount: f64,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl TransactionInput {
    pub fn new(
        kind: Kind,
        category: &str,
        amount: f64,
        description: Option<&str>,
        date: NaiveDate,
    ) -> Result<Self> {
        let category = category.trim();
        if category.is_empty() {
            return Err(TallyError::Validation("category must not be empty".into()));
        }
        if !amount.is_finite() || amount < 0.0 {
            return Err(TallyError::Validation(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }
        Ok(Self {
            kind,
            category: category.to_string(),
            amount,
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            date,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MonthlyBudget {
    pub id: i64,
    /// Zero-padded two-digit month, "01".."12".
    pub month: String,
    /// Four-digit year.
    pub year: String,
    pub amount: f64,
}

/// A validated (month, year) pair, kept both as the zero-padded text the
/// budget table stores and as calendar numbers for date matching.
#[derive(Debug, Clone)]
pub struct MonthKey {
    pub month: String,
    pub year: String,
    pub month_num: u32,
    pub year_num: i32,
}

impl MonthKey {
    /// Accepts "1" or "01" for the month and normalizes to the padded form.
    pub fn parse(month: &str, year: &str) -> Result<Self> {
        let month_num: u32 = month.trim().parse().map_err(|_| {
            TallyError::Validation(format!("invalid month '{month}', expected 01-12"))
        })?;
        if !(1..=12).contains(&month_num) {
            return Err(TallyError::Validation(format!(
                "month {month_num} out of range, expected 01-12"
            )));
        }
        let year_num: i32 = year.trim().parse().map_err(|_| {
            TallyError::Validation(format!("invalid year '{year}', expected a four-digit year"))
        })?;
        if !(1000..=9999).contains(&year_num) {
            return Err(TallyError::Validation(format!(
                "year {year_num} out of range, expected a four-digit year"
            )));
        }
        Ok(Self {
            month: format!("{month_num:02}"),
            year: format!("{year_num}"),
            month_num,
            year_num,
        })
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| TallyError::Validation(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}
