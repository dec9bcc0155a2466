use rusqlite::{Connection, OptionalExtension};

use crate::error::{Result, TallyError};
use crate::models::{self, MonthlyBudget, Transaction, TransactionInput};

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

pub fn insert_transaction(conn: &Connection, input: &TransactionInput) -> Result<i64> {
    conn.execute(
        "INSERT INTO transactions (kind, category, amount, description, date) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            input.kind.as_str(),
            input.category,
            input.amount,
            input.description,
            input.date.format("%Y-%m-%d").to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_transactions(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, category, amount, description, date \
         FROM transactions ORDER BY date, id",
    )?;
    let rows: Vec<(i64, String, String, f64, Option<String>, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut transactions = Vec::with_capacity(rows.len());
    for (id, kind, category, amount, description, date) in rows {
        transactions.push(Transaction {
            id,
            kind: kind.parse()?,
            category,
            amount,
            description,
            date: models::parse_date(&date)?,
        });
    }
    Ok(transactions)
}

/// Replaces every field of the record, like the edit form it backs.
pub fn update_transaction(conn: &Connection, id: i64, input: &TransactionInput) -> Result<()> {
    let changed = conn.execute(
        "UPDATE transactions \
         SET kind = ?1, category = ?2, amount = ?3, description = ?4, date = ?5 \
         WHERE id = ?6",
        rusqlite::params![
            input.kind.as_str(),
            input.category,
            input.amount,
            input.description,
            input.date.format("%Y-%m-%d").to_string(),
            id,
        ],
    )?;
    if changed == 0 {
        return Err(TallyError::UnknownTransaction(id));
    }
    Ok(())
}

/// Deleting a missing id is an error, not a silent no-op.
pub fn delete_transaction(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn.execute("DELETE FROM transactions WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(TallyError::UnknownTransaction(id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Monthly budgets (append-only)
// ---------------------------------------------------------------------------

pub fn insert_budget(conn: &Connection, month: &str, year: &str, amount: f64) -> Result<i64> {
    conn.execute(
        "INSERT INTO monthly_budgets (month, year, budget_amount) VALUES (?1, ?2, ?3)",
        rusqlite::params![month, year, amount],
    )?;
    Ok(conn.last_insert_rowid())
}

/// The newest row wins when several budgets exist for the same month.
pub fn find_budget(conn: &Connection, month: &str, year: &str) -> Result<Option<MonthlyBudget>> {
    let budget = conn
        .query_row(
            "SELECT id, month, year, budget_amount FROM monthly_budgets \
             WHERE month = ?1 AND year = ?2 ORDER BY id DESC LIMIT 1",
            [month, year],
            |row| {
                Ok(MonthlyBudget {
                    id: row.get(0)?,
                    month: row.get(1)?,
                    year: row.get(2)?,
                    amount: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(budget)
}

pub fn list_budgets(conn: &Connection) -> Result<Vec<MonthlyBudget>> {
    let mut stmt = conn.prepare(
        "SELECT id, month, year, budget_amount FROM monthly_budgets \
         ORDER BY year, month, id",
    )?;
    let budgets: Vec<MonthlyBudget> = stmt
        .query_map([], |row| {
            Ok(MonthlyBudget {
                id: row.get(0)?,
                month: row.get(1)?,
                year: row.get(2)?,
                amount: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(budgets)
}
