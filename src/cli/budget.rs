use comfy_table::{Cell, Table};
use rusqlite::Connection;

use crate::error::{Result, TallyError};
use crate::fmt::money;
use crate::models::MonthKey;
use crate::store;

pub fn set(conn: &Connection, month: &str, year: &str, amount: f64) -> Result<()> {
    let key = MonthKey::parse(month, year)?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(TallyError::Validation(format!(
            "budget amount must be a non-negative number, got {amount}"
        )));
    }

    if let Some(prev) = store::find_budget(conn, &key.month, &key.year)? {
        println!(
            "Superseding earlier budget of {} for {}-{}.",
            money(prev.amount),
            key.month,
            key.year
        );
    }
    store::insert_budget(conn, &key.month, &key.year, amount)?;
    println!("Budget for {}-{} set to {}.", key.month, key.year, money(amount));
    Ok(())
}

pub fn list(conn: &Connection) -> Result<()> {
    let budgets = store::list_budgets(conn)?;
    if budgets.is_empty() {
        println!("No budgets set.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Month", "Year", "Budget"]);
    for b in &budgets {
        table.add_row(vec![
            Cell::new(b.id),
            Cell::new(&b.month),
            Cell::new(&b.year),
            Cell::new(money(b.amount)),
        ]);
    }
    println!("Monthly Budgets\n{table}");
    Ok(())
}
