use colored::Colorize;
use comfy_table::{Cell, Table};
use rusqlite::Connection;

use crate::error::Result;
use crate::fmt::money;
use crate::models::{self, Kind, TransactionInput};
use crate::store;

fn parse_input(
    kind: &str,
    category: &str,
    amount: f64,
    description: Option<&str>,
    date: &str,
) -> Result<TransactionInput> {
    let kind: Kind = kind.parse()?;
    let date = models::parse_date(date)?;
    TransactionInput::new(kind, category, amount, description, date)
}

pub fn add(
    conn: &Connection,
    kind: &str,
    category: &str,
    amount: f64,
    description: Option<&str>,
    date: &str,
) -> Result<()> {
    let input = parse_input(kind, category, amount, description, date)?;
    let id = store::insert_transaction(conn, &input)?;
    println!(
        "Added transaction #{id}: {} {} in '{}'",
        input.kind,
        money(input.amount),
        input.category
    );
    Ok(())
}

pub fn list(conn: &Connection) -> Result<()> {
    let transactions = store::list_transactions(conn)?;
    if transactions.is_empty() {
        println!("No transactions recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Kind", "Category", "Amount", "Description"]);
    for t in &transactions {
        let amount = match t.kind {
            Kind::Income => money(t.amount).green().to_string(),
            Kind::Expense => money(t.amount).red().to_string(),
        };
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(t.date.format("%Y-%m-%d")),
            Cell::new(t.kind),
            Cell::new(&t.category),
            Cell::new(amount),
            Cell::new(t.description.as_deref().unwrap_or("")),
        ]);
    }
    println!("Transactions\n{table}");
    Ok(())
}

pub fn edit(
    conn: &Connection,
    id: i64,
    kind: &str,
    category: &str,
    amount: f64,
    description: Option<&str>,
    date: &str,
) -> Result<()> {
    let input = parse_input(kind, category, amount, description, date)?;
    store::update_transaction(conn, id, &input)?;
    println!("Updated transaction #{id}");
    Ok(())
}

pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    store::delete_transaction(conn, id)?;
    println!("Deleted transaction #{id}");
    Ok(())
}
