use std::path::Path;

use rusqlite::Connection;

use crate::db::DB_FILE;
use crate::error::Result;

pub fn run(conn: &Connection, data_dir: &Path) -> Result<()> {
    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", data_dir.join(DB_FILE).display());

    let transactions: i64 = conn.query_row("SELECT count(*) FROM transactions", [], |r| r.get(0))?;
    let budgets: i64 = conn.query_row("SELECT count(*) FROM monthly_budgets", [], |r| r.get(0))?;

    println!();
    println!("Transactions:  {transactions}");
    println!("Budgets:       {budgets}");
    Ok(())
}
