use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;
use crate::store;

pub fn run(conn: &Connection, output: &str) -> Result<()> {
    let transactions = store::list_transactions(conn)?;

    let path = Path::new(output);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["id", "kind", "category", "amount", "description", "date"])?;
    for t in &transactions {
        writer.write_record([
            t.id.to_string(),
            t.kind.to_string(),
            t.category.clone(),
            format!("{:.2}", t.amount),
            t.description.clone().unwrap_or_default(),
            t.date.format("%Y-%m-%d").to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Exported {} transactions to {}", transactions.len(), path.display());
    Ok(())
}
