use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

pub const DB_FILE: &str = "tally.db";

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    kind TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
    category TEXT NOT NULL CHECK (length(category) > 0),
    amount REAL NOT NULL CHECK (amount >= 0),
    description TEXT,
    date TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS monthly_budgets (
    id INTEGER PRIMARY KEY,
    month TEXT NOT NULL,
    year TEXT NOT NULL,
    budget_amount REAL NOT NULL CHECK (budget_amount >= 0),
    created_at TEXT DEFAULT (datetime('now'))
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    #[test]
    fn test_init_db_creates_tables() {
        let (_dir, conn) = test_db();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        for expected in &["transactions", "monthly_budgets"] {
            assert!(tables.contains(&expected.to_string()), "missing table: {expected}");
        }
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn).unwrap();
    }

    #[test]
    fn test_schema_rejects_bad_kind() {
        let (_dir, conn) = test_db();
        let result = conn.execute(
            "INSERT INTO transactions (kind, category, amount, date) VALUES ('transfer', 'x', 1.0, '2024-01-01')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_rejects_negative_amount() {
        let (_dir, conn) = test_db();
        let result = conn.execute(
            "INSERT INTO transactions (kind, category, amount, date) VALUES ('expense', 'x', -1.0, '2024-01-01')",
            [],
        );
        assert!(result.is_err());
    }
}
