use rusqlite::Connection;

use crate::error::Result;
use crate::models::{self, Kind, TransactionInput};
use crate::store;

struct DemoTxn {
    kind: Kind,
    category: &'static str,
    amount: f64,
    description: &'static str,
    date: &'static str,
}

// Two months of sample data: June lands within its budget, July runs over,
// so both sides of `tally suggest` can be seen immediately.
const SAMPLE: &[DemoTxn] = &[
    DemoTxn { kind: Kind::Income, category: "salary", amount: 3200.00, description: "June paycheck", date: "2025-06-01" },
    DemoTxn { kind: Kind::Expense, category: "rent", amount: 1200.00, description: "", date: "2025-06-03" },
    DemoTxn { kind: Kind::Expense, category: "groceries", amount: 340.25, description: "", date: "2025-06-12" },
    DemoTxn { kind: Kind::Expense, category: "transport", amount: 95.00, description: "monthly transit pass", date: "2025-06-05" },
    DemoTxn { kind: Kind::Expense, category: "dining", amount: 120.40, description: "", date: "2025-06-21" },
    DemoTxn { kind: Kind::Income, category: "salary", amount: 3200.00, description: "July paycheck", date: "2025-07-01" },
    DemoTxn { kind: Kind::Expense, category: "rent", amount: 1200.00, description: "", date: "2025-07-03" },
    DemoTxn { kind: Kind::Expense, category: "groceries", amount: 410.80, description: "", date: "2025-07-14" },
    DemoTxn { kind: Kind::Expense, category: "dining", amount: 260.15, description: "birthday dinner", date: "2025-07-19" },
    DemoTxn { kind: Kind::Expense, category: "fun", amount: 180.00, description: "concert tickets", date: "2025-07-22" },
    DemoTxn { kind: Kind::Expense, category: "transport", amount: 105.00, description: "", date: "2025-07-05" },
];

pub fn run(conn: &Connection) -> Result<()> {
    for t in SAMPLE {
        let description = if t.description.is_empty() { None } else { Some(t.description) };
        let input = TransactionInput::new(
            t.kind,
            t.category,
            t.amount,
            description,
            models::parse_date(t.date)?,
        )?;
        store::insert_transaction(conn, &input)?;
    }
    store::insert_budget(conn, "06", "2025", 1800.0)?;
    store::insert_budget(conn, "07", "2025", 1800.0)?;

    println!("Loaded {} sample transactions and 2 monthly budgets.", SAMPLE.len());
    println!("Try `tally report totals` or `tally suggest --month 07 --year 2025`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{get_connection, init_db};
    use crate::ledger;

    #[test]
    fn test_demo_seeds_both_budget_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        run(&conn).unwrap();

        let transactions = store::list_transactions(&conn).unwrap();
        assert_eq!(transactions.len(), SAMPLE.len());

        let june = ledger::monthly_expenditure(&transactions, 6, 2025);
        let july = ledger::monthly_expenditure(&transactions, 7, 2025);
        let budget = store::find_budget(&conn, "06", "2025").unwrap().unwrap();
        assert!(june <= budget.amount, "June should stay within budget");
        assert!(july > budget.amount, "July should run over budget");
    }
}
