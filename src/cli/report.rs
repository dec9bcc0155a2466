use colored::Colorize;
use comfy_table::{Cell, Table};
use rusqlite::Connection;

use crate::advisor;
use crate::error::{Result, TallyError};
use crate::fmt::money;
use crate::ledger;
use crate::models::MonthKey;
use crate::store;

pub fn totals(conn: &Connection) -> Result<()> {
    let transactions = store::list_transactions(conn)?;
    let totals = ledger::compute_totals(&transactions);

    let mut table = Table::new();
    table.set_header(vec!["", "Amount"]);
    table.add_row(vec![
        Cell::new("Income".green().bold()),
        Cell::new(money(totals.income)),
    ]);
    table.add_row(vec![
        Cell::new("Expenses".red().bold()),
        Cell::new(money(totals.expense)),
    ]);
    let balance_label = if totals.balance >= 0.0 {
        "Balance".green().bold()
    } else {
        "Balance".red().bold()
    };
    table.add_row(vec![Cell::new(balance_label), Cell::new(money(totals.balance))]);

    println!("Totals\n{table}");
    Ok(())
}

pub fn month(conn: &Connection, month: &str, year: &str) -> Result<()> {
    let key = MonthKey::parse(month, year)?;
    let transactions = store::list_transactions(conn)?;
    let spent = ledger::monthly_expenditure(&transactions, key.month_num, key.year_num);
    let breakdown = ledger::expenditure_by_category(&transactions, key.month_num, key.year_num);

    println!("Expenditure for {}-{}: {}", key.month, key.year, money(spent));
    if let Some(budget) = store::find_budget(conn, &key.month, &key.year)? {
        if spent > budget.amount {
            println!(
                "{}",
                format!(
                    "Over the {} budget by {}.",
                    money(budget.amount),
                    money(spent - budget.amount)
                )
                .red()
            );
        } else {
            println!("{}", format!("Within the {} budget.", money(budget.amount)).green());
        }
    }

    if breakdown.is_empty() {
        println!("No expenses recorded for this month.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount"]);
    for item in &breakdown {
        table.add_row(vec![Cell::new(&item.category), Cell::new(money(item.total))]);
    }
    println!("{table}");
    Ok(())
}

pub fn suggest(conn: &Connection, month: &str, year: &str) -> Result<()> {
    let key = MonthKey::parse(month, year)?;
    let budget = store::find_budget(conn, &key.month, &key.year)?.ok_or_else(|| {
        TallyError::NoBudget {
            month: key.month.clone(),
            year: key.year.clone(),
        }
    })?;

    let transactions = store::list_transactions(conn)?;
    let spent = ledger::monthly_expenditure(&transactions, key.month_num, key.year_num);
    let breakdown = ledger::expenditure_by_category(&transactions, key.month_num, key.year_num);
    let suggestions = advisor::suggest_reductions(spent, budget.amount, &breakdown);

    println!(
        "Expenditure for {}-{}: {} (budget {})",
        key.month,
        key.year,
        money(spent),
        money(budget.amount)
    );
    if suggestions.is_empty() {
        println!("Over budget, but no expense categories were recorded this month.");
        return Ok(());
    }
    for suggestion in &suggestions {
        if suggestion == advisor::WITHIN_BUDGET {
            println!("{}", suggestion.green());
        } else if suggestion.starts_with("Reduce") {
            println!("{}", suggestion.red());
        } else {
            println!("{suggestion}");
        }
    }
    Ok(())
}
