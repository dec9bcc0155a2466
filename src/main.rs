mod advisor;
mod cli;
mod db;
mod error;
mod fmt;
mod ledger;
mod models;
mod settings;
mod store;

use clap::Parser;

use cli::{BudgetCommands, Cli, Commands, ReportCommands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> error::Result<()> {
    // `init` picks the data directory, so it runs before any database is opened.
    let command = match command {
        Commands::Init { data_dir } => return cli::init::run(data_dir),
        command => command,
    };

    let data_dir = settings::resolve_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let conn = db::get_connection(&data_dir.join(db::DB_FILE))?;
    db::init_db(&conn)?;

    match command {
        Commands::Init { .. } => unreachable!("init is handled before the database is opened"),
        Commands::Add {
            kind,
            category,
            amount,
            description,
            date,
        } => cli::transactions::add(&conn, &kind, &category, amount, description.as_deref(), &date),
        Commands::List => cli::transactions::list(&conn),
        Commands::Edit {
            id,
            kind,
            category,
            amount,
            description,
            date,
        } => cli::transactions::edit(
            &conn,
            id,
            &kind,
            &category,
            amount,
            description.as_deref(),
            &date,
        ),
        Commands::Delete { id } => cli::transactions::delete(&conn, id),
        Commands::Budget { command } => match command {
            BudgetCommands::Set { month, year, amount } => {
                cli::budget::set(&conn, &month, &year, amount)
            }
            BudgetCommands::List => cli::budget::list(&conn),
        },
        Commands::Report { command } => match command {
            ReportCommands::Totals => cli::report::totals(&conn),
            ReportCommands::Month { month, year } => cli::report::month(&conn, &month, &year),
        },
        Commands::Suggest { month, year } => cli::report::suggest(&conn, &month, &year),
        Commands::Export { output } => cli::export::run(&conn, &output),
        Commands::Demo => cli::demo::run(&conn),
        Commands::Status => cli::status::run(&conn, &data_dir),
    }
}
