//! CLI smoke entry point.
//!
//! Prints the core version and a read-only dashboard snapshot of the database
//! under `CENTRO_DATA_DIR` (an in-memory database when unset).

use centro_core::db::{open_db, open_db_in_memory};
use centro_core::{
    init_logging_from_config, CalendarCursor, ConsoleService, CoreConfig, SqliteCollectionStore,
};
use chrono::Local;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("centro_core version={}", centro_core::core_version());

    match snapshot() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("centro_cli error={err}");
            ExitCode::FAILURE
        }
    }
}

fn snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let conn = match CoreConfig::from_env() {
        Ok(config) => {
            init_logging_from_config(&config)?;
            open_db(config.db_path())?
        }
        Err(err) => {
            println!("centro_cli source=memory reason=\"{err}\"");
            open_db_in_memory()?
        }
    };
    let store = SqliteCollectionStore::try_new(&conn)?;
    let service = ConsoleService::over_store(&store);

    let now = Local::now().naive_local();
    let today = now.date();
    let grid = service.month_view(CalendarCursor::containing(today)?, today)?;
    let scheduled_days = grid.days().filter(|day| !day.events.is_empty()).count();
    println!(
        "calendar month={:?} year={} days={} days_with_events={scheduled_days}",
        grid.month,
        grid.year,
        grid.days().count()
    );

    for entry in service.agenda(now).iter().take(3) {
        println!(
            "agenda status={} when=\"{}\" title=\"{}\"",
            entry.status.label(),
            entry.when.display(),
            entry.title
        );
    }

    let summary = service.inventory_summary();
    println!(
        "inventory items={} value={:.2} low_stock={}",
        summary.total_count, summary.total_value, summary.low_stock_count
    );
    Ok(())
}
