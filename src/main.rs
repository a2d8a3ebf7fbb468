use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use spendlog::config::{Settings, SpendlogPaths};
use spendlog::services::ExpenseService;
use spendlog::shell::Shell;
use spendlog::storage::{initialize_storage, ExpenseRepository};

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Single-user expense tracker backed by a local SQLite table",
    long_about = "spendlog is an interactive expense tracker. It records \
                  expenses keyed by date, removes them by id, and views them \
                  filtered by exact date, month, or year, with a running total."
)]
struct Cli {
    /// Directory holding the settings file and expense database
    #[arg(long, env = "SPENDLOG_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => SpendlogPaths::with_base_dir(dir),
        None => SpendlogPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    // Schema initialization failures are reported but do not stop the
    // interactive loop from starting
    if let Err(err) = initialize_storage(&paths, &settings) {
        log::warn!("Database initialization failed: {}", err);
        eprintln!("Warning: {}", err);
    }

    let repository = ExpenseRepository::new(paths.database_file(&settings.database_file));
    let service = ExpenseService::new(repository);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(service, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
