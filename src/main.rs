use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{handle_expense_command, ExpenseCommands, Shell};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_tracing;
use expense_tracker::services::ExpenseManager;
use expense_tracker::storage::ExpenseStorage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track personal expenses in a local flat file",
    long_about = "Records dated, categorized expenses in a single pipe-delimited \
                  file and reports monthly totals per category. Run without a \
                  command to use the interactive menu."
)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(short, long, global = true, env = "EXPENSES_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Shell,

    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = ExpensePaths::new();

    match cli.command {
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            let data_file = cli.file.unwrap_or_else(|| settings.data_path(&paths));

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data file:      {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            println!("  Data file:      {}", settings.data_file);
        }
        Some(Commands::Expense(cmd)) => {
            let data_file = resolve_data_file(cli.file, &paths)?;
            let mut manager = ExpenseManager::new(ExpenseStorage::new(data_file));
            handle_expense_command(&mut manager, cmd)?;
        }
        Some(Commands::Shell) | None => {
            let data_file = resolve_data_file(cli.file, &paths)?;
            let mut manager = ExpenseManager::new(ExpenseStorage::new(data_file));
            let stdin = io::stdin();
            Shell::new(&mut manager, stdin.lock(), io::stdout()).run()?;
        }
    }

    Ok(())
}

/// An explicit file wins; settings are only consulted without one
fn resolve_data_file(file: Option<PathBuf>, paths: &ExpensePaths) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file);
    }

    let settings = Settings::load_or_create(paths)?;
    paths.ensure_directories()?;
    Ok(settings.data_path(paths))
}
