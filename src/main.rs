use clap::{Parser, Subcommand};
use colored::Colorize;
use paxgrid::cli::{self, RunOptions};
use paxgrid::error::GridResult;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "paxgrid")]
#[command(about = "Import reservation exports into the hotel room-grid workbook.")]
#[command(long_about = "paxgrid - Reservation CSV to room-grid workbook

Appends every reservation to the log sheet, fills the per-floor room
charts and refreshes the summary block. A timestamped backup of the
workbook is written before anything changes.

COMMANDS:
  import  - Load a reservation CSV export into the workbook
  clear   - Empty the floor charts and the log sheet for a new cycle

EXAMPLES:
  paxgrid import reservas.csv
  paxgrid import reservas.csv --workbook \"Grilla de Pax 2030.xlsx\"
  paxgrid clear --config paxgrid.yaml

LOGGING:
  Set RUST_LOG (e.g. RUST_LOG=paxgrid=debug) or pass --verbose.")]
#[command(version)]
struct Cli {
    /// Workbook to update (defaults to the configured one)
    #[arg(long, global = true, env = "PAXGRID_WORKBOOK")]
    workbook: Option<PathBuf>,

    /// YAML file with configuration overrides
    #[arg(long, global = true, env = "PAXGRID_CONFIG")]
    config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Import a reservation CSV export.

The CSV must carry a header row with the booking system's column names;
column order does not matter. Rows whose room has no floor are reported
and skipped.

STEPS:
  1. Map CSV rows and resolve each room's floor
  2. Back up the workbook (BACKUP_<timestamp>_<name>)
  3. Append every row to the log sheet
  4. Overwrite each room's block on its floor sheet
  5. Write the summary (occupants, rooms, meal plan)
  6. Save the workbook

NOTE: Cell formatting of the workbook is not carried over on save.")]
    /// Import a reservation CSV into the workbook
    Import {
        /// Path to the reservation CSV export
        csv: PathBuf,
    },

    #[command(long_about = "Clear the floor charts and the log sheet.

Header rows and the room-number column are kept. A backup
(BACKUP_LIMPIEZA_<timestamp>_<name>) is written first, and every
BACKUP_*.xlsx file next to the workbook is deleted after a successful save.")]
    /// Empty the data regions for a new cycle
    Clear,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "paxgrid=debug" } else { "paxgrid=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> GridResult<()> {
    let options = RunOptions {
        workbook: cli.workbook,
        config: cli.config,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Import { csv } => cli::import(csv, &options),
        Commands::Clear => cli::clear(&options),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        println!("\n{} {}", "❌ Error:".bold().red(), e.to_string().red());
        process::exit(1);
    }
}
