use crate::backup::{create_backup, purge_backups};
use crate::config::GridConfig;
use crate::core::{
    check_required_sheets, import_reservations, read_reservations, CleanReport, GridCleaner,
    ImportReport, ImportWarning,
};
use crate::error::{GridError, GridResult};
use crate::excel::{load_workbook, save_workbook};
use crate::layout::cell_reference;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Overrides the workbook path from the configuration
    pub workbook: Option<PathBuf>,
    /// YAML file with configuration overrides
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

impl RunOptions {
    /// Load configuration and apply command-line overrides
    pub fn resolve_config(&self) -> GridResult<GridConfig> {
        let mut config = GridConfig::load(self.config.as_deref())?;
        if let Some(ref workbook) = self.workbook {
            config.workbook = workbook.clone();
        }
        Ok(config)
    }
}

const RULE_WIDTH: usize = 70;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Directory holding the workbook (and its backups)
fn workbook_dir(workbook: &Path) -> &Path {
    workbook.parent().unwrap_or_else(|| Path::new("."))
}

/// Execute the import command
pub fn import(csv: PathBuf, options: &RunOptions) -> GridResult<()> {
    let config = options.resolve_config()?;

    println!("{}", "🏨 paxgrid - Importing reservations".bold().green());
    println!("   CSV:      {}", csv.display());
    println!("   Workbook: {}\n", config.workbook.display());

    if !config.workbook.exists() {
        return Err(GridError::MissingFile(config.workbook.clone()));
    }

    println!("{}", "1️⃣  Reading and mapping CSV rows...".cyan());
    let mapped = read_reservations(&csv, &config)?;
    for room in &mapped.unassigned {
        print_warning(&ImportWarning::NoFloor { room: room.clone() });
    }
    if mapped.accepted.is_empty() {
        return Err(GridError::NoValidRecords);
    }
    println!(
        "   {} rows accepted, {} skipped",
        mapped.accepted.len(),
        mapped.unassigned.len()
    );

    if options.verbose {
        println!("{}", "📖 Loading workbook...".cyan());
    }
    let mut workbook = load_workbook(&config.workbook)?;
    check_required_sheets(&workbook, &config)?;

    let backup = create_backup(&config.workbook, &config.backup.import_prefix)?;
    println!("{} Backup created: {}", "✅".green(), backup.display());

    let mut report = import_reservations(&mut workbook, &mapped, &config)?;
    // Unassigned rows were already printed while reading
    report
        .warnings
        .retain(|warning| !matches!(warning, ImportWarning::NoFloor { .. }));

    print_import_progress(&report, &config, options.verbose);

    println!("\n{}", "💾 Saving workbook...".cyan());
    save_workbook(&workbook, &config.workbook)?;
    println!("{} Saved: {}", "✅".green(), config.workbook.display());

    println!("\n{}", rule());
    println!("{}", "✅ IMPORT COMPLETED".bold().green());
    println!("{}", rule());
    println!("   ✓ Log sheet:   {} records", report.ledger_rows());
    println!("   ✓ Floor grids: {} occupants placed", report.placed_occupants());
    if !report.warnings.is_empty() {
        println!("   ⚠️  Warnings:    {}", report.warnings.len());
    }
    println!("{}", rule());

    Ok(())
}

fn print_import_progress(report: &ImportReport, config: &GridConfig, verbose: bool) {
    println!("\n{}", "2️⃣  Appending to log sheet...".cyan());
    if let Some(ledger) = report.ledger {
        println!(
            "   ✅ {} records written to '{}' from row {}",
            ledger.rows_written, config.ledger_sheet, ledger.first_row
        );
    }

    println!("\n{}", "3️⃣  Distributing occupants to floor grids...".cyan());
    if verbose {
        for placement in &report.placements {
            println!(
                "   🛏️  {} / room {}: {} occupant(s) from row {}",
                placement.floor.bright_blue(),
                placement.room,
                placement.occupants,
                placement.anchor_row
            );
        }
    }
    for warning in &report.warnings {
        print_warning(warning);
    }
    println!("   ✅ {} occupants placed", report.placed_occupants());

    println!("\n{}", "4️⃣  Writing summary...".cyan());
    let summary = &report.summary;
    println!(
        "   ✅ Summary updated in '{}'!{}",
        config.summary.sheet,
        cell_reference(config.summary.row, config.summary.column)
    );
    println!("      • Occupants: {}", summary.total_occupants.to_string().bold());
    println!("      • Rooms:     {}", summary.unique_rooms.to_string().bold());
    println!("      • Meal plan: {}", summary.meal_plan_count.to_string().bold());
}

fn print_warning(warning: &ImportWarning) {
    println!("   {} {}", "⚠️ ".yellow(), warning.to_string().yellow());
}

/// Execute the clear command
pub fn clear(options: &RunOptions) -> GridResult<()> {
    let config = options.resolve_config()?;

    println!("{}", "🧹 paxgrid - Clearing grids".bold().green());
    println!("   Workbook: {}\n", config.workbook.display());

    let backup = create_backup(&config.workbook, &config.backup.clean_prefix)?;
    println!("{} Backup created: {}", "✅".green(), backup.display());

    let mut workbook = load_workbook(&config.workbook)?;
    let report = GridCleaner::new(&config).clean_workbook(&mut workbook);
    print_clean_report(&report);

    println!("\n{}", "💾 Saving workbook...".cyan());
    save_workbook(&workbook, &config.workbook)?;
    println!("{} Saved: {}", "✅".green(), config.workbook.display());

    let purge = purge_backups(workbook_dir(&config.workbook), &config.backup.purge_pattern)?;
    if purge.deleted.is_empty() && purge.failed.is_empty() {
        println!("\n🗑️  No backup files to delete.");
    } else {
        println!("\n🗑️  Deleting backup files...");
        for path in &purge.deleted {
            println!("   ✅ Deleted: {}", path.display());
        }
        for (path, reason) in &purge.failed {
            println!("   {} Could not delete {}: {}", "❌".red(), path.display(), reason);
        }
    }

    println!("\n{}", rule());
    println!("{}", "✅ CLEANUP COMPLETED".bold().green());
    println!("{}", rule());
    println!("   Cells cleared:          {}", report.total_cleared());
    println!("   Backup files deleted:   {}", purge.deleted.len());
    println!("   The workbook is ready for new reservations.");
    println!("{}", rule());

    Ok(())
}

fn print_clean_report(report: &CleanReport) {
    println!("\n{}", "📋 Clearing data regions (headers kept)...".cyan());
    for cleanup in &report.sheets {
        println!(
            "   ✅ '{}': {} cells cleared",
            cleanup.sheet.bright_blue(),
            cleanup.cells_cleared
        );
    }
    for name in &report.missing_sheets {
        println!(
            "   {} {}",
            "⚠️ ".yellow(),
            format!("Sheet '{}' does not exist; skipped", name).yellow()
        );
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
