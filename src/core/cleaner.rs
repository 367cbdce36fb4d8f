use crate::config::GridConfig;
use crate::excel::{Sheet, Workbook};
use crate::layout::{floor, ledger};
use tracing::debug;

/// Header rows sit above this on every sheet the cleaner touches
const FIRST_CLEANABLE_ROW: u32 = floor::HEADER_ROW + 1;

/// Inclusive rectangle of data cells to blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanWindow {
    pub first_row: u32,
    pub last_row: u32,
    pub first_column: u16,
    pub last_column: u16,
}

impl CleanWindow {
    /// Floor sheets: C..=L below the header
    pub fn floor(max_row: u32) -> Self {
        Self {
            first_row: floor::FIRST_DATA_ROW,
            last_row: max_row,
            first_column: floor::FIRST_DATA_COLUMN,
            last_column: floor::LAST_DATA_COLUMN,
        }
    }

    /// Log sheet: A..=N below the header
    pub fn ledger(max_row: u32) -> Self {
        Self {
            first_row: ledger::FIRST_DATA_ROW,
            last_row: max_row,
            first_column: ledger::FIRST_DATA_COLUMN,
            last_column: ledger::LAST_DATA_COLUMN,
        }
    }

    fn contains(&self, row: u32, column: u16) -> bool {
        (self.first_row..=self.last_row).contains(&row)
            && (self.first_column..=self.last_column).contains(&column)
    }
}

/// Blank every non-empty cell inside `window`, returning how many changed
///
/// Row 1 is the header and is never touched, whatever the window says.
pub fn clean(sheet: &mut Sheet, window: &CleanWindow) -> usize {
    let window = CleanWindow {
        first_row: window.first_row.max(FIRST_CLEANABLE_ROW),
        ..*window
    };

    let targets: Vec<(u32, u16)> = sheet
        .cells()
        .filter(|&(row, column, _)| window.contains(row, column))
        .map(|(row, column, _)| (row, column))
        .collect();

    targets
        .into_iter()
        .filter(|&(row, column)| sheet.clear(row, column))
        .count()
}

/// Cells cleared on one sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetCleanup {
    pub sheet: String,
    pub cells_cleared: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub sheets: Vec<SheetCleanup>,
    /// Configured sheets not present in the workbook
    pub missing_sheets: Vec<String>,
}

impl CleanReport {
    pub fn total_cleared(&self) -> usize {
        self.sheets.iter().map(|s| s.cells_cleared).sum()
    }
}

/// Clears the data regions of every floor sheet and the log sheet
pub struct GridCleaner<'a> {
    config: &'a GridConfig,
}

impl<'a> GridCleaner<'a> {
    pub fn new(config: &'a GridConfig) -> Self {
        Self { config }
    }

    /// Floor sheets first, in declared order, then the log sheet
    ///
    /// A configured sheet missing from the workbook is recorded and skipped.
    pub fn clean_workbook(&self, workbook: &mut Workbook) -> CleanReport {
        let floor_window = CleanWindow::floor(self.config.max_row);
        let ledger_window = CleanWindow::ledger(self.config.max_row);

        let targets = self
            .config
            .floor_sheets()
            .map(|name| (name, floor_window))
            .chain(std::iter::once((
                self.config.ledger_sheet.as_str(),
                ledger_window,
            )));

        let mut report = CleanReport::default();
        for (name, window) in targets {
            match workbook.sheet_mut(name) {
                Some(sheet) => {
                    let cells_cleared = clean(sheet, &window);
                    debug!(sheet = name, cells_cleared, "sheet cleaned");
                    report.sheets.push(SheetCleanup {
                        sheet: name.to_string(),
                        cells_cleared,
                    });
                }
                None => report.missing_sheets.push(name.to_string()),
            }
        }
        report
    }
}
