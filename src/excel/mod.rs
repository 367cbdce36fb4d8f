//! Workbook load/save
//!
//! - Import: .xlsx → [`Workbook`] (calamine; values plus formulas)
//! - Update: [`Workbook`] → existing .xlsx, changed cells only (umya-spreadsheet;
//!   formatting kept)
//! - Export: [`Workbook`] → new .xlsx (rust_xlsxwriter; rendered to memory first)

mod exporter;
mod importer;
mod updater;
mod workbook;

pub use exporter::ExcelExporter;
pub use importer::ExcelImporter;
pub use updater::WorkbookUpdater;
pub use workbook::{CellValue, Sheet, Workbook};

use crate::error::GridResult;
use std::path::Path;

/// Load an .xlsx file into memory
pub fn load_workbook(path: &Path) -> GridResult<Workbook> {
    ExcelImporter::new(path).import()
}

/// Save a workbook to `path`
///
/// An existing file is updated in place: only cells whose value changed are
/// written, and everything else in the file (styles, merges, widths, names)
/// is left as it was. A missing file is created from scratch.
pub fn save_workbook(workbook: &Workbook, path: &Path) -> GridResult<()> {
    if path.exists() {
        WorkbookUpdater::new(workbook).update(path).map(|_| ())
    } else {
        ExcelExporter::new(workbook).export(path)
    }
}
