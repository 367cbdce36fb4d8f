//! In-place update of an existing .xlsx file
//!
//! The file on disk is reloaded twice: once through calamine, giving the
//! values as they were, and once through umya-spreadsheet, giving the full
//! document. Only cells whose value differs between the first and the
//! in-memory [`Workbook`] are touched in the second, so styles, merged
//! ranges, column widths, defined names and error cells survive the save.

use crate::error::{GridError, GridResult};
use crate::excel::importer::ExcelImporter;
use crate::excel::workbook::{CellValue, Sheet, Workbook};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;
use umya_spreadsheet::{Cell, Spreadsheet, Worksheet};

/// Writes the changes in a [`Workbook`] back into the file it was loaded from
pub struct WorkbookUpdater<'a> {
    workbook: &'a Workbook,
}

impl<'a> WorkbookUpdater<'a> {
    pub fn new(workbook: &'a Workbook) -> Self {
        Self { workbook }
    }

    /// Apply every changed cell to the file at `path`, returning how many
    /// cells were written or blanked
    pub fn update(&self, path: &Path) -> GridResult<usize> {
        let baseline = ExcelImporter::new(path).import()?;
        let mut book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
            GridError::Workbook(format!("Failed to open '{}': {}", path.display(), e))
        })?;

        let mut changed = 0;
        for sheet in self.workbook.sheets() {
            let worksheet = worksheet_mut(&mut book, sheet.name())?;
            let before = baseline.sheet(sheet.name());
            let count = apply_changes(worksheet, before, sheet);
            debug!(sheet = sheet.name(), cells = count, "sheet updated");
            changed += count;
        }

        let save_error = |reason: String| GridError::Save {
            path: path.to_path_buf(),
            reason,
        };
        let mut buffer = Cursor::new(Vec::new());
        umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buffer)
            .map_err(|e| save_error(e.to_string()))?;
        fs::write(path, buffer.into_inner()).map_err(|e| save_error(e.to_string()))?;

        debug!(path = %path.display(), changed, "workbook updated in place");
        Ok(changed)
    }
}

fn worksheet_mut<'b>(book: &'b mut Spreadsheet, name: &str) -> GridResult<&'b mut Worksheet> {
    if book.get_sheet_by_name(name).is_none() {
        book.new_sheet(name)
            .map_err(|e| GridError::Workbook(format!("Cannot add sheet '{}': {}", name, e)))?;
    }
    book.get_sheet_by_name_mut(name)
        .ok_or_else(|| GridError::MissingSheet(name.to_string()))
}

/// Write cells that differ from `before` and blank the ones that went away
fn apply_changes(worksheet: &mut Worksheet, before: Option<&Sheet>, after: &Sheet) -> usize {
    let mut changed = 0;

    for (row, column, value) in after.cells() {
        if before.and_then(|sheet| sheet.get(row, column)) != Some(value) {
            write_cell(worksheet.get_cell_mut((u32::from(column), row)), value);
            changed += 1;
        }
    }

    if let Some(before) = before {
        for (row, column, _) in before.cells() {
            if after.is_empty_at(row, column) {
                // Blank the value only; the cell keeps its style
                worksheet.get_cell_mut((u32::from(column), row)).set_blank();
                changed += 1;
            }
        }
    }

    changed
}

fn write_cell(cell: &mut Cell, value: &CellValue) {
    match value {
        CellValue::Text(text) => {
            cell.set_value_string(text.as_str());
        }
        CellValue::Number(number) | CellValue::DateTime(number) => {
            cell.set_value_number(*number);
        }
        CellValue::Bool(flag) => {
            cell.set_value_bool(*flag);
        }
        CellValue::Formula { formula, .. } => {
            cell.set_formula(formula.trim_start_matches('='));
        }
    }
}
