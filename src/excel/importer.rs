//! Excel importer implementation - .xlsx → in-memory [`Workbook`]

use crate::error::{GridError, GridResult};
use crate::excel::workbook::{CellValue, Sheet, Workbook};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads every worksheet of an .xlsx file, keeping values and formulas
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn import(&self) -> GridResult<Workbook> {
        if !self.path.exists() {
            return Err(GridError::MissingFile(self.path.clone()));
        }

        let mut xlsx: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            GridError::Workbook(format!(
                "Failed to open '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let mut workbook = Workbook::new();
        let sheet_names = xlsx.sheet_names().to_vec();

        for sheet_name in sheet_names {
            let range = xlsx.worksheet_range(&sheet_name).map_err(|e| {
                GridError::Workbook(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            // Not every sheet has a formula part; values alone are fine
            let formulas = xlsx.worksheet_formula(&sheet_name).ok();

            let sheet = workbook.add_sheet(&sheet_name);
            self.read_values(sheet, &range)?;
            if let Some(formulas) = formulas {
                self.read_formulas(sheet, &formulas)?;
            }
            debug!(sheet = %sheet_name, cells = sheet.cell_count(), "sheet loaded");
        }

        Ok(workbook)
    }

    fn read_values(&self, sheet: &mut Sheet, range: &Range<Data>) -> GridResult<()> {
        let Some((start_row, start_col)) = range.start() else {
            return Ok(());
        };

        for (row, col, data) in range.used_cells() {
            if let Some(value) = self.convert_cell(data) {
                let (row, column) = absolute_position(start_row, start_col, row, col)?;
                sheet.set(row, column, value);
            }
        }
        Ok(())
    }

    fn read_formulas(&self, sheet: &mut Sheet, formulas: &Range<String>) -> GridResult<()> {
        let Some((start_row, start_col)) = formulas.start() else {
            return Ok(());
        };

        for (row, col, formula) in formulas.used_cells() {
            if formula.is_empty() {
                continue;
            }
            let (row, column) = absolute_position(start_row, start_col, row, col)?;
            let cached = sheet.display(row, column);
            sheet.set(
                row,
                column,
                CellValue::Formula {
                    formula: formula.clone(),
                    cached,
                },
            );
        }
        Ok(())
    }

    fn convert_cell(&self, data: &Data) -> Option<CellValue> {
        match data {
            Data::String(s) if s.is_empty() => None,
            Data::String(s) => Some(CellValue::Text(s.clone())),
            Data::Float(f) => Some(CellValue::Number(*f)),
            Data::Int(i) => Some(CellValue::Number(*i as f64)),
            Data::Bool(b) => Some(CellValue::Bool(*b)),
            Data::DateTime(dt) => Some(CellValue::DateTime(dt.as_f64())),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
            Data::Error(_) | Data::Empty => None,
        }
    }
}

/// Translate calamine's range-relative, 0-based position into a 1-based one
fn absolute_position(
    start_row: u32,
    start_col: u32,
    row: usize,
    col: usize,
) -> GridResult<(u32, u16)> {
    let row = start_row as usize + row + 1;
    let col = start_col as usize + col + 1;
    let row = u32::try_from(row)
        .map_err(|_| GridError::Workbook(format!("Row {} out of range", row)))?;
    let column = u16::try_from(col)
        .map_err(|_| GridError::Workbook(format!("Column {} out of range", col)))?;
    Ok((row, column))
}
