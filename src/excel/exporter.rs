//! Excel exporter implementation - in-memory [`Workbook`] → .xlsx

use crate::error::{GridError, GridResult};
use crate::excel::workbook::{CellValue, Sheet, Workbook};
use rust_xlsxwriter::{Format, Formula, Workbook as XlsxWorkbook, XlsxError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes a [`Workbook`] back to disk
///
/// The file is rendered into memory first, so a failure while building the
/// workbook never touches the existing file.
pub struct ExcelExporter<'a> {
    workbook: &'a Workbook,
    date_format: Format,
    datetime_format: Format,
}

impl<'a> ExcelExporter<'a> {
    pub fn new(workbook: &'a Workbook) -> Self {
        Self {
            workbook,
            date_format: Format::new().set_num_format("dd/mm/yyyy"),
            datetime_format: Format::new().set_num_format("dd/mm/yyyy hh:mm"),
        }
    }

    pub fn export(&self, output_path: &Path) -> GridResult<()> {
        let buffer = self.render().map_err(|e| GridError::Save {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        fs::write(output_path, buffer).map_err(|e| GridError::Save {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!(path = %output_path.display(), "workbook saved");
        Ok(())
    }

    /// Serialize every sheet into an .xlsx byte buffer
    pub fn render(&self) -> Result<Vec<u8>, XlsxError> {
        let mut xlsx = XlsxWorkbook::new();

        for sheet in self.workbook.sheets() {
            self.export_sheet(&mut xlsx, sheet)?;
        }

        xlsx.save_to_buffer()
    }

    fn export_sheet(&self, xlsx: &mut XlsxWorkbook, sheet: &Sheet) -> Result<(), XlsxError> {
        let worksheet = xlsx.add_worksheet();
        worksheet.set_name(sheet.name())?;

        for (row, column, value) in sheet.cells() {
            // rust_xlsxwriter is 0-based
            let (row, column) = (row - 1, column - 1);
            match value {
                CellValue::Text(text) => {
                    worksheet.write_string(row, column, text.as_str())?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(row, column, *number)?;
                }
                CellValue::Bool(flag) => {
                    worksheet.write_boolean(row, column, *flag)?;
                }
                CellValue::DateTime(serial) => {
                    let format = if serial.fract() == 0.0 {
                        &self.date_format
                    } else {
                        &self.datetime_format
                    };
                    worksheet.write_number_with_format(row, column, *serial, format)?;
                }
                CellValue::Formula { formula, .. } => {
                    worksheet.write_formula(row, column, Formula::new(formula))?;
                }
            }
        }

        Ok(())
    }
}
