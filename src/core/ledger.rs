use crate::excel::Sheet;
use crate::layout::ledger;
use crate::types::Reservation;
use tracing::debug;

/// Appends reservations to the chronological log sheet
///
/// The cursor is re-derived from the sheet on every call: earlier runs and
/// manual edits may leave gaps, so the row count is never trusted as the
/// insertion point.
#[derive(Debug, Clone, Copy)]
pub struct LedgerAppender {
    first_data_row: u32,
    anchor_column: u16,
}

impl Default for LedgerAppender {
    fn default() -> Self {
        Self {
            first_data_row: ledger::FIRST_DATA_ROW,
            anchor_column: ledger::ANCHOR,
        }
    }
}

/// Where an append started and how many rows it used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerAppend {
    pub first_row: u32,
    pub rows_written: usize,
}

impl LedgerAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// First row at or below `from` whose anchor cell is empty
    pub fn next_free_row(&self, sheet: &Sheet, from: u32) -> u32 {
        let mut row = from.max(self.first_data_row);
        while !sheet.is_empty_at(row, self.anchor_column) {
            row += 1;
        }
        row
    }

    /// Write each record on its own row, in order, starting at the first free row
    ///
    /// A populated anchor cell below the cursor is skipped, never overwritten.
    pub fn append(&self, sheet: &mut Sheet, records: &[Reservation]) -> LedgerAppend {
        let first_row = self.next_free_row(sheet, self.first_data_row);
        let mut cursor = first_row;

        for record in records {
            cursor = self.next_free_row(sheet, cursor);
            write_ledger_row(sheet, cursor, record);
            cursor += 1;
        }

        debug!(
            sheet = sheet.name(),
            first_row,
            rows = records.len(),
            "ledger rows appended"
        );

        LedgerAppend {
            first_row,
            rows_written: records.len(),
        }
    }
}

fn write_ledger_row(sheet: &mut Sheet, row: u32, record: &Reservation) {
    sheet.set(row, ledger::ROOM, &record.room);
    sheet.set(row, ledger::CHECK_IN, &record.check_in);
    sheet.set(row, ledger::CHECK_OUT, &record.check_out);
    sheet.set(row, ledger::OCCUPANT_COUNT, &record.occupant_count);
    sheet.set(row, ledger::DOCUMENT_TYPE, &record.document_type);
    sheet.set(row, ledger::DOCUMENT_NUMBER, &record.document_number);
    sheet.set(row, ledger::FULL_NAME, &record.full_name);
    sheet.set(row, ledger::AGE, &record.age);
    sheet.set(row, ledger::VOUCHER, &record.voucher);
    sheet.set(row, ledger::MEAL_PLAN, &record.meal_plan);
    sheet.set(row, ledger::STATUS, &record.status);
    sheet.set(row, ledger::BENEFIT_PACKAGE, &record.benefit_package);
    sheet.set(row, ledger::SITE, &record.site);
    // Empty notes remove whatever a cleared-by-hand row left in N
    sheet.set(row, ledger::NOTES, &record.notes);
}
