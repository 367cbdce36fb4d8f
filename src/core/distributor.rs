use crate::excel::Sheet;
use crate::layout::floor;
use crate::types::Reservation;
use tracing::debug;

/// Outcome of placing one room's reservations on its floor sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    pub found: bool,
    pub anchor_row: Option<u32>,
    pub rows_written: usize,
}

impl Distribution {
    fn not_found() -> Self {
        Self {
            found: false,
            anchor_row: None,
            rows_written: 0,
        }
    }
}

/// Writes each room's occupants onto its static rows in a floor sheet
///
/// The room's anchor row is the first row, from the top, whose room cell
/// matches the room as trimmed text. Occupants go on the anchor row and the
/// rows directly below it, replacing whatever those rows held in the data
/// window. It is an overwrite, not an insert.
#[derive(Debug, Clone, Copy)]
pub struct FloorDistributor {
    max_row: u32,
}

impl FloorDistributor {
    /// `max_row` bounds the anchor scan (inclusive)
    pub fn new(max_row: u32) -> Self {
        Self { max_row }
    }

    pub fn find_anchor(&self, sheet: &Sheet, room: &str) -> Option<u32> {
        let target = room.trim();
        if target.is_empty() {
            return None;
        }
        let last_row = sheet.last_row().min(self.max_row);
        (floor::FIRST_DATA_ROW..=last_row).find(|&row| sheet.display(row, floor::ROOM).trim() == target)
    }

    pub fn distribute(
        &self,
        sheet: &mut Sheet,
        room: &str,
        reservations: &[Reservation],
    ) -> Distribution {
        let Some(anchor_row) = self.find_anchor(sheet, room) else {
            debug!(sheet = sheet.name(), room, "no anchor row");
            return Distribution::not_found();
        };

        for (offset, reservation) in reservations.iter().enumerate() {
            let row = anchor_row + offset as u32;
            clear_data_window(sheet, row);
            write_floor_row(sheet, row, reservation);
        }

        debug!(
            sheet = sheet.name(),
            room,
            anchor_row,
            rows = reservations.len(),
            "room distributed"
        );

        Distribution {
            found: true,
            anchor_row: Some(anchor_row),
            rows_written: reservations.len(),
        }
    }
}

fn clear_data_window(sheet: &mut Sheet, row: u32) {
    for column in floor::FIRST_DATA_COLUMN..=floor::LAST_DATA_COLUMN {
        sheet.clear(row, column);
    }
}

/// Floor sheets carry the document number in F and the type in G
fn write_floor_row(sheet: &mut Sheet, row: u32, reservation: &Reservation) {
    sheet.set(row, floor::CHECK_IN, &reservation.check_in);
    sheet.set(row, floor::CHECK_OUT, &reservation.check_out);
    sheet.set(row, floor::OCCUPANT_COUNT, &reservation.occupant_count);
    sheet.set(row, floor::DOCUMENT_NUMBER, &reservation.document_number);
    sheet.set(row, floor::DOCUMENT_TYPE, &reservation.document_type);
    sheet.set(row, floor::FULL_NAME, &reservation.full_name);
    sheet.set(row, floor::AGE, &reservation.age);
    sheet.set(row, floor::VOUCHER, &reservation.voucher);
    sheet.set(row, floor::MEAL_PLAN, &reservation.meal_plan);
    sheet.set(row, floor::STATUS, &reservation.status);
}
