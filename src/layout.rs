//! Fixed cell layouts of the room-grid workbook
//!
//! Rows and columns are 1-based, as they appear in the spreadsheet
//! (column 1 = A). These positions are part of the workbook's format and
//! are not configurable; sheet names, floor ranges and the row bound live
//! in [`crate::config::GridConfig`].

/// Largest 1-based row an .xlsx worksheet can hold
pub const MAX_SHEET_ROW: u32 = 1_048_576;
/// Largest 1-based column an .xlsx worksheet can hold (XFD)
pub const MAX_SHEET_COLUMN: u16 = 16_384;

/// Floor sheets ("PISO n"): one static row per room, data in C..=L
pub mod floor {
    pub const HEADER_ROW: u32 = 1;
    pub const FIRST_DATA_ROW: u32 = 2;

    /// B: room identifier, compared as trimmed text
    pub const ROOM: u16 = 2;

    pub const CHECK_IN: u16 = 3;
    pub const CHECK_OUT: u16 = 4;
    pub const OCCUPANT_COUNT: u16 = 5;
    /// F holds the document *number* even though the header reads like the type
    pub const DOCUMENT_NUMBER: u16 = 6;
    /// G holds the document *type*
    pub const DOCUMENT_TYPE: u16 = 7;
    pub const FULL_NAME: u16 = 8;
    pub const AGE: u16 = 9;
    pub const VOUCHER: u16 = 10;
    pub const MEAL_PLAN: u16 = 11;
    pub const STATUS: u16 = 12;

    /// Data window cleared before writing and by the cleaner
    pub const FIRST_DATA_COLUMN: u16 = CHECK_IN;
    pub const LAST_DATA_COLUMN: u16 = STATUS;
}

/// Log sheet ("Ingresos"): append-only, one row per record in A..=N
pub mod ledger {
    pub const HEADER_ROW: u32 = 1;
    pub const FIRST_DATA_ROW: u32 = 2;

    pub const ROOM: u16 = 1;
    pub const CHECK_IN: u16 = 2;
    pub const CHECK_OUT: u16 = 3;
    pub const OCCUPANT_COUNT: u16 = 4;
    pub const DOCUMENT_TYPE: u16 = 5;
    pub const DOCUMENT_NUMBER: u16 = 6;
    pub const FULL_NAME: u16 = 7;
    pub const AGE: u16 = 8;
    pub const VOUCHER: u16 = 9;
    pub const MEAL_PLAN: u16 = 10;
    pub const STATUS: u16 = 11;
    pub const BENEFIT_PACKAGE: u16 = 12;
    pub const SITE: u16 = 13;
    pub const NOTES: u16 = 14;

    /// An empty cell here marks a free row
    pub const ANCHOR: u16 = ROOM;

    pub const FIRST_DATA_COLUMN: u16 = ROOM;
    pub const LAST_DATA_COLUMN: u16 = NOTES;
}

/// Summary block, relative to the configured anchor cell
pub mod summary {
    pub const TITLE_ROW_OFFSET: u32 = 0;
    pub const OCCUPANTS_ROW_OFFSET: u32 = 2;
    pub const ROOMS_ROW_OFFSET: u32 = 3;
    pub const MEAL_PLAN_ROW_OFFSET: u32 = 4;

    /// Values sit one column right of their labels
    pub const VALUE_COLUMN_OFFSET: u16 = 1;
}

/// Convert a 1-based column number to its letter name (1 → A, 27 → AA)
pub fn column_letter(column: u16) -> String {
    let mut name = String::new();
    let mut n = column as u32;
    while n > 0 {
        let remainder = (n - 1) % 26;
        name.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }
    name
}

/// Format a 1-based (row, column) pair as an A1 reference
pub fn cell_reference(row: u32, column: u16) -> String {
    format!("{}{}", column_letter(column), row)
}
