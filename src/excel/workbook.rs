//! In-memory workbook: named sheets of sparse, 1-based cells

use crate::error::{GridError, GridResult};
use std::collections::BTreeMap;

/// A single non-empty cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel date serial; written back with a date number format
    DateTime(f64),
    /// Formula text plus the display form of the value cached in the file
    Formula { formula: String, cached: String },
}

impl CellValue {
    /// Text form used for comparisons (e.g. room identifiers)
    ///
    /// Whole numbers render without a decimal part, so a room stored as the
    /// number `105` displays as `"105"`.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) | CellValue::DateTime(n) => format_number(*n),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::Formula { cached, .. } => cached.clone(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// One worksheet
///
/// Only non-empty cells are stored. Writing an empty string removes the
/// cell, so "empty" always means "absent".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(u32, u16), CellValue>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, row: u32, column: u16) -> Option<&CellValue> {
        self.cells.get(&(row, column))
    }

    /// Display text of a cell; empty string when the cell is empty
    pub fn display(&self, row: u32, column: u16) -> String {
        self.get(row, column)
            .map(CellValue::display)
            .unwrap_or_default()
    }

    pub fn is_empty_at(&self, row: u32, column: u16) -> bool {
        self.get(row, column).is_none()
    }

    /// Set a cell; row and column are 1-based
    pub fn set(&mut self, row: u32, column: u16, value: impl Into<CellValue>) {
        debug_assert!(row >= 1 && column >= 1, "cell positions are 1-based");
        let value = value.into();
        if value.is_blank() {
            self.cells.remove(&(row, column));
        } else {
            self.cells.insert((row, column), value);
        }
    }

    /// Empty a cell, returning true if it held a value
    pub fn clear(&mut self, row: u32, column: u16) -> bool {
        self.cells.remove(&(row, column)).is_some()
    }

    /// Highest row holding any value (0 for an empty sheet)
    pub fn last_row(&self) -> u32 {
        self.cells.keys().map(|&(row, _)| row).max().unwrap_or(0)
    }

    /// Non-empty cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.cells
            .iter()
            .map(|(&(row, column), value)| (row, column, value))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Display text of every cell in a row between two columns (inclusive)
    pub fn row_values(&self, row: u32, first_column: u16, last_column: u16) -> Vec<String> {
        (first_column..=last_column)
            .map(|column| self.display(row, column))
            .collect()
    }
}

/// Ordered collection of sheets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty sheet (or return the existing one with that name)
    pub fn add_sheet(&mut self, name: &str) -> &mut Sheet {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.sheets.push(Sheet::new(name));
                self.sheets.len() - 1
            }
        };
        &mut self.sheets[index]
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.iter_mut().find(|sheet| sheet.name == name)
    }

    /// Like [`Workbook::sheet_mut`], but a missing sheet is an error
    pub fn require_sheet_mut(&mut self, name: &str) -> GridResult<&mut Sheet> {
        self.sheet_mut(name)
            .ok_or_else(|| GridError::MissingSheet(name.to_string()))
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|sheet| sheet.name == name)
    }
}
