//! Run configuration
//!
//! Everything that depends on the particular workbook (sheet names, room
//! ranges, where the summary goes, which services count as a meal plan)
//! lives here. Defaults describe "Grilla de Pax 2030.xlsx"; a YAML file can
//! override any subset of fields.

use crate::error::{GridError, GridResult};
use crate::layout::{self, summary};
use crate::types::FloorRange;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORKBOOK: &str = "Grilla de Pax 2030.xlsx";
pub const DEFAULT_LEDGER_SHEET: &str = "Ingresos 23 D MAYO";

/// Last row (inclusive) scanned for anchors and cleared by the cleaner
pub const DEFAULT_MAX_ROW: u32 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub workbook: PathBuf,
    pub ledger_sheet: String,
    /// Scanned in declared order; first range containing the room wins
    pub floors: Vec<FloorRange>,
    pub max_row: u32,
    pub summary: SummaryAnchor,
    /// Case-insensitive substrings of the services column
    pub meal_plan_keywords: Vec<String>,
    pub backup: BackupNaming,
    pub columns: SourceColumns,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            ledger_sheet: DEFAULT_LEDGER_SHEET.to_string(),
            floors: vec![
                FloorRange::new("PISO 1", 101, 121),
                FloorRange::new("PISO 2", 222, 242),
                FloorRange::new("PISO 3", 343, 353),
            ],
            max_row: DEFAULT_MAX_ROW,
            summary: SummaryAnchor::default(),
            meal_plan_keywords: vec![
                "MEDIA PENSION".to_string(),
                "MEDIA PENSIÓN".to_string(),
                "ALL INCLUSIVE".to_string(),
            ],
            backup: BackupNaming::default(),
            columns: SourceColumns::default(),
        }
    }
}

impl GridConfig {
    /// Load configuration, applying YAML overrides when a file is given
    pub fn load(path: Option<&Path>) -> GridResult<Self> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                if !path.exists() {
                    return Err(GridError::MissingFile(path.to_path_buf()));
                }
                let content = fs::read_to_string(path)?;
                Self::from_yaml(&content)
            }
        }
    }

    pub fn from_yaml(content: &str) -> GridResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject positions that fall outside a worksheet
    pub fn validate(&self) -> GridResult<()> {
        let anchor = &self.summary;
        if anchor.row == 0 || anchor.column == 0 {
            return Err(GridError::Config(format!(
                "summary anchor row and column are 1-based (got row {}, column {})",
                anchor.row, anchor.column
            )));
        }
        let last_row = anchor.row.checked_add(summary::MEAL_PLAN_ROW_OFFSET);
        if last_row.map_or(true, |row| row > layout::MAX_SHEET_ROW) {
            return Err(GridError::Config(format!(
                "summary block starting at row {} does not fit in a worksheet",
                anchor.row
            )));
        }
        let value_column = anchor.column.checked_add(summary::VALUE_COLUMN_OFFSET);
        if value_column.map_or(true, |column| column > layout::MAX_SHEET_COLUMN) {
            return Err(GridError::Config(format!(
                "summary block starting at column {} does not fit in a worksheet",
                anchor.column
            )));
        }

        if self.max_row > layout::MAX_SHEET_ROW {
            return Err(GridError::Config(format!(
                "max_row {} exceeds the worksheet limit of {}",
                self.max_row,
                layout::MAX_SHEET_ROW
            )));
        }
        if let Some(range) = self.floors.iter().find(|r| r.min_room > r.max_room) {
            return Err(GridError::Config(format!(
                "floor '{}' has min_room {} above max_room {}",
                range.floor, range.min_room, range.max_room
            )));
        }
        Ok(())
    }

    /// Floor sheet names in declared order
    pub fn floor_sheets(&self) -> impl Iterator<Item = &str> {
        self.floors.iter().map(|range| range.floor.as_str())
    }
}

/// Where the summary block is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryAnchor {
    pub sheet: String,
    pub row: u32,
    /// 1-based column of the title and labels (8 = H)
    pub column: u16,
    pub title: String,
    pub occupants_label: String,
    pub rooms_label: String,
    pub meal_plan_label: String,
}

impl Default for SummaryAnchor {
    fn default() -> Self {
        Self {
            sheet: "PISO 1".to_string(),
            row: 278,
            column: 8,
            title: "RESUMEN GENERAL".to_string(),
            occupants_label: "Total Pasajeros:".to_string(),
            rooms_label: "Total Habitaciones:".to_string(),
            meal_plan_label: "Total Media Pensión:".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupNaming {
    /// Prefix for the copy taken before an import
    pub import_prefix: String,
    /// Prefix for the copy taken before a clear
    pub clean_prefix: String,
    /// Glob (relative to the workbook's directory) purged after a clear
    pub purge_pattern: String,
}

impl Default for BackupNaming {
    fn default() -> Self {
        Self {
            import_prefix: "BACKUP_".to_string(),
            clean_prefix: "BACKUP_LIMPIEZA_".to_string(),
            purge_pattern: "BACKUP_*.xlsx".to_string(),
        }
    }
}

/// Header names expected in the reservation export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceColumns {
    pub room: String,
    pub check_in: String,
    pub check_out: String,
    pub occupant_count: String,
    pub document_type: String,
    pub document_number: String,
    pub full_name: String,
    pub age: String,
    pub voucher: String,
    pub meal_plan: String,
    pub status: String,
    pub benefit_package: String,
    pub site: String,
    /// Optional; defaults to empty text when absent
    pub notes: String,
}

impl Default for SourceColumns {
    fn default() -> Self {
        Self {
            room: "Nro. habitación".to_string(),
            check_in: "Fecha de ingreso".to_string(),
            check_out: "Fecha de egreso".to_string(),
            occupant_count: "Plazas ocupadas".to_string(),
            document_type: "Tipo documento".to_string(),
            document_number: "Nro. doc.".to_string(),
            full_name: "Apellido y nombre".to_string(),
            age: "Edad".to_string(),
            voucher: "Voucher".to_string(),
            meal_plan: "Servicios".to_string(),
            status: "Estado".to_string(),
            benefit_package: "Paquete".to_string(),
            site: "Sede".to_string(),
            notes: "OBSERVACIONES".to_string(),
        }
    }
}

impl SourceColumns {
    /// Required header names, in export order
    pub fn required(&self) -> [&str; 13] {
        [
            self.room.as_str(),
            self.check_in.as_str(),
            self.check_out.as_str(),
            self.occupant_count.as_str(),
            self.document_type.as_str(),
            self.document_number.as_str(),
            self.full_name.as_str(),
            self.age.as_str(),
            self.voucher.as_str(),
            self.meal_plan.as_str(),
            self.status.as_str(),
            self.benefit_package.as_str(),
            self.site.as_str(),
        ]
    }
}
