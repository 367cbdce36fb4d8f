//! Import orchestration: log sheet, floor sheets, summary block

use crate::config::GridConfig;
use crate::core::distributor::FloorDistributor;
use crate::core::grouper::{group, summarize};
use crate::core::ledger::{LedgerAppend, LedgerAppender};
use crate::core::mapper::MappedRecords;
use crate::core::summary::SummaryWriter;
use crate::error::{GridError, GridResult};
use crate::excel::Workbook;
use crate::types::Summary;
use std::fmt;
use tracing::info;

/// Non-fatal problem found while importing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportWarning {
    /// The room is not numeric or outside every floor range
    NoFloor { room: String },
    /// The floor sheet has no row for this room
    RoomNotFound { room: String, floor: String },
}

impl fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportWarning::NoFloor { room } => {
                write!(f, "Room '{}' has no floor assigned; skipped", room)
            }
            ImportWarning::RoomNotFound { room, floor } => {
                write!(f, "Room '{}' not found in '{}'", room, floor)
            }
        }
    }
}

/// Where one room's occupants landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPlacement {
    pub floor: String,
    pub room: String,
    pub anchor_row: u32,
    pub occupants: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub ledger: Option<LedgerAppend>,
    pub placements: Vec<RoomPlacement>,
    pub summary: Summary,
    pub warnings: Vec<ImportWarning>,
}

impl ImportReport {
    /// Occupants written onto floor sheets
    pub fn placed_occupants(&self) -> usize {
        self.placements.iter().map(|p| p.occupants).sum()
    }

    pub fn ledger_rows(&self) -> usize {
        self.ledger.map(|append| append.rows_written).unwrap_or(0)
    }
}

/// Fail unless the log sheet, every floor sheet and the summary sheet exist
pub fn check_required_sheets(workbook: &Workbook, config: &GridConfig) -> GridResult<()> {
    let required = std::iter::once(config.ledger_sheet.as_str())
        .chain(config.floor_sheets())
        .chain(std::iter::once(config.summary.sheet.as_str()));

    for name in required {
        if !workbook.contains_sheet(name) {
            return Err(GridError::MissingSheet(name.to_string()));
        }
    }
    Ok(())
}

/// Apply one export to the workbook in memory
///
/// Preconditions are checked before the first cell is written, so an error
/// return leaves `workbook` untouched.
pub fn import_reservations(
    workbook: &mut Workbook,
    mapped: &MappedRecords,
    config: &GridConfig,
) -> GridResult<ImportReport> {
    if mapped.accepted.is_empty() {
        return Err(GridError::NoValidRecords);
    }
    check_required_sheets(workbook, config)?;

    let records = &mapped.accepted;
    let mut report = ImportReport {
        summary: summarize(records, &config.meal_plan_keywords),
        warnings: mapped
            .unassigned
            .iter()
            .map(|room| ImportWarning::NoFloor { room: room.clone() })
            .collect(),
        ..Default::default()
    };

    let ledger = workbook.require_sheet_mut(&config.ledger_sheet)?;
    report.ledger = Some(LedgerAppender::new().append(ledger, records));

    let distributor = FloorDistributor::new(config.max_row);
    let grouped = group(records);
    for room_group in grouped.groups() {
        let sheet = workbook.require_sheet_mut(&room_group.floor)?;
        let distribution = distributor.distribute(sheet, &room_group.room, &room_group.reservations);

        match distribution.anchor_row {
            Some(anchor_row) => report.placements.push(RoomPlacement {
                floor: room_group.floor.clone(),
                room: room_group.room.clone(),
                anchor_row,
                occupants: distribution.rows_written,
            }),
            None => report.warnings.push(ImportWarning::RoomNotFound {
                room: room_group.room.clone(),
                floor: room_group.floor.clone(),
            }),
        }
    }

    let summary_sheet = workbook.require_sheet_mut(&config.summary.sheet)?;
    SummaryWriter::new(&config.summary).write_summary(summary_sheet, &report.summary);

    info!(
        records = records.len(),
        placed = report.placed_occupants(),
        warnings = report.warnings.len(),
        "import applied"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Reservation;

    fn workbook(config: &GridConfig) -> Workbook {
        let mut workbook = Workbook::new();
        workbook.add_sheet(&config.ledger_sheet);
        for name in config.floor_sheets() {
            workbook.add_sheet(name).set(2, 2, "101");
        }
        workbook
    }

    fn mapped(rooms: &[&str]) -> MappedRecords {
        MappedRecords {
            accepted: rooms.iter().map(|room| Reservation::new(*room, "PISO 1")).collect(),
            unassigned: Vec::new(),
        }
    }

    #[test]
    fn test_no_valid_records() {
        let config = GridConfig::default();
        let mut wb = workbook(&config);
        let result = import_reservations(&mut wb, &MappedRecords::default(), &config);
        assert!(matches!(result, Err(GridError::NoValidRecords)));
    }

    #[test]
    fn test_missing_sheet_leaves_workbook_untouched() {
        let config = GridConfig::default();
        let mut wb = Workbook::new();
        wb.add_sheet(&config.ledger_sheet);
        wb.add_sheet("PISO 1");
        let before = wb.clone();

        let result = import_reservations(&mut wb, &mapped(&["101"]), &config);

        assert!(matches!(result, Err(GridError::MissingSheet(name)) if name == "PISO 2"));
        assert_eq!(wb, before);
    }

    #[test]
    fn test_room_not_found_is_warning() {
        let config = GridConfig::default();
        let mut wb = workbook(&config);

        let report = import_reservations(&mut wb, &mapped(&["101", "102"]), &config).unwrap();

        assert_eq!(report.ledger_rows(), 2);
        assert_eq!(report.placed_occupants(), 1);
        assert_eq!(
            report.warnings,
            vec![ImportWarning::RoomNotFound {
                room: "102".to_string(),
                floor: "PISO 1".to_string()
            }]
        );
    }

    #[test]
    fn test_warning_messages() {
        let no_floor = ImportWarning::NoFloor { room: "999".to_string() };
        assert_eq!(no_floor.to_string(), "Room '999' has no floor assigned; skipped");

        let not_found = ImportWarning::RoomNotFound {
            room: "230".to_string(),
            floor: "PISO 2".to_string(),
        };
        assert_eq!(not_found.to_string(), "Room '230' not found in 'PISO 2'");
    }
}
