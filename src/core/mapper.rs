//! Reservation export → [`Reservation`] records

use crate::config::{GridConfig, SourceColumns};
use crate::core::resolver::RoomFloorResolver;
use crate::error::{GridError, GridResult};
use crate::types::Reservation;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Positions of the source columns within the CSV header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    room: usize,
    check_in: usize,
    check_out: usize,
    occupant_count: usize,
    document_type: usize,
    document_number: usize,
    full_name: usize,
    age: usize,
    voucher: usize,
    meal_plan: usize,
    status: usize,
    benefit_package: usize,
    site: usize,
    notes: Option<usize>,
}

impl ColumnIndex {
    /// Locate every required column by its trimmed name
    ///
    /// Fails with the full list of missing names; notes is optional.
    pub fn from_headers(headers: &StringRecord, columns: &SourceColumns) -> GridResult<Self> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            let name = header.trim_start_matches('\u{feff}').trim();
            positions.entry(name).or_insert(index);
        }

        let mut missing = Vec::new();
        let mut lookup = |name: &str| match positions.get(name.trim()) {
            Some(&index) => index,
            None => {
                missing.push(name.to_string());
                0
            }
        };

        let index = Self {
            room: lookup(columns.room.as_str()),
            check_in: lookup(columns.check_in.as_str()),
            check_out: lookup(columns.check_out.as_str()),
            occupant_count: lookup(columns.occupant_count.as_str()),
            document_type: lookup(columns.document_type.as_str()),
            document_number: lookup(columns.document_number.as_str()),
            full_name: lookup(columns.full_name.as_str()),
            age: lookup(columns.age.as_str()),
            voucher: lookup(columns.voucher.as_str()),
            meal_plan: lookup(columns.meal_plan.as_str()),
            status: lookup(columns.status.as_str()),
            benefit_package: lookup(columns.benefit_package.as_str()),
            site: lookup(columns.site.as_str()),
            notes: positions.get(columns.notes.trim()).copied(),
        };

        if !missing.is_empty() {
            return Err(GridError::MissingColumns(missing));
        }
        Ok(index)
    }
}

/// Result of mapping a single CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(Reservation),
    /// The room is not numeric or falls in no floor range
    Unassigned { room: String },
}

pub struct RecordMapper<'a> {
    index: ColumnIndex,
    resolver: RoomFloorResolver<'a>,
}

impl<'a> RecordMapper<'a> {
    pub fn new(index: ColumnIndex, resolver: RoomFloorResolver<'a>) -> Self {
        Self { index, resolver }
    }

    pub fn map(&self, row: &StringRecord) -> RowOutcome {
        // Short rows are tolerated; missing trailing fields read as empty
        let field = |index: usize| row.get(index).unwrap_or_default().to_string();

        let room = field(self.index.room).trim().to_string();
        let Some(floor) = self.resolver.resolve(&room) else {
            return RowOutcome::Unassigned { room };
        };

        RowOutcome::Accepted(Reservation {
            room,
            check_in: field(self.index.check_in),
            check_out: field(self.index.check_out),
            occupant_count: field(self.index.occupant_count),
            document_type: field(self.index.document_type),
            document_number: field(self.index.document_number),
            full_name: field(self.index.full_name),
            age: field(self.index.age),
            voucher: field(self.index.voucher),
            meal_plan: field(self.index.meal_plan),
            status: field(self.index.status),
            benefit_package: field(self.index.benefit_package),
            site: field(self.index.site),
            notes: self.index.notes.map(field).unwrap_or_default(),
            floor: floor.to_string(),
        })
    }
}

/// Every row of one export, split into accepted and unassigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRecords {
    /// In input order
    pub accepted: Vec<Reservation>,
    /// Rooms of rows that resolved to no floor, in input order
    pub unassigned: Vec<String>,
}

/// Read and map a reservation export from disk
pub fn read_reservations(path: &Path, config: &GridConfig) -> GridResult<MappedRecords> {
    if !path.exists() {
        return Err(GridError::MissingFile(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    read_reservations_from(file, config)
}

/// Read and map a reservation export from any reader
pub fn read_reservations_from<R: Read>(input: R, config: &GridConfig) -> GridResult<MappedRecords> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::from_headers(&headers, &config.columns)?;
    let mapper = RecordMapper::new(index, RoomFloorResolver::new(&config.floors));

    let mut mapped = MappedRecords::default();
    for record in reader.records() {
        match mapper.map(&record?) {
            RowOutcome::Accepted(reservation) => {
                debug!(room = %reservation.room, floor = %reservation.floor, "row accepted");
                mapped.accepted.push(reservation);
            }
            RowOutcome::Unassigned { room } => {
                debug!(room = %room, "row has no floor");
                mapped.unassigned.push(room);
            }
        }
    }

    Ok(mapped)
}
