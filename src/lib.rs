//! paxgrid - reservation export importer for room-grid workbooks
//!
//! Reads a booking-system CSV export, appends every row to the log sheet of
//! an `.xlsx` workbook, places each room's occupants on the matching floor
//! sheet and refreshes the summary block. A separate clean operation empties
//! the data regions of those sheets for a new cycle.
//!
//! # Features
//!
//! - Room number to floor resolution through configurable ranges
//! - Column mapping by CSV header name (order independent)
//! - Append-only log sheet, overwrite-in-place floor grids
//! - Timestamped backups before every write
//! - YAML configuration overrides
//!
//! # Example
//!
//! ```no_run
//! use paxgrid::config::GridConfig;
//! use paxgrid::core::{import_reservations, read_reservations};
//! use paxgrid::excel::{load_workbook, save_workbook};
//! use std::path::Path;
//!
//! let config = GridConfig::default();
//! let mapped = read_reservations(Path::new("reservas.csv"), &config)?;
//! let mut workbook = load_workbook(&config.workbook)?;
//!
//! let report = import_reservations(&mut workbook, &mapped, &config)?;
//! println!("Occupants: {}", report.summary.total_occupants);
//!
//! save_workbook(&workbook, &config.workbook)?;
//! # Ok::<(), paxgrid::error::GridError>(())
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod layout;
pub mod types;

// Re-export commonly used types
pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use types::{FloorRange, Reservation, Summary};
