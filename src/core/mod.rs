//! Room-to-floor distribution engine

pub mod cleaner;
pub mod distributor;
pub mod grouper;
pub mod ledger;
pub mod mapper;
pub mod pipeline;
pub mod resolver;
pub mod summary;

pub use cleaner::{clean, CleanReport, CleanWindow, GridCleaner};
pub use distributor::{Distribution, FloorDistributor};
pub use grouper::{group, summarize, GroupedReservations, RoomGroup};
pub use ledger::{LedgerAppend, LedgerAppender};
pub use mapper::{read_reservations, read_reservations_from, ColumnIndex, MappedRecords, RecordMapper, RowOutcome};
pub use pipeline::{check_required_sheets, import_reservations, ImportReport, ImportWarning, RoomPlacement};
pub use resolver::RoomFloorResolver;
pub use summary::SummaryWriter;
