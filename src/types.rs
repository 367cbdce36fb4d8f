use serde::{Deserialize, Serialize};

//==============================================================================
// Reservation Records
//==============================================================================

/// One occupant-stay read from the reservation export
///
/// Every field is carried through as text; only `room` is interpreted (to
/// resolve the floor). `floor` is the name of the floor sheet the room
/// belongs to and is always set for records that reach the writers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reservation {
    pub room: String,
    pub check_in: String,
    pub check_out: String,
    /// PAX as exported; not used for counting
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
    pub notes: String,
    pub floor: String,
}

impl Reservation {
    /// Create a reservation for `room` on `floor` with all other fields empty
    pub fn new(room: impl Into<String>, floor: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            floor: floor.into(),
            ..Default::default()
        }
    }

    /// True when the meal plan mentions any of the (uppercase) keywords
    pub fn has_meal_plan(&self, keywords: &[String]) -> bool {
        let services = self.meal_plan.to_uppercase();
        keywords
            .iter()
            .any(|keyword| services.contains(&keyword.to_uppercase()))
    }
}

//==============================================================================
// Floor Configuration
//==============================================================================

/// Inclusive room-number range served by one floor sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRange {
    /// Floor identifier, which is also the floor sheet's name
    pub floor: String,
    pub min_room: u32,
    pub max_room: u32,
}

impl FloorRange {
    pub fn new(floor: impl Into<String>, min_room: u32, max_room: u32) -> Self {
        Self {
            floor: floor.into(),
            min_room,
            max_room,
        }
    }

    pub fn contains(&self, room: u32) -> bool {
        (self.min_room..=self.max_room).contains(&room)
    }
}

//==============================================================================
// Aggregates
//==============================================================================

/// Totals computed once per run over every accepted record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of accepted records (one per occupant-stay)
    pub total_occupants: usize,
    pub unique_rooms: usize,
    pub meal_plan_count: usize,
}
