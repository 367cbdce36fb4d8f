use crate::types::{Reservation, Summary};
use std::collections::{HashMap, HashSet};

/// All reservations for one room, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGroup {
    pub floor: String,
    pub room: String,
    pub reservations: Vec<Reservation>,
}

/// Reservations grouped by (floor, room), keys in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedReservations {
    groups: Vec<RoomGroup>,
}

impl GroupedReservations {
    pub fn groups(&self) -> &[RoomGroup] {
        &self.groups
    }

    pub fn get(&self, floor: &str, room: &str) -> Option<&RoomGroup> {
        self.groups
            .iter()
            .find(|group| group.floor == floor && group.room == room)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group records by (floor, room), keeping insertion order within each key
pub fn group(records: &[Reservation]) -> GroupedReservations {
    let mut groups: Vec<RoomGroup> = Vec::new();
    let mut positions: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let key = (record.floor.as_str(), record.room.as_str());
        match positions.get(&key) {
            Some(&index) => groups[index].reservations.push(record.clone()),
            None => {
                positions.insert(key, groups.len());
                groups.push(RoomGroup {
                    floor: record.floor.clone(),
                    room: record.room.clone(),
                    reservations: vec![record.clone()],
                });
            }
        }
    }

    GroupedReservations { groups }
}

/// Totals over the accepted records
///
/// Occupants are counted per record, not from the PAX field. A record counts
/// toward meal plans when its services text contains any keyword,
/// case-insensitively.
pub fn summarize(records: &[Reservation], meal_plan_keywords: &[String]) -> Summary {
    let unique_rooms: HashSet<&str> = records.iter().map(|r| r.room.as_str()).collect();
    let meal_plan_count = records
        .iter()
        .filter(|r| r.has_meal_plan(meal_plan_keywords))
        .count();

    Summary {
        total_occupants: records.len(),
        unique_rooms: unique_rooms.len(),
        meal_plan_count,
    }
}
