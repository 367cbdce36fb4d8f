use crate::types::FloorRange;

/// Maps room identifiers to floor sheets via inclusive ranges
///
/// Ranges are scanned in declared order and the first match wins. They are
/// expected to be disjoint; overlap is a configuration mistake and is not
/// detected here.
#[derive(Debug, Clone, Copy)]
pub struct RoomFloorResolver<'a> {
    ranges: &'a [FloorRange],
}

impl<'a> RoomFloorResolver<'a> {
    pub fn new(ranges: &'a [FloorRange]) -> Self {
        Self { ranges }
    }

    /// Floor for `room`, or `None` if it is not an integer or in no range
    pub fn resolve(&self, room: &str) -> Option<&'a str> {
        let number: u32 = room.trim().parse().ok()?;
        self.ranges
            .iter()
            .find(|range| range.contains(number))
            .map(|range| range.floor.as_str())
    }
}
