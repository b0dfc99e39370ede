use super::SeedData;
use std::collections::HashSet;
use std::fmt;

/// Seed validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum SeedError {
    DuplicateBuildingId(String),
    DuplicateRoomId(String),
    DuplicateEventId(String),
    DuplicateMapNumber(u32),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::DuplicateBuildingId(id) => write!(f, "duplicate building id '{}'", id),
            SeedError::DuplicateRoomId(id) => write!(f, "duplicate room id '{}'", id),
            SeedError::DuplicateEventId(id) => write!(f, "duplicate event id '{}'", id),
            SeedError::DuplicateMapNumber(n) => {
                write!(f, "map number {} is used by more than one building", n)
            }
        }
    }
}

impl std::error::Error for SeedError {}

/// Data-quality findings that are tolerated rather than rejected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    /// Rooms whose building_id references no building
    pub dangling_rooms: Vec<String>,
    /// Events whose room_id references no room
    pub dangling_events: Vec<String>,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_rooms.is_empty() && self.dangling_events.is_empty()
    }
}

/// Validates a seed set before it becomes the store.
///
/// Rules:
/// - Ids are unique per entity type
/// - Map numbers are unique among buildings that have one
///
/// Dangling foreign keys (room -> building, event -> room) are reported,
/// never rejected.
pub fn validate_seed(seed: &SeedData) -> Result<SeedReport, SeedError> {
    let mut building_ids = HashSet::new();
    let mut map_numbers = HashSet::new();
    for building in &seed.buildings {
        if !building_ids.insert(building.id.as_str()) {
            return Err(SeedError::DuplicateBuildingId(building.id.clone()));
        }
        if let Some(n) = building.map_number {
            if !map_numbers.insert(n) {
                return Err(SeedError::DuplicateMapNumber(n));
            }
        }
    }

    let mut room_ids = HashSet::new();
    for room in &seed.rooms {
        if !room_ids.insert(room.id.as_str()) {
            return Err(SeedError::DuplicateRoomId(room.id.clone()));
        }
    }

    let mut event_ids = HashSet::new();
    for event in &seed.events {
        if !event_ids.insert(event.id.as_str()) {
            return Err(SeedError::DuplicateEventId(event.id.clone()));
        }
    }

    let dangling_rooms = seed
        .rooms
        .iter()
        .filter(|room| !building_ids.contains(room.building_id.as_str()))
        .map(|room| room.id.clone())
        .collect();

    let dangling_events = seed
        .events
        .iter()
        .filter(|event| !room_ids.contains(event.room_id.as_str()))
        .map(|event| event.id.clone())
        .collect();

    Ok(SeedReport {
        dangling_rooms,
        dangling_events,
    })
}
