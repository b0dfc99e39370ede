use crate::entity::{Building, Room};
use std::collections::HashMap;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn optional_contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.map_or(false, |h| contains_ci(h, needle))
}

/// Buildings whose name or description contains `search` (case-insensitive)
pub fn search_buildings<'a>(buildings: &'a [Building], search: &str) -> Vec<&'a Building> {
    let needle = search.to_lowercase();
    buildings
        .iter()
        .filter(|b| {
            needle.is_empty()
                || contains_ci(&b.name, &needle)
                || optional_contains_ci(b.description.as_deref(), &needle)
        })
        .collect()
}

/// Rooms whose name or description contains `search` (case-insensitive)
pub fn search_rooms<'a>(rooms: &'a [Room], search: &str) -> Vec<&'a Room> {
    let needle = search.to_lowercase();
    rooms
        .iter()
        .filter(|r| {
            needle.is_empty()
                || contains_ci(&r.name, &needle)
                || optional_contains_ci(r.description.as_deref(), &needle)
        })
        .collect()
}

/// Rooms that belong to one building
pub fn rooms_in_building<'a, I>(rooms: I, building_id: &str) -> Vec<&'a Room>
where
    I: IntoIterator<Item = &'a Room>,
{
    rooms
        .into_iter()
        .filter(|r| r.building_id == building_id)
        .collect()
}

/// Number of rooms listed for a building, dangling or not
pub fn room_count(rooms: &[Room], building_id: &str) -> usize {
    rooms.iter().filter(|r| r.building_id == building_id).count()
}

/// Outcome of a free-text directory search
#[derive(Debug, Clone, Default)]
pub struct DirectoryMatches<'a> {
    pub buildings: Vec<&'a Building>,
    pub rooms: Vec<&'a Room>,
}

impl<'a> DirectoryMatches<'a> {
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// No building matched but some room did: the room list should be shown
    pub fn prefer_rooms(&self) -> bool {
        self.buildings.is_empty() && !self.rooms.is_empty()
    }
}

/// Run the same search over buildings and rooms
pub fn search_directory<'a>(
    buildings: &'a [Building],
    rooms: &'a [Room],
    search: &str,
) -> DirectoryMatches<'a> {
    DirectoryMatches {
        buildings: search_buildings(buildings, search),
        rooms: search_rooms(rooms, search),
    }
}

/// Room paired with the building it sits in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoinedRoom<'a> {
    pub room: &'a Room,
    pub building: &'a Building,
}

/// Attach buildings to rooms, dropping rooms whose building is unknown.
/// Input order is preserved.
pub fn join_rooms<'a, I>(rooms: I, buildings: &'a [Building]) -> Vec<JoinedRoom<'a>>
where
    I: IntoIterator<Item = &'a Room>,
{
    let by_id: HashMap<&str, &Building> = buildings.iter().map(|b| (b.id.as_str(), b)).collect();

    rooms
        .into_iter()
        .filter_map(|room| {
            by_id
                .get(room.building_id.as_str())
                .map(|&building| JoinedRoom { room, building })
        })
        .collect()
}
