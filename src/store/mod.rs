// Read-only entity store behind the DataProvider seam

mod seed;
mod validation;


pub use seed::{builtin_seed, load_seed_file, SeedData};
pub use validation::{validate_seed, SeedError, SeedReport};

use crate::entity::{Building, CampusEvent, Room};
use std::collections::HashMap;
use tracing::{info, warn};

/// Supplies the full, already-validated collections.
///
/// The filter engine only ever sees the slices returned here, so a backend
/// other than the in-memory store can be swapped in without touching it.
pub trait DataProvider: Send + Sync {
    fn list_buildings(&self) -> &[Building];
    fn list_rooms(&self) -> &[Room];
    fn list_events(&self) -> &[CampusEvent];

    fn find_building(&self, id: &str) -> Option<&Building> {
        self.list_buildings().iter().find(|b| b.id == id)
    }

    fn find_room(&self, id: &str) -> Option<&Room> {
        self.list_rooms().iter().find(|r| r.id == id)
    }

    fn find_event(&self, id: &str) -> Option<&CampusEvent> {
        self.list_events().iter().find(|e| e.id == id)
    }
}

/// Immutable in-memory store, built once at start
pub struct StaticStore {
    buildings: Vec<Building>,
    rooms: Vec<Room>,
    events: Vec<CampusEvent>,

    /// id -> position indexes
    building_index: HashMap<String, usize>,
    room_index: HashMap<String, usize>,
    event_index: HashMap<String, usize>,
}

impl StaticStore {
    /// Validate a seed set and build the store from it.
    ///
    /// Fails on duplicate ids or map numbers. Dangling references are
    /// logged and kept; joined views drop them.
    pub fn from_seed(seed: SeedData) -> Result<Self, SeedError> {
        let report = validate_seed(&seed)?;
        if !report.is_clean() {
            for room_id in &report.dangling_rooms {
                warn!(room_id = %room_id, "Room references unknown building");
            }
            for event_id in &report.dangling_events {
                warn!(event_id = %event_id, "Event references unknown room");
            }
        }

        let store = Self::index(seed);
        info!(
            buildings = store.buildings.len(),
            rooms = store.rooms.len(),
            events = store.events.len(),
            "Entity store loaded"
        );
        Ok(store)
    }

    fn index(seed: SeedData) -> Self {
        fn positions<T>(items: &[T], id: impl Fn(&T) -> &str) -> HashMap<String, usize> {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| (id(item).to_string(), i))
                .collect()
        }

        Self {
            building_index: positions(&seed.buildings, |b| b.id.as_str()),
            room_index: positions(&seed.rooms, |r| r.id.as_str()),
            event_index: positions(&seed.events, |e| e.id.as_str()),
            buildings: seed.buildings,
            rooms: seed.rooms,
            events: seed.events,
        }
    }
}

impl DataProvider for StaticStore {
    fn list_buildings(&self) -> &[Building] {
        &self.buildings
    }

    fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    fn list_events(&self) -> &[CampusEvent] {
        &self.events
    }

    fn find_building(&self, id: &str) -> Option<&Building> {
        self.building_index.get(id).map(|&i| &self.buildings[i])
    }

    fn find_room(&self, id: &str) -> Option<&Room> {
        self.room_index.get(id).map(|&i| &self.rooms[i])
    }

    fn find_event(&self, id: &str) -> Option<&CampusEvent> {
        self.event_index.get(id).map(|&i| &self.events[i])
    }
}
