use super::cards::{BuildingCard, EventCard, MapLocation, RoomCard};
use super::url::{parse_params, serialize_query, QueryPairs, UrlQuery};
use super::PageState;
use crate::entity::{Building, CampusEvent, Room};
use crate::filter::{
    join_rooms, room_count, rooms_in_building, search_directory, sort_events, SortOrder,
};
use crate::map::{map_pins, MapPin, Zoom};
use crate::store::DataProvider;
use chrono::FixedOffset;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const COLLEGE_PATH: &str = "/college";

/// Directory parameters carried in the URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryQuery {
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
}

impl DirectoryQuery {
    pub fn for_building(building_id: &str) -> Self {
        Self {
            search: String::new(),
            building: Some(building_id.to_string()),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl UrlQuery for DirectoryQuery {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            search: pairs.get("search").unwrap_or_default().to_string(),
            building: pairs.get("building").map(str::to_string),
        }
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if let Some(ref building) = self.building {
            pairs.push(("building", building.clone()));
        }
        pairs
    }
}

/// Which result list the directory shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryTab {
    #[default]
    Buildings,
    Rooms,
}

/// View-state controller for the building/room directory
pub struct DirectoryView {
    provider: Arc<dyn DataProvider>,
    query: DirectoryQuery,
    tab: DirectoryTab,
    buildings: Vec<Building>,
    /// Rooms with a known building, in store order
    rooms: Vec<(Room, Building)>,
    building_matches: usize,
    room_matches: usize,
    zoom: Zoom,
}

impl DirectoryView {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        let mut view = Self {
            provider,
            query: DirectoryQuery::default(),
            tab: DirectoryTab::Buildings,
            buildings: Vec::new(),
            rooms: Vec::new(),
            building_matches: 0,
            room_matches: 0,
            zoom: Zoom::default(),
        };
        view.recompute();
        view
    }

    /// URL -> state -> recompute. The tab is re-derived from scratch.
    pub fn navigate(&mut self, url: &str) {
        self.query = parse_params(url);
        self.tab = DirectoryTab::Buildings;
        self.recompute();
    }

    /// Returns the URL to push. The tab is re-derived for the new search.
    pub fn set_search(&mut self, search: &str) -> String {
        self.query.search = search.trim().to_string();
        self.tab = DirectoryTab::Buildings;
        self.commit()
    }

    /// Selecting a building always switches to the room list
    pub fn select_building(&mut self, building_id: &str) -> String {
        self.query.building = Some(building_id.to_string());
        self.tab = DirectoryTab::Rooms;
        self.commit()
    }

    /// Manual tab switch; not part of the URL
    pub fn set_tab(&mut self, tab: DirectoryTab) {
        self.tab = tab;
    }

    /// Map zoom survives navigation; it is not part of the URL
    pub fn zoom_in(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_in();
        self.zoom
    }

    pub fn zoom_out(&mut self) -> Zoom {
        self.zoom = self.zoom.zoom_out();
        self.zoom
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Drops search and selection; the returned URL has no query string
    pub fn clear_filters(&mut self) -> String {
        self.query = DirectoryQuery::default();
        self.tab = DirectoryTab::Buildings;
        self.commit()
    }

    pub fn query(&self) -> &DirectoryQuery {
        &self.query
    }

    pub fn tab(&self) -> DirectoryTab {
        self.tab
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Visible rooms (dangling ones already dropped)
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().map(|(room, _)| room)
    }

    /// Raw match counts before dangling rooms are dropped
    pub fn match_counts(&self) -> (usize, usize) {
        (self.building_matches, self.room_matches)
    }

    pub fn state(&self) -> PageState {
        PageState::from_default(self.query.is_default())
    }

    pub fn url(&self) -> String {
        serialize_query(COLLEGE_PATH, &self.query)
    }

    fn commit(&mut self) -> String {
        let url = self.url();
        self.recompute();
        url
    }

    /// Search narrows both lists; a selected building further narrows the
    /// room list to its own rooms.
    fn recompute(&mut self) {
        let all_buildings = self.provider.list_buildings();
        let matches =
            search_directory(all_buildings, self.provider.list_rooms(), &self.query.search);

        let selected_rooms: Vec<&Room> = match self.query.building {
            Some(ref id) => rooms_in_building(matches.rooms.iter().copied(), id),
            None => matches.rooms.clone(),
        };

        self.building_matches = matches.building_count();
        self.room_matches = selected_rooms.len();

        if self.query.building.is_some() || matches.prefer_rooms() {
            self.tab = DirectoryTab::Rooms;
        }

        self.buildings = matches.buildings.into_iter().cloned().collect();
        self.rooms = join_rooms(selected_rooms, all_buildings)
            .into_iter()
            .map(|j| (j.room.clone(), j.building.clone()))
            .collect();

        debug!(
            search = %self.query.search,
            building = ?self.query.building,
            buildings = self.buildings.len(),
            rooms = self.rooms.len(),
            "Recomputed directory"
        );
    }

    pub fn page(&self) -> DirectoryPage {
        let provider = self.provider.as_ref();
        let search = &self.query.search;

        let selected = self
            .query
            .building
            .as_deref()
            .and_then(|id| provider.find_building(id));

        let buildings: Vec<BuildingCard> = self
            .buildings
            .iter()
            .map(|b| BuildingCard::new(b, room_count(provider.list_rooms(), &b.id)))
            .collect();

        let rooms: Vec<RoomCard> = self
            .rooms
            .iter()
            .map(|(room, building)| RoomCard::new(room, building))
            .collect();

        let buildings_empty_message = buildings.is_empty().then(|| {
            if search.is_empty() {
                "There are no buildings in the database".to_string()
            } else {
                format!("No buildings match \"{}\"", search)
            }
        });

        let rooms_empty_message = rooms.is_empty().then(|| {
            if !search.is_empty() {
                format!("No rooms match \"{}\"", search)
            } else if self.query.building.is_some() {
                "This building has no rooms listed".to_string()
            } else {
                "There are no rooms in the database".to_string()
            }
        });

        DirectoryPage {
            query: self.query.clone(),
            state: self.state(),
            url: self.url(),
            active_tab: self.tab,
            building_count: self.building_matches,
            room_count: self.room_matches,
            rooms_heading: selected.map(|b| format!("Rooms in {}", b.name)),
            selected_building: selected
                .map(|b| BuildingCard::new(b, room_count(provider.list_rooms(), &b.id))),
            buildings,
            rooms,
            buildings_empty_message,
            rooms_empty_message,
            pins: map_pins(provider.list_buildings()),
            map_zoom: self.zoom,
        }
    }
}

/// Directory page view model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage {
    pub query: DirectoryQuery,
    pub state: PageState,
    pub url: String,
    pub active_tab: DirectoryTab,
    pub building_count: usize,
    pub room_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_building: Option<BuildingCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms_heading: Option<String>,
    pub buildings: Vec<BuildingCard>,
    pub rooms: Vec<RoomCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings_empty_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms_empty_message: Option<String>,
    /// Every mapped building, regardless of the search
    pub pins: Vec<MapPin>,
    pub map_zoom: Zoom,
}

/// Room detail view model. `None` when the room or its building is unknown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailPage {
    pub room: RoomCard,
    pub location: MapLocation,
    /// Events booked into this room, soonest first
    pub events: Vec<EventCard>,
}

impl RoomDetailPage {
    pub fn build(provider: &dyn DataProvider, room_id: &str, offset: FixedOffset) -> Option<Self> {
        let room = provider.find_room(room_id)?;
        let building = provider.find_building(&room.building_id)?;

        let mut events: Vec<&CampusEvent> = provider
            .list_events()
            .iter()
            .filter(|e| e.room_id == room.id)
            .collect();
        sort_events(&mut events, SortOrder::Upcoming);

        Some(Self {
            room: RoomCard::new(room, building),
            location: MapLocation::new(building),
            events: events.into_iter().map(|e| EventCard::new(e, offset)).collect(),
        })
    }
}
