use super::directory::{DirectoryQuery, COLLEGE_PATH};
use super::url::serialize_query;
use crate::entity::{Building, CampusEvent, EventCategory, Room, RoomType};
use crate::map::{position_for, MapPosition};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// `Mon, Mar 2` in the portal's fixed locale
pub fn format_date(date: DateTime<Utc>, offset: FixedOffset) -> String {
    date.with_timezone(&offset).format("%a, %b %-d").to_string()
}

/// `9:00 AM`
pub fn format_time(date: DateTime<Utc>, offset: FixedOffset) -> String {
    date.with_timezone(&offset).format("%-I:%M %p").to_string()
}

/// Start date, plus the end date when the event spans several days
pub fn date_label(start: DateTime<Utc>, end: DateTime<Utc>, offset: FixedOffset) -> String {
    let same_day =
        start.with_timezone(&offset).date_naive() == end.with_timezone(&offset).date_naive();
    if same_day {
        format_date(start, offset)
    } else {
        format!("{} - {}", format_date(start, offset), format_date(end, offset))
    }
}

pub fn time_range(start: DateTime<Utc>, end: DateTime<Utc>, offset: FixedOffset) -> String {
    format!("{} - {}", format_time(start, offset), format_time(end, offset))
}

/// Event as listed on the home and events pages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub date_label: String,
    pub time_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub detail_url: String,
}

impl EventCard {
    pub fn new(event: &CampusEvent, offset: FixedOffset) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            start_date: event.start_date,
            end_date: event.end_date,
            date_label: date_label(event.start_date, event.end_date, offset),
            time_range: time_range(event.start_date, event.end_date, offset),
            category: event.category,
            image_url: event.image_url.clone(),
            detail_url: format!("/events/{}", urlencoding::encode(&event.id)),
        }
    }
}

/// Building tile in the directory
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingCard {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub room_count: usize,
    /// Directory URL that selects this building
    pub select_url: String,
}

impl BuildingCard {
    pub fn new(building: &Building, room_count: usize) -> Self {
        Self {
            id: building.id.clone(),
            name: building.name.clone(),
            description: building.description.clone(),
            map_number: building.map_number,
            image_url: building.image_url.clone(),
            room_count,
            select_url: building_url(&building.id),
        }
    }
}

/// Room tile, always joined with its building
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCard {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub floor: i32,
    pub room_type: RoomType,
    pub type_label: String,
    pub building_id: String,
    pub building_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_number: Option<u32>,
    /// `Main Block, Floor 1`
    pub location_label: String,
    pub detail_url: String,
}

impl RoomCard {
    pub fn new(room: &Room, building: &Building) -> Self {
        Self {
            id: room.id.clone(),
            name: room.name.clone(),
            description: room.description.clone(),
            floor: room.floor,
            room_type: room.room_type,
            type_label: room.room_type.label(),
            building_id: building.id.clone(),
            building_name: building.name.clone(),
            map_number: building.map_number,
            location_label: format!("{}, Floor {}", building.name, room.floor),
            detail_url: format!("/college/room/{}", urlencoding::encode(&room.id)),
        }
    }
}

/// Where an event or room sits on the campus map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLocation {
    pub building_id: String,
    pub building_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_number: Option<u32>,
    pub position: MapPosition,
    /// Directory URL with the building preselected
    pub map_url: String,
}

impl MapLocation {
    pub fn new(building: &Building) -> Self {
        Self {
            building_id: building.id.clone(),
            building_name: building.name.clone(),
            map_number: building.map_number,
            position: building
                .map_number
                .map(position_for)
                .unwrap_or(MapPosition::CENTER),
            map_url: building_url(&building.id),
        }
    }
}

/// `/college?building=<id>`
pub fn building_url(building_id: &str) -> String {
    serialize_query(COLLEGE_PATH, &DirectoryQuery::for_building(building_id))
}
