use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;


/// Building on the campus map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Unique building identifier
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number painted on the campus map (spatial key, unique when present)
    #[serde(rename = "mapNumber")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_number: Option<u32>,

    #[serde(rename = "imageUrl")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Kind of room, used for badges in room listings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Classroom,
    Lab,
    Office,
    LectureHall,
    CommonArea,
    Other,
}

impl RoomType {
    /// Wire name, e.g. `LECTURE_HALL`
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Classroom => "CLASSROOM",
            RoomType::Lab => "LAB",
            RoomType::Office => "OFFICE",
            RoomType::LectureHall => "LECTURE_HALL",
            RoomType::CommonArea => "COMMON_AREA",
            RoomType::Other => "OTHER",
        }
    }

    /// Badge label: the wire name with the underscore turned into a space
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room inside a building
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,

    pub name: String,

    /// Owning building. May dangle; joined views drop such rooms.
    #[serde(rename = "buildingId")]
    pub building_id: String,

    pub floor: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub room_type: RoomType,
}

/// Event category facet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Workshop,
    Technical,
    Cultural,
    Sports,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 5] = [
        EventCategory::Workshop,
        EventCategory::Technical,
        EventCategory::Cultural,
        EventCategory::Sports,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "workshop",
            EventCategory::Technical => "technical",
            EventCategory::Cultural => "cultural",
            EventCategory::Sports => "sports",
            EventCategory::Other => "other",
        }
    }

    /// Strict lookup by wire name. Query facets use the permissive
    /// `CategoryFilter` instead.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Label shown on the category picker
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshops",
            EventCategory::Technical => "Technical",
            EventCategory::Cultural => "Cultural",
            EventCategory::Sports => "Sports",
            EventCategory::Other => "Other",
        }
    }
}

/// CampusEvent is a scheduled happening on campus.
///
/// `location` is a free-text label kept alongside `room_id`; the two are
/// never reconciled, so an event may name an informal spot while pointing
/// at an unrelated (or missing) room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampusEvent {
    pub id: String,

    pub title: String,

    pub description: String,

    /// Free-text location label
    pub location: String,

    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,

    /// Expected to be >= start_date, not enforced
    #[serde(rename = "endDate")]
    pub end_date: DateTime<Utc>,

    #[serde(rename = "roomId")]
    pub room_id: String,

    /// Events without a category never match a concrete category filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,

    #[serde(rename = "imageUrl")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
