use crate::entity::{Building, CampusEvent, EventCategory, Room, RoomType};
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full collection set the store is built from
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub events: Vec<CampusEvent>,
}

/// Load a seed set from a JSON file (camelCase field names, RFC 3339 dates)
pub fn load_seed_file(path: &Path) -> Result<SeedData> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed: SeedData = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    Ok(seed)
}

fn building(id: &str, name: &str, description: &str, map_number: u32) -> Building {
    Building {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        map_number: Some(map_number),
        image_url: Some("/placeholder.svg".to_string()),
    }
}

fn room(
    id: &str,
    name: &str,
    building_id: &str,
    floor: i32,
    room_type: RoomType,
    description: &str,
) -> Room {
    Room {
        id: id.to_string(),
        name: name.to_string(),
        building_id: building_id.to_string(),
        floor,
        description: Some(description.to_string()),
        room_type,
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    location: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    room_id: &str,
    category: Option<EventCategory>,
) -> CampusEvent {
    CampusEvent {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        start_date,
        end_date,
        room_id: room_id.to_string(),
        category,
        image_url: Some("/placeholder.svg".to_string()),
    }
}

/// Built-in campus data. Event dates are laid out relative to `now`.
pub fn builtin_seed(now: DateTime<Utc>) -> SeedData {
    let days = |n: i64| now + Duration::days(n);
    let hours = |base: DateTime<Utc>, n: i64| base + Duration::hours(n);

    let buildings = vec![
        building(
            "1",
            "Electrical Main Block",
            "Main electrical engineering department building",
            1,
        ),
        building("2", "PG Block", "Postgraduate studies building", 2),
        building(
            "3",
            "Machines Lab Block",
            "Contains various machine laboratories",
            3,
        ),
        building(
            "4",
            "P.G. Lab Block",
            "Laboratories for postgraduate students",
            4,
        ),
        building(
            "5",
            "Main Block",
            "Administrative offices and central classrooms",
            20,
        ),
        building("33", "Play Area", "Central campus recreation area", 33),
    ];

    let rooms = vec![
        room(
            "101",
            "Digital Electronics Lab",
            "1",
            1,
            RoomType::Lab,
            "Lab for digital electronics experiments",
        ),
        room(
            "102",
            "Microprocessors Lab",
            "1",
            1,
            RoomType::Lab,
            "Lab for microprocessor programming and testing",
        ),
        room(
            "103",
            "Lecture Hall A",
            "1",
            2,
            RoomType::LectureHall,
            "Main lecture hall for 100+ students",
        ),
        room(
            "201",
            "Research Lab 1",
            "2",
            1,
            RoomType::Lab,
            "Advanced research laboratory for postgraduate students",
        ),
        room(
            "202",
            "Faculty Offices",
            "2",
            2,
            RoomType::Office,
            "Faculty offices for the engineering department",
        ),
        room(
            "301",
            "Machine Shop",
            "3",
            1,
            RoomType::Lab,
            "Workshop for machine fabrication and testing",
        ),
        room(
            "302",
            "Electrical Machines Lab",
            "3",
            1,
            RoomType::Lab,
            "Lab for electrical machines experiments",
        ),
        room(
            "401",
            "PG Research Area",
            "4",
            1,
            RoomType::Lab,
            "Open research area for postgraduate students",
        ),
        room(
            "402",
            "Conference Room",
            "4",
            2,
            RoomType::Other,
            "Conference room for department meetings and presentations",
        ),
        room(
            "501",
            "Seminar Hall",
            "5",
            1,
            RoomType::LectureHall,
            "Hall for guest talks and stage programmes",
        ),
        room(
            "502",
            "Classroom 502",
            "5",
            1,
            RoomType::Classroom,
            "General purpose first year classroom",
        ),
        room(
            "503",
            "Principal's Office",
            "5",
            2,
            RoomType::Office,
            "Office of the principal and administrative staff",
        ),
        room(
            "504",
            "Student Lounge",
            "5",
            0,
            RoomType::CommonArea,
            "Seating and notice boards for students",
        ),
        room(
            "505",
            "Computer Centre",
            "5",
            2,
            RoomType::Lab,
            "Central computing facility with 60 terminals",
        ),
    ];

    let events = vec![
        event(
            "1",
            "Engineering Workshop",
            "Hands-on workshop on latest engineering practices and technologies",
            "Lecture Hall A",
            days(2),
            hours(days(2), 3),
            "103",
            Some(EventCategory::Workshop),
        ),
        event(
            "2",
            "Technical Symposium",
            "Annual technical symposium with paper presentations and project exhibitions",
            "Electrical Main Block",
            days(5),
            days(6),
            "101",
            Some(EventCategory::Technical),
        ),
        event(
            "3",
            "Guest Lecture: AI in Engineering",
            "Special lecture on applications of artificial intelligence in engineering fields",
            "Conference Room",
            days(1),
            hours(days(1), 2),
            "402",
            Some(EventCategory::Technical),
        ),
        event(
            "4",
            "Project Presentation Day",
            "Final year students present their capstone projects",
            "PG Research Area",
            days(7),
            days(7),
            "401",
            None,
        ),
        event(
            "5",
            "Industry Connect Program",
            "Networking event with industry professionals and alumni",
            "Play Area",
            days(10),
            days(10),
            "33",
            Some(EventCategory::Other),
        ),
        event(
            "6",
            "Robotics Competition",
            "Inter-college robotics design and programming competition",
            "Machine Shop",
            days(15),
            days(15),
            "301",
            Some(EventCategory::Technical),
        ),
        event(
            "7",
            "Annual Cultural Fest",
            "Music, dance and drama performances by student clubs",
            "Seminar Hall",
            days(20),
            days(21),
            "501",
            Some(EventCategory::Cultural),
        ),
        event(
            "8",
            "Inter-Department Football Tournament",
            "Knockout football matches between department teams",
            "Play Area",
            days(-3),
            hours(days(-3), 4),
            "33",
            Some(EventCategory::Sports),
        ),
        event(
            "9",
            "Resume Writing Session",
            "Placement cell session on preparing resumes and cover letters",
            "Classroom 502",
            days(-6),
            hours(days(-6), 2),
            "502",
            Some(EventCategory::Workshop),
        ),
    ];

    SeedData {
        buildings,
        rooms,
        events,
    }
}
