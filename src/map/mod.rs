// Campus map pin placement

use crate::entity::Building;
use serde::Serialize;

/// Pin position on the campus image, in percent of its height/width
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MapPosition {
    pub top: f32,
    pub left: f32,
}

impl MapPosition {
    pub const CENTER: MapPosition = MapPosition {
        top: 50.0,
        left: 50.0,
    };

    const fn at(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// Known pin positions, keyed by map number
const POSITIONS: &[(u32, MapPosition)] = &[
    (1, MapPosition::at(12.0, 60.0)),
    (2, MapPosition::at(15.0, 70.0)),
    (3, MapPosition::at(35.0, 50.0)),
    (4, MapPosition::at(25.0, 65.0)),
    (20, MapPosition::at(45.0, 45.0)),
    (26, MapPosition::at(20.0, 25.0)),
    (29, MapPosition::at(65.0, 30.0)),
    (30, MapPosition::at(75.0, 40.0)),
    (33, MapPosition::at(55.0, 35.0)),
    (43, MapPosition::at(80.0, 75.0)),
];

/// Position for a map number; unknown numbers sit at the center
pub fn position_for(map_number: u32) -> MapPosition {
    POSITIONS
        .iter()
        .find(|(n, _)| *n == map_number)
        .map(|(_, pos)| *pos)
        .unwrap_or(MapPosition::CENTER)
}

/// Clickable pin for one building
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapPin {
    #[serde(rename = "buildingId")]
    pub building_id: String,
    #[serde(rename = "mapNumber")]
    pub map_number: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub position: MapPosition,
}

/// One pin per building that carries a map number, in input order
pub fn map_pins<'a, I>(buildings: I) -> Vec<MapPin>
where
    I: IntoIterator<Item = &'a Building>,
{
    buildings
        .into_iter()
        .filter_map(|b| {
            b.map_number.map(|n| MapPin {
                building_id: b.id.clone(),
                map_number: n,
                name: b.name.clone(),
                description: b.description.clone(),
                position: position_for(n),
            })
        })
        .collect()
}

/// Map zoom factor, clamped to [0.5, 1.5]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Zoom(f32);

impl Zoom {
    pub const MIN: f32 = 0.5;
    pub const MAX: f32 = 1.5;
    pub const STEP: f32 = 0.1;

    pub fn scale(&self) -> f32 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    pub fn zoom_out(self) -> Self {
        Self((self.0 - Self::STEP).max(Self::MIN))
    }

    pub fn can_zoom_in(&self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_zoom_out(&self) -> bool {
        self.0 > Self::MIN
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}
