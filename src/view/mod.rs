// Page view-state controllers, URL synchronization and view models

mod cards;
mod directory;
mod events;
mod home;
mod route;
pub mod url;

#[cfg(test)]
mod tests;

pub use cards::{
    building_url, date_label, format_date, format_time, time_range, BuildingCard, EventCard,
    MapLocation, RoomCard,
};
pub use directory::{
    DirectoryPage, DirectoryQuery, DirectoryTab, DirectoryView, RoomDetailPage, COLLEGE_PATH,
};
pub use events::{result_summary, EventDetailPage, EventsPage, EventsView, EVENTS_PATH};
pub use home::{search_target, HomePage};
pub use route::Route;
pub use url::{parse_params, serialize_query, UrlQuery};

use serde::Serialize;

/// Per-page filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageState {
    /// Every parameter at its default; the full list is shown
    Idle,
    /// At least one non-default parameter
    Filtered,
}

impl PageState {
    pub fn from_default(all_default: bool) -> Self {
        if all_default {
            PageState::Idle
        } else {
            PageState::Filtered
        }
    }
}
