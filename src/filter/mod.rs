// Search, filter and sort over the entity collections

mod directory;
mod events;
mod facets;


pub use directory::{
    join_rooms, room_count, rooms_in_building, search_buildings, search_directory, search_rooms,
    DirectoryMatches, JoinedRoom,
};
pub use events::{featured_upcoming, filter_events, sort_events, EventQuery};
pub use facets::{CategoryFilter, SortOrder, Timeframe};
