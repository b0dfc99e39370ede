use super::cards::{EventCard, MapLocation, RoomCard};
use super::url::{parse_params, serialize_query, QueryPairs, UrlQuery};
use super::PageState;
use crate::clock::Clock;
use crate::entity::CampusEvent;
use crate::filter::{filter_events, CategoryFilter, EventQuery, SortOrder, Timeframe};
use crate::store::DataProvider;
use chrono::FixedOffset;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const EVENTS_PATH: &str = "/events";

impl UrlQuery for EventQuery {
    fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            search: pairs.get("search").unwrap_or_default().to_string(),
            timeframe: pairs.get("timeframe").map(Timeframe::from).unwrap_or_default(),
            category: pairs.get("category").map(CategoryFilter::from).unwrap_or_default(),
            sort: pairs.get("sort").map(SortOrder::from).unwrap_or_default(),
        }
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if self.category != CategoryFilter::All {
            pairs.push(("category", self.category.as_str().to_string()));
        }
        if self.timeframe != Timeframe::All {
            pairs.push(("timeframe", self.timeframe.as_str().to_string()));
        }
        if self.sort != SortOrder::Upcoming {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }
        pairs
    }
}

/// View-state controller for the events directory
pub struct EventsView {
    provider: Arc<dyn DataProvider>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
    query: EventQuery,
    results: Vec<CampusEvent>,
}

impl EventsView {
    /// Starts idle with the full list computed
    pub fn new(
        provider: Arc<dyn DataProvider>,
        clock: Arc<dyn Clock>,
        offset: FixedOffset,
    ) -> Self {
        let mut view = Self {
            provider,
            clock,
            offset,
            query: EventQuery::default(),
            results: Vec::new(),
        };
        view.recompute();
        view
    }

    /// URL -> state -> recompute. The URL is authoritative: parameters it
    /// lacks reset to their defaults.
    pub fn navigate(&mut self, url: &str) {
        self.query = parse_params(url);
        self.recompute();
    }

    /// Returns the URL to push
    pub fn set_search(&mut self, search: &str) -> String {
        self.query.search = search.trim().to_string();
        self.commit()
    }

    pub fn set_category(&mut self, category: CategoryFilter) -> String {
        self.query.category = category;
        self.commit()
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> String {
        self.query.timeframe = timeframe;
        self.commit()
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> String {
        self.query.sort = sort;
        self.commit()
    }

    /// Back to idle; the returned URL has no query string
    pub fn clear_filters(&mut self) -> String {
        self.query = EventQuery::default();
        self.commit()
    }

    pub fn query(&self) -> &EventQuery {
        &self.query
    }

    pub fn results(&self) -> &[CampusEvent] {
        &self.results
    }

    pub fn state(&self) -> PageState {
        PageState::from_default(self.query.is_default())
    }

    pub fn url(&self) -> String {
        serialize_query(EVENTS_PATH, &self.query)
    }

    /// State -> URL -> recompute
    fn commit(&mut self) -> String {
        let url = self.url();
        self.recompute();
        url
    }

    fn recompute(&mut self) {
        let now = self.clock.now().with_timezone(&self.offset);
        self.results = filter_events(self.provider.list_events(), &self.query, now)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            search = %self.query.search,
            category = self.query.category.as_str(),
            timeframe = self.query.timeframe.as_str(),
            sort = self.query.sort.as_str(),
            results = self.results.len(),
            "Recomputed event list"
        );
    }

    pub fn page(&self) -> EventsPage {
        let events: Vec<EventCard> = self
            .results
            .iter()
            .map(|e| EventCard::new(e, self.offset))
            .collect();

        let empty_message = events.is_empty().then(|| {
            if self.query.search.is_empty() {
                "There are no events matching your filters".to_string()
            } else {
                format!("No events match \"{}\"", self.query.search)
            }
        });

        EventsPage {
            query: self.query.clone(),
            state: self.state(),
            url: self.url(),
            summary: result_summary(events.len()),
            timeframe_label: self.query.timeframe.label(),
            empty_message,
            events,
        }
    }
}

/// `No events found`, `Showing 1 event`, `Showing 4 events`
pub fn result_summary(count: usize) -> String {
    match count {
        0 => "No events found".to_string(),
        1 => "Showing 1 event".to_string(),
        n => format!("Showing {} events", n),
    }
}

/// Events page view model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    pub query: EventQuery,
    pub state: PageState,
    pub url: String,
    pub summary: String,
    pub timeframe_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    pub events: Vec<EventCard>,
}

/// Event detail view model. Room and building are absent when the
/// event's references dangle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailPage {
    pub event: EventCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<MapLocation>,
}

impl EventDetailPage {
    pub fn build(provider: &dyn DataProvider, event_id: &str, offset: FixedOffset) -> Option<Self> {
        let event = provider.find_event(event_id)?;
        let room = provider.find_room(&event.room_id);
        let building = room.and_then(|r| provider.find_building(&r.building_id));

        Some(Self {
            event: EventCard::new(event, offset),
            room: room.zip(building).map(|(r, b)| RoomCard::new(r, b)),
            location: building.map(MapLocation::new),
        })
    }
}
