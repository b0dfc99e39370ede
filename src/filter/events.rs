use super::facets::{CategoryFilter, SortOrder, Timeframe};
use crate::entity::CampusEvent;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Everything that narrows or orders the event list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQuery {
    /// Case-insensitive substring over title, description and location
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub timeframe: Timeframe,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub sort: SortOrder,
}

impl EventQuery {
    /// True when every facet is at its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn matches_search(&self, event: &CampusEvent, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        event.title.to_lowercase().contains(needle)
            || event.description.to_lowercase().contains(needle)
            || event.location.to_lowercase().contains(needle)
    }
}

/// Filter and order events.
///
/// Search, category and timeframe are ANDed; the sort runs last and is
/// stable, so events with equal start dates keep their input order.
/// Never fails: an empty result is just an empty vector.
pub fn filter_events<'a>(
    events: &'a [CampusEvent],
    query: &EventQuery,
    now: DateTime<FixedOffset>,
) -> Vec<&'a CampusEvent> {
    let needle = query.search.to_lowercase();

    let mut result: Vec<&CampusEvent> = events
        .iter()
        .filter(|event| query.matches_search(event, &needle))
        .filter(|event| query.category.matches(event.category))
        .filter(|event| query.timeframe.contains(event.start_date, now))
        .collect();

    sort_events(&mut result, query.sort);
    result
}

/// Stable sort by start date
pub fn sort_events(events: &mut [&CampusEvent], order: SortOrder) {
    match order {
        SortOrder::Upcoming => events.sort_by_key(|e| e.start_date),
        SortOrder::Recent => events.sort_by(|a, b| b.start_date.cmp(&a.start_date)),
    }
}

/// The next `limit` events that have not started yet, soonest first
pub fn featured_upcoming(
    events: &[CampusEvent],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&CampusEvent> {
    let mut upcoming: Vec<&CampusEvent> = events.iter().filter(|e| e.start_date > now).collect();
    sort_events(&mut upcoming, SortOrder::Upcoming);
    upcoming.truncate(limit);
    upcoming
}
