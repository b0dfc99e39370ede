use super::cards::EventCard;
use super::events::EVENTS_PATH;
use super::url::serialize_query;
use crate::clock::Clock;
use crate::filter::{featured_upcoming, EventQuery};
use crate::store::DataProvider;
use chrono::FixedOffset;
use serde::Serialize;

/// Landing page view model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    /// Next events that have not started yet
    pub featured: Vec<EventCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl HomePage {
    pub fn build(
        provider: &dyn DataProvider,
        clock: &dyn Clock,
        offset: FixedOffset,
        featured_count: usize,
    ) -> Self {
        let featured: Vec<EventCard> =
            featured_upcoming(provider.list_events(), clock.now(), featured_count)
                .into_iter()
                .map(|e| EventCard::new(e, offset))
                .collect();

        let empty_message = featured
            .is_empty()
            .then(|| "No upcoming events scheduled.".to_string());

        Self {
            featured,
            empty_message,
        }
    }
}

/// Where a search bar submission leads: the events page with the trimmed
/// term. Blank submissions go nowhere.
pub fn search_target(raw: &str) -> Option<String> {
    let term = raw.trim();
    if term.is_empty() {
        return None;
    }
    let query = EventQuery {
        search: term.to_string(),
        ..EventQuery::default()
    };
    Some(serialize_query(EVENTS_PATH, &query))
}
