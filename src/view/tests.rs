use super::*;
use crate::clock::FixedClock;
use crate::entity::{EventCategory, Room, RoomType};
use crate::filter::{CategoryFilter, EventQuery, SortOrder, Timeframe};
use crate::store::{builtin_seed, DataProvider, StaticStore};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap()
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

fn store() -> Arc<StaticStore> {
    Arc::new(StaticStore::from_seed(builtin_seed(now())).unwrap())
}

fn events_view() -> EventsView {
    EventsView::new(store(), Arc::new(FixedClock(now())), utc())
}

fn directory_view() -> DirectoryView {
    DirectoryView::new(store())
}

fn event_ids(view: &EventsView) -> Vec<&str> {
    view.results().iter().map(|e| e.id.as_str()).collect()
}

fn room_ids(view: &DirectoryView) -> Vec<&str> {
    view.rooms().map(|r| r.id.as_str()).collect()
}

// ── URL parameters ────────────────────────────────────────────────────────────

#[test]
fn test_parse_event_params() {
    let q: EventQuery = parse_params("/events?search=robotics&category=cultural&sort=recent");
    assert_eq!(q.search, "robotics");
    assert_eq!(q.category, CategoryFilter::Only(EventCategory::Cultural));
    assert_eq!(q.timeframe, Timeframe::All);
    assert_eq!(q.sort, SortOrder::Recent);
}

#[test]
fn test_parse_decodes_plus_and_percent() {
    let q: EventQuery = parse_params("?search=guest+lecture");
    assert_eq!(q.search, "guest lecture");

    let q: EventQuery = parse_params("/events?search=guest%20lecture");
    assert_eq!(q.search, "guest lecture");
}

#[test]
fn test_parse_degrades_to_defaults() {
    let q: EventQuery = parse_params("/events?search=&category=music&timeframe=soon&sort=");
    assert!(q.is_default());

    let q: EventQuery = parse_params("/events");
    assert!(q.is_default());

    // First occurrence wins
    let q: DirectoryQuery = parse_params("/college?building=5&building=3");
    assert_eq!(q.building.as_deref(), Some("5"));
}

#[test]
fn test_serialize_omits_defaults() {
    assert_eq!(serialize_query(EVENTS_PATH, &EventQuery::default()), "/events");
    assert_eq!(
        serialize_query(COLLEGE_PATH, &DirectoryQuery::default()),
        "/college"
    );

    let q = EventQuery {
        search: "fest".to_string(),
        category: CategoryFilter::Only(EventCategory::Cultural),
        ..EventQuery::default()
    };
    assert_eq!(
        serialize_query(EVENTS_PATH, &q),
        "/events?search=fest&category=cultural"
    );
}

#[test]
fn test_serialize_percent_encodes_free_text() {
    let q = EventQuery {
        search: "AI & ML/robots".to_string(),
        ..EventQuery::default()
    };
    let url = serialize_query(EVENTS_PATH, &q);
    assert_eq!(url, "/events?search=AI%20%26%20ML%2Frobots");

    let parsed: EventQuery = parse_params(&url);
    assert_eq!(parsed, q);
}

// ── Events controller ─────────────────────────────────────────────────────────

#[test]
fn test_events_view_starts_idle_with_everything() {
    let view = events_view();
    assert_eq!(view.state(), PageState::Idle);
    assert_eq!(view.url(), "/events");
    assert_eq!(event_ids(&view), vec!["9", "8", "3", "1", "2", "4", "5", "6", "7"]);
}

#[test]
fn test_navigate_with_search() {
    let mut view = events_view();
    view.navigate("/events?search=robotics");

    assert_eq!(event_ids(&view), vec!["6"]);
    assert_eq!(view.state(), PageState::Filtered);
    assert_eq!(view.results()[0].title, "Robotics Competition");
}

#[test]
fn test_category_selection_writes_url() {
    let mut view = events_view();
    let url = view.set_category(CategoryFilter::Only(EventCategory::Cultural));

    assert_eq!(url, "/events?category=cultural");
    assert_eq!(event_ids(&view), vec!["7"]);

    let mut fresh = events_view();
    fresh.navigate(&url);
    assert_eq!(event_ids(&fresh), vec!["7"]);
}

#[test]
fn test_upcoming_timeframe_soonest_first() {
    let mut view = events_view();
    let url = view.set_timeframe(Timeframe::Upcoming);

    assert_eq!(url, "/events?timeframe=upcoming");
    assert_eq!(event_ids(&view), vec!["3", "1", "2", "4", "5", "6", "7"]);
    assert!(view.results().iter().all(|e| e.start_date > now()));
}

#[test]
fn test_sort_change() {
    let mut view = events_view();
    view.set_timeframe(Timeframe::Past);
    let url = view.set_sort(SortOrder::Recent);

    assert_eq!(url, "/events?timeframe=past&sort=recent");
    assert_eq!(event_ids(&view), vec!["8", "9"]);
}

#[test]
fn test_clear_filters_restores_full_list() {
    let mut view = events_view();
    view.navigate("/events?search=robotics&category=technical&timeframe=week&sort=recent");
    assert_eq!(view.state(), PageState::Filtered);

    let url = view.clear_filters();
    assert_eq!(url, "/events");
    assert_eq!(view.state(), PageState::Idle);
    assert!(view.query().is_default());
    assert_eq!(event_ids(&view), vec!["9", "8", "3", "1", "2", "4", "5", "6", "7"]);
}

#[test]
fn test_blank_search_resets_parameter() {
    let mut view = events_view();
    view.set_search("fest");
    let url = view.set_search("   ");

    assert_eq!(url, "/events");
    assert_eq!(view.query().search, "");
    assert_eq!(view.state(), PageState::Idle);
}

#[test]
fn test_navigation_is_authoritative() {
    let mut view = events_view();
    view.set_category(CategoryFilter::Only(EventCategory::Technical));
    view.navigate("/events?search=fest");

    assert_eq!(view.query().category, CategoryFilter::All);
    assert_eq!(event_ids(&view), vec!["7"]);
}

#[test]
fn test_written_url_matches_state() {
    let mut view = events_view();
    let url = view.set_search("a+b & c");
    let parsed: EventQuery = parse_params(&url);
    assert_eq!(&parsed, view.query());
}

#[test]
fn test_events_page_model() {
    let mut view = events_view();
    view.navigate("/events?search=zzz");
    let page = view.page();

    assert_eq!(page.summary, "No events found");
    assert_eq!(page.empty_message.as_deref(), Some("No events match \"zzz\""));
    assert_eq!(page.timeframe_label, "All time");
    assert!(page.events.is_empty());

    view.navigate("/events?category=sports&timeframe=upcoming");
    let page = view.page();
    assert_eq!(
        page.empty_message.as_deref(),
        Some("There are no events matching your filters")
    );
    assert_eq!(page.timeframe_label, "Upcoming events");

    view.navigate("/events?search=robotics");
    let page = view.page();
    assert_eq!(page.summary, "Showing 1 event");
    assert_eq!(page.events[0].detail_url, "/events/6");
    assert!(page.empty_message.is_none());
}

#[test]
fn test_result_summary() {
    assert_eq!(result_summary(0), "No events found");
    assert_eq!(result_summary(1), "Showing 1 event");
    assert_eq!(result_summary(9), "Showing 9 events");
}

// ── Directory controller ──────────────────────────────────────────────────────

#[test]
fn test_select_building_switches_to_rooms() {
    let mut view = directory_view();
    assert_eq!(view.tab(), DirectoryTab::Buildings);

    let url = view.select_building("5");
    assert_eq!(url, "/college?building=5");
    assert_eq!(view.tab(), DirectoryTab::Rooms);
    assert_eq!(room_ids(&view), vec!["501", "502", "503", "504", "505"]);
    assert_eq!(view.state(), PageState::Filtered);
}

#[test]
fn test_navigate_with_building() {
    let mut view = directory_view();
    view.navigate("/college?building=5");

    assert_eq!(view.tab(), DirectoryTab::Rooms);
    assert_eq!(room_ids(&view), vec!["501", "502", "503", "504", "505"]);

    let page = view.page();
    assert_eq!(page.rooms_heading.as_deref(), Some("Rooms in Main Block"));
    assert_eq!(page.selected_building.unwrap().name, "Main Block");
}

#[test]
fn test_room_only_search_prefers_room_tab() {
    let mut view = directory_view();
    let url = view.set_search("Conference");

    assert_eq!(url, "/college?search=Conference");
    assert_eq!(view.tab(), DirectoryTab::Rooms);
    assert_eq!(view.match_counts(), (0, 1));
    assert_eq!(room_ids(&view), vec!["402"]);
}

#[test]
fn test_search_and_selection_combine() {
    let mut view = directory_view();
    view.navigate("/college?search=lab&building=3");

    assert_eq!(room_ids(&view), vec!["302"]);
    let buildings: Vec<&str> = view.buildings().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(buildings, vec!["3", "4"]);
}

#[test]
fn test_directory_clear_filters() {
    let mut view = directory_view();
    view.navigate("/college?search=lab&building=3");

    let url = view.clear_filters();
    assert_eq!(url, "/college");
    assert_eq!(view.tab(), DirectoryTab::Buildings);
    assert_eq!(view.state(), PageState::Idle);
    assert_eq!(view.buildings().len(), 6);
    assert_eq!(view.rooms().count(), 14);
}

#[test]
fn test_manual_tab_switch() {
    let mut view = directory_view();
    view.set_tab(DirectoryTab::Rooms);
    assert_eq!(view.tab(), DirectoryTab::Rooms);
    assert_eq!(view.url(), "/college");
}

#[test]
fn test_tab_follows_each_search() {
    let mut view = directory_view();

    view.set_search("Conference");
    assert_eq!(view.tab(), DirectoryTab::Rooms);

    view.set_search("lab");
    assert_eq!(view.match_counts().0, 2);
    assert_eq!(view.tab(), DirectoryTab::Buildings);

    let url = view.set_search("");
    assert_eq!(url, "/college");
    assert_eq!(view.state(), PageState::Idle);
    assert_eq!(view.tab(), DirectoryTab::Buildings);

    // Same URL, same tab, whichever way it was reached
    let mut fresh = directory_view();
    fresh.navigate(&url);
    assert_eq!(fresh.tab(), view.tab());
}

#[test]
fn test_search_keeps_rooms_tab_for_selected_building() {
    let mut view = directory_view();
    view.select_building("5");

    view.set_search("office");
    assert_eq!(view.tab(), DirectoryTab::Rooms);
    assert_eq!(room_ids(&view), vec!["503"]);
}

#[test]
fn test_map_zoom_is_clamped_and_kept() {
    let mut view = directory_view();
    assert_eq!(view.zoom().scale(), 1.0);

    for _ in 0..10 {
        view.zoom_in();
    }
    assert_eq!(view.zoom().scale(), 1.5);
    assert!(!view.zoom().can_zoom_in());

    view.navigate("/college?search=lab");
    assert_eq!(view.page().map_zoom.scale(), 1.5);

    for _ in 0..20 {
        view.zoom_out();
    }
    assert_eq!(view.zoom().scale(), 0.5);
    assert!(view.zoom().can_zoom_in());
}

#[test]
fn test_unknown_building_selection() {
    let mut view = directory_view();
    view.navigate("/college?building=99");
    let page = view.page();

    assert!(page.rooms.is_empty());
    assert!(page.selected_building.is_none());
    assert_eq!(
        page.rooms_empty_message.as_deref(),
        Some("This building has no rooms listed")
    );
}

#[test]
fn test_dangling_rooms_are_not_rendered() {
    let mut seed = builtin_seed(now());
    seed.rooms.push(Room {
        id: "900".to_string(),
        name: "Lost Lab".to_string(),
        building_id: "404".to_string(),
        floor: 1,
        description: None,
        room_type: RoomType::Lab,
    });
    let store = Arc::new(StaticStore::from_seed(seed).unwrap());
    let mut view = DirectoryView::new(store);

    view.navigate("/college?search=lost");
    assert_eq!(view.match_counts(), (0, 1));
    assert_eq!(view.rooms().count(), 0);
    assert_eq!(view.page().room_count, 1);
}

#[test]
fn test_directory_page_model() {
    let view = directory_view();
    let page = view.page();

    let main = page.buildings.iter().find(|b| b.id == "1").unwrap();
    assert_eq!(main.room_count, 3);
    assert_eq!(main.select_url, "/college?building=1");
    assert_eq!(page.pins.len(), 6);
    assert_eq!(page.rooms[0].location_label, "Electrical Main Block, Floor 1");
    assert_eq!(page.rooms[0].type_label, "LAB");
    assert!(page.buildings_empty_message.is_none());
}

#[test]
fn test_directory_empty_messages() {
    let mut view = directory_view();
    view.navigate("/college?search=observatory");
    let page = view.page();

    assert_eq!(
        page.buildings_empty_message.as_deref(),
        Some("No buildings match \"observatory\"")
    );
    assert_eq!(
        page.rooms_empty_message.as_deref(),
        Some("No rooms match \"observatory\"")
    );
}

// ── Detail pages and home ─────────────────────────────────────────────────────

#[test]
fn test_event_detail_joins_room_and_building() {
    let store = store();
    let page = EventDetailPage::build(store.as_ref(), "6", utc()).unwrap();

    assert_eq!(page.event.title, "Robotics Competition");
    assert_eq!(page.room.unwrap().name, "Machine Shop");
    let location = page.location.unwrap();
    assert_eq!(location.building_name, "Machines Lab Block");
    assert_eq!(location.map_url, "/college?building=3");
}

#[test]
fn test_event_detail_tolerates_dangling_room() {
    let store = store();
    let page = EventDetailPage::build(store.as_ref(), "5", utc()).unwrap();

    // The free-text location is kept even though room "33" does not exist
    assert_eq!(page.event.location, "Play Area");
    assert!(page.room.is_none());
    assert!(page.location.is_none());

    assert!(EventDetailPage::build(store.as_ref(), "404", utc()).is_none());
}

#[test]
fn test_room_detail_lists_room_events() {
    let store = store();
    let page = RoomDetailPage::build(store.as_ref(), "501", utc()).unwrap();

    assert_eq!(page.room.building_name, "Main Block");
    let ids: Vec<&str> = page.events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["7"]);

    assert!(RoomDetailPage::build(store.as_ref(), "999", utc()).is_none());
}

#[test]
fn test_home_page_features_next_two_events() {
    let store = store();
    let page = HomePage::build(store.as_ref(), &FixedClock(now()), utc(), 2);

    let ids: Vec<&str> = page.featured.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1"]);
    assert!(page.empty_message.is_none());

    let later = FixedClock(now() + chrono::Duration::days(90));
    let page = HomePage::build(store.as_ref(), &later, utc(), 2);
    assert_eq!(
        page.empty_message.as_deref(),
        Some("No upcoming events scheduled.")
    );
    assert_eq!(store.list_events().len(), 9);
}

#[test]
fn test_search_target() {
    assert_eq!(
        search_target("  robotics ").as_deref(),
        Some("/events?search=robotics")
    );
    assert_eq!(
        search_target("guest lecture").as_deref(),
        Some("/events?search=guest%20lecture")
    );
    assert_eq!(search_target("   "), None);
    assert_eq!(search_target(""), None);
}

#[test]
fn test_event_card_labels() {
    let store = store();
    let workshop = EventCard::new(store.find_event("1").unwrap(), utc());
    assert_eq!(workshop.date_label, "Wed, Mar 4");
    assert_eq!(workshop.time_range, "9:00 AM - 12:00 PM");

    let symposium = EventCard::new(store.find_event("2").unwrap(), utc());
    assert_eq!(symposium.date_label, "Sat, Mar 7 - Sun, Mar 8");

    let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
    assert_eq!(format_time(now(), ist), "2:30 PM");
    assert_eq!(format_date(now(), ist), "Mon, Mar 2");
}
