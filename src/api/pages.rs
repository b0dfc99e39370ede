use crate::portal::Portal;
use crate::view::{
    DirectoryPage, EventDetailPage, EventsPage, HomePage, RoomDetailPage, COLLEGE_PATH,
    EVENTS_PATH,
};
use axum::{
    extract::{Path, RawQuery, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Shared state for the page API
pub struct PagesAppState {
    pub portal: Portal,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    path: String,
}

/// Create page API router. Unmatched paths go through the portal's own
/// route resolution and end on the JSON not-found body.
pub fn create_pages_router(state: Arc<PagesAppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/college", get(college))
        .route("/college/room/:id", get(get_room))
        .fallback(fallback)
        .with_state(state)
}

fn with_query(path: &str, query: Option<String>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path.to_string(),
    }
}

/// GET / - Landing page with the next upcoming events
async fn home(State(state): State<Arc<PagesAppState>>) -> Json<HomePage> {
    Json(state.portal.home())
}

/// GET /events - Events directory
///
/// Query parameters (all optional, unknown values fall back to defaults):
/// - `search`: free text over title, description and location
/// - `category`: workshop, technical, cultural, sports, other
/// - `timeframe`: upcoming, past, today, week
/// - `sort`: upcoming (soonest first) or recent
async fn list_events(
    State(state): State<Arc<PagesAppState>>,
    RawQuery(query): RawQuery,
) -> Json<EventsPage> {
    Json(state.portal.events(&with_query(EVENTS_PATH, query)))
}

/// GET /events/:id - Event detail
async fn get_event(
    State(state): State<Arc<PagesAppState>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Json<EventDetailPage>, PageError> {
    state
        .portal
        .event_detail(&id)
        .map(Json)
        .ok_or_else(|| PageError::not_found(&state.portal, &uri))
}

/// GET /college - Building and room directory
///
/// Query parameters:
/// - `search`: free text over names and descriptions
/// - `building`: id of the selected building
async fn college(
    State(state): State<Arc<PagesAppState>>,
    RawQuery(query): RawQuery,
) -> Json<DirectoryPage> {
    Json(state.portal.college(&with_query(COLLEGE_PATH, query)))
}

/// GET /college/room/:id - Room detail
async fn get_room(
    State(state): State<Arc<PagesAppState>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Json<RoomDetailPage>, PageError> {
    state
        .portal
        .room_detail(&id)
        .map(Json)
        .ok_or_else(|| PageError::not_found(&state.portal, &uri))
}

async fn fallback(State(state): State<Arc<PagesAppState>>, uri: Uri) -> Response {
    let url = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    let page = state.portal.render(url);
    if page.is_not_found() {
        return PageError::NotFound(uri.path().to_string()).into_response();
    }
    Json(page).into_response()
}

/// Page error types
#[derive(Debug)]
enum PageError {
    NotFound(String),
}

impl PageError {
    fn not_found(portal: &Portal, uri: &Uri) -> Self {
        PageError::NotFound(portal.not_found(uri.path()))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, error_message, path) = match self {
            PageError::NotFound(path) => (StatusCode::NOT_FOUND, "Page not found", path),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
            path,
        });

        (status, body).into_response()
    }
}
