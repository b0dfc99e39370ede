use super::url::split_url;

/// Client-side routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Events,
    EventDetail(String),
    College,
    RoomDetail(String),
    NotFound,
}

impl Route {
    /// Resolve a path (query string allowed, trailing slash ignored)
    pub fn resolve(url: &str) -> Route {
        let (path, _) = split_url(url);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["events"] => Route::Events,
            ["events", id] => decode_id(id).map_or(Route::NotFound, Route::EventDetail),
            ["college"] => Route::College,
            ["college", "room", id] => decode_id(id).map_or(Route::NotFound, Route::RoomDetail),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Events => "/events".to_string(),
            Route::EventDetail(id) => format!("/events/{}", urlencoding::encode(id)),
            Route::College => "/college".to_string(),
            Route::RoomDetail(id) => format!("/college/room/{}", urlencoding::encode(id)),
            Route::NotFound => "/404".to_string(),
        }
    }
}

fn decode_id(raw: &str) -> Option<String> {
    urlencoding::decode(raw).ok().map(|id| id.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_pages() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/events"), Route::Events);
        assert_eq!(Route::resolve("/events/"), Route::Events);
        assert_eq!(Route::resolve("/events?search=fest"), Route::Events);
        assert_eq!(Route::resolve("/college?building=5"), Route::College);
    }

    #[test]
    fn test_resolve_details() {
        assert_eq!(Route::resolve("/events/6"), Route::EventDetail("6".to_string()));
        assert_eq!(
            Route::resolve("/college/room/501"),
            Route::RoomDetail("501".to_string())
        );
        assert_eq!(
            Route::resolve("/college/room/a%20b"),
            Route::RoomDetail("a b".to_string())
        );
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(Route::resolve("/accessibility"), Route::NotFound);
        assert_eq!(Route::resolve("/college/room"), Route::NotFound);
        assert_eq!(Route::resolve("/college/501"), Route::NotFound);
        assert_eq!(Route::resolve("/events/6/extra"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Events,
            Route::EventDetail("7".to_string()),
            Route::College,
            Route::RoomDetail("room 1".to_string()),
        ] {
            assert_eq!(Route::resolve(&route.path()), route);
        }
    }
}
