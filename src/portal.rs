use crate::clock::Clock;
use crate::store::DataProvider;
use crate::view::{
    DirectoryPage, DirectoryView, EventDetailPage, EventsPage, EventsView, HomePage,
    RoomDetailPage, Route,
};
use crate::view::url::split_url;
use chrono::FixedOffset;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Rendered page for a URL
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Page {
    Home(HomePage),
    Events(EventsPage),
    EventDetail(EventDetailPage),
    College(DirectoryPage),
    RoomDetail(RoomDetailPage),
    NotFound { path: String },
}

impl Page {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Page::NotFound { .. })
    }
}

/// Entry point tying the data provider, clock and page controllers together
#[derive(Clone)]
pub struct Portal {
    provider: Arc<dyn DataProvider>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
    featured_count: usize,
}

impl Portal {
    pub fn new(
        provider: Arc<dyn DataProvider>,
        clock: Arc<dyn Clock>,
        offset: FixedOffset,
        featured_count: usize,
    ) -> Self {
        Self {
            provider,
            clock,
            offset,
            featured_count,
        }
    }

    pub fn provider(&self) -> &dyn DataProvider {
        self.provider.as_ref()
    }

    /// Fresh, idle controller for an interactive events session
    pub fn events_view(&self) -> EventsView {
        EventsView::new(self.provider.clone(), self.clock.clone(), self.offset)
    }

    /// Fresh, idle controller for an interactive directory session
    pub fn directory_view(&self) -> DirectoryView {
        DirectoryView::new(self.provider.clone())
    }

    pub fn home(&self) -> HomePage {
        HomePage::build(
            self.provider.as_ref(),
            self.clock.as_ref(),
            self.offset,
            self.featured_count,
        )
    }

    /// Events page as reached by navigating to `url`
    pub fn events(&self, url: &str) -> EventsPage {
        let mut view = self.events_view();
        view.navigate(url);
        view.page()
    }

    pub fn event_detail(&self, id: &str) -> Option<EventDetailPage> {
        EventDetailPage::build(self.provider.as_ref(), id, self.offset)
    }

    /// Directory page as reached by navigating to `url`
    pub fn college(&self, url: &str) -> DirectoryPage {
        let mut view = self.directory_view();
        view.navigate(url);
        view.page()
    }

    pub fn room_detail(&self, id: &str) -> Option<RoomDetailPage> {
        RoomDetailPage::build(self.provider.as_ref(), id, self.offset)
    }

    /// Resolve `url` and render the matching page. Unknown paths and
    /// unknown detail ids both end on the not-found page.
    pub fn render(&self, url: &str) -> Page {
        let page = match Route::resolve(url) {
            Route::Home => Some(Page::Home(self.home())),
            Route::Events => Some(Page::Events(self.events(url))),
            Route::EventDetail(id) => self.event_detail(&id).map(Page::EventDetail),
            Route::College => Some(Page::College(self.college(url))),
            Route::RoomDetail(id) => self.room_detail(&id).map(Page::RoomDetail),
            Route::NotFound => None,
        };

        page.unwrap_or_else(|| Page::NotFound {
            path: self.not_found(url),
        })
    }

    /// Log a miss and return the path that was requested
    pub fn not_found(&self, url: &str) -> String {
        let (path, _) = split_url(url);
        warn!(path = %path, "404: user attempted to access non-existent route");
        path.to_string()
    }
}
