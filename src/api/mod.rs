// HTTP surface: page view models as JSON

pub mod pages;

pub use pages::{create_pages_router, PagesAppState};
