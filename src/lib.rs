// Entity model: buildings, rooms and events
pub mod entity;

// Read-only entity store and seed data
pub mod store;

// Search, filter and sort engine
pub mod filter;

// Campus map coordinates
pub mod map;

// Page controllers, URL synchronization and view models
pub mod view;

// Route resolution and page rendering
pub mod portal;

// Injected time source
pub mod clock;

// TOML configuration with environment overrides
pub mod config;

// HTTP API
pub mod api;
