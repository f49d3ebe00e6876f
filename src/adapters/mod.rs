// Adapters layer: concrete implementations for external systems (http clients, config).

pub mod http;

pub use http::{PlaceholderClient, WorldTimeClient};
