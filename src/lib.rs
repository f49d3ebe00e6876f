pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod ui;
pub mod utils;

pub use adapters::{PlaceholderClient, WorldTimeClient};
pub use config::CliConfig;
pub use ui::{App, AppEvent};
pub use utils::error::{AppError, Result};
