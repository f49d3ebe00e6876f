pub mod clock;
pub mod detail;
pub mod directory;
pub mod route;

pub use crate::domain::model::{Post, User, UserId};
pub use crate::domain::ports::{ConfigProvider, TimeApi, UserApi};
pub use crate::utils::error::Result;
pub use clock::Clock;
pub use detail::{DetailFocus, DetailState};
pub use directory::DirectoryState;
pub use route::Route;
