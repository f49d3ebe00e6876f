use crate::domain::model::{Post, User, UserId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the user/post source.
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;
    async fn fetch_user(&self, user_id: UserId) -> Result<User>;
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
    async fn fetch_user_posts(&self, user_id: UserId) -> Result<Vec<Post>>;
}

/// Read-only access to the time source.
#[async_trait]
pub trait TimeApi: Send + Sync {
    async fn fetch_timezones(&self) -> Result<Vec<String>>;

    /// Current time for `timezone`, as seconds since the Unix epoch.
    async fn fetch_current_time(&self, timezone: &str) -> Result<i64>;
}

pub trait ConfigProvider: Send + Sync {
    fn users_api_base(&self) -> &str;
    fn time_api_base(&self) -> &str;
}
