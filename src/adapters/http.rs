use async_trait::async_trait;
use reqwest::Client;

use crate::domain::model::{Post, TimezoneNow, User, UserId};
use crate::domain::ports::{ConfigProvider, TimeApi, UserApi};
use crate::utils::error::Result;

/// Fetch `url` and decode the JSON body into `T`. Decoding goes through
/// `serde_json` on the raw bytes so a shape mismatch surfaces as
/// `SerializationError` rather than a transport error.
async fn get_json<T: serde::de::DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?.error_for_status()?;
    tracing::debug!("API response status: {}", response.status());

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Client for the user/post source (JSONPlaceholder-shaped API).
#[derive(Debug, Clone)]
pub struct PlaceholderClient {
    base_url: String,
    client: Client,
}

impl PlaceholderClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.users_api_base().to_string())
    }
}

#[async_trait]
impl UserApi for PlaceholderClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        get_json(&self.client, &format!("{}/users", self.base_url)).await
    }

    async fn fetch_user(&self, user_id: UserId) -> Result<User> {
        get_json(&self.client, &format!("{}/users/{}", self.base_url, user_id)).await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        get_json(&self.client, &format!("{}/posts", self.base_url)).await
    }

    async fn fetch_user_posts(&self, user_id: UserId) -> Result<Vec<Post>> {
        get_json(
            &self.client,
            &format!("{}/posts?userId={}", self.base_url, user_id),
        )
        .await
    }
}

/// Client for the time source (worldtimeapi-shaped API).
#[derive(Debug, Clone)]
pub struct WorldTimeClient {
    base_url: String,
    client: Client,
}

impl WorldTimeClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.time_api_base().to_string())
    }
}

#[async_trait]
impl TimeApi for WorldTimeClient {
    async fn fetch_timezones(&self) -> Result<Vec<String>> {
        get_json(&self.client, &format!("{}/timezone", self.base_url)).await
    }

    async fn fetch_current_time(&self, timezone: &str) -> Result<i64> {
        let now: TimezoneNow = get_json(
            &self.client,
            &format!("{}/timezone/{}", self.base_url, timezone),
        )
        .await?;

        let parsed = chrono::DateTime::parse_from_rfc3339(&now.datetime)?;
        Ok(parsed.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AppError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_users_successful_response() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": {"lat": "-37.3159", "lng": "81.1496"}
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }]);

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let client = PlaceholderClient::new(server.base_url());
        let users = client.fetch_users().await.unwrap();

        api_mock.assert();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Leanne Graham");
    }

    #[tokio::test]
    async fn test_fetch_users_server_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(500);
        });

        let client = PlaceholderClient::new(server.base_url());
        let result = client.fetch_users().await;

        api_mock.assert();
        assert!(matches!(result, Err(AppError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_fetch_users_malformed_body_is_serialization_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/users");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"id": "not-a-number"}]));
        });

        let client = PlaceholderClient::new(server.base_url());
        let result = client.fetch_users().await;

        api_mock.assert();
        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_fetch_user_posts_filters_by_owner() {
        let server = MockServer::start();
        let mock_data = serde_json::json!([
            {"userId": 1, "id": 10, "title": "first", "body": "body one"}
        ]);

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts").query_param("userId", "1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data);
        });

        let client = PlaceholderClient::new(server.base_url());
        let posts = client.fetch_user_posts(1).await.unwrap();

        api_mock.assert();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].user_id, 1);
        assert_eq!(posts[0].title, "first");
    }

    #[tokio::test]
    async fn test_fetch_current_time_converts_datetime() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/timezone/Asia/Kolkata");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "datetime": "1970-01-01T01:01:01+00:00",
                    "timezone": "Asia/Kolkata"
                }));
        });

        let client = WorldTimeClient::new(server.base_url());
        let seconds = client.fetch_current_time("Asia/Kolkata").await.unwrap();

        api_mock.assert();
        assert_eq!(seconds, 3661);
    }

    #[tokio::test]
    async fn test_fetch_current_time_bad_datetime_is_parse_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/timezone/Etc/UTC");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"datetime": "yesterday-ish"}));
        });

        let client = WorldTimeClient::new(server.base_url());
        let result = client.fetch_current_time("Etc/UTC").await;

        api_mock.assert();
        assert!(matches!(result, Err(AppError::TimeParseError(_))));
    }

    #[tokio::test]
    async fn test_fetch_timezones_list() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/timezone");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!(["Asia/Kolkata", "Europe/London"]));
        });

        let client = WorldTimeClient::new(server.base_url());
        let zones = client.fetch_timezones().await.unwrap();

        api_mock.assert();
        assert_eq!(zones, vec!["Asia/Kolkata", "Europe/London"]);
    }
}
