use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, EventFields, EventUpdate};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Per-request timeout. A poll tick must not hang behind a dead server.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the `/events` HTTP API served by `stagelist serve`.
pub struct RemoteStore {
    base_url: String,
    client: reqwest::Client,
}

/// Error body produced by the server: `{ message, error }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    error: String,
}

impl RemoteStore {
    pub fn new(base_url: &str) -> AppResult<Self> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn events_url(&self) -> String {
        format!("{}/events", self.base_url)
    }

    fn event_url(&self, id: i64) -> String {
        format!("{}/events/{}", self.base_url, id)
    }
}

/// Turn non-2xx responses into `AppError::Remote`, keeping the server's
/// message when the body can be parsed.
async fn check(resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) if body.error.is_empty() => body.message,
        Ok(body) => format!("{}: {}", body.message, body.error),
        Err(_) => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or(text),
    };

    Err(AppError::Remote {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RecordStore for RemoteStore {
    async fn create(&self, fields: EventFields) -> AppResult<Event> {
        let resp = self
            .client
            .post(self.events_url())
            .json(&fields)
            .send()
            .await?;
        let resp = check(resp).await?;
        if resp.status() != StatusCode::CREATED {
            tracing::warn!(status = %resp.status(), "create answered without 201");
        }
        Ok(resp.json::<Event>().await?)
    }

    async fn list(&self) -> AppResult<Vec<Event>> {
        let resp = self.client.get(self.events_url()).send().await?;
        Ok(check(resp).await?.json::<Vec<Event>>().await?)
    }

    async fn update(&self, id: i64, update: EventUpdate) -> AppResult<Event> {
        let resp = self
            .client
            .put(self.event_url(id))
            .json(&update)
            .send()
            .await?;
        Ok(check(resp).await?.json::<Event>().await?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let resp = self.client.delete(self.event_url(id)).send().await?;
        check(resp).await?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("remote:{}", self.base_url)
    }
}
