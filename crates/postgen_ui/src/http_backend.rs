//! HTTP backend implementation over reqwest.

use crate::{ApiConfig, PostgenApi};
use async_trait::async_trait;
use postgen_core::{
    Ack, Event, EventCreated, EventList, GenerateRequest, GeneratedPost, NewEvent, Post,
    PostList, PostStatus, StatusUpdate, parse_envelope,
};
use postgen_error::{HttpError, PostgenResult};
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Client for the post generator REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:5000`).
    #[instrument(skip_all)]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!(%base_url, "Creating HTTP backend");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from the `[api]` configuration section.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url())
    }

    /// Server root every path is resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and unwrap its envelope.
    ///
    /// Non-2xx answers still carry an envelope, so the status code is only logged.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> PostgenResult<T> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            HttpError::new(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            HttpError::new(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!(%status, "Server returned error status");
        } else {
            tracing::debug!(%status, bytes = body.len(), "Response received");
        }

        parse_envelope(&body)
    }
}

#[async_trait]
impl PostgenApi for HttpBackend {
    #[instrument(skip(self))]
    async fn list_events(&self) -> PostgenResult<Vec<Event>> {
        let list: EventList = self.send(self.client.get(self.url("/api/events"))).await?;
        Ok(list.events)
    }

    #[instrument(skip(self, event), fields(title = %event.title()))]
    async fn create_event(&self, event: &NewEvent) -> PostgenResult<EventCreated> {
        self.send(self.client.post(self.url("/api/events")).json(event))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_event(&self, id: i64) -> PostgenResult<()> {
        let _: Ack = self
            .send(self.client.delete(self.url(&format!("/api/events/{}", id))))
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_posts(&self, event_id: Option<i64>) -> PostgenResult<Vec<Post>> {
        let mut request = self.client.get(self.url("/api/posts"));
        if let Some(id) = event_id {
            request = request.query(&[("event_id", id)]);
        }
        let list: PostList = self.send(request).await?;
        Ok(list.posts)
    }

    #[instrument(skip(self), fields(event_id = request.event_id, platform = %request.platform, tone = %request.tone))]
    async fn generate_post(&self, request: &GenerateRequest) -> PostgenResult<GeneratedPost> {
        self.send(self.client.post(self.url("/api/generate-post")).json(request))
            .await
    }

    #[instrument(skip(self))]
    async fn update_post_status(&self, id: i64, status: PostStatus) -> PostgenResult<()> {
        let _: Ack = self
            .send(
                self.client
                    .put(self.url(&format!("/api/posts/{}", id)))
                    .json(&StatusUpdate { status }),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, id: i64) -> PostgenResult<()> {
        let _: Ack = self
            .send(self.client.delete(self.url(&format!("/api/posts/{}", id))))
            .await?;
        Ok(())
    }
}
