use crate::identity::ManagedIdentity;
use crate::third_party::azure::api_path::{EVENT_HUBS_API_VERSION, EVENT_HUBS_RESOURCE};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;

/// Streaming ingestion endpoint. One event body per call; no batching.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn send(&self, body: String) -> Result<()>;
}

/// Event Hubs sink over the HTTPS send endpoint.
pub struct EventHubSink {
    client: Client,
    send_url: String,
    identity: Arc<ManagedIdentity>,
}

impl EventHubSink {
    pub fn new(
        client: Client,
        namespace: &str,
        hub_name: &str,
        identity: Arc<ManagedIdentity>,
    ) -> Self {
        Self {
            client,
            send_url: format!("https://{namespace}/{hub_name}/messages"),
            identity,
        }
    }
}

#[async_trait]
impl EventSink for EventHubSink {
    async fn send(&self, body: String) -> Result<()> {
        let token = self.identity.token(EVENT_HUBS_RESOURCE).await?;
        self.client
            .post(&self.send_url)
            .query(&[("api-version", EVENT_HUBS_API_VERSION)])
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/atom+xml;type=entry;charset=utf-8")
            .body(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
