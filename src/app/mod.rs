use crate::config;
use crate::data::{CoinRecord, flatten_coins};
use crate::identity::ManagedIdentity;
use crate::request::fetch_coinranking_data;
use crate::secrets::{KeyVaultSecretProvider, SecretProvider};
use crate::sink::{EventHubSink, EventSink};
use anyhow::Result;
use log::{error, info};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};

pub struct App {
    client: Client,
    secrets: Arc<dyn SecretProvider>,
    sink: Arc<dyn EventSink>,
}

impl App {
    pub fn new() -> Self {
        let client = Client::new();
        let identity = Arc::new(ManagedIdentity::new(client.clone()));
        let secrets = Arc::new(KeyVaultSecretProvider::new(
            client.clone(),
            config::vault_url(),
            identity.clone(),
        ));
        let sink = Arc::new(EventHubSink::new(
            client.clone(),
            &config::eventhub_namespace(),
            &config::eventhub_name(),
            identity,
        ));
        Self {
            client,
            secrets,
            sink,
        }
    }

    pub fn with_capabilities(secrets: Arc<dyn SecretProvider>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            client: Client::new(),
            secrets,
            sink,
        }
    }

    /// Tick every 60 seconds and run one relay cycle per tick. Cycles
    /// never overlap: the next tick is not awaited until the current
    /// cycle finishes.
    pub async fn run(&self) -> Result<()> {
        let mut ticker = time::interval(Duration::from_secs(config::POLL_INTERVAL_SECS));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            info!("relay cycle triggered");
            if let Err(err) = self.run_once().await {
                error!("relay cycle failed: {err:#}");
            }
        }
    }

    /// One full relay cycle: secret, fetch, flatten, publish.
    async fn run_once(&self) -> Result<()> {
        let api_key = self.resolve_api_key().await;
        let payload = fetch_coinranking_data(&self.client, api_key.as_deref()).await?;
        let records = flatten_coins(payload);
        info!("flattened {} coin records", records.len());
        self.publish_records(&records).await
    }

    /// A secret-retrieval failure is logged and downgraded to a missing
    /// key; the unauthenticated request then fails at the API, which the
    /// flatten stage turns into zero records.
    async fn resolve_api_key(&self) -> Option<String> {
        match self.secrets.get_secret(config::COINRANKING_SECRET_NAME).await {
            Ok(secret) => Some(secret),
            Err(err) => {
                error!(
                    "failed to retrieve secret '{}' from key vault: {err:#}",
                    config::COINRANKING_SECRET_NAME
                );
                None
            }
        }
    }

    /// Publish each record as its own event, in order. A send failure
    /// aborts the cycle.
    async fn publish_records(&self, records: &[CoinRecord]) -> Result<()> {
        for record in records {
            let body = serde_json::to_string(record)?;
            self.sink.send(body).await?;
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::Mutex;

    struct StaticSecrets(String);

    #[async_trait]
    impl SecretProvider for StaticSecrets {
        async fn get_secret(&self, _name: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingSecrets;

    #[async_trait]
    impl SecretProvider for FailingSecrets {
        async fn get_secret(&self, name: &str) -> Result<String> {
            Err(anyhow!("vault unreachable for '{name}'"))
        }
    }

    #[derive(Default)]
    struct MemorySink {
        events: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl EventSink for MemorySink {
        async fn send(&self, body: String) -> Result<()> {
            self.events.lock().await.push(body);
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl EventSink for FailingSink {
        async fn send(&self, _body: String) -> Result<()> {
            Err(anyhow!("event hub rejected the send"))
        }
    }

    fn sample_records() -> Vec<CoinRecord> {
        flatten_coins(json!({
            "data": {
                "coins": [
                    { "id": "a", "symbol": "BTC", "name": "Bitcoin", "rank": 1 },
                    { "id": "b", "symbol": "ETH", "name": "Ethereum", "rank": 2 }
                ]
            }
        }))
    }

    #[tokio::test]
    async fn test_publish_one_event_per_record() {
        let sink = Arc::new(MemorySink::default());
        let app = App::with_capabilities(
            Arc::new(StaticSecrets("key".to_string())),
            sink.clone(),
        );

        let records = sample_records();
        app.publish_records(&records).await.unwrap();

        let events = sink.events.lock().await;
        assert_eq!(events.len(), records.len());
        for (body, record) in events.iter().zip(&records) {
            let round_trip: CoinRecord = serde_json::from_str(body).unwrap();
            assert_eq!(&round_trip, record);
        }
    }

    #[tokio::test]
    async fn test_resolve_api_key_with_working_vault() {
        let app = App::with_capabilities(
            Arc::new(StaticSecrets("s3cret".to_string())),
            Arc::new(MemorySink::default()),
        );
        assert_eq!(app.resolve_api_key().await.as_deref(), Some("s3cret"));
    }

    #[tokio::test]
    async fn test_resolve_api_key_failure_yields_none() {
        let app = App::with_capabilities(
            Arc::new(FailingSecrets),
            Arc::new(MemorySink::default()),
        );
        assert_eq!(app.resolve_api_key().await, None);
    }

    #[tokio::test]
    async fn test_publish_failure_propagates() {
        let app = App::with_capabilities(
            Arc::new(StaticSecrets("key".to_string())),
            Arc::new(FailingSink),
        );
        assert!(app.publish_records(&sample_records()).await.is_err());
    }

    #[tokio::test]
    async fn test_publish_nothing_for_empty_records() {
        let sink = Arc::new(MemorySink::default());
        let app = App::with_capabilities(
            Arc::new(StaticSecrets("key".to_string())),
            sink.clone(),
        );
        app.publish_records(&[]).await.unwrap();
        assert!(sink.events.lock().await.is_empty());
    }
}
