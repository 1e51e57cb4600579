use crate::third_party::azure::api_path::{IMDS_API_VERSION, IMDS_TOKEN_API, METADATA_HEADER};
use crate::third_party::azure::data::AccessTokenResponse;
use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use reqwest::Client;
use std::collections::HashMap;
use tokio::sync::RwLock;

// Tokens are treated as stale this long before their actual expiry.
const EXPIRY_MARGIN_SECS: i64 = 120;

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Ambient platform credential: bearer tokens for Azure resources,
/// resolved from the instance metadata service and cached per resource
/// until shortly before expiry.
pub struct ManagedIdentity {
    client: Client,
    cache: RwLock<HashMap<String, CachedToken>>,
}

impl ManagedIdentity {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub async fn token(&self, resource: &str) -> Result<String> {
        if let Some(cached) = self.cache.read().await.get(resource) {
            if cached.is_fresh() {
                return Ok(cached.token.clone());
            }
        }

        let fresh = self.request_token(resource).await?;
        let token = fresh.token.clone();
        self.cache
            .write()
            .await
            .insert(resource.to_string(), fresh);
        Ok(token)
    }

    async fn request_token(&self, resource: &str) -> Result<CachedToken> {
        debug!("requesting managed-identity token for {resource}");
        let response: AccessTokenResponse = self
            .client
            .get(IMDS_TOKEN_API)
            .header(METADATA_HEADER, "true")
            .query(&[("api-version", IMDS_API_VERSION), ("resource", resource)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let expires_on: i64 = response
            .expires_on
            .parse()
            .context("malformed expires_on in token response")?;
        let expires_at = DateTime::from_timestamp(expires_on, 0)
            .context("expires_on out of range")?
            - TimeDelta::seconds(EXPIRY_MARGIN_SECS);

        Ok(CachedToken {
            token: response.access_token,
            expires_at,
        })
    }
}
