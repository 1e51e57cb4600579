use crate::identity::ManagedIdentity;
use crate::third_party::azure::api_path::{KEY_VAULT_API_VERSION, KEY_VAULT_RESOURCE};
use crate::third_party::azure::data::SecretBundle;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

/// Secret lookup as an injected capability, so tests can substitute the
/// vault with an in-memory double.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    async fn get_secret(&self, name: &str) -> Result<String>;
}

/// Key Vault-backed provider authenticating with the ambient managed
/// identity.
pub struct KeyVaultSecretProvider {
    client: Client,
    vault_url: String,
    identity: Arc<ManagedIdentity>,
}

impl KeyVaultSecretProvider {
    pub fn new(client: Client, vault_url: String, identity: Arc<ManagedIdentity>) -> Self {
        Self {
            client,
            vault_url: vault_url.trim_end_matches('/').to_string(),
            identity,
        }
    }
}

#[async_trait]
impl SecretProvider for KeyVaultSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<String> {
        let token = self.identity.token(KEY_VAULT_RESOURCE).await?;
        let url = format!("{}/secrets/{}", self.vault_url, name);
        let bundle: SecretBundle = self
            .client
            .get(&url)
            .query(&[("api-version", KEY_VAULT_API_VERSION)])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()
            .with_context(|| format!("key vault rejected secret request for '{name}'"))?
            .json()
            .await?;
        Ok(bundle.value)
    }
}
