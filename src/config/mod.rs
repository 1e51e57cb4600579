use std::env;

pub const POLL_INTERVAL_SECS: u64 = 60;
pub const COINRANKING_SECRET_NAME: &str = "coinrankingsecretKV";

const DEFAULT_VAULT_URL: &str = "https://cryptocoinstreamingkv.vault.azure.net";
const DEFAULT_EVENTHUB_NAMESPACE: &str = "coinrankingstreaming.servicebus.windows.net";
const DEFAULT_EVENTHUB_NAME: &str = "coinrankingeventhub";

pub fn vault_url() -> String {
    env::var("KEY_VAULT_URL").unwrap_or_else(|_| DEFAULT_VAULT_URL.to_string())
}

pub fn eventhub_namespace() -> String {
    env::var("EVENTHUB_NAMESPACE").unwrap_or_else(|_| DEFAULT_EVENTHUB_NAMESPACE.to_string())
}

pub fn eventhub_name() -> String {
    env::var("EVENTHUB_NAME").unwrap_or_else(|_| DEFAULT_EVENTHUB_NAME.to_string())
}
