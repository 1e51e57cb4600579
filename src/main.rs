//! Coinranking to Event Hubs relay.
//!
//! Every sixty seconds: resolve the API key from Key Vault, fetch the
//! current coin rankings, flatten each coin into the fixed event schema,
//! and publish one event per coin.

pub mod app;
pub mod config;
pub mod data;
pub mod identity;
pub mod request;
pub mod secrets;
pub mod sink;
pub mod third_party;

use crate::app::App;
use anyhow::Result;
use env_logger::Env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = App::new();
    app.run().await
}
