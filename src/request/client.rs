use crate::third_party::coinranking::api_path::{ACCESS_TOKEN_HEADER, COINRANKING_COINS_API};
use anyhow::Result;
use log::warn;
use reqwest::{Client, Response, StatusCode};
use serde_json::{Value, json};

/// Fetch the current coin rankings. A missing API key sends the request
/// unauthenticated; the upstream rejection then surfaces through
/// [`handle_api_response`] as an error payload, not an Err.
pub async fn fetch_coinranking_data(client: &Client, api_key: Option<&str>) -> Result<Value> {
    let mut request = client.get(COINRANKING_COINS_API);
    if let Some(key) = api_key {
        request = request.header(ACCESS_TOKEN_HEADER, key);
    }
    let response = request.send().await?;
    handle_api_response(response).await
}

/// Non-200 responses fold into an error-shaped payload rather than being
/// raised; the flatten stage then finds no `data.coins` and yields zero
/// records. Transport failures still propagate as Err.
async fn handle_api_response(response: Response) -> Result<Value> {
    let status = response.status();
    if status == StatusCode::OK {
        Ok(response.json().await?)
    } else {
        warn!("coinranking request failed with status {status}");
        Ok(error_payload(status.as_u16()))
    }
}

pub fn error_payload(status: u16) -> Value {
    json!({ "error": format!("Request failed with status code {status}") })
}
