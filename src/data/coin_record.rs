use crate::third_party::coinranking::data::ApiCoinsResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The flattened coin record published downstream, one event per coin.
/// Field order and wire names match the event schema consumers expect;
/// `volume` carries the upstream `24hVolume` value. Fields keep their
/// types on the wire: a missing `rank`, `sparkline`, or `lowVolume`
/// serializes as `0`, `[]`, or `false`, not as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinRecord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub market_cap: String,
    pub change: String,
    pub rank: u32,
    pub volume: String,
    pub btc_price: String,
    pub sparkline: Vec<Option<String>>,
    pub low_volume: bool,
    pub coinranking_url: String,
    pub color: String,
    pub icon_url: String,
    pub website_url: String,
    pub explorer_url: String,
    pub twitter_url: String,
}

impl CoinRecord {
    /// Flatten one raw coin entry. Each field is extracted on its own, so
    /// an absent, null, or mistyped value collapses to that field's
    /// default without touching the other fields or the other coins.
    pub fn from_value(coin: &Value) -> Self {
        Self {
            id: string_field(coin, "id"),
            symbol: string_field(coin, "symbol"),
            name: string_field(coin, "name"),
            price: string_field(coin, "price"),
            market_cap: string_field(coin, "marketCap"),
            change: string_field(coin, "change"),
            rank: coin.get("rank").and_then(Value::as_u64).unwrap_or_default() as u32,
            volume: string_field(coin, "24hVolume"),
            btc_price: string_field(coin, "btcPrice"),
            sparkline: sparkline_field(coin),
            low_volume: coin
                .get("lowVolume")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
            coinranking_url: string_field(coin, "coinrankingUrl"),
            color: string_field(coin, "color"),
            icon_url: string_field(coin, "iconUrl"),
            website_url: string_field(coin, "websiteUrl"),
            explorer_url: string_field(coin, "explorerUrl"),
            twitter_url: string_field(coin, "twitterUrl"),
        }
    }
}

fn string_field(coin: &Value, key: &str) -> String {
    coin.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn sparkline_field(coin: &Value) -> Vec<Option<String>> {
    coin.get("sparkline")
        .and_then(Value::as_array)
        .map(|samples| {
            samples
                .iter()
                .map(|sample| sample.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Flatten an API payload into records. A payload without a `data.coins`
/// array (notably the error-shaped payload for non-200 responses) yields
/// no records rather than an error.
pub fn flatten_coins(payload: Value) -> Vec<CoinRecord> {
    let parsed: ApiCoinsResponse = serde_json::from_value(payload).unwrap_or_default();
    parsed.data.coins.iter().map(CoinRecord::from_value).collect()
}
