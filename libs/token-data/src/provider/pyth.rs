use alloy::primitives::B256;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{send_json, OracleProvider};
use crate::{
    config::ProviderConfig,
    entity::{OracleSnapshot, Token},
    error::DataError,
};

const PROVIDER: &str = "pyth";

/// Pyth Hermes price service client
pub struct PythClient {
    http: Client,
    hermes_url: String,
}

#[derive(Debug, Deserialize)]
struct LatestPriceResponse {
    #[serde(default)]
    parsed: Vec<ParsedPriceUpdate>,
}

#[derive(Debug, Deserialize)]
struct ParsedPriceUpdate {
    id: String,
    price: HermesPrice,
}

#[derive(Debug, Deserialize)]
struct HermesPrice {
    price: String,
    conf: String,
    expo: i32,
    publish_time: i64,
}

impl PythClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            hermes_url: config.pyth_hermes_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl OracleProvider for PythClient {
    async fn get_price_snapshot(&self, token: &Token) -> Result<OracleSnapshot, DataError> {
        let feed_id = token
            .price_feed_id
            .ok_or_else(|| DataError::missing("price_feed_id"))?;

        debug!(token = %token.label(), feed = %feed_id, "Fetching oracle price");

        let url = format!("{}/v2/updates/price/latest", self.hermes_url);
        let feed = format!("{feed_id:#x}");
        let request = self
            .http
            .get(url)
            .query(&[("ids[]", feed.as_str()), ("parsed", "true")]);

        let response: LatestPriceResponse = send_json(PROVIDER, request).await?;
        parse_latest_price(feed_id, response)
    }
}

fn parse_latest_price(
    feed_id: B256,
    response: LatestPriceResponse,
) -> Result<OracleSnapshot, DataError> {
    let wanted = format!("{feed_id:x}");
    let update = response
        .parsed
        .into_iter()
        .find(|update| update.id.trim_start_matches("0x").eq_ignore_ascii_case(&wanted))
        .ok_or_else(|| DataError::missing(format!("parsed[{wanted}]")))?;

    let raw_price = update
        .price
        .price
        .parse::<i64>()
        .map_err(|_| DataError::InvalidPayload(format!("price.price: `{}`", update.price.price)))?;
    let raw_confidence = update
        .price
        .conf
        .parse::<u64>()
        .map_err(|_| DataError::InvalidPayload(format!("price.conf: `{}`", update.price.conf)))?;
    let publish_time = DateTime::from_timestamp(update.price.publish_time, 0).ok_or_else(|| {
        DataError::InvalidPayload(format!("publish_time: {}", update.price.publish_time))
    })?;

    Ok(OracleSnapshot {
        feed_id,
        raw_price,
        raw_confidence,
        expo: update.price.expo,
        publish_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    const FEED: &str = "0x8ac0c70fff57e9aefdf5edf44b51d62c2d433653cbb2cf5cc06bb115af04d221";

    fn response(id: &str, conf: &str) -> LatestPriceResponse {
        serde_json::from_value(json!({
            "binary": { "encoding": "hex", "data": [] },
            "parsed": [{
                "id": id,
                "price": { "price": "1452300000", "conf": conf, "expo": -8, "publish_time": 1_718_723_405 },
                "ema_price": { "price": "1450000000", "conf": "1100000", "expo": -8, "publish_time": 1_718_723_405 },
                "metadata": { "slot": 1, "proof_available_time": 1_718_723_406, "prev_publish_time": 1_718_723_404 }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_latest_price() {
        let feed_id = B256::from_str(FEED).unwrap();
        let snapshot =
            parse_latest_price(feed_id, response(FEED.trim_start_matches("0x"), "1210000")).unwrap();

        assert_eq!(snapshot.raw_price, 1_452_300_000);
        assert_eq!(snapshot.raw_confidence, 1_210_000);
        assert_eq!(snapshot.expo, -8);
        assert!((snapshot.confidence() - 0.0121).abs() < 1e-12);
        assert_eq!(snapshot.publish_time.timestamp(), 1_718_723_405);
    }

    #[test]
    fn test_parse_latest_price_wrong_feed() {
        let feed_id = B256::from_str(FEED).unwrap();
        let result = parse_latest_price(feed_id, response("ff".repeat(32).as_str(), "1"));
        assert!(matches!(result, Err(DataError::MissingField(_))));
    }

    #[test]
    fn test_parse_latest_price_bad_confidence() {
        let feed_id = B256::from_str(FEED).unwrap();
        let result = parse_latest_price(feed_id, response(FEED, "-3"));
        assert!(matches!(result, Err(DataError::InvalidPayload(_))));
    }
}
