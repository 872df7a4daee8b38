use std::str::FromStr;

use alloy::primitives::Address;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{send_json, HolderProvider};
use crate::{
    config::ProviderConfig,
    entity::{HolderDistribution, Token, TokenHolder},
    error::DataError,
};

const PROVIDER: &str = "ethplorer";

/// Ethplorer top-holder client
pub struct EthplorerClient {
    http: Client,
    api_url: String,
    api_key: String,
    limit: u32,
}

#[derive(Debug, Deserialize)]
struct TopHoldersResponse {
    #[serde(default)]
    holders: Option<Vec<HolderRow>>,
    #[serde(default)]
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct HolderRow {
    address: String,
    balance: f64,
    share: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

impl EthplorerClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_url: config.ethplorer_api_url.trim_end_matches('/').to_string(),
            api_key: config.ethplorer_api_key.clone(),
            limit: config.top_holders_limit,
        }
    }
}

#[async_trait]
impl HolderProvider for EthplorerClient {
    async fn get_top_holders(&self, token: &Token) -> Result<HolderDistribution, DataError> {
        debug!(token = %token.label(), limit = self.limit, "Fetching top holders");

        let url = format!("{}/getTopTokenHolders/{}", self.api_url, token.address_hex());
        let limit = self.limit.to_string();
        let request = self
            .http
            .get(url)
            .query(&[("apiKey", self.api_key.as_str()), ("limit", limit.as_str())]);

        let response: TopHoldersResponse = send_json(PROVIDER, request).await?;
        parse_top_holders(response)
    }
}

fn parse_top_holders(response: TopHoldersResponse) -> Result<HolderDistribution, DataError> {
    // Ethplorer reports API errors in a 200 body
    if let Some(error) = response.error {
        return Err(DataError::InvalidPayload(format!(
            "ethplorer error {}: {}",
            error.code.unwrap_or_default(),
            error.message.unwrap_or_default()
        )));
    }

    let holders = response
        .holders
        .ok_or_else(|| DataError::missing("holders"))?
        .into_iter()
        .map(|row| {
            let address = Address::from_str(&row.address)
                .map_err(|_| DataError::InvalidAddress(row.address.clone()))?;
            Ok(TokenHolder {
                address,
                balance: row.balance,
                share: row.share,
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    Ok(HolderDistribution::new(holders))
}
