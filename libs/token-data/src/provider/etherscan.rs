use std::str::FromStr;

use alloy::primitives::TxHash;
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{send_json, ChainIndexer};
use crate::{
    config::ProviderConfig,
    entity::{ContractCreation, Token},
    error::DataError,
};

const PROVIDER: &str = "etherscan";

/// Etherscan contract-creation lookup
pub struct EtherscanClient {
    http: Client,
    api_url: String,
    api_key: String,
    chain_id: u64,
}

#[derive(Debug, Deserialize)]
struct EtherscanResponse {
    status: String,
    #[serde(default)]
    message: String,
    result: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreationRow {
    tx_hash: String,
    #[serde(default)]
    block_number: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

impl EtherscanClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_url: config.etherscan_api_url.clone(),
            api_key: config.etherscan_api_key.clone(),
            chain_id: config.chain_id,
        }
    }

    fn creation_request(&self, token: &Token) -> RequestBuilder {
        let address = token.address_hex();
        let chain_id = self.chain_id.to_string();

        self.http.get(&self.api_url).query(&[
            ("chainid", chain_id.as_str()),
            ("module", "contract"),
            ("action", "getcontractcreation"),
            ("contractaddresses", address.as_str()),
            ("apikey", self.api_key.as_str()),
        ])
    }
}

#[async_trait]
impl ChainIndexer for EtherscanClient {
    async fn get_contract_creation(&self, token: &Token) -> Result<ContractCreation, DataError> {
        debug!(token = %token.label(), "Fetching contract creation");

        let request = self.creation_request(token);
        let response: EtherscanResponse = send_json(PROVIDER, request).await?;
        parse_contract_creation(response)
    }
}

fn parse_contract_creation(response: EtherscanResponse) -> Result<ContractCreation, DataError> {
    if response.status != "1" {
        // On failure `result` carries the reason as a string
        return Err(DataError::InvalidPayload(format!(
            "etherscan {}: {}",
            response.message, response.result
        )));
    }

    let rows: Vec<CreationRow> = serde_json::from_value(response.result)?;
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| DataError::missing("result[0]"))?;

    let tx_hash = TxHash::from_str(&row.tx_hash)
        .map_err(|_| DataError::InvalidPayload(format!("txHash: `{}`", row.tx_hash)))?;

    let block_number = row
        .block_number
        .ok_or_else(|| DataError::missing("result[0].blockNumber"))?;
    let block_number = block_number
        .parse::<u64>()
        .map_err(|_| DataError::InvalidPayload(format!("blockNumber: `{block_number}`")))?;

    let timestamp = row
        .timestamp
        .ok_or_else(|| DataError::missing("result[0].timestamp"))?;
    let timestamp = timestamp
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or_else(|| DataError::InvalidPayload(format!("timestamp: `{timestamp}`")))?;

    Ok(ContractCreation {
        timestamp,
        block_number,
        tx_hash,
    })
}
