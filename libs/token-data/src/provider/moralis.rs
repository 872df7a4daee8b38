use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{send_json, WalletActivityProvider};
use crate::{
    config::ProviderConfig,
    entity::{Token, WalletActivitySummary},
    error::DataError,
};

const PROVIDER: &str = "moralis";

/// Wallet-activity indexer client
///
/// The token contract is queried as if it were a wallet, which yields the
/// transaction and transfer totals touching the contract.
pub struct MoralisClient {
    http: Client,
    api_url: String,
    api_key: String,
    chain: String,
}

impl MoralisClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_url: config.moralis_api_url.trim_end_matches('/').to_string(),
            api_key: config.moralis_api_key.clone(),
            chain: config.moralis_chain.clone(),
        }
    }
}

#[async_trait]
impl WalletActivityProvider for MoralisClient {
    async fn get_wallet_activity(
        &self,
        token: &Token,
    ) -> Result<WalletActivitySummary, DataError> {
        debug!(token = %token.label(), "Fetching wallet activity");

        let url = format!("{}/wallets/{}/stats", self.api_url, token.address_hex());
        let request = self
            .http
            .get(url)
            .header("X-API-Key", &self.api_key)
            .query(&[("chain", self.chain.as_str())]);

        send_json(PROVIDER, request).await
    }
}
