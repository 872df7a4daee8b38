use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

use super::{send_json, SwapQuoteProvider};
use crate::{config::ProviderConfig, entity::Token, error::DataError};

const PROVIDER: &str = "0x";
const API_VERSION: &str = "v2";

/// USDC has 6 decimals
const USDC_UNIT: u128 = 1_000_000;

/// 0x Swap API v2 price client, quoting USDC -> token buys
pub struct ZeroExClient {
    http: Client,
    api_url: String,
    api_key: String,
    chain_id: u64,
    usdc_address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceResponse {
    #[serde(default = "liquidity_default")]
    liquidity_available: bool,
    #[serde(default)]
    estimated_price_impact: Option<String>,
}

fn liquidity_default() -> bool {
    true
}

impl ZeroExClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_url: config.zeroex_api_url.trim_end_matches('/').to_string(),
            api_key: config.zeroex_api_key.clone(),
            chain_id: config.chain_id,
            usdc_address: config.usdc_address.clone(),
        }
    }

    fn price_request(&self, token: &Token, quote_amount: u64) -> RequestBuilder {
        let url = format!("{}/swap/allowance-holder/price", self.api_url);
        let buy_token = token.address_hex();
        let sell_amount = (u128::from(quote_amount) * USDC_UNIT).to_string();
        let chain_id = self.chain_id.to_string();

        self.http
            .get(url)
            .header("0x-api-key", &self.api_key)
            .header("0x-version", API_VERSION)
            .query(&[
                ("chainId", chain_id.as_str()),
                ("sellToken", self.usdc_address.as_str()),
                ("buyToken", buy_token.as_str()),
                ("sellAmount", sell_amount.as_str()),
            ])
    }
}

#[async_trait]
impl SwapQuoteProvider for ZeroExClient {
    async fn get_swap_slippage(&self, token: &Token, quote_amount: u64) -> Result<f64, DataError> {
        debug!(token = %token.label(), quote_amount, "Fetching swap price impact");

        let request = self.price_request(token, quote_amount);
        let response: PriceResponse = send_json(PROVIDER, request).await?;
        parse_price_impact(response)
    }
}

fn parse_price_impact(response: PriceResponse) -> Result<f64, DataError> {
    if !response.liquidity_available {
        return Err(DataError::InvalidPayload("0x: no liquidity for pair".into()));
    }

    let raw = response
        .estimated_price_impact
        .ok_or_else(|| DataError::missing("estimatedPriceImpact"))?;

    raw.parse::<f64>()
        .map_err(|_| DataError::InvalidPayload(format!("estimatedPriceImpact: `{raw}`")))
}
