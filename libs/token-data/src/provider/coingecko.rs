use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use super::{send_json, MarketDataProvider};
use crate::{
    config::ProviderConfig,
    entity::{HistoricalPriceSeries, MarketChart, Token, TokenSnapshot},
    error::DataError,
};

const PROVIDER: &str = "coingecko";

/// Market-data aggregator client
pub struct CoinGeckoClient {
    http: Client,
    api_url: String,
    api_key: Option<String>,
    platform: String,
    history_days: u32,
}

impl CoinGeckoClient {
    pub fn new(http: Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            api_url: config.coingecko_api_url.trim_end_matches('/').to_string(),
            api_key: config.coingecko_api_key.clone(),
            platform: config.coingecko_platform.clone(),
            history_days: config.history_days,
        }
    }

    fn contract_url(&self, token: &Token) -> String {
        format!(
            "{}/coins/{}/contract/{}",
            self.api_url,
            self.platform,
            token.address_hex()
        )
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.http.get(url);
        match &self.api_key {
            Some(key) => request.header("x-cg-demo-api-key", key),
            None => request,
        }
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoClient {
    async fn get_token_snapshot(&self, token: &Token) -> Result<TokenSnapshot, DataError> {
        debug!(token = %token.label(), "Fetching token snapshot");

        let request = self.get(&self.contract_url(token)).query(&[
            ("localization", "false"),
            ("tickers", "true"),
            ("market_data", "true"),
            ("community_data", "false"),
            ("developer_data", "false"),
        ]);

        send_json(PROVIDER, request).await
    }

    async fn get_historical_prices(
        &self,
        token: &Token,
    ) -> Result<HistoricalPriceSeries, DataError> {
        debug!(token = %token.label(), days = self.history_days, "Fetching price history");

        let url = format!("{}/market_chart", self.contract_url(token));
        let days = self.history_days.to_string();
        let request = self.get(&url).query(&[
            ("vs_currency", "usd"),
            ("days", days.as_str()),
            ("interval", "daily"),
        ]);

        let chart: MarketChart = send_json(PROVIDER, request).await?;
        HistoricalPriceSeries::from_market_chart(chart)
    }
}
