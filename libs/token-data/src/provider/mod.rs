//! Upstream data providers
//!
//! Each trait is a single request/response seam to one external service:
//! - Market data: token snapshot and daily price history (CoinGecko)
//! - Wallet activity: transaction and transfer totals (Moralis)
//! - Oracle: latest price with confidence (Pyth Hermes)
//! - Swap quotes: price impact of a USDC-sized buy (0x)
//! - Holders: top holder table (Ethplorer)
//! - Chain indexer: contract deployment lookup (Etherscan)

pub mod coingecko;
pub mod etherscan;
pub mod ethplorer;
pub mod moralis;
pub mod pyth;
pub mod zeroex;

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    config::ProviderConfig,
    entity::{
        ContractCreation, HistoricalPriceSeries, HolderDistribution, OracleSnapshot, Token,
        TokenSnapshot, WalletActivitySummary,
    },
    error::DataError,
};

pub use coingecko::CoinGeckoClient;
pub use etherscan::EtherscanClient;
pub use ethplorer::EthplorerClient;
pub use moralis::MoralisClient;
pub use pyth::PythClient;
pub use zeroex::ZeroExClient;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn get_token_snapshot(&self, token: &Token) -> Result<TokenSnapshot, DataError>;

    async fn get_historical_prices(
        &self,
        token: &Token,
    ) -> Result<HistoricalPriceSeries, DataError>;
}

#[async_trait]
pub trait WalletActivityProvider: Send + Sync {
    async fn get_wallet_activity(&self, token: &Token)
        -> Result<WalletActivitySummary, DataError>;
}

#[async_trait]
pub trait OracleProvider: Send + Sync {
    async fn get_price_snapshot(&self, token: &Token) -> Result<OracleSnapshot, DataError>;
}

#[async_trait]
pub trait SwapQuoteProvider: Send + Sync {
    /// Price impact of buying `token` with `quote_amount` units of the quote currency
    async fn get_swap_slippage(&self, token: &Token, quote_amount: u64) -> Result<f64, DataError>;
}

#[async_trait]
pub trait HolderProvider: Send + Sync {
    async fn get_top_holders(&self, token: &Token) -> Result<HolderDistribution, DataError>;
}

#[async_trait]
pub trait ChainIndexer: Send + Sync {
    async fn get_contract_creation(&self, token: &Token) -> Result<ContractCreation, DataError>;
}

/// Data-access handle bundling one client per provider
#[derive(Clone)]
pub struct DataSources {
    pub market: Arc<dyn MarketDataProvider>,
    pub wallet: Arc<dyn WalletActivityProvider>,
    pub oracle: Arc<dyn OracleProvider>,
    pub swap: Arc<dyn SwapQuoteProvider>,
    pub holders: Arc<dyn HolderProvider>,
    pub chain: Arc<dyn ChainIndexer>,
}

impl DataSources {
    /// Wire the HTTP clients around one shared connection pool
    pub fn from_config(config: &ProviderConfig) -> Result<Self, DataError> {
        let http = Client::builder()
            .user_agent(concat!("token-data/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            market: Arc::new(CoinGeckoClient::new(http.clone(), config)),
            wallet: Arc::new(MoralisClient::new(http.clone(), config)),
            oracle: Arc::new(PythClient::new(http.clone(), config)),
            swap: Arc::new(ZeroExClient::new(http.clone(), config)),
            holders: Arc::new(EthplorerClient::new(http.clone(), config)),
            chain: Arc::new(EtherscanClient::new(http, config)),
        })
    }
}

/// Send a request and decode a JSON body, mapping non-2xx responses to [`DataError::Status`]
pub(crate) async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> Result<T, DataError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(DataError::Status {
            provider,
            status: status.as_u16(),
            body,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
