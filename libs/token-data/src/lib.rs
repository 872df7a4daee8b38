//! Token data access
//!
//! Snapshot models and provider clients used to score Ethereum tokens.

pub mod config;
pub mod entity;
pub mod error;
pub mod provider;

// Re-export commonly used types
pub use config::ProviderConfig;
pub use entity::{
    ContractCreation, HistoricalPriceSeries, HolderDistribution, OracleSnapshot, PricePoint,
    Token, TokenHolder, TokenSnapshot, WalletActivitySummary,
};
pub use error::DataError;
pub use provider::{
    ChainIndexer, DataSources, HolderProvider, MarketDataProvider, OracleProvider,
    SwapQuoteProvider, WalletActivityProvider,
};

/// Build every provider client from environment configuration
pub fn initialize_providers() -> Result<DataSources, DataError> {
    let config = ProviderConfig::from_env()?;
    DataSources::from_config(&config)
}
