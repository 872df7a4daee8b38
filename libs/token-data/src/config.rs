use std::{env, str::FromStr};

use crate::error::DataError;

mod defaults {
    pub const CHAIN_ID: &str = "1";
    pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
    pub const COINGECKO_PLATFORM: &str = "ethereum";
    pub const HISTORY_DAYS: &str = "30";
    pub const MORALIS_API_URL: &str = "https://deep-index.moralis.io/api/v2.2";
    pub const MORALIS_CHAIN: &str = "eth";
    pub const PYTH_HERMES_URL: &str = "https://hermes.pyth.network";
    pub const ZEROEX_API_URL: &str = "https://api.0x.org";
    pub const USDC_ADDRESS: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
    pub const ETHPLORER_API_URL: &str = "https://api.ethplorer.io";
    pub const ETHPLORER_API_KEY: &str = "freekey";
    pub const TOP_HOLDERS_LIMIT: &str = "100";
    pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";
}

/// Endpoints and credentials for every upstream data provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// EVM chain id sent to the multichain APIs (0x, Etherscan)
    pub chain_id: u64,
    pub coingecko_api_url: String,
    pub coingecko_api_key: Option<String>,
    pub coingecko_platform: String,
    pub history_days: u32,
    pub moralis_api_url: String,
    pub moralis_api_key: String,
    pub moralis_chain: String,
    pub pyth_hermes_url: String,
    pub zeroex_api_url: String,
    pub zeroex_api_key: String,
    pub usdc_address: String,
    pub ethplorer_api_url: String,
    pub ethplorer_api_key: String,
    pub top_holders_limit: u32,
    pub etherscan_api_url: String,
    pub etherscan_api_key: String,
}

impl ProviderConfig {
    /// Read provider settings from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self, DataError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DataError> {
        let var_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
        let required = |name: &str| lookup(name).ok_or_else(|| DataError::MissingEnvVar(name.to_string()));

        Ok(Self {
            chain_id: parse_var("CHAIN_ID", var_or("CHAIN_ID", defaults::CHAIN_ID))?,
            coingecko_api_url: var_or("COINGECKO_API_URL", defaults::COINGECKO_API_URL),
            coingecko_api_key: lookup("COINGECKO_API_KEY"),
            coingecko_platform: var_or("COINGECKO_PLATFORM", defaults::COINGECKO_PLATFORM),
            history_days: parse_var("HISTORY_DAYS", var_or("HISTORY_DAYS", defaults::HISTORY_DAYS))?,
            moralis_api_url: var_or("MORALIS_API_URL", defaults::MORALIS_API_URL),
            moralis_api_key: required("MORALIS_API_KEY")?,
            moralis_chain: var_or("MORALIS_CHAIN", defaults::MORALIS_CHAIN),
            pyth_hermes_url: var_or("PYTH_HERMES_URL", defaults::PYTH_HERMES_URL),
            zeroex_api_url: var_or("ZEROEX_API_URL", defaults::ZEROEX_API_URL),
            zeroex_api_key: required("ZEROEX_API_KEY")?,
            usdc_address: var_or("USDC_ADDRESS", defaults::USDC_ADDRESS),
            ethplorer_api_url: var_or("ETHPLORER_API_URL", defaults::ETHPLORER_API_URL),
            ethplorer_api_key: var_or("ETHPLORER_API_KEY", defaults::ETHPLORER_API_KEY),
            top_holders_limit: parse_var(
                "TOP_HOLDERS_LIMIT",
                var_or("TOP_HOLDERS_LIMIT", defaults::TOP_HOLDERS_LIMIT),
            )?,
            etherscan_api_url: var_or("ETHERSCAN_API_URL", defaults::ETHERSCAN_API_URL),
            etherscan_api_key: required("ETHERSCAN_API_KEY")?,
        })
    }
}

fn parse_var<T: FromStr>(name: &str, raw: String) -> Result<T, DataError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| DataError::InvalidConfig(name.to_string()))
}

#[cfg(test)]
impl ProviderConfig {
    /// Default endpoints with placeholder keys
    pub(crate) fn with_test_keys() -> Self {
        Self::from_lookup(|name| name.ends_with("_API_KEY").then(|| format!("test-{name}")))
            .unwrap()
    }
}
