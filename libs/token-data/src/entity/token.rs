use std::str::FromStr;

use alloy::primitives::{Address, B256};
use serde::{de::IgnoredAny, Deserialize};

use crate::error::DataError;

/// Token handle identifying an ERC-20 contract on Ethereum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub address: Address,
    pub symbol: Option<String>,
    /// Pyth price feed used for the oracle snapshot
    pub price_feed_id: Option<B256>,
}

impl Token {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            symbol: None,
            price_feed_id: None,
        }
    }

    /// Parse a 0x-prefixed contract address
    pub fn parse(address: &str) -> Result<Self, DataError> {
        let address = Address::from_str(address.trim())
            .map_err(|_| DataError::InvalidAddress(address.to_string()))?;
        Ok(Self::new(address))
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_price_feed(mut self, price_feed_id: B256) -> Self {
        self.price_feed_id = Some(price_feed_id);
        self
    }

    /// Lowercase hex address as used in provider URLs
    pub fn address_hex(&self) -> String {
        format!("{:#x}", self.address)
    }

    /// Symbol if known, otherwise the address
    pub fn label(&self) -> String {
        self.symbol.clone().unwrap_or_else(|| self.address_hex())
    }
}

/// Market and metadata snapshot for a token as reported by the market-data aggregator
///
/// Every field is optional on the wire. The accessors turn an absent value
/// into [`DataError::MissingField`] so callers never see a silent default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenSnapshot {
    #[serde(default)]
    market_cap_rank: Option<u64>,
    #[serde(default)]
    coingecko_rank: Option<u64>,
    #[serde(default)]
    market_data: Option<MarketData>,
    #[serde(default)]
    public_interest_stats: Option<PublicInterestStats>,
    #[serde(default)]
    /// Only the listing count is used
    tickers: Option<Vec<IgnoredAny>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct MarketData {
    #[serde(default)]
    market_cap: Option<CurrencyValues>,
    #[serde(default)]
    fully_diluted_valuation: Option<CurrencyValues>,
    #[serde(default)]
    total_volume: Option<CurrencyValues>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CurrencyValues {
    #[serde(default)]
    usd: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PublicInterestStats {
    #[serde(default)]
    alexa_rank: Option<u64>,
}

impl TokenSnapshot {
    pub fn market_cap_rank(&self) -> Result<u64, DataError> {
        self.market_cap_rank
            .ok_or_else(|| DataError::missing("market_cap_rank"))
    }

    pub fn coingecko_rank(&self) -> Result<u64, DataError> {
        self.coingecko_rank
            .ok_or_else(|| DataError::missing("coingecko_rank"))
    }

    pub fn market_cap_usd(&self) -> Result<f64, DataError> {
        self.market_data()?
            .market_cap
            .as_ref()
            .and_then(|values| values.usd)
            .ok_or_else(|| DataError::missing("market_data.market_cap.usd"))
    }

    pub fn fully_diluted_valuation_usd(&self) -> Result<f64, DataError> {
        self.market_data()?
            .fully_diluted_valuation
            .as_ref()
            .and_then(|values| values.usd)
            .ok_or_else(|| DataError::missing("market_data.fully_diluted_valuation.usd"))
    }

    pub fn total_volume_usd(&self) -> Result<f64, DataError> {
        self.market_data()?
            .total_volume
            .as_ref()
            .and_then(|values| values.usd)
            .ok_or_else(|| DataError::missing("market_data.total_volume.usd"))
    }

    /// Web-traffic rank of the project's site
    pub fn alexa_rank(&self) -> Result<u64, DataError> {
        self.public_interest_stats
            .as_ref()
            .and_then(|stats| stats.alexa_rank)
            .ok_or_else(|| DataError::missing("public_interest_stats.alexa_rank"))
    }

    /// Number of exchange listings
    pub fn ticker_count(&self) -> Result<usize, DataError> {
        self.tickers
            .as_ref()
            .map(Vec::len)
            .ok_or_else(|| DataError::missing("tickers"))
    }

    fn market_data(&self) -> Result<&MarketData, DataError> {
        self.market_data
            .as_ref()
            .ok_or_else(|| DataError::missing("market_data"))
    }
}
