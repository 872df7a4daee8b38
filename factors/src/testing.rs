//! In-memory providers for calculator tests

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use alloy::primitives::{Address, TxHash, B256};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

use token_data::{
    ChainIndexer, ContractCreation, DataError, DataSources, HistoricalPriceSeries,
    HolderDistribution, HolderProvider, MarketDataProvider, OracleProvider, OracleSnapshot,
    PricePoint, SwapQuoteProvider, Token, TokenHolder, TokenSnapshot, WalletActivityProvider,
    WalletActivitySummary,
};

/// How often each provider endpoint was hit
#[derive(Debug, Default)]
pub struct CallCounts {
    pub snapshot: AtomicUsize,
    pub history: AtomicUsize,
    pub wallet: AtomicUsize,
    pub oracle: AtomicUsize,
    pub holders: AtomicUsize,
}

/// One struct standing in for every provider
pub struct MockProvider {
    pub snapshot: Value,
    pub prices: Vec<f64>,
    pub wallet: Value,
    /// Returned in call order; 0.5 once exhausted
    pub slippages: Vec<f64>,
    /// `(balance, share percent)` rows
    pub holders: Vec<(f64, f64)>,
    pub created_at: DateTime<Utc>,
    pub fail_wallet: bool,
    pub fail_swap: bool,
    pub calls: Arc<CallCounts>,
    pub quote_calls: Arc<Mutex<Vec<u64>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            snapshot: json!({
                "id": "chainlink",
                "symbol": "link",
                "market_cap_rank": 14,
                "coingecko_rank": 9,
                "market_data": {
                    "market_cap": { "usd": 1_000_000.0 },
                    "fully_diluted_valuation": { "usd": 4_000_000.0 },
                    "total_volume": { "usd": 250_000.0 }
                },
                "public_interest_stats": { "alexa_rank": 19_999 },
                "tickers": [
                    { "base": "LINK", "target": "USDT" },
                    { "base": "LINK", "target": "USD" },
                    { "base": "LINK", "target": "WETH" }
                ]
            }),
            prices: vec![14.2, 14.9, 13.8, 15.1, 15.6, 14.7],
            wallet: json!({
                "transactions": { "total": "1199" },
                "token_transfers": { "total": "3399" }
            }),
            slippages: Vec::new(),
            holders: vec![(500.0, 5.0), (2_000.0, 20.0), (1_000.0, 10.0)],
            created_at: Utc::now() - Duration::days(365),
            fail_wallet: false,
            fail_swap: false,
            calls: Arc::new(CallCounts::default()),
            quote_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockProvider {
    pub fn token() -> Token {
        Token::new(Address::repeat_byte(0x51))
            .with_symbol("LINK")
            .with_price_feed(B256::repeat_byte(0x8a))
    }

    pub fn into_sources(self) -> DataSources {
        let mock = Arc::new(self);
        DataSources {
            market: mock.clone(),
            wallet: mock.clone(),
            oracle: mock.clone(),
            swap: mock.clone(),
            holders: mock.clone(),
            chain: mock,
        }
    }

    fn unavailable() -> DataError {
        DataError::Status {
            provider: "mock",
            status: 503,
            body: "unavailable".into(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    async fn get_token_snapshot(&self, _token: &Token) -> Result<TokenSnapshot, DataError> {
        self.calls.snapshot.fetch_add(1, Ordering::SeqCst);
        Ok(serde_json::from_value(self.snapshot.clone())?)
    }

    async fn get_historical_prices(
        &self,
        _token: &Token,
    ) -> Result<HistoricalPriceSeries, DataError> {
        self.calls.history.fetch_add(1, Ordering::SeqCst);

        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let points = self
            .prices
            .iter()
            .enumerate()
            .map(|(day, &price_usd)| PricePoint {
                timestamp: start + Duration::days(day as i64),
                price_usd,
            })
            .collect();

        Ok(HistoricalPriceSeries::new(points))
    }
}

#[async_trait]
impl WalletActivityProvider for MockProvider {
    async fn get_wallet_activity(
        &self,
        _token: &Token,
    ) -> Result<WalletActivitySummary, DataError> {
        self.calls.wallet.fetch_add(1, Ordering::SeqCst);
        if self.fail_wallet {
            return Err(Self::unavailable());
        }
        Ok(serde_json::from_value(self.wallet.clone())?)
    }
}

#[async_trait]
impl OracleProvider for MockProvider {
    async fn get_price_snapshot(&self, token: &Token) -> Result<OracleSnapshot, DataError> {
        self.calls.oracle.fetch_add(1, Ordering::SeqCst);
        Ok(OracleSnapshot {
            feed_id: token.price_feed_id.unwrap_or_default(),
            raw_price: 1_500_000_000,
            raw_confidence: 25_000_000,
            expo: -8,
            publish_time: Utc::now(),
        })
    }
}

#[async_trait]
impl SwapQuoteProvider for MockProvider {
    async fn get_swap_slippage(&self, _token: &Token, quote_amount: u64) -> Result<f64, DataError> {
        if self.fail_swap {
            return Err(Self::unavailable());
        }

        let mut calls = self.quote_calls.lock().unwrap();
        let slippage = self.slippages.get(calls.len()).copied().unwrap_or(0.5);
        calls.push(quote_amount);
        Ok(slippage)
    }
}

#[async_trait]
impl HolderProvider for MockProvider {
    async fn get_top_holders(&self, _token: &Token) -> Result<HolderDistribution, DataError> {
        self.calls.holders.fetch_add(1, Ordering::SeqCst);
        let holders = self
            .holders
            .iter()
            .enumerate()
            .map(|(i, &(balance, share))| TokenHolder {
                address: Address::with_last_byte(i as u8 + 1),
                balance,
                share,
            })
            .collect();
        Ok(HolderDistribution::new(holders))
    }
}

#[async_trait]
impl ChainIndexer for MockProvider {
    async fn get_contract_creation(&self, _token: &Token) -> Result<ContractCreation, DataError> {
        Ok(ContractCreation {
            timestamp: self.created_at,
            block_number: 18_908_895,
            tx_hash: TxHash::repeat_byte(0xab),
        })
    }
}
