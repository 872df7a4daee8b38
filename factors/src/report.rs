//! Full factor report for one token

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::FactorResult,
    scoring::{TokenFactorCalculator, DEFAULT_QUOTE_AMOUNTS},
};

/// Every normalized factor for a token
#[derive(Debug, Clone, Serialize)]
pub struct FactorReport {
    pub token: String,
    pub computed_at: DateTime<Utc>,
    pub price_samples: usize,
    pub mean_slippage: f64,
    pub market_cap_rank: f64,
    pub market_cap: f64,
    pub fully_diluted_valuation: f64,
    pub volume_24h: f64,
    pub volume_volatility: f64,
    pub returns_volatility: f64,
    pub abs_normalised_returns_volatility: f64,
    pub alexa_rank: f64,
    pub coingecko_rank: f64,
    pub token_tickers_length: f64,
    pub age: f64,
    pub token_transactions: f64,
    pub token_transfers: f64,
    pub top_holders_hhi: f64,
    pub oracle_confidence: f64,
}

impl FactorReport {
    /// Evaluate all factors in order; the first failure aborts the report
    pub async fn compute(calculator: &TokenFactorCalculator) -> FactorResult<Self> {
        Ok(Self {
            token: calculator.token().label(),
            computed_at: Utc::now(),
            price_samples: calculator.price_history().len(),
            mean_slippage: calculator
                .calculate_mean_slippage(&DEFAULT_QUOTE_AMOUNTS)
                .await?,
            market_cap_rank: calculator.calculate_market_cap_rank()?,
            market_cap: calculator.calculate_market_cap()?,
            fully_diluted_valuation: calculator.calculate_fully_diluted_valuation()?,
            volume_24h: calculator.calculate_24h_volume()?,
            volume_volatility: calculator.calculate_volume_volatility()?,
            returns_volatility: calculator.calculate_returns_volatility()?,
            abs_normalised_returns_volatility: calculator
                .calculate_abs_normalised_returns_volatility()?,
            alexa_rank: calculator.calculate_alexa_rank()?,
            coingecko_rank: calculator.calculate_coingecko_rank()?,
            token_tickers_length: calculator.calculate_token_tickers_length()?,
            age: calculator.calculate_age().await?,
            token_transactions: calculator.calculate_token_transactions()?,
            token_transfers: calculator.calculate_token_transfers()?,
            top_holders_hhi: calculator.calculate_top_holders_hhi().await?,
            oracle_confidence: calculator.calculate_oracle_confidence()?,
        })
    }

    pub fn to_json(&self) -> FactorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Factor name and score pairs, in report order
    pub fn factors(&self) -> [(&'static str, f64); 16] {
        [
            ("mean_slippage", self.mean_slippage),
            ("market_cap_rank", self.market_cap_rank),
            ("market_cap", self.market_cap),
            ("fully_diluted_valuation", self.fully_diluted_valuation),
            ("volume_24h", self.volume_24h),
            ("volume_volatility", self.volume_volatility),
            ("returns_volatility", self.returns_volatility),
            (
                "abs_normalised_returns_volatility",
                self.abs_normalised_returns_volatility,
            ),
            ("alexa_rank", self.alexa_rank),
            ("coingecko_rank", self.coingecko_rank),
            ("token_tickers_length", self.token_tickers_length),
            ("age", self.age),
            ("token_transactions", self.token_transactions),
            ("token_transfers", self.token_transfers),
            ("top_holders_hhi", self.top_holders_hhi),
            ("oracle_confidence", self.oracle_confidence),
        ]
    }
}
