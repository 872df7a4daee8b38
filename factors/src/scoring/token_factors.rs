//! Token factor calculator
//!
//! Fetches the market snapshot, daily price history, wallet activity and
//! oracle price for one token up front, then derives each factor from that
//! cached state. Slippage, holder concentration and contract age go to
//! their providers on every call.
//!
//! Every factor returns its raw metric passed through [`InvLinear`].

use std::time::Duration;

use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, info};

use token_data::{
    DataSources, HistoricalPriceSeries, OracleSnapshot, Token, TokenSnapshot,
    WalletActivitySummary,
};

use super::{normalize::InvLinear, statistics};
use crate::error::{AppError, FactorResult};

/// Quote-currency amounts sampled for mean slippage
pub const DEFAULT_QUOTE_AMOUNTS: [u64; 5] = [1_000, 2_000, 5_000, 10_000, 100_000];

/// Delay between consecutive swap-quote requests
pub const DEFAULT_SLIPPAGE_PACING: Duration = Duration::from_millis(100);

pub struct TokenFactorCalculator {
    data: DataSources,
    token: Token,
    normalizer: InvLinear,
    slippage_pacing: Duration,
    token_snapshot: TokenSnapshot,
    price_history: HistoricalPriceSeries,
    wallet_activity: WalletActivitySummary,
    oracle: OracleSnapshot,
}

impl TokenFactorCalculator {
    /// Fetch every cached snapshot for `token`
    ///
    /// Fails as a whole if any provider call fails.
    pub async fn new(
        data: DataSources,
        token: Token,
        normalizer: InvLinear,
        slippage_pacing: Duration,
    ) -> FactorResult<Self> {
        let token_snapshot = data.market.get_token_snapshot(&token).await?;
        let price_history = data.market.get_historical_prices(&token).await?;
        let wallet_activity = data.wallet.get_wallet_activity(&token).await?;
        let oracle = data.oracle.get_price_snapshot(&token).await?;

        info!(
            token = %token.label(),
            price_samples = price_history.len(),
            "Loaded token snapshots"
        );

        Ok(Self {
            data,
            token,
            normalizer,
            slippage_pacing,
            token_snapshot,
            price_history,
            wallet_activity,
            oracle,
        })
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn price_history(&self) -> &HistoricalPriceSeries {
        &self.price_history
    }

    /// Mean price impact over `quote_amounts`, queried one at a time in order
    pub async fn calculate_mean_slippage(&self, quote_amounts: &[u64]) -> FactorResult<f64> {
        let mut slippages = Vec::with_capacity(quote_amounts.len());

        for (i, &amount) in quote_amounts.iter().enumerate() {
            // Stay under the quote API's rate limit
            if i > 0 {
                sleep(self.slippage_pacing).await;
            }
            slippages.push(self.data.swap.get_swap_slippage(&self.token, amount).await?);
        }

        let mean_slippage = statistics::mean(&slippages)
            .ok_or_else(|| AppError::InsufficientData("no quote amounts for slippage".into()))?;

        self.score("mean_slippage", mean_slippage)
    }

    pub fn calculate_market_cap_rank(&self) -> FactorResult<f64> {
        let rank = self.token_snapshot.market_cap_rank()?;
        self.score("market_cap_rank", rank as f64)
    }

    pub fn calculate_market_cap(&self) -> FactorResult<f64> {
        self.score("market_cap", self.token_snapshot.market_cap_usd()?)
    }

    pub fn calculate_fully_diluted_valuation(&self) -> FactorResult<f64> {
        let fdv = self.token_snapshot.fully_diluted_valuation_usd()?;
        self.score("fully_diluted_valuation", fdv)
    }

    pub fn calculate_24h_volume(&self) -> FactorResult<f64> {
        self.score("volume_24h", self.token_snapshot.total_volume_usd()?)
    }

    /// Standard deviation of the raw daily prices
    ///
    /// Despite the name this measures price dispersion, not traded volume.
    pub fn calculate_volume_volatility(&self) -> FactorResult<f64> {
        let prices = self.price_history.prices();
        let volatility = statistics::sample_std_dev(&prices).ok_or_else(|| {
            AppError::InsufficientData(format!(
                "volume volatility needs at least 2 prices, got {}",
                prices.len()
            ))
        })?;

        self.score("volume_volatility", volatility)
    }

    /// Standard deviation of daily log returns
    ///
    /// Needs at least 3 prices. A 2-price series yields a single return whose
    /// sample deviation is undefined, so it fails with `InsufficientData`
    /// instead of producing NaN.
    pub fn calculate_returns_volatility(&self) -> FactorResult<f64> {
        let volatility = self.returns_volatility()?;
        self.score("returns_volatility", volatility)
    }

    /// Returns volatility divided by the absolute mean log return
    ///
    /// A mean of exactly zero scores a raw value of 0.
    pub fn calculate_abs_normalised_returns_volatility(&self) -> FactorResult<f64> {
        let returns = statistics::log_returns(&self.price_history.prices());
        let volatility = sample_std_dev_of_returns(&returns)?;
        let mean_return = statistics::mean(&returns)
            .ok_or_else(|| AppError::InsufficientData("no log returns".into()))?;

        let normalised = if mean_return != 0.0 {
            volatility / mean_return.abs()
        } else {
            0.0
        };

        self.score("abs_normalised_returns_volatility", normalised)
    }

    pub fn calculate_alexa_rank(&self) -> FactorResult<f64> {
        let rank = self.token_snapshot.alexa_rank()?;
        self.score("alexa_rank", rank as f64)
    }

    pub fn calculate_coingecko_rank(&self) -> FactorResult<f64> {
        let rank = self.token_snapshot.coingecko_rank()?;
        self.score("coingecko_rank", rank as f64)
    }

    /// Number of exchange tickers (more listings is safer)
    pub fn calculate_token_tickers_length(&self) -> FactorResult<f64> {
        let tickers = self.token_snapshot.ticker_count()?;
        self.score("token_tickers_length", tickers as f64)
    }

    /// Whole days since the contract was deployed
    pub async fn calculate_age(&self) -> FactorResult<f64> {
        let creation = self.data.chain.get_contract_creation(&self.token).await?;
        let age_days = creation.age_days(Utc::now());

        debug!(
            block = creation.block_number,
            tx = %creation.tx_hash,
            age_days,
            "Resolved contract creation"
        );

        self.score("age", age_days as f64)
    }

    pub fn calculate_token_transactions(&self) -> FactorResult<f64> {
        let transactions = self.wallet_activity.transactions()?;
        self.score("token_transactions", transactions as f64)
    }

    pub fn calculate_token_transfers(&self) -> FactorResult<f64> {
        let transfers = self.wallet_activity.token_transfers()?;
        self.score("token_transfers", transfers as f64)
    }

    /// Herfindahl-Hirschman Index of a freshly fetched top-holder table
    pub async fn calculate_top_holders_hhi(&self) -> FactorResult<f64> {
        let distribution = self.data.holders.get_top_holders(&self.token).await?;

        let shares: Vec<f64> = distribution
            .sorted_by_balance()
            .iter()
            .map(|holder| holder.share / 100.0)
            .collect();
        let hhi = statistics::herfindahl_index(&shares);

        debug!(holders = shares.len(), hhi, "Computed holder concentration");

        self.score("top_holders_hhi", hhi)
    }

    pub fn calculate_oracle_confidence(&self) -> FactorResult<f64> {
        self.score("oracle_confidence", self.oracle.confidence())
    }

    fn returns_volatility(&self) -> FactorResult<f64> {
        let returns = statistics::log_returns(&self.price_history.prices());
        sample_std_dev_of_returns(&returns)
    }

    fn score(&self, factor: &'static str, raw: f64) -> FactorResult<f64> {
        if !raw.is_finite() {
            return Err(AppError::NonFinite(factor));
        }

        let score = self.normalizer.apply(raw);
        debug!(factor, raw, score, "Scored factor");
        Ok(score)
    }
}

fn sample_std_dev_of_returns(returns: &[f64]) -> FactorResult<f64> {
    statistics::sample_std_dev(returns).ok_or_else(|| {
        AppError::InsufficientData(format!(
            "returns volatility needs at least 2 log returns, got {}",
            returns.len()
        ))
    })
}
