//! Token factor scoring
//!
//! Derives normalized risk/quality factors for an Ethereum token:
//! - Market: market cap, rank, FDV, 24h volume, tickers, web-traffic rank
//! - Volatility: price dispersion and log-return volatility
//! - Activity: transaction and transfer totals, contract age
//! - Liquidity and concentration: swap slippage, top-holder HHI
//! - Oracle: price confidence interval

pub mod normalize;
pub mod statistics;
pub mod token_factors;

pub use normalize::InvLinear;
pub use token_factors::{TokenFactorCalculator, DEFAULT_QUOTE_AMOUNTS, DEFAULT_SLIPPAGE_PACING};
