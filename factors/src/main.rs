//! Token Factors
//!
//! Scores one Ethereum token: fetches provider snapshots, derives every
//! normalized factor and prints the report as JSON on stdout.

use config::FactorConfig;
use report::FactorReport;
use scoring::TokenFactorCalculator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod report;
pub mod scoring;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "factors=info,token_data=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = FactorConfig::from_env()?;
    tracing::info!("Scoring token {}...", config.token.label());

    let data = token_data::initialize_providers()?;
    tracing::info!("Providers initialized");

    let calculator = TokenFactorCalculator::new(
        data,
        config.token,
        config.normalizer,
        config.slippage_pacing,
    )
    .await?;

    let report = FactorReport::compute(&calculator).await?;
    for (factor, score) in report.factors() {
        tracing::debug!(factor, score, "Factor score");
    }
    tracing::info!("Computed {} factors", report.factors().len());

    println!("{}", report.to_json()?);

    Ok(())
}
