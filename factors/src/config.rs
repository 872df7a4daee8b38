use std::{env, str::FromStr, time::Duration};

use alloy::primitives::B256;
use token_data::Token;

use crate::{
    error::{AppError, FactorResult},
    scoring::{normalize, InvLinear, DEFAULT_SLIPPAGE_PACING},
};

/// Which token to score and how
#[derive(Debug, Clone)]
pub struct FactorConfig {
    pub token: Token,
    pub normalizer: InvLinear,
    pub slippage_pacing: Duration,
}

impl FactorConfig {
    pub fn from_env() -> FactorResult<Self> {
        dotenvy::dotenv().ok();

        let address = env::var("TOKEN_ADDRESS")
            .map_err(|_| AppError::MissingEnvVar("TOKEN_ADDRESS".into()))?;
        let mut token = Token::parse(&address)?;

        if let Ok(symbol) = env::var("TOKEN_SYMBOL") {
            token = token.with_symbol(symbol);
        }

        if let Ok(feed) = env::var("PYTH_PRICE_FEED_ID") {
            let feed_id = B256::from_str(feed.trim())
                .map_err(|_| AppError::InvalidParameter(format!("PYTH_PRICE_FEED_ID `{feed}`")))?;
            token = token.with_price_feed(feed_id);
        }

        let normalizer = InvLinear::new(
            parse_var("INVLINEAR_SCALE", normalize::DEFAULT_SCALE)?,
            parse_var("INVLINEAR_SLOPE", normalize::DEFAULT_SLOPE)?,
            parse_var("INVLINEAR_OFFSET", normalize::DEFAULT_OFFSET)?,
        )?;

        let slippage_pacing = Duration::from_millis(parse_var(
            "SLIPPAGE_PACING_MS",
            DEFAULT_SLIPPAGE_PACING.as_millis() as u64,
        )?);

        Ok(Self {
            token,
            normalizer,
            slippage_pacing,
        })
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> FactorResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| AppError::InvalidParameter(format!("{name} `{raw}`"))),
        Err(_) => Ok(default),
    }
}
