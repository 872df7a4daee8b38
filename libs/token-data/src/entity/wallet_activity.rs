use serde::Deserialize;
use serde_json::Value;

use crate::error::DataError;

/// Aggregate on-chain activity for a token contract across all known wallets
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletActivitySummary {
    #[serde(default)]
    transactions: Option<TotalCount>,
    #[serde(default)]
    token_transfers: Option<TotalCount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TotalCount {
    /// Sent as a decimal string by the indexer, occasionally as a number
    #[serde(default)]
    total: Option<Value>,
}

impl WalletActivitySummary {
    pub fn transactions(&self) -> Result<u64, DataError> {
        total(self.transactions.as_ref(), "transactions.total")
    }

    pub fn token_transfers(&self) -> Result<u64, DataError> {
        total(self.token_transfers.as_ref(), "token_transfers.total")
    }
}

fn total(count: Option<&TotalCount>, field: &str) -> Result<u64, DataError> {
    match count.and_then(|count| count.total.as_ref()) {
        Some(Value::String(raw)) => raw
            .parse::<u64>()
            .map_err(|_| DataError::InvalidPayload(format!("{field}: `{raw}` is not a count"))),
        Some(Value::Number(number)) => number
            .as_u64()
            .ok_or_else(|| DataError::InvalidPayload(format!("{field}: `{number}` is not a count"))),
        _ => Err(DataError::missing(field)),
    }
}
