use alloy::primitives::TxHash;
use chrono::{DateTime, Utc};

/// Deployment record of a token contract
#[derive(Debug, Clone, PartialEq)]
pub struct ContractCreation {
    pub timestamp: DateTime<Utc>,
    pub block_number: u64,
    pub tx_hash: TxHash,
}

impl ContractCreation {
    /// Whole days elapsed between deployment and `now`
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        now.signed_duration_since(self.timestamp).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_age_truncates_partial_days() {
        let now = Utc::now();
        let creation = ContractCreation {
            timestamp: now - Duration::days(41) - Duration::hours(23),
            block_number: 18_000_000,
            tx_hash: TxHash::ZERO,
        };

        assert_eq!(creation.age_days(now), 41);
    }
}
