use alloy::primitives::Address;

/// One row of the top-holder table
#[derive(Debug, Clone, PartialEq)]
pub struct TokenHolder {
    pub address: Address,
    /// Raw token balance as reported by the provider
    pub balance: f64,
    /// Percentage of total supply (0-100)
    pub share: f64,
}

/// Top-N holders of a token, in provider order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolderDistribution {
    holders: Vec<TokenHolder>,
}

impl HolderDistribution {
    pub fn new(holders: Vec<TokenHolder>) -> Self {
        Self { holders }
    }

    /// Holders ordered by ascending balance
    pub fn sorted_by_balance(&self) -> Vec<TokenHolder> {
        let mut holders = self.holders.clone();
        holders.sort_by(|a, b| a.balance.total_cmp(&b.balance));
        holders
    }
}
