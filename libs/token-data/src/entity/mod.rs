pub mod contract_creation;
pub mod oracle_price;
pub mod price_snapshot;
pub mod token;
pub mod token_holder;
pub mod wallet_activity;

// Re-exports for convenience
pub use contract_creation::ContractCreation;
pub use oracle_price::OracleSnapshot;
pub use price_snapshot::{HistoricalPriceSeries, MarketChart, PricePoint};
pub use token::{Token, TokenSnapshot};
pub use token_holder::{HolderDistribution, TokenHolder};
pub use wallet_activity::WalletActivitySummary;
