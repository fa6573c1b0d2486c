mod chain;
mod config;

pub use chain::{BASE_SEPOLIA_CHAIN_ID, BASE_SEPOLIA_RPC_URL, DEFAULT_CONTRACT};
pub use config::Config;
