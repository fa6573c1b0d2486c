/// Both programs target a single fixed test network.
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

pub const BASE_SEPOLIA_RPC_URL: &str = "https://sepolia.base.org";

/// Registry address used when the config file leaves `contract` unset.
pub const DEFAULT_CONTRACT: &str = "0x9bd03768a7DCc129555dE410FF8E85528A4F88b5";
