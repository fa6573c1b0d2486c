mod batch;
mod eth;

pub use batch::{parse_bytes32, BatchRecord};
pub use eth::{BatchContract, ReadClient, SignerClient};
