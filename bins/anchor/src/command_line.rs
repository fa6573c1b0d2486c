use std::env;

use anyhow::{bail, Result};
use clap::Parser;
use config::BASE_SEPOLIA_RPC_URL;
use contract::{parse_bytes32, BatchContract};

pub const SECRET_KEY_ENV: &str = "ANCHOR_SECRET_KEY";
pub const CONTRACT_ENV: &str = "CONTRACT";

#[derive(Debug, Parser)]
/// anchor one batch status update to the registry contract
pub struct CommandLine {
    /// bytes32 batch identifier (hex)
    #[clap(long)]
    batch: String,

    /// status code, 3 = InTransit
    #[clap(long, default_value_t = 3)]
    status: u8,

    /// off-chain pointer to the event details
    #[clap(long = "eventURI")]
    event_uri: String,

    /// bytes32 digest of the event payload (hex)
    #[clap(long = "eventHash")]
    event_hash: String,

    #[clap(long, default_value = BASE_SEPOLIA_RPC_URL)]
    eth_url: String,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        let (secret_key, contract_addr) = match (
            env::var(SECRET_KEY_ENV).ok(),
            env::var(CONTRACT_ENV).ok(),
        ) {
            (Some(s), Some(c)) if !s.is_empty() && !c.is_empty() => (s, c),
            _ => bail!("Missing {} or {} in environment.", SECRET_KEY_ENV, CONTRACT_ENV),
        };

        let batch_id = parse_bytes32(&self.batch)?;
        let event_hash = parse_bytes32(&self.event_hash)?;

        let registry =
            BatchContract::with_signer(&self.eth_url, &secret_key, &contract_addr).await?;
        log::info!(
            "anchoring batch {} with status {} to {:?}",
            self.batch,
            self.status,
            registry.address()
        );

        let tx_hash = registry
            .update_status(batch_id, self.status, &self.event_uri, event_hash)
            .await?;
        println!("Anchored tx: {:?}", tx_hash);
        Ok(())
    }
}
