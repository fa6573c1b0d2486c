use std::sync::Arc;

use anyhow::{anyhow, Result};
use ethers::{
    contract::abigen,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{H160, H256},
};

use crate::batch::BatchRecord;

abigen!(
    TraceRegistry,
    r#"[
        function updateStatus(bytes32 batchId, uint8 status, string eventURI, bytes32 eventHash)
        function batches(bytes32 batchId) external view returns (uint8 status, string eventURI, bytes32 eventHash)
    ]"#
);

pub type ReadClient = Provider<Http>;
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Handle bound to one registry deployment on one network. All batch state
/// lives in the contract; this issues single calls and nothing else.
pub struct BatchContract<M> {
    registry: TraceRegistry<M>,
}

impl BatchContract<ReadClient> {
    pub fn read_only(eth_url: &str, address: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(eth_url)?;
        Self::bind(address, Arc::new(provider))
    }
}

impl BatchContract<SignerClient> {
    pub async fn with_signer(eth_url: &str, secret_key: &str, address: &str) -> Result<Self> {
        let provider = Provider::<Http>::try_from(eth_url)?;
        let chain_id = provider.get_chainid().await?.as_u64();

        let wallet = secret_key
            .strip_prefix("0x")
            .unwrap_or(secret_key)
            .parse::<LocalWallet>()
            .map_err(|e| anyhow!("secret key error:{}", e))?
            .with_chain_id(chain_id);

        Self::bind(address, Arc::new(SignerMiddleware::new(provider, wallet)))
    }
}

impl<M: Middleware + 'static> BatchContract<M> {
    fn bind(address: &str, client: Arc<M>) -> Result<Self> {
        let address: H160 = address
            .parse()
            .map_err(|e| anyhow!("contract address error:{}", e))?;
        Ok(Self {
            registry: TraceRegistry::new(address, client),
        })
    }

    pub fn address(&self) -> H160 {
        self.registry.address()
    }

    pub async fn chain_id(&self) -> Result<u64> {
        let id = self
            .registry
            .client()
            .get_chainid()
            .await
            .map_err(|e| anyhow!(e.to_string()))?;
        Ok(id.as_u64())
    }

    /// Sends one `updateStatus` write and returns its transaction hash.
    /// No confirmation wait; a repeat call issues a second transaction.
    pub async fn update_status(
        &self,
        batch_id: [u8; 32],
        status: u8,
        event_uri: &str,
        event_hash: [u8; 32],
    ) -> Result<H256> {
        let call = self
            .registry
            .update_status(batch_id, status, event_uri.to_string(), event_hash);
        let pending = call.send().await.map_err(|e| anyhow!(e.to_string()))?;
        Ok(pending.tx_hash())
    }

    pub async fn batch(&self, batch_id: [u8; 32]) -> Result<BatchRecord> {
        let (status, event_uri, event_hash) = self
            .registry
            .batches(batch_id)
            .call()
            .await
            .map_err(|e| anyhow!(e.to_string()))?;
        Ok(BatchRecord::new(status, event_uri, event_hash))
    }
}
