use async_trait::async_trait;
use contract::{parse_bytes32, BatchContract, ReadClient};
use json_rpc_server::{Handle, RPCError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub struct TraceHandle {
    registry: BatchContract<ReadClient>,
    chain_id: u64,
}

impl TraceHandle {
    pub fn new(registry: BatchContract<ReadClient>, chain_id: u64) -> Self {
        Self { registry, chain_id }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceHandleRequest {
    BatchIdArray((String,)),
    BatchId { batch_id: String },
}

impl TraceHandleRequest {
    /// None for an empty or non-bytes32 id; the contract is only queried
    /// for ids this accepts.
    pub fn batch_id(self) -> Option<[u8; 32]> {
        let raw = match self {
            Self::BatchIdArray((batch_id,)) => batch_id,
            Self::BatchId { batch_id } => batch_id,
        };
        if raw.is_empty() {
            return None;
        }
        parse_bytes32(&raw).ok()
    }
}

#[async_trait]
impl Handle for TraceHandle {
    type Request = TraceHandleRequest;
    type Response = Value;

    async fn handle(
        &self,
        method: &str,
        req: Option<Self::Request>,
    ) -> std::result::Result<Option<Self::Response>, RPCError> {
        match method {
            "trace_getBatch" => {
                let batch_id = req
                    .and_then(TraceHandleRequest::batch_id)
                    .ok_or(RPCError::invalid_params())?;

                let record = self
                    .registry
                    .batch(batch_id)
                    .await
                    .map_err(|e| RPCError::internal_error(e.to_string()))?;
                log::info!("query batch returned status {}", record.status);

                let value = serde_json::to_value(&record)
                    .map_err(|e| RPCError::internal_error(e.to_string()))?;
                Ok(Some(value))
            }
            "trace_getTarget" => Ok(Some(json!({
                "address": format!("{:?}", self.registry.address()),
                "chainId": self.chain_id,
            }))),
            _ => Err(RPCError::unknown_method()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x642f924623722eBDaB9E02400ffa655C2B39b070";
    const BATCH_ID: &str = "0x00000000000000000000000000000000000000000000000000000000abc12300";

    fn test_handle() -> TraceHandle {
        // Nothing listens here; valid requests must fail before any dial.
        let registry = BatchContract::read_only("http://127.0.0.1:9", ADDR).unwrap();
        TraceHandle::new(registry, 31337)
    }

    #[test]
    fn request_accepts_both_param_shapes() {
        let arr: TraceHandleRequest =
            serde_json::from_str(&format!(r#"["{}"]"#, BATCH_ID)).unwrap();
        let obj: TraceHandleRequest =
            serde_json::from_str(&format!(r#"{{"batch_id":"{}"}}"#, BATCH_ID)).unwrap();
        assert_eq!(arr.clone().batch_id(), obj.batch_id());
        assert!(arr.batch_id().is_some());
    }

    #[test]
    fn empty_or_malformed_ids_never_reach_a_read() {
        // A rejected id short-circuits to invalid_params; internal_error is
        // only reachable once batch_id() has accepted the input.
        assert!(TraceHandleRequest::BatchIdArray((String::new(),))
            .batch_id()
            .is_none());
        assert!(TraceHandleRequest::BatchIdArray(("0xabc123".into(),))
            .batch_id()
            .is_none());
        assert!(TraceHandleRequest::BatchId {
            batch_id: "zz".into()
        }
        .batch_id()
        .is_none());
    }

    #[tokio::test]
    async fn invalid_params_are_rejected_by_the_handle() {
        let handle = test_handle();
        let req = TraceHandleRequest::BatchIdArray((String::new(),));
        assert!(handle.handle("trace_getBatch", Some(req)).await.is_err());
        assert!(handle.handle("trace_getBatch", None).await.is_err());
    }

    #[tokio::test]
    async fn target_reports_the_probed_network() {
        let handle = test_handle();
        let value = match handle.handle("trace_getTarget", None).await {
            Ok(Some(value)) => value,
            _ => panic!("unexpected target response"),
        };
        assert_eq!(value["address"], ADDR.to_lowercase());
        assert_eq!(value["chainId"], 31337);
    }

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let handle = test_handle();
        assert!(handle.handle("trace_dropBatch", None).await.is_err());
    }
}
