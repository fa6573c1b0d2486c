use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// A batch record as the registry contract returns it. The contract owns the
/// record; nothing here is validated beyond what ABI decoding enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub status: u8,
    #[serde(rename = "eventURI")]
    pub event_uri: String,
    #[serde(rename = "eventHash")]
    pub event_hash: String,
}

impl BatchRecord {
    pub fn new(status: u8, event_uri: String, event_hash: [u8; 32]) -> Self {
        Self {
            status,
            event_uri,
            event_hash: format!("0x{}", hex::encode(event_hash)),
        }
    }
}

pub fn parse_bytes32(s: &str) -> Result<[u8; 32]> {
    let data = hex::decode(s.strip_prefix("0x").unwrap_or(s))?;
    <[u8; 32]>::try_from(data).map_err(|v| anyhow!("expected 32 bytes, got {}", v.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH_ID: &str = "0x00000000000000000000000000000000000000000000000000000000abc12300";

    #[test]
    fn parse_bytes32_accepts_prefixed_and_bare() {
        let id = parse_bytes32(BATCH_ID).unwrap();
        assert_eq!(id[28..31], [0xab, 0xc1, 0x23]);
        assert_eq!(parse_bytes32(&BATCH_ID[2..]).unwrap(), id);
    }

    #[test]
    fn parse_bytes32_rejects_bad_input() {
        assert!(parse_bytes32("").is_err());
        assert!(parse_bytes32("0xabc123").is_err());
        assert!(parse_bytes32("zz").is_err());
        assert!(parse_bytes32(&format!("{}00", BATCH_ID)).is_err());
    }

    #[test]
    fn record_json_shape() {
        let record = BatchRecord::new(3, "ipfs://x".into(), [0u8; 32]);
        let json = serde_json::to_string_pretty(&record).unwrap();
        assert!(json.contains("\"status\": 3"));
        assert!(json.contains("\"eventURI\": \"ipfs://x\""));
        assert!(json.contains(&format!("\"eventHash\": \"0x{}\"", "00".repeat(32))));
    }
}
