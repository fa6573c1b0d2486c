use std::{fs::File, io::Read};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::chain::{BASE_SEPOLIA_RPC_URL, DEFAULT_CONTRACT};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_eth_url")]
    pub eth_url: String,

    pub contract: Option<String>,
}

fn default_eth_url() -> String {
    BASE_SEPOLIA_RPC_URL.into()
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let mut file = File::open(path)?;

        let mut str = String::new();
        file.read_to_string(&mut str)?;

        Ok(toml::from_str(&str)?)
    }

    pub fn contract_address(&self) -> &str {
        self.contract.as_deref().unwrap_or(DEFAULT_CONTRACT)
    }
}
