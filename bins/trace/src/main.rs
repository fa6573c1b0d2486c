#![deny(warnings)]

use std::net::SocketAddr;

use anyhow::{anyhow, Result};
use clap::Parser;
use config::{Config, BASE_SEPOLIA_CHAIN_ID};
use contract::BatchContract;
use json_rpc_server::serve;
use rpc_server::handle::TraceHandle;

#[derive(Debug, Parser)]
/// serve batch queries against the registry contract
pub struct CommandLine {
    #[clap(long)]
    pub config: String,
    #[clap(long, default_value = "127.0.0.1")]
    pub listen_ip: String,
    #[clap(long, default_value_t = 8650)]
    pub api_port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cmd = CommandLine::parse();
    let cfg = Config::new(&cmd.config)?;

    let registry = BatchContract::read_only(&cfg.eth_url, cfg.contract_address())?;
    let chain_id = registry.chain_id().await?;
    if chain_id != BASE_SEPOLIA_CHAIN_ID {
        log::warn!(
            "{} reports chain id {}, expected {}",
            cfg.eth_url,
            chain_id,
            BASE_SEPOLIA_CHAIN_ID
        );
    }
    log::info!(
        "trace querying {:?} on chain {} via {}",
        registry.address(),
        chain_id,
        cfg.eth_url
    );

    let handle = TraceHandle::new(registry, chain_id);
    let addr: SocketAddr = format!("{}:{}", cmd.listen_ip, cmd.api_port).parse()?;
    log::info!("trace api server listening on {}", addr);

    serve(&addr, handle).await.map_err(|e| anyhow!("{}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_defaults() {
        let cmd =
            CommandLine::try_parse_from(["trace", "--config", "config/trace.toml"]).unwrap();
        assert_eq!(cmd.listen_ip, "127.0.0.1");
        assert_eq!(cmd.api_port, 8650);
    }
}
