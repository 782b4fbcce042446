// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use ethers::types::Address;

use crate::chains::{self, Chain, DEFAULT_TARGET_CHAIN_ID, MAINNET, POLYGON};
use crate::error::ConfigError;

pub const APP_TITLE: &str = "POP Supply";
pub const TOKEN_SYMBOL: &str = "POP";
pub const TOKEN_DECIMALS: u8 = 18;

pub const MAINNET_TOKEN: &str = "0xd0cd466b34a24fcb2f87676278af2005ca8a78c4";
pub const POLYGON_TOKEN: &str = "0xc5b57e9a1e7914fda753a88f24e5703e617ee50c";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_READ_TIMEOUT_SECS: u64 = 10;

/// One token contract to read, together with the endpoint that serves its chain.
#[derive(Debug, Clone)]
pub struct TokenDeployment {
    pub chain: Chain,
    pub label: String,
    pub address: Address,
    pub rpc_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub target_chain_id: u64,
    pub read_timeout: Duration,
    pub deployments: Vec<TokenDeployment>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let project_id = lookup("INFURA_PROJECT_ID")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("INFURA_PROJECT_ID"))?;

        let target_chain_id = parse_target_chain_id(lookup("CHAIN_ID").as_deref());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let read_timeout = match lookup("READ_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "READ_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => Duration::from_secs(DEFAULT_READ_TIMEOUT_SECS),
        };

        let deployments = vec![
            deployment(
                MAINNET,
                "Mainnet",
                MAINNET_TOKEN,
                lookup("MAINNET_RPC_URL"),
                &project_id,
            )?,
            deployment(
                POLYGON,
                "Polygon",
                POLYGON_TOKEN,
                lookup("POLYGON_RPC_URL"),
                &project_id,
            )?,
        ];

        Ok(Self {
            bind_addr,
            target_chain_id,
            read_timeout,
            deployments,
        })
    }
}

/// Anything unparsable or zero falls back to the default test network.
pub fn parse_target_chain_id(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|id| *id != 0)
        .unwrap_or(DEFAULT_TARGET_CHAIN_ID)
}

fn deployment(
    chain: Chain,
    network_label: &str,
    token: &str,
    rpc_override: Option<String>,
    project_id: &str,
) -> Result<TokenDeployment, ConfigError> {
    let address = token.parse::<Address>().map_err(|_| ConfigError::Invalid {
        var: "token address",
        value: token.to_string(),
    })?;
    let rpc_url = rpc_override
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| chains::infura_rpc_url(&chain, project_id));
    Ok(TokenDeployment {
        chain,
        label: format!("{TOKEN_SYMBOL} on {network_label}"),
        address,
        rpc_url,
    })
}
