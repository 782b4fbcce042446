// src/chains.rs
use serde::Serialize;

pub const MAINNET_ID: u64 = 1;
pub const POLYGON_ID: u64 = 137;

/// Test network offered for connection when `CHAIN_ID` is unset.
pub const DEFAULT_TARGET_CHAIN_ID: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub id: u64,
    pub name: &'static str,
    pub network: &'static str,
    #[serde(skip)]
    pub infura_subdomain: &'static str,
}

pub const MAINNET: Chain = Chain {
    id: MAINNET_ID,
    name: "Ethereum",
    network: "homestead",
    infura_subdomain: "mainnet",
};

pub const POLYGON: Chain = Chain {
    id: POLYGON_ID,
    name: "Polygon",
    network: "matic",
    infura_subdomain: "polygon-mainnet",
};

/// Chains a wallet may be asked to connect to, mainnet first.
pub const KNOWN_CHAINS: [Chain; 6] = [
    MAINNET,
    Chain {
        id: 3,
        name: "Ropsten",
        network: "ropsten",
        infura_subdomain: "ropsten",
    },
    Chain {
        id: 4,
        name: "Rinkeby",
        network: "rinkeby",
        infura_subdomain: "rinkeby",
    },
    Chain {
        id: 5,
        name: "Goerli",
        network: "goerli",
        infura_subdomain: "goerli",
    },
    Chain {
        id: 42,
        name: "Kovan",
        network: "kovan",
        infura_subdomain: "kovan",
    },
    Chain {
        id: 11155111,
        name: "Sepolia",
        network: "sepolia",
        infura_subdomain: "sepolia",
    },
];

/// Mainnet plus the target test network, if it is one we know about.
pub fn target_chains(target_chain_id: u64) -> Vec<Chain> {
    KNOWN_CHAINS
        .iter()
        .filter(|chain| chain.id == MAINNET_ID || chain.id == target_chain_id)
        .copied()
        .collect()
}

pub fn infura_rpc_url(chain: &Chain, project_id: &str) -> String {
    format!("https://{}.infura.io/v3/{}", chain.infura_subdomain, project_id)
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletConfig {
    pub app_name: String,
    pub auto_connect: bool,
    pub chains: Vec<Chain>,
}

impl WalletConfig {
    pub fn new(app_name: impl Into<String>, target_chain_id: u64) -> Self {
        Self {
            app_name: app_name.into(),
            auto_connect: false,
            chains: target_chains(target_chain_id),
        }
    }
}
