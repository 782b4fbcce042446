// src/supply.rs
use std::sync::Arc;
use std::time::Duration;

use ethers::providers::Middleware;
use ethers::types::{Address, U256};
use futures::future::join_all;
use serde::Serialize;

use crate::chains::Chain;
use crate::error::SupplyError;
use crate::{ERC20, utils};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadState {
    Loading,
    Error(String),
    Success(U256),
}

impl From<Result<U256, SupplyError>> for ReadState {
    fn from(result: Result<U256, SupplyError>) -> Self {
        match result {
            Ok(value) => ReadState::Success(value),
            Err(SupplyError::Timeout(_)) => ReadState::Loading,
            Err(err) => ReadState::Error(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    Loading,
    Error,
    Success,
}

impl ReadState {
    pub fn status(&self) -> ReadStatus {
        match self {
            ReadState::Loading => ReadStatus::Loading,
            ReadState::Error(_) => ReadStatus::Error,
            ReadState::Success(_) => ReadStatus::Success,
        }
    }
}

pub struct SupplySource<M: Middleware> {
    pub chain: Chain,
    pub label: String,
    pub token: Address,
    contract: ERC20<M>,
}

impl<M: Middleware + 'static> SupplySource<M> {
    pub fn new(chain: Chain, label: impl Into<String>, token: Address, client: Arc<M>) -> Self {
        Self {
            chain,
            label: label.into(),
            token,
            contract: ERC20::new(token, client),
        }
    }

    pub async fn read_total_supply(&self, timeout: Duration) -> Result<U256, SupplyError> {
        match tokio::time::timeout(timeout, self.contract.total_supply().call()).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(SupplyError::Rpc(err.to_string())),
            Err(_) => Err(SupplyError::Timeout(timeout)),
        }
    }

    pub async fn read(&self, timeout: Duration) -> ReadState {
        let result = self.read_total_supply(timeout).await;
        match &result {
            Ok(value) => tracing::debug!(
                chain_id = self.chain.id,
                token = ?self.token,
                total_supply = %value,
                "totalSupply read"
            ),
            Err(err) => tracing::warn!(
                chain_id = self.chain.id,
                token = ?self.token,
                error = %err,
                "totalSupply read failed"
            ),
        }
        ReadState::from(result)
    }
}

/// Reads every source concurrently; a failing chain never affects the others.
pub async fn read_all<M: Middleware + 'static>(
    sources: &[SupplySource<M>],
    timeout: Duration,
) -> Vec<ReadState> {
    join_all(sources.iter().map(|source| source.read(timeout))).await
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainSupply {
    pub chain_id: u64,
    pub chain_name: String,
    pub label: String,
    pub token: Address,
    pub status: ReadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub display: String,
}

impl ChainSupply {
    pub fn new<M: Middleware>(
        source: &SupplySource<M>,
        state: &ReadState,
        decimals: u8,
        mounted: bool,
    ) -> Self {
        let raw = match state {
            ReadState::Success(value) if mounted => Some(value.to_string()),
            _ => None,
        };
        Self {
            chain_id: source.chain.id,
            chain_name: source.chain.name.to_string(),
            label: source.label.clone(),
            token: source.token,
            status: state.status(),
            raw,
            display: utils::display_value(state, decimals, mounted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{MAINNET, POLYGON};
    use ethers::abi::{self, Token};
    use async_trait::async_trait;
    use ethers::providers::{JsonRpcClient, MockError, MockProvider, Provider};
    use ethers::types::Bytes;
    use serde::{Serialize, de::DeserializeOwned};

    /// Transport whose requests never complete.
    #[derive(Debug)]
    struct Stalled;

    #[async_trait]
    impl JsonRpcClient for Stalled {
        type Error = MockError;

        async fn request<T: Serialize + Send + Sync, R: DeserializeOwned + Send>(
            &self,
            _method: &str,
            _params: T,
        ) -> Result<R, MockError> {
            futures::future::pending().await
        }
    }

    fn encoded(value: U256) -> Bytes {
        Bytes::from(abi::encode(&[Token::Uint(value)]))
    }

    fn source(chain: Chain, label: &str) -> (SupplySource<Provider<MockProvider>>, MockProvider) {
        let (provider, mock) = Provider::mocked();
        let token = Address::repeat_byte(chain.id as u8);
        (SupplySource::new(chain, label, token, Arc::new(provider)), mock)
    }

    #[tokio::test]
    async fn successful_read() {
        let (source, mock) = source(MAINNET, "POP on Mainnet");
        let supply = U256::from(123_000u64) * U256::exp10(18);
        mock.push::<Bytes, _>(encoded(supply)).unwrap();

        let state = source.read(Duration::from_secs(1)).await;
        assert_eq!(state, ReadState::Success(supply));

        let view = ChainSupply::new(&source, &state, 18, true);
        assert_eq!(view.display, "123K");
        assert_eq!(view.status, ReadStatus::Success);
        assert_eq!(view.raw, Some(supply.to_string()));
    }

    #[tokio::test]
    async fn rpc_failure_is_an_error_state() {
        // nothing queued, so the mock transport fails the call
        let (source, _mock) = source(POLYGON, "POP on Polygon");
        let state = source.read(Duration::from_secs(1)).await;
        assert!(matches!(state, ReadState::Error(_)));

        let view = ChainSupply::new(&source, &state, 18, true);
        assert_eq!(view.display, utils::PLACEHOLDER);
        assert_eq!(view.label, "POP on Polygon");
        assert_eq!(view.raw, None);
    }

    #[tokio::test]
    async fn one_failure_leaves_other_reads_intact() {
        let (mainnet, mainnet_mock) = source(MAINNET, "POP on Mainnet");
        let (polygon, _polygon_mock) = source(POLYGON, "POP on Polygon");
        let supply = U256::from(2_500_000u64) * U256::exp10(18);
        mainnet_mock.push::<Bytes, _>(encoded(supply)).unwrap();

        let sources = vec![mainnet, polygon];
        let states = read_all(&sources, Duration::from_secs(1)).await;
        assert_eq!(states[0], ReadState::Success(supply));
        assert!(matches!(states[1], ReadState::Error(_)));
    }

    #[tokio::test]
    async fn stalled_read_times_out_as_loading() {
        let provider = Provider::new(Stalled);
        let source = SupplySource::new(
            MAINNET,
            "POP on Mainnet",
            Address::repeat_byte(1),
            Arc::new(provider),
        );
        let timeout = Duration::from_millis(50);

        let result = source.read_total_supply(timeout).await;
        assert!(matches!(result, Err(SupplyError::Timeout(d)) if d == timeout));

        let state = source.read(timeout).await;
        assert_eq!(state, ReadState::Loading);

        let view = ChainSupply::new(&source, &state, 18, true);
        assert_eq!(view.status, ReadStatus::Loading);
        assert_eq!(view.display, utils::PLACEHOLDER);
        assert_eq!(view.label, "POP on Mainnet");
        assert_eq!(view.raw, None);
    }

    #[test]
    fn timeout_maps_to_loading() {
        let state = ReadState::from(Err(SupplyError::Timeout(Duration::from_secs(3))));
        assert_eq!(state, ReadState::Loading);
        assert_eq!(state.status(), ReadStatus::Loading);
    }

    #[test]
    fn unmounted_view_hides_data() {
        let (source, _mock) = source(MAINNET, "POP on Mainnet");
        let state = ReadState::Success(U256::exp10(24));
        let view = ChainSupply::new(&source, &state, 18, false);
        assert_eq!(view.display, utils::PLACEHOLDER);
        assert_eq!(view.raw, None);
    }
}
