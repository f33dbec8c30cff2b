//! Read-only chain access, keyed by network

use std::{collections::HashMap, fmt, sync::Arc};

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    sol,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use swap_hook_api::network::NetworkId;

use crate::error::SwapPreparationError;

// ---------
// | ERC20 |
// ---------

sol! {
    /// The subset of the ERC20 interface used when preparing swaps
    #[sol(rpc)]
    interface IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 value) external returns (bool);
    }
}

// ----------
// | Reader |
// ----------

/// Reads token allowances from a chain
#[async_trait]
pub trait AllowanceReader: Send + Sync {
    /// The amount of `token` that `spender` may transfer on behalf of `owner`
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, SwapPreparationError>;
}

#[async_trait]
impl AllowanceReader for DynProvider {
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, SwapPreparationError> {
        let erc20 = IERC20::new(token, self.clone());
        erc20.allowance(owner, spender).call().await.map_err(SwapPreparationError::on_chain_read)
    }
}

// ------------
// | Registry |
// ------------

/// The chain clients available to the preparer, one per network
#[derive(Clone, Default)]
pub struct ChainClients {
    /// The clients, keyed by network
    clients: HashMap<NetworkId, Arc<dyn AllowanceReader>>,
}

impl ChainClients {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry of HTTP providers from per-network RPC URLs
    pub fn from_rpc_urls<'a>(
        rpc_urls: impl IntoIterator<Item = (NetworkId, &'a str)>,
    ) -> Result<Self, SwapPreparationError> {
        let mut clients = Self::new();
        for (network, rpc_url) in rpc_urls {
            let url: Url = rpc_url.parse().map_err(|e| {
                SwapPreparationError::setup(format!("invalid RPC URL for {network}: {e}"))
            })?;

            let provider = ProviderBuilder::new().connect_http(url).erased();
            clients.insert(network, Arc::new(provider));
        }

        Ok(clients)
    }

    /// Register the client for a network, replacing any existing one
    pub fn insert(&mut self, network: NetworkId, client: Arc<dyn AllowanceReader>) {
        self.clients.insert(network, client);
    }

    /// Get the client for a network
    pub fn get(
        &self,
        network: NetworkId,
    ) -> Result<Arc<dyn AllowanceReader>, SwapPreparationError> {
        self.clients
            .get(&network)
            .cloned()
            .ok_or(SwapPreparationError::UnsupportedNetwork(network))
    }
}

impl fmt::Debug for ChainClients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.clients.keys()).finish()
    }
}
