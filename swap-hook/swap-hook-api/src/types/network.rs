//! Network identifiers for the chains on which swaps may be prepared

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The error message emitted when parsing an unknown network identifier
const ERR_UNKNOWN_NETWORK: &str = "unknown network id";

/// A network on which tokens live and transactions are executed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkId {
    /// Celo mainnet
    CeloMainnet,
    /// The Celo Alfajores testnet
    CeloAlfajores,
    /// Ethereum mainnet
    EthereumMainnet,
    /// The Ethereum Sepolia testnet
    EthereumSepolia,
    /// Arbitrum One
    ArbitrumOne,
    /// The Arbitrum Sepolia testnet
    ArbitrumSepolia,
    /// OP mainnet
    OpMainnet,
    /// The OP Sepolia testnet
    OpSepolia,
    /// Polygon PoS mainnet
    PolygonPosMainnet,
    /// The Polygon PoS Amoy testnet
    PolygonPosAmoy,
    /// Base mainnet
    BaseMainnet,
    /// The Base Sepolia testnet
    BaseSepolia,
}

impl NetworkId {
    /// All supported networks
    pub const ALL: [NetworkId; 12] = [
        NetworkId::CeloMainnet,
        NetworkId::CeloAlfajores,
        NetworkId::EthereumMainnet,
        NetworkId::EthereumSepolia,
        NetworkId::ArbitrumOne,
        NetworkId::ArbitrumSepolia,
        NetworkId::OpMainnet,
        NetworkId::OpSepolia,
        NetworkId::PolygonPosMainnet,
        NetworkId::PolygonPosAmoy,
        NetworkId::BaseMainnet,
        NetworkId::BaseSepolia,
    ];

    /// The string identifier of the network
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::CeloMainnet => "celo-mainnet",
            NetworkId::CeloAlfajores => "celo-alfajores",
            NetworkId::EthereumMainnet => "ethereum-mainnet",
            NetworkId::EthereumSepolia => "ethereum-sepolia",
            NetworkId::ArbitrumOne => "arbitrum-one",
            NetworkId::ArbitrumSepolia => "arbitrum-sepolia",
            NetworkId::OpMainnet => "op-mainnet",
            NetworkId::OpSepolia => "op-sepolia",
            NetworkId::PolygonPosMainnet => "polygon-pos-mainnet",
            NetworkId::PolygonPosAmoy => "polygon-pos-amoy",
            NetworkId::BaseMainnet => "base-mainnet",
            NetworkId::BaseSepolia => "base-sepolia",
        }
    }

    /// The EVM chain id of the network
    pub fn chain_id(&self) -> u64 {
        match self {
            NetworkId::CeloMainnet => 42220,
            NetworkId::CeloAlfajores => 44787,
            NetworkId::EthereumMainnet => 1,
            NetworkId::EthereumSepolia => 11155111,
            NetworkId::ArbitrumOne => 42161,
            NetworkId::ArbitrumSepolia => 421614,
            NetworkId::OpMainnet => 10,
            NetworkId::OpSepolia => 11155420,
            NetworkId::PolygonPosMainnet => 137,
            NetworkId::PolygonPosAmoy => 80002,
            NetworkId::BaseMainnet => 8453,
            NetworkId::BaseSepolia => 84532,
        }
    }
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkId::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .ok_or_else(|| format!("{ERR_UNKNOWN_NETWORK}: {s}"))
    }
}
